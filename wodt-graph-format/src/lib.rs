//! RDF graph formatters
//!
//! This crate renders a `wodt_graph_ir::Graph` as Turtle. The output is the
//! canonical serialization of a Digital Twin Knowledge Graph: it depends only
//! on the set of triples in the graph, never on insertion order, and an empty
//! graph renders as the empty string.
//!
//! # Example
//!
//! ```
//! use wodt_graph_ir::{Fact, Graph, Term};
//! use wodt_graph_format::{format_turtle, TurtleFormatConfig};
//!
//! let mut graph = Graph::new();
//! graph.insert_facts(
//!     &Term::iri("http://example.com/dt"),
//!     &[Fact::iri("https://brickschema.org/schema/Brick#hasLocation", "http://room.it")],
//! );
//!
//! let config = TurtleFormatConfig::new()
//!     .with_prefix("brick", "https://brickschema.org/schema/Brick#");
//! let ttl = format_turtle(&graph, &config);
//! assert!(ttl.contains("brick:hasLocation <http://room.it>"));
//! ```

mod policy;
mod turtle;

pub use policy::BlankNodePolicy;
pub use turtle::{format_turtle, TurtleFormatConfig};
