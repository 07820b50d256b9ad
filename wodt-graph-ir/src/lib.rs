//! In-memory RDF graph for a single Digital Twin
//!
//! This crate provides the canonical types the knowledge graph engine stores
//! and the formatters consume.
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form. Compaction
//!    is handled by formatters at output time.
//!
//! 2. **Explicit datatypes** - Literals always have an explicit datatype, never
//!    optional. Plain strings use `xsd:string`.
//!
//! 3. **Closed object kinds** - A fact's object is an IRI, a literal or a blank
//!    node carrying nested facts ([`FactObject`]). Every walk over facts
//!    matches all three.
//!
//! 4. **Bag semantics** - [`Graph`] keeps duplicate edges so removal is exact.
//!
//! # Example
//!
//! ```
//! use wodt_graph_ir::{BlankNode, Fact, Graph, Term};
//!
//! let twin = Term::iri("http://example.com/dt");
//! let facts = vec![Fact::blank(
//!     "https://saref.etsi.org/core/hasPropertyValue",
//!     BlankNode::new("luminosityValue")
//!         .add_fact(Fact::term("https://saref.etsi.org/core/hasValue", Term::double(100.0))),
//! )];
//!
//! let mut graph = Graph::new();
//! graph.insert_facts(&twin, &facts);
//! assert_eq!(graph.len(), 2);
//! ```

pub mod datatype;
mod fact;
mod graph;
mod term;

pub use datatype::Datatype;
pub use fact::{blank_ids, BlankNode, Fact, FactObject};
pub use graph::{Edge, Graph};
pub use term::{BlankId, LiteralValue, Term};
