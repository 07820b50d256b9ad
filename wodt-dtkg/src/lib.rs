//! Digital Twin Knowledge Graph (DTKG) engine
//!
//! Keeps a live RDF mirror of a digital twin's properties, relationships and
//! actions, centered on a single twin resource.
//!
//! - [`DigitalTwinSemantics`] maps state elements to facts (supplied per
//!   deployment)
//! - [`TripleStore`] holds the facts plus a registry per element kind, under
//!   one reader/writer lock
//! - [`DtkgEngine`] ties the two together and notifies [`DtkgObserver`]s
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use wodt_dtkg::{DigitalTwinSemantics, DtkgEngine, PropertyState, RelationshipInstance};
//! use wodt_graph_ir::{Fact, Term};
//!
//! struct Switch;
//!
//! impl DigitalTwinSemantics for Switch {
//!     fn digital_twin_types(&self) -> Vec<String> {
//!         vec!["https://saref.etsi.org/core/Switch".to_string()]
//!     }
//!     fn property_domain_tag(&self, _: &str) -> Option<String> { None }
//!     fn relationship_domain_tag(&self, _: &str) -> Option<String> { None }
//!     fn action_domain_tag(&self, _: &str) -> Option<String> { None }
//!     fn map_property(&self, p: &PropertyState) -> Option<Vec<Fact>> {
//!         if p.key != "on" {
//!             return None;
//!         }
//!         Some(vec![Fact::term("http://ex.org/on", p.value.to_term()?)])
//!     }
//!     fn map_relationship(&self, _: &RelationshipInstance) -> Option<Vec<Fact>> { None }
//! }
//!
//! let engine = DtkgEngine::new("http://example.com/switch", Arc::new(Switch));
//! engine.add_property(&PropertyState::new("on", true)).unwrap();
//! assert!(engine.current_dtkg().contains("<http://ex.org/on> true"));
//! ```

mod engine;
mod error;
mod observer;
mod semantics;
mod store;

pub use engine::DtkgEngine;
pub use error::{DtkgError, RegistryKind, Result};
pub use observer::{BroadcastObserver, DtkgObserver, ObserverSet};
pub use semantics::{
    ActionState, DigitalTwinSemantics, PropertyState, RelationshipInstance, StateValue,
};
pub use store::{RegistrySnapshot, TripleStore};
