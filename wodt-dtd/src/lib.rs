//! Digital Twin Description (DTD) for the Web of Digital Twins
//!
//! The DTD advertises a twin's properties, relationships and actions as a
//! W3C WoT Thing Description 1.1, together with links to the platforms the
//! twin is registered to and to its live knowledge graph.
//!
//! - [`DescriptorBuilder`] recomputes the descriptor on every request
//! - [`PlatformRegistry`] tracks platform registrations
//! - [`DtVersion`] and the URI helpers support both

mod descriptor;
mod error;
mod platform;
mod uri;
mod version;

pub use descriptor::{
    ActionAffordance, DescriptorBuilder, Form, Link, PropertyAffordance, RootForm,
    SecurityScheme, ThingDescription, TwinMetadata, VersionInfo, AVAILABLE_ACTIONS_PROPERTY,
};
pub use error::{DtdError, Result};
pub use platform::PlatformRegistry;
pub use uri::{uri_relative_resolve, websocket_uri};
pub use version::DtVersion;
