//! Digital adapter for the Web of Digital Twins
//!
//! Wires a [`wodt_dtkg::DtkgEngine`] and a [`wodt_dtd::DescriptorBuilder`]
//! to a twin runtime: configuration loading, declarative semantics and
//! dispatch of state changes.
//!
//! ```no_run
//! use std::path::Path;
//! use wodt_adapter::{AdapterConfig, ConfigOverrides, DigitalTwinState, WodtAdapter};
//!
//! # fn main() -> wodt_adapter::Result<()> {
//! let config = AdapterConfig::load(Path::new("twin.toml"), &ConfigOverrides::default())?;
//! let adapter = WodtAdapter::from_config(config);
//! adapter.register_platforms();
//! adapter.on_sync(&DigitalTwinState::default());
//! println!("{}", adapter.current_dtkg());
//! # Ok(())
//! # }
//! ```

mod adapter;
mod config;
mod error;
mod mapping;
mod state;

pub use adapter::{UpdateReport, WodtAdapter};
pub use config::{
    load_config, ActionMapping, AdapterConfig, AdapterFileConfig, ConfigOverrides,
    PropertyMapping, RelationshipMapping, SemanticsConfig, TwinFileConfig, ValueDatatype,
    DEFAULT_PORT, DEFAULT_VERSION,
};
pub use error::{AdapterError, Result};
pub use mapping::DeclarativeSemantics;
pub use state::{DigitalTwinState, Operation, StateChange, StateResource};
