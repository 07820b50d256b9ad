//! Adapter configuration
//!
//! Loaded from TOML (or JSON, by extension) and merged with command line
//! overrides.
//!
//! ## Precedence (highest to lowest)
//!
//! 1. Overrides (CLI flags)
//! 2. Config file
//! 3. Defaults
//!
//! ```toml
//! platforms = ["http://localhost:4000"]
//!
//! [twin]
//! uri = "http://localhost:3000"
//! version = "1.0.0"
//! physical_asset_id = "lampPA"
//! port = 3000
//!
//! [semantics]
//! types = ["https://w3id.org/rec/Lamp"]
//!
//! [semantics.properties.luminosity]
//! domain_tag = "https://purl.org/onto/LuminosityFlux"
//! unit = "https://qudt.org/2.1/vocab/unit/LM"
//! datatype = "double"
//!
//! [semantics.relationships.isInRoom]
//! predicate = "https://brickschema.org/schema/Brick#hasLocation"
//!
//! [semantics.actions.switch]
//! domain_tag = "https://purl.org/onto/SwitchCommand"
//! ```

use crate::error::{AdapterError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use url::Url;
use wodt_dtd::DtVersion;

/// Port used when neither the file nor the overrides set one
pub const DEFAULT_PORT: u16 = 3000;

/// Version used when neither the file nor the overrides set one
pub const DEFAULT_VERSION: &str = "1.0.0";

// ---------------------------------------------------------------------------
// File config serde types (all Option: absence means "not set in file")
// ---------------------------------------------------------------------------

/// Top-level config file structure
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct AdapterFileConfig {
    /// `[twin]`
    #[serde(default)]
    pub twin: Option<TwinFileConfig>,

    /// Platforms to register to at startup
    pub platforms: Option<Vec<String>>,

    /// `[semantics]`
    #[serde(default)]
    pub semantics: Option<SemanticsConfig>,
}

/// The `[twin]` section
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct TwinFileConfig {
    pub uri: Option<String>,
    pub version: Option<String>,
    pub physical_asset_id: Option<String>,
    pub port: Option<u16>,
}

/// Declarative mapping table, the `[semantics]` section
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SemanticsConfig {
    /// Class IRIs of the twin
    #[serde(default)]
    pub types: Vec<String>,

    /// Extra prefixes for the Turtle output
    #[serde(default)]
    pub prefixes: BTreeMap<String, String>,

    /// Property name -> mapping
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyMapping>,

    /// Relationship name -> mapping
    #[serde(default)]
    pub relationships: BTreeMap<String, RelationshipMapping>,

    /// Action name -> mapping
    #[serde(default)]
    pub actions: BTreeMap<String, ActionMapping>,
}

/// How a property is represented in the knowledge graph
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PropertyMapping {
    /// Individual for the property; also its domain tag
    pub domain_tag: String,

    /// Unit of measure IRI for the value node
    #[serde(default)]
    pub unit: Option<String>,

    /// Coerce values to this literal type
    #[serde(default)]
    pub datatype: Option<ValueDatatype>,
}

/// Literal type a property value is coerced to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueDatatype {
    Double,
    Integer,
    Boolean,
    String,
}

/// How a relationship is represented in the knowledge graph
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RelationshipMapping {
    /// Predicate linking the twin to the target twin
    pub predicate: String,

    /// Domain tag; defaults to the predicate
    #[serde(default)]
    pub domain_tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ActionMapping {
    pub domain_tag: String,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load a config file. Detects format by extension: `.json` → JSON,
/// everything else → TOML.
pub fn load_config(path: &Path) -> Result<AdapterFileConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AdapterError::io(path, e))?;

    if content.trim().is_empty() {
        return Ok(AdapterFileConfig::default());
    }

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(serde_json::from_str(&content)?)
    } else {
        Ok(toml::from_str(&content)?)
    }
}

// ---------------------------------------------------------------------------
// Resolved config
// ---------------------------------------------------------------------------

/// Values supplied on the command line
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub twin_uri: Option<String>,
    pub physical_asset_id: Option<String>,
    pub port: Option<u16>,
    /// Added to the platforms listed in the file
    pub platforms: Vec<String>,
}

/// Fully resolved adapter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterConfig {
    pub twin_uri: String,
    pub version: DtVersion,
    pub physical_asset_id: String,
    pub port: u16,
    pub platforms: Vec<String>,
    pub semantics: SemanticsConfig,
}

impl AdapterConfig {
    /// Load `path` and resolve it against `overrides`
    pub fn load(path: &Path, overrides: &ConfigOverrides) -> Result<Self> {
        let file = load_config(path)?;
        tracing::debug!(path = %path.display(), "loaded adapter config");
        Self::resolve(file, overrides)
    }

    /// Merge file values, overrides and defaults, then validate
    pub fn resolve(file: AdapterFileConfig, overrides: &ConfigOverrides) -> Result<Self> {
        let twin = file.twin.unwrap_or_default();

        let twin_uri = overrides
            .twin_uri
            .clone()
            .or(twin.uri)
            .ok_or_else(|| AdapterError::config("twin.uri is required"))?;
        let physical_asset_id = overrides
            .physical_asset_id
            .clone()
            .or(twin.physical_asset_id)
            .ok_or_else(|| AdapterError::config("twin.physical_asset_id is required"))?;
        let version: DtVersion = twin
            .version
            .as_deref()
            .unwrap_or(DEFAULT_VERSION)
            .parse()?;
        let port = overrides.port.or(twin.port).unwrap_or(DEFAULT_PORT);

        let mut platforms = file.platforms.unwrap_or_default();
        for platform in &overrides.platforms {
            if !platforms.contains(platform) {
                platforms.push(platform.clone());
            }
        }

        let config = Self {
            twin_uri,
            version,
            physical_asset_id,
            port,
            platforms,
            semantics: file.semantics.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check URIs, port and mapping table
    pub fn validate(&self) -> Result<()> {
        check_uri("twin.uri", &self.twin_uri)?;
        if self.physical_asset_id.trim().is_empty() {
            return Err(AdapterError::config("twin.physical_asset_id must not be empty"));
        }
        if self.port == 0 {
            return Err(AdapterError::config("twin.port must not be 0"));
        }
        for platform in &self.platforms {
            check_uri("platforms", platform)?;
        }

        let semantics = &self.semantics;
        for class in &semantics.types {
            check_uri("semantics.types", class)?;
        }
        for (name, mapping) in &semantics.properties {
            check_uri(&format!("semantics.properties.{name}.domain_tag"), &mapping.domain_tag)?;
            if let Some(unit) = &mapping.unit {
                check_uri(&format!("semantics.properties.{name}.unit"), unit)?;
            }
        }
        for (name, mapping) in &semantics.relationships {
            check_uri(&format!("semantics.relationships.{name}.predicate"), &mapping.predicate)?;
            if let Some(tag) = &mapping.domain_tag {
                check_uri(&format!("semantics.relationships.{name}.domain_tag"), tag)?;
            }
        }
        for (name, mapping) in &semantics.actions {
            check_uri(&format!("semantics.actions.{name}.domain_tag"), &mapping.domain_tag)?;
        }
        Ok(())
    }
}

fn check_uri(field: &str, value: &str) -> Result<()> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| AdapterError::config(format!("{field}: '{value}' is not a valid URI ({e})")))
}
