//! Error types for the adapter crate

use std::path::PathBuf;
use thiserror::Error;
use wodt_dtd::DtdError;
use wodt_dtkg::DtkgError;

/// Result type for adapter operations
pub type Result<T> = std::result::Result<T, AdapterError>;

/// Errors that can occur while configuring or driving the adapter
#[derive(Error, Debug)]
pub enum AdapterError {
    /// Missing or invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Config or state file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// TOML parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Descriptor error
    #[error(transparent)]
    Dtd(#[from] DtdError),

    /// Knowledge graph error
    #[error(transparent)]
    Dtkg(#[from] DtkgError),
}

impl AdapterError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an IO error for a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
