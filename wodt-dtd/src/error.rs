//! Error types for the descriptor crate

use thiserror::Error;

/// Result type for descriptor operations
pub type Result<T> = std::result::Result<T, DtdError>;

/// Errors that can occur while building a Digital Twin Description
#[derive(Error, Debug)]
pub enum DtdError {
    /// Version numbers out of range or malformed
    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    /// URI that cannot be parsed or resolved
    #[error("Invalid URI '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },

    /// Descriptor could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DtdError {
    /// Create an invalid version error
    pub fn invalid_version(msg: impl Into<String>) -> Self {
        Self::InvalidVersion(msg.into())
    }

    /// Create an invalid URI error
    pub fn invalid_uri(uri: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::InvalidUri {
            uri: uri.into(),
            reason: reason.to_string(),
        }
    }
}
