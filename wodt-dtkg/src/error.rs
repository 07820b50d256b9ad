//! Error types for the knowledge graph engine

use std::fmt;
use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, DtkgError>;

/// Which registry a logical key belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegistryKind {
    Property,
    Relationship,
    Action,
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RegistryKind::Property => "property",
            RegistryKind::Relationship => "relationship",
            RegistryKind::Action => "action",
        })
    }
}

/// Errors that can occur while mutating the knowledge graph
///
/// A rejected mutation always leaves the graph and registries unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DtkgError {
    /// The key is already represented in the graph
    #[error("{kind} '{key}' is already present")]
    DuplicateKey { kind: RegistryKind, key: String },

    /// The semantic mapper has no mapping for the element
    #[error("no semantic mapping available for {kind} '{key}'")]
    MappingUnavailable { kind: RegistryKind, key: String },

    /// A blank node id introduced by the key is already used in the graph
    #[error("blank node '{id}' of '{key}' is already in use")]
    BlankNodeConflict { key: String, id: String },

    /// A subscriber could not accept a notification
    #[error("notification failed: {0}")]
    Notify(String),
}

impl DtkgError {
    /// Create a duplicate key error
    pub fn duplicate_key(kind: RegistryKind, key: impl Into<String>) -> Self {
        Self::DuplicateKey {
            kind,
            key: key.into(),
        }
    }

    /// Create a mapping unavailable error
    pub fn mapping_unavailable(kind: RegistryKind, key: impl Into<String>) -> Self {
        Self::MappingUnavailable {
            kind,
            key: key.into(),
        }
    }

    /// Create a blank node conflict error
    pub fn blank_node_conflict(key: impl Into<String>, id: impl Into<String>) -> Self {
        Self::BlankNodeConflict {
            key: key.into(),
            id: id.into(),
        }
    }

    /// Create a notification error
    pub fn notify(msg: impl Into<String>) -> Self {
        Self::Notify(msg.into())
    }

    /// Check if this is a duplicate key error
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }
}
