//! Platforms the digital twin is registered to

use parking_lot::RwLock;
use std::collections::BTreeSet;

/// Concurrent set of platform URIs
///
/// Guarded by its own lock, independent of the knowledge graph.
#[derive(Debug, Default)]
pub struct PlatformRegistry {
    platforms: RwLock<BTreeSet<String>>,
}

impl PlatformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a platform; returns `true` if it was not registered yet
    pub fn add(&self, uri: impl Into<String>) -> bool {
        let uri = uri.into();
        let inserted = self.platforms.write().insert(uri.clone());
        if inserted {
            tracing::info!(platform = %uri, "registered to platform");
        }
        inserted
    }

    /// Forget a platform; returns `true` if it was registered
    pub fn remove(&self, uri: &str) -> bool {
        let removed = self.platforms.write().remove(uri);
        if removed {
            tracing::info!(platform = %uri, "unregistered from platform");
        }
        removed
    }

    pub fn contains(&self, uri: &str) -> bool {
        self.platforms.read().contains(uri)
    }

    /// Copy of the registered platforms, sorted
    pub fn get_all(&self) -> Vec<String> {
        self.platforms.read().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.platforms.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.read().is_empty()
    }
}
