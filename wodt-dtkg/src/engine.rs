//! Digital Twin Knowledge Graph engine
//!
//! Maps state elements with the injected [`DigitalTwinSemantics`], commits the
//! result into the [`TripleStore`] and pushes the new serialization to the
//! registered observers.
//!
//! Per key, the lifecycle is `Absent -> Present (add) -> Present (update) ->
//! Absent (remove)`. Invalid transitions are reported as
//! [`DtkgError::DuplicateKey`] for a second add and as `false` for a remove or
//! update of an absent key.

use crate::error::{DtkgError, RegistryKind, Result};
use crate::observer::{DtkgObserver, ObserverSet};
use crate::semantics::{ActionState, DigitalTwinSemantics, PropertyState, RelationshipInstance};
use crate::store::{RegistrySnapshot, TripleStore};
use std::sync::Arc;
use wodt_graph_format::TurtleFormatConfig;
use wodt_graph_ir::{Fact, Term};
use wodt_vocab::wodt;

/// Knowledge graph of one digital twin
pub struct DtkgEngine {
    twin_uri: String,
    semantics: Arc<dyn DigitalTwinSemantics>,
    store: TripleStore,
    observers: ObserverSet,
}

impl DtkgEngine {
    /// Create an engine for the twin identified by `twin_uri`
    pub fn new(twin_uri: impl Into<String>, semantics: Arc<dyn DigitalTwinSemantics>) -> Self {
        let twin_uri = twin_uri.into();
        let format = semantics
            .prefixes()
            .into_iter()
            .fold(TurtleFormatConfig::new().with_default_prefixes(), |config, (prefix, ns)| {
                config.with_prefix(prefix, ns)
            });
        Self {
            store: TripleStore::new(&twin_uri, format),
            twin_uri,
            semantics,
            observers: ObserverSet::new(),
        }
    }

    pub fn twin_uri(&self) -> &str {
        &self.twin_uri
    }

    pub fn semantics(&self) -> &Arc<dyn DigitalTwinSemantics> {
        &self.semantics
    }

    pub fn store(&self) -> &TripleStore {
        &self.store
    }

    /// Register a subscriber for graph changes
    pub fn add_observer(&self, observer: Arc<dyn DtkgObserver>) {
        self.observers.add(observer);
    }

    pub fn add_property(&self, property: &PropertyState) -> Result<()> {
        let facts = self
            .semantics
            .map_property(property)
            .ok_or_else(|| DtkgError::mapping_unavailable(RegistryKind::Property, &property.key))?;
        self.store
            .commit_add(RegistryKind::Property, &property.key, facts)?;
        self.notify();
        Ok(())
    }

    /// Replace the facts of `old` with those of `new`
    ///
    /// Both states are expected to share a key; `new.key` selects the entry.
    /// Returns `Ok(false)` if the key is absent or `old` has no mapping.
    pub fn update_property(&self, new: &PropertyState, old: &PropertyState) -> Result<bool> {
        let new_facts = self
            .semantics
            .map_property(new)
            .ok_or_else(|| DtkgError::mapping_unavailable(RegistryKind::Property, &new.key))?;
        let Some(old_facts) = self.semantics.map_property(old) else {
            tracing::debug!(key = %old.key, "previous property state has no mapping");
            return Ok(false);
        };
        if new.key != old.key {
            tracing::warn!(new = %new.key, old = %old.key, "property update across keys");
        }

        let updated =
            self.store
                .commit_update(RegistryKind::Property, &new.key, new_facts, &old_facts)?;
        if updated {
            self.notify();
        }
        Ok(updated)
    }

    pub fn remove_property(&self, property: &PropertyState) -> bool {
        self.remove(RegistryKind::Property, &property.key)
    }

    pub fn add_relationship(&self, relationship: &RelationshipInstance) -> Result<()> {
        let facts = self.semantics.map_relationship(relationship).ok_or_else(|| {
            DtkgError::mapping_unavailable(RegistryKind::Relationship, &relationship.key)
        })?;
        self.store.commit_add_named(
            RegistryKind::Relationship,
            &relationship.key,
            &relationship.relationship_name,
            facts,
        )?;
        self.notify();
        Ok(())
    }

    /// Put `relationship` in place of the instance recorded under its key
    ///
    /// Adds the instance if the key is absent. The new instance is mapped
    /// before anything is removed, so a failed mapping leaves the graph as it
    /// was. Returns whether an instance was replaced.
    pub fn replace_relationship(&self, relationship: &RelationshipInstance) -> Result<bool> {
        let facts = self.semantics.map_relationship(relationship).ok_or_else(|| {
            DtkgError::mapping_unavailable(RegistryKind::Relationship, &relationship.key)
        })?;
        let replaced = self.store.commit_replace(
            RegistryKind::Relationship,
            &relationship.key,
            &relationship.relationship_name,
            facts,
        )?;
        self.notify();
        Ok(replaced)
    }

    pub fn remove_relationship(&self, relationship: &RelationshipInstance) -> bool {
        self.remove(RegistryKind::Relationship, &relationship.key)
    }

    /// Add an action; its id is always recorded as `wodt:availableActionId`
    pub fn add_action(&self, action: &ActionState) -> Result<()> {
        let mut facts = self
            .semantics
            .map_action(action)
            .ok_or_else(|| DtkgError::mapping_unavailable(RegistryKind::Action, &action.key))?;
        facts.push(Fact::term(
            wodt::AVAILABLE_ACTION_ID,
            Term::string(&action.key),
        ));
        self.store
            .commit_add(RegistryKind::Action, &action.key, facts)?;
        self.notify();
        Ok(())
    }

    pub fn remove_action(&self, action: &ActionState) -> bool {
        self.remove(RegistryKind::Action, &action.key)
    }

    /// Drop every fact; the engine stays usable for re-population
    pub fn remove_twin(&self) {
        self.store.clear_all();
        tracing::info!(twin = %self.twin_uri, "digital twin removed from knowledge graph");
        self.notify();
    }

    /// Canonical Turtle of the current graph (empty string when empty)
    pub fn current_dtkg(&self) -> String {
        self.store.serialize()
    }

    pub fn property_keys(&self) -> Vec<String> {
        self.store.keys(RegistryKind::Property)
    }

    pub fn relationship_keys(&self) -> Vec<String> {
        self.store.keys(RegistryKind::Relationship)
    }

    /// Names of the relationships with at least one instance present
    pub fn relationship_names(&self) -> Vec<String> {
        self.store.names(RegistryKind::Relationship)
    }

    pub fn action_keys(&self) -> Vec<String> {
        self.store.keys(RegistryKind::Action)
    }

    /// Property, relationship and action names present right now
    pub fn registry_snapshot(&self) -> RegistrySnapshot {
        self.store.snapshot()
    }

    fn remove(&self, kind: RegistryKind, key: &str) -> bool {
        let removed = self.store.commit_remove(kind, key);
        if removed {
            self.notify();
        } else {
            tracing::debug!(%kind, key, "nothing to remove");
        }
        removed
    }

    /// Push a fresh serialization; called after the write lock is released
    fn notify(&self) {
        if self.observers.is_empty() {
            return;
        }
        let dtkg = self.store.serialize();
        self.observers.notify(&dtkg);
    }
}

impl std::fmt::Debug for DtkgEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DtkgEngine")
            .field("twin_uri", &self.twin_uri)
            .field("store", &self.store)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}
