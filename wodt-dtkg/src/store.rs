//! Triple store for a single twin resource
//!
//! The graph and the three registries live behind one `RwLock`. Commits take
//! it exclusively for the whole mutation, so readers see either the state
//! before a commit or the state after it, never a partial update.

use crate::error::{DtkgError, RegistryKind, Result};
use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use wodt_graph_format::{format_turtle, TurtleFormatConfig};
use wodt_graph_ir::{blank_ids, Fact, Graph, Term};

/// Facts committed for one logical key
#[derive(Debug, Clone)]
struct Entry {
    /// Element name; differs from the key only for relationship instances
    name: String,
    facts: Vec<Fact>,
}

/// Logical key -> entry committed for it
type Registry = BTreeMap<String, Entry>;

#[derive(Debug, Default)]
struct StoreState {
    graph: Graph,
    properties: Registry,
    relationships: Registry,
    actions: Registry,
}

impl StoreState {
    fn registry(&self, kind: RegistryKind) -> &Registry {
        match kind {
            RegistryKind::Property => &self.properties,
            RegistryKind::Relationship => &self.relationships,
            RegistryKind::Action => &self.actions,
        }
    }

    fn registry_mut(&mut self, kind: RegistryKind) -> &mut Registry {
        match kind {
            RegistryKind::Property => &mut self.properties,
            RegistryKind::Relationship => &mut self.relationships,
            RegistryKind::Action => &mut self.actions,
        }
    }

    /// Reject blank ids that are repeated within `facts` or already in the graph
    fn check_blank_ids(&self, key: &str, facts: &[Fact]) -> Result<()> {
        let mut seen = HashSet::new();
        for id in blank_ids(facts) {
            let term = Term::BlankNode(id.clone());
            if !seen.insert(id) || self.graph.mentions(&term) {
                return Err(DtkgError::blank_node_conflict(key, id.as_str()));
            }
        }
        Ok(())
    }
}

/// Element names present in each registry, read under one lock
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrySnapshot {
    pub properties: Vec<String>,
    pub relationships: Vec<String>,
    pub actions: Vec<String>,
}

/// Thread-safe store of the facts attached to one twin resource
#[derive(Debug)]
pub struct TripleStore {
    twin: Term,
    format: TurtleFormatConfig,
    state: RwLock<StoreState>,
}

impl TripleStore {
    /// Create an empty store for the twin with the given IRI
    pub fn new(twin_uri: impl AsRef<str>, format: TurtleFormatConfig) -> Self {
        Self {
            twin: Term::iri(twin_uri),
            format,
            state: RwLock::new(StoreState::default()),
        }
    }

    /// The twin resource, subject of every top-level fact
    pub fn twin(&self) -> &Term {
        &self.twin
    }

    /// Insert `facts` under a new key
    pub fn commit_add(&self, kind: RegistryKind, key: &str, facts: Vec<Fact>) -> Result<()> {
        self.commit_add_named(kind, key, key, facts)
    }

    /// Insert `facts` under a new key, recording the element name it belongs to
    pub fn commit_add_named(
        &self,
        kind: RegistryKind,
        key: &str,
        name: &str,
        facts: Vec<Fact>,
    ) -> Result<()> {
        let mut state = self.state.write();
        if state.registry(kind).contains_key(key) {
            tracing::debug!(%kind, key, "rejecting add of present key");
            return Err(DtkgError::duplicate_key(kind, key));
        }
        state.check_blank_ids(key, &facts)?;

        state.graph.insert_facts(&self.twin, &facts);
        tracing::debug!(%kind, key, fact_count = facts.len(), "committed add");
        let entry = Entry {
            name: name.to_string(),
            facts,
        };
        state.registry_mut(kind).insert(key.to_string(), entry);
        Ok(())
    }

    /// Remove the facts recorded for a key
    ///
    /// Returns `false` if the key is not present.
    pub fn commit_remove(&self, kind: RegistryKind, key: &str) -> bool {
        let mut state = self.state.write();
        let Some(entry) = state.registry_mut(kind).remove(key) else {
            return false;
        };
        let removed = state.graph.remove_facts(&self.twin, &entry.facts);
        tracing::debug!(%kind, key, triples = removed, "committed remove");
        true
    }

    /// Replace the facts recorded for a key with `new_facts`
    ///
    /// The recorded list is what gets removed; `old_facts` is the caller's
    /// view of it and only checked for drift. Returns `Ok(false)` if the key is
    /// not present.
    pub fn commit_update(
        &self,
        kind: RegistryKind,
        key: &str,
        new_facts: Vec<Fact>,
        old_facts: &[Fact],
    ) -> Result<bool> {
        let mut state = self.state.write();
        let Some(recorded) = state.registry_mut(kind).remove(key) else {
            return Ok(false);
        };
        if recorded.facts != old_facts {
            tracing::warn!(
                %kind,
                key,
                "previous state maps to different facts than recorded; removing recorded facts"
            );
        }

        state.graph.remove_facts(&self.twin, &recorded.facts);
        if let Err(e) = state.check_blank_ids(key, &new_facts) {
            state.graph.insert_facts(&self.twin, &recorded.facts);
            state.registry_mut(kind).insert(key.to_string(), recorded);
            return Err(e);
        }

        state.graph.insert_facts(&self.twin, &new_facts);
        tracing::debug!(%kind, key, fact_count = new_facts.len(), "committed update");
        let entry = Entry {
            name: recorded.name,
            facts: new_facts,
        };
        state.registry_mut(kind).insert(key.to_string(), entry);
        Ok(true)
    }

    /// Put `facts` under `key`, replacing whatever is recorded for it
    ///
    /// Removal and insertion happen under one write lock. Returns `Ok(true)`
    /// if an entry was replaced, `Ok(false)` if the key was new. On a blank
    /// node conflict the previous entry is kept.
    pub fn commit_replace(
        &self,
        kind: RegistryKind,
        key: &str,
        name: &str,
        facts: Vec<Fact>,
    ) -> Result<bool> {
        let mut state = self.state.write();
        let previous = state.registry_mut(kind).remove(key);
        if let Some(entry) = &previous {
            state.graph.remove_facts(&self.twin, &entry.facts);
        }

        if let Err(e) = state.check_blank_ids(key, &facts) {
            if let Some(entry) = previous {
                state.graph.insert_facts(&self.twin, &entry.facts);
                state.registry_mut(kind).insert(key.to_string(), entry);
            }
            return Err(e);
        }

        state.graph.insert_facts(&self.twin, &facts);
        let replaced = previous.is_some();
        tracing::debug!(%kind, key, replaced, fact_count = facts.len(), "committed replace");
        let entry = Entry {
            name: name.to_string(),
            facts,
        };
        state.registry_mut(kind).insert(key.to_string(), entry);
        Ok(replaced)
    }

    /// Remove every fact and registry entry
    pub fn clear_all(&self) {
        let mut state = self.state.write();
        state.graph.clear();
        state.properties.clear();
        state.relationships.clear();
        state.actions.clear();
        tracing::debug!("cleared all facts");
    }

    /// Canonical Turtle text of the current facts
    pub fn serialize(&self) -> String {
        let state = self.state.read();
        format_turtle(&state.graph, &self.format)
    }

    /// Keys currently present in a registry, sorted
    pub fn keys(&self, kind: RegistryKind) -> Vec<String> {
        self.state.read().registry(kind).keys().cloned().collect()
    }

    /// Distinct element names present in a registry, sorted
    pub fn names(&self, kind: RegistryKind) -> Vec<String> {
        distinct_names(self.state.read().registry(kind))
    }

    /// Names of every registry at a single point in time
    pub fn snapshot(&self) -> RegistrySnapshot {
        let state = self.state.read();
        RegistrySnapshot {
            properties: distinct_names(&state.properties),
            relationships: distinct_names(&state.relationships),
            actions: distinct_names(&state.actions),
        }
    }

    pub fn contains_key(&self, kind: RegistryKind, key: &str) -> bool {
        self.state.read().registry(kind).contains_key(key)
    }

    /// Facts recorded for a key
    pub fn recorded_facts(&self, kind: RegistryKind, key: &str) -> Option<Vec<Fact>> {
        self.state
            .read()
            .registry(kind)
            .get(key)
            .map(|entry| entry.facts.clone())
    }

    /// Number of triples in the graph, duplicates included
    pub fn triple_count(&self) -> usize {
        self.state.read().graph.len()
    }
}

fn distinct_names(registry: &Registry) -> Vec<String> {
    let names: BTreeSet<&str> = registry.values().map(|entry| entry.name.as_str()).collect();
    names.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wodt_graph_ir::BlankNode;

    fn store() -> TripleStore {
        TripleStore::new(
            "http://example.com/dt",
            TurtleFormatConfig::new().with_default_prefixes(),
        )
    }

    fn value_facts(id: &str, value: i64) -> Vec<Fact> {
        vec![Fact::blank(
            "http://ex.org/value",
            BlankNode::new(id).add_fact(Fact::term("http://ex.org/v", Term::integer(value))),
        )]
    }

    #[test]
    fn test_add_then_duplicate() {
        let store = store();
        store
            .commit_add(RegistryKind::Property, "p", value_facts("pValue", 1))
            .unwrap();
        let before = store.serialize();

        let err = store
            .commit_add(RegistryKind::Property, "p", value_facts("pValue", 2))
            .unwrap_err();
        assert!(err.is_duplicate_key());
        assert_eq!(store.serialize(), before);
    }

    #[test]
    fn test_same_key_in_different_registries() {
        let store = store();
        store
            .commit_add(RegistryKind::Property, "x", vec![Fact::iri("http://ex.org/p", "http://ex.org/a")])
            .unwrap();
        store
            .commit_add(RegistryKind::Action, "x", vec![Fact::iri("http://ex.org/q", "http://ex.org/b")])
            .unwrap();
        assert_eq!(store.keys(RegistryKind::Property), vec!["x".to_string()]);
        assert_eq!(store.keys(RegistryKind::Action), vec!["x".to_string()]);
        assert!(store.keys(RegistryKind::Relationship).is_empty());
    }

    #[test]
    fn test_names_are_distinct() {
        let store = store();
        store
            .commit_add_named(RegistryKind::Relationship, "isInRoom-a", "isInRoom", vec![Fact::iri("http://ex.org/in", "http://a.it")])
            .unwrap();
        store
            .commit_add_named(RegistryKind::Relationship, "isInRoom-b", "isInRoom", vec![Fact::iri("http://ex.org/in", "http://b.it")])
            .unwrap();
        assert_eq!(store.names(RegistryKind::Relationship), vec!["isInRoom".to_string()]);
        assert_eq!(store.keys(RegistryKind::Relationship).len(), 2);

        store.commit_remove(RegistryKind::Relationship, "isInRoom-a");
        assert_eq!(store.names(RegistryKind::Relationship), vec!["isInRoom".to_string()]);
        store.commit_remove(RegistryKind::Relationship, "isInRoom-b");
        assert!(store.names(RegistryKind::Relationship).is_empty());
    }

    #[test]
    fn test_remove_absent_key() {
        let store = store();
        assert!(!store.commit_remove(RegistryKind::Relationship, "missing"));
    }

    #[test]
    fn test_remove_is_orphan_free() {
        let store = store();
        store
            .commit_add(RegistryKind::Property, "p", value_facts("pValue", 1))
            .unwrap();
        assert_eq!(store.triple_count(), 2);

        assert!(store.commit_remove(RegistryKind::Property, "p"));
        assert_eq!(store.triple_count(), 0);
        assert_eq!(store.serialize(), "");
    }

    #[test]
    fn test_blank_node_conflict_across_keys() {
        let store = store();
        store
            .commit_add(RegistryKind::Property, "a", value_facts("shared", 1))
            .unwrap();
        let err = store
            .commit_add(RegistryKind::Property, "b", value_facts("shared", 2))
            .unwrap_err();
        assert_eq!(err, DtkgError::blank_node_conflict("b", "shared"));
        assert!(!store.contains_key(RegistryKind::Property, "b"));
        assert_eq!(store.triple_count(), 2);
    }

    #[test]
    fn test_blank_node_conflict_within_list() {
        let store = store();
        let mut facts = value_facts("dup", 1);
        facts.extend(value_facts("dup", 2));
        assert!(store.commit_add(RegistryKind::Property, "p", facts).is_err());
        assert_eq!(store.triple_count(), 0);
    }

    #[test]
    fn test_update_reuses_blank_id() {
        let store = store();
        store
            .commit_add(RegistryKind::Property, "p", value_facts("pValue", 1))
            .unwrap();
        let updated = store
            .commit_update(RegistryKind::Property, "p", value_facts("pValue", 2), &value_facts("pValue", 1))
            .unwrap();
        assert!(updated);
        assert_eq!(
            store.recorded_facts(RegistryKind::Property, "p"),
            Some(value_facts("pValue", 2))
        );
        assert_eq!(store.triple_count(), 2);
    }

    #[test]
    fn test_rejected_update_restores_previous_state() {
        let store = store();
        store
            .commit_add(RegistryKind::Property, "a", value_facts("aValue", 1))
            .unwrap();
        store
            .commit_add(RegistryKind::Property, "b", value_facts("bValue", 1))
            .unwrap();
        let before = store.serialize();

        // "a" tries to take over the blank node owned by "b"
        let result = store.commit_update(
            RegistryKind::Property,
            "a",
            value_facts("bValue", 5),
            &value_facts("aValue", 1),
        );
        assert!(result.is_err());
        assert_eq!(store.serialize(), before);
        assert_eq!(
            store.recorded_facts(RegistryKind::Property, "a"),
            Some(value_facts("aValue", 1))
        );
    }

    #[test]
    fn test_update_absent_key() {
        let store = store();
        let updated = store
            .commit_update(RegistryKind::Property, "p", value_facts("pValue", 2), &[])
            .unwrap();
        assert!(!updated);
        assert_eq!(store.triple_count(), 0);
    }

    #[test]
    fn test_replace_moves_entry_to_new_name() {
        let store = store();
        store
            .commit_add_named(RegistryKind::Relationship, "r1", "isInRoom", vec![Fact::iri("http://ex.org/in", "http://a.it")])
            .unwrap();

        let replaced = store
            .commit_replace(RegistryKind::Relationship, "r1", "isNear", vec![Fact::iri("http://ex.org/near", "http://b.it")])
            .unwrap();
        assert!(replaced);
        assert_eq!(store.names(RegistryKind::Relationship), vec!["isNear".to_string()]);
        assert_eq!(store.triple_count(), 1);
        assert!(!store.serialize().contains("http://a.it"));

        let added = store
            .commit_replace(RegistryKind::Relationship, "r2", "isNear", vec![Fact::iri("http://ex.org/near", "http://c.it")])
            .unwrap();
        assert!(!added);
        assert_eq!(store.keys(RegistryKind::Relationship).len(), 2);
    }

    #[test]
    fn test_rejected_replace_keeps_previous_entry() {
        let store = store();
        store
            .commit_add(RegistryKind::Property, "a", value_facts("aValue", 1))
            .unwrap();
        store
            .commit_add(RegistryKind::Property, "b", value_facts("bValue", 1))
            .unwrap();
        let before = store.serialize();

        let result = store.commit_replace(RegistryKind::Property, "a", "a", value_facts("bValue", 3));
        assert!(result.is_err());
        assert_eq!(store.serialize(), before);
        assert_eq!(
            store.recorded_facts(RegistryKind::Property, "a"),
            Some(value_facts("aValue", 1))
        );
    }

    #[test]
    fn test_clear_all_is_idempotent() {
        let store = store();
        store
            .commit_add(RegistryKind::Property, "p", value_facts("pValue", 1))
            .unwrap();
        store.clear_all();
        store.clear_all();
        assert_eq!(store.serialize(), "");
        assert!(store.keys(RegistryKind::Property).is_empty());
    }
}
