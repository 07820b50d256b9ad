//! Routes digital twin state changes into the knowledge graph engine

use crate::config::AdapterConfig;
use crate::error::Result;
use crate::mapping::DeclarativeSemantics;
use crate::state::{DigitalTwinState, Operation, StateChange, StateResource};
use std::sync::Arc;
use wodt_dtd::{DescriptorBuilder, PlatformRegistry, ThingDescription, TwinMetadata};
use wodt_dtkg::{
    ActionState, DigitalTwinSemantics, DtkgEngine, DtkgError, PropertyState,
    RelationshipInstance,
};

/// Outcome of a batch of state changes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Changes that modified the graph
    pub applied: usize,
    /// Changes with nothing to do (events, absent keys, duplicate actions)
    pub skipped: usize,
    /// Changes rejected by the engine
    pub failed: usize,
}

impl UpdateReport {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Applied => self.applied += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed => self.failed += 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    Applied,
    Skipped,
    Failed,
}

impl Outcome {
    fn from_bool(changed: bool) -> Self {
        if changed {
            Outcome::Applied
        } else {
            Outcome::Skipped
        }
    }
}

/// A digital twin exposed on the Web of Digital Twins
///
/// Owns the knowledge graph engine, the platform registry and the
/// descriptor builder that reads from both.
#[derive(Debug)]
pub struct WodtAdapter {
    config: AdapterConfig,
    engine: Arc<DtkgEngine>,
    platforms: Arc<PlatformRegistry>,
    descriptor: DescriptorBuilder,
}

impl WodtAdapter {
    /// Adapter with custom semantics
    pub fn new(config: AdapterConfig, semantics: Arc<dyn DigitalTwinSemantics>) -> Self {
        let engine = Arc::new(DtkgEngine::new(config.twin_uri.clone(), semantics));
        let platforms = Arc::new(PlatformRegistry::new());
        let metadata = TwinMetadata {
            twin_uri: config.twin_uri.clone(),
            version: config.version,
            physical_asset_id: config.physical_asset_id.clone(),
        };
        let descriptor =
            DescriptorBuilder::new(metadata, Arc::clone(&engine), Arc::clone(&platforms));

        tracing::info!(
            twin = %config.twin_uri,
            version = %config.version,
            port = config.port,
            "digital adapter created"
        );
        Self {
            config,
            engine,
            platforms,
            descriptor,
        }
    }

    /// Adapter using the declarative semantics of the config file
    pub fn from_config(config: AdapterConfig) -> Self {
        let semantics = DeclarativeSemantics::new(config.semantics.clone());
        Self::new(config, Arc::new(semantics))
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub fn engine(&self) -> &Arc<DtkgEngine> {
        &self.engine
    }

    pub fn platforms(&self) -> &Arc<PlatformRegistry> {
        &self.platforms
    }

    pub fn descriptor(&self) -> &DescriptorBuilder {
        &self.descriptor
    }

    /// Record the platforms listed in the config; returns how many were new
    pub fn register_platforms(&self) -> usize {
        self.config
            .platforms
            .iter()
            .filter(|platform| self.platforms.add(platform.as_str()))
            .count()
    }

    pub fn current_dtkg(&self) -> String {
        self.engine.current_dtkg()
    }

    pub fn current_dtd(&self) -> Result<ThingDescription> {
        Ok(self.descriptor.build()?)
    }

    /// Load a full state snapshot
    pub fn on_sync(&self, state: &DigitalTwinState) -> UpdateReport {
        tracing::info!(
            properties = state.properties.len(),
            relationships = state.relationships.len(),
            actions = state.actions.len(),
            "synchronizing digital twin state"
        );
        let mut report = UpdateReport::default();
        for property in &state.properties {
            report.record(self.add_property(property));
        }
        for relationship in &state.relationships {
            report.record(self.add_relationship(relationship));
        }
        for action in &state.actions {
            report.record(self.add_action(action));
        }
        report
    }

    /// Apply a batch of changes
    ///
    /// `previous` is the state before the batch; property updates use it to
    /// find the facts to replace. A relationship update replaces the instance
    /// recorded under the same key.
    pub fn on_state_update(
        &self,
        changes: &[StateChange],
        previous: Option<&DigitalTwinState>,
    ) -> UpdateReport {
        let mut report = UpdateReport::default();
        for change in changes {
            report.record(self.apply(change, previous));
        }
        tracing::debug!(
            applied = report.applied,
            skipped = report.skipped,
            failed = report.failed,
            "state update processed"
        );
        report
    }

    /// Drop the whole twin from the knowledge graph
    pub fn on_twin_removed(&self) {
        tracing::info!(twin = %self.config.twin_uri, "digital twin removed");
        self.engine.remove_twin();
    }

    fn apply(&self, change: &StateChange, previous: Option<&DigitalTwinState>) -> Outcome {
        match (&change.resource, change.operation) {
            (StateResource::Property(property), Operation::Add) => self.add_property(property),
            (StateResource::Property(property), Operation::Update) => {
                match previous.and_then(|state| state.property(&property.key)) {
                    Some(old) => self.update_property(property, old),
                    None => self.add_property(property),
                }
            }
            (StateResource::Property(property), Operation::Remove) => {
                Outcome::from_bool(self.engine.remove_property(property))
            }

            (StateResource::RelationshipInstance(relationship), Operation::Add) => {
                self.add_relationship(relationship)
            }
            (StateResource::RelationshipInstance(relationship), Operation::Update) => {
                self.replace_relationship(relationship)
            }
            (StateResource::RelationshipInstance(relationship), Operation::Remove) => {
                Outcome::from_bool(self.engine.remove_relationship(relationship))
            }

            (StateResource::Action(action), Operation::Add | Operation::Update) => {
                self.add_action(action)
            }
            (StateResource::Action(action), Operation::Remove) => {
                Outcome::from_bool(self.engine.remove_action(action))
            }

            (StateResource::Relationship(name), operation) => {
                tracing::debug!(relationship = %name, ?operation, "relationship definition change ignored");
                Outcome::Skipped
            }
            (StateResource::Event(name), operation) => {
                tracing::debug!(event = %name, ?operation, "event ignored");
                Outcome::Skipped
            }
        }
    }

    fn add_property(&self, property: &PropertyState) -> Outcome {
        match self.engine.add_property(property) {
            Ok(()) => Outcome::Applied,
            Err(e) => failed("property", &property.key, &e),
        }
    }

    /// Update from `old`, or add if the graph does not hold the key
    ///
    /// The key can be missing even when the runtime reported it earlier, e.g.
    /// if that earlier value could not be mapped.
    fn update_property(&self, new: &PropertyState, old: &PropertyState) -> Outcome {
        match self.engine.update_property(new, old) {
            Ok(true) => Outcome::Applied,
            Ok(false) => {
                tracing::debug!(key = %new.key, "property not in graph, adding instead");
                self.add_property(new)
            }
            Err(e) => failed("property", &new.key, &e),
        }
    }

    fn add_relationship(&self, relationship: &RelationshipInstance) -> Outcome {
        match self.engine.add_relationship(relationship) {
            Ok(()) => Outcome::Applied,
            Err(e) => failed("relationship", &relationship.key, &e),
        }
    }

    fn replace_relationship(&self, relationship: &RelationshipInstance) -> Outcome {
        match self.engine.replace_relationship(relationship) {
            Ok(_) => Outcome::Applied,
            Err(e) => failed("relationship", &relationship.key, &e),
        }
    }

    fn add_action(&self, action: &ActionState) -> Outcome {
        match self.engine.add_action(action) {
            Ok(()) => Outcome::Applied,
            Err(e) if e.is_duplicate_key() => {
                tracing::debug!(action = %action.key, "action already available");
                Outcome::Skipped
            }
            Err(e) => failed("action", &action.key, &e),
        }
    }
}

fn failed(element: &str, key: &str, error: &DtkgError) -> Outcome {
    tracing::warn!(element, key, error = %error, "state change rejected");
    Outcome::Failed
}
