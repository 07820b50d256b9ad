//! Digital twin state as delivered by the twin runtime

use serde::{Deserialize, Serialize};
use wodt_dtkg::{ActionState, PropertyState, RelationshipInstance};

/// Kind of change applied to a state element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Update,
    Remove,
}

/// The element a [`StateChange`] refers to
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StateResource {
    Property(PropertyState),
    /// Relationship definition by name; carries no graph facts
    Relationship(String),
    RelationshipInstance(RelationshipInstance),
    Action(ActionState),
    /// Event notification by name; not represented in the graph
    Event(String),
}

/// One change reported by the twin runtime
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateChange {
    pub operation: Operation,
    pub resource: StateResource,
}

impl StateChange {
    pub fn new(operation: Operation, resource: StateResource) -> Self {
        Self {
            operation,
            resource,
        }
    }
}

/// Full state of a digital twin
///
/// ```json
/// {
///   "properties": [{ "key": "luminosity", "value": 100 }],
///   "relationships": [
///     { "relationship_name": "isInRoom", "target_uri": "http://room.it", "key": "r1" }
///   ],
///   "actions": [{ "key": "switch" }]
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigitalTwinState {
    pub properties: Vec<PropertyState>,
    pub relationships: Vec<RelationshipInstance>,
    pub actions: Vec<ActionState>,
}

impl DigitalTwinState {
    pub fn property(&self, key: &str) -> Option<&PropertyState> {
        self.properties.iter().find(|p| p.key == key)
    }

    pub fn relationship(&self, key: &str) -> Option<&RelationshipInstance> {
        self.relationships.iter().find(|r| r.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.relationships.is_empty() && self.actions.is_empty()
    }
}
