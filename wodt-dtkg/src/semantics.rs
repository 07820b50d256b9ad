//! Digital twin state elements and the semantic mapper contract
//!
//! The engine never interprets domain vocabulary itself. A deployment supplies
//! a [`DigitalTwinSemantics`] implementation that turns each state element into
//! the facts to attach to the twin resource, and answers the domain tags the
//! descriptor advertises.

use serde::{Deserialize, Serialize};
use wodt_graph_ir::{Datatype, Fact, Term};

/// Value of a digital twin property
///
/// Deserializes from plain JSON: `null`, booleans, numbers, strings, and any
/// object or array as [`StateValue::Json`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(String),
    Json(serde_json::Value),
}

impl StateValue {
    /// Numeric view of the value; numeric strings are parsed
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StateValue::Integer(i) => Some(*i as f64),
            StateValue::Double(d) => Some(*d),
            StateValue::String(s) => s.trim().parse().ok(),
            StateValue::Null | StateValue::Boolean(_) | StateValue::Json(_) => None,
        }
    }

    /// Literal term for the value, `None` for `Null`
    pub fn to_term(&self) -> Option<Term> {
        match self {
            StateValue::Null => None,
            StateValue::Boolean(b) => Some(Term::boolean(*b)),
            StateValue::Integer(i) => Some(Term::integer(*i)),
            StateValue::Double(d) => Some(Term::double(*d)),
            StateValue::String(s) => Some(Term::string(s)),
            StateValue::Json(v) => Some(Term::typed(v.to_string(), Datatype::rdf_json())),
        }
    }
}

impl From<bool> for StateValue {
    fn from(b: bool) -> Self {
        StateValue::Boolean(b)
    }
}

impl From<i64> for StateValue {
    fn from(i: i64) -> Self {
        StateValue::Integer(i)
    }
}

impl From<f64> for StateValue {
    fn from(d: f64) -> Self {
        StateValue::Double(d)
    }
}

impl From<&str> for StateValue {
    fn from(s: &str) -> Self {
        StateValue::String(s.to_string())
    }
}

/// A named property and its current value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyState {
    pub key: String,
    #[serde(default = "null_value")]
    pub value: StateValue,
}

fn null_value() -> StateValue {
    StateValue::Null
}

impl PropertyState {
    pub fn new(key: impl Into<String>, value: impl Into<StateValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One instance of a relationship towards another twin
///
/// `key` identifies the instance; several instances may share a
/// `relationship_name`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationshipInstance {
    pub relationship_name: String,
    pub target_uri: String,
    pub key: String,
}

impl RelationshipInstance {
    pub fn new(
        relationship_name: impl Into<String>,
        target_uri: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            relationship_name: relationship_name.into(),
            target_uri: target_uri.into(),
            key: key.into(),
        }
    }
}

/// An action the twin exposes
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionState {
    pub key: String,
    #[serde(default)]
    pub action_type: String,
    #[serde(default)]
    pub content_type: String,
}

impl ActionState {
    pub fn new(
        key: impl Into<String>,
        action_type: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            action_type: action_type.into(),
            content_type: content_type.into(),
        }
    }
}

/// Domain semantics of a digital twin
///
/// Mapping functions must be pure and deterministic, blank node ids included:
/// mapping the same element twice must give equal fact lists so that a later
/// removal targets the same triples. `None` means "no mapping available",
/// which is distinct from an empty list.
pub trait DigitalTwinSemantics: Send + Sync {
    /// Class IRIs describing what kind of twin this is
    fn digital_twin_types(&self) -> Vec<String>;

    /// Domain tag IRI of a property name
    fn property_domain_tag(&self, property: &str) -> Option<String>;

    /// Domain tag IRI of a relationship name
    fn relationship_domain_tag(&self, relationship: &str) -> Option<String>;

    /// Domain tag IRI of an action name
    fn action_domain_tag(&self, action: &str) -> Option<String>;

    /// Facts describing a property and its value
    fn map_property(&self, property: &PropertyState) -> Option<Vec<Fact>>;

    /// Facts describing a relationship instance
    fn map_relationship(&self, relationship: &RelationshipInstance) -> Option<Vec<Fact>>;

    /// Extra facts describing an action
    ///
    /// The engine always records the action id itself; most semantics have
    /// nothing to add.
    fn map_action(&self, _action: &ActionState) -> Option<Vec<Fact>> {
        Some(Vec::new())
    }

    /// Prefixes used to compact the serialized graph
    fn prefixes(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_value_from_json() {
        let values: Vec<StateValue> =
            serde_json::from_str(r#"[null, true, 100, 0.2, "on", {"r": 1}]"#).unwrap();
        assert_eq!(
            values,
            vec![
                StateValue::Null,
                StateValue::Boolean(true),
                StateValue::Integer(100),
                StateValue::Double(0.2),
                StateValue::String("on".to_string()),
                StateValue::Json(serde_json::json!({"r": 1})),
            ]
        );
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(StateValue::Integer(100).as_f64(), Some(100.0));
        assert_eq!(StateValue::from("0.5").as_f64(), Some(0.5));
        assert_eq!(StateValue::Boolean(true).as_f64(), None);
    }

    #[test]
    fn test_to_term() {
        assert_eq!(StateValue::Null.to_term(), None);
        assert_eq!(StateValue::Integer(3).to_term(), Some(Term::integer(3)));
        let json = StateValue::Json(serde_json::json!([1, 2])).to_term().unwrap();
        let (value, datatype) = json.as_literal().unwrap();
        assert_eq!(value.lexical(), "[1,2]");
        assert_eq!(datatype, &Datatype::rdf_json());
    }

    #[test]
    fn test_property_without_value() {
        let property: PropertyState = serde_json::from_str(r#"{"key": "luminosity"}"#).unwrap();
        assert_eq!(property.value, StateValue::Null);
    }
}
