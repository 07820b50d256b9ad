//! Semantics driven by the `[semantics]` table of the adapter config
//!
//! Properties follow the SAREF pattern:
//!
//! ```text
//! <twin> saref:hasProperty <domain_tag> ;
//!        saref:hasPropertyValue _:<key>Value .
//! _:<key>Value saref:hasValue <literal> ;
//!              saref:isMeasuredIn <unit> ;
//!              saref:isValueOfProperty <domain_tag> .
//! ```
//!
//! A `null` value keeps only the `hasProperty` link.

use crate::config::{SemanticsConfig, ValueDatatype};
use wodt_dtkg::{
    ActionState, DigitalTwinSemantics, PropertyState, RelationshipInstance, StateValue,
};
use wodt_graph_ir::{BlankNode, Fact, Term};
use wodt_vocab::{prefixes, saref};

/// [`DigitalTwinSemantics`] backed by a declarative mapping table
#[derive(Debug, Clone, Default)]
pub struct DeclarativeSemantics {
    config: SemanticsConfig,
}

impl DeclarativeSemantics {
    pub fn new(config: SemanticsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SemanticsConfig {
        &self.config
    }
}

impl DigitalTwinSemantics for DeclarativeSemantics {
    fn digital_twin_types(&self) -> Vec<String> {
        self.config.types.clone()
    }

    fn property_domain_tag(&self, property: &str) -> Option<String> {
        self.config
            .properties
            .get(property)
            .map(|mapping| mapping.domain_tag.clone())
    }

    fn relationship_domain_tag(&self, relationship: &str) -> Option<String> {
        self.config.relationships.get(relationship).map(|mapping| {
            mapping
                .domain_tag
                .clone()
                .unwrap_or_else(|| mapping.predicate.clone())
        })
    }

    fn action_domain_tag(&self, action: &str) -> Option<String> {
        self.config
            .actions
            .get(action)
            .map(|mapping| mapping.domain_tag.clone())
    }

    fn map_property(&self, property: &PropertyState) -> Option<Vec<Fact>> {
        let mapping = self.config.properties.get(&property.key)?;
        let individual = mapping.domain_tag.as_str();
        let mut facts = vec![Fact::iri(saref::HAS_PROPERTY, individual)];

        if property.value == StateValue::Null {
            return Some(facts);
        }
        let Some(value) = coerce(&property.value, mapping.datatype) else {
            tracing::debug!(
                key = %property.key,
                datatype = ?mapping.datatype,
                "property value does not fit the configured datatype"
            );
            return None;
        };

        let mut node = BlankNode::new(format!("{}Value", property.key))
            .add_fact(Fact::term(saref::HAS_VALUE, value));
        if let Some(unit) = &mapping.unit {
            node = node.add_fact(Fact::iri(saref::IS_MEASURED_IN, unit));
        }
        node = node.add_fact(Fact::iri(saref::IS_VALUE_OF_PROPERTY, individual));
        facts.push(Fact::blank(saref::HAS_PROPERTY_VALUE, node));
        Some(facts)
    }

    fn map_relationship(&self, relationship: &RelationshipInstance) -> Option<Vec<Fact>> {
        let mapping = self
            .config
            .relationships
            .get(&relationship.relationship_name)?;
        Some(vec![Fact::iri(&mapping.predicate, &relationship.target_uri)])
    }

    fn map_action(&self, action: &ActionState) -> Option<Vec<Fact>> {
        self.config.actions.get(&action.key).map(|_| Vec::new())
    }

    fn prefixes(&self) -> Vec<(String, String)> {
        let (saref_prefix, saref_ns) = prefixes::SAREF;
        let mut out: Vec<(String, String)> = self
            .config
            .prefixes
            .iter()
            .map(|(prefix, ns)| (prefix.clone(), ns.clone()))
            .collect();
        if !self.config.prefixes.contains_key(saref_prefix) {
            out.push((saref_prefix.to_string(), saref_ns.to_string()));
        }
        out
    }
}

/// Literal for `value` under the configured datatype
///
/// Without a datatype the value keeps its natural literal type.
fn coerce(value: &StateValue, datatype: Option<ValueDatatype>) -> Option<Term> {
    match datatype {
        None => value.to_term(),
        Some(ValueDatatype::Double) => value.as_f64().map(Term::double),
        Some(ValueDatatype::Integer) => match value {
            StateValue::Integer(i) => Some(Term::integer(*i)),
            StateValue::Double(d) if d.fract() == 0.0 => Some(Term::integer(*d as i64)),
            StateValue::String(s) => s.trim().parse().ok().map(Term::integer),
            _ => None,
        },
        Some(ValueDatatype::Boolean) => match value {
            StateValue::Boolean(b) => Some(Term::boolean(*b)),
            StateValue::String(s) => s.trim().parse().ok().map(Term::boolean),
            _ => None,
        },
        Some(ValueDatatype::String) => match value {
            StateValue::String(s) => Some(Term::string(s)),
            StateValue::Boolean(b) => Some(Term::string(b.to_string())),
            StateValue::Integer(i) => Some(Term::string(i.to_string())),
            StateValue::Double(d) => Some(Term::string(d.to_string())),
            StateValue::Json(v) => Some(Term::string(v.to_string())),
            StateValue::Null => None,
        },
    }
}
