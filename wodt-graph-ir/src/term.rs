//! Terms stored in subject and object position
//!
//! Subjects are the twin IRI or a blank node; objects may also be literals.
//! Ordering is total (doubles compare by `total_cmp`) so graphs and
//! formatters can keep terms in `BTree*` collections.

use crate::Datatype;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Label of a blank node, without the `_:` marker
///
/// Chosen by the semantic mapper (e.g. `luminosityValue`) and reproduced for
/// the same state, so a removal finds the node that was inserted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlankId(Arc<str>);

impl BlankId {
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Written as `_:label`
impl std::fmt::Display for BlankId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// Scalar carried by a literal term
///
/// Doubles are compared bitwise for equality, so `NaN == NaN` and a graph
/// can always remove a `NaN` value it inserted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum LiteralValue {
    /// Plain text, or the lexical form of a custom datatype
    String(Arc<str>),
    Boolean(bool),
    Integer(i64),
    Double(f64),
}

impl LiteralValue {
    pub fn string(s: impl AsRef<str>) -> Self {
        LiteralValue::String(Arc::from(s.as_ref()))
    }

    /// Lexical form as written in Turtle
    ///
    /// Finite doubles always carry a decimal point or exponent (`100.0`,
    /// `0.2`, `1e21`) so the lexical form never reads back as an integer.
    pub fn lexical(&self) -> String {
        match self {
            LiteralValue::String(s) => s.to_string(),
            LiteralValue::Boolean(b) => b.to_string(),
            LiteralValue::Integer(i) => i.to_string(),
            LiteralValue::Double(d) if d.is_nan() => "NaN".to_string(),
            LiteralValue::Double(d) if d.is_infinite() && d.is_sign_positive() => "INF".to_string(),
            LiteralValue::Double(d) if d.is_infinite() => "-INF".to_string(),
            LiteralValue::Double(d) => format!("{d:?}"),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            LiteralValue::String(_) => 0,
            LiteralValue::Boolean(_) => 1,
            LiteralValue::Integer(_) => 2,
            LiteralValue::Double(_) => 3,
        }
    }
}

impl PartialEq for LiteralValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for LiteralValue {}

impl Hash for LiteralValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            LiteralValue::String(s) => s.hash(state),
            LiteralValue::Boolean(b) => b.hash(state),
            LiteralValue::Integer(i) => i.hash(state),
            LiteralValue::Double(d) => d.to_bits().hash(state),
        }
    }
}

impl PartialOrd for LiteralValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LiteralValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (LiteralValue::String(a), LiteralValue::String(b)) => a.cmp(b),
            (LiteralValue::Boolean(a), LiteralValue::Boolean(b)) => a.cmp(b),
            (LiteralValue::Integer(a), LiteralValue::Integer(b)) => a.cmp(b),
            // total_cmp is Equal exactly when the bit patterns match
            (LiteralValue::Double(a), LiteralValue::Double(b)) => a.total_cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// A node of the twin graph
///
/// IRIs are always stored expanded; prefixes are applied by formatters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    Iri(Arc<str>),
    BlankNode(BlankId),
    /// Literal with its datatype; plain strings are `xsd:string`
    Literal {
        value: LiteralValue,
        datatype: Datatype,
    },
}

impl Term {
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Term::Iri(Arc::from(iri.as_ref()))
    }

    pub fn blank(label: impl AsRef<str>) -> Self {
        Term::BlankNode(BlankId::new(label))
    }

    /// `xsd:string` literal
    pub fn string(value: impl AsRef<str>) -> Self {
        Self::literal(LiteralValue::string(value), Datatype::xsd_string())
    }

    /// `xsd:boolean` literal
    pub fn boolean(value: bool) -> Self {
        Self::literal(LiteralValue::Boolean(value), Datatype::xsd_boolean())
    }

    /// `xsd:integer` literal
    pub fn integer(value: i64) -> Self {
        Self::literal(LiteralValue::Integer(value), Datatype::xsd_integer())
    }

    /// `xsd:double` literal
    pub fn double(value: f64) -> Self {
        Self::literal(LiteralValue::Double(value), Datatype::xsd_double())
    }

    /// Lexical form with an arbitrary datatype (e.g. `rdf:JSON`)
    pub fn typed(value: impl AsRef<str>, datatype: Datatype) -> Self {
        Self::literal(LiteralValue::string(value), datatype)
    }

    fn literal(value: LiteralValue, datatype: Datatype) -> Self {
        Term::Literal { value, datatype }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal { .. })
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::BlankNode(_) | Term::Literal { .. } => None,
        }
    }

    pub fn as_literal(&self) -> Option<(&LiteralValue, &Datatype)> {
        match self {
            Term::Literal { value, datatype } => Some((value, datatype)),
            Term::Iri(_) | Term::BlankNode(_) => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Term::Iri(_) => 0,
            Term::BlankNode(_) => 1,
            Term::Literal { .. } => 2,
        }
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// IRIs, then blank nodes, then literals (by datatype, then value)
impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Term::Iri(a), Term::Iri(b)) => a.cmp(b),
            (Term::BlankNode(a), Term::BlankNode(b)) => a.cmp(b),
            (
                Term::Literal { value, datatype },
                Term::Literal {
                    value: other_value,
                    datatype: other_datatype,
                },
            ) => datatype
                .cmp(other_datatype)
                .then_with(|| value.cmp(other_value)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}
