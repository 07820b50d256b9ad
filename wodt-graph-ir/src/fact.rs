//! Unsubjected triples produced by a semantic mapper
//!
//! A [`Fact`] is a `(predicate, object)` pair whose subject is supplied by
//! whoever commits it: the twin resource for top-level facts, or the enclosing
//! blank node for nested ones.

use crate::{BlankId, Datatype, LiteralValue, Term};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A predicate/object pair attached to an implicit subject
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fact {
    /// Expanded predicate IRI
    pub predicate: Arc<str>,
    /// Object of the fact
    pub object: FactObject,
}

/// Object position of a [`Fact`]
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactObject {
    /// Reference to another named resource
    Iri(Arc<str>),
    /// Typed scalar value
    Literal {
        value: LiteralValue,
        datatype: Datatype,
    },
    /// Anonymous compound value with its own nested facts
    BlankNode(BlankNode),
}

/// Blank node carrying nested facts
///
/// The id is chosen by the mapper and must be reproduced identically for the
/// same input state, so a later removal targets the same node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlankNode {
    id: BlankId,
    facts: Vec<Fact>,
}

impl BlankNode {
    /// Blank node with no nested facts
    pub fn new(id: impl AsRef<str>) -> Self {
        Self::with_facts(id, Vec::new())
    }

    /// Blank node with the given nested facts
    pub fn with_facts(id: impl AsRef<str>, facts: Vec<Fact>) -> Self {
        Self {
            id: BlankId::new(id),
            facts,
        }
    }

    /// Append a nested fact (builder style)
    pub fn add_fact(mut self, fact: Fact) -> Self {
        self.facts.push(fact);
        self
    }

    pub fn id(&self) -> &BlankId {
        &self.id
    }

    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }
}

impl Fact {
    /// Create a fact from a predicate IRI and an object
    pub fn new(predicate: impl AsRef<str>, object: FactObject) -> Self {
        Self {
            predicate: Arc::from(predicate.as_ref()),
            object,
        }
    }

    /// Fact whose object is a named resource
    pub fn iri(predicate: impl AsRef<str>, object: impl AsRef<str>) -> Self {
        Self::new(predicate, FactObject::Iri(Arc::from(object.as_ref())))
    }

    /// Fact whose object is a literal built from a [`Term`] constructor
    ///
    /// Non-literal terms are mapped to their natural object kind.
    pub fn term(predicate: impl AsRef<str>, object: Term) -> Self {
        let object = match object {
            Term::Iri(iri) => FactObject::Iri(iri),
            Term::BlankNode(id) => FactObject::BlankNode(BlankNode {
                id,
                facts: Vec::new(),
            }),
            Term::Literal { value, datatype } => FactObject::Literal { value, datatype },
        };
        Self::new(predicate, object)
    }

    /// Fact whose object is a blank node
    pub fn blank(predicate: impl AsRef<str>, node: BlankNode) -> Self {
        Self::new(predicate, FactObject::BlankNode(node))
    }

    /// Object as a graph term (blank nodes lose their nested facts)
    pub fn object_term(&self) -> Term {
        match &self.object {
            FactObject::Iri(iri) => Term::Iri(iri.clone()),
            FactObject::Literal { value, datatype } => Term::Literal {
                value: value.clone(),
                datatype: datatype.clone(),
            },
            FactObject::BlankNode(node) => Term::BlankNode(node.id.clone()),
        }
    }

    /// Nested facts if the object is a blank node
    pub fn nested(&self) -> Option<(&BlankId, &[Fact])> {
        match &self.object {
            FactObject::BlankNode(node) => Some((&node.id, &node.facts)),
            FactObject::Iri(_) | FactObject::Literal { .. } => None,
        }
    }
}

/// Collect every blank node id introduced by `facts`, depth first
pub fn blank_ids(facts: &[Fact]) -> Vec<&BlankId> {
    let mut ids = Vec::new();
    collect_blank_ids(facts, &mut ids);
    ids
}

fn collect_blank_ids<'a>(facts: &'a [Fact], out: &mut Vec<&'a BlankId>) {
    for fact in facts {
        if let Some((id, nested)) = fact.nested() {
            out.push(id);
            collect_blank_ids(nested, out);
        }
    }
}
