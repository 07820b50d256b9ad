//! Adjacency-style RDF graph
//!
//! Each subject (the twin IRI or a blank node id) owns the list of its
//! outgoing `(predicate, object)` edges. Edges use bag semantics: the same
//! edge inserted twice must be removed twice, which lets two registry keys
//! share an identical fact without one removal erasing the other's copy.
//! Formatters dedupe at output time.

use crate::{Fact, Term};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Outgoing edge of a subject
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    /// Expanded predicate IRI
    pub predicate: Arc<str>,
    /// Object term
    pub object: Term,
}

impl Edge {
    pub fn new(predicate: Arc<str>, object: Term) -> Self {
        Self { predicate, object }
    }
}

/// A collection of RDF triples grouped by subject
///
/// # Example
///
/// ```
/// use wodt_graph_ir::{Fact, Graph, Term};
///
/// let twin = Term::iri("http://example.com/dt");
/// let facts = vec![Fact::iri(
///     "https://brickschema.org/schema/Brick#hasLocation",
///     "http://exampleRoomDT.it",
/// )];
///
/// let mut graph = Graph::new();
/// graph.insert_facts(&twin, &facts);
/// assert_eq!(graph.len(), 1);
///
/// graph.remove_facts(&twin, &facts);
/// assert!(graph.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    /// Subject -> outgoing edges (deterministic subject order via BTreeMap)
    subjects: BTreeMap<Term, Vec<Edge>>,
    /// Total number of edges, duplicates included
    len: usize,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of triples (duplicates included)
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove every triple
    pub fn clear(&mut self) {
        self.subjects.clear();
        self.len = 0;
    }

    /// Add a single edge
    pub fn add_edge(&mut self, subject: Term, edge: Edge) {
        debug_assert!(!subject.is_literal(), "literal in subject position");
        self.subjects.entry(subject).or_default().push(edge);
        self.len += 1;
    }

    /// Remove one occurrence of an edge
    ///
    /// Returns `false` if the edge was not present.
    pub fn remove_edge(&mut self, subject: &Term, edge: &Edge) -> bool {
        let Some(edges) = self.subjects.get_mut(subject) else {
            return false;
        };
        let Some(pos) = edges.iter().position(|e| e == edge) else {
            return false;
        };
        edges.remove(pos);
        if edges.is_empty() {
            self.subjects.remove(subject);
        }
        self.len -= 1;
        true
    }

    /// Insert facts under `subject`, materializing blank nodes as subjects
    /// of their own nested facts
    pub fn insert_facts(&mut self, subject: &Term, facts: &[Fact]) {
        for fact in facts {
            self.add_edge(
                subject.clone(),
                Edge::new(fact.predicate.clone(), fact.object_term()),
            );
            if let Some((id, nested)) = fact.nested() {
                self.insert_facts(&Term::BlankNode(id.clone()), nested);
            }
        }
    }

    /// Remove facts previously inserted with [`Graph::insert_facts`]
    ///
    /// Blank nodes are removed bottom-up: a node's nested facts go before the
    /// edge that points at it. Returns the number of edges removed.
    pub fn remove_facts(&mut self, subject: &Term, facts: &[Fact]) -> usize {
        let mut removed = 0;
        for fact in facts {
            if let Some((id, nested)) = fact.nested() {
                removed += self.remove_facts(&Term::BlankNode(id.clone()), nested);
            }
            let edge = Edge::new(fact.predicate.clone(), fact.object_term());
            if self.remove_edge(subject, &edge) {
                removed += 1;
            }
        }
        removed
    }

    /// Check whether an edge is present at least once
    pub fn contains(&self, subject: &Term, edge: &Edge) -> bool {
        self.edges(subject).contains(edge)
    }

    /// Outgoing edges of a subject (empty if unknown)
    pub fn edges(&self, subject: &Term) -> &[Edge] {
        self.subjects.get(subject).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Subjects in deterministic order
    pub fn subjects(&self) -> impl Iterator<Item = &Term> {
        self.subjects.keys()
    }

    /// Iterate over all `(subject, edge)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&Term, &Edge)> {
        self.subjects
            .iter()
            .flat_map(|(s, edges)| edges.iter().map(move |e| (s, e)))
    }

    /// Number of edges whose object is `term`
    pub fn reference_count(&self, term: &Term) -> usize {
        self.iter().filter(|(_, e)| &e.object == term).count()
    }

    /// Whether `term` appears anywhere in the graph, as subject or object
    pub fn mentions(&self, term: &Term) -> bool {
        self.subjects.contains_key(term) || self.reference_count(term) > 0
    }
}
