//! Turtle graph formatter
//!
//! Formats a `Graph` as Turtle with a fixed layout:
//!
//! ```text
//! @prefix saref: <https://saref.etsi.org/core/> .
//!
//! <http://example.com/dt>
//!     saref:hasProperty <https://purl.org/onto/LuminosityFlux> ;
//!     saref:hasPropertyValue [
//!         saref:hasValue "100.0"^^xsd:double
//!     ] .
//! ```
//!
//! Subjects, predicates and objects are sorted and duplicate triples are
//! written once, so the text is a function of the triple set alone.

use crate::policy::BlankNodePolicy;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use wodt_graph_ir::datatype::iri as dt_iri;
use wodt_graph_ir::{BlankId, Datatype, Graph, LiteralValue, Term};

const INDENT: &str = "    ";

/// Configuration for Turtle formatting
#[derive(Clone, Debug, Default)]
pub struct TurtleFormatConfig {
    /// Prefix -> namespace used to compact IRIs (deterministic order via BTreeMap)
    ///
    /// Only prefixes that are actually used appear in the `@prefix` header.
    pub prefixes: BTreeMap<String, String>,

    /// How to write blank nodes
    pub blank_node_policy: BlankNodePolicy,
}

impl TurtleFormatConfig {
    /// Create a new config with no prefixes and inline blank nodes
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the well-known `rdf`, `xsd` and `wodt` prefixes
    pub fn with_default_prefixes(mut self) -> Self {
        for (prefix, namespace) in wodt_vocab::prefixes::DEFAULTS {
            self.prefixes
                .insert((*prefix).to_string(), (*namespace).to_string());
        }
        self
    }

    /// Add a prefix mapping
    pub fn with_prefix(mut self, prefix: impl Into<String>, namespace: impl Into<String>) -> Self {
        self.prefixes.insert(prefix.into(), namespace.into());
        self
    }

    /// Set the blank node policy
    pub fn with_blank_node_policy(mut self, policy: BlankNodePolicy) -> Self {
        self.blank_node_policy = policy;
        self
    }
}

/// Format a Graph as Turtle
///
/// Returns the empty string for an empty graph.
pub fn format_turtle(graph: &Graph, config: &TurtleFormatConfig) -> String {
    if graph.is_empty() {
        return String::new();
    }

    let mut writer = TurtleWriter::new(graph, config);
    let body = writer.write_body();

    let mut out = String::new();
    if !writer.used_prefixes.is_empty() {
        for prefix in &writer.used_prefixes {
            let namespace = &config.prefixes[prefix];
            out.push_str(&format!("@prefix {}: <{}> .\n", prefix, namespace));
        }
        out.push('\n');
    }
    out.push_str(&body);
    out
}

/// Rendering state for one `format_turtle` call
struct TurtleWriter<'a> {
    graph: &'a Graph,
    config: &'a TurtleFormatConfig,
    /// Blank nodes to nest as `[ ... ]` instead of labeling
    inline: HashSet<BlankId>,
    /// Inline nodes currently being written (cycle guard)
    stack: Vec<BlankId>,
    /// Inline nodes already written
    written: HashSet<BlankId>,
    /// Prefixes referenced by the body
    used_prefixes: BTreeSet<String>,
}

impl<'a> TurtleWriter<'a> {
    fn new(graph: &'a Graph, config: &'a TurtleFormatConfig) -> Self {
        let inline = if config.blank_node_policy.inline() {
            single_reference_blank_nodes(graph)
        } else {
            HashSet::new()
        };
        Self {
            graph,
            config,
            inline,
            stack: Vec::new(),
            written: HashSet::new(),
            used_prefixes: BTreeSet::new(),
        }
    }

    fn write_body(&mut self) -> String {
        let graph = self.graph;
        let mut blocks: Vec<String> = Vec::new();

        let roots: Vec<&Term> = graph
            .subjects()
            .filter(|s| match s {
                Term::Iri(_) => true,
                Term::BlankNode(id) => !self.inline.contains(id),
                Term::Literal { .. } => false,
            })
            .collect();
        for subject in roots {
            blocks.push(self.write_block(subject));
        }

        // Inline candidates never reached from a root only occur when blank
        // nodes reference each other in a cycle; label them.
        let orphans: Vec<&Term> = graph
            .subjects()
            .filter(|s| {
                matches!(s, Term::BlankNode(id)
                    if self.inline.contains(id) && !self.written.contains(id))
            })
            .collect();
        for subject in orphans {
            if let Term::BlankNode(id) = subject {
                if self.written.contains(id) {
                    continue;
                }
                self.inline.remove(id);
            }
            blocks.push(self.write_block(subject));
        }

        blocks.join("\n")
    }

    fn write_block(&mut self, subject: &Term) -> String {
        let mut out = String::new();
        match subject {
            Term::BlankNode(id) => out.push_str(&id.to_string()),
            other => self.write_object(&mut out, other, 0),
        }
        out.push('\n');
        self.write_predicates(&mut out, subject, 1);
        out.push_str(" .\n");
        out
    }

    /// Write `pred obj , obj ;` lines for a subject, without the terminator
    fn write_predicates(&mut self, out: &mut String, subject: &Term, depth: usize) {
        let graph = self.graph;
        let mut predicates: BTreeMap<&str, BTreeSet<&Term>> = BTreeMap::new();
        for edge in graph.edges(subject) {
            predicates
                .entry(edge.predicate.as_ref())
                .or_default()
                .insert(&edge.object);
        }

        // rdf:type first, written as `a`
        let mut ordered: Vec<(&str, BTreeSet<&Term>)> = Vec::with_capacity(predicates.len());
        if let Some(types) = predicates.remove(dt_iri::RDF_TYPE) {
            ordered.push((dt_iri::RDF_TYPE, types));
        }
        ordered.extend(predicates);

        for (i, (predicate, objects)) in ordered.into_iter().enumerate() {
            if i > 0 {
                out.push_str(" ;\n");
            }
            push_indent(out, depth);
            if predicate == dt_iri::RDF_TYPE {
                out.push('a');
            } else {
                out.push_str(&self.iri(predicate));
            }
            out.push(' ');
            for (j, object) in objects.into_iter().enumerate() {
                if j > 0 {
                    out.push_str(" , ");
                }
                self.write_object(out, object, depth);
            }
        }
    }

    fn write_object(&mut self, out: &mut String, object: &Term, depth: usize) {
        match object {
            Term::Iri(iri) => out.push_str(&self.iri(iri)),
            Term::Literal { value, datatype } => out.push_str(&self.literal(value, datatype)),
            Term::BlankNode(id) => {
                if !self.inline.contains(id) || self.stack.contains(id) {
                    out.push_str(&id.to_string());
                    return;
                }
                self.written.insert(id.clone());
                if self.graph.edges(object).is_empty() {
                    out.push_str("[]");
                    return;
                }
                self.stack.push(id.clone());
                out.push_str("[\n");
                self.write_predicates(out, object, depth + 1);
                out.push('\n');
                push_indent(out, depth);
                out.push(']');
                self.stack.pop();
            }
        }
    }

    fn literal(&mut self, value: &LiteralValue, datatype: &Datatype) -> String {
        match value {
            LiteralValue::Integer(i) if datatype.as_iri() == dt_iri::XSD_INTEGER => i.to_string(),
            LiteralValue::Boolean(b) if datatype.as_iri() == dt_iri::XSD_BOOLEAN => b.to_string(),
            _ if datatype.is_xsd_string() => quote(&value.lexical()),
            _ => format!("{}^^{}", quote(&value.lexical()), self.iri(datatype.as_iri())),
        }
    }

    /// Compact an IRI with the longest matching prefix, or write it in full
    fn iri(&mut self, iri: &str) -> String {
        let best = self
            .config
            .prefixes
            .iter()
            .filter(|(_, ns)| iri.starts_with(ns.as_str()))
            .filter(|(_, ns)| is_simple_local(&iri[ns.len()..]))
            .max_by_key(|(_, ns)| ns.len());

        match best {
            Some((prefix, ns)) => {
                self.used_prefixes.insert(prefix.clone());
                format!("{}:{}", prefix, &iri[ns.len()..])
            }
            None => format!("<{}>", iri),
        }
    }
}

/// Blank nodes that are the object of exactly one distinct triple
fn single_reference_blank_nodes(graph: &Graph) -> HashSet<BlankId> {
    let mut counts: HashMap<&BlankId, BTreeSet<(&Term, &str)>> = HashMap::new();
    for (subject, edge) in graph.iter() {
        if let Term::BlankNode(id) = &edge.object {
            counts
                .entry(id)
                .or_default()
                .insert((subject, edge.predicate.as_ref()));
        }
    }
    counts
        .into_iter()
        .filter(|(_, refs)| refs.len() == 1)
        .map(|(id, _)| id.clone())
        .collect()
}

/// Local names we are willing to write in prefixed form
///
/// Deliberately narrower than Turtle's PN_LOCAL: anything unusual is written
/// as a full IRI instead.
fn is_simple_local(local: &str) -> bool {
    let mut chars = local.chars();
    match chars.next() {
        None => true,
        Some(c) if c.is_ascii_alphanumeric() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        }
        Some(_) => false,
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
