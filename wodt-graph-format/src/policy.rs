//! Formatting policies
//!
//! These enums control how graphs are rendered.

/// Policy for blank node formatting in Turtle output
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BlankNodePolicy {
    /// Write blank nodes referenced exactly once inline as `[ ... ]`
    ///
    /// Nodes referenced more than once fall back to their `_:label`.
    #[default]
    Inline,

    /// Always write `_:label` and give each blank node its own subject block
    ///
    /// Labels are the stable ids chosen by the semantic mapper, so the
    /// output stays deterministic.
    Labeled,
}

impl BlankNodePolicy {
    /// Check if single-reference blank nodes should be nested
    pub fn inline(&self) -> bool {
        matches!(self, BlankNodePolicy::Inline)
    }
}
