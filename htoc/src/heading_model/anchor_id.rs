//! Hierarchical anchor identifier

use itertools::Itertools;
use std::fmt;

/// Anchor identifier for a heading
///
/// Built top-down: the root id is always `1`, and a child at 1-based
/// ordinal `i` extends its parent's id with `_i` (e.g. `1_2_1`). The
/// default value has no components and means no assignment pass has run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorId {
    /// Ordinal components (e.g. [1, 2, 1] for "1_2_1")
    pub parts: Vec<usize>,
}

impl AnchorId {
    /// Id of the tree root
    pub fn root() -> Self {
        Self { parts: vec![1] }
    }

    /// Id of the direct child at the given 1-based ordinal
    pub fn child(&self, ordinal: usize) -> Self {
        let mut parts = self.parts.clone();
        parts.push(ordinal);
        Self { parts }
    }

    /// Same-document link target, e.g. `#1_2_1`
    pub fn fragment(&self) -> String {
        format!("#{}", self)
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parts.iter().join("_"))
    }
}
