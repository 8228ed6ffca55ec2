//! Heading hierarchy built from the flat scan order
//!
//! The tree is derived purely from heading levels: an h2 nests under the
//! closest preceding h1, and so on. The first heading in the document is
//! the single root; anything the root's hierarchy cannot reach stays in
//! the document text but is absent from the tree.

use crate::heading_model::{AnchorId, Heading};
use std::collections::HashSet;
use thiserror::Error;

/// Errors that can occur while building the heading tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Source document has no headings, so no root can be chosen
    #[error("source document contains no headings")]
    NoHeadings,
}

/// A heading with its direct subheadings
#[derive(Debug, Clone)]
pub struct HeadingTree {
    /// The heading this node wraps
    pub heading: Heading,
    /// Direct subheadings in document order
    pub children: Vec<HeadingTree>,
    /// Anchor id; empty until `assign_anchors` runs
    pub anchor: AnchorId,
}

impl HeadingTree {
    /// Build the tree rooted at the first heading of the document
    pub fn from_headings(headings: &[Heading]) -> Result<Self, TreeError> {
        let root = headings.first().ok_or(TreeError::NoHeadings)?;
        Ok(Self::build(root, headings))
    }

    /// Recursively build the subtree rooted at `top`
    fn build(top: &Heading, headings: &[Heading]) -> Self {
        let children = direct_subheadings(top, headings)
            .map(|sub| Self::build(sub, headings))
            .collect();

        Self {
            heading: top.clone(),
            children,
            anchor: AnchorId::default(),
        }
    }

    /// Assign anchor ids in a single top-down pass
    ///
    /// The root is always `1`; a child at 1-based ordinal `i` among its
    /// parent's children gets the parent's id extended with `_i`. The pass
    /// is deterministic, so identical input reproduces identical anchors.
    pub fn assign_anchors(&mut self) {
        self.assign_from(AnchorId::root());
    }

    fn assign_from(&mut self, anchor: AnchorId) {
        for (ordinal, child) in self.children.iter_mut().enumerate() {
            child.assign_from(anchor.child(ordinal + 1));
        }
        self.anchor = anchor;
    }

    /// Record the `sequence_index` of every node reachable from this one
    ///
    /// The complement against the flat scan list is exactly the set of
    /// headings that were dropped by the nesting rules.
    pub fn collect_sequence_indices(&self, indices: &mut HashSet<usize>) {
        indices.insert(self.heading.sequence_index);
        for child in &self.children {
            child.collect_sequence_indices(indices);
        }
    }
}

/// Direct subheadings of `top` within the flat document-ordered list
///
/// Scans forward from the record after `top`: a record one level deeper is
/// a direct child, a record at `top`'s own level closes the subtree, and
/// every other level is skipped without stopping. Skipping means a
/// document that jumps levels (h1 directly to h3) leaves the jumped-over
/// heading attached to no node at all.
fn direct_subheadings<'a>(
    top: &Heading,
    headings: &'a [Heading],
) -> impl Iterator<Item = &'a Heading> {
    let top_level = top.level;
    let sub_level = top.level + 1;

    headings[top.sequence_index + 1..]
        .iter()
        .take_while(move |h| h.level != top_level)
        .filter(move |h| h.level == sub_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headings(levels: &[usize]) -> Vec<Heading> {
        levels
            .iter()
            .enumerate()
            .map(|(i, &level)| Heading {
                level,
                sequence_index: i,
                source_line_index: i,
                raw_line: format!("<h{level}>Section {i}</h{level}>"),
            })
            .collect()
    }

    fn anchors(tree: &HeadingTree) -> Vec<String> {
        let mut out = vec![tree.anchor.to_string()];
        for child in &tree.children {
            out.extend(anchors(child));
        }
        out
    }

    #[test]
    fn test_single_root_with_two_children() {
        // h1 > h2 > h2 > h1: one root, two children, and the trailing h1
        // is outside the single-root tree
        let records = headings(&[1, 2, 2, 1]);
        let tree = HeadingTree::from_headings(&records).unwrap();

        assert_eq!(tree.heading.sequence_index, 0);
        assert_eq!(tree.children.len(), 2);
        assert!(tree.children.iter().all(|c| c.children.is_empty()));

        let mut reachable = HashSet::new();
        tree.collect_sequence_indices(&mut reachable);
        assert!(!reachable.contains(&3));
    }

    #[test]
    fn test_nested_levels() {
        let records = headings(&[1, 2, 3, 3, 2]);
        let tree = HeadingTree::from_headings(&records).unwrap();

        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[0].children.len(), 2);
        assert_eq!(tree.children[1].children.len(), 0);
    }

    #[test]
    fn test_skipped_level_is_dropped() {
        // h1 then h3 then h1: the h3 is neither a direct child of the root
        // nor reachable through any other node
        let records = headings(&[1, 3, 1]);
        let tree = HeadingTree::from_headings(&records).unwrap();

        assert!(tree.children.is_empty());

        let mut reachable = HashSet::new();
        tree.collect_sequence_indices(&mut reachable);
        assert_eq!(reachable, HashSet::from([0]));
    }

    #[test]
    fn test_shallower_record_does_not_close_subtree() {
        // An h1 after an h2 root is neither child nor sibling; the scan
        // keeps going and still finds the later h3
        let records = headings(&[2, 1, 3]);
        let tree = HeadingTree::from_headings(&records).unwrap();

        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].heading.sequence_index, 2);
    }

    #[test]
    fn test_anchor_assignment_flat_siblings() {
        let records = headings(&[1, 2, 2, 2, 2]);
        let mut tree = HeadingTree::from_headings(&records).unwrap();
        tree.assign_anchors();

        assert_eq!(anchors(&tree), vec!["1", "1_1", "1_2", "1_3", "1_4"]);
    }

    #[test]
    fn test_anchor_assignment_nested() {
        let records = headings(&[1, 2, 3, 2]);
        let mut tree = HeadingTree::from_headings(&records).unwrap();
        tree.assign_anchors();

        assert_eq!(anchors(&tree), vec!["1", "1_1", "1_1_1", "1_2"]);
    }

    #[test]
    fn test_no_headings_is_an_error() {
        let err = HeadingTree::from_headings(&[]).unwrap_err();
        assert_eq!(err, TreeError::NoHeadings);
    }
}
