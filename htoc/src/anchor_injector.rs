//! In-place injection of anchor ids into heading lines

use crate::heading_tree::HeadingTree;
use thiserror::Error;

/// Errors that can occur while injecting anchor ids
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InjectError {
    /// A heading line carries no `>` to place the attribute before
    #[error("heading on line {line} has no '>' to carry an id attribute")]
    MissingTagEnd {
        /// 1-based line number of the malformed heading
        line: usize,
    },
}

/// Insert an `id="..."` attribute into the opening tag of every heading in
/// the tree, immediately before the first `>` of its source line.
///
/// Mutates `lines` in place; callers keep their reference to the same
/// vector. Each node targets a distinct line index, so traversal order
/// does not matter. `lines` must be the sequence the tree was scanned
/// from, and anchors must already be assigned.
pub fn inject_anchor_ids(tree: &HeadingTree, lines: &mut [String]) -> Result<(), InjectError> {
    let line_index = tree.heading.source_line_index;
    let line = &lines[line_index];

    let tag_end = line
        .find('>')
        .ok_or(InjectError::MissingTagEnd { line: line_index + 1 })?;

    let injected = format!(
        "{} id=\"{}\"{}",
        &line[..tag_end],
        tree.anchor,
        &line[tag_end..]
    );
    lines[line_index] = injected;

    for child in &tree.children {
        inject_anchor_ids(child, lines)?;
    }

    Ok(())
}
