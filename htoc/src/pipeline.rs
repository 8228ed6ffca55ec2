//! Single-pass document processing pipeline
//!
//! This module orchestrates the stages of the transformation:
//! 1. **Scan**: split the source into lines and collect heading records
//! 2. **Structure**: build the heading tree and assign anchor ids
//! 3. **Emit**: render the TOC, inject ids into the heading lines, and
//!    assemble the destination document
//!
//! The line vector is read by the scanner, mutated only by the injector,
//! and serialized by the assembler; ordering is enforced by call order.

use crate::anchor_injector;
use crate::heading_model::{self, Heading};
use crate::heading_tree::HeadingTree;
use crate::html_assembler;
use crate::toc_renderer;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Counters reported back to the CLI layer after a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Headings found by the scanner
    pub heading_count: usize,
    /// Headings that received an anchor (reachable from the tree root)
    pub anchored_count: usize,
}

/// Run the whole pipeline from source path to destination path
pub fn generate(source: &Path, destination: &Path) -> Result<GenerateSummary> {
    let text = fs::read_to_string(source)
        .with_context(|| format!("Failed to read {}", source.display()))?;

    // Split so that joining with '\n' reproduces the source byte-for-byte;
    // lines the injector leaves alone must round-trip unchanged.
    let mut lines: Vec<String> = text.split('\n').map(str::to_owned).collect();

    let headings = heading_model::scan_headings(&lines)
        .with_context(|| format!("Failed to scan headings in {}", source.display()))?;
    log::info!("scanned {} headings", headings.len());

    let mut tree = HeadingTree::from_headings(&headings).with_context(|| {
        format!(
            "Cannot build a table of contents for {}",
            source.display()
        )
    })?;
    tree.assign_anchors();

    let anchored_count = warn_dropped_headings(&tree, &headings);

    let toc = toc_renderer::render_toc(&tree);
    anchor_injector::inject_anchor_ids(&tree, &mut lines)
        .with_context(|| format!("Failed to inject anchor ids into {}", source.display()))?;

    html_assembler::write_document(&toc, &lines, destination)
        .with_context(|| format!("Failed to write {}", destination.display()))?;

    Ok(GenerateSummary {
        heading_count: headings.len(),
        anchored_count,
    })
}

/// Warn about headings the tree cannot reach and count the anchored ones
///
/// A heading becomes unreachable when the document skips a level (h1
/// straight to h3) or repeats the root's level after the root subtree
/// closes. Such headings keep their text in the output but get no anchor
/// and no TOC entry.
fn warn_dropped_headings(tree: &HeadingTree, headings: &[Heading]) -> usize {
    let mut reachable = HashSet::new();
    tree.collect_sequence_indices(&mut reachable);

    for heading in headings {
        if !reachable.contains(&heading.sequence_index) {
            log::warn!(
                "heading <h{}> on line {} is unreachable from the root hierarchy; \
                 it keeps its text but gets no anchor and no TOC entry",
                heading.level,
                heading.source_line_index + 1
            );
        }
    }

    reachable.len()
}
