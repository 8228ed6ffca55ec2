//! Nested table-of-contents markup rendering

use crate::heading_tree::HeadingTree;

/// Render the table of contents for the tree as nested unordered lists
///
/// Every node contributes its own `<ul>` holding one `<li>` link followed
/// by the fragments of its children, so the root heading appears as the
/// first list item of the top-level list rather than as a bare title.
/// Display text is emitted as-is; the source is assumed to already be a
/// valid HTML fragment.
pub fn render_toc(tree: &HeadingTree) -> String {
    let mut output = String::new();
    write_entry(&mut output, tree);
    output
}

fn write_entry(output: &mut String, node: &HeadingTree) {
    output.push_str("<ul>\n");
    output.push_str(&format!(
        "<li><a href=\"{}\">{}</a></li>\n",
        node.anchor.fragment(),
        node.heading.display_text()
    ));

    for child in &node.children {
        write_entry(output, child);
    }

    output.push_str("</ul>\n");
}
