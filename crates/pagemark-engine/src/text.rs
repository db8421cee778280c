//! Plain-text extraction, for previews and search indexing.

use crate::models::{Node, NodeKind};

/// Concatenated text of a subtree in document order: `text` nodes, inline code and code
/// blocks. Table cells are included, row by row.
pub fn text_content(node: &Node) -> String {
    let mut out = String::new();
    collect(node, &mut out);
    out
}

/// [`text_content`] over a sequence of sibling nodes.
pub fn text_content_of(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        collect(node, &mut out);
    }
    out
}

fn collect(node: &Node, out: &mut String) {
    match &node.kind {
        NodeKind::Text { text }
        | NodeKind::InlineCode { text, .. }
        | NodeKind::CodeBlock { text, .. } => out.push_str(text),
        NodeKind::Table { headers, rows, .. } => {
            for cell in headers.iter().chain(rows.iter().flatten()) {
                for node in cell {
                    collect(node, out);
                }
            }
        }
        _ => {}
    }
    for child in &node.items {
        collect(child, out);
    }
}
