use crate::models::{Node, NodeId, NodeKind};

/// Folds a top-level sequence into heading-rooted sections.
///
/// Every heading opens a section regardless of its depth; nodes before the first heading
/// stay at the top level.
pub fn group_sections(nodes: Vec<Node>) -> Vec<Node> {
    let mut out = vec![];
    let mut open: Option<Node> = None;
    for node in nodes {
        if matches!(node.kind, NodeKind::Heading { .. }) {
            out.extend(open.take());
            open = Some(Node::with_items(
                NodeId::derive_from("section", 0, node.id),
                NodeKind::Section {
                    heading_id: node.id,
                },
                vec![node],
            ));
        } else if let Some(section) = &mut open {
            section.items.push(node);
        } else {
            out.push(node);
        }
    }
    out.extend(open);
    out
}
