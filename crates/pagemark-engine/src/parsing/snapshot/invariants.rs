use crate::models::{Node, NodeKind};

const BLOCKED_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Panics if the tree breaks a structural invariant.
pub fn check(nodes: &[Node]) {
    for node in nodes {
        check_node(node);
    }
}

fn check_node(node: &Node) {
    if let Some(kind) = node.kind.list_container_kind() {
        let depth = node.kind.depth();
        for child in &node.items {
            assert_eq!(
                child.kind.list_item_kind(),
                Some(kind),
                "list container {} holds a {} node",
                node.id,
                child.tag()
            );
            assert_eq!(
                child.kind.depth(),
                depth,
                "list container {} holds an item at another depth",
                node.id
            );
        }
    }

    if let NodeKind::Section { heading_id } = &node.kind {
        let first = node.items.first();
        assert!(
            first.is_some_and(|first| matches!(first.kind, NodeKind::Heading { .. })),
            "section {} does not start with its heading",
            node.id
        );
        assert_eq!(
            first.map(|first| first.id),
            Some(*heading_id),
            "section {} names another heading",
            node.id
        );
    }

    if let NodeKind::Link { href, .. } | NodeKind::Image { href, .. } = &node.kind {
        let lowered = href.trim().to_ascii_lowercase();
        assert!(
            !BLOCKED_SCHEMES.iter().any(|s| lowered.starts_with(s)),
            "unsafe href survived sanitizing: {href}"
        );
    }

    if let NodeKind::Table { headers, rows, .. } = &node.kind {
        for cell in headers.iter().chain(rows.iter().flatten()) {
            check(cell);
        }
    }
    check(&node.items);
}
