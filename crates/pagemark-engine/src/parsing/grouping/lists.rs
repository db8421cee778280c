use std::{iter::Peekable, vec};

use crate::models::{ListKind, Node, NodeId, NodeKind};

type Pending = Peekable<vec::IntoIter<Node>>;

/// Folds runs of flat, depth-tagged list items into nested list containers.
///
/// Non-list nodes pass through untouched and end the current run.
pub fn group_list_items(nodes: Vec<Node>) -> Vec<Node> {
    let mut pending = nodes.into_iter().peekable();
    let mut out = vec![];
    while let Some(node) = pending.next() {
        match node.kind.list_item_kind() {
            Some(kind) => out.push(build_list(node, kind, &mut pending)),
            None => out.push(node),
        }
    }
    out
}

/// Builds one container at `first`'s depth, pulling items until the run ends at this level.
/// Deeper items recurse and hang off the previous item.
fn build_list(first: Node, kind: ListKind, pending: &mut Pending) -> Node {
    let depth = first.kind.depth().unwrap_or_default();
    let mut container = container_for(&first, kind, depth);
    container.items.push(first);

    while let Some(next) = pending.peek() {
        let (Some(next_kind), Some(next_depth)) = (next.kind.list_item_kind(), next.kind.depth())
        else {
            break;
        };
        if next_depth < depth || (next_depth == depth && next_kind != kind) {
            break;
        }
        let Some(item) = pending.next() else {
            break;
        };
        if next_depth == depth {
            container.items.push(item);
            continue;
        }
        let nested = build_list(item, next_kind, pending);
        if let Some(parent) = container.items.last_mut() {
            parent.items.push(nested);
        }
    }
    container
}

fn container_for(first: &Node, kind: ListKind, depth: usize) -> Node {
    match kind {
        ListKind::Unordered => Node::new(
            NodeId::derive_from("list-items", depth, first.id),
            NodeKind::ListItems { depth },
        ),
        ListKind::Ordered => {
            let start_index = match first.kind {
                NodeKind::OrderedListItem { number, .. } => number,
                _ => 1,
            };
            Node::new(
                NodeId::derive_from("ordered-list-items", depth, first.id),
                NodeKind::OrderedListItems { depth, start_index },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::snapshot::{invariants, normalize};
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Node {
        Node::new(
            NodeId::derive("text", 0, s),
            NodeKind::Text { text: s.into() },
        )
    }

    fn bullet(line: usize, depth: usize, s: &str) -> Node {
        Node::with_items(
            NodeId::derive("list-item", line, s),
            NodeKind::ListItem { depth },
            vec![text(s)],
        )
    }

    fn numbered(line: usize, depth: usize, number: u64, s: &str) -> Node {
        Node::with_items(
            NodeId::derive("ordered-list-item", line, s),
            NodeKind::OrderedListItem { depth, number },
            vec![text(s)],
        )
    }

    fn para(line: usize, s: &str) -> Node {
        Node::with_items(
            NodeId::derive("paragraph", line, s),
            NodeKind::Paragraph,
            vec![text(s)],
        )
    }

    #[test]
    fn same_depth_items_share_a_container() {
        let grouped = group_list_items((0..5).map(|i| bullet(i, 0, "x")).collect());
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].items.len(), 5);
        invariants(&grouped);
    }

    #[test]
    fn nested_items_hang_off_previous_item() {
        let grouped = group_list_items(vec![
            bullet(0, 0, "A"),
            bullet(1, 0, "B"),
            bullet(2, 1, "C"),
        ]);
        assert_eq!(
            normalize(&grouped),
            concat!(
                "list-items depth=0\n",
                "  list-item depth=0\n",
                "    text \"A\"\n",
                "  list-item depth=0\n",
                "    text \"B\"\n",
                "    list-items depth=1\n",
                "      list-item depth=1\n",
                "        text \"C\"\n",
            )
        );
        invariants(&grouped);
    }

    #[test]
    fn returning_to_shallower_depth_continues_outer_list() {
        let grouped = group_list_items(vec![
            bullet(0, 0, "a"),
            bullet(1, 1, "b"),
            bullet(2, 2, "c"),
            bullet(3, 0, "d"),
        ]);
        assert_eq!(grouped.len(), 1);
        let outer = &grouped[0];
        assert_eq!(outer.items.len(), 2);
        assert_eq!(outer.items[0].items[1].tag(), "list-items");
        assert_eq!(outer.items[0].items[1].items[0].items[1].tag(), "list-items");
        invariants(&grouped);
    }

    #[test]
    fn kind_change_at_same_depth_starts_new_container() {
        let grouped = group_list_items(vec![
            bullet(0, 0, "a"),
            numbered(1, 0, 1, "b"),
            numbered(2, 0, 2, "c"),
            bullet(3, 0, "d"),
        ]);
        assert_eq!(
            grouped.iter().map(Node::tag).collect::<Vec<_>>(),
            vec!["list-items", "ordered-list-items", "list-items"]
        );
        assert_eq!(grouped[1].items.len(), 2);
        invariants(&grouped);
    }

    #[test]
    fn ordered_container_starts_at_first_number() {
        let grouped = group_list_items(vec![numbered(0, 0, 4, "four"), numbered(1, 0, 5, "five")]);
        assert_eq!(
            grouped[0].kind,
            NodeKind::OrderedListItems {
                depth: 0,
                start_index: 4
            }
        );
    }

    #[test]
    fn nested_list_of_other_kind() {
        let grouped = group_list_items(vec![bullet(0, 0, "a"), numbered(1, 1, 1, "b")]);
        assert_eq!(grouped[0].items[0].items[1].tag(), "ordered-list-items");
        invariants(&grouped);
    }

    #[test]
    fn paragraph_breaks_the_run() {
        let grouped = group_list_items(vec![bullet(0, 0, "a"), para(1, "p"), bullet(2, 0, "b")]);
        assert_eq!(
            grouped.iter().map(Node::tag).collect::<Vec<_>>(),
            vec!["list-items", "paragraph", "list-items"]
        );
    }

    #[test]
    fn run_starting_deep_keeps_its_depth() {
        let grouped = group_list_items(vec![bullet(0, 2, "deep"), bullet(1, 0, "top")]);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].kind, NodeKind::ListItems { depth: 2 });
        assert_eq!(grouped[1].kind, NodeKind::ListItems { depth: 0 });
    }

    #[test]
    fn container_ids_are_deterministic() {
        let make = || group_list_items(vec![bullet(0, 0, "a"), bullet(1, 0, "b")]);
        assert_eq!(make()[0].id, make()[0].id);
        assert_ne!(make()[0].id, make()[0].items[0].id);
    }
}
