use std::fmt::Write;

use crate::models::{Align, Node, NodeKind, PropValue};

/// Renders nodes as an outline: one node per line, children indented by two spaces.
///
/// ```text
/// section
///   heading depth=1
///     text "Title"
/// ```
pub fn normalize(nodes: &[Node]) -> String {
    let mut out = String::new();
    write_nodes(&mut out, nodes, 0);
    out
}

fn write_nodes(out: &mut String, nodes: &[Node], level: usize) {
    for node in nodes {
        write_node(out, node, level);
    }
}

fn write_node(out: &mut String, node: &Node, level: usize) {
    let pad = "  ".repeat(level);
    let _ = writeln!(out, "{pad}{}", label(&node.kind));

    if let NodeKind::Table { headers, rows, .. } = &node.kind {
        let _ = writeln!(out, "{pad}  header");
        write_cells(out, headers, level + 2);
        for row in rows {
            let _ = writeln!(out, "{pad}  row");
            write_cells(out, row, level + 2);
        }
    }
    write_nodes(out, &node.items, level + 1);
}

fn write_cells(out: &mut String, cells: &[Vec<Node>], level: usize) {
    for cell in cells {
        let _ = writeln!(out, "{}cell", "  ".repeat(level));
        write_nodes(out, cell, level + 1);
    }
}

fn label(kind: &NodeKind) -> String {
    let tag = kind.tag();
    match kind {
        NodeKind::Heading { depth }
        | NodeKind::ListItems { depth }
        | NodeKind::ListItem { depth } => format!("{tag} depth={depth}"),
        NodeKind::OrderedListItems { depth, start_index } => {
            format!("{tag} depth={depth} start={start_index}")
        }
        NodeKind::OrderedListItem { depth, number } => {
            format!("{tag} depth={depth} number={number}")
        }
        NodeKind::Component { name, props } => {
            let mut s = format!("{tag} {name}");
            for (key, value) in props.iter() {
                let _ = write!(s, " {key}={}", prop(value));
            }
            s
        }
        NodeKind::Text { text } => format!("{tag} {text:?}"),
        NodeKind::Link { title, href } | NodeKind::Image { title, href } => {
            format!("{tag} {title:?} -> {href}")
        }
        NodeKind::InlineCode {
            text,
            language,
            color,
            tokens,
        } => {
            let mut s = format!("{tag} {text:?}");
            if let Some(language) = language {
                let _ = write!(s, " lang={language}");
            }
            if let Some(color) = color {
                let _ = write!(s, " color={color}");
            }
            if tokens.is_some() {
                s.push_str(" highlighted");
            }
            s
        }
        NodeKind::CodeBlock {
            text,
            language,
            name,
            tokens,
        } => {
            let mut s = format!("{tag} {language}");
            if let Some(name) = name {
                let _ = write!(s, " name={name:?}");
            }
            if tokens.is_some() {
                s.push_str(" highlighted");
            }
            let _ = write!(s, " {text:?}");
            s
        }
        NodeKind::InlineMath { content } | NodeKind::BlockMath { content } => {
            format!("{tag} {content:?}")
        }
        NodeKind::Youtube { video_id } => format!("{tag} {video_id}"),
        NodeKind::Table { align, .. } => {
            let mut s = tag.to_string();
            for a in align {
                s.push(' ');
                s.push_str(match a {
                    Align::Left => "left",
                    Align::Center => "center",
                    Align::Right => "right",
                });
            }
            s
        }
        NodeKind::Section { .. }
        | NodeKind::Paragraph
        | NodeKind::Blockquote
        | NodeKind::Bold
        | NodeKind::Italic
        | NodeKind::Strikethrough
        | NodeKind::Highlighted
        | NodeKind::Sup
        | NodeKind::Sub
        | NodeKind::Hr => tag.to_string(),
    }
}

fn prop(value: &PropValue) -> String {
    match value {
        PropValue::String(s) => format!("{s:?}"),
        other => other.to_text(),
    }
}
