use serde::Serialize;

use super::{id::NodeId, props::ComponentProps, tokens::ThemedTokens};

/// One syntactic unit of the parsed tree.
///
/// Container kinds carry their children in `items`; leaf kinds leave it empty.
/// `items` is always in source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Node>,
}

/// Column alignment of a table, taken from the header separator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Which flavour of list a list item or list container belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum NodeKind {
    /// A heading and everything up to the next heading; `heading_id` names the first item.
    Section {
        heading_id: NodeId,
    },
    Heading {
        depth: usize,
    },
    Paragraph,
    ListItems {
        depth: usize,
    },
    ListItem {
        depth: usize,
    },
    OrderedListItems {
        depth: usize,
        #[serde(rename = "orderedListStartIndex")]
        start_index: u64,
    },
    OrderedListItem {
        depth: usize,
        number: u64,
    },
    Blockquote,
    Bold,
    Italic,
    Strikethrough,
    Highlighted,
    Sup,
    Sub,
    /// A container component (`::callout ... ::`) or an inline one (`:kbd{value="K"}`).
    Component {
        name: String,
        #[serde(rename = "componentProps")]
        props: ComponentProps,
    },
    Text {
        text: String,
    },
    Link {
        title: String,
        href: String,
    },
    Image {
        title: String,
        href: String,
    },
    InlineCode {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        tokens: Option<ThemedTokens>,
    },
    CodeBlock {
        text: String,
        language: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        tokens: Option<ThemedTokens>,
    },
    InlineMath {
        content: String,
    },
    BlockMath {
        content: String,
    },
    Hr,
    Youtube {
        video_id: String,
    },
    Table {
        headers: Vec<Vec<Node>>,
        rows: Vec<Vec<Vec<Node>>>,
        align: Vec<Align>,
    },
}

impl NodeKind {
    /// The `type` tag this kind serializes with.
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Section { .. } => "section",
            NodeKind::Heading { .. } => "heading",
            NodeKind::Paragraph => "paragraph",
            NodeKind::ListItems { .. } => "list-items",
            NodeKind::ListItem { .. } => "list-item",
            NodeKind::OrderedListItems { .. } => "ordered-list-items",
            NodeKind::OrderedListItem { .. } => "ordered-list-item",
            NodeKind::Blockquote => "blockquote",
            NodeKind::Bold => "bold",
            NodeKind::Italic => "italic",
            NodeKind::Strikethrough => "strikethrough",
            NodeKind::Highlighted => "highlighted",
            NodeKind::Sup => "sup",
            NodeKind::Sub => "sub",
            NodeKind::Component { .. } => "component",
            NodeKind::Text { .. } => "text",
            NodeKind::Link { .. } => "link",
            NodeKind::Image { .. } => "image",
            NodeKind::InlineCode { .. } => "inline-code",
            NodeKind::CodeBlock { .. } => "code-block",
            NodeKind::InlineMath { .. } => "inline-math",
            NodeKind::BlockMath { .. } => "block-math",
            NodeKind::Hr => "hr",
            NodeKind::Youtube { .. } => "youtube",
            NodeKind::Table { .. } => "table",
        }
    }

    /// Nesting level for list items and list containers.
    pub fn depth(&self) -> Option<usize> {
        match self {
            NodeKind::ListItems { depth }
            | NodeKind::ListItem { depth }
            | NodeKind::OrderedListItems { depth, .. }
            | NodeKind::OrderedListItem { depth, .. } => Some(*depth),
            _ => None,
        }
    }

    /// Returns the list flavour if this is a single list item.
    pub fn list_item_kind(&self) -> Option<ListKind> {
        match self {
            NodeKind::ListItem { .. } => Some(ListKind::Unordered),
            NodeKind::OrderedListItem { .. } => Some(ListKind::Ordered),
            _ => None,
        }
    }

    /// Returns the list flavour if this is a list container.
    pub fn list_container_kind(&self) -> Option<ListKind> {
        match self {
            NodeKind::ListItems { .. } => Some(ListKind::Unordered),
            NodeKind::OrderedListItems { .. } => Some(ListKind::Ordered),
            _ => None,
        }
    }
}

impl Node {
    pub fn new(id: NodeId, kind: NodeKind) -> Self {
        Self {
            id,
            kind,
            items: vec![],
        }
    }

    pub fn with_items(id: NodeId, kind: NodeKind, items: Vec<Node>) -> Self {
        Self { id, kind, items }
    }

    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }
}
