use super::kinds::{
    BlockMath, BlockQuote, CodeFence, Component, ComponentLine, FenceSig, Heading, ListMarker,
    Table, ThematicBreak,
};

/// What a line would open if no fence were active, in dispatch priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockClass<'l> {
    Blank,
    BlockMath { expr: &'l str },
    ComponentClose,
    ComponentOpen { name: &'l str, attrs: Option<&'l str> },
    /// Starts with `::` but is neither a closer nor a valid opener.
    MalformedComponent,
    TableRow,
    Rule,
    Heading { depth: usize, text: &'l str },
    ListItem { depth: usize, text: &'l str },
    OrderedListItem { depth: usize, number: u64, text: &'l str },
    Blockquote { text: &'l str },
    Paragraph { text: &'l str },
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass<'l> {
    /// Zero-based line number in the source.
    pub index: usize,
    /// The line as written, kept verbatim for code block content.
    pub raw: &'l str,
    pub trimmed: &'l str,
    /// If the line looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig>,
    pub block: BlockClass<'l>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify<'l>(&self, index: usize, raw: &'l str) -> LineClass<'l> {
        let trimmed = raw.trim();
        LineClass {
            index,
            raw,
            trimmed,
            fence_sig: CodeFence::sig(trimmed),
            block: Self::block(raw, trimmed),
        }
    }

    fn block<'l>(raw: &'l str, trimmed: &'l str) -> BlockClass<'l> {
        if trimmed.is_empty() {
            return BlockClass::Blank;
        }
        if let Some(expr) = BlockMath::expr(trimmed) {
            return BlockClass::BlockMath { expr };
        }
        match Component::line(trimmed) {
            Some(ComponentLine::Close) => return BlockClass::ComponentClose,
            Some(ComponentLine::Open { name, attrs }) => {
                return BlockClass::ComponentOpen { name, attrs };
            }
            Some(ComponentLine::Malformed) => return BlockClass::MalformedComponent,
            None => {}
        }
        if Table::is_row(trimmed) {
            return BlockClass::TableRow;
        }
        if ThematicBreak::matches(trimmed) {
            return BlockClass::Rule;
        }
        if let Some((depth, text)) = Heading::parse(trimmed) {
            return BlockClass::Heading { depth, text };
        }
        if let Some(text) = ListMarker::bullet(trimmed) {
            return BlockClass::ListItem {
                depth: ListMarker::depth(raw),
                text,
            };
        }
        if let Some((number, text)) = ListMarker::ordered(trimmed) {
            return BlockClass::OrderedListItem {
                depth: ListMarker::depth(raw),
                number,
                text,
            };
        }
        if let Some(text) = BlockQuote::content(trimmed) {
            return BlockClass::Blockquote { text };
        }
        BlockClass::Paragraph { text: trimmed }
    }
}
