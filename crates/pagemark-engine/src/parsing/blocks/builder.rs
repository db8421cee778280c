use futures::future::join_all;

use crate::{
    models::{Align, ComponentProps, Node, NodeId, NodeKind},
    parsing::{external, grouping::group_list_items, inline::InlineTokenizer, props::parse_props},
    services::{MathMode, Services, highlight::PLAIN_TEXT},
};

use super::{
    classify::{BlockClass, LineClass},
    containers::ComponentStack,
    kinds::{CodeFence, FenceSig, Table},
};

#[derive(Debug)]
struct OpenFence {
    sig: FenceSig,
    line: usize,
    opener: String,
    lines: Vec<String>,
}

#[derive(Debug)]
struct OpenTable {
    id: NodeId,
    headers: Vec<Vec<Node>>,
    rows: Vec<Vec<Vec<Node>>>,
    align: Vec<Align>,
    /// Only the row right after the header may be a separator.
    awaiting_separator: bool,
}

/// Phase 2 of block parsing: consumes classified lines and emits block nodes.
///
/// List items come out flat; nesting them is left to the list grouper.
pub struct BlockBuilder<'a> {
    services: &'a Services,
    inline: InlineTokenizer<'a>,
    fence: Option<OpenFence>,
    table: Option<OpenTable>,
    components: ComponentStack,
    out: Vec<Node>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(services: &'a Services) -> Self {
        Self {
            services,
            inline: InlineTokenizer::new(services),
            fence: None,
            table: None,
            components: ComponentStack::default(),
            out: vec![],
        }
    }

    /// Feeds one line. `next` is the following raw line, if any; a table body row uses it
    /// to close the table as soon as the table ends.
    pub async fn push(&mut self, c: &LineClass<'_>, next: Option<&str>) {
        if let Some(fence) = &mut self.fence {
            if CodeFence::closes(&fence.sig, c.fence_sig.as_ref()) {
                self.close_fence().await;
            } else {
                fence.lines.push(c.raw.to_string());
            }
            return;
        }

        if self.table.is_some() && c.block != BlockClass::TableRow {
            self.flush_table();
        }

        if let Some(sig) = &c.fence_sig {
            self.fence = Some(OpenFence {
                sig: sig.clone(),
                line: c.index,
                opener: c.trimmed.to_string(),
                lines: vec![],
            });
            return;
        }

        match &c.block {
            BlockClass::Blank => {}
            BlockClass::BlockMath { expr } => {
                let content = external::render_math(self.services, expr, MathMode::Display).await;
                self.emit(Node::new(
                    NodeId::derive("block-math", c.index, c.trimmed),
                    NodeKind::BlockMath { content },
                ));
            }
            BlockClass::ComponentClose => {
                if self.components.depth() == 0 {
                    log::warn!("Line {}: `::` without an open component, dropped", c.index + 1);
                } else {
                    self.close_component();
                }
            }
            BlockClass::ComponentOpen { name, attrs } => {
                let props = attrs.map(parse_props).unwrap_or_else(ComponentProps::new);
                self.components.push(Node::new(
                    NodeId::derive("component", c.index, c.trimmed),
                    NodeKind::Component {
                        name: name.to_string(),
                        props,
                    },
                ));
            }
            BlockClass::MalformedComponent => {
                log::warn!(
                    "Line {}: malformed component {:?}, kept as text",
                    c.index + 1,
                    c.trimmed
                );
                self.inline_block("paragraph", NodeKind::Paragraph, c, c.trimmed)
                    .await;
            }
            BlockClass::TableRow => self.table_row(c, next).await,
            BlockClass::Rule => self.emit(Node::new(
                NodeId::derive("hr", c.index, c.trimmed),
                NodeKind::Hr,
            )),
            BlockClass::Heading { depth, text } => {
                self.inline_block("heading", NodeKind::Heading { depth: *depth }, c, text)
                    .await;
            }
            BlockClass::ListItem { depth, text } => {
                self.inline_block("list-item", NodeKind::ListItem { depth: *depth }, c, text)
                    .await;
            }
            BlockClass::OrderedListItem {
                depth,
                number,
                text,
            } => {
                let kind = NodeKind::OrderedListItem {
                    depth: *depth,
                    number: *number,
                };
                self.inline_block("ordered-list-item", kind, c, text).await;
            }
            BlockClass::Blockquote { text } => {
                self.inline_block("blockquote", NodeKind::Blockquote, c, text)
                    .await;
            }
            BlockClass::Paragraph { text } => {
                self.inline_block("paragraph", NodeKind::Paragraph, c, text)
                    .await;
            }
        }
    }

    /// EOF flush: recovers unterminated fences, closes the table and any open components.
    pub fn finish(mut self) -> Vec<Node> {
        if let Some(fence) = self.fence.take() {
            log::warn!(
                "Line {}: code fence is never closed, emitting its lines as text",
                fence.line + 1
            );
            self.text_paragraph(fence.line, &fence.opener);
            for (offset, line) in fence.lines.iter().enumerate() {
                let text = line.trim();
                if !text.is_empty() {
                    self.text_paragraph(fence.line + 1 + offset, text);
                }
            }
        }
        self.flush_table();
        while self.components.depth() > 0 {
            log::warn!("Component left open at end of input, closing it");
            self.close_component();
        }
        self.out
    }

    /// Appends to the innermost open component, or the top level.
    fn emit(&mut self, node: Node) {
        match self.components.innermost_mut() {
            Some(component) => component.items.push(node),
            None => self.out.push(node),
        }
    }

    async fn inline_block(&mut self, tag: &str, kind: NodeKind, c: &LineClass<'_>, text: &str) {
        let items = self.inline.parse_line(text).await;
        self.emit(Node::with_items(
            NodeId::derive(tag, c.index, c.trimmed),
            kind,
            items,
        ));
    }

    fn text_paragraph(&mut self, line: usize, text: &str) {
        let text_node = Node::new(
            NodeId::derive("text", 0, text),
            NodeKind::Text {
                text: text.to_string(),
            },
        );
        self.emit(Node::with_items(
            NodeId::derive("paragraph", line, text),
            NodeKind::Paragraph,
            vec![text_node],
        ));
    }

    async fn close_fence(&mut self) {
        let Some(fence) = self.fence.take() else {
            return;
        };
        let code = fence.lines.join("\n");
        let requested = fence.sig.language.as_deref().unwrap_or(PLAIN_TEXT);
        let language = external::resolve_language(self.services, requested);
        let tokens = external::highlight_themed(self.services, &code, &language).await;
        self.emit(Node::new(
            NodeId::derive("code-block", fence.line, &code),
            NodeKind::CodeBlock {
                text: code,
                language,
                name: fence.sig.name,
                tokens,
            },
        ));
    }

    fn close_component(&mut self) {
        if let Some(mut component) = self.components.pop() {
            component.items = group_list_items(std::mem::take(&mut component.items));
            self.emit(component);
        }
    }

    async fn table_row(&mut self, c: &LineClass<'_>, next: Option<&str>) {
        if let Some(table) = &mut self.table
            && table.awaiting_separator
            && let Some(align) = Table::separator(c.trimmed)
        {
            table.align = align;
            table.awaiting_separator = false;
            return;
        }

        let cells = self.tokenize_cells(c.trimmed).await;
        let Some(table) = &mut self.table else {
            self.table = Some(OpenTable {
                id: NodeId::derive("table", c.index, c.trimmed),
                headers: cells,
                rows: vec![],
                align: vec![],
                awaiting_separator: true,
            });
            return;
        };

        table.awaiting_separator = false;
        if cells.len() != table.headers.len() {
            log::warn!(
                "Line {}: table row has {} cells but the header has {}",
                c.index + 1,
                cells.len(),
                table.headers.len()
            );
        }
        table.rows.push(cells);

        if !next.is_some_and(|line| line.trim().starts_with(Table::PIPE)) {
            self.flush_table();
        }
    }

    /// Cells of one row are tokenized concurrently; results keep column order.
    async fn tokenize_cells(&self, row: &str) -> Vec<Vec<Node>> {
        join_all(
            Table::split_cells(row)
                .into_iter()
                .map(|cell| self.inline.parse_line(cell.trim())),
        )
        .await
    }

    fn flush_table(&mut self) {
        let Some(table) = self.table.take() else {
            return;
        };
        let align = if table.align.is_empty() {
            vec![Align::default(); table.headers.len()]
        } else {
            table.align
        };
        self.emit(Node::new(
            table.id,
            NodeKind::Table {
                headers: table.headers,
                rows: table.rows,
                align,
            },
        ));
    }
}
