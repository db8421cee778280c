use std::sync::OnceLock;

use futures::future::{BoxFuture, FutureExt};
use regex::Regex;

use super::kinds::{CodeSpan, Emphasis, InlineComponent, InlineMath, Link};
use crate::{
    models::{Node, NodeId, NodeKind},
    parsing::{external, props::parse_props},
    services::{MathMode, Services},
};

/// The composite inline pattern. Alternatives run from most to least specific and the
/// order is significant: overlapping delimiters (`**` / `*`, `~~` / `~`, code with
/// attributes / plain code) must keep the longer form first.
const INLINE_PATTERN: &str = concat!(
    r"\*\*.*?\*\*",
    r"|\*.*?\*",
    r"|__.*?__",
    r"|~~.*?~~",
    r"|==.*?==",
    r"|~.*?~",
    r"|\^.*?\^",
    r"|\$.*?\$",
    r"|`.*?`\{.*?\}",
    r"|`.*?`",
    r"|!\[.*?\]\(.*?\)",
    r"|\[.*?\]\(.*?\)",
    r"|:[\w-]+\{.*?\}",
    r#"|https?://[^\s<>"'`]*[^\s<>"'`.,;:!?)]?"#,
);

fn inline_regex() -> &'static Regex {
    static INLINE: OnceLock<Regex> = OnceLock::new();
    INLINE.get_or_init(|| Regex::new(INLINE_PATTERN).expect("Invalid inline regex"))
}

/// A piece of a line: either text between matches or a matched delimited construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'s> {
    Text(&'s str),
    Delimited(&'s str),
}

/// Splits a line into text and matched segments, keeping every byte in order.
pub(crate) fn split_segments(line: &str) -> Vec<Segment<'_>> {
    let mut out = vec![];
    let mut last = 0;
    for m in inline_regex().find_iter(line) {
        if m.start() > last {
            out.push(Segment::Text(&line[last..m.start()]));
        }
        out.push(Segment::Delimited(m.as_str()));
        last = m.end();
    }
    if last < line.len() {
        out.push(Segment::Text(&line[last..]));
    }
    out
}

/// Splits single lines into inline nodes.
///
/// Stateless apart from the borrowed services; one tokenizer may serve any number of
/// lines and documents.
pub struct InlineTokenizer<'a> {
    services: &'a Services,
}

impl<'a> InlineTokenizer<'a> {
    pub fn new(services: &'a Services) -> Self {
        Self { services }
    }

    /// Tokenizes one line.
    ///
    /// Container kinds (bold, italic, ...) recurse into their inner text, which is always
    /// strictly shorter than the segment, so recursion terminates. Node ids depend on the
    /// position within the returned sequence, so `**X**` yields a bold node whose items
    /// equal `parse_line(X)`. Adjacent text never yields two sibling text nodes.
    pub fn parse_line<'t>(&'t self, line: &'t str) -> BoxFuture<'t, Vec<Node>> {
        async move {
            let mut out = Vec::new();
            for segment in split_segments(line) {
                let index = out.len();
                let node = match segment {
                    Segment::Text(text) => text_node(index, text),
                    Segment::Delimited(raw) => self.classify(index, raw).await,
                };
                push_merging_text(&mut out, node);
            }
            out
        }
        .boxed()
    }

    async fn classify(&self, index: usize, raw: &str) -> Node {
        if let Some((emphasis, inner)) = Emphasis::classify(raw) {
            if inner.is_empty() {
                return text_node(index, raw);
            }
            let items = self.parse_line(inner).await;
            return Node::with_items(
                NodeId::derive(emphasis.node_kind().tag(), index, raw),
                emphasis.node_kind(),
                items,
            );
        }

        if let Some(expr) = InlineMath::expr(raw) {
            if expr.is_empty() {
                return text_node(index, raw);
            }
            let content = external::render_math(self.services, expr, MathMode::Inline).await;
            return Node::new(
                NodeId::derive("inline-math", index, raw),
                NodeKind::InlineMath { content },
            );
        }

        if let Some(parts) = CodeSpan::parts(raw) {
            if parts.text.is_empty() && parts.attrs.is_none() {
                return text_node(index, raw);
            }
            return self.code_span(index, raw, parts.text, parts.attrs).await;
        }

        if let Some(parts) = InlineComponent::parts(raw) {
            return Node::new(
                NodeId::derive("component", index, raw),
                NodeKind::Component {
                    name: parts.name.to_string(),
                    props: parse_props(parts.attrs),
                },
            );
        }

        if let Some(parts) = Link::image(raw) {
            return Node::new(
                NodeId::derive("image", index, raw),
                NodeKind::Image {
                    title: parts.title.to_string(),
                    href: self.services.urls.sanitize(parts.href),
                },
            );
        }

        if let Some(parts) = Link::link(raw) {
            return Node::new(
                NodeId::derive("link", index, raw),
                NodeKind::Link {
                    title: parts.title.to_string(),
                    href: self.services.urls.sanitize(parts.href),
                },
            );
        }

        if Link::is_bare_url(raw) {
            if let Some(video) = Link::youtube_id(raw) {
                return Node::new(
                    NodeId::derive("youtube", index, raw),
                    NodeKind::Youtube {
                        video_id: self.services.urls.sanitize(video),
                    },
                );
            }
            return Node::new(
                NodeId::derive("link", index, raw),
                NodeKind::Link {
                    title: raw.to_string(),
                    href: self.services.urls.sanitize(raw),
                },
            );
        }

        text_node(index, raw)
    }

    async fn code_span(&self, index: usize, raw: &str, text: &str, attrs: Option<&str>) -> Node {
        let props = attrs.map(parse_props).unwrap_or_default();
        let color = props.get("color").map(|c| c.to_text());

        let mut language = None;
        let mut tokens = None;
        if let Some(lang) = props.get("lang") {
            let requested = CodeSpan::normalize_language(&lang.to_text());
            let resolved = external::resolve_language(self.services, &requested);
            tokens = external::highlight_themed(self.services, text, &resolved).await;
            language = Some(resolved);
        }

        Node::new(
            NodeId::derive("inline-code", index, raw),
            NodeKind::InlineCode {
                text: text.to_string(),
                language,
                color,
                tokens,
            },
        )
    }
}

/// Appends `node`, folding it into a preceding text node. A degenerate match such as
/// `**` comes back as text and must join its neighbours.
fn push_merging_text(out: &mut Vec<Node>, node: Node) {
    let index = out.len().saturating_sub(1);
    if let NodeKind::Text { text } = &node.kind
        && let Some(last) = out.last_mut()
        && let NodeKind::Text { text: prev } = &mut last.kind
    {
        prev.push_str(text);
        last.id = NodeId::derive("text", index, prev);
        return;
    }
    out.push(node);
}

fn text_node(index: usize, text: &str) -> Node {
    Node::new(
        NodeId::derive("text", index, text),
        NodeKind::Text {
            text: text.to_string(),
        },
    )
}
