//! Document-level tests for the parsing pipeline.
//!
//! Fixtures (`.md`) and their expected outlines (`.outline`) are co-located in `fixtures/`.

use std::sync::Arc;

use async_trait::async_trait;
use futures::executor::block_on;
use pretty_assertions::assert_eq;

use crate::{
    models::{Align, Node, NodeKind, Theme, TokenGrid},
    parsing::{ParseOptions, Parser, parse_markdown, snapshot},
    services::{
        Highlighter, MathMode, MathRenderer, ServiceError, Services, highlight::PLAIN_TEXT,
    },
};

// Fixture-based outline tests

#[test]
fn fixture_sections() {
    assert_fixture("sections");
}

#[test]
fn fixture_components() {
    assert_fixture("components");
}

#[test]
fn fixture_tables() {
    assert_fixture("tables");
}

#[test]
fn fixture_fences() {
    assert_fixture("fences");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.outline")).unwrap();

    let parser = Parser::new(
        Services::default().with_math(Arc::new(SourceMath)),
        ParseOptions::default(),
    );
    let nodes = block_on(parser.parse(&md));
    snapshot::invariants(&nodes);
    assert_eq!(snapshot::normalize(&nodes), expected);
}

/// Echoes the expression so outlines do not depend on MathML details.
struct SourceMath;

#[async_trait]
impl MathRenderer for SourceMath {
    async fn render(&self, expr: &str, mode: MathMode) -> Result<String, ServiceError> {
        Ok(format!("<math mode={mode:?}>{}</math>", expr.trim()))
    }
}

fn parse(md: &str) -> Vec<Node> {
    block_on(parse_markdown(md))
}

// Document properties

#[test]
fn empty_document() {
    assert!(parse("").is_empty());
}

#[test]
fn identical_input_identical_tree() {
    let md = "# T\n- a\n  - b\n| x |\n|---|\n| `y`{lang='rust'} |\n::note\n$$z$$\n::";
    assert_eq!(parse(md), parse(md));
}

#[test]
fn bold_items_equal_parse_line() {
    let parser = Parser::default();
    let nodes = parse("**a *b* [c](/d)**");
    let bold = &nodes[0].items[0];
    assert_eq!(bold.kind, NodeKind::Bold);
    assert_eq!(bold.items, block_on(parser.parse_line("a *b* [c](/d)")));
}

#[test]
fn n_items_one_container() {
    let md = (1..=7).map(|i| format!("- item {i}")).collect::<Vec<_>>().join("\n");
    let nodes = parse(&md);
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].kind, NodeKind::ListItems { depth: 0 });
    assert_eq!(nodes[0].items.len(), 7);
    snapshot::invariants(&nodes);
}

#[test]
fn javascript_href_is_neutralized() {
    let nodes = parse("[text](javascript:alert(1))");
    match &nodes[0].items[0].kind {
        NodeKind::Link { href, .. } => assert_ne!(href, "javascript:alert(1)"),
        other => panic!("expected link, got {other:?}"),
    }
    snapshot::invariants(&nodes);
}

#[test]
fn separator_sets_alignment() {
    let nodes = parse("| a | b |\n| :-: | ---: |");
    match &nodes[0].kind {
        NodeKind::Table { align, rows, .. } => {
            assert_eq!(align, &vec![Align::Center, Align::Right]);
            assert!(rows.is_empty());
        }
        other => panic!("expected table, got {other:?}"),
    }
}

#[test]
fn heading_section_scenario() {
    assert_eq!(
        snapshot::normalize(&parse("# Heading 1\nSome **bold** text")),
        concat!(
            "section\n",
            "  heading depth=1\n",
            "    text \"Heading 1\"\n",
            "  paragraph\n",
            "    text \"Some \"\n",
            "    bold\n",
            "      text \"bold\"\n",
            "    text \" text\"\n",
        )
    );
}

#[test]
fn sections_name_their_headings() {
    let nodes = parse("# A\ntext\n## B\n- item");
    assert_eq!(nodes.len(), 2);
    for section in &nodes {
        assert_eq!(
            section.kind,
            NodeKind::Section {
                heading_id: section.items[0].id
            }
        );
    }
    snapshot::invariants(&nodes);
}

#[test]
fn nested_list_scenario() {
    assert_eq!(
        snapshot::normalize(&parse("- A\n- B\n  - C")),
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
}

#[test]
fn sections_can_be_disabled() {
    let parser = Parser::new(
        Services::default(),
        ParseOptions {
            group_sections: false,
        },
    );
    let nodes = block_on(parser.parse("# A\ntext"));
    assert_eq!(
        nodes.iter().map(Node::tag).collect::<Vec<_>>(),
        vec!["heading", "paragraph"]
    );
}

#[test]
fn crlf_input_is_tolerated() {
    assert_eq!(parse("# A\r\n- b\r\n"), parse("# A\n- b\n"));
}

#[test]
fn list_inside_component_is_grouped() {
    let nodes = parse("::steps\n1. one\n2. two\n::");
    let component = &nodes[0];
    assert_eq!(component.items.len(), 1);
    assert_eq!(
        component.items[0].kind,
        NodeKind::OrderedListItems {
            depth: 0,
            start_index: 1
        }
    );
}

struct Offline;

#[async_trait]
impl Highlighter for Offline {
    fn supports(&self, language: &str) -> bool {
        language == PLAIN_TEXT || language == "rust"
    }

    async fn highlight(
        &self,
        _code: &str,
        _language: &str,
        _theme: Theme,
    ) -> Result<TokenGrid, ServiceError> {
        Err(ServiceError::Failed {
            service: "highlight",
            reason: "offline".into(),
        })
    }
}

#[test]
fn highlighter_failure_keeps_the_code() {
    let parser = Parser::new(
        Services::default().with_highlighter(Arc::new(Offline)),
        ParseOptions::default(),
    );
    let nodes = block_on(parser.parse("```rust\nfn main() {}\n```"));
    assert_eq!(
        nodes[0].kind,
        NodeKind::CodeBlock {
            text: "fn main() {}".into(),
            language: "rust".into(),
            name: None,
            tokens: None,
        }
    );
}
