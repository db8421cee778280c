//! # Parsing
//!
//! Markdown source in, `Vec<Node>` out:
//!
//! 1. **`blocks`**: line classification and the block scanner (fences, tables, components)
//! 2. **`inline`**: the inline tokenizer run on every block's text
//! 3. **`grouping`**: list nesting, then (optionally) heading sections
//!
//! Parsing never fails. Malformed input and service errors are logged and recovered locally.

pub mod blocks;
pub mod external;
pub mod grouping;
pub mod inline;
pub mod props;
pub mod snapshot;

#[cfg(test)]
mod tests;

use crate::{models::Node, services::Services};

use blocks::{BlockBuilder, MarkdownLineClassifier};
use grouping::{group_list_items, group_sections};
use inline::InlineTokenizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Wrap each heading and the blocks after it in a `section`.
    pub group_sections: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            group_sections: true,
        }
    }
}

/// A configured parser. Holds no per-document state, so one instance may serve concurrent
/// calls.
#[derive(Clone, Default)]
pub struct Parser {
    services: Services,
    options: ParseOptions,
}

impl Parser {
    pub fn new(services: Services, options: ParseOptions) -> Self {
        Self { services, options }
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parses a whole document.
    pub async fn parse(&self, markdown: &str) -> Vec<Node> {
        let classifier = MarkdownLineClassifier;
        let mut builder = BlockBuilder::new(&self.services);

        let lines: Vec<&str> = markdown.split('\n').collect();
        for (index, line) in lines.iter().enumerate() {
            let lc = classifier.classify(index, line);
            builder.push(&lc, lines.get(index + 1).copied()).await;
        }

        let nodes = group_list_items(builder.finish());
        log::debug!("Parsed {} lines into {} top-level nodes", lines.len(), nodes.len());
        if self.options.group_sections {
            group_sections(nodes)
        } else {
            nodes
        }
    }

    /// Tokenizes a single line of inline markdown.
    pub async fn parse_line(&self, text: &str) -> Vec<Node> {
        InlineTokenizer::new(&self.services).parse_line(text).await
    }
}

/// Convenience: parse with the default services and options.
pub async fn parse_markdown(markdown: &str) -> Vec<Node> {
    Parser::default().parse(markdown).await
}
