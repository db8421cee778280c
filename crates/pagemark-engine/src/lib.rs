//! # pagemark-engine
//!
//! Parser for a markdown dialect with container components (`::name{attrs} ... ::`),
//! tables, math and inline directives. The output is a tree of [`Node`]s with
//! deterministic ids, ready for a renderer.
//!
//! Syntax highlighting, math rendering and URL sanitizing are delegated to the
//! [`services`]; defaults that need no external tooling are provided.

pub mod models;
pub mod parsing;
pub mod services;
pub mod text;

// Re-export key types for easier usage
pub use models::*;
pub use parsing::{ParseOptions, Parser, parse_markdown};
pub use services::{ServiceError, Services};
pub use text::{text_content, text_content_of};
