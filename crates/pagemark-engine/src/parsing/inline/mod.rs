//! # Inline Parsing
//!
//! Splits a single line into inline nodes.
//!
//! ## Architecture
//!
//! One composite regex splits the line into text and delimited segments. Each delimited
//! segment is handed to the `kinds` types in turn; the first one that recognizes its
//! delimiters decides the node. Emphasis kinds tokenize their inner text again.
//!
//! ## Modules
//!
//! - **`kinds`**: Inline types owning their delimiters (Emphasis, CodeSpan, Link, ...)
//! - **`parser`**: `InlineTokenizer::parse_line()` main entry point
//!
//! ## Precedence
//!
//! Matching is leftmost-first; at one position the earlier alternative wins. Code spans
//! are raw zones: `` `**x**` `` is inline code, not bold.

pub mod kinds;
pub mod parser;

pub use parser::InlineTokenizer;
