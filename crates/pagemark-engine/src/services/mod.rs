//! # Services
//!
//! Collaborators the parser calls out to. The parser owns none of this work; it only
//! depends on the contracts below and degrades gracefully when a service fails.
//!
//! - **`highlight`**: `Highlighter` turns `(code, language, theme)` into a token grid
//! - **`math`**: `MathRenderer` turns an expression into safe markup
//! - **`url`**: `UrlSanitizer` neutralizes script-executing URL schemes
//!
//! The defaults are `SyntectHighlighter`, `MathMlRenderer` and `SchemeSanitizer`.

pub mod highlight;
pub mod math;
pub mod url;

use std::sync::Arc;

pub use highlight::{Highlighter, PlainHighlighter, SyntectHighlighter};
pub use math::{MathMlRenderer, MathMode, MathRenderer};
pub use url::{SchemeSanitizer, UrlSanitizer};

/// Errors a service may report. The parser never propagates these; it logs them and
/// emits the affected node without styling.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("{service} failed: {reason}")]
    Failed {
        service: &'static str,
        reason: String,
    },
}

/// The set of services one parser instance talks to.
#[derive(Clone)]
pub struct Services {
    pub highlighter: Arc<dyn Highlighter>,
    pub math: Arc<dyn MathRenderer>,
    pub urls: Arc<dyn UrlSanitizer>,
}

impl Services {
    pub fn new(
        highlighter: Arc<dyn Highlighter>,
        math: Arc<dyn MathRenderer>,
        urls: Arc<dyn UrlSanitizer>,
    ) -> Self {
        Self {
            highlighter,
            math,
            urls,
        }
    }

    pub fn with_highlighter(mut self, highlighter: Arc<dyn Highlighter>) -> Self {
        self.highlighter = highlighter;
        self
    }

    pub fn with_math(mut self, math: Arc<dyn MathRenderer>) -> Self {
        self.math = math;
        self
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new(
            Arc::new(SyntectHighlighter::default()),
            Arc::new(MathMlRenderer),
            Arc::new(SchemeSanitizer),
        )
    }
}
