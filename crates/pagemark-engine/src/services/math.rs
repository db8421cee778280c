use async_trait::async_trait;
use latex2mathml::{DisplayStyle, latex_to_mathml};

use super::ServiceError;

/// Whether an expression sits inside a line (`$x$`) or on its own (`$$x$$`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathMode {
    Inline,
    Display,
}

/// Renders a LaTeX-like expression into safe markup.
///
/// Implementations should fail soft on malformed input (best-effort markup) and reserve
/// `Err` for the service itself being unavailable.
#[async_trait]
pub trait MathRenderer: Send + Sync {
    async fn render(&self, expr: &str, mode: MathMode) -> Result<String, ServiceError>;
}

/// Renders LaTeX to MathML with `latex2mathml`.
///
/// An expression the converter rejects comes back as its HTML-escaped source in a
/// `<span class="math ...">`, so a typo never loses the author's text.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathMlRenderer;

#[async_trait]
impl MathRenderer for MathMlRenderer {
    async fn render(&self, expr: &str, mode: MathMode) -> Result<String, ServiceError> {
        let expr = expr.trim();
        let style = match mode {
            MathMode::Inline => DisplayStyle::Inline,
            MathMode::Display => DisplayStyle::Block,
        };
        Ok(latex_to_mathml(expr, style).unwrap_or_else(|e| {
            log::debug!("Falling back to escaped source for {expr:?}: {e}");
            escaped_source(expr, mode)
        }))
    }
}

fn escaped_source(expr: &str, mode: MathMode) -> String {
    let class = match mode {
        MathMode::Inline => "math math-inline",
        MathMode::Display => "math math-display",
    };
    format!(
        r#"<span class="{class}">{}</span>"#,
        html_escape::encode_text(expr)
    )
}
