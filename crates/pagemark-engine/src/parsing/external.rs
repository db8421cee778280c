//! Fail-soft wrappers around service calls. Nothing here returns an error: failures are
//! logged and the caller gets an unstyled result.

use crate::{
    models::{Theme, ThemedTokens},
    services::{MathMode, Services, highlight::PLAIN_TEXT},
};

/// Maps a requested language onto one the highlighter accepts, falling back to `text`.
pub fn resolve_language(services: &Services, requested: &str) -> String {
    if services.highlighter.supports(requested) {
        requested.to_string()
    } else {
        log::warn!("Unsupported language {requested:?}, falling back to {PLAIN_TEXT:?}");
        PLAIN_TEXT.to_string()
    }
}

/// Highlights `code` for both themes. Returns `None` if either call fails.
pub async fn highlight_themed(
    services: &Services,
    code: &str,
    language: &str,
) -> Option<ThemedTokens> {
    let highlighter = &services.highlighter;
    let (light, dark) = futures::join!(
        highlighter.highlight(code, language, Theme::Light),
        highlighter.highlight(code, language, Theme::Dark),
    );
    match (light, dark) {
        (Ok(light), Ok(dark)) => Some(ThemedTokens { light, dark }),
        (Err(e), _) | (_, Err(e)) => {
            log::warn!("Highlighting {language:?} failed, emitting unstyled code: {e}");
            None
        }
    }
}

/// Renders a math expression, yielding empty markup if the renderer fails.
pub async fn render_math(services: &Services, expr: &str, mode: MathMode) -> String {
    match services.math.render(expr, mode).await {
        Ok(markup) => markup,
        Err(e) => {
            log::warn!("Math rendering failed for {expr:?}: {e}");
            String::new()
        }
    }
}
