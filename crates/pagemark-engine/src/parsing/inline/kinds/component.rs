use std::sync::OnceLock;

use regex::Regex;

/// Inline component directive: `:kbd{value="K"}`, `:icon{name="bolt"}`.
pub struct InlineComponent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineComponentParts<'s> {
    pub name: &'s str,
    pub attrs: &'s str,
}

fn directive_regex() -> &'static Regex {
    static DIRECTIVE: OnceLock<Regex> = OnceLock::new();
    DIRECTIVE.get_or_init(|| {
        Regex::new(r"^:([\w-]+)\{(.*?)\}$").expect("Invalid inline component regex")
    })
}

impl InlineComponent {
    pub const MARKER: char = ':';

    pub fn parts(segment: &str) -> Option<InlineComponentParts<'_>> {
        if !segment.starts_with(Self::MARKER) {
            return None;
        }
        let caps = directive_regex().captures(segment)?;
        Some(InlineComponentParts {
            name: caps.get(1)?.as_str(),
            attrs: caps.get(2).map_or("", |m| m.as_str()),
        })
    }
}
