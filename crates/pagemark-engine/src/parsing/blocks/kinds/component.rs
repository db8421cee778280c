use std::sync::OnceLock;

use regex::Regex;

/// Container component fences: `::callout{color="info"}` opens, `::` closes.
pub struct Component;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentLine<'l> {
    Close,
    Open { name: &'l str, attrs: Option<&'l str> },
    /// Starts with `::` but is not a valid opener.
    Malformed,
}

fn open_regex() -> &'static Regex {
    static OPEN: OnceLock<Regex> = OnceLock::new();
    OPEN.get_or_init(|| {
        Regex::new(r"^::([\w-]+)(?:\{(.*?)\})?$").expect("Invalid component regex")
    })
}

impl Component {
    pub const MARKER: &'static str = "::";

    pub fn line(trimmed: &str) -> Option<ComponentLine<'_>> {
        if trimmed == Self::MARKER {
            return Some(ComponentLine::Close);
        }
        if !trimmed.starts_with(Self::MARKER) {
            return None;
        }
        let Some(caps) = open_regex().captures(trimmed) else {
            return Some(ComponentLine::Malformed);
        };
        match caps.get(1) {
            Some(name) => Some(ComponentLine::Open {
                name: name.as_str(),
                attrs: caps.get(2).map(|m| m.as_str()),
            }),
            None => Some(ComponentLine::Malformed),
        }
    }
}
