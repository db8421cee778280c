use std::sync::OnceLock;

use regex::Regex;

/// Bullet (`- `, `* `) and numbered (`3. `) list markers.
pub struct ListMarker;

fn ordered_regex() -> &'static Regex {
    static ORDERED: OnceLock<Regex> = OnceLock::new();
    ORDERED.get_or_init(|| Regex::new(r"^(\d+)\.\s").expect("Invalid ordered list regex"))
}

impl ListMarker {
    pub const BULLETS: [&'static str; 2] = ["- ", "* "];
    /// Columns of indentation per nesting level.
    pub const INDENT: usize = 2;

    /// Content of a bullet item.
    pub fn bullet(trimmed: &str) -> Option<&str> {
        Self::BULLETS
            .iter()
            .find_map(|b| trimmed.strip_prefix(b))
            .map(str::trim)
    }

    /// `(number, content)` of a numbered item. Numbers too large for `u64` count as 1.
    pub fn ordered(trimmed: &str) -> Option<(u64, &str)> {
        let caps = ordered_regex().captures(trimmed)?;
        let marker = caps.get(0)?;
        let number = caps.get(1)?.as_str().parse().unwrap_or(1);
        Some((number, &trimmed[marker.end()..]))
    }

    /// Nesting level from the raw (untrimmed) line's leading whitespace.
    pub fn depth(raw: &str) -> usize {
        raw.chars().take_while(|c| c.is_whitespace()).count() / Self::INDENT
    }
}
