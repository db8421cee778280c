/// Blockquote line: `> quoted text`.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix, including its mandatory space.
    pub const PREFIX: &'static str = "> ";

    /// Returns the quoted content of a trimmed line.
    pub fn content(trimmed: &str) -> Option<&str> {
        trimmed.strip_prefix(Self::PREFIX).map(str::trim)
    }
}
