/// Display math on a line of its own: `$$ e^{i\pi} + 1 = 0 $$`.
pub struct BlockMath;

impl BlockMath {
    pub const DELIM: &'static str = "$$";

    /// Returns the expression between the delimiters; a line that is only `$$` (or `$$$`)
    /// yields an empty expression.
    pub fn expr(trimmed: &str) -> Option<&str> {
        if !(trimmed.starts_with(Self::DELIM) && trimmed.ends_with(Self::DELIM)) {
            return None;
        }
        Some(
            trimmed
                .get(Self::DELIM.len()..trimmed.len().saturating_sub(Self::DELIM.len()))
                .unwrap_or(""),
        )
    }
}
