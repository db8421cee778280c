/// Inline math: `$expr$`.
pub struct InlineMath;

impl InlineMath {
    pub const DOLLAR: char = '$';

    pub fn expr(segment: &str) -> Option<&str> {
        segment
            .strip_prefix(Self::DOLLAR)?
            .strip_suffix(Self::DOLLAR)
    }
}
