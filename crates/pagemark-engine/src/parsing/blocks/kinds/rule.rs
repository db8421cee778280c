/// Horizontal rule: any line starting with `---`.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKER: &'static str = "---";

    pub fn matches(trimmed: &str) -> bool {
        trimmed.starts_with(Self::MARKER)
    }
}
