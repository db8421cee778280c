/// ATX-style heading: the number of leading `#` is the depth.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// Returns `(depth, text)` for a trimmed heading line.
    pub fn parse(trimmed: &str) -> Option<(usize, &str)> {
        if !trimmed.starts_with(Self::MARKER) {
            return None;
        }
        let rest = trimmed.trim_start_matches(Self::MARKER);
        let depth = trimmed.len() - rest.len();
        Some((depth, rest.trim()))
    }
}
