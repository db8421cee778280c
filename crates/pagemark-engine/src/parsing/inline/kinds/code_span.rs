use std::sync::OnceLock;

use regex::Regex;

/// Inline code, optionally followed by an attribute block: `` `x`{lang='ts' color='info'} ``.
pub struct CodeSpan;

/// Pieces of an inline code segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSpanParts<'s> {
    pub text: &'s str,
    /// Raw inside of the `{...}` block, if present.
    pub attrs: Option<&'s str>,
}

fn attrs_regex() -> &'static Regex {
    static ATTRS: OnceLock<Regex> = OnceLock::new();
    ATTRS.get_or_init(|| Regex::new(r"^`(.*?)`\{(.*?)\}$").expect("Invalid code span regex"))
}

impl CodeSpan {
    pub const TICK: char = '`';
    pub const ATTR_OPEN: &'static str = "`{";
    /// Language prefix that maps onto TypeScript (`ts-node`, `ts-check`, ...).
    pub const TS_PREFIX: &'static str = "ts-";

    /// Splits a matched code segment into code text and attribute block.
    pub fn parts(segment: &str) -> Option<CodeSpanParts<'_>> {
        if segment.starts_with(Self::TICK)
            && segment.contains(Self::ATTR_OPEN)
            && segment.ends_with('}')
        {
            if let Some(caps) = attrs_regex().captures(segment) {
                let text = caps.get(1).map_or("", |m| m.as_str());
                let attrs = caps.get(2).map(|m| m.as_str());
                return Some(CodeSpanParts { text, attrs });
            }
        }
        let text = segment
            .strip_prefix(Self::TICK)?
            .strip_suffix(Self::TICK)?;
        Some(CodeSpanParts { text, attrs: None })
    }

    /// Normalizes a `lang` attribute value.
    pub fn normalize_language(lang: &str) -> String {
        if lang.starts_with(Self::TS_PREFIX) {
            "typescript".to_string()
        } else {
            lang.to_string()
        }
    }
}
