use std::sync::OnceLock;

use regex::Regex;

/// Facts about a line that looks like a fence: ```` ```rust [main.rs] ````.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    /// Number of backticks in the fence (3 or 4).
    pub len: usize,
    pub language: Option<String>,
    /// Title from a `[name]` suffix.
    pub name: Option<String>,
}

pub struct CodeFence;

fn fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| {
        Regex::new(r"^(`{3,4})([\w-]+)?(?:\s*\[([^\]]+)\])?").expect("Invalid fence regex")
    })
}

impl CodeFence {
    /// Recognizes a fence line (already trimmed).
    pub fn sig(trimmed: &str) -> Option<FenceSig> {
        let caps = fence_regex().captures(trimmed)?;
        Some(FenceSig {
            len: caps.get(1)?.as_str().len(),
            language: caps.get(2).map(|m| m.as_str().to_string()),
            name: caps.get(3).map(|m| m.as_str().to_string()),
        })
    }

    /// A fence only closes a block opened with the same number of backticks, so a
    /// ```` ```` ```` block may contain ```` ``` ```` fences verbatim.
    pub fn closes(open: &FenceSig, sig: Option<&FenceSig>) -> bool {
        sig.is_some_and(|s| s.len == open.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert_eq!(
            CodeFence::sig("```rust"),
            Some(FenceSig {
                len: 3,
                language: Some("rust".into()),
                name: None
            })
        );
    }

    #[test]
    fn detect_named_four_tick_fence() {
        assert_eq!(
            CodeFence::sig("````ts [app.config.ts]"),
            Some(FenceSig {
                len: 4,
                language: Some("ts".into()),
                name: Some("app.config.ts".into())
            })
        );
    }

    #[test]
    fn five_ticks_read_as_four() {
        assert_eq!(CodeFence::sig("`````").map(|s| s.len), Some(4));
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::sig("hello"), None);
        assert_eq!(CodeFence::sig("``two"), None);
    }

    #[test]
    fn closes_only_same_length() {
        let open = CodeFence::sig("````md").unwrap();
        assert!(CodeFence::closes(&open, CodeFence::sig("````").as_ref()));
        assert!(!CodeFence::closes(&open, CodeFence::sig("```").as_ref()));
        assert!(!CodeFence::closes(&open, None));
    }
}
