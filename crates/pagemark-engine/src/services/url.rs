use std::sync::OnceLock;

use regex::Regex;

/// Replacement for any URL that was judged unsafe.
pub const BLANK_URL: &str = "about:blank";

/// Neutralizes script-executing URL schemes.
///
/// Must pass ordinary `http(s)://`, relative and `mailto:` URLs through unchanged.
pub trait UrlSanitizer: Send + Sync {
    fn sanitize(&self, raw: &str) -> String;
}

/// Scheme-based sanitizer: blocks `javascript:`, `vbscript:` and `data:` after undoing the
/// usual obfuscations (HTML entities, control and zero-width characters).
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemeSanitizer;

fn scheme_regex() -> &'static Regex {
    static SCHEME: OnceLock<Regex> = OnceLock::new();
    SCHEME.get_or_init(|| Regex::new(r"^[^:]+:").expect("Invalid scheme regex"))
}

fn blocked_scheme_regex() -> &'static Regex {
    static BLOCKED: OnceLock<Regex> = OnceLock::new();
    BLOCKED.get_or_init(|| {
        Regex::new(r"(?i)^[^\w]*(javascript|data|vbscript)").expect("Invalid blocked scheme regex")
    })
}

fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{0}'..='\u{1F}' | '\u{7F}'..='\u{9F}' | '\u{2000}'..='\u{200D}' | '\u{FEFF}'
    )
}

/// Decodes entities until the text stops changing, so `&amp;#106;` cannot sneak through.
fn decode_entities(raw: &str) -> String {
    let mut current = raw.to_string();
    for _ in 0..4 {
        let decoded = html_escape::decode_html_entities(&current).into_owned();
        if decoded == current {
            break;
        }
        current = decoded;
    }
    current
}

impl UrlSanitizer for SchemeSanitizer {
    fn sanitize(&self, raw: &str) -> String {
        let decoded = decode_entities(raw);
        let cleaned: String = decoded.chars().filter(|c| !is_invisible(*c)).collect();
        let cleaned = cleaned.trim();

        if cleaned.is_empty() {
            return BLANK_URL.to_string();
        }
        if cleaned.starts_with(['.', '/', '#', '?']) {
            return cleaned.to_string();
        }
        match scheme_regex().find(cleaned) {
            Some(scheme) if blocked_scheme_regex().is_match(scheme.as_str()) => {
                BLANK_URL.to_string()
            }
            _ => cleaned.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://example.com/a?b=c", "https://example.com/a?b=c")]
    #[case("http://example.com", "http://example.com")]
    #[case("mailto:someone@example.com", "mailto:someone@example.com")]
    #[case("/relative/path", "/relative/path")]
    #[case("./image.png", "./image.png")]
    #[case("#anchor", "#anchor")]
    #[case("plain-id", "plain-id")]
    fn passes_safe_urls(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(SchemeSanitizer.sanitize(input), expected);
    }

    #[rstest]
    #[case("javascript:alert(1)")]
    #[case("JaVaScRiPt:alert(1)")]
    #[case("  javascript:alert(1)")]
    #[case("java\tscript:alert(1)")]
    #[case("java\u{200B}script:alert(1)")]
    #[case("&#106;avascript:alert(1)")]
    #[case("&amp;#106;avascript:alert(1)")]
    #[case("vbscript:msgbox")]
    #[case("data:text/html;base64,PHNjcmlwdD4=")]
    #[case("")]
    fn blocks_unsafe_urls(#[case] input: &str) {
        assert_eq!(SchemeSanitizer.sanitize(input), BLANK_URL);
    }
}
