//! Attribute blocks of components and inline code: `{title="Icons" level=3 expandAll}`.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{ComponentProps, PropValue};

fn prop_regex() -> &'static Regex {
    static PROP: OnceLock<Regex> = OnceLock::new();
    PROP.get_or_init(|| {
        Regex::new(r#"(\w+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s,]+)))?"#)
            .expect("Invalid prop regex")
    })
}

/// Parses the inside of an attribute block into ordered props.
///
/// - bare `key` is `true`
/// - `"true"` / `"false"` become booleans
/// - values that are entirely a finite number become numbers
/// - anything else stays a string
///
/// The last occurrence of a repeated key wins.
pub fn parse_props(attrs: &str) -> ComponentProps {
    let mut props = ComponentProps::new();
    for caps in prop_regex().captures_iter(attrs) {
        let Some(key) = caps.get(1) else {
            continue;
        };
        let raw = caps.get(2).or_else(|| caps.get(3)).or_else(|| caps.get(4));
        let value = match raw {
            None => PropValue::Bool(true),
            Some(m) => coerce(m.as_str()),
        };
        props.insert(key.as_str(), value);
    }
    props
}

fn coerce(raw: &str) -> PropValue {
    match raw {
        "true" => PropValue::Bool(true),
        "false" => PropValue::Bool(false),
        _ => match parse_number(raw) {
            Some(n) => PropValue::Number(n),
            None => PropValue::String(raw.to_string()),
        },
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    let t = raw.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok().filter(|n| n.is_finite())
}
