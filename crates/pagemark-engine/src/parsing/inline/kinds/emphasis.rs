use crate::models::NodeKind;

/// Delimited inline containers whose content is tokenized again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Bold,
    Italic,
    Strikethrough,
    Highlighted,
    Sub,
    Sup,
}

impl Emphasis {
    /// `(open, close, kind)` in classification order. Longer delimiters come before the
    /// shorter ones sharing their first character (`**` before `*`, `~~` before `~`).
    pub const DELIMITERS: &'static [(&'static str, Emphasis)] = &[
        ("**", Emphasis::Bold),
        ("*", Emphasis::Italic),
        ("__", Emphasis::Italic),
        ("~~", Emphasis::Strikethrough),
        ("==", Emphasis::Highlighted),
        ("~", Emphasis::Sub),
        ("^", Emphasis::Sup),
    ];

    /// Finds the first delimiter pair wrapping `segment`, returning the kind and the inner
    /// text. The inner text may be empty.
    pub fn classify(segment: &str) -> Option<(Emphasis, &str)> {
        Self::DELIMITERS.iter().find_map(|(delim, kind)| {
            segment
                .strip_prefix(delim)
                .and_then(|rest| rest.strip_suffix(delim))
                .map(|inner| (*kind, inner))
        })
    }

    pub fn node_kind(self) -> NodeKind {
        match self {
            Emphasis::Bold => NodeKind::Bold,
            Emphasis::Italic => NodeKind::Italic,
            Emphasis::Strikethrough => NodeKind::Strikethrough,
            Emphasis::Highlighted => NodeKind::Highlighted,
            Emphasis::Sub => NodeKind::Sub,
            Emphasis::Sup => NodeKind::Sup,
        }
    }
}
