use std::sync::OnceLock;

use regex::Regex;

/// Links `[title](href)`, images `![alt](src)` and bare URLs.
pub struct Link;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkParts<'s> {
    pub title: &'s str,
    pub href: &'s str,
}

fn link_regex() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Invalid link regex"))
}

impl Link {
    pub const IMAGE_OPEN: &'static str = "![";
    pub const OPEN: char = '[';
    pub const TARGET_OPEN: &'static str = "](";
    pub const CLOSE: char = ')';
    pub const YOUTUBE_PREFIX: &'static str = "https://www.youtube.com/watch?v=";

    fn parts(segment: &str) -> Option<LinkParts<'_>> {
        let caps = link_regex().captures(segment)?;
        Some(LinkParts {
            title: caps.get(1).map_or("", |m| m.as_str()),
            href: caps.get(2).map_or("", |m| m.as_str()),
        })
    }

    /// `![alt](src)`
    pub fn image(segment: &str) -> Option<LinkParts<'_>> {
        if segment.starts_with(Self::IMAGE_OPEN)
            && segment.contains(Self::TARGET_OPEN)
            && segment.ends_with(Self::CLOSE)
        {
            Self::parts(segment)
        } else {
            None
        }
    }

    /// `[title](href)`
    pub fn link(segment: &str) -> Option<LinkParts<'_>> {
        if segment.starts_with(Self::OPEN)
            && segment.contains(Self::TARGET_OPEN)
            && segment.ends_with(Self::CLOSE)
        {
            Self::parts(segment)
        } else {
            None
        }
    }

    pub fn is_bare_url(segment: &str) -> bool {
        segment.starts_with("http://") || segment.starts_with("https://")
    }

    /// The raw `v` parameter of a YouTube watch URL, up to the next `&`.
    pub fn youtube_id(url: &str) -> Option<&str> {
        if !url.starts_with(Self::YOUTUBE_PREFIX) {
            return None;
        }
        let (_, after) = url.split_once("v=")?;
        Some(after.split('&').next().unwrap_or(after))
    }
}
