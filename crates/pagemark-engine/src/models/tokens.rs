use serde::Serialize;

/// Colour scheme a token grid is produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FontStyle {
    pub italic: bool,
    pub bold: bool,
    pub underline: bool,
}

/// One highlighted run of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledToken {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub font_style: FontStyle,
}

impl StyledToken {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            color: None,
            font_style: FontStyle::default(),
        }
    }
}

/// Highlighted source: one row of tokens per source line.
pub type TokenGrid = Vec<Vec<StyledToken>>;

/// Token grids for both themes, so renderers can switch without re-highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemedTokens {
    pub light: TokenGrid,
    pub dark: TokenGrid,
}
