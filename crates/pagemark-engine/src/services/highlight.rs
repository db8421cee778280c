use std::{collections::BTreeSet, sync::OnceLock};

use async_trait::async_trait;
use syntect::{
    easy::HighlightLines,
    highlighting::{self, Style, ThemeSet},
    parsing::{SyntaxReference, SyntaxSet},
};

use super::ServiceError;
use crate::models::{FontStyle, StyledToken, Theme, TokenGrid};

/// Language identifier used when a block has no language or an unsupported one.
pub const PLAIN_TEXT: &str = "text";

/// Theme names from syntect's bundled `ThemeSet`.
pub const LIGHT_THEME: &str = "InspiredGitHub";
pub const DARK_THEME: &str = "base16-ocean.dark";

/// Syntax highlighting service.
///
/// `highlight` may suspend (e.g. to load a grammar). Implementations must accept every
/// identifier for which `supports` returns true.
#[async_trait]
pub trait Highlighter: Send + Sync {
    fn supports(&self, language: &str) -> bool;

    async fn highlight(
        &self,
        code: &str,
        language: &str,
        theme: Theme,
    ) -> Result<TokenGrid, ServiceError>;
}

/// Identifiers common in docs that syntect's bundled set lacks, mapped onto the closest
/// grammar it does ship.
const GRAMMAR_ALIASES: &[(&str, &str)] = &[
    ("typescript", "js"),
    ("ts", "js"),
    ("tsx", "js"),
    ("jsx", "js"),
    ("vue", "html"),
    ("jsonc", "json"),
    ("shell", "bash"),
    ("console", "bash"),
];

static SYNTAXES: OnceLock<SyntaxSet> = OnceLock::new();
static THEMES: OnceLock<ThemeSet> = OnceLock::new();

fn syntaxes() -> &'static SyntaxSet {
    SYNTAXES.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn themes() -> &'static ThemeSet {
    THEMES.get_or_init(ThemeSet::load_defaults)
}

fn find_syntax(language: &str) -> Option<&'static SyntaxReference> {
    let syntaxes = syntaxes();
    syntaxes.find_syntax_by_token(language).or_else(|| {
        GRAMMAR_ALIASES
            .iter()
            .find(|(alias, _)| *alias == language)
            .and_then(|(_, token)| syntaxes.find_syntax_by_token(token))
    })
}

/// Highlighter backed by syntect's bundled grammars and themes.
///
/// A language is supported when syntect resolves it by extension or name (`rs`, `rust`,
/// `md`, `bash`, ...) or through a grammar alias (`ts` uses the JavaScript grammar). `text` and any extra identifiers registered with
/// [`with_plain_languages`](Self::with_plain_languages) are emitted as plain tokens.
#[derive(Debug, Clone)]
pub struct SyntectHighlighter {
    light: String,
    dark: String,
    plain: PlainHighlighter,
}

impl SyntectHighlighter {
    pub fn with_themes(mut self, light: impl Into<String>, dark: impl Into<String>) -> Self {
        self.light = light.into();
        self.dark = dark.into();
        self
    }

    /// Accepts identifiers syntect has no grammar for, highlighting them as plain text.
    pub fn with_plain_languages<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.plain = self.plain.with_languages(extra);
        self
    }

    fn theme(&self, theme: Theme) -> Result<&'static highlighting::Theme, ServiceError> {
        let name = match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        };
        themes()
            .themes
            .get(name)
            .ok_or_else(|| ServiceError::Failed {
                service: "highlight",
                reason: format!("Unknown theme {name:?}"),
            })
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self {
            light: LIGHT_THEME.to_string(),
            dark: DARK_THEME.to_string(),
            plain: PlainHighlighter::default(),
        }
    }
}

#[async_trait]
impl Highlighter for SyntectHighlighter {
    fn supports(&self, language: &str) -> bool {
        find_syntax(language).is_some() || self.plain.supports(language)
    }

    async fn highlight(
        &self,
        code: &str,
        language: &str,
        theme: Theme,
    ) -> Result<TokenGrid, ServiceError> {
        let Some(syntax) = find_syntax(language) else {
            return self.plain.highlight(code, language, theme).await;
        };
        highlight_grid(code, syntax, self.theme(theme)?)
    }
}

fn highlight_grid(
    code: &str,
    syntax: &SyntaxReference,
    theme: &highlighting::Theme,
) -> Result<TokenGrid, ServiceError> {
    let mut lines = HighlightLines::new(syntax, theme);
    code.split('\n')
        .map(|line| {
            // Grammars from the newlines set expect each line to keep its terminator.
            let line = format!("{line}\n");
            let ranges = lines
                .highlight_line(&line, syntaxes())
                .map_err(|e| ServiceError::Failed {
                    service: "highlight",
                    reason: e.to_string(),
                })?;
            Ok(ranges
                .into_iter()
                .filter_map(|(style, text)| {
                    let content = text.trim_end_matches('\n');
                    (!content.is_empty()).then(|| styled_token(style, content))
                })
                .collect())
        })
        .collect()
}

fn styled_token(style: Style, content: &str) -> StyledToken {
    let highlighting::Color { r, g, b, .. } = style.foreground;
    let font = style.font_style;
    StyledToken {
        content: content.to_string(),
        color: Some(format!("#{r:02x}{g:02x}{b:02x}")),
        font_style: FontStyle {
            italic: font.contains(highlighting::FontStyle::ITALIC),
            bold: font.contains(highlighting::FontStyle::BOLD),
            underline: font.contains(highlighting::FontStyle::UNDERLINE),
        },
    }
}

/// Emits one uncoloured token per line for `text` and any registered identifiers.
#[derive(Debug, Clone)]
pub struct PlainHighlighter {
    languages: BTreeSet<String>,
}

impl PlainHighlighter {
    pub fn new<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut languages: BTreeSet<String> = languages.into_iter().map(Into::into).collect();
        languages.insert(PLAIN_TEXT.to_string());
        Self { languages }
    }

    /// Adds identifiers on top of the current set.
    pub fn with_languages<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages.extend(extra.into_iter().map(Into::into));
        self
    }
}

impl Default for PlainHighlighter {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

#[async_trait]
impl Highlighter for PlainHighlighter {
    fn supports(&self, language: &str) -> bool {
        self.languages.contains(language)
    }

    async fn highlight(
        &self,
        code: &str,
        language: &str,
        _theme: Theme,
    ) -> Result<TokenGrid, ServiceError> {
        if !self.supports(language) {
            return Err(ServiceError::UnsupportedLanguage(language.to_string()));
        }
        Ok(code
            .split('\n')
            .map(|line| {
                if line.is_empty() {
                    vec![]
                } else {
                    vec![StyledToken::plain(line)]
                }
            })
            .collect())
    }
}
