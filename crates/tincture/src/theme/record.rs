//! Theme records and token normalization.

use serde::{Deserialize, Serialize};

use crate::catalog::{catalogs, CatalogKind};

/// Prefix marking a background token (`on_red`).
pub const BACKGROUND_PREFIX: &str = "on_";

/// The value stored in the theme catalog.
///
/// Records are compared structurally: two themes with the same foreground,
/// background and style sequence are the same record, and the theme catalog
/// only allows one name per record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<String>,
}

impl ThemeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn foreground(mut self, color: impl Into<String>) -> Self {
        self.foreground = Some(color.into());
        self
    }

    pub fn background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.styles.push(style.into());
        self
    }

    /// Normalizes a free-form token list into a record.
    ///
    /// - the first token naming a foreground color becomes the foreground
    /// - the first `on_`-prefixed token becomes the background, prefix removed
    /// - every other token is a style, in the order given
    ///
    /// ```rust
    /// use tincture::ThemeRecord;
    ///
    /// let record = ThemeRecord::from_tokens(["bold", "red", "on_white", "underline"]);
    /// assert_eq!(record.foreground.as_deref(), Some("red"));
    /// assert_eq!(record.background.as_deref(), Some("white"));
    /// assert_eq!(record.styles, vec!["bold", "underline"]);
    /// ```
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let foreground = catalogs().foreground();
        let mut record = ThemeRecord::new();
        for token in tokens {
            let token = token.as_ref();
            if record.foreground.is_none() && foreground.contains(token) {
                record.foreground = Some(token.to_string());
                continue;
            }
            if record.background.is_none() {
                if let Some(color) = token.strip_prefix(BACKGROUND_PREFIX) {
                    record.background = Some(color.to_string());
                    continue;
                }
            }
            record.styles.push(token.to_string());
        }
        record
    }

    /// Returns true if the record styles nothing.
    pub fn is_empty(&self) -> bool {
        self.foreground.is_none() && self.background.is_none() && self.styles.is_empty()
    }

    /// Returns true if any component is an empty or whitespace-only name.
    pub fn has_blank_component(&self) -> bool {
        self.foreground
            .iter()
            .chain(self.background.iter())
            .chain(self.styles.iter())
            .any(|component| component.trim().is_empty())
    }

    /// The record's components in application order: foreground, background,
    /// then each style.
    pub fn tokens(&self) -> Vec<StyleToken> {
        let mut tokens = Vec::with_capacity(self.styles.len() + 2);
        if let Some(fg) = &self.foreground {
            tokens.push(StyleToken::Foreground(fg.clone()));
        }
        if let Some(bg) = &self.background {
            tokens.push(StyleToken::Background(bg.clone()));
        }
        tokens.extend(self.styles.iter().cloned().map(StyleToken::Style));
        tokens
    }
}

/// One component of a theme, resolved against the catalogs when applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleToken {
    /// A foreground color name.
    Foreground(String),
    /// A background color name, without the `on_` prefix.
    Background(String),
    /// The name of any basic styling operation (`bold`, `blue`, `on_red`).
    Style(String),
}

impl StyleToken {
    pub fn name(&self) -> &str {
        match self {
            StyleToken::Foreground(name)
            | StyleToken::Background(name)
            | StyleToken::Style(name) => name,
        }
    }

    /// Label for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            StyleToken::Foreground(_) => CatalogKind::Foreground.label(),
            StyleToken::Background(_) => CatalogKind::Background.label(),
            StyleToken::Style(_) => CatalogKind::Style.label(),
        }
    }

    /// The SGR parameter this token applies, if it resolves.
    pub fn code(&self) -> Option<u8> {
        let catalogs = catalogs();
        match self {
            StyleToken::Foreground(name) => catalogs.code(CatalogKind::Foreground, name),
            StyleToken::Background(name) => catalogs.code(CatalogKind::Background, name),
            StyleToken::Style(name) => catalogs.resolve_basic(name).map(|(_, code)| code),
        }
    }
}
