//! Built-in color and style catalogs.
//!
//! Three fixed registries are seeded once per process:
//!
//! | Catalog | Names | Values |
//! |---------|-------|--------|
//! | foreground | `black` `red` `green` `yellow` `blue` `magenta` `cyan` `white` | 30–37 |
//! | background | same names | 40–47 |
//! | style | `clear` `bold` `underline` `reversed` | 0, 1, 4, 7 |
//!
//! The typed enums [`Color`] and [`Attribute`] mirror these catalogs for
//! callers who know the name at compile time; the registries serve lookups
//! by name (theme bundles, gradients, [`apply_named`](crate::Stylize::apply_named)).
//! The theme catalog lives in [`crate::theme`] because it accepts runtime
//! mutation.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::registry::{Registry, ValueType};

/// The eight standard ANSI hues, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// All colors in catalog order.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Lowercase catalog name.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }

    /// SGR parameter for this color as a foreground (30–37).
    pub fn fg_code(self) -> u8 {
        30 + self as u8
    }

    /// SGR parameter for this color as a background (40–47).
    pub fn bg_code(self) -> u8 {
        40 + self as u8
    }

    /// Looks a color up by its catalog name.
    pub fn from_name(name: &str) -> Option<Color> {
        Color::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_name(s).ok_or_else(|| format!("Unknown color name: {}", s))
    }
}

/// Text attributes in the style catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Clear,
    Bold,
    Underline,
    Reversed,
}

impl Attribute {
    /// All attributes in catalog order.
    pub const ALL: [Attribute; 4] = [
        Attribute::Clear,
        Attribute::Bold,
        Attribute::Underline,
        Attribute::Reversed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Attribute::Clear => "clear",
            Attribute::Bold => "bold",
            Attribute::Underline => "underline",
            Attribute::Reversed => "reversed",
        }
    }

    /// SGR parameter.
    pub fn code(self) -> u8 {
        match self {
            Attribute::Clear => 0,
            Attribute::Bold => 1,
            Attribute::Underline => 4,
            Attribute::Reversed => 7,
        }
    }

    pub fn from_name(name: &str) -> Option<Attribute> {
        Attribute::ALL.into_iter().find(|a| a.name() == name)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::from_name(s).ok_or_else(|| format!("Unknown style name: {}", s))
    }
}

/// Which fixed catalog a name is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Foreground,
    Background,
    Style,
}

impl CatalogKind {
    pub fn label(self) -> &'static str {
        match self {
            CatalogKind::Foreground => "foreground",
            CatalogKind::Background => "background",
            CatalogKind::Style => "style",
        }
    }
}

/// The three fixed catalogs.
#[derive(Debug)]
pub struct Catalogs {
    foreground: Registry<u8>,
    background: Registry<u8>,
    styles: Registry<u8>,
}

impl Catalogs {
    /// Builds and seeds the catalogs.
    ///
    /// Seeding registers fixed, distinct data; a failure here is a bug in the
    /// tables above, so it panics instead of returning an error.
    pub fn seeded() -> Self {
        let mut foreground: Registry<u8> = Registry::new(CatalogKind::Foreground.label());
        foreground.declare_type(ValueType::new("foreground color parameter", |v| {
            (30..=37).contains(v)
        }));
        let mut background: Registry<u8> = Registry::new(CatalogKind::Background.label());
        background.declare_type(ValueType::new("background color parameter", |v| {
            (40..=47).contains(v)
        }));
        let mut styles: Registry<u8> = Registry::new(CatalogKind::Style.label());
        styles.declare_type(ValueType::new("text attribute parameter", |v| *v <= 9));

        for color in Color::ALL {
            foreground
                .register(color.name(), color.fg_code())
                .expect("foreground catalog seed is unique");
            background
                .register(color.name(), color.bg_code())
                .expect("background catalog seed is unique");
        }
        for attr in Attribute::ALL {
            styles
                .register(attr.name(), attr.code())
                .expect("style catalog seed is unique");
        }

        Self {
            foreground,
            background,
            styles,
        }
    }

    pub fn foreground(&self) -> &Registry<u8> {
        &self.foreground
    }

    pub fn background(&self) -> &Registry<u8> {
        &self.background
    }

    pub fn styles(&self) -> &Registry<u8> {
        &self.styles
    }

    /// The registry for `kind`.
    pub fn get(&self, kind: CatalogKind) -> &Registry<u8> {
        match kind {
            CatalogKind::Foreground => &self.foreground,
            CatalogKind::Background => &self.background,
            CatalogKind::Style => &self.styles,
        }
    }

    /// Resolves `name` in the catalog for `kind` to its SGR parameter.
    pub fn code(&self, kind: CatalogKind, name: &str) -> Option<u8> {
        self.get(kind).get(name).copied()
    }

    /// Resolves the name of a basic styling operation.
    ///
    /// `on_<color>` resolves in the background catalog, a bare color in the
    /// foreground catalog and anything else in the style catalog.
    ///
    /// ```rust
    /// use tincture::catalog::{catalogs, CatalogKind};
    ///
    /// assert_eq!(catalogs().resolve_basic("on_blue"), Some((CatalogKind::Background, 44)));
    /// assert_eq!(catalogs().resolve_basic("blue"), Some((CatalogKind::Foreground, 34)));
    /// assert_eq!(catalogs().resolve_basic("bold"), Some((CatalogKind::Style, 1)));
    /// assert_eq!(catalogs().resolve_basic("sparkly"), None);
    /// ```
    pub fn resolve_basic(&self, name: &str) -> Option<(CatalogKind, u8)> {
        if let Some(color) = name.strip_prefix("on_") {
            return self
                .code(CatalogKind::Background, color)
                .map(|code| (CatalogKind::Background, code));
        }
        [CatalogKind::Foreground, CatalogKind::Style]
            .into_iter()
            .find_map(|kind| self.code(kind, name).map(|code| (kind, code)))
    }
}

static CATALOGS: Lazy<Catalogs> = Lazy::new(Catalogs::seeded);

/// The process-wide catalogs.
pub fn catalogs() -> &'static Catalogs {
    &CATALOGS
}

/// Foreground color names in catalog order.
pub fn foreground_names() -> Vec<&'static str> {
    catalogs().foreground().all_names()
}

/// Background color names in catalog order.
pub fn background_names() -> Vec<&'static str> {
    catalogs().background().all_names()
}

/// Style names in catalog order.
pub fn style_names() -> Vec<&'static str> {
    catalogs().styles().all_names()
}
