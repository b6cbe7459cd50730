//! Chainable styling operations.
//!
//! [`Stylize`] is implemented for string types and for [`Styled`] itself, so
//! every operation can start a chain or extend one:
//!
//! ```rust
//! use tincture::Stylize;
//! # tincture::set_enabled(true);
//!
//! assert_eq!("Hello".red().bold().to_string(), "\x1b[31m\x1b[1mHello\x1b[0m");
//! assert_eq!("text".color(196).bold().to_string(), "\x1b[38;5;196m\x1b[1mtext\x1b[0m");
//! assert_eq!("warm".with_hex("#ff6b35").to_string(), "\x1b[38;2;255;107;53mwarm\x1b[0m");
//! ```
//!
//! Every operation checks the process-wide switch first. While styling is
//! disabled each one returns the input text unchanged, before any lookup or
//! validation happens.
//!
//! Invalid input is not an error: out-of-range RGB components, malformed hex
//! strings and unknown gradient colors leave the input unchanged. The 256-color
//! operations pass any integer through without a range check.

use crate::catalog::{catalogs, Attribute, CatalogKind, Color};
use crate::effects::{parse_hex, rgb_components, Effect};
use crate::enablement::is_enabled;
use crate::error::ThemeError;
use crate::styled::Styled;
use crate::theme::apply_theme;
use crate::util::sgr;

/// Styling operations for anything convertible to [`Styled`].
pub trait Stylize: Sized {
    /// Converts into a styled value, keeping accumulated fragments.
    fn into_styled(self) -> Styled;

    /// Returns the input as a plain value if styling is disabled.
    #[doc(hidden)]
    fn enabled_or_plain(self) -> Result<Styled, Styled> {
        let styled = self.into_styled();
        if is_enabled() {
            Ok(styled)
        } else {
            Err(Styled::plain(styled.into_text()))
        }
    }

    /// Appends an SGR sequence built from `params`.
    fn sgr(self, params: impl std::fmt::Display) -> Styled {
        match self.enabled_or_plain() {
            Ok(styled) => styled.apply(sgr(params)),
            Err(plain) => plain,
        }
    }

    fn fg(self, color: Color) -> Styled {
        self.sgr(color.fg_code())
    }

    fn bg(self, color: Color) -> Styled {
        self.sgr(color.bg_code())
    }

    fn attr(self, attribute: Attribute) -> Styled {
        self.sgr(attribute.code())
    }

    /// Applies the catalog entry `name` of `kind`; unknown names leave the
    /// input unchanged.
    fn apply_named(self, kind: CatalogKind, name: &str) -> Styled {
        match self.enabled_or_plain() {
            Ok(styled) => match catalogs().code(kind, name) {
                Some(code) => styled.apply(sgr(code)),
                None => styled,
            },
            Err(plain) => plain,
        }
    }

    fn black(self) -> Styled {
        self.fg(Color::Black)
    }
    fn red(self) -> Styled {
        self.fg(Color::Red)
    }
    fn green(self) -> Styled {
        self.fg(Color::Green)
    }
    fn yellow(self) -> Styled {
        self.fg(Color::Yellow)
    }
    fn blue(self) -> Styled {
        self.fg(Color::Blue)
    }
    fn magenta(self) -> Styled {
        self.fg(Color::Magenta)
    }
    fn cyan(self) -> Styled {
        self.fg(Color::Cyan)
    }
    fn white(self) -> Styled {
        self.fg(Color::White)
    }

    fn on_black(self) -> Styled {
        self.bg(Color::Black)
    }
    fn on_red(self) -> Styled {
        self.bg(Color::Red)
    }
    fn on_green(self) -> Styled {
        self.bg(Color::Green)
    }
    fn on_yellow(self) -> Styled {
        self.bg(Color::Yellow)
    }
    fn on_blue(self) -> Styled {
        self.bg(Color::Blue)
    }
    fn on_magenta(self) -> Styled {
        self.bg(Color::Magenta)
    }
    fn on_cyan(self) -> Styled {
        self.bg(Color::Cyan)
    }
    fn on_white(self) -> Styled {
        self.bg(Color::White)
    }

    fn clear(self) -> Styled {
        self.attr(Attribute::Clear)
    }
    fn bold(self) -> Styled {
        self.attr(Attribute::Bold)
    }
    fn underline(self) -> Styled {
        self.attr(Attribute::Underline)
    }
    fn reversed(self) -> Styled {
        self.attr(Attribute::Reversed)
    }

    /// 256-color foreground, `ESC[38;5;<code>m`. The code is not range checked.
    fn color(self, code: impl Into<i64>) -> Styled {
        let code = code.into();
        self.sgr(format_args!("38;5;{}", code))
    }

    /// 256-color background, `ESC[48;5;<code>m`. The code is not range checked.
    fn on_color(self, code: impl Into<i64>) -> Styled {
        let code = code.into();
        self.sgr(format_args!("48;5;{}", code))
    }

    /// True-color foreground. Any component outside 0..=255 leaves the input
    /// unchanged.
    fn rgb(self, r: impl Into<i64>, g: impl Into<i64>, b: impl Into<i64>) -> Styled {
        match self.enabled_or_plain() {
            Ok(styled) => match rgb_components(r.into(), g.into(), b.into()) {
                Some((r, g, b)) => styled.apply(sgr(format_args!("38;2;{};{};{}", r, g, b))),
                None => styled,
            },
            Err(plain) => plain,
        }
    }

    /// True-color background. Any component outside 0..=255 leaves the input
    /// unchanged.
    fn on_rgb(self, r: impl Into<i64>, g: impl Into<i64>, b: impl Into<i64>) -> Styled {
        match self.enabled_or_plain() {
            Ok(styled) => match rgb_components(r.into(), g.into(), b.into()) {
                Some((r, g, b)) => styled.apply(sgr(format_args!("48;2;{};{};{}", r, g, b))),
                None => styled,
            },
            Err(plain) => plain,
        }
    }

    /// Six-digit hex foreground, `#` optional. Other forms leave the input
    /// unchanged.
    fn with_hex(self, hex: &str) -> Styled {
        match self.enabled_or_plain() {
            Ok(styled) => match parse_hex(hex) {
                Some((r, g, b)) => styled.rgb(r, g, b),
                None => styled,
            },
            Err(plain) => plain,
        }
    }

    /// Six-digit hex background, `#` optional. Other forms leave the input
    /// unchanged.
    fn on_hex(self, hex: &str) -> Styled {
        match self.enabled_or_plain() {
            Ok(styled) => match parse_hex(hex) {
                Some((r, g, b)) => styled.on_rgb(r, g, b),
                None => styled,
            },
            Err(plain) => plain,
        }
    }

    /// Per-character foreground gradient between two catalog colors.
    ///
    /// The gradient is painted after any accumulated fragments and replaces an
    /// earlier gradient or rainbow. Unknown color names leave the input
    /// unchanged.
    fn gradient(self, start: &str, end: &str) -> Styled {
        match self.enabled_or_plain() {
            Ok(styled) => {
                let foreground = catalogs().foreground();
                match (foreground.get(start), foreground.get(end)) {
                    (Some(&start), Some(&end)) => {
                        styled.with_effect(Effect::Gradient { start, end })
                    }
                    _ => styled,
                }
            }
            Err(plain) => plain,
        }
    }

    /// Per-character rainbow: red, yellow, green, cyan, blue, magenta.
    fn rainbow(self) -> Styled {
        match self.enabled_or_plain() {
            Ok(styled) => styled.with_effect(Effect::Rainbow),
            Err(plain) => plain,
        }
    }

    /// Applies a theme from the process-wide engine.
    ///
    /// # Errors
    ///
    /// [`ThemeError::NotFound`] if no theme named `name` is registered.
    fn theme(self, name: &str) -> Result<Styled, ThemeError> {
        apply_theme(name, self)
    }

    fn success(self) -> Styled {
        self.builtin_theme("success")
    }
    fn error(self) -> Styled {
        self.builtin_theme("error")
    }
    fn warning(self) -> Styled {
        self.builtin_theme("warning")
    }
    fn info(self) -> Styled {
        self.builtin_theme("info")
    }
    fn debug(self) -> Styled {
        self.builtin_theme("debug")
    }

    #[doc(hidden)]
    fn builtin_theme(self, name: &str) -> Styled {
        match self.enabled_or_plain() {
            Ok(styled) => match crate::theme::theme_bundle(name) {
                Some(bundle) => bundle.apply(styled),
                None => styled,
            },
            Err(plain) => plain,
        }
    }
}

impl Stylize for Styled {
    fn into_styled(self) -> Styled {
        self
    }
}

impl Stylize for &Styled {
    fn into_styled(self) -> Styled {
        self.clone()
    }
}

impl Stylize for &str {
    fn into_styled(self) -> Styled {
        Styled::plain(self)
    }
}

impl Stylize for String {
    fn into_styled(self) -> Styled {
        Styled::plain(self)
    }
}

impl Stylize for &String {
    fn into_styled(self) -> Styled {
        Styled::plain(self.as_str())
    }
}
