//! The styled-text accumulator.
//!
//! A [`Styled`] pairs a piece of text with an ordered list of escape-code
//! fragments. Each styling call derives a new value with one more fragment;
//! nothing is rendered until the value is displayed or converted to a
//! `String`.
//!
//! Rendering is `fragments in order + text + reset`, with exactly one
//! trailing reset. A gradient or rainbow [`Effect`] is kept beside the text
//! and painted over it in place of the bare text. A value with neither
//! fragments nor an effect renders as its bare text, and while styling is
//! disabled every value renders as its bare text.
//!
//! ```rust
//! use tincture::Stylize;
//! # tincture::set_enabled(true);
//!
//! let hello = "Hello".red();
//! let loud = hello.clone().bold();
//!
//! assert_eq!(hello.to_string(), "\x1b[31mHello\x1b[0m");
//! assert_eq!(loud.to_string(), "\x1b[31m\x1b[1mHello\x1b[0m");
//! assert_eq!(loud.strip(), "Hello");
//! ```
//!
//! # Text operations
//!
//! `Styled` is not a `String`. Operations that produce text
//! ([`map`](Styled::map), [`to_uppercase`](Styled::to_uppercase),
//! [`trim`](Styled::trim), ...) run on the base text and keep the
//! accumulated fragments; operations that produce something else
//! ([`len`](Styled::len), [`contains`](Styled::contains), ...) return that
//! result directly. For anything else, render first with
//! [`render`](Styled::render) or `to_string()`.

use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::effects::Effect;
use crate::enablement::is_enabled;
use crate::util::{strip_ansi, RESET};

/// Text with accumulated ANSI fragments.
#[derive(Debug, Clone, Default)]
pub struct Styled {
    text: String,
    fragments: Vec<String>,
    effect: Option<Effect>,
}

impl Styled {
    /// Wraps text without any styling.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fragments: Vec::new(),
            effect: None,
        }
    }

    /// The base text, without fragments.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The accumulated fragments in application order.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// The per-character effect, if any.
    pub fn effect(&self) -> Option<Effect> {
        self.effect
    }

    /// Returns true if a fragment or an effect has been applied.
    pub fn is_styled(&self) -> bool {
        !self.fragments.is_empty() || self.effect.is_some()
    }

    /// Derives a new value with `fragment` appended.
    ///
    /// While styling is disabled this returns the base text as a plain value,
    /// dropping `fragment` and every fragment accumulated so far.
    pub fn apply(self, fragment: impl Into<String>) -> Styled {
        if !is_enabled() {
            return Styled::plain(self.text);
        }
        let mut fragments = self.fragments;
        fragments.push(fragment.into());
        Styled {
            text: self.text,
            fragments,
            effect: self.effect,
        }
    }

    /// Derives a new value painted with `effect`, replacing any earlier one.
    ///
    /// While styling is disabled this returns the base text as a plain value.
    pub fn with_effect(self, effect: Effect) -> Styled {
        if !is_enabled() {
            return Styled::plain(self.text);
        }
        Styled {
            effect: Some(effect),
            ..self
        }
    }

    /// Renders to a string.
    ///
    /// Rendering the same value twice yields the same string while the
    /// enablement state is unchanged.
    pub fn render(&self) -> String {
        if !is_enabled() || !self.is_styled() {
            return self.text.clone();
        }
        let mut out = String::with_capacity(
            self.fragments.iter().map(String::len).sum::<usize>() + self.text.len() + RESET.len(),
        );
        for fragment in &self.fragments {
            out.push_str(fragment);
        }
        match self.effect {
            Some(effect) => out.push_str(&effect.paint(&self.text)),
            None => out.push_str(&self.text),
        }
        out.push_str(RESET);
        out
    }

    /// Renders and removes every escape sequence.
    pub fn strip(&self) -> String {
        strip_ansi(&self.render())
    }

    /// Consumes the value and returns the base text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Applies a text transformation to the base text, keeping the fragments
    /// and the effect.
    pub fn map<F>(&self, f: F) -> Styled
    where
        F: FnOnce(&str) -> String,
    {
        Styled {
            text: f(&self.text),
            fragments: self.fragments.clone(),
            effect: self.effect,
        }
    }

    pub fn to_uppercase(&self) -> Styled {
        self.map(str::to_uppercase)
    }

    pub fn to_lowercase(&self) -> Styled {
        self.map(str::to_lowercase)
    }

    pub fn trim(&self) -> Styled {
        self.map(|s| s.trim().to_string())
    }

    pub fn replace(&self, from: &str, to: &str) -> Styled {
        self.map(|s| s.replace(from, to))
    }

    /// Byte length of the base text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Terminal display width of the visible text.
    pub fn width(&self) -> usize {
        strip_ansi(&self.text).width()
    }

    pub fn contains(&self, pat: &str) -> bool {
        self.text.contains(pat)
    }

    pub fn starts_with(&self, pat: &str) -> bool {
        self.text.starts_with(pat)
    }

    pub fn ends_with(&self, pat: &str) -> bool {
        self.text.ends_with(pat)
    }
}

impl fmt::Display for Styled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for Styled {
    fn from(text: &str) -> Self {
        Styled::plain(text)
    }
}

impl From<String> for Styled {
    fn from(text: String) -> Self {
        Styled::plain(text)
    }
}

impl From<&String> for Styled {
    fn from(text: &String) -> Self {
        Styled::plain(text.as_str())
    }
}

impl From<Styled> for String {
    fn from(styled: Styled) -> Self {
        styled.render()
    }
}

impl From<&Styled> for String {
    fn from(styled: &Styled) -> Self {
        styled.render()
    }
}

impl PartialEq for Styled {
    fn eq(&self, other: &Self) -> bool {
        self.render() == other.render()
    }
}

impl PartialEq<str> for Styled {
    fn eq(&self, other: &str) -> bool {
        self.render() == other
    }
}

impl PartialEq<&str> for Styled {
    fn eq(&self, other: &&str) -> bool {
        self.render() == *other
    }
}

impl PartialEq<String> for Styled {
    fn eq(&self, other: &String) -> bool {
        self.render() == *other
    }
}

impl PartialEq<Styled> for &str {
    fn eq(&self, other: &Styled) -> bool {
        other == self
    }
}

impl PartialEq<Styled> for String {
    fn eq(&self, other: &Styled) -> bool {
        other == self
    }
}
