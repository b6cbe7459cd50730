//! Input validation and per-character effects.
//!
//! These are the pure building blocks behind the true-color, gradient and
//! rainbow operations on [`Stylize`](crate::Stylize). None of them check the
//! enablement switch; callers do that first.

use crate::catalog::Color;
use crate::util::{sgr, RESET};

/// Colors cycled by [`rainbow_text`], one per character.
pub const RAINBOW: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];

/// Validates an RGB triple. Each component must be within 0..=255.
///
/// ```rust
/// use tincture::effects::rgb_components;
///
/// assert_eq!(rgb_components(255, 107, 53), Some((255, 107, 53)));
/// assert_eq!(rgb_components(256, 0, 0), None);
/// assert_eq!(rgb_components(0, -1, 0), None);
/// ```
pub fn rgb_components(r: i64, g: i64, b: i64) -> Option<(u8, u8, u8)> {
    let r = u8::try_from(r).ok()?;
    let g = u8::try_from(g).ok()?;
    let b = u8::try_from(b).ok()?;
    Some((r, g, b))
}

/// Parses a six-digit hex color with an optional leading `#`.
///
/// The three-digit short form is not accepted.
///
/// ```rust
/// use tincture::effects::parse_hex;
///
/// assert_eq!(parse_hex("#ff6b35"), Some((255, 107, 53)));
/// assert_eq!(parse_hex("FF6B35"), Some((255, 107, 53)));
/// assert_eq!(parse_hex("#fff"), None);
/// ```
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Linear interpolation between two SGR parameters, rounded to nearest.
fn interpolate(start: u8, end: u8, progress: f64) -> i64 {
    let start = f64::from(start);
    let end = f64::from(end);
    (start + (end - start) * progress).round() as i64
}

/// Wraps every character in its own interpolated foreground code.
///
/// Character `i` of `n` gets `start + (end - start) * i / (n - 1)`, rounded;
/// a single character gets `start`. The result ends with one reset, so empty
/// input yields just the reset.
///
/// ```rust
/// use tincture::effects::gradient_text;
///
/// assert_eq!(gradient_text("ab", 31, 33), "\x1b[31ma\x1b[33mb\x1b[0m");
/// assert_eq!(gradient_text("", 31, 33), "\x1b[0m");
/// ```
pub fn gradient_text(text: &str, start: u8, end: u8) -> String {
    let mut out = Effect::Gradient { start, end }.paint(text);
    out.push_str(RESET);
    out
}

/// Wraps every character in the next color of [`RAINBOW`].
///
/// ```rust
/// use tincture::effects::rainbow_text;
///
/// assert_eq!(rainbow_text("ab"), "\x1b[31ma\x1b[33mb\x1b[0m");
/// ```
pub fn rainbow_text(text: &str) -> String {
    let mut out = Effect::Rainbow.paint(text);
    out.push_str(RESET);
    out
}

/// A per-character foreground effect.
///
/// A [`Styled`](crate::Styled) keeps its effect next to its visible text and
/// paints it at render time, after the accumulated fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Interpolates between two foreground codes.
    Gradient { start: u8, end: u8 },
    /// Cycles through [`RAINBOW`].
    Rainbow,
}

impl Effect {
    /// Foreground parameter for character `index` of `count`.
    pub fn code_at(self, index: usize, count: usize) -> i64 {
        match self {
            Effect::Gradient { start, end } => {
                let progress = if count > 1 {
                    index as f64 / (count - 1) as f64
                } else {
                    0.0
                };
                interpolate(start, end, progress)
            }
            Effect::Rainbow => i64::from(RAINBOW[index % RAINBOW.len()].fg_code()),
        }
    }

    /// Prefixes every character of `text` with its code. No trailing reset.
    ///
    /// ```rust
    /// use tincture::effects::Effect;
    ///
    /// assert_eq!(Effect::Rainbow.paint("ab"), "\x1b[31ma\x1b[33mb");
    /// assert_eq!(Effect::Rainbow.paint(""), "");
    /// ```
    pub fn paint(self, text: &str) -> String {
        let count = text.chars().count();
        let mut out = String::with_capacity(text.len() * 6);
        for (i, ch) in text.chars().enumerate() {
            out.push_str(&sgr(self.code_at(i, count)));
            out.push(ch);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_bounds() {
        assert_eq!(rgb_components(0, 0, 0), Some((0, 0, 0)));
        assert_eq!(rgb_components(255, 255, 255), Some((255, 255, 255)));
        assert_eq!(rgb_components(255, 255, 256), None);
        assert_eq!(rgb_components(-1, 0, 0), None);
    }

    #[test]
    fn test_parse_hex_accepts_six_digits_any_case() {
        assert_eq!(parse_hex("FF0000"), Some((255, 0, 0)));
        assert_eq!(parse_hex("#FF0000"), Some((255, 0, 0)));
        assert_eq!(parse_hex("ff0000"), Some((255, 0, 0)));
        assert_eq!(parse_hex("#00Ff7f"), Some((0, 255, 127)));
    }

    #[test]
    fn test_parse_hex_rejects_other_forms() {
        assert_eq!(parse_hex("FFF"), None);
        assert_eq!(parse_hex("#FFF"), None);
        assert_eq!(parse_hex("not-hex"), None);
        assert_eq!(parse_hex("#gggggg"), None);
        assert_eq!(parse_hex("##ff0000"), None);
        assert_eq!(parse_hex("ff00000"), None);
        assert_eq!(parse_hex(""), None);
        // multi-byte input with a six-byte length must not panic on slicing
        assert_eq!(parse_hex("ééé"), None);
    }

    #[test]
    fn test_gradient_interpolates_and_rounds() {
        // 31 -> 36 over 3 chars: 31, 33.5 -> 34, 36
        assert_eq!(
            gradient_text("abc", 31, 36),
            "\x1b[31ma\x1b[34mb\x1b[36mc\x1b[0m"
        );
    }

    #[test]
    fn test_gradient_descending() {
        assert_eq!(
            gradient_text("abc", 37, 30),
            "\x1b[37ma\x1b[34mb\x1b[30mc\x1b[0m"
        );
    }

    #[test]
    fn test_gradient_single_char_uses_start() {
        assert_eq!(gradient_text("x", 32, 37), "\x1b[32mx\x1b[0m");
    }

    #[test]
    fn test_gradient_same_endpoints() {
        let out = gradient_text("hello", 35, 35);
        assert_eq!(out.matches("\x1b[35m").count(), 5);
        assert!(out.ends_with(RESET));
    }

    #[test]
    fn test_gradient_counts_chars_not_bytes() {
        let out = gradient_text("é漢", 31, 32);
        assert_eq!(out, "\x1b[31mé\x1b[32m漢\x1b[0m");
    }

    #[test]
    fn test_rainbow_cycles_six_colors() {
        let out = rainbow_text("abcdefg");
        assert_eq!(
            out,
            "\x1b[31ma\x1b[33mb\x1b[32mc\x1b[36md\x1b[34me\x1b[35mf\x1b[31mg\x1b[0m"
        );
    }

    #[test]
    fn test_effect_codes() {
        let gradient = Effect::Gradient { start: 31, end: 37 };
        assert_eq!(gradient.code_at(0, 3), 31);
        assert_eq!(gradient.code_at(1, 3), 34);
        assert_eq!(gradient.code_at(2, 3), 37);
        assert_eq!(gradient.code_at(0, 1), 31);
        assert_eq!(Effect::Rainbow.code_at(6, 10), 31);
        assert_eq!(Effect::Rainbow.code_at(5, 10), 35);
    }

    #[test]
    fn test_rainbow_empty_is_reset() {
        assert_eq!(rainbow_text(""), RESET);
    }
}
