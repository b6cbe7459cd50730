//! Escape sequence helpers.

use std::fmt::Display;

/// The escape character that opens every control sequence.
pub const ESC: &str = "\x1b";

/// The SGR reset sequence, `ESC[0m`.
pub const RESET: &str = "\x1b[0m";

/// Builds an SGR sequence `ESC[<params>m`.
///
/// ```rust
/// use tincture::sgr;
///
/// assert_eq!(sgr(31), "\x1b[31m");
/// assert_eq!(sgr("38;5;196"), "\x1b[38;5;196m");
/// ```
pub fn sgr(params: impl Display) -> String {
    format!("{}[{}m", ESC, params)
}

/// Removes all ANSI escape sequences from `s`.
///
/// ```rust
/// use tincture::strip_ansi;
///
/// assert_eq!(strip_ansi("\x1b[31mHello\x1b[0m"), "Hello");
/// assert_eq!(strip_ansi("plain"), "plain");
/// ```
pub fn strip_ansi(s: &str) -> String {
    console::strip_ansi_codes(s).into_owned()
}

/// Returns true if `s` contains an escape character.
pub fn has_escape(s: &str) -> bool {
    s.contains(ESC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sgr_forms() {
        assert_eq!(sgr(0), RESET);
        assert_eq!(sgr("48;2;1;2;3"), "\x1b[48;2;1;2;3m");
        assert_eq!(sgr(-5), "\x1b[-5m");
    }

    #[test]
    fn test_strip_ansi_removes_every_sequence() {
        let styled = "\x1b[38;5;196m\x1b[1mtext\x1b[0m";
        assert_eq!(strip_ansi(styled), "text");
    }

    #[test]
    fn test_has_escape() {
        assert!(has_escape("\x1b[1mx"));
        assert!(!has_escape("x"));
    }
}
