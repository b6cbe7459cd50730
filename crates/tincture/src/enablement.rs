//! Process-wide styling switch.
//!
//! Every styling operation reads this flag before producing escape codes.
//! When it is off, operations return their input text unchanged and rendering
//! drops any accumulated codes.
//!
//! The flag is initialized lazily from the environment: if `NO_COLOR` is set
//! to a non-empty value styling starts disabled, otherwise it starts enabled.
//! Use [`set_enabled`] to override it afterwards (the CLI does this for
//! `--no-color` and non-terminal output).
//!
//! ```rust
//! use tincture::{set_enabled, is_enabled, Stylize};
//!
//! set_enabled(false);
//! assert!(!is_enabled());
//! assert_eq!("plain".red().to_string(), "plain");
//! set_enabled(true);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::Lazy;

/// Environment variable that disables styling at startup.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

static ENABLED: Lazy<AtomicBool> = Lazy::new(|| AtomicBool::new(enabled_from_env()));

/// Reads the default state from `NO_COLOR`.
fn enabled_from_env() -> bool {
    match std::env::var_os(NO_COLOR_ENV) {
        Some(val) => val.is_empty(),
        None => true,
    }
}

/// Returns true if styling operations currently produce escape codes.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::SeqCst)
}

/// Turns styling on or off for the whole process.
pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::SeqCst);
}

/// Shorthand for `set_enabled(true)`.
pub fn enable() {
    set_enabled(true);
}

/// Shorthand for `set_enabled(false)`.
pub fn disable() {
    set_enabled(false);
}

/// Re-reads `NO_COLOR` and resets the switch to the environment default.
///
/// Returns the resulting state.
pub fn reset_from_env() -> bool {
    let enabled = enabled_from_env();
    set_enabled(enabled);
    enabled
}
