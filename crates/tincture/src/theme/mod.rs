//! Named themes.
//!
//! A theme bundles a foreground color, a background color and any number of
//! styles under one name. Five themes are built in and protected:
//!
//! | Theme | Record |
//! |-------|--------|
//! | `success` | green, bold |
//! | `error` | red, bold |
//! | `warning` | yellow, bold |
//! | `info` | cyan |
//! | `debug` | magenta |
//!
//! Custom themes are defined from a list of tokens (see
//! [`ThemeRecord::from_tokens`]) and live for the rest of the process unless
//! removed.
//!
//! ## Conflicts
//!
//! - Defining a theme whose record is identical to an existing one logs a
//!   warning and returns [`Defined::Skipped`] naming the owner.
//! - Redefining an existing name fails with a registry error; the original
//!   definition stays in effect.
//! - Removing an unknown name fails with [`ThemeError::NotFound`], removing a
//!   built-in with [`ThemeError::ProtectedEntry`].
//!
//! ## Process-wide engine
//!
//! The functions in this module operate on one shared [`ThemeEngine`] behind
//! a read/write lock. Lookups and theme application take the read side and run
//! concurrently; definitions and removals take the write side, so a
//! register-or-reject decision and the resulting catalog update are never
//! observed half done.
//!
//! ```rust
//! use tincture::theme::{define_theme, get_theme, remove_theme};
//! use tincture::Stylize;
//! # tincture::set_enabled(true);
//!
//! define_theme("shout", ["magenta", "underline", "bold"]).unwrap();
//! assert_eq!(
//!     "hi".theme("shout").unwrap().to_string(),
//!     "\x1b[35m\x1b[4m\x1b[1mhi\x1b[0m"
//! );
//! assert!(get_theme("shout").is_some());
//!
//! remove_theme("shout").unwrap();
//! assert!("hi".theme("shout").is_err());
//! ```

mod engine;
mod record;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;

pub use engine::{builtin_records, is_builtin, Defined, ThemeBundle, ThemeEngine, BUILTIN_THEMES};
pub use record::{StyleToken, ThemeRecord, BACKGROUND_PREFIX};

use crate::error::ThemeError;
use crate::styled::Styled;
use crate::stylize::Stylize;

static THEMES: Lazy<RwLock<ThemeEngine>> = Lazy::new(|| RwLock::new(ThemeEngine::new()));

fn read() -> RwLockReadGuard<'static, ThemeEngine> {
    THEMES.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, ThemeEngine> {
    THEMES.write().unwrap_or_else(PoisonError::into_inner)
}

/// Defines a theme in the process-wide engine.
///
/// See [`ThemeEngine::define_theme`].
pub fn define_theme<I, S>(name: &str, tokens: I) -> Result<Defined, ThemeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    write().define_theme(name, tokens)
}

/// Removes a custom theme from the process-wide engine.
///
/// See [`ThemeEngine::remove_theme`].
pub fn remove_theme(name: &str) -> Result<ThemeRecord, ThemeError> {
    write().remove_theme(name)
}

/// Returns a copy of the record registered as `name`.
pub fn get_theme(name: &str) -> Option<ThemeRecord> {
    read().get_theme(name).cloned()
}

/// Theme names in registration order.
pub fn list_themes() -> Vec<String> {
    read().list_themes().into_iter().map(String::from).collect()
}

/// Returns a copy of the bundle for `name`.
pub fn theme_bundle(name: &str) -> Option<ThemeBundle> {
    read().bundle(name).cloned()
}

/// Applies the theme `name` to `input`.
///
/// The bundle is copied out before styling so the lock is not held while
/// rendering.
pub fn apply_theme(name: &str, input: impl Stylize) -> Result<Styled, ThemeError> {
    let bundle = theme_bundle(name).ok_or_else(|| ThemeError::NotFound(name.to_string()))?;
    Ok(bundle.apply(input))
}

/// Runs `f` with shared access to the process-wide engine.
///
/// Several lookups inside `f` see one consistent catalog.
///
/// # Deadlocks
///
/// The read lock is held while `f` runs. Calling [`define_theme`] or
/// [`remove_theme`] from inside `f` blocks forever; copy what you need out
/// of the engine and mutate afterwards.
pub fn with_themes<R>(f: impl FnOnce(&ThemeEngine) -> R) -> R {
    f(&read())
}
