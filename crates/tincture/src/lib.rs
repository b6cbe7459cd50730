//! # Tincture - Chainable ANSI Styling
//!
//! `tincture` attaches ANSI escape codes to text: the eight standard
//! foreground and background colors, text attributes, 256-color and true-color
//! codes, per-character gradients and rainbows, and named themes. A
//! process-wide switch turns all of it off at once.
//!
//! ## Core Concepts
//!
//! - [`Stylize`]: the chainable operations, implemented for `&str`, `String`
//!   and [`Styled`]
//! - [`Styled`]: text plus the escape-code fragments accumulated so far;
//!   renders via `Display`
//! - [`Registry`](registry::Registry): the name/value catalogs behind colors,
//!   styles and themes
//! - [`theme`]: built-in and custom themes, with conflict detection
//! - [`set_enabled`] / [`is_enabled`]: the global switch, initialized from
//!   `NO_COLOR`
//!
//! ## Quick Start
//!
//! ```rust
//! use tincture::Stylize;
//! # tincture::set_enabled(true);
//!
//! let greeting = "Hello".red().bold();
//! assert_eq!(greeting.to_string(), "\x1b[31m\x1b[1mHello\x1b[0m");
//! assert_eq!(greeting.strip(), "Hello");
//!
//! println!("{}", "deployed".success());
//! println!("{}", "gradient".gradient("red", "cyan"));
//! ```
//!
//! ## Disabling Output
//!
//! ```rust
//! use tincture::{set_enabled, Stylize};
//!
//! set_enabled(false);
//! assert_eq!("Hello".red().bold().to_string(), "Hello");
//! # set_enabled(true);
//! ```
//!
//! ## Logging
//!
//! Theme registration reports through the [`log`] facade: a warning when an
//! identical theme is skipped, an error when registration fails, and debug
//! messages when bundles are built or a theme component cannot be applied.
//! The crate never installs a logger.

pub mod catalog;
pub mod effects;
mod enablement;
mod error;
pub mod registry;
mod styled;
mod stylize;
pub mod theme;
mod util;

pub use catalog::{background_names, foreground_names, style_names, Attribute, CatalogKind, Color};
pub use enablement::{disable, enable, is_enabled, reset_from_env, set_enabled, NO_COLOR_ENV};
pub use error::{RegistryError, ThemeError};
pub use styled::Styled;
pub use stylize::Stylize;
pub use theme::{
    apply_theme, define_theme, get_theme, list_themes, remove_theme, Defined, ThemeEngine,
    ThemeRecord,
};
pub use util::{has_escape, sgr, strip_ansi, RESET};
