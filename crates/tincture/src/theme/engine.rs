//! Theme registration, removal and application.

use std::collections::HashMap;

use log::{debug, error, warn};

use super::record::{StyleToken, ThemeRecord};
use crate::enablement::is_enabled;
use crate::error::{RegistryError, ThemeError};
use crate::registry::{Registry, ValueType};
use crate::styled::Styled;
use crate::stylize::Stylize;
use crate::util::sgr;

/// Names of the themes every engine starts with. They cannot be removed.
pub const BUILTIN_THEMES: [&str; 5] = ["success", "error", "warning", "info", "debug"];

/// The built-in theme records, in registration order.
pub fn builtin_records() -> Vec<(&'static str, ThemeRecord)> {
    vec![
        ("success", ThemeRecord::new().foreground("green").style("bold")),
        ("error", ThemeRecord::new().foreground("red").style("bold")),
        ("warning", ThemeRecord::new().foreground("yellow").style("bold")),
        ("info", ThemeRecord::new().foreground("cyan")),
        ("debug", ThemeRecord::new().foreground("magenta")),
    ]
}

/// Returns true for the five protected theme names.
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_THEMES.contains(&name)
}

/// Outcome of a theme definition that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Defined {
    /// The theme was registered and its bundle is available.
    Registered,
    /// An identical record is already registered under `existing`; nothing
    /// was registered.
    Skipped { existing: String },
}

/// The callable side of a theme: its components, ready to apply.
#[derive(Debug, Clone)]
pub struct ThemeBundle {
    name: String,
    record: ThemeRecord,
    tokens: Vec<StyleToken>,
}

impl ThemeBundle {
    fn synthesize(name: &str, record: &ThemeRecord) -> Self {
        debug!("synthesized style bundle for theme '{}'", name);
        Self {
            name: name.to_string(),
            record: record.clone(),
            tokens: record.tokens(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn record(&self) -> &ThemeRecord {
        &self.record
    }

    /// Applies foreground, background and each style in order.
    ///
    /// Components that do not resolve to a catalog entry are skipped. While
    /// styling is disabled the base text is returned.
    pub fn apply(&self, input: impl Stylize) -> Styled {
        let styled = input.into_styled();
        if !is_enabled() {
            return Styled::plain(styled.into_text());
        }
        self.tokens
            .iter()
            .fold(styled, |acc, token| match token.code() {
                Some(code) => acc.apply(sgr(code)),
                None => {
                    debug!(
                        "theme '{}': no {} named '{}', skipping",
                        self.name,
                        token.kind(),
                        token.name()
                    );
                    acc
                }
            })
    }
}

/// The theme catalog plus the bundles synthesized for it.
///
/// Most callers use the process-wide engine through the functions in
/// [`crate::theme`]; an engine can also be owned directly and passed around as
/// context.
///
/// ```rust
/// use tincture::{Defined, ThemeEngine, ThemeError};
///
/// let mut engine = ThemeEngine::new();
/// assert_eq!(engine.define_theme("alert", ["red", "on_white", "bold"]), Ok(Defined::Registered));
/// assert_eq!(
///     engine.define_theme("alarm", ["bold", "red", "on_white"]),
///     Ok(Defined::Skipped { existing: "alert".to_string() })
/// );
/// assert!(matches!(engine.remove_theme("error"), Err(ThemeError::ProtectedEntry(_))));
/// assert!(engine.remove_theme("alert").is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ThemeEngine {
    catalog: Registry<ThemeRecord>,
    bundles: HashMap<String, ThemeBundle>,
}

impl Default for ThemeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeEngine {
    /// Creates an engine holding the built-in themes.
    pub fn new() -> Self {
        let mut catalog = Registry::new("theme");
        catalog.declare_type(ValueType::new("theme record", |record: &ThemeRecord| {
            !record.has_blank_component()
        }));
        let mut engine = Self {
            catalog,
            bundles: HashMap::new(),
        };
        for (name, record) in builtin_records() {
            if let Err(err) = engine.register_record(name, record) {
                error!("failed to seed built-in theme '{}': {}", name, err);
            }
        }
        engine
    }

    /// Normalizes `tokens` into a record and registers it as `name`.
    ///
    /// See [`ThemeRecord::from_tokens`] for normalization and
    /// [`register_record`](Self::register_record) for the outcomes.
    pub fn define_theme<I, S>(&mut self, name: &str, tokens: I) -> Result<Defined, ThemeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.register_record(name, ThemeRecord::from_tokens(tokens))
    }

    /// Registers `record` as `name` and synthesizes its bundle.
    ///
    /// An identical record under another name is not an error: a warning is
    /// logged and [`Defined::Skipped`] names the owner. Every other conflict
    /// is logged and returned, leaving the engine unchanged.
    ///
    /// # Errors
    ///
    /// [`ThemeError::Registry`] wrapping [`RegistryError::DuplicateName`] when
    /// `name` exists, or [`RegistryError::TypeMismatch`] when a component
    /// name is blank.
    pub fn register_record(
        &mut self,
        name: &str,
        record: ThemeRecord,
    ) -> Result<Defined, ThemeError> {
        match self.catalog.register(name, record) {
            Ok(entry) => {
                let bundle = ThemeBundle::synthesize(name, entry.value());
                self.bundles.insert(name.to_string(), bundle);
                Ok(Defined::Registered)
            }
            Err(RegistryError::DuplicateValue { owner, .. }) => {
                warn!(
                    "theme '{}' has the same definition as '{}'; skipping",
                    name, owner
                );
                Ok(Defined::Skipped { existing: owner })
            }
            Err(source) => {
                error!("failed to register theme '{}': {}", name, source);
                Err(ThemeError::Registry {
                    theme: name.to_string(),
                    source,
                })
            }
        }
    }

    /// Removes a custom theme and its bundle.
    ///
    /// # Errors
    ///
    /// [`ThemeError::NotFound`] for unknown names, [`ThemeError::ProtectedEntry`]
    /// for built-ins.
    pub fn remove_theme(&mut self, name: &str) -> Result<ThemeRecord, ThemeError> {
        if !self.catalog.contains(name) {
            return Err(ThemeError::NotFound(name.to_string()));
        }
        if is_builtin(name) {
            return Err(ThemeError::ProtectedEntry(name.to_string()));
        }
        let entry = self
            .catalog
            .remove(name)
            .ok_or_else(|| ThemeError::NotFound(name.to_string()))?;
        self.bundles.remove(name);
        Ok(entry.value().clone())
    }

    pub fn get_theme(&self, name: &str) -> Option<&ThemeRecord> {
        self.catalog.get(name)
    }

    /// Theme names in registration order.
    pub fn list_themes(&self) -> Vec<&str> {
        self.catalog.all_names()
    }

    /// The name owning `record`, or `"unknown"`.
    pub fn value_to_name(&self, record: &ThemeRecord) -> &str {
        self.catalog.value_to_name(record)
    }

    pub fn bundle(&self, name: &str) -> Option<&ThemeBundle> {
        self.bundles.get(name)
    }

    /// Applies the theme `name` to `input`.
    ///
    /// # Errors
    ///
    /// [`ThemeError::NotFound`] if no bundle exists for `name`.
    pub fn apply(&self, name: &str, input: impl Stylize) -> Result<Styled, ThemeError> {
        self.bundle(name)
            .map(|bundle| bundle.apply(input))
            .ok_or_else(|| ThemeError::NotFound(name.to_string()))
    }
}
