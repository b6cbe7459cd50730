//! Error types for registries and the theme engine.
//!
//! Validation failures in styling operations (bad RGB components, malformed
//! hex strings, unknown gradient colors) are not errors: those operations fall
//! back to the unstyled text. Only registry conflicts and theme misuse are
//! surfaced here.

use thiserror::Error;

/// Error returned when a registry rejects a registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The name is already bound. `existing` is the debug form of its value.
    #[error("name '{name}' is already registered with value {existing}")]
    DuplicateName { name: String, existing: String },

    /// The value is already owned by another name.
    #[error("value {value} is already registered as '{owner}'")]
    DuplicateValue { value: String, owner: String },

    /// The value does not satisfy the registry's declared type.
    #[error("value {value} for '{name}' is not a valid {expected}")]
    TypeMismatch {
        name: String,
        value: String,
        expected: &'static str,
    },
}

/// Error returned by theme definition, removal and invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// Registration in the theme catalog failed.
    #[error("theme '{theme}' could not be registered: {source}")]
    Registry {
        theme: String,
        #[source]
        source: RegistryError,
    },

    /// No theme with this name exists.
    #[error("theme not found: {0}")]
    NotFound(String),

    /// The theme is built in and cannot be removed.
    #[error("theme '{0}' is built in and cannot be removed")]
    ProtectedEntry(String),
}
