//! Bidirectional name/value registry.
//!
//! A [`Registry`] binds symbolic names to values and keeps both sides unique:
//! registering a name twice, or registering a value that another name already
//! owns, is rejected rather than overwriting the existing binding. Every
//! catalog in this crate (foreground colors, background colors, text styles,
//! themes) is a registry.
//!
//! The generic parameter fixes the static payload type. A registry may also
//! declare a [`ValueType`], a named runtime check that every registered value
//! must pass; values that fail it are reported as
//! [`RegistryError::TypeMismatch`].
//!
//! # Example
//!
//! ```rust
//! use tincture::registry::{Registry, ValueType};
//!
//! let mut codes: Registry<u8> = Registry::new("color");
//! codes.declare_type(ValueType::new("ANSI color parameter", |v| (30..=37).contains(v)));
//!
//! codes.register("red", 31).unwrap();
//! assert!(codes.register("crimson", 31).is_err()); // value already owned by "red"
//! assert!(codes.register("red", 32).is_err()); // name already bound
//! assert!(codes.register("huge", 99).is_err()); // outside the declared type
//!
//! assert_eq!(codes.value_to_name(&31), "red");
//! assert_eq!(codes.value_to_name(&35), "unknown");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::RegistryError;

/// Name reported by [`Registry::value_to_name`] for unregistered values.
pub const UNKNOWN_NAME: &str = "unknown";

/// A named runtime type check declared on a registry.
pub struct ValueType<V> {
    name: &'static str,
    accepts: fn(&V) -> bool,
}

impl<V> ValueType<V> {
    /// Creates a type check. `name` is reported in mismatch errors.
    pub const fn new(name: &'static str, accepts: fn(&V) -> bool) -> Self {
        Self { name, accepts }
    }

    /// The declared type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if `value` satisfies this type.
    pub fn accepts(&self, value: &V) -> bool {
        (self.accepts)(value)
    }
}

impl<V> Clone for ValueType<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for ValueType<V> {}

impl<V> fmt::Debug for ValueType<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValueType").field(&self.name).finish()
    }
}

/// One registered binding.
///
/// Identity is the owning registry's kind plus the value; the name is
/// derived data. Two entries compare equal when they come from the same kind
/// of registry and carry equal values.
#[derive(Debug, Clone)]
pub struct Entry<V> {
    kind: &'static str,
    name: String,
    value: V,
}

impl<V> Entry<V> {
    /// The registry kind this entry belongs to (e.g. `"foreground"`).
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The bound name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound value.
    pub fn value(&self) -> &V {
        &self.value
    }
}

impl<V: PartialEq> PartialEq for Entry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl<V: Eq> Eq for Entry<V> {}

impl<V: Hash> Hash for Entry<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// A bidirectional, insertion-ordered mapping between names and values.
#[derive(Debug, Clone)]
pub struct Registry<V> {
    kind: &'static str,
    declared: Option<ValueType<V>>,
    entries: HashMap<String, Entry<V>>,
    owners: HashMap<V, String>,
    order: Vec<String>,
}

impl<V> Registry<V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    /// Creates an empty registry. `kind` labels its entries.
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            declared: None,
            entries: HashMap::new(),
            owners: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// The kind label given at construction.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Declares the type every future value must satisfy.
    pub fn declare_type(&mut self, ty: ValueType<V>) {
        self.declared = Some(ty);
    }

    /// The declared type, if any.
    pub fn declared_type(&self) -> Option<&ValueType<V>> {
        self.declared.as_ref()
    }

    /// Binds `name` to `value`.
    ///
    /// Checks run in a fixed order: value uniqueness, name uniqueness, then
    /// the declared type. Nothing is modified unless all three pass.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::DuplicateValue`] naming the current owner
    /// - [`RegistryError::DuplicateName`] carrying the existing value
    /// - [`RegistryError::TypeMismatch`] naming the declared type
    pub fn register(
        &mut self,
        name: impl Into<String>,
        value: V,
    ) -> Result<&Entry<V>, RegistryError> {
        let name = name.into();

        if let Some(owner) = self.owners.get(&value) {
            return Err(RegistryError::DuplicateValue {
                value: format!("{:?}", value),
                owner: owner.clone(),
            });
        }

        if let Some(existing) = self.entries.get(&name) {
            return Err(RegistryError::DuplicateName {
                name,
                existing: format!("{:?}", existing.value),
            });
        }

        if let Some(ty) = &self.declared {
            if !ty.accepts(&value) {
                return Err(RegistryError::TypeMismatch {
                    name,
                    value: format!("{:?}", value),
                    expected: ty.name(),
                });
            }
        }

        self.owners.insert(value.clone(), name.clone());
        self.order.push(name.clone());
        let entry = self.entries.entry(name.clone()).or_insert(Entry {
            kind: self.kind,
            name,
            value,
        });
        Ok(entry)
    }

    /// Returns the entry bound to `name`.
    pub fn lookup(&self, name: &str) -> Option<&Entry<V>> {
        self.entries.get(name)
    }

    /// Returns the value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.get(name).map(Entry::value)
    }

    /// Returns true if `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the name owning `value`, or [`UNKNOWN_NAME`].
    pub fn value_to_name(&self, value: &V) -> &str {
        self.owners
            .get(value)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_NAME)
    }

    /// All names in registration order.
    pub fn all_names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// All entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry<V>> {
        self.order.iter().filter_map(|name| self.entries.get(name))
    }

    /// Removes `name`, dropping both directions of the binding.
    pub fn remove(&mut self, name: &str) -> Option<Entry<V>> {
        let entry = self.entries.remove(name)?;
        self.owners.remove(&entry.value);
        self.order.retain(|n| n != name);
        Some(entry)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
