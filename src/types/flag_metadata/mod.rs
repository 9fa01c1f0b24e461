//! Flag metadata
//!
//! Immutable key-value metadata returned alongside a flag evaluation, e.g. which
//! rule matched or provider-specific diagnostics. Values are one of five kinds
//! (see [`MetadataKind`]) and are read back with an accessor of the same kind.
//!
//! # Example
//!
//! ```rust,ignore
//! use flag_metadata::FlagMetadata;
//!
//! let metadata = FlagMetadata::builder()
//!     .add_string("variant", "on")
//!     .add_double("weight", 0.25)
//!     .build();
//!
//! assert_eq!(metadata.get_string("variant")?, "on");
//! assert!(metadata.get_float("weight").is_err()); // stored as a double
//! ```

mod builder;
mod value;

pub use builder::FlagMetadataBuilder;
pub use value::{FromMetadataValue, MetadataKind, MetadataValue};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{FlagMetadataError, Result};

/// Immutable flag metadata.
///
/// Created through [`FlagMetadata::builder`]. Once built the entries never
/// change, so a `FlagMetadata` can be shared across threads and read without
/// locking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagMetadata {
    entries: BTreeMap<String, MetadataValue>,
}

static_assertions::assert_impl_all!(FlagMetadata: Send, Sync);

impl FlagMetadata {
    /// Obtain a builder for `FlagMetadata`.
    pub fn builder() -> FlagMetadataBuilder {
        FlagMetadataBuilder::new()
    }

    pub(crate) fn from_entries(entries: BTreeMap<String, MetadataValue>) -> Self {
        Self { entries }
    }

    /// Retrieve a string value.
    ///
    /// Fails with `NotFound` when `key` is absent and with `TypeMismatch` when
    /// it holds another kind. The same contract applies to every typed getter.
    pub fn get_string(&self, key: &str) -> Result<&str> {
        self.get_typed(key, MetadataKind::String, MetadataValue::as_str)
    }

    /// Retrieve an integer value.
    pub fn get_integer(&self, key: &str) -> Result<i32> {
        self.get_typed(key, MetadataKind::Integer, MetadataValue::as_integer)
    }

    /// Retrieve a single-precision float value.
    pub fn get_float(&self, key: &str) -> Result<f32> {
        self.get_typed(key, MetadataKind::Float, MetadataValue::as_float)
    }

    /// Retrieve a double-precision float value.
    pub fn get_double(&self, key: &str) -> Result<f64> {
        self.get_typed(key, MetadataKind::Double, MetadataValue::as_double)
    }

    /// Retrieve a boolean value.
    pub fn get_boolean(&self, key: &str) -> Result<bool> {
        self.get_typed(key, MetadataKind::Boolean, MetadataValue::as_boolean)
    }

    /// Retrieve a value as any [`FromMetadataValue`] type.
    ///
    /// ```rust,ignore
    /// let index: i32 = metadata.get_as("ruleIndex")?;
    /// ```
    pub fn get_as<T: FromMetadataValue>(&self, key: &str) -> Result<T> {
        self.get_typed(key, T::KIND, T::from_metadata_value)
    }

    fn get_typed<'a, T>(
        &'a self,
        key: &str,
        expected: MetadataKind,
        extract: impl FnOnce(&'a MetadataValue) -> Option<T>,
    ) -> Result<T> {
        let value = self
            .entries
            .get(key)
            .ok_or_else(|| FlagMetadataError::not_found(key))?;
        extract(value)
            .ok_or_else(|| FlagMetadataError::type_mismatch(key, expected, value.kind()))
    }

    /// Untyped lookup.
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Parse a typed structure out of these entries.
    pub fn parse<T: FromFlagMetadata>(&self) -> Option<T> {
        T::from_flag_metadata(self)
    }

    /// Plain JSON object view of the entries (kinds are not preserved).
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a FlagMetadata {
    type Item = (&'a String, &'a MetadataValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, MetadataValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Helper trait for reading typed structures out of flag metadata
pub trait FromFlagMetadata: Sized {
    /// Try to parse the structure, returning `None` when required entries are
    /// missing or of the wrong kind
    fn from_flag_metadata(metadata: &FlagMetadata) -> Option<Self>;
}
