//! Builder for [`FlagMetadata`]

use std::collections::BTreeMap;

use super::FlagMetadata;
use super::value::MetadataValue;

/// Accumulates entries and produces one immutable [`FlagMetadata`].
///
/// Adding a key that is already present replaces the previous value, even when
/// the new value is of a different kind.
#[derive(Debug, Clone, Default)]
pub struct FlagMetadataBuilder {
    entries: BTreeMap<String, MetadataValue>,
}

impl FlagMetadataBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a string value
    pub fn add_string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add(key, MetadataValue::String(value.into()))
    }

    /// Add an integer value
    pub fn add_integer(self, key: impl Into<String>, value: i32) -> Self {
        self.add(key, MetadataValue::Integer(value))
    }

    /// Add a single-precision float value
    pub fn add_float(self, key: impl Into<String>, value: f32) -> Self {
        self.add(key, MetadataValue::Float(value))
    }

    /// Add a double-precision float value
    pub fn add_double(self, key: impl Into<String>, value: f64) -> Self {
        self.add(key, MetadataValue::Double(value))
    }

    /// Add a boolean value
    pub fn add_boolean(self, key: impl Into<String>, value: bool) -> Self {
        self.add(key, MetadataValue::Boolean(value))
    }

    /// Add a value of any supported kind.
    pub fn add(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        let key = key.into();
        let value = value.into();

        if let Some(previous) = self.entries.get(&key)
            && previous.kind() != value.kind()
        {
            tracing::debug!(
                key = %key,
                previous = %previous.kind(),
                current = %value.kind(),
                "flag metadata key overwritten with a different kind"
            );
        }

        self.entries.insert(key, value);
        self
    }

    /// Consume the builder and return the immutable metadata.
    pub fn build(self) -> FlagMetadata {
        tracing::trace!(entries = self.entries.len(), "flag metadata built");
        FlagMetadata::from_entries(self.entries)
    }
}
