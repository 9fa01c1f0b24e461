//! Core error types for flag metadata access.

use thiserror::Error;

use crate::types::MetadataKind;

/// Errors returned by the typed [`FlagMetadata`](crate::FlagMetadata) accessors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlagMetadataError {
    /// No entry exists for the requested key.
    #[error("key {key} does not exist in metadata")]
    NotFound { key: String },

    /// An entry exists but holds a different kind than the accessor reads.
    #[error("wrong type for key {key}. Expected {expected} but got {actual}")]
    TypeMismatch {
        key: String,
        expected: MetadataKind,
        actual: MetadataKind,
    },
}

/// Result type for flag metadata access
pub type Result<T> = std::result::Result<T, FlagMetadataError>;

/// Evaluation error code an SDK reports for a metadata failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The requested entry is missing.
    General,
    /// The entry could not be read as the requested kind.
    ParseError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::General => write!(f, "GENERAL"),
            Self::ParseError => write!(f, "PARSE_ERROR"),
        }
    }
}

impl FlagMetadataError {
    /// Create a `NotFound` error for `key`.
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Create a `TypeMismatch` error for `key`.
    pub fn type_mismatch(
        key: impl Into<String>,
        expected: MetadataKind,
        actual: MetadataKind,
    ) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            expected,
            actual,
        }
    }

    /// The key the failed lookup was made with.
    pub fn key(&self) -> &str {
        match self {
            Self::NotFound { key } | Self::TypeMismatch { key, .. } => key,
        }
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Map this error onto the evaluation error code reported upstream.
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::NotFound { .. } => ErrorCode::General,
            Self::TypeMismatch { .. } => ErrorCode::ParseError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_key() {
        let err = FlagMetadataError::not_found("ruleIndex");
        assert_eq!(err.to_string(), "key ruleIndex does not exist in metadata");
        assert_eq!(err.key(), "ruleIndex");
        assert!(err.is_not_found());
        assert!(!err.is_type_mismatch());
        assert_eq!(err.error_code(), ErrorCode::General);
    }

    #[test]
    fn type_mismatch_message_names_key_and_kinds() {
        let err =
            FlagMetadataError::type_mismatch("active", MetadataKind::String, MetadataKind::Boolean);
        assert_eq!(
            err.to_string(),
            "wrong type for key active. Expected String but got Boolean"
        );
        assert_eq!(err.key(), "active");
        assert!(err.is_type_mismatch());
        assert_eq!(err.error_code(), ErrorCode::ParseError);
    }

    #[test]
    fn error_code_display() {
        assert_eq!(ErrorCode::General.to_string(), "GENERAL");
        assert_eq!(ErrorCode::ParseError.to_string(), "PARSE_ERROR");
    }
}
