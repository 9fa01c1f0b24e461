//! Error handling for flag metadata access.
//!
//! Construction never fails; only the typed accessors return errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use flag_metadata::error::{ErrorCode, FlagMetadataError};
//!
//! let err = FlagMetadataError::not_found("ruleIndex");
//! assert_eq!(err.error_code(), ErrorCode::General);
//! assert_eq!(err.key(), "ruleIndex");
//! ```

pub mod types;

pub use types::*;
