//! flag-metadata
//!
//! Immutable, typed metadata attached to a feature-flag evaluation result.
//!
//! Providers populate a [`FlagMetadata`] through its builder while evaluating a
//! flag; callers read values back by key with a typed accessor. Reading a key
//! that was never added, or reading it as the wrong kind, returns a
//! [`FlagMetadataError`] instead of coercing.
//!
//! ```rust,ignore
//! use flag_metadata::FlagMetadata;
//!
//! let metadata = FlagMetadata::builder()
//!     .add_boolean("active", true)
//!     .add_integer("ruleIndex", 3)
//!     .build();
//!
//! assert!(metadata.get_boolean("active")?);
//! assert_eq!(metadata.get_integer("ruleIndex")?, 3);
//! assert!(metadata.get_string("active").unwrap_err().is_type_mismatch());
//! ```
#![deny(unsafe_code)]

pub mod error;
pub mod types;

pub use error::{ErrorCode, FlagMetadataError, Result};
pub use types::*;
