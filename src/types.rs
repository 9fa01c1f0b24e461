//! Flag metadata data types
//!
//! - **`flag_metadata/`** - the immutable store, its builder, and the value enum
//!
//! Everything public is re-exported here and at the crate root:
//!
//! ```rust,ignore
//! use flag_metadata::types::{FlagMetadata, MetadataKind, MetadataValue};
//! ```

pub mod flag_metadata;

pub use flag_metadata::*;
