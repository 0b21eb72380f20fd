//! Schema validation.
//!
//! Catches declarations the classifier can never match, so a broken schema
//! is reported when it is loaded rather than showing up later as a confusing
//! `UnknownOption` at parse time.
//!
//! # Examples
//!
//! ```
//! use optline_core::*;
//!
//! let schema = OptionSchema::new().with_flag("--verbose", "");
//! assert!(validate_schema(&schema).is_empty());
//!
//! // Invalid: single-dash flags are always classified as positional
//! let bad = OptionSchema::new().with_flag("-v", "");
//! assert_eq!(
//!     validate_schema(&bad),
//!     vec![SchemaError::InvalidFlag("-v".to_string())]
//! );
//! ```

use thiserror::Error;

use crate::classify::{TokenClass, VALUE_SEPARATOR, classify};
use crate::schema::OptionSchema;

/// Schema validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Flag does not start with `--` or has nothing after the marker.
    #[error("invalid flag format: {0} (flags must start with \"--\")")]
    InvalidFlag(String),
    /// Flag contains `=`, so the attached-value syntax would split it.
    #[error("flag contains value separator '=': {0}")]
    EmbeddedSeparator(String),
}

/// Validates every flag declared in `schema`.
///
/// Returns one error per offending flag, in lexicographic flag order. An
/// empty result means every flag can be matched by the classifier.
pub fn validate_schema(schema: &OptionSchema) -> Vec<SchemaError> {
    schema
        .sorted()
        .into_iter()
        .filter_map(|(name, _)| validate_flag(name))
        .collect()
}

fn validate_flag(name: &str) -> Option<SchemaError> {
    if classify(name) != TokenClass::Flag {
        return Some(SchemaError::InvalidFlag(name.to_string()));
    }
    if name.contains(VALUE_SEPARATOR) {
        return Some(SchemaError::EmbeddedSeparator(name.to_string()));
    }
    None
}
