//! Token classification.
//!
//! A token is flag-like when it starts with the `--` marker and has at least
//! one character after it. Everything else, including a bare `--` and
//! single-dash tokens, is positional.

/// Marker that introduces a flag-like token.
pub const FLAG_MARKER: &str = "--";

/// Separator between a flag name and an attached value.
pub const VALUE_SEPARATOR: char = '=';

/// Classification of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Handed to the binder.
    Flag,
    /// Appended to the positional arguments as-is.
    Positional,
}

/// Classifies one token.
///
/// # Examples
///
/// ```
/// use optline_core::{TokenClass, classify};
///
/// assert_eq!(classify("--verbose"), TokenClass::Flag);
/// assert_eq!(classify("--x=1"), TokenClass::Flag);
/// assert_eq!(classify("--"), TokenClass::Positional);
/// assert_eq!(classify("-v"), TokenClass::Positional);
/// assert_eq!(classify("file.txt"), TokenClass::Positional);
/// ```
pub fn classify(token: &str) -> TokenClass {
    match token.strip_prefix(FLAG_MARKER) {
        Some(rest) if !rest.is_empty() => TokenClass::Flag,
        _ => TokenClass::Positional,
    }
}

/// Splits a flag-like token at the first `=`.
///
/// Returns the flag name and, when a separator is present, the attached value
/// (possibly empty).
pub(crate) fn split_attached(token: &str) -> (&str, Option<&str>) {
    match token.split_once(VALUE_SEPARATOR) {
        Some((name, value)) => (name, Some(value)),
        None => (token, None),
    }
}
