//! Schema-validated command-line parsing.
//!
//! This crate turns a raw invocation token sequence into recognized options
//! and positional arguments:
//!
//! - [`OptionSchema`]: the caller's declaration of recognized flags and
//!   whether each requires a value.
//! - [`classify`]: labels each token as flag-like (`--name...`) or
//!   positional.
//! - [`CommandLine`]: the immutable parse result, with lookup, multi-value
//!   and range-checked integer accessors.
//!
//! Two value syntaxes are accepted for flags that require a value:
//! `--name=value` and `--name value`. A flag may occur more than once; every
//! occurrence is kept, and [`CommandLine::option_value`] returns the most
//! recent one.
//!
//! Validation ([`validate_schema`]) reports every flag declaration that
//! could never match a token.
//!
//! # Example
//!
//! ```
//! use optline_core::*;
//!
//! let schema = OptionSchema::new()
//!     .with_flag("--verbose", "Print progress")
//!     .with_valued("--jobs", "Number of workers");
//! assert!(validate_schema(&schema).is_empty());
//!
//! let cl = CommandLine::parse(["/usr/bin/build", "--jobs=4", "src", "--verbose"], &schema)
//!     .unwrap();
//! assert_eq!(cl.program(), "build");
//! assert!(cl.specified_option("--verbose"));
//! assert_eq!(cl.option_value_as_unsigned("--jobs", 1, 64).unwrap(), 4);
//! assert_eq!(cl.arguments(), ["src"]);
//!
//! let err = CommandLine::parse(["build", "--jobs"], &schema).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MissingValue);
//! ```

mod bind;
mod classify;
mod command_line;
mod error;
mod numeric;
mod schema;
mod validate;

pub use classify::{FLAG_MARKER, TokenClass, VALUE_SEPARATOR, classify};
pub use command_line::{CommandLine, OptionDetails, program_name};
pub use error::{Bound, CommandLineError, ErrorKind, Result};
pub use numeric::OptionInteger;
pub use schema::{OptionAttributes, OptionSchema};
pub use validate::{SchemaError, validate_schema};
