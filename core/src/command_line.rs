//! Parsed command lines.
//!
//! [`CommandLine::parse`] scans the token sequence once, left to right.
//! Flag-like tokens go to the binder; everything else is kept, in order, as
//! a positional argument. Parsing either succeeds with a fully populated
//! [`CommandLine`] or fails with the first [`CommandLineError`] encountered.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::bind::Binder;
use crate::classify::{TokenClass, classify};
use crate::error::{CommandLineError, Result};
use crate::numeric::{OptionInteger, convert_in_range};
use crate::schema::OptionSchema;

/// Every occurrence of one flag.
///
/// `values` holds one entry per occurrence, in order. Flags that take no
/// value record an empty string. `last_index` is the position of the most
/// recent occurrence's flag token in the original sequence, where the
/// program name is position 0.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OptionDetails {
    pub values: Vec<String>,
    pub last_index: usize,
}

impl OptionDetails {
    pub(crate) fn push(&mut self, value: String, index: usize) {
        self.values.push(value);
        self.last_index = index;
    }
}

impl fmt::Display for OptionDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{values: {:?}, last_index: {}}}", self.values, self.last_index)
    }
}

/// Result of parsing a token sequence against an [`OptionSchema`].
///
/// Immutable once built.
///
/// # Examples
///
/// ```
/// use optline_core::{CommandLine, OptionSchema};
///
/// let schema = OptionSchema::new()
///     .with_valued("--a", "first")
///     .with_valued("--b", "second");
/// let cl = CommandLine::parse(["prog", "--a", "x", "--b=y", "pos1"], &schema).unwrap();
///
/// assert_eq!(cl.program(), "prog");
/// assert_eq!(cl.option_values("--a").unwrap(), ["x"]);
/// assert_eq!(cl.option_last_index("--a").unwrap(), 1);
/// assert_eq!(cl.option_value("--b").unwrap(), "y");
/// assert_eq!(cl.option_last_index("--b").unwrap(), 3);
/// assert_eq!(cl.arguments(), ["pos1"]);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct CommandLine<'s> {
    program: String,
    options: BTreeMap<String, OptionDetails>,
    arguments: Vec<String>,
    #[serde(skip)]
    schema: &'s OptionSchema,
}

impl<'s> CommandLine<'s> {
    /// Parses `tokens`, where the first token is the program path.
    ///
    /// # Errors
    ///
    /// - [`UnknownOption`](CommandLineError::UnknownOption) for a flag-like
    ///   token the schema does not declare.
    /// - [`UnexpectedValue`](CommandLineError::UnexpectedValue) for
    ///   `--flag=...` when `--flag` takes no value.
    /// - [`MissingValue`](CommandLineError::MissingValue) when a value-taking
    ///   flag is the last token.
    pub fn parse<I, S>(tokens: I, schema: &'s OptionSchema) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = tokens
            .into_iter()
            .map(|token| -> String { token.into() })
            .enumerate();
        let program = tokens
            .next()
            .map(|(_, path)| program_name(&path))
            .unwrap_or_default();

        debug!(program = %program, options = schema.len(), "parsing command line");

        let mut binder = Binder::new(schema);
        let mut arguments = Vec::new();
        while let Some((index, token)) = tokens.next() {
            match classify(&token) {
                TokenClass::Flag => binder.bind(index, token, &mut tokens)?,
                TokenClass::Positional => arguments.push(token),
            }
        }

        let options = binder.finish();
        debug!(
            options = options.len(),
            arguments = arguments.len(),
            "parsed command line"
        );

        Ok(Self {
            program,
            options,
            arguments,
            schema,
        })
    }

    /// Parses the arguments of the current process.
    ///
    /// Arguments that are not valid UTF-8 are converted lossily.
    pub fn from_env(schema: &'s OptionSchema) -> Result<Self> {
        Self::parse(
            std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()),
            schema,
        )
    }

    /// Program name: the first token without directories or extension.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// All bound options, keyed by flag.
    pub fn options(&self) -> &BTreeMap<String, OptionDetails> {
        &self.options
    }

    /// Positional arguments in input order.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// The schema this command line was parsed against.
    pub fn schema(&self) -> &'s OptionSchema {
        self.schema
    }

    /// Help listing for the schema's flags.
    pub fn render_help(&self) -> String {
        self.schema.render_help()
    }

    /// Returns `true` if `option` occurred at least once.
    pub fn specified_option(&self, option: &str) -> bool {
        self.options.contains_key(option)
    }

    /// Value of the most recent occurrence of `option`.
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::{CommandLine, OptionSchema};
    ///
    /// let schema = OptionSchema::new().with_valued("--level", "");
    /// let cl = CommandLine::parse(["app", "--level=1", "--level", "3"], &schema).unwrap();
    /// assert_eq!(cl.option_value("--level").unwrap(), "3");
    /// ```
    ///
    /// # Errors
    ///
    /// [`OptionNotSpecified`](CommandLineError::OptionNotSpecified) if the
    /// option never occurred.
    pub fn option_value(&self, option: &str) -> Result<&str> {
        self.details(option)?
            .values
            .last()
            .map(String::as_str)
            .ok_or_else(|| not_specified(option))
    }

    /// Values of every occurrence of `option`, in order.
    pub fn option_values(&self, option: &str) -> Result<&[String]> {
        Ok(&self.details(option)?.values)
    }

    /// Position of the most recent occurrence of `option`.
    pub fn option_last_index(&self, option: &str) -> Result<usize> {
        Ok(self.details(option)?.last_index)
    }

    /// Value of `option` as a signed integer within `[min, max]`.
    ///
    /// Callers must pass `min <= max`; use `i32::MIN` and `i32::MAX` to
    /// accept any `i32`.
    ///
    /// # Errors
    ///
    /// - [`OptionNotSpecified`](CommandLineError::OptionNotSpecified)
    /// - [`ConversionFailure`](CommandLineError::ConversionFailure) unless
    ///   the whole value is a base-10 integer that fits in `i32`.
    /// - [`RangeViolation`](CommandLineError::RangeViolation)
    pub fn option_value_as_int(&self, option: &str, min: i32, max: i32) -> Result<i32> {
        self.option_value_as(option, min, max)
    }

    /// Value of `option` as an unsigned integer within `[min, max]`.
    ///
    /// A leading `-` is a conversion failure rather than a wrap-around.
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::{CommandLine, ErrorKind, OptionSchema};
    ///
    /// let schema = OptionSchema::new().with_valued("--jobs", "");
    /// let cl = CommandLine::parse(["app", "--jobs", "8"], &schema).unwrap();
    ///
    /// assert_eq!(cl.option_value_as_unsigned("--jobs", 1, 64).unwrap(), 8);
    /// let err = cl.option_value_as_unsigned("--jobs", 1, 4).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::RangeViolation);
    /// ```
    pub fn option_value_as_unsigned(&self, option: &str, min: u64, max: u64) -> Result<u64> {
        self.option_value_as(option, min, max)
    }

    /// Value of `option` as any [`OptionInteger`] within `[min, max]`.
    pub fn option_value_as<T: OptionInteger>(&self, option: &str, min: T, max: T) -> Result<T> {
        convert_in_range(option, self.option_value(option)?, min, max)
    }

    fn details(&self, option: &str) -> Result<&OptionDetails> {
        self.options.get(option).ok_or_else(|| not_specified(option))
    }
}

impl fmt::Display for CommandLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{program: {}, options: {{", self.program)?;
        for (position, (option, details)) in self.options.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{option}: {details}")?;
        }
        write!(f, "}}, arguments: {:?}}}", self.arguments)
    }
}

/// Derives the program name from the first token.
///
/// # Examples
///
/// ```
/// use optline_core::program_name;
///
/// assert_eq!(program_name("/usr/local/bin/tool.exe"), "tool");
/// assert_eq!(program_name("prog"), "prog");
/// ```
pub fn program_name(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn not_specified(option: &str) -> CommandLineError {
    CommandLineError::OptionNotSpecified {
        option: option.to_string(),
    }
}
