//! Error types for command-line parsing and option access.
//!
//! Every failure is reported synchronously, carries the offending flag and,
//! for numeric accessors, the offending value and the violated bound.

use thiserror::Error;

/// Which side of an inclusive range a value fell outside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The value was smaller than the minimum.
    Minimum,
    /// The value was larger than the maximum.
    Maximum,
}

impl Bound {
    fn relation(self) -> &'static str {
        match self {
            Bound::Minimum => "less than minimum",
            Bound::Maximum => "greater than maximum",
        }
    }
}

/// Errors raised while parsing a token sequence or reading bound options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandLineError {
    /// A flag-like token names a flag the schema does not declare.
    #[error("\"{option}\" is not a valid option")]
    UnknownOption { option: String },

    /// A value-taking flag was the last token, with nothing left to bind.
    #[error("option \"{option}\" requires a value")]
    MissingValue { option: String },

    /// A value was attached with `=` to a flag that takes no value.
    #[error("option \"{option}\" does not take values")]
    UnexpectedValue { option: String },

    /// The flag was never bound during parsing.
    #[error("option \"{option}\" was not specified")]
    OptionNotSpecified { option: String },

    /// The bound value is not a base-10 integer of the requested type.
    #[error("cannot convert {option} value \"{value}\" to integer")]
    ConversionFailure { option: String, value: String },

    /// The bound value parsed but falls outside the accepted range.
    #[error("{option} value {value} is {} value {limit}", .bound.relation())]
    RangeViolation {
        option: String,
        value: String,
        bound: Bound,
        limit: String,
    },
}

/// Fieldless classification of a [`CommandLineError`].
///
/// Useful for callers that branch on the failure category without caring
/// about the attached context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Flag not declared in the schema.
    UnknownOption,
    /// Value-taking flag with no token left to bind.
    MissingValue,
    /// `=value` attached to a flag that takes no value.
    UnexpectedValue,
    /// Accessor called for a flag that never occurred.
    OptionNotSpecified,
    /// Value is not a base-10 integer of the requested type.
    ConversionFailure,
    /// Value parsed but lies outside the accepted range.
    RangeViolation,
}

impl CommandLineError {
    /// Returns the category of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::{CommandLineError, ErrorKind};
    ///
    /// let err = CommandLineError::MissingValue { option: "--out".into() };
    /// assert_eq!(err.kind(), ErrorKind::MissingValue);
    /// assert_eq!(err.to_string(), "option \"--out\" requires a value");
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandLineError::UnknownOption { .. } => ErrorKind::UnknownOption,
            CommandLineError::MissingValue { .. } => ErrorKind::MissingValue,
            CommandLineError::UnexpectedValue { .. } => ErrorKind::UnexpectedValue,
            CommandLineError::OptionNotSpecified { .. } => ErrorKind::OptionNotSpecified,
            CommandLineError::ConversionFailure { .. } => ErrorKind::ConversionFailure,
            CommandLineError::RangeViolation { .. } => ErrorKind::RangeViolation,
        }
    }

    /// Returns the flag the error refers to.
    pub fn option(&self) -> &str {
        match self {
            CommandLineError::UnknownOption { option }
            | CommandLineError::MissingValue { option }
            | CommandLineError::UnexpectedValue { option }
            | CommandLineError::OptionNotSpecified { option }
            | CommandLineError::ConversionFailure { option, .. }
            | CommandLineError::RangeViolation { option, .. } => option,
        }
    }
}

/// Convenience alias for results with [`CommandLineError`].
pub type Result<T> = std::result::Result<T, CommandLineError>;
