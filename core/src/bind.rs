//! Value binding for flag-like tokens.
//!
//! The binder resolves which of the two value syntaxes a flag uses, checks
//! the flag against the [`OptionSchema`], and records the occurrence in the
//! in-progress option table.
//!
//! | token            | schema          | result                              |
//! |------------------|-----------------|-------------------------------------|
//! | `--name=value`   | value required  | bind `value`                        |
//! | `--name=value`   | no value        | [`UnexpectedValue`]                 |
//! | `--name value`   | value required  | bind next token, consume both       |
//! | `--name` (last)  | value required  | [`MissingValue`]                    |
//! | `--name`         | no value        | bind `""`                           |
//! | unknown `--name` | -               | [`UnknownOption`]                   |
//!
//! [`UnexpectedValue`]: crate::CommandLineError::UnexpectedValue
//! [`MissingValue`]: crate::CommandLineError::MissingValue
//! [`UnknownOption`]: crate::CommandLineError::UnknownOption

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::classify::split_attached;
use crate::command_line::OptionDetails;
use crate::error::{CommandLineError, Result};
use crate::schema::{OptionAttributes, OptionSchema};

/// Accumulates option occurrences for a single parse.
pub(crate) struct Binder<'s> {
    schema: &'s OptionSchema,
    options: BTreeMap<String, OptionDetails>,
}

impl<'s> Binder<'s> {
    pub(crate) fn new(schema: &'s OptionSchema) -> Self {
        Self {
            schema,
            options: BTreeMap::new(),
        }
    }

    /// Binds the flag-like `token` found at `index`.
    ///
    /// `rest` yields the remaining `(index, token)` pairs; it is advanced
    /// only when the flag takes its value from the next token.
    pub(crate) fn bind<I>(&mut self, index: usize, token: String, rest: &mut I) -> Result<()>
    where
        I: Iterator<Item = (usize, String)>,
    {
        let (name, attached) = split_attached(&token);

        if let Some(value) = attached {
            if !self.lookup(name)?.value_required {
                debug!(option = name, index, "value attached to a flag without values");
                return Err(CommandLineError::UnexpectedValue {
                    option: name.to_string(),
                });
            }
            let value = value.to_string();
            self.record(name.to_string(), value, index);
            return Ok(());
        }

        if !self.lookup(&token)?.value_required {
            self.record(token, String::new(), index);
            return Ok(());
        }

        match rest.next() {
            Some((_, value)) => {
                self.record(token, value, index);
                Ok(())
            }
            None => {
                debug!(option = %token, index, "value-taking flag is the last token");
                Err(CommandLineError::MissingValue { option: token })
            }
        }
    }

    pub(crate) fn finish(self) -> BTreeMap<String, OptionDetails> {
        self.options
    }

    fn lookup(&self, name: &str) -> Result<&'s OptionAttributes> {
        self.schema.get(name).ok_or_else(|| {
            debug!(option = name, "flag not declared in schema");
            CommandLineError::UnknownOption {
                option: name.to_string(),
            }
        })
    }

    fn record(&mut self, name: String, value: String, index: usize) {
        trace!(option = %name, index, "bound option");
        self.options.entry(name).or_default().push(value, index);
    }
}
