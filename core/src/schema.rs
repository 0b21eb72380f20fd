//! Option schema declarations.
//!
//! An [`OptionSchema`] is supplied by the caller before parsing and maps each
//! recognized flag (e.g. `--output`) to its [`OptionAttributes`]. The parser
//! only ever reads it. Schemas serialize as a plain map so they can be kept
//! in YAML or JSON files next to the program that declares them.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Attributes declared for a single flag.
///
/// # Examples
///
/// ```
/// use optline_core::OptionAttributes;
///
/// let attrs = OptionAttributes::valued("Write output to FILE");
/// assert!(attrs.value_required);
/// assert_eq!(attrs.description, "Write output to FILE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OptionAttributes {
    /// Whether every occurrence of the flag must bind a value.
    #[serde(default)]
    pub value_required: bool,
    /// Human-readable description shown in help output.
    #[serde(default)]
    pub description: String,
}

impl OptionAttributes {
    /// Attributes for a flag that takes no value.
    pub fn flag(description: impl Into<String>) -> Self {
        Self {
            value_required: false,
            description: description.into(),
        }
    }

    /// Attributes for a flag that requires a value.
    pub fn valued(description: impl Into<String>) -> Self {
        Self {
            value_required: true,
            description: description.into(),
        }
    }
}

/// The set of flags a program recognizes.
///
/// Backed by an unordered map; anything that needs a stable order (help
/// output, validation) goes through [`sorted`](OptionSchema::sorted).
///
/// # Examples
///
/// ```
/// use optline_core::OptionSchema;
///
/// let schema = OptionSchema::new()
///     .with_flag("--verbose", "Print progress")
///     .with_valued("--jobs", "Number of workers");
///
/// assert_eq!(schema.len(), 2);
/// assert!(schema.get("--jobs").unwrap().value_required);
/// assert!(!schema.contains("--quiet"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionSchema {
    options: HashMap<String, OptionAttributes>,
}

impl OptionSchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a flag that takes no value.
    pub fn with_flag(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.insert(name, OptionAttributes::flag(description));
        self
    }

    /// Adds a flag that requires a value.
    pub fn with_valued(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.insert(name, OptionAttributes::valued(description));
        self
    }

    /// Declares `name`, replacing any previous declaration.
    pub fn insert(&mut self, name: impl Into<String>, attributes: OptionAttributes) {
        self.options.insert(name.into(), attributes);
    }

    /// Looks up the attributes declared for `name`.
    pub fn get(&self, name: &str) -> Option<&OptionAttributes> {
        self.options.get(name)
    }

    /// Returns `true` if `name` is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Returns all declarations ordered lexicographically by flag.
    pub fn sorted(&self) -> Vec<(&str, &OptionAttributes)> {
        let mut entries: Vec<(&str, &OptionAttributes)> = self
            .options
            .iter()
            .map(|(name, attrs)| (name.as_str(), attrs))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Writes the help listing for every declared flag.
    ///
    /// Flags appear in lexicographic order. Each entry is the flag itself,
    /// suffixed with `=value` when a value is required, followed by its
    /// indented description. Entries are separated by a blank line. An empty
    /// schema writes nothing.
    pub fn write_help<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        writeln!(out, "Options:")?;
        for (position, (name, attrs)) in self.sorted().into_iter().enumerate() {
            if position > 0 {
                writeln!(out)?;
            }
            write!(out, "  {name}")?;
            if attrs.value_required {
                write!(out, "=value")?;
            }
            writeln!(out)?;
            writeln!(out, "    {}", attrs.description)?;
        }
        Ok(())
    }

    /// Renders the help listing into a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::OptionSchema;
    ///
    /// let schema = OptionSchema::new()
    ///     .with_valued("--out", "Output file")
    ///     .with_flag("--all", "Include hidden entries");
    ///
    /// assert_eq!(
    ///     schema.render_help(),
    ///     "Options:\n  --all\n    Include hidden entries\n\n  --out=value\n    Output file\n"
    /// );
    /// ```
    pub fn render_help(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_help(&mut out);
        out
    }
}

impl<K: Into<String>> FromIterator<(K, OptionAttributes)> for OptionSchema {
    fn from_iter<I: IntoIterator<Item = (K, OptionAttributes)>>(iter: I) -> Self {
        Self {
            options: iter
                .into_iter()
                .map(|(name, attrs)| (name.into(), attrs))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_orders_by_flag() {
        let schema = OptionSchema::new()
            .with_flag("--zeta", "")
            .with_flag("--alpha", "")
            .with_valued("--mid", "");

        let names: Vec<&str> = schema.sorted().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["--alpha", "--mid", "--zeta"]);
    }

    #[test]
    fn test_render_help_empty_schema_is_empty() {
        assert_eq!(OptionSchema::new().render_help(), "");
    }

    #[test]
    fn test_render_help_single_entry() {
        let schema = OptionSchema::new().with_valued("--jobs", "Worker count");
        assert_eq!(
            schema.render_help(),
            "Options:\n  --jobs=value\n    Worker count\n"
        );
    }

    #[test]
    fn test_insert_replaces_previous_declaration() {
        let mut schema = OptionSchema::new().with_flag("--color", "Colorize");
        schema.insert("--color", OptionAttributes::valued("When to colorize"));

        assert_eq!(schema.len(), 1);
        assert!(schema.get("--color").unwrap().value_required);
    }

    #[test]
    fn test_deserialize_from_map() {
        let raw = r#"{
            "--out": { "value_required": true, "description": "Output file" },
            "--quiet": {}
        }"#;
        let schema: OptionSchema = serde_json::from_str(raw).unwrap();

        assert_eq!(schema.get("--out"), Some(&OptionAttributes::valued("Output file")));
        assert_eq!(schema.get("--quiet"), Some(&OptionAttributes::flag("")));
    }

    #[test]
    fn test_from_iterator() {
        let schema: OptionSchema = [
            ("--a", OptionAttributes::flag("first")),
            ("--b", OptionAttributes::valued("second")),
        ]
        .into_iter()
        .collect();

        assert!(schema.contains("--a"));
        assert!(schema.contains("--b"));
    }
}
