//! Loading option schemas from disk.
//!
//! A schema file maps each flag to its attributes. YAML (`.yaml`, `.yml`)
//! and JSON (`.json`) are accepted:
//!
//! ```yaml
//! --jobs:
//!   value_required: true
//!   description: Number of parallel jobs
//! --verbose:
//!   description: Print progress
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use optline_core::{OptionSchema, SchemaError, validate_schema};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading or saving a schema file.
#[derive(Debug, Error)]
pub enum SchemaFileError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// File extension is not one of the supported formats.
    #[error("unsupported schema format '{0}': expected .yaml, .yml or .json")]
    UnsupportedFormat(String),

    /// The file parsed but declares a flag that can never match.
    #[error("invalid schema: {0}")]
    InvalidSchema(#[from] SchemaError),
}

pub type Result<T> = std::result::Result<T, SchemaFileError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

fn detect_format(path: &Path) -> Result<Format> {
    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "json" => Ok(Format::Json),
        "yaml" | "yml" => Ok(Format::Yaml),
        _ => Err(SchemaFileError::UnsupportedFormat(ext)),
    }
}

/// Loads and validates a schema file.
///
/// # Errors
///
/// Fails if the file cannot be read or parsed, has an unsupported
/// extension, or declares an invalid flag.
pub fn load(path: impl AsRef<Path>) -> Result<OptionSchema> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let reader = BufReader::new(std::fs::File::open(path)?);
    let schema: OptionSchema = match format {
        Format::Json => serde_json::from_reader(reader)?,
        Format::Yaml => serde_yaml::from_reader(reader)?,
    };

    if let Some(err) = validate_schema(&schema).into_iter().next() {
        return Err(err.into());
    }

    debug!(path = %path.display(), options = schema.len(), "loaded schema");
    Ok(schema)
}

/// Writes `schema` in the format implied by the extension of `path`.
pub fn save(schema: &OptionSchema, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let writer = BufWriter::new(std::fs::File::create(path)?);
    match format {
        Format::Json => serde_json::to_writer_pretty(writer, schema)?,
        Format::Yaml => serde_yaml::to_writer(writer, schema)?,
    }
    Ok(())
}
