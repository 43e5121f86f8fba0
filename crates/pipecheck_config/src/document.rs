//! Configuration document loading.
//!
//! A document is the user-authored mapping submitted for validation. Key
//! order matters: errors reported against the whole document are anchored to
//! the first top-level key, so the mapping keeps insertion order.

use crate::error::{Error, Result};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// An insertion-ordered mapping from top-level keys to nested values.
pub type ConfigDocument = serde_json::Map<String, Value>;

/// Text format of a configuration document on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// YAML (the default for editor-authored config).
    Yaml,
    /// JSON.
    Json,
}

impl DocumentFormat {
    /// Picks a format from a file extension, defaulting to YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Parses document text.
///
/// Blank input and an explicit `null` both produce `None`, the absent
/// document, which validates trivially.
///
/// # Errors
///
/// Returns an error if the text is not valid YAML/JSON or if its top level
/// is anything other than a mapping.
///
/// # Example
///
/// ```rust
/// use pipecheck_config::{parse_document, DocumentFormat};
///
/// let document = parse_document("b: 1\na: 2\n", DocumentFormat::Yaml)
///     .unwrap()
///     .unwrap();
/// assert_eq!(pipecheck_config::first_key(&document), Some("b"));
/// ```
pub fn parse_document(text: &str, format: DocumentFormat) -> Result<Option<ConfigDocument>> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    let value: Value = match format {
        DocumentFormat::Yaml => serde_yaml::from_str(text)?,
        DocumentFormat::Json => serde_json::from_str(text)?,
    };

    match value {
        Value::Null => Ok(None),
        Value::Object(map) => {
            debug!("Parsed config document with {} top-level keys", map.len());
            Ok(Some(map))
        }
        other => Err(Error::NotAMapping {
            found: kind_name(&other),
        }),
    }
}

/// Returns the first top-level key in insertion order.
pub fn first_key(document: &ConfigDocument) -> Option<&str> {
    document.keys().next().map(String::as_str)
}

const fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
