//! Normalization of service validation errors.
//!
//! Turns the service's evaluation stacks into flat paths an editor can
//! highlight. Errors at the document root have no stack; highlighting the
//! whole editor is useless, so they are pinned to the first top-level key.

use crate::response::{ConfigValidity, RawValidationError, StackEntry};
use pipecheck_config::{first_key, ConfigDocument, PathSegment, ValidationError, ValidationResult};
use tracing::debug;

/// Converts a validity verdict into a [`ValidationResult`].
///
/// An absent document is always valid, as is any verdict other than
/// [`ConfigValidity::Invalid`]. Messages and reasons pass through verbatim.
///
/// # Example
///
/// ```rust
/// use pipecheck_config::{ConfigDocument, PathSegment};
/// use pipecheck_graphql::normalize;
/// use pipecheck_graphql::response::{ConfigValidity, EvaluationStack, RawValidationError};
///
/// let mut document = ConfigDocument::new();
/// document.insert("x".to_string(), 1.into());
/// document.insert("y".to_string(), 2.into());
///
/// let verdict = ConfigValidity::Invalid {
///     errors: vec![RawValidationError {
///         reason: "MISSING_REQUIRED_FIELD".into(),
///         message: "Missing required field \"solids\"".to_string(),
///         stack: EvaluationStack::default(),
///     }],
/// };
///
/// let result = normalize(Some(&document), verdict);
/// assert_eq!(result.errors()[0].path, vec![PathSegment::field("x")]);
/// ```
pub fn normalize(raw_config: Option<&ConfigDocument>, response: ConfigValidity) -> ValidationResult {
    let Some(document) = raw_config else {
        return ValidationResult::Valid;
    };

    let errors = match response {
        ConfigValidity::Invalid { errors } => errors,
        ConfigValidity::Valid | ConfigValidity::Other => return ValidationResult::Valid,
    };

    let anchor = first_key(document);
    let errors: Vec<ValidationError> = errors
        .into_iter()
        .map(|raw| normalize_error(raw, anchor))
        .collect();

    debug!("Normalized {} validation errors", errors.len());
    ValidationResult::Invalid(errors)
}

fn normalize_error(raw: RawValidationError, anchor: Option<&str>) -> ValidationError {
    let mut path: Vec<PathSegment> = raw.stack.entries.into_iter().map(segment).collect();

    if path.is_empty() {
        if let Some(key) = anchor {
            path.push(PathSegment::field(key));
        }
    }

    ValidationError {
        message: raw.message,
        reason: raw.reason,
        path,
    }
}

fn segment(entry: StackEntry) -> PathSegment {
    match entry {
        StackEntry::Field { field } => PathSegment::Field(field.name),
        StackEntry::ListItem { list_index } => PathSegment::Index(list_index),
    }
}
