//! Validation result model.
//!
//! These are the normalized shapes handed to an editor for inline
//! highlighting: a flat list of errors, each carrying a path anchored at the
//! top level of the document.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// One step in a path through a configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A mapping key.
    Field(String),
    /// A sequence position.
    Index(usize),
}

/// Reason code attached to a validation error by the service.
///
/// Unrecognised codes are kept verbatim in [`ErrorReason::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorReason {
    /// A value has the wrong runtime type.
    RuntimeTypeMismatch,
    /// A required field is missing.
    MissingRequiredField,
    /// Several required fields are missing.
    MissingRequiredFields,
    /// A field is not defined on its parent type.
    FieldNotDefined,
    /// Several fields are not defined on their parent type.
    FieldsNotDefined,
    /// A selector has the wrong number of fields.
    SelectorFieldError,
    /// Any other code.
    Unknown(String),
}

/// A single normalized validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Human-readable message, as reported by the service.
    pub message: String,
    /// Reason code, as reported by the service.
    pub reason: ErrorReason,
    /// Location of the error, outermost segment first.
    pub path: Vec<PathSegment>,
}

/// Outcome of validating a configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "errors", rename_all = "snake_case")]
pub enum ValidationResult {
    /// The document passed validation.
    Valid,
    /// The document failed validation.
    Invalid(Vec<ValidationError>),
}

impl PathSegment {
    /// Creates a field segment.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl Serialize for PathSegment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl ErrorReason {
    /// Returns the wire code for this reason.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::RuntimeTypeMismatch => "RUNTIME_TYPE_MISMATCH",
            Self::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            Self::MissingRequiredFields => "MISSING_REQUIRED_FIELDS",
            Self::FieldNotDefined => "FIELD_NOT_DEFINED",
            Self::FieldsNotDefined => "FIELDS_NOT_DEFINED",
            Self::SelectorFieldError => "SELECTOR_FIELD_ERROR",
            Self::Unknown(code) => code,
        }
    }
}

impl From<String> for ErrorReason {
    fn from(code: String) -> Self {
        match code.as_str() {
            "RUNTIME_TYPE_MISMATCH" => Self::RuntimeTypeMismatch,
            "MISSING_REQUIRED_FIELD" => Self::MissingRequiredField,
            "MISSING_REQUIRED_FIELDS" => Self::MissingRequiredFields,
            "FIELD_NOT_DEFINED" => Self::FieldNotDefined,
            "FIELDS_NOT_DEFINED" => Self::FieldsNotDefined,
            "SELECTOR_FIELD_ERROR" => Self::SelectorFieldError,
            _ => Self::Unknown(code),
        }
    }
}

impl From<&str> for ErrorReason {
    fn from(code: &str) -> Self {
        Self::from(code.to_string())
    }
}

impl From<ErrorReason> for String {
    fn from(reason: ErrorReason) -> Self {
        match reason {
            ErrorReason::Unknown(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ValidationError {
    /// Renders the path as dot-separated segments, or `<root>` when empty.
    #[must_use]
    pub fn path_string(&self) -> String {
        if self.path.is_empty() {
            return "<root>".to_string();
        }
        self.path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [{}]", self.path_string(), self.message, self.reason)
    }
}

impl ValidationResult {
    /// Returns true for [`ValidationResult::Valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the errors of an invalid result, or an empty slice.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }
}
