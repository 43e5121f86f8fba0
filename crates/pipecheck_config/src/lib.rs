//! Configuration documents and validation results for pipecheck.
//!
//! This crate provides:
//! - An insertion-ordered configuration document model
//! - Loading documents from YAML or JSON text
//! - Typed validation errors with editor-friendly paths
//!
//! # Example
//!
//! ```rust,ignore
//! use pipecheck_config::{parse_document, DocumentFormat};
//!
//! let document = parse_document("solids:\n  sum:\n    inputs: {}\n", DocumentFormat::Yaml)?;
//! assert!(document.is_some());
//! ```

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod document;
pub mod error;
pub mod model;

pub use document::{first_key, parse_document, ConfigDocument, DocumentFormat};
pub use error::{Error, Result};
pub use model::{ErrorReason, PathSegment, ValidationError, ValidationResult};
