//! GraphQL client for pipeline config validation.
//!
//! This crate provides:
//! - Query documents for config checks and pipeline type lookups
//! - Typed wire responses discriminated by `__typename`
//! - Normalization of validation errors into editor-ready paths
//! - An HTTP client and a [`ConfigValidator`] seam for other transports
//!
//! # Example
//!
//! ```rust,ignore
//! use pipecheck_graphql::{Client, ClientConfig};
//!
//! let client = Client::new(ClientConfig::default())?;
//! let result = client.check_config("my_pipeline", Some(&document)).await?;
//! ```

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod client;
pub mod error;
pub mod normalize;
pub mod query;
pub mod response;
pub mod sequence;
pub mod types;

pub use client::{check_config, Client, ClientConfig, ConfigValidator};
pub use error::{Error, Result};
pub use normalize::normalize;
pub use response::ConfigValidity;
pub use sequence::{CheckSequencer, CheckTicket};
pub use types::{build_type_config, FieldType, TypeConfig};
