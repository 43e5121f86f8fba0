//! Subcommand implementations.

pub mod check;
pub mod types;
