//! Check command implementation.

use crate::OutputFormat;
use anyhow::{Context, Result};
use pipecheck_config::{parse_document, DocumentFormat, ValidationResult};
use pipecheck_graphql::Client;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Runs the check command.
pub async fn run(client: &Client, pipeline: &str, file: &str, format: OutputFormat) -> Result<()> {
    info!("Checking {} against pipeline '{}'", file, pipeline);

    let text =
        fs::read_to_string(file).with_context(|| format!("Failed to read config file: {file}"))?;

    let document = parse_document(&text, DocumentFormat::from_path(Path::new(file)))
        .with_context(|| format!("Failed to parse config file: {file}"))?;

    if document.is_none() {
        warn!("{} is empty, nothing to validate", file);
    }

    let result = client
        .check_config(pipeline, document.as_ref())
        .await
        .with_context(|| format!("Could not validate config against {}", client.endpoint()))?;

    let report = match format {
        OutputFormat::Text => render_text(&result),
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
    };
    println!("{report}");

    if !result.is_valid() {
        anyhow::bail!(
            "Config is invalid with {} error(s)",
            result.errors().len()
        );
    }

    info!("Config is valid");
    Ok(())
}

fn render_text(result: &ValidationResult) -> String {
    match result {
        ValidationResult::Valid => "valid".to_string(),
        ValidationResult::Invalid(errors) => errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
