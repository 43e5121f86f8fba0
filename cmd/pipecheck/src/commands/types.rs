//! Types command implementation.

use anyhow::{Context, Result};
use pipecheck_graphql::Client;
use tracing::info;

/// Runs the types command.
pub async fn run(client: &Client, pipeline: &str, environment_type: &str) -> Result<()> {
    let type_config = client
        .fetch_type_config(pipeline, environment_type)
        .await
        .with_context(|| format!("Failed to fetch config types for pipeline: {pipeline}"))?;

    info!(
        "Pipeline '{}' has {} composite config types",
        pipeline,
        type_config.types.len()
    );

    println!("{}", serde_json::to_string_pretty(&type_config)?);
    Ok(())
}
