//! pipecheck CLI - pipeline config validation.
//!
//! Commands:
//! - `pipecheck check` - Validate a config file and list errors by path
//! - `pipecheck types` - Print the config type fields of a pipeline

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pipecheck_graphql::{Client, ClientConfig};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pipecheck")]
#[command(about = "Validate pipeline config documents against a GraphQL service")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// GraphQL endpoint of the validation service
    #[arg(
        long,
        global = true,
        env = "PIPECHECK_ENDPOINT",
        default_value = "http://127.0.0.1:3000/graphql"
    )]
    endpoint: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout_seconds: u64,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per error.
    Text,
    /// The full result as JSON.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a config file against a pipeline
    Check {
        /// Pipeline name
        pipeline: String,

        /// Path to the config file (YAML, or JSON with a .json extension)
        file: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the config type fields of a pipeline
    Types {
        /// Pipeline name
        pipeline: String,

        /// Name of the pipeline's environment (root) config type
        #[arg(short, long)]
        environment_type: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let client = Client::new(ClientConfig {
        endpoint: cli.endpoint,
        timeout_seconds: cli.timeout_seconds,
    })
    .with_context(|| "Failed to create validation client")?;

    match cli.command {
        Commands::Check {
            pipeline,
            file,
            format,
        } => commands::check::run(&client, &pipeline, &file, format).await,
        Commands::Types {
            pipeline,
            environment_type,
        } => commands::types::run(&client, &pipeline, &environment_type).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn types_requires_environment_type() {
        assert!(Cli::try_parse_from(["pipecheck", "types", "math"]).is_err());

        let cli = Cli::try_parse_from(["pipecheck", "types", "math", "--environment-type", "Math.Env"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Types { environment_type, .. } if environment_type == "Math.Env"
        ));
    }
}
