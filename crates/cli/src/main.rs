//! `tradeflow` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve` — start the API server over a fresh in-memory store.
//! - `run`   — execute a workflow JSON file and print its report.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use engine::WorkflowExecutor;
use store::WorkflowStore;

#[derive(Parser)]
#[command(
    name = "tradeflow",
    about = "Graph-based trading workflow engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
    },
    /// Execute a workflow definition JSON file and print the report.
    Run {
        /// Path to the workflow JSON file.
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { bind } => {
            info!("Starting API server on {bind}");
            let state = api::AppState {
                store: Arc::new(WorkflowStore::new()),
                executor: Arc::new(WorkflowExecutor::with_defaults()),
            };
            api::serve(&bind, state).await?;
        }
        Command::Run { path } => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read file {}", path.display()))?;
            let workflow: engine::Workflow =
                serde_json::from_str(&content).context("invalid workflow JSON")?;

            let report = WorkflowExecutor::with_defaults().execute(&workflow);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
