mod commands;
mod config;
mod storage;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::RunCommand;
use tracing_subscriber::EnvFilter;

/// Daily city metrics - aggregation and merge pipeline tool
#[derive(Debug, Parser)]
#[command(
    name = "dcm",
    version,
    about = "Daily city metrics aggregation and merge pipeline"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the pipeline against a workspace config
    Run(RunCommand),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Run(cmd) => cmd.execute()?,
    };

    std::process::exit(exit_code);
}
