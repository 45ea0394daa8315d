use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use dcm_core::run_daily_city_metrics;
use tracing::debug;

use crate::config::WorkspaceConfig;
use crate::storage::{CsvDataLoader, CsvMetricsStore};

/// Run the daily city metrics pipeline against a CSV workspace.
#[derive(Debug, Args)]
pub struct RunCommand {
    /// Path to the workspace config YAML
    #[arg(long)]
    config: PathBuf,

    /// Print the run summary as JSON instead of the status message
    #[arg(long)]
    json: bool,
}

impl RunCommand {
    pub fn execute(&self) -> Result<i32> {
        let config = WorkspaceConfig::load(&self.config)?;
        debug!(sources = config.sources.len(), data_dir = %config.data_dir.display(), "loaded workspace config");

        let loader = CsvDataLoader::new(config.sources);
        let store = CsvMetricsStore::new(config.data_dir);

        let summary = run_daily_city_metrics(&loader, &store)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!("{}", summary.status_message());
        }
        Ok(0)
    }
}
