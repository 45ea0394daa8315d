use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Workspace configuration: where the source relations live and where the
/// destination table is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceConfig {
    /// Source table name -> CSV path.
    pub sources: BTreeMap<String, PathBuf>,
    /// Directory holding the destination table.
    pub data_dir: PathBuf,
}

impl WorkspaceConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read workspace config {}", path.display()))?;
        serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse workspace config {}", path.display()))
    }
}
