use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub destination: String,
    pub created_destination: bool,
    pub rows_staged: usize,
    pub rows_inserted: usize,
    pub rows_updated: usize,
}

impl RunSummary {
    pub fn status_message(&self) -> String {
        format!("Successfully processed {}", self.destination)
    }
}
