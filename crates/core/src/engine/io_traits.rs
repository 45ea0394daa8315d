use polars::prelude::{DataFrame, LazyFrame};
use thiserror::Error;

use crate::model::TableRef;

#[derive(Debug, Error)]
pub enum DataLoaderError {
    #[error("source table '{table}' not found")]
    TableNotFound { table: String },
    #[error("failed to load source table '{table}': {message}")]
    LoadFailed { table: String, message: String },
}

#[derive(Debug, Error)]
pub enum MetricsStoreError {
    #[error("destination table '{table}' not found")]
    TableNotFound { table: String },
    #[error("failed to create table '{table}': {message}")]
    CreateFailed { table: String, message: String },
    #[error("failed to read table '{table}': {message}")]
    ReadFailed { table: String, message: String },
    #[error("failed to write table '{table}': {message}")]
    WriteFailed { table: String, message: String },
}

/// Read-only access to the upstream source relations, addressed by name.
pub trait DataLoader {
    fn load(&self, table: &TableRef) -> Result<LazyFrame, DataLoaderError>;
}

/// Lifecycle of the destination metrics table.
///
/// `create_table` is only called after a negative `table_exists` check;
/// implementations must never truncate or drop an existing table.
pub trait MetricsStore {
    fn table_exists(&self, name: &str) -> Result<bool, MetricsStoreError>;
    fn create_table(&self, table: &TableRef) -> Result<(), MetricsStoreError>;
    fn load_table(&self, table: &TableRef) -> Result<DataFrame, MetricsStoreError>;
    fn save_table(&self, table: &TableRef, frame: &DataFrame) -> Result<(), MetricsStoreError>;
}
