use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    #[error("merge error on '{table}': {message}")]
    Merge { table: String, message: String },
    #[error("destination table '{table}' is missing columns {missing:?}")]
    SchemaMismatch { table: String, missing: Vec<String> },
}
