pub mod catalog;
pub mod run;
pub mod schema;

pub use run::RunSummary;
pub use schema::{ColumnDef, ColumnType, TableRef};
