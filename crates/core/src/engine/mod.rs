pub mod aggregate;
pub mod error;
pub mod io_traits;
pub mod merge;
pub mod schema;
pub mod sources;
