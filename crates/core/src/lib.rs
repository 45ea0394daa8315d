pub mod engine;
pub mod execution;
pub mod model;

pub use engine::io_traits::{DataLoader, DataLoaderError, MetricsStore, MetricsStoreError};
pub use engine::merge::MergeOutcome;
pub use execution::pipeline::{
    compute_staged_metrics, merge_daily_city_metrics, run_daily_city_metrics,
};
pub use model::run::RunSummary;
