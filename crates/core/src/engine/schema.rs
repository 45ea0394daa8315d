//! Schema Manager: idempotent existence check and creation of the
//! destination table. Never truncates or drops an existing table.

use tracing::{debug, info};

use crate::engine::io_traits::{MetricsStore, MetricsStoreError};
use crate::model::catalog::daily_city_metrics_table;

/// Create the destination table when absent. Returns whether a table was
/// created; safe to call unconditionally.
pub fn ensure_destination_table<S: MetricsStore>(store: &S) -> Result<bool, MetricsStoreError> {
    let table = daily_city_metrics_table();
    if store.table_exists(&table.name)? {
        debug!(table = %table.name, "destination table already exists");
        return Ok(false);
    }

    store.create_table(&table)?;
    info!(table = %table.name, "created destination table");
    Ok(true)
}
