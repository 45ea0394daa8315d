//! Orchestrator: ensure schema, compute the staged metrics, merge, report.
//!
//! One logical run per invocation, no internal concurrency; relational
//! execution is delegated to the lazy engine. Concurrent overlapping runs
//! against the same destination table are not supported — external
//! scheduling must guarantee at most one run at a time.

use anyhow::{Context, Result};
use chrono::Utc;
use polars::prelude::DataFrame;
use tracing::{debug, info};
use uuid::Uuid;

use crate::engine::aggregate::{aggregate_daily_sales, aggregate_daily_weather};
use crate::engine::io_traits::{DataLoader, MetricsStore};
use crate::engine::merge::{merge_into_destination, stage_daily_city_metrics, MergeOutcome};
use crate::engine::schema::ensure_destination_table;
use crate::engine::sources::{distinct_order_dates, weather_with_references};
use crate::model::catalog;
use crate::model::run::RunSummary;

/// Compute the full staged row-set: aggregated sales left-joined with
/// aggregated weather on (DATE, CITY_NAME, COUNTRY_DESC).
pub fn compute_staged_metrics<L: DataLoader>(loader: &L) -> Result<DataFrame> {
    let orders = loader
        .load(&catalog::orders_table())
        .context("failed to load order events")?;
    let weather = loader
        .load(&catalog::weather_history_table())
        .context("failed to load weather history")?;
    let postal_codes = loader
        .load(&catalog::postal_codes_table())
        .context("failed to load postal code reference")?;
    let countries = loader
        .load(&catalog::country_table())
        .context("failed to load country reference")?;

    let order_dates = distinct_order_dates(orders.clone());
    let joined_weather = weather_with_references(weather, postal_codes, countries, order_dates);

    let sales = aggregate_daily_sales(orders);
    let weather_agg = aggregate_daily_weather(joined_weather);

    let staged = stage_daily_city_metrics(sales, weather_agg)
        .collect()
        .context("failed to materialize staged daily city metrics")?;
    debug!(rows = staged.height(), "staged daily city metrics");
    Ok(staged)
}

/// Merge freshly computed metrics into the destination table with an
/// explicit `META_UPDATED_AT` stamp.
pub fn merge_daily_city_metrics<L: DataLoader, S: MetricsStore>(
    loader: &L,
    store: &S,
    updated_at: &str,
) -> Result<MergeOutcome> {
    let table = catalog::daily_city_metrics_table();
    let staged = compute_staged_metrics(loader)?;
    let destination = store
        .load_table(&table)
        .context("failed to load destination table")?;

    let outcome = merge_into_destination(&destination, &staged, updated_at)
        .context("failed to merge staged metrics into destination")?;
    store
        .save_table(&table, &outcome.frame)
        .context("failed to write destination table")?;
    Ok(outcome)
}

/// Run the full pipeline: ensure schema, aggregate, merge, report.
pub fn run_daily_city_metrics<L: DataLoader, S: MetricsStore>(
    loader: &L,
    store: &S,
) -> Result<RunSummary> {
    let run_id = Uuid::now_v7();
    info!(%run_id, destination = catalog::DAILY_CITY_METRICS, "starting daily city metrics run");

    let created_destination =
        ensure_destination_table(store).context("failed to ensure destination table")?;

    let updated_at = Utc::now().to_rfc3339();
    let outcome = merge_daily_city_metrics(loader, store, &updated_at)?;

    info!(
        rows_staged = outcome.rows_staged,
        rows_inserted = outcome.rows_inserted,
        rows_updated = outcome.rows_updated,
        "daily city metrics merge complete"
    );

    Ok(RunSummary {
        run_id,
        destination: catalog::DAILY_CITY_METRICS.to_string(),
        created_destination,
        rows_staged: outcome.rows_staged,
        rows_inserted: outcome.rows_inserted,
        rows_updated: outcome.rows_updated,
    })
}
