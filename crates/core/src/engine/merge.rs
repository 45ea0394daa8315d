//! Reconciler / Merge Engine.
//!
//! Staging left-joins the sales aggregate (driving side) with the weather
//! aggregate on the composite key; weather-only keys never reach the
//! destination. The merge is a keyed upsert: matched destination rows are
//! fully overwritten (every non-key column, nulls included), unmatched
//! staged rows are inserted, and destination keys absent from the staged
//! set are left untouched.

use polars::prelude::*;

use crate::engine::error::MetricsError;
use crate::model::catalog::{self, COL_META_UPDATED_AT, MERGE_KEY};

/// Result of one keyed upsert against the destination table.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub frame: DataFrame,
    pub rows_staged: usize,
    pub rows_inserted: usize,
    pub rows_updated: usize,
}

fn key_exprs() -> [Expr; 3] {
    [col(MERGE_KEY[0]), col(MERGE_KEY[1]), col(MERGE_KEY[2])]
}

/// Left-join the sales aggregate with the weather aggregate on
/// (DATE, CITY_NAME, COUNTRY_DESC).
///
/// Every sales key survives exactly once; weather fields are null when no
/// weather aggregate exists for the key.
pub fn stage_daily_city_metrics(sales: LazyFrame, weather: LazyFrame) -> LazyFrame {
    let weather = weather.rename(
        ["DATE", "CITY_NAME", "COUNTRY_DESC"],
        ["DATE_W", "CITY_NAME_W", "COUNTRY_DESC_W"],
        true,
    );

    sales
        .join(
            weather,
            key_exprs(),
            [col("DATE_W"), col("CITY_NAME_W"), col("COUNTRY_DESC_W")],
            JoinArgs::new(JoinType::Left),
        )
        .select([
            col(catalog::COL_DATE),
            col(catalog::COL_CITY_NAME),
            col(catalog::COL_COUNTRY_DESC),
            col(catalog::COL_DAILY_SALES),
            col(catalog::COL_AVG_TEMPERATURE_FAHRENHEIT),
            col(catalog::COL_AVG_TEMPERATURE_CELSIUS),
            col(catalog::COL_AVG_PRECIPITATION_INCHES),
            col(catalog::COL_AVG_PRECIPITATION_MILLIMETERS),
            col(catalog::COL_MAX_WIND_SPEED_100M_MPH),
        ])
}

/// Upsert the staged rows into the destination frame, stamping
/// `META_UPDATED_AT` with `updated_at` on every written row.
pub fn merge_into_destination(
    destination: &DataFrame,
    staged: &DataFrame,
    updated_at: &str,
) -> Result<MergeOutcome, MetricsError> {
    let table = catalog::daily_city_metrics_table();
    let destination_columns = table.column_names();

    let missing = destination_columns
        .iter()
        .filter(|column| destination.column(column).is_err())
        .cloned()
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(MetricsError::SchemaMismatch {
            table: table.name,
            missing,
        });
    }

    let merge_error = |error: PolarsError| MetricsError::Merge {
        table: table.name.clone(),
        message: error.to_string(),
    };

    let ordered_columns = destination_columns
        .iter()
        .map(|column| col(column.as_str()))
        .collect::<Vec<_>>();
    let stamped = staged
        .clone()
        .lazy()
        .with_columns([lit(updated_at.to_string()).alias(COL_META_UPDATED_AT)])
        .select(ordered_columns.clone());

    let rows_staged = staged.height();

    if destination.height() == 0 {
        let frame = stamped
            .sort(MERGE_KEY, SortMultipleOptions::default())
            .collect()
            .map_err(merge_error)?;
        return Ok(MergeOutcome {
            frame,
            rows_staged,
            rows_inserted: rows_staged,
            rows_updated: 0,
        });
    }

    let rows_updated = destination
        .clone()
        .lazy()
        .join(
            staged.clone().lazy(),
            key_exprs(),
            key_exprs(),
            JoinArgs::new(JoinType::Semi),
        )
        .collect()
        .map_err(merge_error)?
        .height();

    // Destination rows whose key is not being restaged survive unchanged;
    // everything staged replaces or extends the rest.
    let untouched = destination
        .clone()
        .lazy()
        .join(
            staged.clone().lazy(),
            key_exprs(),
            key_exprs(),
            JoinArgs::new(JoinType::Anti),
        )
        .select(ordered_columns);

    let frame = concat([untouched, stamped], UnionArgs::default())
        .map_err(merge_error)?
        .sort(MERGE_KEY, SortMultipleOptions::default())
        .collect()
        .map_err(merge_error)?;

    Ok(MergeOutcome {
        frame,
        rows_staged,
        rows_inserted: rows_staged - rows_updated,
        rows_updated,
    })
}
