//! Source Reader: exposes the order stream and the reference-joined
//! weather history as logical row-sets.
//!
//! Weather observations are restricted to the dates present in the pending
//! order data before any aggregation runs; weather history is large and
//! append-only, so this bounds the refresh window. Rows that fail either
//! reference join are dropped (inner-join semantics) — weather for unmapped
//! postal codes or cities is silently excluded.

use polars::prelude::*;

use crate::model::catalog::COL_DATE;

/// Trim surrounding whitespace from a string join key in place.
pub fn trimmed(column: &str) -> Expr {
    col(column).str().strip_chars(lit(NULL)).alias(column)
}

/// Distinct order dates of the pending order rows, aliased `DATE`.
pub fn distinct_order_dates(orders: LazyFrame) -> LazyFrame {
    orders
        .select([col("ORDER_TS_DATE").alias(COL_DATE)])
        .unique(None, UniqueKeepStrategy::First)
}

/// Join weather history to the postal-code and country references and
/// restrict it to the given order dates.
///
/// The postal-code reference supplies the provisional city name (joined on
/// postal code + ISO country, columns suffixed `_PC`); the country reference
/// supplies the canonical country display name matching the order data's
/// convention (joined on ISO country + city name, columns suffixed `_C`).
pub fn weather_with_references(
    weather: LazyFrame,
    postal_codes: LazyFrame,
    countries: LazyFrame,
    order_dates: LazyFrame,
) -> LazyFrame {
    let weather = weather.with_columns([trimmed("POSTAL_CODE"), trimmed("COUNTRY")]);

    let postal_codes = postal_codes
        .with_columns([
            trimmed("POSTAL_CODE"),
            trimmed("COUNTRY"),
            trimmed("CITY_NAME"),
        ])
        .rename(
            ["POSTAL_CODE", "COUNTRY", "CITY_NAME"],
            ["POSTAL_CODE_PC", "COUNTRY_PC", "CITY_NAME_PC"],
            true,
        );

    let countries = countries
        .with_columns([trimmed("ISO_COUNTRY"), trimmed("CITY"), trimmed("COUNTRY")])
        .rename(
            ["ISO_COUNTRY", "CITY", "COUNTRY"],
            ["ISO_COUNTRY_C", "CITY_C", "COUNTRY_C"],
            true,
        );

    weather
        .join(
            postal_codes,
            [col("POSTAL_CODE"), col("COUNTRY")],
            [col("POSTAL_CODE_PC"), col("COUNTRY_PC")],
            JoinArgs::new(JoinType::Inner),
        )
        .join(
            countries,
            [col("COUNTRY"), col("CITY_NAME_PC")],
            [col("ISO_COUNTRY_C"), col("CITY_C")],
            JoinArgs::new(JoinType::Inner),
        )
        .join(
            order_dates,
            [col("DATE_VALID_STD")],
            [col(COL_DATE)],
            JoinArgs::new(JoinType::Inner),
        )
        .select([
            col("DATE_VALID_STD"),
            col("CITY_NAME_PC"),
            col("COUNTRY_C"),
            col("AVG_TEMPERATURE_AIR_2M_F"),
            col("TOT_PRECIPITATION_IN"),
            col("MAX_WIND_SPEED_100M_MPH"),
        ])
}
