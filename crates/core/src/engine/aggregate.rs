//! Metric Aggregator: daily sales totals and daily weather summaries,
//! both keyed on (DATE, CITY_NAME, COUNTRY_DESC).

use polars::prelude::*;

use crate::model::catalog::{
    COL_AVG_PRECIPITATION_INCHES, COL_AVG_PRECIPITATION_MILLIMETERS, COL_AVG_TEMPERATURE_CELSIUS,
    COL_AVG_TEMPERATURE_FAHRENHEIT, COL_CITY_NAME, COL_COUNTRY_DESC, COL_DAILY_SALES, COL_DATE,
    COL_MAX_WIND_SPEED_100M_MPH,
};

use crate::engine::sources::trimmed;

/// C = (F - 32) * 5/9, applied per row before any averaging.
pub fn fahrenheit_to_celsius(value: Expr) -> Expr {
    (value - lit(32.0)) * lit(5.0) / lit(9.0)
}

/// mm = in * 25.4, applied per row before any averaging.
pub fn inches_to_millimeters(value: Expr) -> Expr {
    value * lit(25.4)
}

/// Sum order prices per (date, city, country).
///
/// A group whose price sum is null reports `DAILY_SALES` as 0.0 — sales is
/// never null. City-days with no orders at all produce no group here.
pub fn aggregate_daily_sales(orders: LazyFrame) -> LazyFrame {
    orders
        .with_columns([trimmed("PRIMARY_CITY"), trimmed("COUNTRY")])
        .group_by([col("ORDER_TS_DATE"), col("PRIMARY_CITY"), col("COUNTRY")])
        .agg([col("PRICE").sum().alias("PRICE_NULLS")])
        .select([
            col("ORDER_TS_DATE").alias(COL_DATE),
            col("PRIMARY_CITY").alias(COL_CITY_NAME),
            col("COUNTRY").alias(COL_COUNTRY_DESC),
            col("PRICE_NULLS").fill_null(lit(0.0)).alias(COL_DAILY_SALES),
        ])
}

/// Summarize reference-joined weather rows per (date, city, country).
///
/// Unit conversions run per row, then the mean is taken over the converted
/// values; the mean commutes with these linear conversions, but the order
/// is fixed so rounding behaves identically everywhere. All outputs except
/// max wind speed are rounded to 2 decimals.
pub fn aggregate_daily_weather(weather: LazyFrame) -> LazyFrame {
    weather
        .group_by([col("DATE_VALID_STD"), col("CITY_NAME_PC"), col("COUNTRY_C")])
        .agg([
            col("AVG_TEMPERATURE_AIR_2M_F")
                .mean()
                .alias("AVG_TEMPERATURE_F"),
            fahrenheit_to_celsius(col("AVG_TEMPERATURE_AIR_2M_F"))
                .mean()
                .alias("AVG_TEMPERATURE_C"),
            col("TOT_PRECIPITATION_IN")
                .mean()
                .alias("AVG_PRECIPITATION_IN"),
            inches_to_millimeters(col("TOT_PRECIPITATION_IN"))
                .mean()
                .alias("AVG_PRECIPITATION_MM"),
            col(COL_MAX_WIND_SPEED_100M_MPH).max(),
        ])
        .select([
            col("DATE_VALID_STD").alias(COL_DATE),
            col("CITY_NAME_PC").alias(COL_CITY_NAME),
            col("COUNTRY_C").alias(COL_COUNTRY_DESC),
            col("AVG_TEMPERATURE_F")
                .round(2)
                .alias(COL_AVG_TEMPERATURE_FAHRENHEIT),
            col("AVG_TEMPERATURE_C")
                .round(2)
                .alias(COL_AVG_TEMPERATURE_CELSIUS),
            col("AVG_PRECIPITATION_IN")
                .round(2)
                .alias(COL_AVG_PRECIPITATION_INCHES),
            col("AVG_PRECIPITATION_MM")
                .round(2)
                .alias(COL_AVG_PRECIPITATION_MILLIMETERS),
            col(COL_MAX_WIND_SPEED_100M_MPH),
        ])
}
