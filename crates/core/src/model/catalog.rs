//! Table declarations for the source relations and the destination table.
//!
//! Column names follow the upstream warehouse convention (upper snake).
//! Source relations are read-only; only the columns the pipeline consumes
//! are declared, extra meteorological fields in the weather history are
//! tolerated and ignored.

use crate::model::schema::{ColumnDef, ColumnType, TableRef};

pub const ORDERS_STREAM: &str = "ORDERS_STREAM";
pub const WEATHER_HISTORY_DAY: &str = "WEATHER_HISTORY_DAY";
pub const POSTAL_CODES: &str = "POSTAL_CODES";
pub const COUNTRY: &str = "COUNTRY";
pub const DAILY_CITY_METRICS: &str = "DAILY_CITY_METRICS";

// Destination columns; (DATE, CITY_NAME, COUNTRY_DESC) is the merge key.
pub const COL_DATE: &str = "DATE";
pub const COL_CITY_NAME: &str = "CITY_NAME";
pub const COL_COUNTRY_DESC: &str = "COUNTRY_DESC";
pub const COL_DAILY_SALES: &str = "DAILY_SALES";
pub const COL_AVG_TEMPERATURE_FAHRENHEIT: &str = "AVG_TEMPERATURE_FAHRENHEIT";
pub const COL_AVG_TEMPERATURE_CELSIUS: &str = "AVG_TEMPERATURE_CELSIUS";
pub const COL_AVG_PRECIPITATION_INCHES: &str = "AVG_PRECIPITATION_INCHES";
pub const COL_AVG_PRECIPITATION_MILLIMETERS: &str = "AVG_PRECIPITATION_MILLIMETERS";
pub const COL_MAX_WIND_SPEED_100M_MPH: &str = "MAX_WIND_SPEED_100M_MPH";
pub const COL_META_UPDATED_AT: &str = "META_UPDATED_AT";

pub const MERGE_KEY: [&str; 3] = [COL_DATE, COL_CITY_NAME, COL_COUNTRY_DESC];

fn column(name: &str, column_type: ColumnType, nullable: bool) -> ColumnDef {
    ColumnDef {
        name: name.to_string(),
        column_type,
        nullable: Some(nullable),
    }
}

pub fn orders_table() -> TableRef {
    TableRef {
        name: ORDERS_STREAM.to_string(),
        columns: vec![
            column("ORDER_TS_DATE", ColumnType::Date, false),
            column("PRICE", ColumnType::Decimal, true),
            column("PRIMARY_CITY", ColumnType::String, false),
            column("COUNTRY", ColumnType::String, false),
        ],
    }
}

pub fn weather_history_table() -> TableRef {
    TableRef {
        name: WEATHER_HISTORY_DAY.to_string(),
        columns: vec![
            column("POSTAL_CODE", ColumnType::String, false),
            column("COUNTRY", ColumnType::String, false),
            column("DATE_VALID_STD", ColumnType::Date, false),
            column("AVG_TEMPERATURE_AIR_2M_F", ColumnType::Decimal, true),
            column("TOT_PRECIPITATION_IN", ColumnType::Decimal, true),
            column("MAX_WIND_SPEED_100M_MPH", ColumnType::Decimal, true),
        ],
    }
}

pub fn postal_codes_table() -> TableRef {
    TableRef {
        name: POSTAL_CODES.to_string(),
        columns: vec![
            column("POSTAL_CODE", ColumnType::String, false),
            column("COUNTRY", ColumnType::String, false),
            column("CITY_NAME", ColumnType::String, false),
        ],
    }
}

pub fn country_table() -> TableRef {
    TableRef {
        name: COUNTRY.to_string(),
        columns: vec![
            column("ISO_COUNTRY", ColumnType::String, false),
            column("CITY", ColumnType::String, false),
            column("COUNTRY", ColumnType::String, false),
        ],
    }
}

pub fn daily_city_metrics_table() -> TableRef {
    TableRef {
        name: DAILY_CITY_METRICS.to_string(),
        columns: vec![
            column(COL_DATE, ColumnType::Date, false),
            column(COL_CITY_NAME, ColumnType::String, false),
            column(COL_COUNTRY_DESC, ColumnType::String, false),
            column(COL_DAILY_SALES, ColumnType::Decimal, false),
            column(COL_AVG_TEMPERATURE_FAHRENHEIT, ColumnType::Decimal, true),
            column(COL_AVG_TEMPERATURE_CELSIUS, ColumnType::Decimal, true),
            column(COL_AVG_PRECIPITATION_INCHES, ColumnType::Decimal, true),
            column(COL_AVG_PRECIPITATION_MILLIMETERS, ColumnType::Decimal, true),
            column(COL_MAX_WIND_SPEED_100M_MPH, ColumnType::Decimal, true),
            column(COL_META_UPDATED_AT, ColumnType::Timestamp, false),
        ],
    }
}
