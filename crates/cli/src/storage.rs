//! CSV-backed implementations of the core IO traits.
//!
//! Sources are individual CSV files mapped by table name; the destination
//! table lives as `<name>.csv` under the workspace data directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use dcm_core::model::TableRef;
use dcm_core::{DataLoader, DataLoaderError, MetricsStore, MetricsStoreError};
use polars::prelude::*;

pub struct CsvDataLoader {
    tables: BTreeMap<String, PathBuf>,
}

impl CsvDataLoader {
    pub fn new(tables: BTreeMap<String, PathBuf>) -> Self {
        Self { tables }
    }
}

impl DataLoader for CsvDataLoader {
    fn load(&self, table: &TableRef) -> Result<LazyFrame, DataLoaderError> {
        let path = self
            .tables
            .get(&table.name)
            .ok_or_else(|| DataLoaderError::TableNotFound {
                table: table.name.clone(),
            })?;
        // Numeric-looking keys (e.g. postal codes) infer as integers; cast
        // the declared columns back to their physical dtypes so the engine
        // sees a stable schema.
        let casts = table
            .columns
            .iter()
            .map(|column| {
                col(column.name.as_str()).cast(column.column_type.physical_dtype())
            })
            .collect::<Vec<_>>();
        LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(1000))
            .finish()
            .map(|frame| frame.with_columns(casts))
            .map_err(|error| DataLoaderError::LoadFailed {
                table: table.name.clone(),
                message: error.to_string(),
            })
    }
}

pub struct CsvMetricsStore {
    data_dir: PathBuf,
}

impl CsvMetricsStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn table_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{name}.csv"))
    }
}

impl MetricsStore for CsvMetricsStore {
    fn table_exists(&self, name: &str) -> Result<bool, MetricsStoreError> {
        Ok(self.table_path(name).exists())
    }

    fn create_table(&self, table: &TableRef) -> Result<(), MetricsStoreError> {
        let create_error = |message: String| MetricsStoreError::CreateFailed {
            table: table.name.clone(),
            message,
        };

        fs::create_dir_all(&self.data_dir).map_err(|error| create_error(error.to_string()))?;
        let mut frame = table
            .empty_frame()
            .map_err(|error| create_error(error.to_string()))?;
        let mut file = fs::File::create(self.table_path(&table.name))
            .map_err(|error| create_error(error.to_string()))?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut frame)
            .map_err(|error| create_error(error.to_string()))
    }

    fn load_table(&self, table: &TableRef) -> Result<DataFrame, MetricsStoreError> {
        let path = self.table_path(&table.name);
        if !path.exists() {
            return Err(MetricsStoreError::TableNotFound {
                table: table.name.clone(),
            });
        }
        let read_error = |message: String| MetricsStoreError::ReadFailed {
            table: table.name.clone(),
            message,
        };

        // All-null CSV columns infer as strings; cast everything back to
        // the declared dtypes so merges see a stable schema.
        let casts = table
            .columns
            .iter()
            .map(|column| {
                col(column.name.as_str()).cast(column.column_type.physical_dtype())
            })
            .collect::<Vec<_>>();
        LazyCsvReader::new(&path)
            .with_has_header(true)
            .with_infer_schema_length(Some(1000))
            .finish()
            .map_err(|error| read_error(error.to_string()))?
            .with_columns(casts)
            .collect()
            .map_err(|error| read_error(error.to_string()))
    }

    fn save_table(&self, table: &TableRef, frame: &DataFrame) -> Result<(), MetricsStoreError> {
        let write_error = |message: String| MetricsStoreError::WriteFailed {
            table: table.name.clone(),
            message,
        };

        let mut file = fs::File::create(self.table_path(&table.name))
            .map_err(|error| write_error(error.to_string()))?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut frame.clone())
            .map_err(|error| write_error(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcm_core::model::catalog::{self, daily_city_metrics_table};
    use std::io::Write;

    fn write_csv(path: &PathBuf, lines: &[&str]) {
        let mut file = fs::File::create(path).expect("create csv");
        for line in lines {
            writeln!(file, "{line}").expect("write csv line");
        }
    }

    #[test]
    fn create_table_is_header_only_and_loads_empty() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let store = CsvMetricsStore::new(dir.path().to_path_buf());
        let table = daily_city_metrics_table();

        assert!(!store.table_exists(&table.name).expect("exists check"));
        store.create_table(&table).expect("create table");
        assert!(store.table_exists(&table.name).expect("exists check"));

        let frame = store.load_table(&table).expect("load empty table");
        assert_eq!(frame.height(), 0);
        assert_eq!(frame.width(), table.columns.len());
    }

    #[test]
    fn loader_reports_missing_table() {
        let loader = CsvDataLoader::new(BTreeMap::new());
        let result = loader.load(&catalog::orders_table());
        assert!(matches!(
            result,
            Err(DataLoaderError::TableNotFound { .. })
        ));
    }

    #[test]
    fn pipeline_round_trips_through_csv_workspace() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let orders_path = dir.path().join("orders.csv");
        let weather_path = dir.path().join("weather.csv");
        let postal_path = dir.path().join("postal_codes.csv");
        let country_path = dir.path().join("country.csv");

        write_csv(
            &orders_path,
            &[
                "ORDER_TS_DATE,PRICE,PRIMARY_CITY,COUNTRY",
                "2023-01-01,10.0,Seattle,United States",
                "2023-01-01,20.0,Seattle,United States",
            ],
        );
        write_csv(
            &weather_path,
            &[
                "POSTAL_CODE,COUNTRY,DATE_VALID_STD,AVG_TEMPERATURE_AIR_2M_F,TOT_PRECIPITATION_IN,MAX_WIND_SPEED_100M_MPH",
                "98101,US,2023-01-01,50.0,0.1,12.0",
            ],
        );
        write_csv(
            &postal_path,
            &["POSTAL_CODE,COUNTRY,CITY_NAME", "98101,US,Seattle"],
        );
        write_csv(
            &country_path,
            &["ISO_COUNTRY,CITY,COUNTRY", "US,Seattle,United States"],
        );

        let mut sources = BTreeMap::new();
        sources.insert(catalog::ORDERS_STREAM.to_string(), orders_path);
        sources.insert(catalog::WEATHER_HISTORY_DAY.to_string(), weather_path);
        sources.insert(catalog::POSTAL_CODES.to_string(), postal_path);
        sources.insert(catalog::COUNTRY.to_string(), country_path);

        let loader = CsvDataLoader::new(sources);
        let store = CsvMetricsStore::new(dir.path().join("data"));

        let summary = dcm_core::run_daily_city_metrics(&loader, &store).expect("pipeline run");
        assert!(summary.created_destination);
        assert_eq!(summary.rows_staged, 1);
        assert_eq!(summary.rows_inserted, 1);
        assert_eq!(
            summary.status_message(),
            "Successfully processed DAILY_CITY_METRICS"
        );

        let table = daily_city_metrics_table();
        let frame = store.load_table(&table).expect("read back destination");
        assert_eq!(frame.height(), 1);
        let sales = frame
            .column("DAILY_SALES")
            .expect("sales column")
            .f64()
            .expect("sales f64");
        assert_eq!(sales.get(0), Some(30.0));

        // Second run updates in place, never duplicates the key.
        let summary = dcm_core::run_daily_city_metrics(&loader, &store).expect("second run");
        assert!(!summary.created_destination);
        assert_eq!(summary.rows_updated, 1);
        assert_eq!(summary.rows_inserted, 0);
        let frame = store.load_table(&table).expect("read back destination");
        assert_eq!(frame.height(), 1);
    }
}
