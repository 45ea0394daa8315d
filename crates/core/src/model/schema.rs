use polars::prelude::{Column, DataFrame, DataType, PolarsResult, Series};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    String,
    Integer,
    Decimal,
    Boolean,
    Date,
    Timestamp,
}

impl ColumnType {
    /// Physical dtype used when materializing frames for this column.
    ///
    /// Dates and timestamps travel as ISO-8601 strings; the pipeline only
    /// needs equality on them, never calendar arithmetic.
    pub fn physical_dtype(&self) -> DataType {
        match self {
            ColumnType::String | ColumnType::Date | ColumnType::Timestamp => DataType::String,
            ColumnType::Integer => DataType::Int64,
            ColumnType::Decimal => DataType::Float64,
            ColumnType::Boolean => DataType::Boolean,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default)]
    pub nullable: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableRef {
    pub name: String,
    pub columns: Vec<ColumnDef>,
}

impl TableRef {
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|column| column.name.clone()).collect()
    }

    /// Build a zero-row frame carrying this table's declared columns.
    pub fn empty_frame(&self) -> PolarsResult<DataFrame> {
        let columns = self
            .columns
            .iter()
            .map(|column| {
                Series::new_empty(
                    column.name.as_str().into(),
                    &column.column_type.physical_dtype(),
                )
                .into()
            })
            .collect::<Vec<Column>>();
        DataFrame::new(columns)
    }
}
