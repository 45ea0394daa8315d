use std::cell::RefCell;
use std::collections::HashMap;

use dcm_core::model::TableRef;
use dcm_core::{DataLoader, DataLoaderError, MetricsStore, MetricsStoreError};
use polars::prelude::{DataFrame, IntoLazy, LazyFrame};

/// In-memory data loader for test scenarios.
#[derive(Clone, Default)]
pub struct InMemoryDataLoader {
    tables: HashMap<String, DataFrame>,
}

impl InMemoryDataLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, name: &str, frame: DataFrame) -> Self {
        self.tables.insert(name.to_string(), frame);
        self
    }
}

impl DataLoader for InMemoryDataLoader {
    fn load(&self, table: &TableRef) -> Result<LazyFrame, DataLoaderError> {
        self.tables
            .get(&table.name)
            .cloned()
            .map(IntoLazy::lazy)
            .ok_or_else(|| DataLoaderError::TableNotFound {
                table: table.name.clone(),
            })
    }
}

/// In-memory destination store for test scenarios.
#[derive(Default)]
pub struct InMemoryMetricsStore {
    tables: RefCell<HashMap<String, DataFrame>>,
}

impl InMemoryMetricsStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn with_table(self, name: &str, frame: DataFrame) -> Self {
        self.tables.borrow_mut().insert(name.to_string(), frame);
        self
    }

    #[allow(dead_code)]
    pub fn table(&self, name: &str) -> Option<DataFrame> {
        self.tables.borrow().get(name).cloned()
    }
}

impl MetricsStore for InMemoryMetricsStore {
    fn table_exists(&self, name: &str) -> Result<bool, MetricsStoreError> {
        Ok(self.tables.borrow().contains_key(name))
    }

    fn create_table(&self, table: &TableRef) -> Result<(), MetricsStoreError> {
        let frame = table
            .empty_frame()
            .map_err(|error| MetricsStoreError::CreateFailed {
                table: table.name.clone(),
                message: error.to_string(),
            })?;
        self.tables.borrow_mut().insert(table.name.clone(), frame);
        Ok(())
    }

    fn load_table(&self, table: &TableRef) -> Result<DataFrame, MetricsStoreError> {
        self.tables
            .borrow()
            .get(&table.name)
            .cloned()
            .ok_or_else(|| MetricsStoreError::TableNotFound {
                table: table.name.clone(),
            })
    }

    fn save_table(&self, table: &TableRef, frame: &DataFrame) -> Result<(), MetricsStoreError> {
        self.tables
            .borrow_mut()
            .insert(table.name.clone(), frame.clone());
        Ok(())
    }
}
