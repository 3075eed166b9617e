//! In-memory implementation of WorksheetStore for testing and development

use crate::storage::{Row, RowIndex, StoreError, WorksheetStore};
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct TableData {
    header: Row,
    rows: Vec<Row>,
}

/// In-memory worksheet store
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<HashMap<String, TableData>>>,
}

impl InMemoryStore {
    /// Create a new in-memory store with no tables
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Header recorded for `table` when it was created, or `None` if the
    /// table does not exist
    pub fn header(&self, table: &str) -> Result<Option<Row>, StoreError> {
        let tables = self
            .tables
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(tables.get(table).map(|data| data.header.clone()))
    }
}

#[async_trait]
impl WorksheetStore for InMemoryStore {
    async fn ensure_table(&self, table: &str, header: &[&str]) -> Result<(), StoreError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        tables.entry(table.to_string()).or_insert_with(|| TableData {
            header: header.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        });

        Ok(())
    }

    async fn list_rows(&self, table: &str) -> Result<Vec<Row>, StoreError> {
        let tables = self
            .tables
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let data = tables.get(table).ok_or_else(|| StoreError::MissingTable {
            table: table.to_string(),
        })?;

        Ok(data.rows.clone())
    }

    async fn append_row(&self, table: &str, row: Row) -> Result<(), StoreError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let data = tables
            .get_mut(table)
            .ok_or_else(|| StoreError::MissingTable {
                table: table.to_string(),
            })?;

        data.rows.push(row);

        Ok(())
    }

    async fn find_row(
        &self,
        table: &str,
        key_text: &str,
    ) -> Result<Option<RowIndex>, StoreError> {
        let tables = self
            .tables
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let data = tables.get(table).ok_or_else(|| StoreError::MissingTable {
            table: table.to_string(),
        })?;

        Ok(data
            .rows
            .iter()
            .position(|row| row.iter().any(|cell| cell == key_text)))
    }

    async fn update_row(&self, table: &str, index: RowIndex, row: Row) -> Result<(), StoreError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let data = tables
            .get_mut(table)
            .ok_or_else(|| StoreError::MissingTable {
                table: table.to_string(),
            })?;

        let len = data.rows.len();
        let slot = data
            .rows
            .get_mut(index)
            .ok_or_else(|| StoreError::BadRowIndex {
                table: table.to_string(),
                index,
                len,
            })?;

        *slot = row;

        Ok(())
    }

    async fn delete_row(&self, table: &str, index: RowIndex) -> Result<(), StoreError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let data = tables
            .get_mut(table)
            .ok_or_else(|| StoreError::MissingTable {
                table: table.to_string(),
            })?;

        if index >= data.rows.len() {
            return Err(StoreError::BadRowIndex {
                table: table.to_string(),
                index,
                len: data.rows.len(),
            });
        }

        data.rows.remove(index);

        Ok(())
    }
}
