//! Storage implementations for different worksheet backends
//!
//! Everything above this layer speaks in rows of text cells. A table is an
//! ordered list of data rows under a fixed header row; the header is managed
//! by [`WorksheetStore::ensure_table`] and never returned or counted by the
//! row operations. Row indexes are 0-based positions within the data rows,
//! so deleting a row shifts every later index down by one.

use async_trait::async_trait;
use thiserror::Error;

#[cfg(feature = "in-memory")]
pub mod in_memory;

#[cfg(feature = "in-memory")]
pub use in_memory::InMemoryStore;

/// A single worksheet row, one string per cell
pub type Row = Vec<String>;

/// 0-based position of a data row within its table
pub type RowIndex = usize;

/// Failures raised by a worksheet backend
///
/// These are infrastructure faults, not domain outcomes. A missing invoice is
/// not a `StoreError`; an unreachable spreadsheet is.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend cannot be reached at all
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    /// The named table does not exist in the store
    #[error("no such table '{table}'")]
    MissingTable { table: String },

    /// A row index fell outside the table's current data rows
    #[error("row index {index} out of range for table '{table}' with {len} rows")]
    BadRowIndex {
        table: String,
        index: RowIndex,
        len: usize,
    },

    /// Any other backend-specific failure
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Service trait for row-level access to a worksheet-style store
///
/// Implementations provide append/find/update/delete over tables of text
/// rows. The domain layer is agnostic to the actual backend; the same
/// repositories run against the in-memory store and a remote spreadsheet.
#[async_trait]
pub trait WorksheetStore: Send + Sync {
    /// Create the table with the given header row if it does not exist
    ///
    /// Existing tables are left untouched, including their header.
    async fn ensure_table(&self, table: &str, header: &[&str]) -> Result<(), StoreError>;

    /// List all data rows in table order, header excluded
    async fn list_rows(&self, table: &str) -> Result<Vec<Row>, StoreError>;

    /// Append a row after the current last data row
    async fn append_row(&self, table: &str, row: Row) -> Result<(), StoreError>;

    /// Locate the first data row containing a cell whose entire text equals
    /// `key_text`
    ///
    /// The scan is row-major over every cell, so a match in any column
    /// counts. Callers that need a match in a specific column must verify
    /// the hit themselves or scan [`list_rows`](Self::list_rows) instead.
    async fn find_row(&self, table: &str, key_text: &str)
    -> Result<Option<RowIndex>, StoreError>;

    /// Replace the data row at `index` with `row`
    async fn update_row(&self, table: &str, index: RowIndex, row: Row) -> Result<(), StoreError>;

    /// Remove the data row at `index`, shifting later rows down by one
    async fn delete_row(&self, table: &str, index: RowIndex) -> Result<(), StoreError>;
}
