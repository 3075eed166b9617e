//! Keyed repositories over the worksheet store
//!
//! The store only knows rows and positions; these repositories add the
//! entity keys. Every operation fetches the current rows, rebuilds a
//! [`KeyIndex`] over the key column, and resolves the key to a row position
//! before acting. Nothing is cached between operations, so concurrent edits
//! to the sheet are picked up on the next call at the cost of one full read
//! per operation.

use crate::storage::{Row, RowIndex};
use std::collections::HashMap;

pub mod invoices;
pub mod users;

pub use invoices::InvoiceRepository;
pub use users::UserRepository;

/// Position index over the key column of a fetched row set
///
/// When the same key appears in several rows, the earliest row wins and the
/// key is reported by [`duplicates`](Self::duplicates). That mirrors what a
/// person scanning the sheet top to bottom would find, and keeps lookups
/// deterministic even on dirty data.
#[derive(Debug)]
pub struct KeyIndex {
    first: HashMap<String, RowIndex>,
    duplicates: Vec<String>,
}

impl KeyIndex {
    /// Build an index from rows, keying on `key_column`
    ///
    /// Rows too short to have the key column and rows with an empty key are
    /// left out; they can never be addressed by key.
    pub fn build(rows: &[Row], key_column: usize) -> Self {
        let mut first: HashMap<String, RowIndex> = HashMap::new();
        let mut duplicates = Vec::new();

        for (position, row) in rows.iter().enumerate() {
            let Some(key) = row.get(key_column) else {
                continue;
            };
            if key.is_empty() {
                continue;
            }
            if first.contains_key(key) {
                if !duplicates.contains(key) {
                    duplicates.push(key.clone());
                }
            } else {
                first.insert(key.clone(), position);
            }
        }

        Self { first, duplicates }
    }

    /// Row position of the earliest row carrying `key`
    pub fn first(&self, key: &str) -> Option<RowIndex> {
        self.first.get(key).copied()
    }

    /// Whether any row carries `key`
    pub fn contains(&self, key: &str) -> bool {
        self.first.contains_key(key)
    }

    /// Keys that appear in more than one row, in order of second sighting
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }
}
