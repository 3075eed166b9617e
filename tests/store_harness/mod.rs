//! Shared test harness for worksheet store backends
//!
//! Provides row builders plus the `worksheet_store_tests!` macro, which
//! generates a conformance suite any `WorksheetStore` implementation must
//! pass.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! mod store_harness;
//! use store_harness::*;
//!
//! worksheet_store_tests!(InMemoryStore::new());
//! ```

#![allow(dead_code)]

mod worksheet_store_tests;

use washbook::storage::Row;

/// Table name every generated test works against
pub const TEST_TABLE: &str = "Rows";

/// Header used when the generated tests create `TEST_TABLE`
pub const TEST_HEADER: [&str; 3] = ["id", "name", "qty"];

/// Build a row from string literals
pub fn row(cells: &[&str]) -> Row {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Build `n` distinct three-cell rows: `["id-0", "name-0", "0"]`, ...
pub fn numbered_rows(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| row(&[&format!("id-{i}"), &format!("name-{i}"), &i.to_string()]))
        .collect()
}

/// Assert that a list holds exactly `expected` entries
pub fn assert_count<T>(list: &[T], expected: usize) {
    assert_eq!(
        list.len(),
        expected,
        "Expected {} rows, got {}",
        expected,
        list.len()
    );
}
