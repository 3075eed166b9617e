//! Macro-generated test suite for `WorksheetStore` contract validation.
//!
//! The `worksheet_store_tests!` macro generates a test module that validates
//! any `WorksheetStore` implementation against the row semantics the
//! repositories rely on: append order, header exclusion, first-match find
//! over every cell, in-place update, and index shifting on delete.
//!
//! # Generated Tests
//!
//! ## Listing and appending
//! - `test_list_empty_table` — a fresh table has no data rows
//! - `test_append_preserves_insertion_order` — rows list in append order
//! - `test_header_is_not_a_data_row` — header text never appears in rows
//!
//! ## Finding
//! - `test_find_returns_first_match` — duplicate key resolves to earliest row
//! - `test_find_matches_any_column` — a hit outside the key column counts
//! - `test_find_requires_full_cell_equality` — substrings do not match
//! - `test_find_missing_returns_none`
//!
//! ## Updating and deleting
//! - `test_update_replaces_only_target_row`
//! - `test_delete_shifts_later_indexes`
//! - `test_update_out_of_range_errors`
//! - `test_delete_out_of_range_errors`
//!
//! ## Tables
//! - `test_unknown_table_errors`
//! - `test_ensure_table_keeps_existing_rows`
//!
//! ## Concurrency
//! - `test_concurrent_appends` — parallel appends all land

/// Generate a full `WorksheetStore` conformance test suite.
///
/// `$factory` must be an expression evaluating to a fresh, empty store. It is
/// re-evaluated for each test for isolation. The concurrency test requires
/// the store to be `Clone + Send + 'static` (shared state via Arc pattern).
#[macro_export]
macro_rules! worksheet_store_tests {
    ($factory:expr) => {
        mod worksheet_store_contract_tests {
            use super::*;
            use washbook::storage::{StoreError, WorksheetStore};

            async fn fresh() -> impl WorksheetStore + Clone {
                let store = $factory;
                store.ensure_table(TEST_TABLE, &TEST_HEADER).await.unwrap();
                store
            }

            // ==================================================================
            // Listing and appending
            // ==================================================================

            #[tokio::test]
            async fn test_list_empty_table() {
                let store = fresh().await;
                let rows = store.list_rows(TEST_TABLE).await.unwrap();
                assert!(rows.is_empty(), "A fresh table should have no data rows");
            }

            #[tokio::test]
            async fn test_append_preserves_insertion_order() {
                let store = fresh().await;
                for r in numbered_rows(5) {
                    store.append_row(TEST_TABLE, r).await.unwrap();
                }

                let rows = store.list_rows(TEST_TABLE).await.unwrap();
                assert_count(&rows, 5);
                for (i, row) in rows.iter().enumerate() {
                    assert_eq!(row[0], format!("id-{i}"));
                }
            }

            #[tokio::test]
            async fn test_header_is_not_a_data_row() {
                let store = fresh().await;
                store
                    .append_row(TEST_TABLE, row(&["id-0", "name-0", "0"]))
                    .await
                    .unwrap();

                let rows = store.list_rows(TEST_TABLE).await.unwrap();
                assert_count(&rows, 1);
                // Header cells must not be findable as data
                assert_eq!(store.find_row(TEST_TABLE, "qty").await.unwrap(), None);
            }

            // ==================================================================
            // Finding
            // ==================================================================

            #[tokio::test]
            async fn test_find_returns_first_match() {
                let store = fresh().await;
                store
                    .append_row(TEST_TABLE, row(&["a", "x", "1"]))
                    .await
                    .unwrap();
                store
                    .append_row(TEST_TABLE, row(&["dup", "y", "2"]))
                    .await
                    .unwrap();
                store
                    .append_row(TEST_TABLE, row(&["dup", "z", "3"]))
                    .await
                    .unwrap();

                assert_eq!(store.find_row(TEST_TABLE, "dup").await.unwrap(), Some(1));
            }

            #[tokio::test]
            async fn test_find_matches_any_column() {
                let store = fresh().await;
                store
                    .append_row(TEST_TABLE, row(&["id-1", "000128", "5"]))
                    .await
                    .unwrap();

                // "000128" sits in the name column, not the id column; the
                // scan finds it anyway. Key collisions across columns are a
                // real hazard callers must account for.
                assert_eq!(
                    store.find_row(TEST_TABLE, "000128").await.unwrap(),
                    Some(0)
                );
            }

            #[tokio::test]
            async fn test_find_requires_full_cell_equality() {
                let store = fresh().await;
                store
                    .append_row(TEST_TABLE, row(&["id-123", "name", "1"]))
                    .await
                    .unwrap();

                assert_eq!(store.find_row(TEST_TABLE, "id-1").await.unwrap(), None);
                assert_eq!(store.find_row(TEST_TABLE, "123").await.unwrap(), None);
            }

            #[tokio::test]
            async fn test_find_missing_returns_none() {
                let store = fresh().await;
                assert_eq!(store.find_row(TEST_TABLE, "ghost").await.unwrap(), None);
            }

            // ==================================================================
            // Updating and deleting
            // ==================================================================

            #[tokio::test]
            async fn test_update_replaces_only_target_row() {
                let store = fresh().await;
                for r in numbered_rows(3) {
                    store.append_row(TEST_TABLE, r).await.unwrap();
                }

                store
                    .update_row(TEST_TABLE, 1, row(&["id-1", "renamed", "99"]))
                    .await
                    .unwrap();

                let rows = store.list_rows(TEST_TABLE).await.unwrap();
                assert_eq!(rows[0][1], "name-0");
                assert_eq!(rows[1][1], "renamed");
                assert_eq!(rows[2][1], "name-2");
            }

            #[tokio::test]
            async fn test_delete_shifts_later_indexes() {
                let store = fresh().await;
                for r in numbered_rows(3) {
                    store.append_row(TEST_TABLE, r).await.unwrap();
                }

                store.delete_row(TEST_TABLE, 0).await.unwrap();

                let rows = store.list_rows(TEST_TABLE).await.unwrap();
                assert_count(&rows, 2);
                assert_eq!(rows[0][0], "id-1");
                assert_eq!(store.find_row(TEST_TABLE, "id-2").await.unwrap(), Some(1));
            }

            #[tokio::test]
            async fn test_update_out_of_range_errors() {
                let store = fresh().await;
                let err = store
                    .update_row(TEST_TABLE, 7, row(&["a", "b", "c"]))
                    .await
                    .unwrap_err();
                assert!(matches!(err, StoreError::BadRowIndex { index: 7, .. }));
            }

            #[tokio::test]
            async fn test_delete_out_of_range_errors() {
                let store = fresh().await;
                let err = store.delete_row(TEST_TABLE, 0).await.unwrap_err();
                assert!(matches!(err, StoreError::BadRowIndex { .. }));
            }

            // ==================================================================
            // Tables
            // ==================================================================

            #[tokio::test]
            async fn test_unknown_table_errors() {
                let store = fresh().await;

                let err = store.list_rows("NoSuchTable").await.unwrap_err();
                assert!(matches!(err, StoreError::MissingTable { .. }));

                let err = store
                    .append_row("NoSuchTable", row(&["a"]))
                    .await
                    .unwrap_err();
                assert!(matches!(err, StoreError::MissingTable { .. }));

                let err = store.find_row("NoSuchTable", "a").await.unwrap_err();
                assert!(matches!(err, StoreError::MissingTable { .. }));
            }

            #[tokio::test]
            async fn test_ensure_table_keeps_existing_rows() {
                let store = fresh().await;
                store
                    .append_row(TEST_TABLE, row(&["id-0", "name-0", "0"]))
                    .await
                    .unwrap();

                store.ensure_table(TEST_TABLE, &TEST_HEADER).await.unwrap();

                let rows = store.list_rows(TEST_TABLE).await.unwrap();
                assert_count(&rows, 1);
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_appends() {
                let store = fresh().await;

                let mut handles = Vec::new();
                for i in 0..10 {
                    let store = store.clone();
                    handles.push(tokio::spawn(async move {
                        store
                            .append_row(TEST_TABLE, row(&[&format!("id-{i}"), "n", "1"]))
                            .await
                            .unwrap();
                    }));
                }
                for handle in handles {
                    handle.await.unwrap();
                }

                let rows = store.list_rows(TEST_TABLE).await.unwrap();
                assert_count(&rows, 10);
            }
        }
    };
}
