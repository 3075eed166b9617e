//! Invoice repository keyed by receipt number

use crate::core::error::{Error, Result};
use crate::core::{Invoice, validate};
use crate::report::DateRange;
use crate::repository::KeyIndex;
use crate::storage::{Row, WorksheetStore};
use std::sync::Arc;

/// Column holding the receipt number ("Số phiếu")
const KEY_COLUMN: usize = 1;

/// CRUD over the invoice table, addressed by receipt number
///
/// Each call reads the table fresh and resolves the receipt number through a
/// [`KeyIndex`], so a receipt that appears twice always resolves to its
/// earliest row. The repository never creates such duplicates itself; they
/// can only enter through direct edits to the sheet, and every operation
/// logs a warning while they persist.
pub struct InvoiceRepository<S> {
    store: Arc<S>,
    table: String,
}

impl<S: WorksheetStore> InvoiceRepository<S> {
    /// Repository over `table` in `store`
    pub fn new(store: Arc<S>, table: impl Into<String>) -> Self {
        Self {
            store,
            table: table.into(),
        }
    }

    /// Table this repository reads and writes
    pub fn table(&self) -> &str {
        &self.table
    }

    async fn fetch(&self) -> Result<Vec<Row>> {
        Ok(self.store.list_rows(&self.table).await?)
    }

    fn index(&self, rows: &[Row]) -> KeyIndex {
        let index = KeyIndex::build(rows, KEY_COLUMN);
        if !index.duplicates().is_empty() {
            tracing::warn!(
                table = %self.table,
                keys = ?index.duplicates(),
                "duplicate receipt numbers in table, earliest row wins"
            );
        }
        index
    }

    /// Append a new invoice
    ///
    /// The receipt number must not already be in the table. Receipts outside
    /// the usual zero-padded convention are accepted with a warning.
    pub async fn create(&self, invoice: &Invoice) -> Result<()> {
        invoice.validate()?;
        if !validate::is_receipt_no_like(&invoice.receipt_no) {
            tracing::warn!(
                receipt_no = %invoice.receipt_no,
                "receipt number outside the zero-padded convention"
            );
        }

        let rows = self.fetch().await?;
        if self.index(&rows).contains(&invoice.receipt_no) {
            return Err(Error::Validation {
                field: "receipt_no",
                reason: format!("receipt '{}' already exists", invoice.receipt_no),
            });
        }

        self.store.append_row(&self.table, invoice.to_row()).await?;
        tracing::info!(receipt_no = %invoice.receipt_no, "invoice created");
        Ok(())
    }

    /// Decode the invoice stored under `receipt_no`
    pub async fn find(&self, receipt_no: &str) -> Result<Invoice> {
        validate::require_non_empty("receipt_no", receipt_no)?;

        let rows = self.fetch().await?;
        let position = self
            .index(&rows)
            .first(receipt_no)
            .ok_or_else(|| Error::NotFound {
                entity: "invoice",
                key: receipt_no.to_string(),
            })?;
        tracing::debug!(receipt_no = %receipt_no, row = position, "invoice located");

        Invoice::from_row(&rows[position])
    }

    /// Replace the invoice stored under `receipt_no` with `invoice`
    ///
    /// The replacement may carry a different receipt number, which renames
    /// the invoice; renaming onto a receipt that is already taken is
    /// rejected the same way a duplicate create is.
    pub async fn update(&self, receipt_no: &str, invoice: &Invoice) -> Result<()> {
        validate::require_non_empty("receipt_no", receipt_no)?;
        invoice.validate()?;

        let rows = self.fetch().await?;
        let index = self.index(&rows);
        let position = index.first(receipt_no).ok_or_else(|| Error::NotFound {
            entity: "invoice",
            key: receipt_no.to_string(),
        })?;

        if invoice.receipt_no != receipt_no && index.contains(&invoice.receipt_no) {
            return Err(Error::Validation {
                field: "receipt_no",
                reason: format!("receipt '{}' already exists", invoice.receipt_no),
            });
        }

        self.store
            .update_row(&self.table, position, invoice.to_row())
            .await?;
        tracing::info!(receipt_no = %invoice.receipt_no, "invoice updated");
        Ok(())
    }

    /// Remove the invoice stored under `receipt_no`
    pub async fn delete(&self, receipt_no: &str) -> Result<()> {
        validate::require_non_empty("receipt_no", receipt_no)?;

        let rows = self.fetch().await?;
        let position = self
            .index(&rows)
            .first(receipt_no)
            .ok_or_else(|| Error::NotFound {
                entity: "invoice",
                key: receipt_no.to_string(),
            })?;

        self.store.delete_row(&self.table, position).await?;
        tracing::info!(receipt_no = %receipt_no, "invoice deleted");
        Ok(())
    }

    /// Decode every invoice, optionally keeping only a date span
    ///
    /// Rows that fail to decode are logged with their position and skipped;
    /// one hand-mangled row must not take down the whole ledger view.
    pub async fn list(&self, range: Option<&DateRange>) -> Result<Vec<Invoice>> {
        let rows = self.fetch().await?;
        let mut invoices = Vec::with_capacity(rows.len());

        for (position, row) in rows.iter().enumerate() {
            match Invoice::from_row(row) {
                Ok(invoice) => {
                    if range.is_none_or(|r| r.contains(invoice.date)) {
                        invoices.push(invoice);
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        table = %self.table,
                        position,
                        error = %e,
                        "skipping malformed invoice row"
                    );
                }
            }
        }

        Ok(invoices)
    }
}
