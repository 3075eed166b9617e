//! Delivery invoices
//!
//! One invoice is one delivery slip: who it was for, when, the weighed
//! total, and how many of each catalog item went out. On the wire it is a
//! single row of [`schema::INVOICE_ROW_WIDTH`] text cells.

use crate::core::catalog::ItemQuantities;
use crate::core::error::{Error, Result};
use crate::core::validate;
use crate::schema;
use crate::storage::Row;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A delivery invoice, keyed by receipt number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Delivery date
    pub date: NaiveDate,
    /// Receipt number from the paper book, the row's lookup key
    pub receipt_no: String,
    /// Customer name as written on the slip
    pub customer: String,
    /// Delivery address
    pub address: String,
    /// Free-form note
    pub note: String,
    /// Weighed total in kilograms
    pub total_weight_kg: f64,
    /// Piece counts per catalog item
    pub items: ItemQuantities,
}

impl Invoice {
    /// Start an invoice with the identifying fields; the rest default empty
    pub fn new(date: NaiveDate, receipt_no: impl Into<String>, customer: impl Into<String>) -> Self {
        Self {
            date,
            receipt_no: receipt_no.into(),
            customer: customer.into(),
            address: String::new(),
            note: String::new(),
            total_weight_kg: 0.0,
            items: ItemQuantities::new(),
        }
    }

    /// Check the fields a stored invoice must carry
    pub fn validate(&self) -> Result<()> {
        validate::require_non_empty("receipt_no", &self.receipt_no)?;
        validate::require_non_empty("customer", &self.customer)?;
        validate::require_weight("total_weight_kg", self.total_weight_kg)?;
        Ok(())
    }

    /// Serialize to a wire row in header order
    pub fn to_row(&self) -> Row {
        let mut row = Vec::with_capacity(schema::INVOICE_ROW_WIDTH);
        row.push(self.date.format(schema::DATE_FORMAT).to_string());
        row.push(self.receipt_no.clone());
        row.push(self.customer.clone());
        row.push(self.address.clone());
        row.push(self.note.clone());
        row.push(self.total_weight_kg.to_string());
        row.extend(self.items.to_cells());
        row
    }

    /// Decode a wire row
    ///
    /// Width and date are strict; a row that fails either cannot be trusted
    /// at all. The weight and quantity cells are lenient and read as zero
    /// when unparseable, matching how hand-edited sheets degrade. A weight
    /// outside the non-negative finite range also reads as zero.
    pub fn from_row(row: &Row) -> Result<Self> {
        if row.len() != schema::INVOICE_ROW_WIDTH {
            return Err(Error::MalformedRow {
                reason: format!(
                    "invoice row has {} cells, expected {}",
                    row.len(),
                    schema::INVOICE_ROW_WIDTH
                ),
            });
        }
        let date = NaiveDate::parse_from_str(row[0].trim(), schema::DATE_FORMAT).map_err(|e| {
            Error::MalformedRow {
                reason: format!("bad date '{}': {}", row[0], e),
            }
        })?;
        let total_weight_kg = row[5]
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite() && *w >= 0.0)
            .unwrap_or(0.0);
        let items = ItemQuantities::from_cells(&row[6..])?;
        Ok(Self {
            date,
            receipt_no: row[1].clone(),
            customer: row[2].clone(),
            address: row[3].clone(),
            note: row[4].clone(),
            total_weight_kg,
            items,
        })
    }
}
