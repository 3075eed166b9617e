//! Printable projection of an invoice
//!
//! A stored invoice carries a quantity cell for all 21 catalog items, most
//! of them zero. The delivery slip handed to the customer lists only what
//! actually went out, numbered from 1, in catalog order.

use crate::core::Invoice;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// One printed line of the slip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlipLine {
    /// Running number starting at 1
    pub index: usize,
    /// Catalog item name
    pub item: &'static str,
    /// Pieces delivered
    pub quantity: u32,
}

/// A delivery slip ready for printing
#[derive(Debug, Clone, Serialize)]
pub struct DeliverySlip {
    pub date: NaiveDate,
    pub receipt_no: String,
    pub customer: String,
    pub address: String,
    pub note: String,
    pub total_weight_kg: f64,
    pub lines: Vec<SlipLine>,
}

impl DeliverySlip {
    /// Project an invoice onto its printable form
    pub fn from_invoice(invoice: &Invoice) -> Self {
        let lines = invoice
            .items
            .nonzero()
            .enumerate()
            .map(|(i, (item, quantity))| SlipLine {
                index: i + 1,
                item,
                quantity,
            })
            .collect();

        Self {
            date: invoice.date,
            receipt_no: invoice.receipt_no.clone(),
            customer: invoice.customer.clone(),
            address: invoice.address.clone(),
            note: invoice.note.clone(),
            total_weight_kg: invoice.total_weight_kg,
            lines,
        }
    }

    /// Total pieces across all lines
    pub fn total_pieces(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

impl fmt::Display for DeliverySlip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PHIẾU GIAO HÀNG")?;
        writeln!(f, "Số phiếu: {}    Ngày: {}", self.receipt_no, self.date)?;
        writeln!(f, "Khách hàng: {}", self.customer)?;
        if !self.address.is_empty() {
            writeln!(f, "Địa chỉ: {}", self.address)?;
        }
        writeln!(f, "---")?;
        for line in &self.lines {
            writeln!(f, "{:>2}. {} x{}", line.index, line.item, line.quantity)?;
        }
        writeln!(f, "---")?;
        writeln!(f, "Tổng Kg: {}", self.total_weight_kg)?;
        if !self.note.is_empty() {
            writeln!(f, "Ghi chú: {}", self.note)?;
        }
        Ok(())
    }
}
