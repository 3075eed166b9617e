//! The fixed laundry item catalog
//!
//! The 21 item names below are a wire contract: they are the invoice
//! table's quantity column headers and the labels on the printed delivery
//! slip, in this exact order. Quantities are keyed by item *name*
//! everywhere inside the crate; the catalog-ordered cell layout exists
//! only at the store read/write boundary, so a future catalog change
//! cannot silently shift quantities between items.

use crate::core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Item names in wire (column) order, as printed on the delivery slip
pub const ITEMS: [&str; 21] = [
    "Áo gối",
    "Áo choàng",
    "Bọc lớn",
    "Bọc nhỏ",
    "Bảo vệ nệm",
    "Bọc mền",
    "Drap lớn",
    "Drap nhỏ",
    "Drap thun",
    "Khăn hồ bơi",
    "Khăn tắm lớn trắng",
    "Khăn tay",
    "Khăn mặt",
    "Khăn Welcome",
    "Khăn bàn",
    "Mền",
    "Thảm chân",
    "Tấm trang trí",
    "Rèm cửa",
    "Mùng",
    "Gối ghế",
];

/// Number of quantity columns in an invoice row
pub const ITEM_COUNT: usize = ITEMS.len();

/// Position of an item name in the wire order
pub fn item_index(name: &str) -> Option<usize> {
    ITEMS.iter().position(|item| *item == name)
}

/// Whether a name belongs to the catalog
pub fn is_catalog_item(name: &str) -> bool {
    item_index(name).is_some()
}

/// Per-item quantities for one invoice, keyed by catalog name.
///
/// Only nonzero quantities are held; every catalog item not present reads
/// as zero. Two values compare equal exactly when all 21 quantities match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemQuantities {
    quantities: BTreeMap<String, u32>,
}

impl ItemQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity for a catalog item; zero when unset or unknown
    pub fn qty(&self, name: &str) -> u32 {
        self.quantities.get(name).copied().unwrap_or(0)
    }

    /// Set the quantity for a catalog item.
    ///
    /// Rejects names outside the catalog so a typo cannot create a
    /// quantity that would never reach the store.
    pub fn set_qty(&mut self, name: &str, qty: u32) -> Result<()> {
        if !is_catalog_item(name) {
            return Err(Error::Validation {
                field: "items",
                reason: format!("'{name}' is not a catalog item"),
            });
        }
        if qty == 0 {
            self.quantities.remove(name);
        } else {
            self.quantities.insert(name.to_string(), qty);
        }
        Ok(())
    }

    /// Items with a nonzero quantity, in catalog order
    pub fn nonzero(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        ITEMS
            .iter()
            .filter_map(|item| match self.qty(item) {
                0 => None,
                qty => Some((*item, qty)),
            })
    }

    /// Sum of all quantities on the slip
    pub fn total_pieces(&self) -> u32 {
        self.quantities.values().sum()
    }

    /// The 21 quantity cells in wire order, for the store-write boundary
    pub fn to_cells(&self) -> Vec<String> {
        ITEMS.iter().map(|item| self.qty(item).to_string()).collect()
    }

    /// Rebuild from the 21 wire-order cells.
    ///
    /// Cell count must match the catalog exactly; a blank or unparseable
    /// cell reads as zero (foreign edits to the sheet must not take the
    /// whole record down).
    pub fn from_cells(cells: &[String]) -> Result<Self> {
        if cells.len() != ITEM_COUNT {
            return Err(Error::MalformedRow {
                reason: format!(
                    "expected {ITEM_COUNT} quantity cells, found {}",
                    cells.len()
                ),
            });
        }
        let mut items = Self::new();
        for (item, cell) in ITEMS.iter().zip(cells) {
            let qty = cell.trim().parse::<u32>().unwrap_or(0);
            if qty > 0 {
                items.quantities.insert((*item).to_string(), qty);
            }
        }
        Ok(items)
    }
}
