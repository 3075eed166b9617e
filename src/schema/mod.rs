//! Wire contract with the backing worksheet
//!
//! Column order is bit-exact shared state with every other client of the
//! spreadsheet, including people editing it by hand. Nothing outside this
//! module and the record codecs in [`core`](crate::core) may assume cell
//! positions.
//!
//! The invoice headers are the sheet's original Vietnamese column titles;
//! renaming them here would orphan every existing row.

use crate::core::catalog;

/// Name of the user account table
pub const USERS_TABLE: &str = "Users";

/// Name of the invoice table
pub const INVOICES_TABLE: &str = "Sheet1";

/// User row layout: `[username, password, role, full_name, address]`
pub const USER_COLUMNS: [&str; 5] = ["username", "password", "role", "full_name", "address"];

/// Width of a serialized user row
pub const USER_ROW_WIDTH: usize = USER_COLUMNS.len();

/// The six invoice columns that precede the per-item quantities
pub const INVOICE_HEAD_COLUMNS: [&str; 6] =
    ["Ngày", "Số phiếu", "Khách hàng", "Địa chỉ", "Ghi chú", "Tổng Kg"];

/// Width of a serialized invoice row: head columns plus one quantity per
/// catalog item
pub const INVOICE_ROW_WIDTH: usize = INVOICE_HEAD_COLUMNS.len() + catalog::ITEM_COUNT;

/// Wire format for the invoice date column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Full invoice header row in wire order
pub fn invoice_header() -> Vec<&'static str> {
    INVOICE_HEAD_COLUMNS
        .iter()
        .chain(catalog::ITEMS.iter())
        .copied()
        .collect()
}

/// Full user header row in wire order
pub fn user_header() -> Vec<&'static str> {
    USER_COLUMNS.to_vec()
}
