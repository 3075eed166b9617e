//! CSV export of invoice listings
//!
//! Output is bytes, not text: the file starts with a UTF-8 byte order mark
//! so desktop spreadsheet apps decode the Vietnamese headers correctly
//! instead of falling back to a legacy codepage.

use crate::core::Invoice;
use crate::schema;

/// Marks the file as UTF-8 for spreadsheet apps
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn csv_line(cells: impl IntoIterator<Item = String>) -> String {
    cells
        .into_iter()
        .map(|cell| csv_escape(&cell))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render invoices as a downloadable CSV file
///
/// The column layout is exactly the worksheet header, so the export can be
/// re-imported or diffed against the sheet.
pub fn export_csv(invoices: &[Invoice]) -> Vec<u8> {
    let mut out = Vec::with_capacity(64 * (invoices.len() + 1));
    out.extend_from_slice(UTF8_BOM);

    let header = csv_line(schema::invoice_header().iter().map(|c| c.to_string()));
    out.extend_from_slice(header.as_bytes());
    out.push(b'\n');

    for invoice in invoices {
        let line = csv_line(invoice.to_row());
        out.extend_from_slice(line.as_bytes());
        out.push(b'\n');
    }

    out
}
