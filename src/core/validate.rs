//! Reusable field checks shared by the record types and repositories

use crate::core::error::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Reject empty or whitespace-only text
pub fn require_non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Reject negative or non-finite weights
///
/// Zero is allowed: a slip can be recorded before weighing.
pub fn require_weight(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::Validation {
            field,
            reason: format!("must be a finite number, got {value}"),
        });
    }
    if value < 0.0 {
        return Err(Error::Validation {
            field,
            reason: format!("must not be negative, got {value}"),
        });
    }
    Ok(())
}

/// Whether text follows the zero-padded numeric receipt convention
///
/// Advisory only. Receipts imported from the paper books sometimes carry
/// suffixes, so repositories log a warning instead of rejecting.
pub fn is_receipt_no_like(text: &str) -> bool {
    static RECEIPT_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = RECEIPT_REGEX.get_or_init(|| Regex::new(r"^\d{4,}$").unwrap());
    regex.is_match(text)
}
