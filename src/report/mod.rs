//! Delivery reports over a span of dates
//!
//! Reporting is a pure fold over invoices already fetched from the store.
//! Callers pick the span, the repository hands over the invoices, and
//! [`aggregate`] reduces them. Keeping this layer free of store access means
//! a report is always computed from one consistent snapshot.

use crate::core::Invoice;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod export;

pub use export::export_csv;

/// An inclusive span of delivery dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Span from `start` through `end`, both included
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Span covering exactly one day
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Span covering one calendar month
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some(Self {
            start,
            end: next_month.pred_opt()?,
        })
    }

    /// Whether `date` falls inside the span
    ///
    /// A span whose start is after its end contains nothing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Totals over the invoices of one span
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportSummary {
    /// Number of invoices in the span
    pub count: usize,
    /// Sum of their weighed totals in kilograms
    pub total_weight_kg: f64,
}

/// Reduce invoices falling inside `range` to their totals
pub fn aggregate(invoices: &[Invoice], range: &DateRange) -> ReportSummary {
    let mut summary = ReportSummary {
        count: 0,
        total_weight_kg: 0.0,
    };
    for invoice in invoices.iter().filter(|i| range.contains(i.date)) {
        summary.count += 1;
        summary.total_weight_kg += invoice.total_weight_kg;
    }
    summary
}
