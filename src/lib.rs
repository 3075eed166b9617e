//! # Washbook
//!
//! Delivery-invoice ledger and reporting core for a small laundry service,
//! backed by a worksheet-style tabular store.
//!
//! ## Features
//!
//! - **Worksheet Store Abstraction**: append/find/update/delete over rows of text cells
//! - **Keyed Repositories**: invoices by receipt number, accounts by username
//! - **Sessions and Roles**: admin, staff and customer access through one policy gate
//! - **Item Catalog**: fixed 21-item laundry catalog with name-keyed quantities
//! - **Date-Range Reports**: invoice count and weight totals, CSV export with BOM
//! - **Delivery Slips**: printable projection listing only delivered items
//! - **Configuration-Based**: spreadsheet and table names via YAML configuration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use washbook::prelude::*;
//!
//! let store = Arc::new(InMemoryStore::new());
//! let app = Washbook::connect(store, WashbookConfig::default()).await?;
//!
//! let session = app.login("alice", "secret").await?;
//!
//! let mut invoice = Invoice::new(
//!     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
//!     "000128",
//!     "Potique",
//! );
//! invoice.total_weight_kg = 12.5;
//! invoice.items.set_qty("Drap lớn", 3)?;
//!
//! app.submit_invoice(&session, &invoice).await?;
//!
//! let today = DateRange::single_day(invoice.date);
//! let summary = app.report(&session, &today).await?;
//! println!("{} invoices, {} kg", summary.count, summary.total_weight_kg);
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod render;
pub mod report;
pub mod repository;
pub mod schema;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Domain ===
    pub use crate::core::{
        AccessPolicy, Credential, Error, Invoice, ItemQuantities, Result, Role, Session, User,
        catalog::ITEMS,
    };

    // === App ===
    pub use crate::app::Washbook;

    // === Reports and rendering ===
    pub use crate::render::DeliverySlip;
    pub use crate::report::{DateRange, ReportSummary, aggregate, export_csv};

    // === Storage ===
    pub use crate::storage::{Row, RowIndex, StoreError, WorksheetStore};
    #[cfg(feature = "in-memory")]
    pub use crate::storage::InMemoryStore;

    // === Config ===
    pub use crate::config::{StoreConfig, WashbookConfig};

    // === External dependencies ===
    pub use anyhow::anyhow;
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use std::sync::Arc;
    pub use uuid::Uuid;
}
