//! Core module containing the domain records and rules of the ledger

pub mod catalog;
pub mod error;
pub mod invoice;
pub mod session;
pub mod user;
pub mod validate;

pub use catalog::{ITEMS, ItemQuantities};
pub use error::{Error, Result};
pub use invoice::Invoice;
pub use session::{AccessPolicy, Session};
pub use user::{Credential, Role, User};
