//! Typed error handling for washbook
//!
//! Every failure a repository or the app facade can surface to the acting
//! user is one of the variants below, so the UI collaborator can match on
//! the kind instead of string-scraping. Nothing here is fatal to the
//! process: the actor sees the message, stays logged in, and may retry by
//! hand. The one exception is a store failure during [`connect`]: no later
//! operation can succeed, so the caller is expected to stop.
//!
//! Duplicate lookup keys are deliberately *not* an error kind. They remain
//! a documented risk, observable through
//! [`KeyIndex::duplicates`](crate::repository::KeyIndex::duplicates);
//! lookups resolve to the first-matching row instead of failing.
//!
//! [`connect`]: crate::app::Washbook::connect

use crate::core::user::Role;
use crate::storage::StoreError;
use thiserror::Error;

/// A specialized Result type for washbook operations
///
/// The error parameter defaults to [`Error`] but stays overridable, so the
/// alias can sit in the prelude without shadowing two-argument results.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The error type surfaced by repositories and the app facade
#[derive(Debug, Error)]
pub enum Error {
    /// A submitted field failed validation (missing or rejected value)
    #[error("validation failed for '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// The update/delete target key is absent from the store
    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },

    /// Login credential mismatch
    #[error("invalid username or password")]
    Unauthenticated,

    /// The session's role does not permit the attempted operation
    #[error("{role} role may not {action}")]
    Forbidden { role: Role, action: &'static str },

    /// A stored row cannot be read back as a record
    #[error("malformed row: {reason}")]
    MalformedRow { reason: String },

    /// Configuration could not be loaded or parsed
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// The backing store was unreachable or rejected the call
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Error {
    /// Stable code for programmatic handling by the UI collaborator
    pub fn code(&self) -> &'static str {
        match self {
            Error::Validation { .. } => "VALIDATION",
            Error::NotFound { .. } => "NOT_FOUND",
            Error::Unauthenticated => "UNAUTHENTICATED",
            Error::Forbidden { .. } => "FORBIDDEN",
            Error::MalformedRow { .. } => "MALFORMED_ROW",
            Error::Config { .. } => "CONFIG",
            Error::Store(StoreError::Unavailable { .. }) => "STORE_UNAVAILABLE",
            Error::Store(_) => "STORE",
        }
    }

    /// True when the store itself is down, the one condition that should
    /// halt further interaction until resolved
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Error::Store(StoreError::Unavailable { .. }))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Config {
            reason: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Config {
            reason: err.to_string(),
        }
    }
}
