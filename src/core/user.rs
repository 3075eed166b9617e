//! User accounts and credentials
//!
//! Accounts live in the user table as plain text rows, password included.
//! That is the deployed reality of the shared spreadsheet; the [`Credential`]
//! wrapper exists so the secret can only be compared or written to the wire,
//! never read casually or logged through `Debug`.

use crate::core::error::{Error, Result};
use crate::core::validate;
use crate::schema;
use crate::storage::Row;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stored password
///
/// Comparison is plain text equality against the stored cell. Hashing would
/// break every existing row and the people who edit the sheet by hand, so it
/// stays out of scope here.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Check an attempt against the stored secret
    pub fn verify(&self, attempt: &str) -> bool {
        self.0 == attempt
    }

    /// Whether the stored secret is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw secret for row serialization only
    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Access level of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, including account management
    Admin,
    /// Runs the counter: invoices and reports
    Staff,
    /// Sees only their own delivery history
    Customer,
}

impl Role {
    /// Wire text for the role column
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Customer => "customer",
        }
    }

    /// Parse the role column, `None` for unknown text
    pub fn parse(text: &str) -> Option<Role> {
        match text.trim() {
            "admin" => Some(Role::Admin),
            "staff" => Some(Role::Staff),
            "customer" => Some(Role::Customer),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An account row from the user table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub username: String,
    #[serde(skip_serializing)]
    pub credential: Credential,
    pub role: Role,
    pub full_name: String,
    pub address: String,
}

impl User {
    /// Create an account record
    pub fn new(
        username: impl Into<String>,
        credential: Credential,
        role: Role,
        full_name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            credential,
            role,
            full_name: full_name.into(),
            address: address.into(),
        }
    }

    /// Check the fields a new or updated account must carry
    pub fn validate(&self) -> Result<()> {
        validate::require_non_empty("username", &self.username)?;
        if self.credential.is_empty() {
            return Err(Error::Validation {
                field: "password",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Serialize to a wire row in `USER_COLUMNS` order
    pub fn to_row(&self) -> Row {
        vec![
            self.username.clone(),
            self.credential.expose().to_string(),
            self.role.as_str().to_string(),
            self.full_name.clone(),
            self.address.clone(),
        ]
    }

    /// Decode a wire row
    ///
    /// Width and role are strict. A row that does not decode is data
    /// corruption in the sheet, not a user mistake.
    pub fn from_row(row: &Row) -> Result<Self> {
        if row.len() != schema::USER_ROW_WIDTH {
            return Err(Error::MalformedRow {
                reason: format!(
                    "user row has {} cells, expected {}",
                    row.len(),
                    schema::USER_ROW_WIDTH
                ),
            });
        }
        let role = Role::parse(&row[2]).ok_or_else(|| Error::MalformedRow {
            reason: format!("unknown role '{}'", row[2]),
        })?;
        Ok(Self {
            username: row[0].clone(),
            credential: Credential::new(row[1].clone()),
            role,
            full_name: row[3].clone(),
            address: row[4].clone(),
        })
    }
}
