//! Sessions and access policies
//!
//! A [`Session`] is proof of a successful login. It cannot be deserialized
//! or assembled from parts; the only way to obtain one is
//! [`authenticate`](crate::repository::UserRepository::authenticate), so any
//! function taking `&Session` can assume the caller signed in.

use crate::core::user::{Role, User};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// An authenticated login
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    id: Uuid,
    username: String,
    full_name: String,
    role: Role,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Mint a session for a verified account
    pub(crate) fn open(user: &User) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: user.username.clone(),
            full_name: user.full_name.clone(),
            role: user.role,
            started_at: Utc::now(),
        }
    }

    /// Unique id of this login
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Account name this session belongs to
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Display name, also the customer name invoices are matched against
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Access level of the account
    pub fn role(&self) -> Role {
        self.role
    }

    /// When the login happened
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

/// Access policy for an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Create, change or remove accounts
    ManageUsers,
    /// Create, change or remove invoices
    EditInvoices,
    /// See every invoice in the ledger
    ViewAllInvoices,
    /// See the invoices matching one's own name
    ViewOwnHistory,
}

impl AccessPolicy {
    /// Check if the session's role satisfies this policy
    pub fn check(&self, session: &Session) -> bool {
        match self {
            AccessPolicy::ManageUsers => session.role() == Role::Admin,

            AccessPolicy::EditInvoices => {
                matches!(session.role(), Role::Admin | Role::Staff)
            }

            AccessPolicy::ViewAllInvoices => {
                matches!(session.role(), Role::Admin | Role::Staff)
            }

            AccessPolicy::ViewOwnHistory => true,
        }
    }

    /// Short verb phrase for denial messages
    pub fn action(&self) -> &'static str {
        match self {
            AccessPolicy::ManageUsers => "manage accounts",
            AccessPolicy::EditInvoices => "edit invoices",
            AccessPolicy::ViewAllInvoices => "view all invoices",
            AccessPolicy::ViewOwnHistory => "view own history",
        }
    }

    /// Check the policy, turning a refusal into a typed error
    pub fn authorize(&self, session: &Session) -> crate::core::error::Result<()> {
        if self.check(session) {
            Ok(())
        } else {
            Err(crate::core::error::Error::Forbidden {
                role: session.role(),
                action: self.action(),
            })
        }
    }
}
