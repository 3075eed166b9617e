//! User repository keyed by username, plus login

use crate::core::error::{Error, Result};
use crate::core::{Session, User, validate};
use crate::repository::KeyIndex;
use crate::storage::{Row, WorksheetStore};
use std::sync::Arc;

/// Column holding the username
const KEY_COLUMN: usize = 0;

/// CRUD over the account table, addressed by username
///
/// Follows the same fetch-and-index discipline as
/// [`InvoiceRepository`](crate::repository::InvoiceRepository). Login lives
/// here too, since it is the one operation allowed to touch stored
/// credentials.
pub struct UserRepository<S> {
    store: Arc<S>,
    table: String,
}

impl<S: WorksheetStore> UserRepository<S> {
    /// Repository over `table` in `store`
    pub fn new(store: Arc<S>, table: impl Into<String>) -> Self {
        Self {
            store,
            table: table.into(),
        }
    }

    /// Table this repository reads and writes
    pub fn table(&self) -> &str {
        &self.table
    }

    async fn fetch(&self) -> Result<Vec<Row>> {
        Ok(self.store.list_rows(&self.table).await?)
    }

    fn index(&self, rows: &[Row]) -> KeyIndex {
        let index = KeyIndex::build(rows, KEY_COLUMN);
        if !index.duplicates().is_empty() {
            tracing::warn!(
                table = %self.table,
                keys = ?index.duplicates(),
                "duplicate usernames in table, earliest row wins"
            );
        }
        index
    }

    /// Append a new account; the username must not be taken
    pub async fn create(&self, user: &User) -> Result<()> {
        user.validate()?;

        let rows = self.fetch().await?;
        if self.index(&rows).contains(&user.username) {
            return Err(Error::Validation {
                field: "username",
                reason: format!("account '{}' already exists", user.username),
            });
        }

        self.store.append_row(&self.table, user.to_row()).await?;
        tracing::info!(username = %user.username, role = %user.role, "account created");
        Ok(())
    }

    /// Decode the account stored under `username`
    pub async fn find(&self, username: &str) -> Result<User> {
        validate::require_non_empty("username", username)?;

        let rows = self.fetch().await?;
        let position = self
            .index(&rows)
            .first(username)
            .ok_or_else(|| Error::NotFound {
                entity: "user",
                key: username.to_string(),
            })?;
        tracing::debug!(username = %username, row = position, "account located");

        User::from_row(&rows[position])
    }

    /// Replace the account stored under `username` with `user`
    pub async fn update(&self, username: &str, user: &User) -> Result<()> {
        validate::require_non_empty("username", username)?;
        user.validate()?;

        let rows = self.fetch().await?;
        let index = self.index(&rows);
        let position = index.first(username).ok_or_else(|| Error::NotFound {
            entity: "user",
            key: username.to_string(),
        })?;

        if user.username != username && index.contains(&user.username) {
            return Err(Error::Validation {
                field: "username",
                reason: format!("account '{}' already exists", user.username),
            });
        }

        self.store
            .update_row(&self.table, position, user.to_row())
            .await?;
        tracing::info!(username = %user.username, "account updated");
        Ok(())
    }

    /// Remove the account stored under `username`
    pub async fn delete(&self, username: &str) -> Result<()> {
        validate::require_non_empty("username", username)?;

        let rows = self.fetch().await?;
        let position = self
            .index(&rows)
            .first(username)
            .ok_or_else(|| Error::NotFound {
                entity: "user",
                key: username.to_string(),
            })?;

        self.store.delete_row(&self.table, position).await?;
        tracing::info!(username = %username, "account deleted");
        Ok(())
    }

    /// Decode every account, skipping rows that fail to decode
    pub async fn list(&self) -> Result<Vec<User>> {
        let rows = self.fetch().await?;
        let mut users = Vec::with_capacity(rows.len());

        for (position, row) in rows.iter().enumerate() {
            match User::from_row(row) {
                Ok(user) => users.push(user),
                Err(e) => {
                    tracing::warn!(
                        table = %self.table,
                        position,
                        error = %e,
                        "skipping malformed user row"
                    );
                }
            }
        }

        Ok(users)
    }

    /// Verify a username and password, opening a session on success
    ///
    /// Unknown accounts and wrong passwords fail the same way, so a caller
    /// cannot probe which usernames exist. The password is never logged.
    /// Both fields must match the same row; with duplicate usernames the
    /// first row whose password matches wins.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Session> {
        let users = self.list().await?;
        let account = users
            .iter()
            .find(|u| u.username == username && u.credential.verify(password));

        match account {
            Some(user) => {
                let session = Session::open(user);
                tracing::info!(username = %username, role = %user.role, "login accepted");
                Ok(session)
            }
            None => {
                tracing::warn!(username = %username, "login rejected");
                Err(Error::Unauthenticated)
            }
        }
    }
}
