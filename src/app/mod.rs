//! Application facade
//!
//! [`Washbook`] is the one entry point a frontend talks to. It owns the
//! repositories, checks every call against an [`AccessPolicy`], and is the
//! only place sessions are minted and retired. Frontends never see the store
//! or the repositories directly.

use crate::config::WashbookConfig;
use crate::core::error::Result;
use crate::core::{AccessPolicy, Invoice, Session, User};
use crate::report::{self, DateRange, ReportSummary};
use crate::repository::{InvoiceRepository, UserRepository};
use crate::schema;
use crate::storage::WorksheetStore;
use std::sync::Arc;

/// The ledger service for one deployment
pub struct Washbook<S> {
    users: UserRepository<S>,
    invoices: InvoiceRepository<S>,
    config: WashbookConfig,
}

impl<S: WorksheetStore> Washbook<S> {
    /// Connect to the store and make sure both tables exist
    ///
    /// An unreachable store fails here, before any session exists. Callers
    /// are expected to treat that as fatal and stop; nothing in the service
    /// works without the ledger.
    pub async fn connect(store: Arc<S>, config: WashbookConfig) -> Result<Self> {
        store
            .ensure_table(&config.store.users_table, &schema::user_header())
            .await?;
        store
            .ensure_table(&config.store.invoices_table, &schema::invoice_header())
            .await?;

        tracing::info!(
            spreadsheet = %config.store.spreadsheet,
            users_table = %config.store.users_table,
            invoices_table = %config.store.invoices_table,
            "connected to ledger store"
        );

        let users = UserRepository::new(store.clone(), config.store.users_table.clone());
        let invoices = InvoiceRepository::new(store, config.store.invoices_table.clone());

        Ok(Self {
            users,
            invoices,
            config,
        })
    }

    /// Configuration this service was connected with
    pub fn config(&self) -> &WashbookConfig {
        &self.config
    }

    /// Verify credentials and open a session
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        self.users.authenticate(username, password).await
    }

    /// Retire a session
    ///
    /// Takes the session by value; after logout the caller has nothing left
    /// to pass to the other operations.
    pub fn logout(&self, session: Session) {
        tracing::info!(username = %session.username(), "logout");
        drop(session);
    }

    /// Record a new invoice
    pub async fn submit_invoice(&self, session: &Session, invoice: &Invoice) -> Result<()> {
        AccessPolicy::EditInvoices.authorize(session)?;
        self.invoices.create(invoice).await
    }

    /// Replace the invoice stored under `receipt_no`
    pub async fn submit_invoice_update(
        &self,
        session: &Session,
        receipt_no: &str,
        invoice: &Invoice,
    ) -> Result<()> {
        AccessPolicy::EditInvoices.authorize(session)?;
        self.invoices.update(receipt_no, invoice).await
    }

    /// Remove the invoice stored under `receipt_no`
    pub async fn delete_invoice(&self, session: &Session, receipt_no: &str) -> Result<()> {
        AccessPolicy::EditInvoices.authorize(session)?;
        self.invoices.delete(receipt_no).await
    }

    /// Fetch one invoice for editing
    pub async fn find_invoice(&self, session: &Session, receipt_no: &str) -> Result<Invoice> {
        AccessPolicy::EditInvoices.authorize(session)?;
        self.invoices.find(receipt_no).await
    }

    /// List invoices the session may see
    ///
    /// Counter roles see the whole ledger. Customers get only the invoices
    /// whose customer field matches their display name.
    pub async fn list_invoices(
        &self,
        session: &Session,
        range: Option<&DateRange>,
    ) -> Result<Vec<Invoice>> {
        if AccessPolicy::ViewAllInvoices.check(session) {
            return self.invoices.list(range).await;
        }

        AccessPolicy::ViewOwnHistory.authorize(session)?;
        let mut invoices = self.invoices.list(range).await?;
        invoices.retain(|invoice| invoice.customer == session.full_name());
        Ok(invoices)
    }

    /// Create an account
    pub async fn create_user(&self, session: &Session, user: &User) -> Result<()> {
        AccessPolicy::ManageUsers.authorize(session)?;
        self.users.create(user).await
    }

    /// Replace the account stored under `username`
    pub async fn update_user(&self, session: &Session, username: &str, user: &User) -> Result<()> {
        AccessPolicy::ManageUsers.authorize(session)?;
        self.users.update(username, user).await
    }

    /// Remove the account stored under `username`
    pub async fn delete_user(&self, session: &Session, username: &str) -> Result<()> {
        AccessPolicy::ManageUsers.authorize(session)?;
        self.users.delete(username).await
    }

    /// List every account
    pub async fn list_users(&self, session: &Session) -> Result<Vec<User>> {
        AccessPolicy::ManageUsers.authorize(session)?;
        self.users.list().await
    }

    /// Count and total weight over a date span
    pub async fn report(&self, session: &Session, range: &DateRange) -> Result<ReportSummary> {
        AccessPolicy::ViewAllInvoices.authorize(session)?;
        let invoices = self.invoices.list(Some(range)).await?;
        Ok(report::aggregate(&invoices, range))
    }

    /// CSV file of the invoices in a date span
    pub async fn export_report(&self, session: &Session, range: &DateRange) -> Result<Vec<u8>> {
        AccessPolicy::ViewAllInvoices.authorize(session)?;
        let invoices = self.invoices.list(Some(range)).await?;
        Ok(report::export_csv(&invoices))
    }
}
