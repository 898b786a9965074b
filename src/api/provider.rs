//! The capability contract the data layer consumes.

use async_trait::async_trait;

use crate::models::{Employee, EmployeeId, PageCursor, Transaction, TransactionPage};

use super::FetchError;

/// The three fetch capabilities backing the dashboard.
///
/// The caches and orchestrator only ever see this trait; the provider behind
/// it is opaque. `HttpApi` implements it over REST and `FakeApi` in memory.
#[async_trait]
pub trait TransactionApi: Send + Sync {
    /// Fetch the full employee directory.
    async fn get_employees(&self) -> Result<Vec<Employee>, FetchError>;

    /// Fetch one page of the global transaction feed.
    ///
    /// `None` requests the first page.
    async fn get_transactions_page(
        &self,
        cursor: Option<&PageCursor>,
    ) -> Result<TransactionPage, FetchError>;

    /// Fetch the full transaction list for one employee. This path is not
    /// paginated.
    async fn get_transactions_by_employee(
        &self,
        id: &EmployeeId,
    ) -> Result<Vec<Transaction>, FetchError>;
}
