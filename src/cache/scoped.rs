//! Cache for one employee's full transaction list.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::{FetchError, TransactionApi};
use crate::models::{EmployeeId, Transaction};

use super::CacheState;

/// Cache for the employee-scoped transaction feed.
///
/// This path is not paginated: every successful fetch overwrites the cache
/// wholesale with the employee's full list.
pub struct EmployeeTransactionCache {
    api: Arc<dyn TransactionApi>,
    state: CacheState<Vec<Transaction>>,
    loading: bool,
}

impl EmployeeTransactionCache {
    pub fn new(api: Arc<dyn TransactionApi>) -> Self {
        Self {
            api,
            state: CacheState::NotLoaded,
            loading: false,
        }
    }

    pub fn transactions(&self) -> Option<&[Transaction]> {
        self.state.value().map(Vec::as_slice)
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_loaded()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Fetch the full list for `id`, overwriting the cache on success.
    ///
    /// `id` must be a real employee id: the orchestrator routes "no filter"
    /// to the paginated feed before this cache is ever consulted.
    pub async fn fetch_by_id(&mut self, id: &EmployeeId) -> Result<Vec<Transaction>, FetchError> {
        self.loading = true;
        if !self.state.is_loaded() {
            self.state = CacheState::Loading;
        }

        let result = self.api.get_transactions_by_employee(id).await;
        self.loading = false;

        match result {
            Ok(transactions) => {
                debug!(employee_id = %id, count = transactions.len(), "employee transactions loaded");
                self.state = CacheState::Loaded(transactions.clone());
                Ok(transactions)
            }
            Err(e) => {
                warn!(employee_id = %id, error = %e, "employee transactions fetch failed");
                if !self.state.is_loaded() {
                    self.state = CacheState::Failed;
                }
                Err(e)
            }
        }
    }

    /// Reset to the uninitialized state. Synchronous: nothing in flight is
    /// cancelled.
    pub fn invalidate(&mut self) {
        debug!("employee transaction cache invalidated");
        self.state = CacheState::NotLoaded;
    }
}
