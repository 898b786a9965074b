//! Employee directory cache.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::{FetchError, TransactionApi};
use crate::models::Employee;

use super::CacheState;

/// Cache for the full employee directory.
///
/// Populated lazily on the first ALL-view load and never invalidated; the
/// directory changes far too slowly to be worth refetching per view switch.
pub struct EmployeeCache {
    api: Arc<dyn TransactionApi>,
    state: CacheState<Vec<Employee>>,
    loading: bool,
}

impl EmployeeCache {
    pub fn new(api: Arc<dyn TransactionApi>) -> Self {
        Self {
            api,
            state: CacheState::NotLoaded,
            loading: false,
        }
    }

    /// The cached directory, `None` until a fetch has succeeded. A loaded
    /// empty list is distinct from "not yet loaded".
    pub fn employees(&self) -> Option<&[Employee]> {
        self.state.value().map(Vec::as_slice)
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_loaded()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Fetch the directory, overwriting the cache on success.
    ///
    /// A failed fetch leaves any previously loaded directory untouched and
    /// propagates the error unchanged.
    pub async fn fetch_all(&mut self) -> Result<(), FetchError> {
        self.loading = true;
        if !self.state.is_loaded() {
            self.state = CacheState::Loading;
        }

        let result = self.api.get_employees().await;
        self.loading = false;

        match result {
            Ok(employees) => {
                debug!(count = employees.len(), "employee directory loaded");
                self.state = CacheState::Loaded(employees);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "employee directory fetch failed");
                if !self.state.is_loaded() {
                    self.state = CacheState::Failed;
                }
                Err(e)
            }
        }
    }
}
