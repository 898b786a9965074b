//! Cache for the cursor-paginated global transaction feed.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::{FetchError, TransactionApi};
use crate::models::{PageCursor, TransactionPage};

use super::CacheState;

/// Holds the latest page of the global feed plus its forward cursor.
///
/// Pagination is strictly forward: there is no random access to arbitrary
/// pages, and a fetch after `invalidate` always restarts from page one.
pub struct PaginatedTransactionCache {
    api: Arc<dyn TransactionApi>,
    state: CacheState<TransactionPage>,
    loading: bool,
}

impl PaginatedTransactionCache {
    pub fn new(api: Arc<dyn TransactionApi>) -> Self {
        Self {
            api,
            state: CacheState::NotLoaded,
            loading: false,
        }
    }

    pub fn page(&self) -> Option<&TransactionPage> {
        self.state.value()
    }

    /// Cursor for the next page, `None` when the feed is exhausted or the
    /// cache holds nothing yet.
    pub fn next_page(&self) -> Option<&PageCursor> {
        self.state.value().and_then(|p| p.next_page.as_ref())
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_loaded()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Fetch the next page of the feed.
    ///
    /// With no cached value this requests the first page; with a cached value
    /// it requests the page named by the stored cursor. When the cursor is
    /// exhausted no request is made and the current page is returned as-is.
    /// A failed fetch leaves the cached page untouched.
    pub async fn fetch_next(&mut self) -> Result<TransactionPage, FetchError> {
        if let Some(current) = self.state.value() {
            if current.next_page.is_none() {
                debug!("transaction feed exhausted, skipping fetch");
                return Ok(current.clone());
            }
        }

        let cursor = self.state.value().and_then(|p| p.next_page.clone());
        self.loading = true;
        if !self.state.is_loaded() {
            self.state = CacheState::Loading;
        }

        let result = self.api.get_transactions_page(cursor.as_ref()).await;
        self.loading = false;

        match result {
            Ok(page) => {
                debug!(
                    count = page.data.len(),
                    has_next = page.next_page.is_some(),
                    "transaction page loaded"
                );
                self.state = CacheState::Loaded(page.clone());
                Ok(page)
            }
            Err(e) => {
                warn!(error = %e, "transaction page fetch failed");
                if !self.state.is_loaded() {
                    self.state = CacheState::Failed;
                }
                Err(e)
            }
        }
    }

    /// Reset to the uninitialized state. The next fetch restarts from page
    /// one. Synchronous: nothing in flight is cancelled.
    pub fn invalidate(&mut self) {
        debug!("paginated transaction cache invalidated");
        self.state = CacheState::NotLoaded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeId, Transaction, TransactionId};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    fn txn(id: &str) -> Transaction {
        Transaction {
            id: TransactionId::new(id),
            amount: 10.0,
            merchant: "Cafe".to_string(),
            employee_id: EmployeeId::new("emp-1"),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            approved: false,
        }
    }

    fn page(ids: &[&str], next: Option<&str>) -> TransactionPage {
        TransactionPage {
            data: ids.iter().map(|id| txn(id)).collect(),
            next_page: next.map(PageCursor::new),
        }
    }

    /// Records requested cursors and pops scripted responses in order.
    struct StubApi {
        responses: Mutex<Vec<Result<TransactionPage, String>>>,
        requested: Mutex<Vec<Option<String>>>,
    }

    impl StubApi {
        fn new(responses: Vec<Result<TransactionPage, String>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses),
                requested: Mutex::new(Vec::new()),
            })
        }

        fn requested(&self) -> Vec<Option<String>> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TransactionApi for StubApi {
        async fn get_employees(&self) -> Result<Vec<crate::models::Employee>, FetchError> {
            Ok(Vec::new())
        }

        async fn get_transactions_page(
            &self,
            cursor: Option<&PageCursor>,
        ) -> Result<TransactionPage, FetchError> {
            self.requested
                .lock()
                .unwrap()
                .push(cursor.map(|c| c.as_str().to_string()));
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                return Err(FetchError::Unavailable("no scripted response".to_string()));
            }
            responses.remove(0).map_err(FetchError::Unavailable)
        }

        async fn get_transactions_by_employee(
            &self,
            _id: &EmployeeId,
        ) -> Result<Vec<Transaction>, FetchError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_first_fetch_requests_page_one_then_follows_cursor() {
        let api = StubApi::new(vec![
            Ok(page(&["t1"], Some("page-1"))),
            Ok(page(&["t2"], None)),
        ]);
        let mut cache = PaginatedTransactionCache::new(api.clone());

        cache.fetch_next().await.unwrap();
        cache.fetch_next().await.unwrap();

        assert_eq!(api.requested(), vec![None, Some("page-1".to_string())]);
        assert!(cache.next_page().is_none());
    }

    #[tokio::test]
    async fn test_exhausted_feed_is_a_no_op() {
        let api = StubApi::new(vec![Ok(page(&["t1"], None))]);
        let mut cache = PaginatedTransactionCache::new(api.clone());

        cache.fetch_next().await.unwrap();
        let replay = cache.fetch_next().await.unwrap();

        // Only one request went out; the second call replayed the cache.
        assert_eq!(api.requested().len(), 1);
        assert_eq!(replay.data.len(), 1);
    }

    #[tokio::test]
    async fn test_invalidate_restarts_from_page_one() {
        let api = StubApi::new(vec![
            Ok(page(&["t1"], Some("page-1"))),
            Ok(page(&["t1"], Some("page-1"))),
        ]);
        let mut cache = PaginatedTransactionCache::new(api.clone());

        cache.fetch_next().await.unwrap();
        cache.invalidate();
        assert!(!cache.is_loaded());

        cache.fetch_next().await.unwrap();
        assert_eq!(api.requested(), vec![None, None]);
    }

    #[tokio::test]
    async fn test_failed_refetch_keeps_prior_page() {
        let api = StubApi::new(vec![
            Ok(page(&["t1"], Some("page-1"))),
            Err("backend down".to_string()),
        ]);
        let mut cache = PaginatedTransactionCache::new(api);

        cache.fetch_next().await.unwrap();
        let err = cache.fetch_next().await.unwrap_err();

        assert!(matches!(err, FetchError::Unavailable(_)));
        assert!(cache.is_loaded());
        assert_eq!(cache.next_page(), Some(&PageCursor::new("page-1")));
        assert!(!cache.loading());
    }

    #[tokio::test]
    async fn test_failed_first_fetch_lands_in_failed() {
        let api = StubApi::new(vec![Err("backend down".to_string())]);
        let mut cache = PaginatedTransactionCache::new(api);

        cache.fetch_next().await.unwrap_err();
        assert!(matches!(cache.state, CacheState::Failed));
        assert!(!cache.loading());
    }
}
