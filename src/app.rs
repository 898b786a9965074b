//! View orchestration for the transaction approval dashboard.
//!
//! `App` owns the three caches and reconciles them into the single visible
//! transaction list: it decides which view is active, merges incoming pages,
//! overlays local approval toggles, and keeps the two transaction caches
//! mutually exclusive. A presentation shell renders its output and calls
//! back with user intents; nothing here renders anything.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::api::{FetchError, TransactionApi};
use crate::cache::{EmployeeCache, EmployeeTransactionCache, PaginatedTransactionCache};
use crate::models::{Employee, EmployeeId, Transaction, TransactionId, TransactionPage};

/// The active view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// The global feed, accumulated page by page.
    All,
    /// One employee's full transaction list, replaced wholesale per fetch.
    Employee(EmployeeId),
}

/// Orchestrates the three data caches into one visible transaction list.
pub struct App {
    employees: EmployeeCache,
    paginated: PaginatedTransactionCache,
    by_employee: EmployeeTransactionCache,

    mode: ViewMode,
    visible: Vec<Transaction>,

    /// Brackets a full ALL-view load cycle (directory fetch then page
    /// fetch). The shell disables "View More" while this is set so cycles
    /// never overlap.
    loading: bool,
}

impl App {
    pub fn new(api: Arc<dyn TransactionApi>) -> Self {
        Self {
            employees: EmployeeCache::new(Arc::clone(&api)),
            paginated: PaginatedTransactionCache::new(Arc::clone(&api)),
            by_employee: EmployeeTransactionCache::new(api),
            mode: ViewMode::All,
            visible: Vec::new(),
            loading: false,
        }
    }

    // =========================================================================
    // View transitions
    // =========================================================================

    /// First-mount load: runs the ALL transition once, before any filter has
    /// ever been chosen. A no-op when the directory is already loaded or
    /// loading.
    pub async fn initial_load(&mut self) -> Result<(), FetchError> {
        if self.employees.is_loaded() || self.employees.loading() {
            return Ok(());
        }
        self.load_all_transactions().await
    }

    /// Switch to the ALL view and fetch the next page of the global feed.
    ///
    /// Invalidates the employee-scoped cache. When arriving from the
    /// EMPLOYEE view the accumulation restarts: the visible list is cleared
    /// and the (already invalidated) paginated cache fetches page one, so
    /// local edits made in the employee view do not survive the switch.
    pub async fn load_all_transactions(&mut self) -> Result<(), FetchError> {
        self.loading = true;
        let result = self.enter_all_view().await;
        self.loading = false;
        result
    }

    async fn enter_all_view(&mut self) -> Result<(), FetchError> {
        if let ViewMode::Employee(id) = &self.mode {
            info!(employee_id = %id, "switching to the all-transactions view");
            self.visible.clear();
        }
        self.mode = ViewMode::All;
        self.by_employee.invalidate();
        self.fetch_all_cycle().await
    }

    /// Fetch the next page of the ALL view without switching modes.
    ///
    /// A no-op outside the ALL view, while a cycle is in flight, or once the
    /// feed is exhausted.
    pub async fn load_more(&mut self) -> Result<(), FetchError> {
        if !self.can_load_more() {
            debug!("load_more ignored: not in the all view, busy, or no further pages");
            return Ok(());
        }
        self.loading = true;
        let result = self.fetch_all_cycle().await;
        self.loading = false;
        result
    }

    /// One ALL-view fetch cycle: directory first (only if never loaded),
    /// then the next transaction page, deliberately in sequence so the page
    /// fetch never observes a directory that is still unresolved.
    async fn fetch_all_cycle(&mut self) -> Result<(), FetchError> {
        if !self.employees.is_loaded() {
            self.employees.fetch_all().await?;
        }
        let page = self.paginated.fetch_next().await?;
        self.merge_page(page);
        Ok(())
    }

    /// Switch to the EMPLOYEE view for `id` and fetch that employee's list.
    ///
    /// Invalidates the paginated cache. On failure the visible list keeps
    /// its last good value and the mode is not rolled back; the caller
    /// decides how to report the error.
    pub async fn load_transactions_by_employee(
        &mut self,
        id: EmployeeId,
    ) -> Result<(), FetchError> {
        info!(employee_id = %id, "switching to the employee view");
        self.mode = ViewMode::Employee(id.clone());
        self.paginated.invalidate();

        let transactions = self.by_employee.fetch_by_id(&id).await?;
        self.visible = transactions;
        Ok(())
    }

    /// Apply a filter selection from the shell. `None` means "all
    /// employees" and routes to the ALL transition.
    pub async fn select_employee(&mut self, filter: Option<EmployeeId>) -> Result<(), FetchError> {
        match filter {
            None => self.load_all_transactions().await,
            Some(id) => self.load_transactions_by_employee(id).await,
        }
    }

    // =========================================================================
    // Local edits
    // =========================================================================

    /// Flip the approved flag on a visible transaction.
    ///
    /// Purely local: touches no cache, performs no I/O, and works in either
    /// view. Returns false when the id is not currently visible.
    pub fn toggle_approval(&mut self, id: &TransactionId) -> bool {
        match self.visible.iter_mut().find(|t| &t.id == id) {
            Some(transaction) => {
                transaction.approved = !transaction.approved;
                debug!(transaction_id = %id, approved = transaction.approved, "approval toggled");
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Merging
    // =========================================================================

    /// Append a page to the visible list, skipping ids already present.
    ///
    /// Existing entries are never reordered or rewritten, so a page that is
    /// delivered twice is harmless and local approval edits on earlier
    /// entries survive the append.
    fn merge_page(&mut self, page: TransactionPage) {
        let existing: HashSet<TransactionId> = self.visible.iter().map(|t| t.id.clone()).collect();
        self.visible
            .extend(page.data.into_iter().filter(|t| !existing.contains(&t.id)));
    }

    // =========================================================================
    // Accessors for the presentation shell
    // =========================================================================

    /// The merged list the shell renders.
    pub fn visible_transactions(&self) -> &[Transaction] {
        &self.visible
    }

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    /// The directory for the filter control, `None` until loaded.
    pub fn employees(&self) -> Option<&[Employee]> {
        self.employees.employees()
    }

    /// Aggregate flag bracketing a full ALL-view load cycle.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn employees_loading(&self) -> bool {
        self.employees.loading()
    }

    /// Whether either transaction cache has a fetch in flight.
    pub fn transactions_loading(&self) -> bool {
        self.paginated.loading() || self.by_employee.loading()
    }

    /// Whether the ALL view has further pages to fetch.
    pub fn has_more_pages(&self) -> bool {
        matches!(self.mode, ViewMode::All) && self.paginated.next_page().is_some()
    }

    /// Whether the shell should enable its "View More" affordance.
    pub fn can_load_more(&self) -> bool {
        self.has_more_pages() && !self.loading && !self.paginated.loading()
    }
}

// ============================================================================
// Tests
// ============================================================================
