//! In-memory caches for the three data sources.
//!
//! Each source gets its own owned, independently testable cache object with
//! an explicit lifecycle tag (`CacheState`) and a `loading` flag:
//!
//! - `EmployeeCache`: the directory, populated lazily once
//! - `PaginatedTransactionCache`: the latest page of the global feed plus
//!   its forward cursor
//! - `EmployeeTransactionCache`: one employee's full transaction list
//!
//! The two transaction caches are mutually exclusive: the orchestrator
//! invalidates one whenever it activates the other.

pub mod employees;
pub mod paginated;
pub mod scoped;
pub mod state;

pub use employees::EmployeeCache;
pub use paginated::PaginatedTransactionCache;
pub use scoped::EmployeeTransactionCache;
pub use state::CacheState;
