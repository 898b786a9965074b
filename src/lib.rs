//! Core data layer for a transaction approval dashboard.
//!
//! Reconciles three independently fetched sources - the employee directory,
//! the cursor-paginated global transaction feed, and a per-employee
//! transaction feed - into one coherent visible list, overlaying local
//! unsynced approval toggles on whichever view is active.
//!
//! The presentation shell is not part of this crate: it renders
//! [`App`]'s output and reports user intents (select a filter, toggle an
//! approval, request more data) back to it.

pub mod api;
pub mod app;
pub mod cache;
pub mod config;
pub mod models;

pub use api::{FakeApi, FetchError, HttpApi, TransactionApi};
pub use app::{App, ViewMode};
pub use cache::CacheState;
pub use config::Config;
pub use models::{Employee, EmployeeId, PageCursor, Transaction, TransactionId, TransactionPage};
