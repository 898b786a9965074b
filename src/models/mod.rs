//! Data models for the transaction approval dashboard.
//!
//! This module contains the data structures shared by the caches and the
//! view orchestrator:
//!
//! - `Employee`, `EmployeeId`: the company directory
//! - `Transaction`, `TransactionId`: card transactions with a local
//!   approval flag
//! - `TransactionPage`, `PageCursor`: one page of the cursor-paginated
//!   global feed

pub mod employee;
pub mod transaction;

pub use employee::{Employee, EmployeeId};
pub use transaction::{PageCursor, Transaction, TransactionId, TransactionPage};
