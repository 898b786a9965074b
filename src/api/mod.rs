//! Provider contract and implementations.
//!
//! The dashboard reaches its backend through the `TransactionApi` trait:
//! three fetch capabilities (employee directory, paginated global feed,
//! per-employee feed), each of which may fail with a `FetchError`.
//!
//! `HttpApi` implements the contract over REST; `FakeApi` serves generated
//! in-memory data for demos and tests.

pub mod client;
pub mod error;
pub mod fake;
pub mod provider;

pub use client::HttpApi;
pub use error::FetchError;
pub use fake::FakeApi;
pub use provider::TransactionApi;
