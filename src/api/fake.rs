//! In-memory provider with generated sample data.
//!
//! Stands in for the real backend during demos and tests: fixed page size,
//! opaque `page-{n}` cursors, and optional simulated latency so loading
//! states are observable.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::models::{Employee, EmployeeId, PageCursor, Transaction, TransactionId, TransactionPage};

use super::{FetchError, TransactionApi};

/// Number of transactions returned per page of the global feed.
pub const PAGE_SIZE: usize = 5;

const FIRST_NAMES: &[&str] = &[
    "Ava", "Liam", "Noor", "Mateo", "Ines", "Kofi", "Yuki", "Priya", "Owen", "Sofia",
];

const LAST_NAMES: &[&str] = &[
    "Reyes", "Okafor", "Lindgren", "Tanaka", "Moreau", "Haddad", "Novak", "Silva", "Byrne", "Kaur",
];

const MERCHANTS: &[&str] = &[
    "Cloud Compute Co",
    "Downtown Deli",
    "Transit Authority",
    "Office Depot",
    "Brightline Travel",
    "Cafe Meridian",
    "Print & Ship",
    "Hotel Arcadia",
];

/// In-memory provider over a fixed data set.
pub struct FakeApi {
    employees: Vec<Employee>,
    transactions: Vec<Transaction>,
    page_size: usize,
    latency: Duration,
}

impl FakeApi {
    /// Build a provider over explicit data.
    pub fn new(employees: Vec<Employee>, transactions: Vec<Transaction>) -> Self {
        Self {
            employees,
            transactions,
            page_size: PAGE_SIZE,
            latency: Duration::ZERO,
        }
    }

    /// Generate a deterministic sample data set.
    ///
    /// The same counts always produce the same employees and transactions,
    /// so tests and demos can rely on stable ids.
    pub fn generate(employee_count: usize, transaction_count: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let period_start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();

        let employees: Vec<Employee> = (0..employee_count)
            .map(|i| Employee {
                id: EmployeeId::new(format!("emp-{i}")),
                first_name: FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())].to_string(),
                last_name: LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())].to_string(),
            })
            .collect();

        // Transactions need an employee to reference.
        let transaction_count = if employees.is_empty() {
            0
        } else {
            transaction_count
        };

        let transactions: Vec<Transaction> = (0..transaction_count)
            .map(|i| {
                let employee = &employees[rng.gen_range(0..employees.len())];
                let cents = rng.gen_range(100_u64..150_000);
                let date = period_start
                    .checked_add_days(Days::new(rng.gen_range(0..365)))
                    .unwrap_or(period_start);
                Transaction {
                    id: TransactionId::new(format!("txn-{i}")),
                    amount: cents as f64 / 100.0,
                    merchant: MERCHANTS[rng.gen_range(0..MERCHANTS.len())].to_string(),
                    employee_id: employee.id.clone(),
                    date,
                    approved: rng.gen_bool(0.5),
                }
            })
            .collect();

        Self::new(employees, transactions)
    }

    /// Delay every response by `latency`, mimicking network round trips.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Override the global feed page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn page_index(cursor: Option<&PageCursor>) -> Result<usize, FetchError> {
        match cursor {
            None => Ok(0),
            Some(cursor) => cursor
                .as_str()
                .strip_prefix("page-")
                .and_then(|n| n.parse().ok())
                .ok_or_else(|| FetchError::Invalid(format!("unrecognized cursor: {cursor}"))),
        }
    }
}

#[async_trait]
impl TransactionApi for FakeApi {
    async fn get_employees(&self) -> Result<Vec<Employee>, FetchError> {
        self.simulate_latency().await;
        Ok(self.employees.clone())
    }

    async fn get_transactions_page(
        &self,
        cursor: Option<&PageCursor>,
    ) -> Result<TransactionPage, FetchError> {
        self.simulate_latency().await;
        let index = Self::page_index(cursor)?;
        let start = index * self.page_size;
        let end = (start + self.page_size).min(self.transactions.len());
        let data = self
            .transactions
            .get(start..end)
            .unwrap_or_default()
            .to_vec();
        let next_page = if end < self.transactions.len() {
            Some(PageCursor::new(format!("page-{}", index + 1)))
        } else {
            None
        };
        debug!(page = index, count = data.len(), "serving transaction page");
        Ok(TransactionPage { data, next_page })
    }

    async fn get_transactions_by_employee(
        &self,
        id: &EmployeeId,
    ) -> Result<Vec<Transaction>, FetchError> {
        self.simulate_latency().await;
        Ok(self
            .transactions
            .iter()
            .filter(|t| &t.employee_id == id)
            .cloned()
            .collect())
    }
}
