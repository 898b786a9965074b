//! HTTP implementation of the provider contract.
//!
//! This is the excluded-from-core service layer made concrete: a thin
//! reqwest client that maps the three REST endpoints onto `TransactionApi`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::models::{Employee, EmployeeId, PageCursor, Transaction, TransactionPage};

use super::{FetchError, TransactionApi};

/// HTTP request timeout in seconds.
/// 30s allows for slow responses while failing fast enough for good UX.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP-backed provider.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    /// Create a client against the given base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::with_timeout(
            config.api_base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, FetchError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(FetchError::from_status(status, &body))
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!(url, "GET");
        let response = self.client.get(url).send().await?;
        let response = Self::check_response(response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| FetchError::Invalid(format!("failed to parse response from {url}: {e}")))
    }
}

#[async_trait]
impl TransactionApi for HttpApi {
    async fn get_employees(&self) -> Result<Vec<Employee>, FetchError> {
        self.get(&format!("{}/employees", self.base_url)).await
    }

    async fn get_transactions_page(
        &self,
        cursor: Option<&PageCursor>,
    ) -> Result<TransactionPage, FetchError> {
        let url = match cursor {
            Some(cursor) => format!("{}/transactions?cursor={}", self.base_url, cursor),
            None => format!("{}/transactions", self.base_url),
        };
        self.get(&url).await
    }

    async fn get_transactions_by_employee(
        &self,
        id: &EmployeeId,
    ) -> Result<Vec<Transaction>, FetchError> {
        self.get(&format!("{}/employees/{}/transactions", self.base_url, id))
            .await
    }
}
