//! Resource API Client
//!
//! HTTP client for the fitness REST API. One GET per fetch, no retries.

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::cancel::CancellationToken;
use super::error::{FetchError, FetchResult};
use super::normalize::{normalize, PayloadShape};
use crate::models::{decode_all, Record};
use crate::resource::Resource;

/// Configuration for the resource client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API server (e.g., "http://localhost:8000")
    pub base_url: String,
    /// Optional request timeout in milliseconds; unset means wait indefinitely
    pub request_timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout_ms: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// REST client for the collection endpoints
#[derive(Debug, Clone)]
pub struct ResourceClient {
    client: Client,
    config: ClientConfig,
}

impl ResourceClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> FetchResult<Self> {
        let mut builder = Client::builder();
        if let Some(ms) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// Collection endpoint: `{base_url}/api/{resource}/`
    pub fn url_for(&self, resource: Resource) -> String {
        format!("{}/api/{}/", self.base_url(), resource.segment())
    }

    /// GET the collection and decode the body as JSON
    pub async fn fetch_payload(&self, resource: Resource) -> FetchResult<Value> {
        let url = self.url_for(resource);
        tracing::debug!(%resource, %url, "Fetching resource");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%resource, status = status.as_u16(), "API returned error status");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let payload: Value = serde_json::from_slice(&bytes)?;
        Ok(payload)
    }

    /// Fetch a collection and normalize it into an ordered record list
    pub async fn fetch(&self, resource: Resource) -> FetchResult<Vec<Value>> {
        let payload = self.fetch_payload(resource).await?;
        let shape = PayloadShape::of(&payload);
        let records = normalize(payload);

        tracing::debug!(%resource, ?shape, count = records.len(), "Resource fetched");
        Ok(records)
    }

    /// Fetch a collection, aborting if `token` is cancelled first
    pub async fn fetch_cancellable(
        &self,
        resource: Resource,
        token: &CancellationToken,
    ) -> FetchResult<Vec<Value>> {
        token.run(self.fetch(resource)).await
    }

    /// Fetch and decode into typed records
    pub async fn fetch_records<R: Record>(
        &self,
        resource: Resource,
        token: &CancellationToken,
    ) -> FetchResult<Vec<R>> {
        let values = self.fetch_cancellable(resource, token).await?;
        Ok(decode_all(&values))
    }

    /// Check that the API root answers with a success status
    pub async fn ping(&self) -> FetchResult<()> {
        let url = format!("{}/api/", self.base_url());
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
