//! HTTP client for the content backend's query endpoint.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use shopfront_catalog::Product;

use crate::config::ContentConfig;
use crate::error::{ContentError, ContentResult};
use crate::query;

/// Envelope wrapping every query response.
#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: T,
}

/// Read-only client for the content backend.
///
/// Cheap to clone; the underlying HTTP client is shared.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    config: ContentConfig,
}

impl ContentClient {
    pub fn new(config: ContentConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Execute one read-only query and decode the `result` field of the
    /// response envelope.
    pub async fn query<T: DeserializeOwned>(&self, groq: &str) -> ContentResult<T> {
        let endpoint = self.config.query_endpoint();
        tracing::debug!(%endpoint, query = %groq, "executing content query");

        let response = self
            .http
            .get(&endpoint)
            .query(&[("query", groq)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%endpoint, status = status.as_u16(), "content query failed");
            return Err(ContentError::status(status.as_u16()));
        }

        let body = response.text().await?;
        let envelope: QueryResponse<T> = serde_json::from_str(&body)?;
        Ok(envelope.result)
    }

    /// Fetch every product record, in the order the backend returns them.
    pub async fn fetch_products(&self) -> ContentResult<Vec<Product>> {
        let products = self.query::<Vec<Product>>(&query::product_query()).await?;
        tracing::debug!(count = products.len(), "fetched product records");
        Ok(products)
    }
}
