//! # Subgraph HTTP Client
//!
//! HTTP client wrapper and the generic GraphQL query helper.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::types::GraphResponse;

/// HTTP client wrapper for the StreamSwap subgraph.
pub struct SubgraphHttpClient {
    pub http: Client,
    pub endpoint: String,
}

impl SubgraphHttpClient {
    /// Create a new client with timeout configuration.
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Create a client from the global configuration.
    pub fn from_config() -> anyhow::Result<Self> {
        let config = lib_core::config::core_config();
        Self::new(&config.subgraph_url, config.http_timeout_secs)
    }

    /// Run one GraphQL query and deserialize its `data` payload.
    ///
    /// GraphQL-level errors are surfaced as failures even when the HTTP
    /// status is 200.
    pub(crate) async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> anyhow::Result<T> {
        debug!("subgraph query to {}", self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .json(&serde_json::json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("subgraph request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "subgraph returned {}: {}",
                status,
                error_text
            ));
        }

        let body: GraphResponse<T> = response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("subgraph response parse failed: {}", e))?;

        if let Some(errors) = body.errors {
            if !errors.is_empty() {
                let joined = errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(anyhow::anyhow!("subgraph errors: {}", joined));
            }
        }

        body.data
            .ok_or_else(|| anyhow::anyhow!("subgraph response missing data"))
    }
}
