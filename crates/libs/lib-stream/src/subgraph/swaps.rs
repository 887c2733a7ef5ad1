//! # Continuous Swap Queries
//!
//! Snapshot fetching for one user's active streams, and the
//! [`SnapshotProvider`] implementation the engine consumes.

use async_trait::async_trait;
use lib_core::error::{AppError, Result};
use lib_core::model::{ContinuousSwap, SwapSnapshot};
use tracing::debug;

use super::client::SubgraphHttpClient;
use super::types::SwapsFromAddressData;
use crate::snapshot::SnapshotProvider;

const SWAPS_FROM_ADDRESS_QUERY: &str = r#"
query SwapsFromAddress($address: String!) {
  user(id: $address) {
    continuousSwaps {
      tokenIn { id symbol name }
      tokenOut { id symbol name }
      rateIn
      minOut
      maxOut
    }
  }
}"#;

impl SubgraphHttpClient {
    /// Fetch all active continuous swaps for an account address.
    ///
    /// Unknown addresses yield an empty set, matching the subgraph's
    /// behavior of materializing users lazily.
    pub async fn continuous_swaps_for(&self, address: &str) -> anyhow::Result<Vec<ContinuousSwap>> {
        // Subgraph entity ids are lowercased addresses
        let address = address.to_lowercase();

        let data: SwapsFromAddressData = self
            .query(
                SWAPS_FROM_ADDRESS_QUERY,
                serde_json::json!({ "address": address }),
            )
            .await?;

        let swaps = data
            .user
            .map(|user| {
                user.continuous_swaps
                    .into_iter()
                    .map(Into::into)
                    .collect::<Vec<ContinuousSwap>>()
            })
            .unwrap_or_default();

        debug!("subgraph: {} active stream(s) for {}", swaps.len(), address);
        Ok(swaps)
    }
}

#[async_trait]
impl SnapshotProvider for SubgraphHttpClient {
    async fn continuous_swaps(&self, account: &str) -> Result<SwapSnapshot> {
        let swaps = self
            .continuous_swaps_for(account)
            .await
            .map_err(|e| AppError::Snapshot(e.to_string()))?;
        Ok(SwapSnapshot::new(account.to_lowercase(), swaps))
    }
}
