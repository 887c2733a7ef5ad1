//! # Token and Pool Queries
//!
//! Reference-data lookups against the subgraph.

use lib_core::model::{Pool, Token};

use super::client::SubgraphHttpClient;
use super::types::{AllPoolsData, AllTokensData};

const ALL_TOKENS_QUERY: &str = r#"
query AllTokens {
  tokens {
    id
    symbol
    name
  }
}"#;

const ALL_POOLS_QUERY: &str = r#"
query AllPools {
  pools {
    id
  }
}"#;

impl SubgraphHttpClient {
    /// Fetch the complete super token list.
    pub async fn all_tokens(&self) -> anyhow::Result<Vec<Token>> {
        let data: AllTokensData = self
            .query(ALL_TOKENS_QUERY, serde_json::Value::Null)
            .await?;
        Ok(data.tokens.into_iter().map(Into::into).collect())
    }

    /// Fetch the settlement pool list.
    pub async fn all_pools(&self) -> anyhow::Result<Vec<Pool>> {
        let data: AllPoolsData = self.query(ALL_POOLS_QUERY, serde_json::Value::Null).await?;
        Ok(data.pools.into_iter().map(Into::into).collect())
    }

    /// Resolve a token by address or ticker symbol (case-insensitive).
    pub async fn resolve_token(&self, needle: &str) -> anyhow::Result<Token> {
        let tokens = self.all_tokens().await?;
        tokens
            .into_iter()
            .find(|t| t.id.eq_ignore_ascii_case(needle) || t.symbol.eq_ignore_ascii_case(needle))
            .ok_or_else(|| anyhow::anyhow!("unknown token '{}'", needle))
    }
}
