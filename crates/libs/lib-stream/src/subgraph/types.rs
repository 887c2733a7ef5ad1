//! # Subgraph API Types
//!
//! Type definitions for subgraph GraphQL responses.

use lib_core::model::{ContinuousSwap, Pool, Token};
use lib_utils::wei::Wei;
use serde::Deserialize;

/// Generic GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphError>>,
}

/// A single GraphQL-level error.
#[derive(Debug, Deserialize)]
pub struct GraphError {
    pub message: String,
}

/// Token record as the subgraph reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenDto {
    pub id: String,
    pub symbol: String,
    pub name: String,
}

impl From<TokenDto> for Token {
    fn from(dto: TokenDto) -> Self {
        Token::new(dto.id, dto.symbol, dto.name)
    }
}

/// Pool record as the subgraph reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolDto {
    pub id: String,
}

impl From<PoolDto> for Pool {
    fn from(dto: PoolDto) -> Self {
        Pool { id: dto.id }
    }
}

/// Active continuous swap as the subgraph reports it.
///
/// Rate fields are decimal token-unit strings; `Wei`'s deserializer parses
/// them into base units directly.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuousSwapDto {
    pub token_in: TokenDto,
    pub token_out: TokenDto,
    pub rate_in: Wei,
    pub min_out: Wei,
    pub max_out: Wei,
}

impl From<ContinuousSwapDto> for ContinuousSwap {
    fn from(dto: ContinuousSwapDto) -> Self {
        ContinuousSwap {
            token_in: dto.token_in.into(),
            token_out: dto.token_out.into(),
            rate_in: dto.rate_in,
            min_out: dto.min_out,
            max_out: dto.max_out,
        }
    }
}

/// `user` payload of the swaps-from-address query.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub continuous_swaps: Vec<ContinuousSwapDto>,
}

/// Data payload of the swaps-from-address query.
///
/// `user` is absent for addresses the subgraph has never seen; that means
/// "no streams yet", not an error.
#[derive(Debug, Deserialize)]
pub struct SwapsFromAddressData {
    pub user: Option<UserDto>,
}

/// Data payload of the all-tokens query.
#[derive(Debug, Deserialize)]
pub struct AllTokensData {
    pub tokens: Vec<TokenDto>,
}

/// Data payload of the all-pools query.
#[derive(Debug, Deserialize)]
pub struct AllPoolsData {
    pub pools: Vec<PoolDto>,
}
