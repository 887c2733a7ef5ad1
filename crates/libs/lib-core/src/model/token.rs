//! # Token Reference Data
//!
//! Immutable token and pool records fetched from the subgraph.

use serde::{Deserialize, Serialize};

/// A super token known to the protocol.
///
/// `id` is the chain address and the only identity used anywhere in the
/// engine; `symbol` and `name` are display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Chain address, unique per token
    pub id: String,
    /// Ticker symbol (e.g. "DAI")
    pub symbol: String,
    /// Display name (e.g. "Dai Stablecoin")
    pub name: String,
}

impl Token {
    pub fn new(id: impl Into<String>, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{} ({})", self.symbol, self.id)
    }
}

/// A settlement pool flow updates are submitted against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    /// Pool contract address
    pub id: String,
}
