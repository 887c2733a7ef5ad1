//! # Swap Records
//!
//! The three shapes a continuous swap takes on its way through the engine:
//!
//! - [`ContinuousSwap`] - an active stream as reported by the settlement
//!   layer. Identity key is the ordered pair `(token_in.id, token_out.id)`;
//!   a user holds at most one per pair.
//! - [`SwapRequest`] - the user's desired change, exactly one form
//!   submission's worth of state. Rates are still human-entered decimal
//!   strings per named period.
//! - [`FlowArgument`] - one entry of the full-replacement set handed to the
//!   submission gateway. All rates are per-second base units, produced
//!   fresh per reconciliation and never mutated afterwards.

use chrono::{DateTime, Utc};
use lib_utils::time::TimePeriod;
use lib_utils::wei::Wei;
use serde::{Deserialize, Serialize};

use super::token::Token;

/// An active continuous swap for one user.
///
/// `rate_in`, `min_out`, and `max_out` are already per-second rates; the
/// reconciler passes them through untouched when carrying a stream forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuousSwap {
    pub token_in: Token,
    pub token_out: Token,
    /// Input rate in token-in per second
    pub rate_in: Wei,
    /// Minimum accepted output rate per second (zero = unbounded)
    pub min_out: Wei,
    /// Maximum accepted output rate per second (zero = unbounded)
    pub max_out: Wei,
}

impl ContinuousSwap {
    /// The ordered token pair identifying this stream.
    pub fn pair(&self) -> (&str, &str) {
        (&self.token_in.id, &self.token_out.id)
    }
}

/// One form submission's worth of desired swap state.
///
/// Immutable once built; the reconciler reads it and nothing else does.
/// `min_out`/`max_out` only take effect while `advanced_enabled` is set,
/// mirroring the form's advanced-options toggle: stale field contents are
/// ignored when the toggle is off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    pub token_in: Token,
    pub token_out: Token,
    /// Human-entered decimal amount of `token_in` per `period`
    pub amount: String,
    pub period: TimePeriod,
    pub advanced_enabled: bool,
    /// Optional minimum output per `period`, decimal string
    pub min_out: Option<String>,
    /// Optional maximum output per `period`, decimal string
    pub max_out: Option<String>,
}

impl SwapRequest {
    /// A request without slippage bounds.
    pub fn new(
        token_in: Token,
        token_out: Token,
        amount: impl Into<String>,
        period: TimePeriod,
    ) -> Self {
        Self {
            token_in,
            token_out,
            amount: amount.into(),
            period,
            advanced_enabled: false,
            min_out: None,
            max_out: None,
        }
    }

    /// Enable advanced options with the given per-period bounds.
    pub fn with_bounds(mut self, min_out: Option<String>, max_out: Option<String>) -> Self {
        self.advanced_enabled = true;
        self.min_out = min_out;
        self.max_out = max_out;
        self
    }
}

/// One entry of the complete desired flow set for a source token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowArgument {
    /// Destination super token address
    pub dest_token: String,
    /// Input rate in source-token base units per second
    pub in_amount: Wei,
    /// Minimum accepted output rate per second (zero = unbounded)
    pub min_out: Wei,
    /// Maximum accepted output rate per second (zero = unbounded)
    pub max_out: Wei,
}

/// A fully-resolved view of one user's active streams.
///
/// Carries the fetch time so callers can log how old the view was at
/// submission; the engine itself never runs on a partially-loaded set.
#[derive(Debug, Clone)]
pub struct SwapSnapshot {
    /// User account address the snapshot belongs to
    pub account: String,
    pub swaps: Vec<ContinuousSwap>,
    pub fetched_at: DateTime<Utc>,
}

impl SwapSnapshot {
    pub fn new(account: impl Into<String>, swaps: Vec<ContinuousSwap>) -> Self {
        Self {
            account: account.into(),
            swaps,
            fetched_at: lib_utils::now_utc(),
        }
    }
}
