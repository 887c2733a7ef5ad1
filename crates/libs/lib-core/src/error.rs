//! # Centralized Error Handling
//!
//! This module defines the application-wide error type [`AppError`] used
//! consistently across the workspace. It follows the `thiserror` pattern for
//! ergonomic error handling.
//!
//! ## Design Philosophy
//!
//! - **Single Error Type**: All crates use `AppError` for consistency
//! - **Descriptive Messages**: Each variant includes a context string
//! - **All-or-Nothing**: Validation errors block a submission entirely;
//!   no partial flow list ever escapes a failed reconciliation
//! - **No Retry**: Collaborator failures propagate unchanged; retrying a
//!   full-replacement write risks re-submitting stale state
//!
//! ## Error Categories
//!
//! 1. **Validation errors** - user/input issues that disable submission:
//!    [`InvalidAmount`](AppError::InvalidAmount),
//!    [`SameToken`](AppError::SameToken)
//! 2. **Precondition errors** - the snapshot itself is inconsistent:
//!    [`DuplicateStream`](AppError::DuplicateStream)
//! 3. **Collaborator errors** - inbound/outbound boundary failures:
//!    [`Snapshot`](AppError::Snapshot), [`Decoding`](AppError::Decoding),
//!    [`Submission`](AppError::Submission)
//! 4. **Ambient errors** - [`Config`](AppError::Config),
//!    [`Internal`](AppError::Internal)
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn check_pair(token_in: &str, token_out: &str) -> Result<()> {
//!     if token_in == token_out {
//!         return Err(AppError::SameToken(token_in.to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type covering all error scenarios.
///
/// Each variant includes a descriptive `String` for context. The `#[error]`
/// attribute from `thiserror` provides the `Display` implementation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A rate or bound string failed decimal parsing.
    ///
    /// Blocks submission entirely; the message names the offending field
    /// and value so the UI can show it verbatim.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The requested swap has identical source and destination tokens.
    #[error("Source and destination token are the same: {0}")]
    SameToken(String),

    /// The snapshot holds more than one stream for an ordered token pair.
    ///
    /// The one-stream-per-pair invariant is a reconciliation precondition;
    /// proceeding would silently duplicate flows.
    #[error("Duplicate continuous swap for pair: {0}")]
    DuplicateStream(String),

    /// Failure fetching the existing-swaps snapshot from its provider.
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Malformed payload from a collaborator (subgraph response, etc).
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Propagated unchanged from the submission gateway (wallet rejection,
    /// network failure). The caller must resolve the cause and re-submit.
    #[error("Submission error: {0}")]
    Submission(String),

    /// Internal error (unexpected failures).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether this error is a pre-submission validation failure the user
    /// can fix by editing the request.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::InvalidAmount(_) | AppError::SameToken(_))
    }

    /// Get a user-friendly error message.
    ///
    /// For internal errors, returns a generic message to avoid exposing
    /// implementation details.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidAmount(msg) => format!("Invalid amount: {}", msg),
            AppError::SameToken(_) => "In = Out Token".to_string(),
            AppError::DuplicateStream(msg) => {
                format!("Account already has duplicate streams for {}", msg)
            }
            AppError::Submission(msg) => format!("Submission failed: {}", msg),
            AppError::Snapshot(_) | AppError::Decoding(_) => {
                "Service temporarily unavailable".to_string()
            }
            AppError::Config(_) | AppError::Internal(_) => "An internal error occurred".to_string(),
        }
    }
}

/// Convert `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decoding(format!("JSON error: {}", err))
    }
}
