//! # Submission Gateway
//!
//! Outbound collaborator contract: the component that turns a reconciled
//! flow set into an on-chain update. Transaction encoding, signing, and
//! broadcast live behind this trait, not in the engine.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lib_core::error::Result;
use lib_core::model::FlowArgument;

/// Result of a successful flow-set submission.
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    /// Transaction hash reported by the settlement layer
    pub tx_hash: String,
    pub submitted_at: DateTime<Utc>,
}

/// On-chain flow update collaborator.
///
/// `args` is the complete desired flow set for `source_token`: full
/// replacement, not a patch. The engine invokes this exactly once per
/// user-initiated submit and never retries: re-submitting a
/// full-replacement write after a failure risks pushing stale state, so
/// failures propagate unchanged for the user to resolve.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    async fn submit(
        &self,
        source_token: &str,
        pool: &str,
        account: &str,
        args: &[FlowArgument],
    ) -> Result<SubmissionReceipt>;
}
