//! # Swap Service
//!
//! Business logic for continuous swaps: fetches the user's current stream
//! snapshot, reconciles it with the requested change, and hands the full
//! replacement set to the submission gateway.
//!
//! ## Architecture
//!
//! ```text
//! SwapService → SnapshotProvider (subgraph)   [inbound]
//!             → reconcile(...)                [pure]
//!             → SubmissionGateway (on-chain)  [outbound]
//! ```
//!
//! Both collaborators are injected as trait objects, so the service is
//! deterministic under test with stub implementations.
//!
//! ## Concurrency
//!
//! Each call runs on an independent snapshot and is safe to run
//! concurrently for *different* users. A single user must not have two
//! submissions in flight: the later full-replacement write would silently
//! drop the earlier change. That serialization (e.g. disabling the submit
//! action while one is outstanding) is the caller's responsibility; the
//! service does not enforce it.

use std::sync::Arc;

use lib_core::error::Result;
use lib_core::model::{ContinuousSwap, FlowArgument, SwapRequest, SwapSnapshot};
use tracing::{debug, instrument};

use crate::gateway::{SubmissionGateway, SubmissionReceipt};
use crate::matcher::find_match;
use crate::reconciler::reconcile;
use crate::snapshot::SnapshotProvider;

/// Service for continuous-swap planning and submission.
pub struct SwapService {
    provider: Arc<dyn SnapshotProvider>,
    gateway: Arc<dyn SubmissionGateway>,
}

impl SwapService {
    /// Create a new swap service over injected collaborators.
    pub fn new(provider: Arc<dyn SnapshotProvider>, gateway: Arc<dyn SubmissionGateway>) -> Self {
        Self { provider, gateway }
    }

    /// Compute the replacement flow set without submitting anything.
    ///
    /// Drives dry-run tooling and the pre-submit view. Fetches a fresh
    /// snapshot on every call.
    #[instrument(skip(self, request), fields(account = %account, token_in = %request.token_in.symbol, token_out = %request.token_out.symbol))]
    pub async fn preview(&self, account: &str, request: &SwapRequest) -> Result<Vec<FlowArgument>> {
        let snapshot = self.fetch_snapshot(account).await?;
        reconcile(&snapshot.swaps, request)
    }

    /// The existing stream for the requested pair, if any.
    ///
    /// Surfaces the "this pair already streams and will be updated" notice
    /// before the user commits.
    pub async fn existing_for_pair(
        &self,
        account: &str,
        request: &SwapRequest,
    ) -> Result<Option<ContinuousSwap>> {
        let snapshot = self.fetch_snapshot(account).await?;
        Ok(find_match(&snapshot.swaps, &request.token_in, &request.token_out).cloned())
    }

    /// Reconcile and submit the full replacement flow set.
    ///
    /// The snapshot is re-fetched immediately before reconciling so the
    /// replacement set is built from the freshest available view of chain
    /// state. The gateway is invoked exactly once; its errors propagate
    /// unchanged and nothing is retried.
    #[instrument(skip(self, request), fields(account = %account, pool = %pool, token_in = %request.token_in.symbol, token_out = %request.token_out.symbol))]
    pub async fn execute_swap(
        &self,
        account: &str,
        pool: &str,
        request: &SwapRequest,
    ) -> Result<SubmissionReceipt> {
        let snapshot = self.fetch_snapshot(account).await?;
        let args = reconcile(&snapshot.swaps, request)?;

        debug!(
            flows = args.len(),
            source = %request.token_in.id,
            "submitting replacement flow set"
        );
        self.gateway
            .submit(&request.token_in.id, pool, account, &args)
            .await
    }

    async fn fetch_snapshot(&self, account: &str) -> Result<SwapSnapshot> {
        let snapshot = self.provider.continuous_swaps(account).await?;
        debug!(
            streams = snapshot.swaps.len(),
            fetched_at = %snapshot.fetched_at,
            "resolved swap snapshot"
        );
        Ok(snapshot)
    }
}
