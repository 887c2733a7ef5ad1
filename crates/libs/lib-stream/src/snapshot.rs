//! # Snapshot Provider
//!
//! Inbound collaborator contract: something that can fetch the complete,
//! fully-resolved set of a user's active continuous swaps.

use async_trait::async_trait;
use lib_core::error::Result;
use lib_core::model::SwapSnapshot;

/// Source of a user's current stream set.
///
/// The engine requires a fully-resolved snapshot before reconciling; a
/// "still loading" state is the caller's concern, never represented here.
/// An empty snapshot is a valid result (the user streams nothing yet) and
/// is distinct from a fetch failure.
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Fetch all active continuous swaps for `account`.
    async fn continuous_swaps(&self, account: &str) -> Result<SwapSnapshot>;
}
