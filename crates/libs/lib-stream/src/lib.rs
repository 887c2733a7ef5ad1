//! # Stream Engine Library
//!
//! Continuous-swap reconciliation: rate unit conversion, pair matching,
//! replacement-set construction, the collaborator traits the engine runs
//! between, and the subgraph snapshot client.

pub mod gateway;
pub mod matcher;
pub mod rates;
pub mod reconciler;
pub mod service;
pub mod snapshot;
pub mod subgraph;

// Re-export commonly used types
pub use gateway::{SubmissionGateway, SubmissionReceipt};
pub use matcher::find_match;
pub use reconciler::reconcile;
pub use service::SwapService;
pub use snapshot::SnapshotProvider;
pub use subgraph::SubgraphHttpClient;
