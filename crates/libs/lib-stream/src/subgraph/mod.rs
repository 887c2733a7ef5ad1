//! # StreamSwap Subgraph Client
//!
//! GraphQL-over-HTTP client for the protocol subgraph: the user's active
//! continuous swaps, the token list, and the pool list. Implements
//! [`SnapshotProvider`](crate::snapshot::SnapshotProvider) for the engine.
//!
//! The client is deliberately thin: one request per call, no caching.
//! Freshness matters more than latency here, since every submission is a
//! full-replacement write built from the snapshot it fetched.

pub mod client;
pub mod swaps;
pub mod tokens;
pub mod types;

pub use client::SubgraphHttpClient;
