//! # Domain Model
//!
//! Data types for continuous swaps: reference token data, the user's active
//! stream set, the ephemeral swap request, and the flow arguments the
//! settlement layer consumes.

pub mod swap;
pub mod token;

pub use swap::{ContinuousSwap, FlowArgument, SwapRequest, SwapSnapshot};
pub use token::{Pool, Token};
