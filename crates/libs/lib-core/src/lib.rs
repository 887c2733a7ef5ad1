//! # Core Library
//!
//! Domain model, configuration, and the application error type shared by
//! the stream engine and its tooling.

pub mod config;
pub mod error;
pub mod model;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
pub use model::{ContinuousSwap, FlowArgument, Pool, SwapRequest, SwapSnapshot, Token};
