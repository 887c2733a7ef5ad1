//! # Utilities Library
//!
//! Shared leaf utilities: fixed-point token amounts, stream time periods,
//! time helpers, and input validation.

pub mod time;
pub mod validation;
pub mod wei;

// Re-export commonly used types and functions
pub use time::{now_utc, TimePeriod};
pub use validation::validate_address;
pub use wei::Wei;
