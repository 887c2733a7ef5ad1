//! # Swap Pair Matcher
//!
//! Finds the at-most-one active stream for an ordered token pair.

use lib_core::model::{ContinuousSwap, Token};

/// Find the existing stream for the exact `(token_in, token_out)` pair.
///
/// By the one-stream-per-pair invariant there is at most one; the first
/// match wins. O(n) over the snapshot, read-only, no ordering assumed.
pub fn find_match<'a>(
    existing: &'a [ContinuousSwap],
    token_in: &Token,
    token_out: &Token,
) -> Option<&'a ContinuousSwap> {
    existing
        .iter()
        .filter(|cs| cs.token_in.id == token_in.id)
        .find(|cs| cs.token_out.id == token_out.id)
}
