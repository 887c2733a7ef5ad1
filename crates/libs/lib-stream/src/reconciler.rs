//! # Continuous-Swap Reconciler
//!
//! The orchestration core: given the user's current stream set and one swap
//! request, produce the complete replacement list of flow arguments for the
//! request's source token.
//!
//! ## Semantics
//!
//! The output is the *full* desired state for that source token, not a
//! delta. Every untouched stream is carried forward with its stored
//! per-second rates passed through verbatim; the stream matching the
//! requested pair (if any) is replaced in place; otherwise the new entry is
//! appended. Conversion of the request happens before any argument is
//! built, so a malformed amount aborts with no partial list.
//!
//! Reconciliation is a pure function over its snapshot inputs: no I/O, no
//! shared state, idempotent for identical inputs. Callers must serialize
//! submissions per user; two in-flight reconciliations against different
//! snapshots are a read-modify-write race the engine cannot detect.

use std::collections::HashSet;

use lib_core::error::{AppError, Result};
use lib_core::model::{ContinuousSwap, FlowArgument, SwapRequest};
use lib_utils::wei::Wei;
use tracing::debug;

use crate::matcher::find_match;
use crate::rates;

/// Build the full replacement flow set for the request's source token.
///
/// # Errors
///
/// - [`AppError::SameToken`] - source and destination are identical;
///   rejected before anything is built.
/// - [`AppError::DuplicateStream`] - the snapshot violates the
///   one-stream-per-pair invariant. Proceeding would silently duplicate
///   flows, so this is checked, not assumed.
/// - [`AppError::InvalidAmount`] - the rate or an enabled bound fails
///   decimal parsing. All-or-nothing: no list is returned.
pub fn reconcile(existing: &[ContinuousSwap], request: &SwapRequest) -> Result<Vec<FlowArgument>> {
    if request.token_in.id == request.token_out.id {
        return Err(AppError::SameToken(request.token_in.id.clone()));
    }
    ensure_one_stream_per_pair(existing)?;

    let matched = find_match(existing, &request.token_in, &request.token_out).is_some();

    // Convert the request before touching the carried-forward set.
    let requested = request_argument(request)?;

    // Only streams sharing the request's source token belong to this flow
    // set; streams from other source tokens are separate submissions.
    let relevant: Vec<&ContinuousSwap> = existing
        .iter()
        .filter(|cs| cs.token_in.id == request.token_in.id)
        .collect();

    let mut args = Vec::with_capacity(relevant.len() + 1);
    for swap in &relevant {
        if swap.token_out.id == request.token_out.id {
            // The matched pair's slot is replaced in place, keeping the
            // carried-forward ordering stable.
            args.push(requested.clone());
        } else {
            // Already a per-second rate; passed through, never re-derived.
            args.push(FlowArgument {
                dest_token: swap.token_out.id.clone(),
                in_amount: swap.rate_in,
                min_out: swap.min_out,
                max_out: swap.max_out,
            });
        }
    }
    if !matched {
        args.push(requested);
    }

    debug!(
        source = %request.token_in.id,
        flows = args.len(),
        replaced = matched,
        "reconciled replacement flow set"
    );
    Ok(args)
}

/// Convert the request's own fields into its flow argument.
///
/// A zero parsed rate is a legitimate value ("stop streaming this pair")
/// and is kept, not dropped. With advanced options off, min/max are forced
/// to zero regardless of whatever stale text the fields hold.
fn request_argument(request: &SwapRequest) -> Result<FlowArgument> {
    let in_amount = rates::to_per_second(&request.amount, request.period)?;

    let (min_out, max_out) = if request.advanced_enabled {
        (
            rates::bound_to_per_second(request.min_out.as_deref(), request.period)?,
            rates::bound_to_per_second(request.max_out.as_deref(), request.period)?,
        )
    } else {
        (Wei::zero(), Wei::zero())
    };

    Ok(FlowArgument {
        dest_token: request.token_out.id.clone(),
        in_amount,
        min_out,
        max_out,
    })
}

fn ensure_one_stream_per_pair(existing: &[ContinuousSwap]) -> Result<()> {
    let mut seen = HashSet::new();
    for swap in existing {
        if !seen.insert(swap.pair()) {
            return Err(AppError::DuplicateStream(format!(
                "{} -> {}",
                swap.token_in.id, swap.token_out.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_core::model::Token;
    use lib_utils::time::TimePeriod;

    fn dai() -> Token {
        Token::new("0xdai", "DAI", "Dai Stablecoin")
    }

    fn usdc() -> Token {
        Token::new("0xusdc", "USDC", "USD Coin")
    }

    fn weth() -> Token {
        Token::new("0xweth", "WETH", "Wrapped Ether")
    }

    fn stream(token_in: Token, token_out: Token, rate: &str) -> ContinuousSwap {
        ContinuousSwap {
            token_in,
            token_out,
            rate_in: Wei::parse(rate).unwrap(),
            min_out: Wei::zero(),
            max_out: Wei::zero(),
        }
    }

    fn per_second(amount: &str, period: TimePeriod) -> Wei {
        rates::to_per_second(amount, period).unwrap()
    }

    #[test]
    fn test_fresh_pair_appends_single_entry() {
        let request = SwapRequest::new(dai(), usdc(), "100", TimePeriod::Week);
        let args = reconcile(&[], &request).unwrap();

        assert_eq!(args.len(), 1);
        assert_eq!(args[0].dest_token, "0xusdc");
        assert_eq!(args[0].in_amount, per_second("100", TimePeriod::Week));
        assert!(args[0].min_out.is_zero());
        assert!(args[0].max_out.is_zero());
    }

    #[test]
    fn test_matched_pair_is_replaced_with_bounds() {
        let existing = vec![stream(dai(), usdc(), "0.001")];
        let request = SwapRequest::new(dai(), usdc(), "50", TimePeriod::Day)
            .with_bounds(Some("10".into()), Some("60".into()));

        let args = reconcile(&existing, &request).unwrap();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].dest_token, "0xusdc");
        assert_eq!(args[0].in_amount, per_second("50", TimePeriod::Day));
        assert_eq!(args[0].min_out, per_second("10", TimePeriod::Day));
        assert_eq!(args[0].max_out, per_second("60", TimePeriod::Day));
    }

    #[test]
    fn test_unmatched_pair_carries_others_unchanged() {
        let existing = vec![stream(dai(), usdc(), "0.001")];
        let request = SwapRequest::new(dai(), weth(), "1", TimePeriod::Hour);

        let args = reconcile(&existing, &request).unwrap();
        assert_eq!(args.len(), 2);

        // Carried forward verbatim, not re-derived
        assert_eq!(args[0].dest_token, "0xusdc");
        assert_eq!(args[0].in_amount, Wei::parse("0.001").unwrap());

        assert_eq!(args[1].dest_token, "0xweth");
        assert_eq!(args[1].in_amount, per_second("1", TimePeriod::Hour));
    }

    #[test]
    fn test_streams_from_other_source_tokens_excluded() {
        let existing = vec![
            stream(dai(), usdc(), "0.001"),
            stream(usdc(), weth(), "0.002"),
        ];
        let request = SwapRequest::new(dai(), weth(), "1", TimePeriod::Hour);

        let args = reconcile(&existing, &request).unwrap();
        assert_eq!(args.len(), 2);
        // The USDC->WETH stream belongs to a different source-token flow
        // set; the WETH entry here is the new request, not a carry-over.
        assert_eq!(args[0].dest_token, "0xusdc");
        assert_eq!(args[1].dest_token, "0xweth");
        assert_eq!(args[1].in_amount, per_second("1", TimePeriod::Hour));
    }

    #[test]
    fn test_replacement_keeps_slot_order() {
        let existing = vec![
            stream(dai(), weth(), "0.002"),
            stream(dai(), usdc(), "0.001"),
        ];
        let request = SwapRequest::new(dai(), weth(), "7", TimePeriod::Day);

        let args = reconcile(&existing, &request).unwrap();
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].dest_token, "0xweth");
        assert_eq!(args[0].in_amount, per_second("7", TimePeriod::Day));
        assert_eq!(args[1].dest_token, "0xusdc");
        assert_eq!(args[1].in_amount, Wei::parse("0.001").unwrap());
    }

    #[test]
    fn test_idempotent_for_same_snapshot() {
        let existing = vec![
            stream(dai(), usdc(), "0.001"),
            stream(dai(), weth(), "0.002"),
        ];
        let request = SwapRequest::new(dai(), usdc(), "50", TimePeriod::Day);

        let first = reconcile(&existing, &request).unwrap();
        let second = reconcile(&existing, &request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_same_token_rejected_before_building() {
        let request = SwapRequest::new(dai(), dai(), "100", TimePeriod::Week);
        assert!(matches!(
            reconcile(&[], &request),
            Err(AppError::SameToken(_))
        ));
    }

    #[test]
    fn test_duplicate_pair_snapshot_rejected() {
        let existing = vec![
            stream(dai(), usdc(), "0.001"),
            stream(dai(), usdc(), "0.002"),
        ];
        let request = SwapRequest::new(dai(), weth(), "1", TimePeriod::Hour);
        assert!(matches!(
            reconcile(&existing, &request),
            Err(AppError::DuplicateStream(_))
        ));
    }

    #[test]
    fn test_invalid_amount_aborts_without_partial_list() {
        let existing = vec![stream(dai(), usdc(), "0.001")];
        let request = SwapRequest::new(dai(), weth(), "not-a-number", TimePeriod::Hour);
        assert!(matches!(
            reconcile(&existing, &request),
            Err(AppError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_invalid_enabled_bound_aborts() {
        let request = SwapRequest::new(dai(), usdc(), "50", TimePeriod::Day)
            .with_bounds(Some("nope".into()), None);
        assert!(matches!(
            reconcile(&[], &request),
            Err(AppError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_disabled_advanced_zeroes_stale_bounds() {
        let mut request = SwapRequest::new(dai(), usdc(), "50", TimePeriod::Day);
        // Stale text left behind after toggling advanced options off
        request.min_out = Some("10".into());
        request.max_out = Some("garbage".into());

        let args = reconcile(&[], &request).unwrap();
        assert!(args[0].min_out.is_zero());
        assert!(args[0].max_out.is_zero());
    }

    #[test]
    fn test_zero_rate_submitted_not_dropped() {
        let existing = vec![stream(dai(), usdc(), "0.001")];
        let request = SwapRequest::new(dai(), usdc(), "0", TimePeriod::Week);

        let args = reconcile(&existing, &request).unwrap();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].dest_token, "0xusdc");
        assert!(args[0].in_amount.is_zero());
    }
}
