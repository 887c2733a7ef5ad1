//! # Rate Unit Conversion
//!
//! Converts human-entered "amount per period" decimal strings into the
//! per-second base-unit rates the settlement layer consumes, and back for
//! display.
//!
//! Division truncates toward zero (see `lib_utils::wei`), so a converted
//! rate streams at most what the user asked for, never more. The loss is
//! bounded by one base unit per second of the period.

use lib_core::error::{AppError, Result};
use lib_utils::time::TimePeriod;
use lib_utils::wei::Wei;

/// Convert a decimal amount per `period` into a per-second rate.
///
/// Fails with [`AppError::InvalidAmount`] when the string is not a
/// non-negative decimal number. `"0"` is valid and means "stop streaming".
pub fn to_per_second(amount: &str, period: TimePeriod) -> Result<Wei> {
    let parsed = Wei::parse(amount)
        .map_err(|e| AppError::InvalidAmount(format!("'{}' ({})", amount.trim(), e)))?;
    Ok(parsed.div_seconds(period.seconds()))
}

/// Convert an optional bound amount per `period` into a per-second rate.
///
/// Absent or blank bounds mean "no bound" and convert to the zero rate
/// rather than failing; anything else parses as [`to_per_second`] does.
pub fn bound_to_per_second(amount: Option<&str>, period: TimePeriod) -> Result<Wei> {
    match amount {
        None => Ok(Wei::zero()),
        Some(raw) if raw.trim().is_empty() => Ok(Wei::zero()),
        Some(raw) => to_per_second(raw, period),
    }
}

/// Scale a per-second rate back up to per-period terms for display.
pub fn per_period(rate: Wei, period: TimePeriod) -> Wei {
    rate.saturating_mul_seconds(period.seconds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethereum_types::U256;

    #[test]
    fn test_to_per_second_week() {
        let rate = to_per_second("100", TimePeriod::Week).unwrap();
        let expected = Wei::parse("100").unwrap().base_units() / U256::from(604_800u64);
        assert_eq!(rate.base_units(), expected);
    }

    #[test]
    fn test_round_trip_within_truncation_tolerance() {
        for (amount, period) in [
            ("100", TimePeriod::Week),
            ("0.5", TimePeriod::Hour),
            ("1234.567", TimePeriod::Month),
            ("1", TimePeriod::Second),
        ] {
            let original = Wei::parse(amount).unwrap();
            let recovered = per_period(to_per_second(amount, period).unwrap(), period);
            assert!(recovered <= original);
            let lost = original.base_units() - recovered.base_units();
            assert!(
                lost < U256::from(period.seconds()),
                "lost {} base units over {}",
                lost,
                period
            );
        }
    }

    #[test]
    fn test_per_second_period_is_lossless() {
        let rate = to_per_second("123.456", TimePeriod::Second).unwrap();
        assert_eq!(rate, Wei::parse("123.456").unwrap());
    }

    #[test]
    fn test_invalid_amount() {
        assert!(matches!(
            to_per_second("abc", TimePeriod::Day),
            Err(AppError::InvalidAmount(_))
        ));
        assert!(matches!(
            to_per_second("", TimePeriod::Day),
            Err(AppError::InvalidAmount(_))
        ));
        assert!(matches!(
            to_per_second("-5", TimePeriod::Day),
            Err(AppError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_zero_rate_is_valid() {
        assert!(to_per_second("0", TimePeriod::Week).unwrap().is_zero());
    }

    #[test]
    fn test_absent_bounds_convert_to_zero() {
        assert!(bound_to_per_second(None, TimePeriod::Week).unwrap().is_zero());
        assert!(bound_to_per_second(Some(""), TimePeriod::Week).unwrap().is_zero());
        assert!(bound_to_per_second(Some("  "), TimePeriod::Week).unwrap().is_zero());
    }

    #[test]
    fn test_present_bounds_convert_like_rates() {
        let bound = bound_to_per_second(Some("10"), TimePeriod::Day).unwrap();
        assert_eq!(bound, to_per_second("10", TimePeriod::Day).unwrap());
        assert!(matches!(
            bound_to_per_second(Some("oops"), TimePeriod::Day),
            Err(AppError::InvalidAmount(_))
        ));
    }
}
