//! # Fixed-Point Token Amounts
//!
//! `Wei` is an 18-decimal fixed-point amount backed by `U256`, matching the
//! base-unit scale of the settlement layer. All token rates in the system
//! (per-period user input and per-second stream rates alike) are held in this
//! representation.
//!
//! ## Rounding
//!
//! Every lossy operation truncates toward zero:
//! - [`Wei::parse`] drops fractional digits past the 18th;
//! - [`Wei::div_seconds`] is integer division.
//!
//! Truncation is deterministic and errs on the side of streaming slightly
//! less than requested, never more.
//!
//! ## Usage
//!
//! ```rust
//! use lib_utils::wei::Wei;
//!
//! let rate = Wei::parse("100").unwrap();
//! let per_second = rate.div_seconds(604_800); // weekly rate -> per second
//! assert_eq!(per_second.to_string(), "0.000165343915343915");
//! ```

use ethereum_types::U256;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of decimal places in the fixed-point scale.
pub const DECIMALS: usize = 18;

fn scale() -> U256 {
    U256::exp10(DECIMALS)
}

/// An 18-decimal fixed-point token amount.
///
/// Wraps the raw base-unit count. Construction from user input goes through
/// [`Wei::parse`], which only accepts non-negative decimal strings.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Wei(U256);

impl Wei {
    /// The zero amount.
    pub fn zero() -> Self {
        Wei(U256::zero())
    }

    /// Construct from a raw base-unit count.
    pub fn from_base_units(units: U256) -> Self {
        Wei(units)
    }

    /// The raw base-unit count.
    pub fn base_units(&self) -> U256 {
        self.0
    }

    /// Whether this amount is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Parse a non-negative decimal string into a fixed-point amount.
    ///
    /// Accepts plain digit strings with at most one `.` separator, e.g.
    /// `"100"`, `"0.5"`, `".5"`, `"12."`. Fractional digits past the 18th
    /// are truncated. Signs, exponents, and any other characters are
    /// rejected, as are empty strings.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyAmount);
        }

        let (int_part, frac_part) = match trimmed.split_once('.') {
            Some((int, frac)) => (int, frac),
            None => (trimmed, ""),
        };

        // "." alone carries no digits at all
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(Error::InvalidDecimal(input.to_string()));
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(Error::InvalidDecimal(input.to_string()));
        }

        let int_units = if int_part.is_empty() {
            U256::zero()
        } else {
            U256::from_dec_str(int_part)
                .map_err(|_| Error::Overflow(input.to_string()))?
                .checked_mul(scale())
                .ok_or_else(|| Error::Overflow(input.to_string()))?
        };

        let frac_digits = &frac_part[..frac_part.len().min(DECIMALS)];
        let frac_units = if frac_digits.is_empty() {
            U256::zero()
        } else {
            let mut padded = frac_digits.to_string();
            padded.push_str(&"0".repeat(DECIMALS - frac_digits.len()));
            U256::from_dec_str(&padded).map_err(|_| Error::InvalidDecimal(input.to_string()))?
        };

        int_units
            .checked_add(frac_units)
            .map(Wei)
            .ok_or_else(|| Error::Overflow(input.to_string()))
    }

    /// Divide by a period length in seconds, truncating toward zero.
    ///
    /// `seconds` must be positive; period tables guarantee this.
    pub fn div_seconds(self, seconds: u64) -> Self {
        Wei(self.0 / U256::from(seconds))
    }

    /// Multiply back by a period length in seconds, saturating at the
    /// representable maximum. Used to display per-second rates in
    /// per-period terms.
    pub fn saturating_mul_seconds(self, seconds: u64) -> Self {
        Wei(self.0.saturating_mul(U256::from(seconds)))
    }
}

impl fmt::Display for Wei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int = self.0 / scale();
        let frac = self.0 % scale();
        if frac.is_zero() {
            return write!(f, "{}", int);
        }
        let digits = frac.to_string();
        let mut padded = "0".repeat(DECIMALS - digits.len());
        padded.push_str(&digits);
        let trimmed = padded.trim_end_matches('0');
        write!(f, "{}.{}", int, trimmed)
    }
}

impl fmt::Debug for Wei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wei({})", self)
    }
}

impl FromStr for Wei {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Wei::parse(s)
    }
}

impl Serialize for Wei {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Wei {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Wei::parse(&raw).map_err(D::Error::custom)
    }
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    EmptyAmount,
    InvalidDecimal(String),
    Overflow(String),
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
