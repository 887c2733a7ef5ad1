//! # Time Utilities
//!
//! Stream time periods and chrono helpers.
//!
//! [`TimePeriod`] is the fixed set of named durations a user can express a
//! stream rate against ("100 DAI per week"). The seconds mapping is total
//! and constant for the process lifetime; every value is a positive whole
//! number of seconds. A month is exactly 30 days.

use chrono::{DateTime, Utc};

/// A named duration used to express stream rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
}

impl TimePeriod {
    /// All periods, in ascending length. Drives selector UIs and CLI help.
    pub const ALL: [TimePeriod; 6] = [
        TimePeriod::Second,
        TimePeriod::Minute,
        TimePeriod::Hour,
        TimePeriod::Day,
        TimePeriod::Week,
        TimePeriod::Month,
    ];

    /// The exact length of this period in seconds.
    pub fn seconds(self) -> u64 {
        match self {
            TimePeriod::Second => 1,
            TimePeriod::Minute => 60,
            TimePeriod::Hour => 3_600,
            TimePeriod::Day => 86_400,
            TimePeriod::Week => 604_800,
            TimePeriod::Month => 2_592_000,
        }
    }

    /// Lowercase name, as shown in rate selectors ("/week").
    pub fn as_str(self) -> &'static str {
        match self {
            TimePeriod::Second => "second",
            TimePeriod::Minute => "minute",
            TimePeriod::Hour => "hour",
            TimePeriod::Day => "day",
            TimePeriod::Week => "week",
            TimePeriod::Month => "month",
        }
    }
}

impl std::fmt::Display for TimePeriod {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        fmt.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimePeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "second" => Ok(TimePeriod::Second),
            "minute" => Ok(TimePeriod::Minute),
            "hour" => Ok(TimePeriod::Hour),
            "day" => Ok(TimePeriod::Day),
            "week" => Ok(TimePeriod::Week),
            "month" => Ok(TimePeriod::Month),
            _ => Err(Error::FailToParsePeriod(s.to_string())),
        }
    }
}

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    FailToParsePeriod(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_mapping() {
        assert_eq!(TimePeriod::Second.seconds(), 1);
        assert_eq!(TimePeriod::Hour.seconds(), 3_600);
        assert_eq!(TimePeriod::Week.seconds(), 604_800);
        assert_eq!(TimePeriod::Month.seconds(), 2_592_000);
        for period in TimePeriod::ALL {
            assert!(period.seconds() > 0);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("week".parse::<TimePeriod>().unwrap(), TimePeriod::Week);
        assert_eq!("Day".parse::<TimePeriod>().unwrap(), TimePeriod::Day);
        assert!("fortnight".parse::<TimePeriod>().is_err());
    }

    #[test]
    fn test_round_trip_names() {
        for period in TimePeriod::ALL {
            assert_eq!(period.as_str().parse::<TimePeriod>().unwrap(), period);
        }
    }
}
