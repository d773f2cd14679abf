//! Game clock types.

use crate::error::ClockTimeError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub const MINS_PER_QUARTER: u32 = 12;
pub const SECS_PER_QUARTER: u32 = MINS_PER_QUARTER * 60;

static CLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0?[0-9]|1[0-2]):([0-5][0-9])$").expect("clock pattern is a valid regex")
});

/// Time remaining in the current quarter, in whole seconds.
///
/// The game clock counts down from `12:00` (720 seconds) to `0:00`, so a
/// larger value is *earlier* in the quarter. Parsed from `M:SS` strings:
///
/// ```rust
/// use nba_shots::ClockTime;
///
/// let t: ClockTime = "5:07".parse().unwrap();
/// assert_eq!(t.as_secs(), 307);
/// assert_eq!(t.to_string(), "5:07");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClockTime(u32);

impl ClockTime {
    /// Full quarter remaining, `12:00`.
    pub const QUARTER_START: ClockTime = ClockTime(SECS_PER_QUARTER);
    /// Buzzer, `0:00`.
    pub const BUZZER: ClockTime = ClockTime(0);

    pub fn from_secs(secs: u32) -> Result<Self, ClockTimeError> {
        if secs > SECS_PER_QUARTER {
            return Err(ClockTimeError::OutOfRange(secs));
        }
        Ok(Self(secs))
    }

    pub fn as_secs(&self) -> u32 {
        self.0
    }

    pub fn minutes(&self) -> u32 {
        self.0 / 60
    }

    pub fn seconds(&self) -> u32 {
        self.0 % 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes(), self.seconds())
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = CLOCK_PATTERN
            .captures(s)
            .ok_or_else(|| ClockTimeError::Format(s.to_string()))?;

        // The pattern bounds both groups to at most two digits
        let minutes: u32 = caps[1]
            .parse()
            .map_err(|_| ClockTimeError::Format(s.to_string()))?;
        let seconds: u32 = caps[2]
            .parse()
            .map_err(|_| ClockTimeError::Format(s.to_string()))?;

        Self::from_secs(minutes * 60 + seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quarter_bounds() {
        assert_eq!("12:00".parse::<ClockTime>().unwrap().as_secs(), 720);
        assert_eq!("0:00".parse::<ClockTime>().unwrap().as_secs(), 0);
        assert_eq!("12:00".parse::<ClockTime>().unwrap(), ClockTime::QUARTER_START);
        assert_eq!("0:00".parse::<ClockTime>().unwrap(), ClockTime::BUZZER);
    }

    #[test]
    fn test_parse_leading_zero_minutes() {
        assert_eq!("05:30".parse::<ClockTime>().unwrap().as_secs(), 330);
        assert_eq!("5:30".parse::<ClockTime>().unwrap().as_secs(), 330);
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(
            "12:01".parse::<ClockTime>(),
            Err(ClockTimeError::OutOfRange(721))
        );
        assert_eq!(
            "12:59".parse::<ClockTime>(),
            Err(ClockTimeError::OutOfRange(779))
        );
    }

    #[test]
    fn test_parse_format_errors() {
        for bad in ["13:00", "5:7", "5:60", "", "5", ":30", "5:30:00", "-1:00", " 5:30", "a:bc"] {
            assert_eq!(
                bad.parse::<ClockTime>(),
                Err(ClockTimeError::Format(bad.to_string())),
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn test_minutes_seconds_reconstruct_total() {
        for secs in [0, 1, 59, 60, 307, 719, 720] {
            let t = ClockTime::from_secs(secs).unwrap();
            assert_eq!(t.minutes() * 60 + t.seconds(), secs);

            let reparsed: ClockTime = t.to_string().parse().unwrap();
            assert_eq!(reparsed, t);
        }
    }

    #[test]
    fn test_from_secs_rejects_over_quarter() {
        assert_eq!(
            ClockTime::from_secs(721),
            Err(ClockTimeError::OutOfRange(721))
        );
    }
}
