//! Parsing and arithmetic for wall-clock times of day.
//!
//! Class start times are stored as 24-hour `HH:MM` strings. This module
//! turns them into a validated [`TimeOfDay`] and back:
//! - `HH:MM` (e.g., `14:05`), one- or two-digit hour
//! - `HH:MM:SS` as rendered by Postgres `time` columns; seconds are ignored

use std::fmt;
use std::str::FromStr;

use crate::error::{FormatError, Result};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// A validated 24-hour time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

/// Morning or afternoon half of a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

impl TimeOfDay {
    /// Midnight, `00:00`.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    /// Build a time from its components, rejecting out-of-range values.
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(FormatError::InvalidTime(format!("{:02}:{:02}", hour, minute)));
        }
        Ok(TimeOfDay {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Build a time from a signed count of minutes since midnight,
    /// wrapping modulo 24 hours in both directions.
    pub fn from_minutes_wrapping(minutes: i64) -> Self {
        let wrapped = minutes.rem_euclid(MINUTES_PER_DAY);
        TimeOfDay {
            hour: (wrapped / 60) as u8,
            minute: (wrapped % 60) as u8,
        }
    }

    /// Parse an `HH:MM` or `HH:MM:SS` string.
    ///
    /// # Examples
    ///
    /// ```
    /// use classbook_core::time_of_day::TimeOfDay;
    ///
    /// let t = TimeOfDay::parse("14:05").unwrap();
    /// assert_eq!(t.hour(), 14);
    /// assert_eq!(t.minute(), 5);
    /// assert!(TimeOfDay::parse("25:00").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let invalid = || FormatError::InvalidTime(input.to_string());

        let parts: Vec<&str> = trimmed.split(':').collect();
        if parts.len() != 2 && parts.len() != 3 {
            return Err(invalid());
        }

        let hour = parse_field(parts[0], 1..=2).ok_or_else(invalid)?;
        let minute = parse_field(parts[1], 2..=2).ok_or_else(invalid)?;
        if let Some(seconds) = parts.get(2) {
            let seconds = parse_field(seconds, 2..=2).ok_or_else(invalid)?;
            if seconds > 59 {
                return Err(invalid());
            }
        }

        TimeOfDay::new(hour, minute).map_err(|_| invalid())
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.hour)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.minute)
    }

    /// Minutes elapsed since midnight.
    pub fn total_minutes(&self) -> i64 {
        i64::from(self.hour) * 60 + i64::from(self.minute)
    }

    /// Add a signed number of minutes, wrapping around midnight.
    ///
    /// Any `i64` is accepted; the offset is reduced to within a day first.
    pub fn add_minutes(&self, minutes: i64) -> Self {
        let offset = minutes.rem_euclid(MINUTES_PER_DAY);
        TimeOfDay::from_minutes_wrapping(self.total_minutes() + offset)
    }

    /// Shift by whole hours, wrapping around midnight. Minutes are kept.
    pub fn shift_hours(&self, hours: i64) -> Self {
        self.add_minutes(hours.rem_euclid(24) * 60)
    }

    /// Hour on a 12-hour clock; 0 and 12 both map to 12.
    pub fn hour12(&self) -> u32 {
        match self.hour % 12 {
            0 => 12,
            h => u32::from(h),
        }
    }

    pub fn meridiem(&self) -> Meridiem {
        if self.hour >= 12 {
            Meridiem::Pm
        } else {
            Meridiem::Am
        }
    }

    /// 12-hour rendering, e.g. `02:05 PM` (padded) or `2:05 PM`.
    pub fn to_12_hour(&self, pad_hour: bool) -> String {
        if pad_hour {
            format!("{:02}:{:02} {}", self.hour12(), self.minute, self.meridiem())
        } else {
            format!("{}:{:02} {}", self.hour12(), self.minute, self.meridiem())
        }
    }
}

/// Renders as zero-padded 24-hour `HH:MM`.
impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        TimeOfDay::parse(s)
    }
}

fn parse_field(field: &str, width: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !width.contains(&field.len()) || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
