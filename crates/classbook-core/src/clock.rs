//! The "now" capability.
//!
//! Functions that depend on the current time take a [`Clock`] instead of
//! reading the system clock, so the rest of the library stays pure.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::Result;
use crate::tz::{DEFAULT_BASE_TZ, parse_tz};

/// Source of the current instant, in the school's local offset.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;

    /// The local calendar date at [`Clock::now`].
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Reads the system clock and converts it into an IANA timezone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        SystemClock { tz }
    }

    /// Clock in the named IANA timezone.
    pub fn in_zone(name: &str) -> Result<Self> {
        Ok(SystemClock::new(parse_tz(name)?))
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        SystemClock::new(DEFAULT_BASE_TZ.parse().unwrap_or(Tz::UTC))
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.tz).fixed_offset()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    /// Parse an RFC3339 timestamp, keeping its offset.
    pub fn parse(rfc3339: &str) -> Result<Self> {
        DateTime::parse_from_rfc3339(rfc3339.trim())
            .map(FixedClock)
            .map_err(|_| crate::error::FormatError::InvalidDate(rfc3339.to_string()))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_keeps_offset() {
        let clock = FixedClock::parse("2026-03-02T23:30:00+02:00").unwrap();
        assert_eq!(clock.now().to_rfc3339(), "2026-03-02T23:30:00+02:00");
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
    }

    #[test]
    fn fixed_clock_rejects_garbage() {
        assert!(FixedClock::parse("yesterday").is_err());
    }

    #[test]
    fn system_clock_defaults_to_cairo() {
        assert_eq!(SystemClock::default().tz().to_string(), "Africa/Cairo");
    }

    #[test]
    fn system_clock_zone_by_name() {
        let clock = SystemClock::in_zone("Asia/Dubai").unwrap();
        assert_eq!(clock.tz().to_string(), "Asia/Dubai");
        assert!(SystemClock::in_zone("Mars/Olympus").is_err());
    }

    #[test]
    fn clock_by_reference() {
        let clock = FixedClock::parse("2026-03-02T10:00:00Z").unwrap();
        let by_ref: &dyn Clock = &clock;
        assert_eq!(by_ref.now(), clock.now());
    }
}
