//! Display formatting for class times and dates.
//!
//! Every operation comes in two flavours:
//! - `try_*` returns a [`Result`] so callers can tell a formatted value
//!   from a failure;
//! - the plain name renders failures as a fixed sentinel (`"Invalid time"`,
//!   `"Invalid date"`), which is what UI text interpolates directly.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Timelike, Utc, Weekday};
use serde::Serialize;

use crate::clock::Clock;
use crate::error::{FormatError, Result, or_sentinel};
use crate::time_of_day::TimeOfDay;
use crate::tz::StudentZone;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * 60;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

/// Wall-clock snapshot for page headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentDateTime {
    /// e.g. `Monday, Mar 2, 2026`
    pub date: String,
    /// e.g. `09:05 AM`
    pub time: String,
}

/// Fallible [`format_time_12_hour`].
pub fn try_format_time_12_hour(time: &str) -> Result<String> {
    Ok(TimeOfDay::parse(time)?.to_12_hour(true))
}

/// Convert `HH:MM` to a zero-padded 12-hour clock.
///
/// # Examples
///
/// ```
/// use classbook_core::format::format_time_12_hour;
///
/// assert_eq!(format_time_12_hour("14:05"), "02:05 PM");
/// assert_eq!(format_time_12_hour("00:00"), "12:00 AM");
/// assert_eq!(format_time_12_hour("25:00"), "Invalid time");
/// ```
pub fn format_time_12_hour(time: &str) -> String {
    or_sentinel(try_format_time_12_hour(time))
}

/// Fallible [`format_time`].
pub fn try_format_time(time: &str) -> Result<String> {
    Ok(TimeOfDay::parse(time)?.to_12_hour(false))
}

/// Like [`format_time_12_hour`] without padding the hour (`2:05 PM`).
pub fn format_time(time: &str) -> String {
    or_sentinel(try_format_time(time))
}

/// Fallible [`format_egypt_time`].
pub fn try_format_egypt_time(time: &str) -> Result<String> {
    Ok(format!("{} (Egypt)", try_format_time_12_hour(time)?))
}

/// Format a base-zone time with an `(Egypt)` label. No offset is applied.
pub fn format_egypt_time(time: &str) -> String {
    or_sentinel(try_format_egypt_time(time))
}

/// Fallible [`format_student_time`].
pub fn try_format_student_time(time: &str, timezone_label: &str) -> Result<String> {
    let zone = StudentZone::from_label(timezone_label);
    let shifted = TimeOfDay::parse(time)?.shift_hours(zone.offset_hours());
    Ok(format!("{} ({})", shifted.to_12_hour(true), zone.label()))
}

/// Show a base-zone class time in the student's zone.
///
/// The zone is picked from the free-text label by [`StudentZone::from_label`].
///
/// ```
/// use classbook_core::format::format_student_time;
///
/// assert_eq!(format_student_time("10:00", "Saudi Arabia"), "11:00 AM (KSA)");
/// assert_eq!(format_student_time("23:30", "Dubai"), "01:30 AM (UAE)");
/// ```
pub fn format_student_time(time: &str, timezone_label: &str) -> String {
    or_sentinel(try_format_student_time(time, timezone_label))
}

/// Fallible [`add_minutes_to_time`]. Never fails on the minute count.
pub fn try_add_minutes_to_time(time: &str, minutes: i64) -> Result<String> {
    Ok(TimeOfDay::parse(time)?.add_minutes(minutes).to_string())
}

/// Add signed minutes to `HH:MM`, wrapping around midnight.
pub fn add_minutes_to_time(time: &str, minutes: i64) -> String {
    or_sentinel(try_add_minutes_to_time(time, minutes))
}

/// Parse a calendar date from `YYYY-MM-DD`, an RFC3339 timestamp, or a
/// naive `YYYY-MM-DDTHH:MM[:SS]` timestamp.
///
/// Timestamps with an offset yield the date in that offset.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }
    parse_naive_datetime(trimmed)
        .map(|dt| dt.date())
        .ok_or_else(|| FormatError::InvalidDate(input.to_string()))
}

/// Parse a timestamp as an instant. Naive timestamps and bare dates are
/// taken as UTC.
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Some(dt) = parse_naive_datetime(trimmed) {
        return Ok(dt.and_utc());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| FormatError::InvalidDate(input.to_string()))
}

fn parse_naive_datetime(s: &str) -> Option<NaiveDateTime> {
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Fallible [`day_name`].
pub fn try_day_name(date: &str) -> Result<String> {
    Ok(weekday_name(parse_date(date)?.weekday()).to_string())
}

/// Day of the week for a date, e.g. `Monday`.
pub fn day_name(date: &str) -> String {
    or_sentinel(try_day_name(date))
}

/// `Mar 2, 2026`
pub fn date_short(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Monday, Mar 2, 2026`
pub fn date_with_day(date: NaiveDate) -> String {
    format!("{}, {}", weekday_name(date.weekday()), date_short(date))
}

/// Fallible [`format_date_short`].
pub fn try_format_date_short(date: &str) -> Result<String> {
    Ok(date_short(parse_date(date)?))
}

/// `Mar 2, 2026` for any input [`parse_date`] accepts.
pub fn format_date_short(date: &str) -> String {
    or_sentinel(try_format_date_short(date))
}

/// Fallible [`format_date_with_day`].
pub fn try_format_date_with_day(date: &str) -> Result<String> {
    Ok(date_with_day(parse_date(date)?))
}

/// `Monday, Mar 2, 2026` for any input [`parse_date`] accepts.
pub fn format_date_with_day(date: &str) -> String {
    or_sentinel(try_format_date_with_day(date))
}

/// Fallible [`format_relative_time`].
pub fn try_format_relative_time(timestamp: &str, now: DateTime<FixedOffset>) -> Result<String> {
    let instant = parse_instant(timestamp)?;
    let seconds = (now.with_timezone(&Utc) - instant).num_seconds();

    let text = if seconds < SECONDS_PER_MINUTE {
        "Just now".to_string()
    } else if seconds < SECONDS_PER_HOUR {
        ago(seconds / SECONDS_PER_MINUTE, "minute")
    } else if seconds < SECONDS_PER_DAY {
        ago(seconds / SECONDS_PER_HOUR, "hour")
    } else if seconds < SECONDS_PER_WEEK {
        ago(seconds / SECONDS_PER_DAY, "day")
    } else {
        date_short(parse_date(timestamp)?)
    };

    Ok(text)
}

/// Describe how long ago a timestamp was, relative to `now`.
///
/// Timestamps a week or more old fall back to [`format_date_short`], so the
/// date shown is the one in the timestamp's own offset. Future timestamps
/// read as `Just now`.
///
/// ```
/// use chrono::DateTime;
/// use classbook_core::format::format_relative_time;
///
/// let now = DateTime::parse_from_rfc3339("2026-03-02T12:00:00Z").unwrap();
/// assert_eq!(format_relative_time("2026-03-02T11:58:30Z", now), "1 minute ago");
/// assert_eq!(format_relative_time("2026-02-20T12:00:00Z", now), "Feb 20, 2026");
/// ```
pub fn format_relative_time(timestamp: &str, now: DateTime<FixedOffset>) -> String {
    or_sentinel(try_format_relative_time(timestamp, now))
}

fn ago(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

/// Snapshot the clock as display strings.
pub fn current_date_time<C: Clock + ?Sized>(clock: &C) -> CurrentDateTime {
    let now = clock.now().naive_local();
    let time = TimeOfDay::from_minutes_wrapping(i64::from(now.hour() * 60 + now.minute()));

    CurrentDateTime {
        date: date_with_day(now.date()),
        time: time.to_12_hour(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn now() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2026-03-02T12:00:00+00:00").unwrap()
    }

    #[test]
    fn twelve_hour_examples() {
        assert_eq!(format_time_12_hour("14:05"), "02:05 PM");
        assert_eq!(format_time_12_hour("00:00"), "12:00 AM");
        assert_eq!(format_time_12_hour("12:00"), "12:00 PM");
        assert_eq!(format_time_12_hour("23:59"), "11:59 PM");
        assert_eq!(format_time_12_hour("09:07"), "09:07 AM");
    }

    #[test]
    fn twelve_hour_invalid_input() {
        assert_eq!(format_time_12_hour("25:00"), "Invalid time");
        assert_eq!(format_time_12_hour(""), "Invalid time");
        assert_eq!(format_time_12_hour("abc"), "Invalid time");
        assert!(try_format_time_12_hour("12:61").is_err());
    }

    #[test]
    fn twelve_hour_shape_for_every_minute() {
        for h in 0..24 {
            for m in 0..60 {
                let out = format_time_12_hour(&format!("{:02}:{:02}", h, m));
                let (clock, suffix) = out.split_once(' ').unwrap();
                let (hh, mm) = clock.split_once(':').unwrap();
                let hh: u32 = hh.parse().unwrap();
                assert_eq!(clock.len(), 5, "{out}");
                assert!((1..=12).contains(&hh), "{out}");
                assert_eq!(mm.parse::<u32>().unwrap(), m);
                assert_eq!(suffix, if h < 12 { "AM" } else { "PM" });
                if h == 0 || h == 12 {
                    assert_eq!(hh, 12);
                }
            }
        }
    }

    #[test]
    fn plain_time_is_unpadded() {
        assert_eq!(format_time("14:05"), "2:05 PM");
        assert_eq!(format_time("00:30"), "12:30 AM");
        assert_eq!(format_time("10:00"), "10:00 AM");
        assert_eq!(format_time("nope"), "Invalid time");
    }

    #[test]
    fn egypt_time_has_no_offset() {
        assert_eq!(format_egypt_time("14:05"), "02:05 PM (Egypt)");
        assert_eq!(format_egypt_time("99:00"), "Invalid time");
    }

    #[test]
    fn student_time_offsets() {
        assert_eq!(format_student_time("10:00", "Saudi Arabia"), "11:00 AM (KSA)");
        assert_eq!(format_student_time("10:00", "unknown"), "10:00 AM (Local)");
        assert_eq!(format_student_time("10:00", "UAE"), "12:00 PM (UAE)");
        assert_eq!(format_student_time("10:00", "Cairo"), "10:00 AM (Egypt)");
        assert_eq!(format_student_time("23:15", "riyadh"), "12:15 AM (KSA)");
        assert_eq!(format_student_time("22:45", "UTC+4"), "12:45 AM (UAE)");
        assert_eq!(format_student_time("x", "UAE"), "Invalid time");
    }

    #[test]
    fn add_minutes_examples() {
        assert_eq!(add_minutes_to_time("23:50", 20), "00:10");
        assert_eq!(add_minutes_to_time("00:05", -10), "23:55");
        assert_eq!(add_minutes_to_time("09:00", 90), "10:30");
        assert_eq!(add_minutes_to_time("bad", 10), "Invalid time");
    }

    #[test]
    fn day_names() {
        assert_eq!(day_name("2026-03-01"), "Sunday");
        assert_eq!(day_name("2026-03-02"), "Monday");
        assert_eq!(day_name("2026-03-07T10:00:00Z"), "Saturday");
        assert_eq!(day_name("2026-02-30"), "Invalid date");
        assert_eq!(day_name("not a date"), "Invalid date");
    }

    #[test]
    fn date_formats() {
        assert_eq!(format_date_short("2026-03-02"), "Mar 2, 2026");
        assert_eq!(format_date_with_day("2026-03-02"), "Monday, Mar 2, 2026");
        assert_eq!(format_date_with_day("2026-12-25T08:00"), "Friday, Dec 25, 2026");
        assert_eq!(format_date_short(""), "Invalid date");
        assert_eq!(format_date_with_day("13/01/2026"), "Invalid date");
    }

    #[test]
    fn date_uses_timestamp_offset() {
        // 23:30 at +02:00 is still March 2 locally.
        assert_eq!(format_date_short("2026-03-02T23:30:00+02:00"), "Mar 2, 2026");
    }

    #[test]
    fn relative_time_buckets() {
        let now = now();
        assert_eq!(format_relative_time("2026-03-02T11:59:30Z", now), "Just now");
        assert_eq!(format_relative_time("2026-03-02T11:58:30Z", now), "1 minute ago");
        assert_eq!(format_relative_time("2026-03-02T11:55:00Z", now), "5 minutes ago");
        assert_eq!(format_relative_time("2026-03-02T11:00:00Z", now), "1 hour ago");
        assert_eq!(format_relative_time("2026-03-02T10:00:00Z", now), "2 hours ago");
        assert_eq!(format_relative_time("2026-03-01T12:00:00Z", now), "1 day ago");
        assert_eq!(format_relative_time("2026-02-23T12:00:01Z", now), "6 days ago");
        assert_eq!(format_relative_time("2026-02-24T12:00:01Z", now), "5 days ago");
        assert_eq!(format_relative_time("2026-02-22T12:00:00Z", now), "Feb 22, 2026");
    }

    #[test]
    fn relative_time_boundaries() {
        let now = now();
        assert_eq!(format_relative_time("2026-03-02T11:59:00Z", now), "1 minute ago");
        assert_eq!(format_relative_time("2026-03-02T11:00:01Z", now), "59 minutes ago");
        assert_eq!(format_relative_time("2026-02-23T12:00:00Z", now), "Feb 23, 2026");
    }

    #[test]
    fn relative_time_future_and_offsets() {
        let now = now();
        assert_eq!(format_relative_time("2026-03-03T12:00:00Z", now), "Just now");
        // 13:00 at +02:00 is 11:00 UTC.
        assert_eq!(format_relative_time("2026-03-02T13:00:00+02:00", now), "1 hour ago");
        assert_eq!(format_relative_time("2026-03-02T09:00:00", now), "3 hours ago");
        assert_eq!(format_relative_time("garbage", now), "Invalid date");
    }

    #[test]
    fn relative_fallback_matches_short_date() {
        let now = now();
        // 01:00 at +02:00 is still Feb 19 in UTC.
        let ts = "2026-02-20T01:00:00+02:00";
        assert_eq!(format_relative_time(ts, now), "Feb 20, 2026");
        assert_eq!(format_relative_time(ts, now), format_date_short(ts));
    }

    #[test]
    fn add_minutes_accepts_any_offset() {
        assert_eq!(add_minutes_to_time("00:05", i64::MAX), "18:12");
        assert_eq!(add_minutes_to_time("00:05", i64::MIN), "05:57");
    }

    #[test]
    fn formatting_is_repeatable() {
        let now = now();
        assert_eq!(format_time_12_hour("07:45"), format_time_12_hour("07:45"));
        assert_eq!(
            format_relative_time("2026-03-02T10:00:00Z", now),
            format_relative_time("2026-03-02T10:00:00Z", now)
        );
    }

    #[test]
    fn current_date_time_from_clock() {
        let clock = FixedClock::parse("2026-03-02T21:05:42+02:00").unwrap();
        let current = current_date_time(&clock);
        assert_eq!(current.date, "Monday, Mar 2, 2026");
        assert_eq!(current.time, "09:05 PM");
    }
}
