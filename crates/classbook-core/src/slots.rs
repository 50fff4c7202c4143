//! Booking slot generation.
//!
//! Slots start at `start_hour:00`, step by a fixed number of minutes while
//! strictly before `end_hour:00`, and always finish with `end_hour:00`
//! exactly once, even when the step does not land on it.

use crate::time_of_day::TimeOfDay;

/// Slot start times between two hours as 24-hour `HH:MM` strings.
///
/// Returns an empty list when either hour is outside `0..=23`, when
/// `start_hour > end_hour`, or when `interval_minutes` is not positive.
///
/// # Examples
///
/// ```
/// use classbook_core::slots::generate_time_slots;
///
/// assert_eq!(generate_time_slots(9, 10, 30), ["09:00", "09:30", "10:00"]);
/// assert_eq!(generate_time_slots(9, 11, 45), ["09:00", "09:45", "10:30", "11:00"]);
/// ```
pub fn generate_time_slots(start_hour: i32, end_hour: i32, interval_minutes: i32) -> Vec<String> {
    slot_times(start_hour, end_hour, interval_minutes)
        .iter()
        .map(TimeOfDay::to_string)
        .collect()
}

/// Same cadence as [`generate_time_slots`], rendered as `09:30 AM`.
pub fn generate_time_slots_12_hour(
    start_hour: i32,
    end_hour: i32,
    interval_minutes: i32,
) -> Vec<String> {
    slot_times(start_hour, end_hour, interval_minutes)
        .iter()
        .map(|t| t.to_12_hour(true))
        .collect()
}

/// The slot cadence as typed times.
pub fn slot_times(start_hour: i32, end_hour: i32, interval_minutes: i32) -> Vec<TimeOfDay> {
    let valid_hour = |h: i32| (0..=23).contains(&h);
    if !valid_hour(start_hour) || !valid_hour(end_hour) || interval_minutes <= 0 {
        tracing::debug!(start_hour, end_hour, interval_minutes, "rejected slot parameters");
        return Vec::new();
    }
    if start_hour > end_hour {
        tracing::debug!(start_hour, end_hour, "slot range is reversed");
        return Vec::new();
    }

    let end = i64::from(end_hour) * 60;
    let step = i64::from(interval_minutes);

    let mut slots = Vec::new();
    let mut current = i64::from(start_hour) * 60;
    while current < end {
        slots.push(TimeOfDay::from_minutes_wrapping(current));
        current += step;
    }
    slots.push(TimeOfDay::from_minutes_wrapping(end));

    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_lands_on_end() {
        assert_eq!(generate_time_slots(9, 10, 30), vec!["09:00", "09:30", "10:00"]);
    }

    #[test]
    fn step_overshoots_end() {
        assert_eq!(
            generate_time_slots(9, 11, 45),
            vec!["09:00", "09:45", "10:30", "11:00"]
        );
    }

    #[test]
    fn end_boundary_appears_once() {
        let slots = generate_time_slots(8, 12, 60);
        assert_eq!(slots, vec!["08:00", "09:00", "10:00", "11:00", "12:00"]);
        assert_eq!(slots.iter().filter(|s| *s == "12:00").count(), 1);
    }

    #[test]
    fn interval_larger_than_range() {
        assert_eq!(generate_time_slots(9, 10, 90), vec!["09:00", "10:00"]);
    }

    #[test]
    fn equal_hours_yield_single_slot() {
        assert_eq!(generate_time_slots(14, 14, 15), vec!["14:00"]);
    }

    #[test]
    fn invalid_parameters_yield_empty() {
        assert!(generate_time_slots(-1, 10, 30).is_empty());
        assert!(generate_time_slots(9, 24, 30).is_empty());
        assert!(generate_time_slots(9, 10, 0).is_empty());
        assert!(generate_time_slots(9, 10, -15).is_empty());
        assert!(generate_time_slots(12, 9, 30).is_empty());
        assert!(generate_time_slots_12_hour(9, 10, 0).is_empty());
    }

    #[test]
    fn twelve_hour_rendering() {
        assert_eq!(
            generate_time_slots_12_hour(11, 13, 40),
            vec!["11:00 AM", "11:40 AM", "12:20 PM", "01:00 PM"]
        );
        assert_eq!(
            generate_time_slots_12_hour(0, 1, 30),
            vec!["12:00 AM", "12:30 AM", "01:00 AM"]
        );
    }

    #[test]
    fn slots_are_ascending() {
        let slots = slot_times(6, 22, 25);
        assert!(slots.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(slots.last().map(|t| t.to_string()).as_deref(), Some("22:00"));
    }
}
