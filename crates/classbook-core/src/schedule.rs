//! Today's schedule.
//!
//! Regular and trial classes are stored separately and have different
//! shapes. This module maps both into [`ScheduleEntry`] and orders them by
//! start time, and flattens a schedule into CSV rows.

use chrono::NaiveDate;

use crate::format::add_minutes_to_time;
use crate::models::{ClassRecord, ClassStatus, EntryKind, ScheduleEntry, TrialClassRecord};

/// Prefix that keeps trial ids distinct from regular class ids.
pub const TRIAL_ID_PREFIX: &str = "trial-";

impl From<&ClassRecord> for ScheduleEntry {
    fn from(class: &ClassRecord) -> Self {
        ScheduleEntry {
            id: class.id.clone(),
            kind: EntryKind::Regular,
            student_id: Some(class.student_id.clone()),
            student_name: class.student_name.clone(),
            student_phone: None,
            teacher_id: Some(class.teacher_id.clone()),
            teacher_name: class.teacher_name.clone(),
            date: class.date,
            start_time: class.start_time.clone(),
            end_time: class.end_time(),
            duration: class.duration,
            status: class.status,
        }
    }
}

impl From<&TrialClassRecord> for ScheduleEntry {
    fn from(trial: &TrialClassRecord) -> Self {
        ScheduleEntry {
            id: format!("{}{}", TRIAL_ID_PREFIX, trial.id),
            kind: EntryKind::Trial,
            student_id: None,
            student_name: Some(trial.student_name.clone()),
            student_phone: trial.student_phone.clone(),
            teacher_id: trial.teacher_id.clone(),
            teacher_name: trial.teacher_name.clone(),
            date: trial.date,
            start_time: trial.time.clone(),
            end_time: add_minutes_to_time(&trial.time, i64::from(trial.duration)),
            duration: trial.duration,
            status: trial.status,
        }
    }
}

/// Merge the classes and non-cancelled trial classes dated `today`.
///
/// Entries are ordered by their `HH:MM` start time string. The sort is
/// stable, so regular classes come before trials at the same time.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use classbook_core::models::{ClassRecord, TrialClassRecord};
/// use classbook_core::schedule::merge_today_schedule;
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let classes: Vec<ClassRecord> = serde_json::from_str(r#"[{
///     "id": "c1", "student_id": "s1", "teacher_id": "t1",
///     "date": "2026-03-02", "start_time": "09:00", "duration": 60
/// }]"#).unwrap();
/// let trials: Vec<TrialClassRecord> = serde_json::from_str(r#"[{
///     "id": "7", "student_name": "Omar", "date": "2026-03-02",
///     "time": "08:30", "duration": 30
/// }]"#).unwrap();
///
/// let merged = merge_today_schedule(&classes, &trials, today);
/// assert_eq!(merged[0].id, "trial-7");
/// assert_eq!(merged[1].id, "c1");
/// ```
pub fn merge_today_schedule(
    classes: &[ClassRecord],
    trial_classes: &[TrialClassRecord],
    today: NaiveDate,
) -> Vec<ScheduleEntry> {
    let regular = classes
        .iter()
        .filter(|c| c.date == today)
        .map(ScheduleEntry::from);

    let trials = trial_classes
        .iter()
        .filter(|t| t.date == today && t.status != ClassStatus::Cancelled)
        .map(ScheduleEntry::from);

    let mut entries: Vec<ScheduleEntry> = regular.chain(trials).collect();
    entries.sort_by(|a, b| a.start_time.cmp(&b.start_time));

    tracing::debug!(%today, entries = entries.len(), "merged today's schedule");
    entries
}

/// Column names of [`schedule_csv_rows`], in order.
pub const SCHEDULE_CSV_HEADER: [&str; 10] = [
    "id",
    "kind",
    "date",
    "start_time",
    "end_time",
    "duration",
    "status",
    "student_name",
    "student_phone",
    "teacher_name",
];

/// Flatten schedule entries into CSV-ready string rows (without header).
pub fn schedule_csv_rows(entries: &[ScheduleEntry]) -> Vec<[String; 10]> {
    entries
        .iter()
        .map(|e| {
            [
                e.id.clone(),
                e.kind.to_string(),
                e.date.format("%Y-%m-%d").to_string(),
                e.start_time.clone(),
                e.end_time.clone(),
                e.duration.to_string(),
                e.status.to_string(),
                e.student_name.clone().unwrap_or_default(),
                e.student_phone.clone().unwrap_or_default(),
                e.teacher_name.clone().unwrap_or_default(),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn class(id: &str, day: u32, start: &str) -> ClassRecord {
        ClassRecord {
            id: id.to_string(),
            student_id: "s1".to_string(),
            teacher_id: "t1".to_string(),
            student_name: Some("Lina".to_string()),
            teacher_name: Some("Mr. Adel".to_string()),
            date: date(day),
            start_time: start.to_string(),
            duration: 60,
            status: ClassStatus::Scheduled,
            notes: None,
            cancellation_reason: None,
        }
    }

    fn trial(id: &str, day: u32, time: &str, status: ClassStatus) -> TrialClassRecord {
        TrialClassRecord {
            id: id.to_string(),
            student_name: "Omar".to_string(),
            student_phone: Some("+20 100 000 0000".to_string()),
            teacher_id: Some("t2".to_string()),
            teacher_name: Some("Ms. Huda".to_string()),
            date: date(day),
            time: time.to_string(),
            duration: 30,
            status,
            notes: None,
        }
    }

    #[test]
    fn trial_before_regular_when_earlier() {
        let classes = vec![class("c1", 2, "09:00")];
        let trials = vec![trial("t1", 2, "08:30", ClassStatus::Scheduled)];

        let merged = merge_today_schedule(&classes, &trials, date(2));

        let ids: Vec<&str> = merged.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["trial-t1", "c1"]);
        assert_eq!(merged[0].kind, EntryKind::Trial);
        assert_eq!(merged[0].student_phone.as_deref(), Some("+20 100 000 0000"));
        assert_eq!(merged[0].end_time, "09:00");
    }

    #[test]
    fn filters_other_days_and_cancelled_trials() {
        let classes = vec![class("c1", 1, "09:00"), class("c2", 2, "10:00")];
        let trials = vec![
            trial("a", 2, "11:00", ClassStatus::Cancelled),
            trial("b", 3, "08:00", ClassStatus::Scheduled),
            trial("c", 2, "07:00", ClassStatus::Completed),
        ];

        let merged = merge_today_schedule(&classes, &trials, date(2));

        let ids: Vec<&str> = merged.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["trial-c", "c2"]);
    }

    #[test]
    fn cancelled_regular_classes_stay() {
        let mut cancelled = class("c1", 2, "09:00");
        cancelled.status = ClassStatus::Cancelled;

        let merged = merge_today_schedule(&[cancelled], &[], date(2));
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].status, ClassStatus::Cancelled);
    }

    #[test]
    fn ties_keep_regular_first() {
        let classes = vec![class("c1", 2, "10:00")];
        let trials = vec![trial("t1", 2, "10:00", ClassStatus::Scheduled)];

        let merged = merge_today_schedule(&classes, &trials, date(2));
        assert_eq!(merged[0].id, "c1");
        assert_eq!(merged[1].id, "trial-t1");
    }

    #[test]
    fn empty_inputs() {
        assert!(merge_today_schedule(&[], &[], date(2)).is_empty());
    }

    #[test]
    fn csv_rows_flatten_entries() {
        let merged = merge_today_schedule(
            &[class("c1", 2, "09:00")],
            &[trial("t1", 2, "08:30", ClassStatus::Scheduled)],
            date(2),
        );
        let rows = schedule_csv_rows(&merged);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "trial-t1");
        assert_eq!(rows[0][1], "trial");
        assert_eq!(rows[1][2], "2026-03-02");
        assert_eq!(rows[1][4], "10:00");
        assert_eq!(rows[1][8], "");
        assert_eq!(SCHEDULE_CSV_HEADER.len(), rows[0].len());
    }
}
