//! Record and summary types.
//!
//! Records mirror the rows the school application stores; the core only
//! reads them:
//! - [`ClassRecord`] - a regular class session
//! - [`TrialClassRecord`] - an introductory class for a prospective student
//! - [`CourseRecord`] - a multi-class package between a student and teacher
//! - [`Dataset`] - the three collections together
//!
//! Derived values ([`ScheduleEntry`], [`StudentMonthlyStats`],
//! [`TeacherStats`], [`CourseProgress`]) are computed on demand and never stored.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{FormatError, Result};
use crate::format::add_minutes_to_time;

/// Lifecycle state of a class session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

impl fmt::Display for ClassStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassStatus::Scheduled => write!(f, "scheduled"),
            ClassStatus::Completed => write!(f, "completed"),
            ClassStatus::Cancelled => write!(f, "cancelled"),
            ClassStatus::NoShow => write!(f, "no_show"),
        }
    }
}

/// Who called off a cancelled class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancellationReason {
    StudentCancelled,
    TeacherCancelled,
    Other,
}

/// Which parties a cancelled class counts against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CancelledBy {
    pub student: bool,
    pub teacher: bool,
}

impl From<CancellationReason> for CancelledBy {
    fn from(reason: CancellationReason) -> Self {
        CancelledBy {
            student: reason == CancellationReason::StudentCancelled,
            teacher: reason == CancellationReason::TeacherCancelled,
        }
    }
}

/// A regular class session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub id: String,
    pub student_id: String,
    pub teacher_id: String,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub teacher_name: Option<String>,
    pub date: NaiveDate,
    /// 24-hour `HH:MM`.
    pub start_time: String,
    /// Minutes.
    pub duration: u32,
    #[serde(default)]
    pub status: ClassStatus,
    #[serde(default)]
    pub notes: Option<String>,
    /// Structured reason; when absent it is inferred from `notes`.
    #[serde(default)]
    pub cancellation_reason: Option<CancellationReason>,
}

impl ClassRecord {
    /// Start time plus duration, or the invalid-time sentinel.
    pub fn end_time(&self) -> String {
        add_minutes_to_time(&self.start_time, i64::from(self.duration))
    }
}

/// An introductory class for someone who is not yet an enrolled student.
///
/// Trial students have no student row, so their contact details are inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialClassRecord {
    pub id: String,
    pub student_name: String,
    #[serde(default)]
    pub student_phone: Option<String>,
    #[serde(default)]
    pub teacher_id: Option<String>,
    #[serde(default)]
    pub teacher_name: Option<String>,
    pub date: NaiveDate,
    /// 24-hour `HH:MM`.
    pub time: String,
    pub duration: u32,
    #[serde(default)]
    pub status: ClassStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A package of classes between one student and one teacher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: String,
    pub student_id: String,
    pub teacher_id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub total_classes: u32,
    pub completed_classes: u32,
    pub remaining_classes: u32,
    pub monthly_fee: f64,
    /// Stored on the record; not recomputed from class counts.
    pub progress_percentage: f64,
}

/// The three record collections together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub classes: Vec<ClassRecord>,
    #[serde(default)]
    pub trial_classes: Vec<TrialClassRecord>,
    #[serde(default)]
    pub courses: Vec<CourseRecord>,
}

/// Origin of a schedule entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Regular,
    Trial,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Regular => write!(f, "regular"),
            EntryKind::Trial => write!(f, "trial"),
        }
    }
}

/// A regular or trial class in the common schedule shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleEntry {
    /// Trial entries are prefixed with `trial-`.
    pub id: String,
    pub kind: EntryKind,
    pub student_id: Option<String>,
    pub student_name: Option<String>,
    pub student_phone: Option<String>,
    pub teacher_id: Option<String>,
    pub teacher_name: Option<String>,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub duration: u32,
    pub status: ClassStatus,
}

/// A calendar month, written `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(FormatError::InvalidInput(format!(
                "month {} is out of range",
                month
            )));
        }
        Ok(YearMonth { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || FormatError::InvalidInput(format!("expected YYYY-MM, got '{}'", s));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        YearMonth::new(year, month)
    }
}

/// One student's classes in one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StudentMonthlyStats {
    pub total_classes: u32,
    pub completed_classes: u32,
    pub student_cancelled: u32,
    pub teacher_cancelled: u32,
    pub no_show_classes: u32,
    /// Completed minutes divided by 60.
    pub total_hours: f64,
}

/// All of one teacher's classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TeacherStats {
    pub total_classes: u32,
    pub completed_classes: u32,
    pub scheduled_classes: u32,
    pub cancelled_classes: u32,
    pub total_hours: f64,
    /// `completed / total` in `[0, 1]`; 0 with no classes.
    pub completion_rate: f64,
}

/// Display colour band for a progress percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressColor {
    Emerald,
    Blue,
    Amber,
    Red,
}

impl fmt::Display for ProgressColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressColor::Emerald => write!(f, "emerald"),
            ProgressColor::Blue => write!(f, "blue"),
            ProgressColor::Amber => write!(f, "amber"),
            ProgressColor::Red => write!(f, "red"),
        }
    }
}

/// A course with its display colour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseProgress {
    pub course_id: String,
    pub name: Option<String>,
    pub student_id: String,
    pub teacher_id: String,
    pub completed_classes: u32,
    pub total_classes: u32,
    pub progress_percentage: f64,
    pub color: ProgressColor,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_json() -> &'static str {
        r#"{
            "id": "c1",
            "student_id": "s1",
            "teacher_id": "t1",
            "date": "2026-03-02",
            "start_time": "23:30",
            "duration": 60,
            "status": "no_show"
        }"#
    }

    #[test]
    fn class_record_deserializes_with_defaults() {
        let class: ClassRecord = serde_json::from_str(class_json()).unwrap();
        assert_eq!(class.status, ClassStatus::NoShow);
        assert_eq!(class.date, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        assert!(class.notes.is_none());
        assert!(class.cancellation_reason.is_none());
    }

    #[test]
    fn class_end_time_wraps() {
        let class: ClassRecord = serde_json::from_str(class_json()).unwrap();
        assert_eq!(class.end_time(), "00:30");
    }

    #[test]
    fn class_end_time_invalid_start() {
        let mut class: ClassRecord = serde_json::from_str(class_json()).unwrap();
        class.start_time = "late".to_string();
        assert_eq!(class.end_time(), "Invalid time");
    }

    #[test]
    fn status_serialization() {
        assert_eq!(
            serde_json::to_string(&ClassStatus::NoShow).unwrap(),
            "\"no_show\""
        );
        assert_eq!(ClassStatus::Cancelled.to_string(), "cancelled");
        assert_eq!(ClassStatus::default(), ClassStatus::Scheduled);
    }

    #[test]
    fn cancellation_reason_serialization() {
        let reason: CancellationReason = serde_json::from_str("\"teacher_cancelled\"").unwrap();
        assert_eq!(reason, CancellationReason::TeacherCancelled);
    }

    #[test]
    fn empty_dataset() {
        let data: Dataset = serde_json::from_str("{}").unwrap();
        assert_eq!(data, Dataset::default());
    }

    #[test]
    fn year_month_parse() {
        let month: YearMonth = "2026-03".parse().unwrap();
        assert_eq!(month, YearMonth { year: 2026, month: 3 });
        assert_eq!(month.to_string(), "2026-03");
        assert!(month.contains(NaiveDate::from_ymd_opt(2026, 3, 31).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()));
    }

    #[test]
    fn year_month_rejects_malformed() {
        for input in ["2026-13", "2026-00", "2026-3", "26-03", "2026/03", ""] {
            assert!(input.parse::<YearMonth>().is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn progress_color_serialization() {
        assert_eq!(
            serde_json::to_string(&ProgressColor::Emerald).unwrap(),
            "\"emerald\""
        );
        assert_eq!(ProgressColor::Amber.to_string(), "amber");
    }
}
