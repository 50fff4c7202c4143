//! Derived statistics over class records.
//!
//! All functions here are pure tallies. Empty or unmatched inputs give
//! zero counts, and ratios with a zero denominator are 0 rather than NaN.

use crate::models::{
    CancelledBy, ClassRecord, ClassStatus, CourseProgress, CourseRecord, ProgressColor,
    StudentMonthlyStats, TeacherStats, YearMonth,
};

/// Infer who cancelled a class from its free-text notes.
///
/// Compatibility shim for records without a structured reason. Notes
/// mentioning "student" (any case) count against the student and notes
/// mentioning "teacher" count against the teacher; a note naming both
/// counts against both. This relies on wording in the notes and misses
/// anything phrased differently.
pub fn classify_cancellation(notes: Option<&str>) -> CancelledBy {
    let notes = notes.unwrap_or_default().to_lowercase();

    CancelledBy {
        student: notes.contains("student"),
        teacher: notes.contains("teacher"),
    }
}

/// Who a cancelled class is attributed to; `None` for any other status.
///
/// A structured `cancellation_reason` wins over the notes.
pub fn cancelled_by(class: &ClassRecord) -> Option<CancelledBy> {
    if class.status != ClassStatus::Cancelled {
        return None;
    }
    Some(match class.cancellation_reason {
        Some(reason) => CancelledBy::from(reason),
        None => classify_cancellation(class.notes.as_deref()),
    })
}

fn completed_hours<'a>(classes: impl Iterator<Item = &'a ClassRecord>) -> f64 {
    let minutes: u64 = classes
        .filter(|c| c.status == ClassStatus::Completed)
        .map(|c| u64::from(c.duration))
        .sum();
    minutes as f64 / 60.0
}

/// Summarize one student's classes within a month.
///
/// # Examples
///
/// ```
/// use classbook_core::models::ClassRecord;
/// use classbook_core::stats::student_monthly_stats;
///
/// let classes: Vec<ClassRecord> = serde_json::from_str(r#"[
///     {"id": "1", "student_id": "s1", "teacher_id": "t1", "date": "2026-03-02",
///      "start_time": "09:00", "duration": 90, "status": "completed"},
///     {"id": "2", "student_id": "s1", "teacher_id": "t1", "date": "2026-03-09",
///      "start_time": "09:00", "duration": 60, "status": "cancelled",
///      "notes": "Student was sick"}
/// ]"#).unwrap();
///
/// let stats = student_monthly_stats(&classes, "s1", "2026-03".parse().unwrap());
/// assert_eq!(stats.total_classes, 2);
/// assert_eq!(stats.student_cancelled, 1);
/// assert_eq!(stats.total_hours, 1.5);
/// ```
pub fn student_monthly_stats(
    classes: &[ClassRecord],
    student_id: &str,
    month: YearMonth,
) -> StudentMonthlyStats {
    let window: Vec<&ClassRecord> = classes
        .iter()
        .filter(|c| c.student_id == student_id && month.contains(c.date))
        .collect();

    let mut stats = StudentMonthlyStats {
        total_classes: window.len() as u32,
        total_hours: completed_hours(window.iter().copied()),
        ..StudentMonthlyStats::default()
    };

    for class in &window {
        match class.status {
            ClassStatus::Completed => stats.completed_classes += 1,
            ClassStatus::NoShow => stats.no_show_classes += 1,
            ClassStatus::Cancelled | ClassStatus::Scheduled => {}
        }
        if let Some(by) = cancelled_by(class) {
            stats.student_cancelled += u32::from(by.student);
            stats.teacher_cancelled += u32::from(by.teacher);
        }
    }

    tracing::debug!(student_id, %month, ?stats, "computed monthly student stats");
    stats
}

/// Summarize every class a teacher is assigned to.
pub fn teacher_stats(classes: &[ClassRecord], teacher_id: &str) -> TeacherStats {
    let window: Vec<&ClassRecord> = classes
        .iter()
        .filter(|c| c.teacher_id == teacher_id)
        .collect();

    let count = |status: ClassStatus| window.iter().filter(|c| c.status == status).count() as u32;

    let total_classes = window.len() as u32;
    let completed_classes = count(ClassStatus::Completed);
    let completion_rate = if total_classes == 0 {
        0.0
    } else {
        f64::from(completed_classes) / f64::from(total_classes)
    };

    let stats = TeacherStats {
        total_classes,
        completed_classes,
        scheduled_classes: count(ClassStatus::Scheduled),
        cancelled_classes: count(ClassStatus::Cancelled),
        total_hours: completed_hours(window.iter().copied()),
        completion_rate,
    };

    tracing::debug!(teacher_id, ?stats, "computed teacher stats");
    stats
}

/// Colour band for a progress percentage.
pub fn progress_color(percentage: f64) -> ProgressColor {
    if percentage >= 80.0 {
        ProgressColor::Emerald
    } else if percentage >= 60.0 {
        ProgressColor::Blue
    } else if percentage >= 40.0 {
        ProgressColor::Amber
    } else {
        ProgressColor::Red
    }
}

/// `present / total` as a rounded integer percentage; 0 when `total` is 0.
///
/// Not clamped: `present > total` gives more than 100.
pub fn attendance_percentage(present: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(present) / f64::from(total) * 100.0).round() as u32
}

impl CourseRecord {
    pub fn progress_color(&self) -> ProgressColor {
        progress_color(self.progress_percentage)
    }
}

impl From<&CourseRecord> for CourseProgress {
    fn from(course: &CourseRecord) -> Self {
        CourseProgress {
            course_id: course.id.clone(),
            name: course.name.clone(),
            student_id: course.student_id.clone(),
            teacher_id: course.teacher_id.clone(),
            completed_classes: course.completed_classes,
            total_classes: course.total_classes,
            progress_percentage: course.progress_percentage,
            color: course.progress_color(),
        }
    }
}

/// Progress and colour band of each course, in input order.
pub fn course_progress(courses: &[CourseRecord]) -> Vec<CourseProgress> {
    courses.iter().map(CourseProgress::from).collect()
}
