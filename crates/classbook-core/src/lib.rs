//! # classbook-core
//!
//! Time formatting and class statistics for a school administration app.
//!
//! The library takes record-shaped values (classes, trial classes, courses)
//! and produces display strings or numeric summaries. It never fetches or
//! stores records.
//!
//! ## Features
//!
//! - **12-hour display**: `14:05` to `02:05 PM`, with fixed per-country
//!   offsets for students abroad.
//! - **Sentinels, not panics**: display functions render `"Invalid time"` or
//!   `"Invalid date"` for malformed input; `try_*` variants return a
//!   [`FormatError`] instead.
//! - **Injected clock**: relative times and "today" come from a [`Clock`].
//! - **Booking slots**: evenly spaced start times that always include the
//!   end boundary.
//! - **Statistics**: today's merged schedule, monthly student stats, teacher
//!   stats, course progress colours, attendance percentages.
//!
//! ## Example
//!
//! ```rust
//! use classbook_core::prelude::*;
//!
//! assert_eq!(format_time_12_hour("14:05"), "02:05 PM");
//! assert_eq!(format_student_time("10:00", "Saudi Arabia"), "11:00 AM (KSA)");
//! assert_eq!(generate_time_slots(9, 10, 30), ["09:00", "09:30", "10:00"]);
//!
//! let clock = FixedClock::parse("2026-03-02T12:00:00+02:00").unwrap();
//! assert_eq!(format_relative_time("2026-03-02T09:30:00+02:00", clock.now()), "2 hours ago");
//! ```

pub mod clock;
pub mod error;
pub mod format;
pub mod models;
pub mod schedule;
pub mod slots;
pub mod stats;
pub mod time_of_day;
pub mod tz;

// Re-export commonly used types at the crate root
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{FormatError, Result};
pub use models::{
    CancellationReason, CancelledBy, ClassRecord, ClassStatus, CourseProgress, CourseRecord,
    Dataset, EntryKind, ProgressColor, ScheduleEntry, StudentMonthlyStats, TeacherStats,
    TrialClassRecord, YearMonth,
};
pub use schedule::merge_today_schedule;
pub use slots::{generate_time_slots, generate_time_slots_12_hour};
pub use stats::{
    attendance_percentage, cancelled_by, classify_cancellation, course_progress, progress_color,
    student_monthly_stats, teacher_stats,
};
pub use time_of_day::TimeOfDay;

/// Prelude module for convenient imports.
///
/// ```
/// use classbook_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::error::{FormatError, Result};
    pub use crate::format::*;
    pub use crate::models::*;
    pub use crate::schedule::{merge_today_schedule, schedule_csv_rows};
    pub use crate::slots::{generate_time_slots, generate_time_slots_12_hour};
    pub use crate::stats::*;
    pub use crate::time_of_day::TimeOfDay;
    pub use crate::tz::{StudentZone, parse_tz};
}
