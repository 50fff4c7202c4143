//! Timezone handling.
//!
//! Two unrelated notions of timezone live here:
//! - the school's base IANA timezone, used by the clock to decide what
//!   "now" and "today" are;
//! - [`StudentZone`], a fixed table of whole-hour offsets from the base
//!   (Egypt, UTC+2) used to show class times to students abroad. The table
//!   does not follow calendar or DST rules.

use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{FormatError, Result};

/// IANA name of the timezone class times are recorded in.
pub const DEFAULT_BASE_TZ: &str = "Africa/Cairo";

/// Parse an IANA timezone name into a [`chrono_tz::Tz`].
///
/// # Examples
///
/// ```
/// use classbook_core::tz::parse_tz;
///
/// let tz = parse_tz("Africa/Cairo").unwrap();
/// assert_eq!(tz.to_string(), "Africa/Cairo");
/// ```
pub fn parse_tz(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| FormatError::InvalidInput(format!("unknown timezone '{}'", name)))
}

/// Display zone for a student, picked from a free-text timezone label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentZone {
    /// Saudi Arabia, one hour ahead of the base.
    Ksa,
    /// United Arab Emirates, two hours ahead of the base.
    Uae,
    /// The base zone itself.
    Egypt,
    /// Unrecognized label; shown without offset.
    Local,
}

impl StudentZone {
    /// Match a timezone label, case-insensitively, against the known zones.
    ///
    /// Checked in order: Saudi, UAE, Egypt. Anything else is [`StudentZone::Local`].
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        let matches = |needles: &[&str]| needles.iter().any(|n| label.contains(n));

        if matches(&["saudi", "riyadh", "utc+3"]) {
            StudentZone::Ksa
        } else if matches(&["uae", "dubai", "utc+4"]) {
            StudentZone::Uae
        } else if matches(&["egypt", "cairo", "utc+2"]) {
            StudentZone::Egypt
        } else {
            StudentZone::Local
        }
    }

    /// Whole hours added to a base-zone time.
    pub fn offset_hours(&self) -> i64 {
        match self {
            StudentZone::Ksa => 1,
            StudentZone::Uae => 2,
            StudentZone::Egypt | StudentZone::Local => 0,
        }
    }

    /// Short label appended to formatted times.
    pub fn label(&self) -> &'static str {
        match self {
            StudentZone::Ksa => "KSA",
            StudentZone::Uae => "UAE",
            StudentZone::Egypt => "Egypt",
            StudentZone::Local => "Local",
        }
    }
}

impl std::fmt::Display for StudentZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
