//! Error types for classbook-core.
//!
//! Formatting operations report failures through [`FormatError`]. Each
//! variant has a fixed sentinel string which is what the display-facing
//! functions render in place of a value that could not be formatted.

use thiserror::Error;

/// Sentinel rendered for a malformed time of day.
pub const INVALID_TIME: &str = "Invalid time";
/// Sentinel rendered for an unparsable date or timestamp.
pub const INVALID_DATE: &str = "Invalid date";
/// Sentinel rendered for any other malformed argument.
pub const INVALID_INPUT: &str = "Invalid input";

/// The error type for classbook formatting operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Time of day was missing, non-numeric or out of range.
    #[error("Invalid time: '{0}'")]
    InvalidTime(String),

    /// Date or timestamp could not be parsed.
    #[error("Invalid date: '{0}'")]
    InvalidDate(String),

    /// Any other malformed argument.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl FormatError {
    /// The fixed display string for this error kind.
    pub fn sentinel(&self) -> &'static str {
        match self {
            FormatError::InvalidTime(_) => INVALID_TIME,
            FormatError::InvalidDate(_) => INVALID_DATE,
            FormatError::InvalidInput(_) => INVALID_INPUT,
        }
    }
}

/// Result type alias for classbook operations.
pub type Result<T> = std::result::Result<T, FormatError>;

/// Render a formatting result for display, substituting the sentinel on error.
pub fn or_sentinel(result: Result<String>) -> String {
    match result {
        Ok(s) => s,
        Err(e) => {
            tracing::debug!(error = %e, "rendering sentinel");
            e.sentinel().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_per_kind() {
        assert_eq!(
            FormatError::InvalidTime("25:00".into()).sentinel(),
            "Invalid time"
        );
        assert_eq!(FormatError::InvalidDate("x".into()).sentinel(), "Invalid date");
        assert_eq!(
            FormatError::InvalidInput("x".into()).sentinel(),
            "Invalid input"
        );
    }

    #[test]
    fn or_sentinel_passes_values_through() {
        assert_eq!(or_sentinel(Ok("09:00".to_string())), "09:00");
        assert_eq!(
            or_sentinel(Err(FormatError::InvalidTime("".into()))),
            "Invalid time"
        );
    }

    #[test]
    fn error_message_names_input() {
        let err = FormatError::InvalidTime("abc".into());
        assert_eq!(err.to_string(), "Invalid time: 'abc'");
    }
}
