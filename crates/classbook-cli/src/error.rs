use std::fmt;
use std::process::ExitCode;

use serde::Serialize;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_INPUT_ERROR: u8 = 2;
pub const EXIT_RUNTIME_ERROR: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
    Csv,
}

impl OutputFormat {
    /// Formats of commands that print records or summaries.
    pub const JSON_TEXT: &'static [OutputFormat] = &[OutputFormat::Json, OutputFormat::Text];
    /// Formats of commands that also export a table.
    pub const JSON_TEXT_CSV: &'static [OutputFormat] =
        &[OutputFormat::Json, OutputFormat::Text, OutputFormat::Csv];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Runtime,
}

#[derive(Debug)]
pub struct CliError {
    kind: ErrorKind,
    message: String,
}

impl CliError {
    pub fn input(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Input,
            message: message.into(),
        }
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Runtime,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self.kind {
            ErrorKind::Input => EXIT_INPUT_ERROR,
            ErrorKind::Runtime => EXIT_RUNTIME_ERROR,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<classbook_core::FormatError> for CliError {
    fn from(err: classbook_core::FormatError) -> Self {
        CliError::input(err.to_string())
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Serialize)]
struct ErrorOutput {
    error: String,
    exit_code: u8,
}

pub fn render_error(err: &CliError, output_format: OutputFormat) -> ExitCode {
    tracing::debug!(kind = ?err.kind, "command failed");

    match output_format {
        OutputFormat::Json => {
            let envelope = ErrorOutput {
                error: err.message.clone(),
                exit_code: err.exit_code(),
            };

            match serde_json::to_string_pretty(&envelope) {
                Ok(json) => eprintln!("{}", json),
                Err(_) => eprintln!("Error: {}", err.message),
            }
        }
        OutputFormat::Text | OutputFormat::Csv => {
            eprintln!("Error: {}", err.message);
        }
    }

    ExitCode::from(err.exit_code())
}

pub fn output_format_hint(s: &str) -> OutputFormat {
    if s.eq_ignore_ascii_case("json") {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

/// Parse `--output-format` against the formats a command supports.
pub fn parse_output_format(s: &str, allowed: &[OutputFormat]) -> CliResult<OutputFormat> {
    allowed
        .iter()
        .copied()
        .find(|format| s.eq_ignore_ascii_case(format.name()))
        .ok_or_else(|| {
            let expected: Vec<&str> = allowed.iter().map(|format| format.name()).collect();
            CliError::input(format!(
                "Invalid output_format '{}'. Expected: {}",
                s,
                expected.join(", ")
            ))
        })
}
