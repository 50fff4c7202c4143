use std::process::ExitCode;

use classbook_core::error::{Result as FormatResult, or_sentinel};
use classbook_core::format::{
    try_add_minutes_to_time, try_format_egypt_time, try_format_student_time, try_format_time,
    try_format_time_12_hour,
};
use serde::Serialize;

use crate::cli::TimeArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::read_lines;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeStyle {
    TwelveHour,
    Plain,
    Egypt,
    Student,
}

fn parse_time_style(s: &str) -> CliResult<TimeStyle> {
    match s.to_lowercase().as_str() {
        "12h" => Ok(TimeStyle::TwelveHour),
        "plain" => Ok(TimeStyle::Plain),
        "egypt" => Ok(TimeStyle::Egypt),
        "student" => Ok(TimeStyle::Student),
        _ => Err(CliError::input(format!(
            "Invalid style '{}'. Expected: 12h, plain, egypt, student",
            s
        ))),
    }
}

/// One formatted input line. Malformed input shows the sentinel.
#[derive(Debug, Serialize)]
struct TimeLine {
    input: String,
    output: String,
    valid: bool,
}

pub fn run_time(args: TimeArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let style = parse_time_style(&args.style)?;

    for input in read_lines(&args.input, args.stdin)? {
        let result = format_line(&input, style, &args.zone, args.add_minutes);
        let line = TimeLine {
            valid: result.is_ok(),
            output: or_sentinel(result),
            input,
        };

        match output_format {
            OutputFormat::Json => {
                let json = serde_json::to_string(&line)
                    .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
                println!("{}", json);
            }
            OutputFormat::Text | OutputFormat::Csv => {
                println!("{} -> {}", line.input, line.output);
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn format_line(
    input: &str,
    style: TimeStyle,
    zone: &str,
    add_minutes: Option<i64>,
) -> FormatResult<String> {
    let time = match add_minutes {
        Some(minutes) => try_add_minutes_to_time(input, minutes)?,
        None => input.to_string(),
    };

    match style {
        TimeStyle::TwelveHour => try_format_time_12_hour(&time),
        TimeStyle::Plain => try_format_time(&time),
        TimeStyle::Egypt => try_format_egypt_time(&time),
        TimeStyle::Student => try_format_student_time(&time, zone),
    }
}
