use std::process::ExitCode;

use chrono::{DateTime, FixedOffset};
use classbook_core::error::{Result as FormatResult, or_sentinel};
use classbook_core::format::{
    try_day_name, try_format_date_short, try_format_date_with_day, try_format_relative_time,
};
use serde::Serialize;

use crate::cli::DateArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::read_lines;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateStyle {
    DayName,
    Short,
    WithDay,
    Relative,
}

fn parse_date_style(s: &str) -> CliResult<DateStyle> {
    match s.to_lowercase().as_str() {
        "day-name" => Ok(DateStyle::DayName),
        "short" => Ok(DateStyle::Short),
        "with-day" => Ok(DateStyle::WithDay),
        "relative" => Ok(DateStyle::Relative),
        _ => Err(CliError::input(format!(
            "Invalid style '{}'. Expected: day-name, short, with-day, relative",
            s
        ))),
    }
}

#[derive(Debug, Serialize)]
struct DateLine {
    input: String,
    output: String,
    valid: bool,
}

pub fn run_date(
    args: DateArgs,
    now: DateTime<FixedOffset>,
    output_format: OutputFormat,
) -> CliResult<ExitCode> {
    let style = parse_date_style(&args.style)?;

    for input in read_lines(&args.input, args.stdin)? {
        let result = format_line(&input, style, now);
        let line = DateLine {
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

fn format_line(input: &str, style: DateStyle, now: DateTime<FixedOffset>) -> FormatResult<String> {
    match style {
        DateStyle::DayName => try_day_name(input),
        DateStyle::Short => try_format_date_short(input),
        DateStyle::WithDay => try_format_date_with_day(input),
        DateStyle::Relative => try_format_relative_time(input, now),
    }
}
