use std::fs::File;
use std::io::{self, BufRead, BufReader};

use chrono::NaiveDate;
use classbook_core::{Clock, Dataset, FixedClock, SystemClock, YearMonth};

use crate::error::{CliError, CliResult};

/// Line-oriented input from a file, or stdin for `-`.
pub fn open_input(path: &str, stdin: bool) -> CliResult<Box<dyn BufRead>> {
    if stdin || path == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }

    let file = File::open(path)
        .map_err(|e| CliError::runtime(format!("Failed to open file '{}': {}", path, e)))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Non-empty, trimmed input lines.
pub fn read_lines(path: &str, stdin: bool) -> CliResult<Vec<String>> {
    let reader = open_input(path, stdin)?;
    let mut lines = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|e| CliError::runtime(format!("Failed to read line: {}", e)))?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    tracing::debug!(path, lines = lines.len(), "read input lines");
    Ok(lines)
}

/// Load a dataset of class, trial class and course records.
pub fn load_dataset(path: &str) -> CliResult<Dataset> {
    let reader = open_input(path, false)?;
    let dataset: Dataset = serde_json::from_reader(reader)
        .map_err(|e| CliError::input(format!("Invalid dataset '{}': {}", path, e)))?;

    tracing::debug!(
        path,
        classes = dataset.classes.len(),
        trial_classes = dataset.trial_classes.len(),
        courses = dataset.courses.len(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// The pinned clock when `--now` is given, otherwise the system clock in `--tz`.
pub fn build_clock(tz: &str, now: Option<&str>) -> CliResult<Box<dyn Clock>> {
    match now {
        Some(now) => {
            let clock = FixedClock::parse(now)
                .map_err(|_| CliError::input(format!("Invalid --now '{}'. Expected RFC3339", now)))?;
            Ok(Box::new(clock))
        }
        None => {
            let clock = SystemClock::in_zone(tz)
                .map_err(|e| CliError::input(format!("Invalid timezone '{}': {}", tz, e)))?;
            Ok(Box::new(clock))
        }
    }
}

pub fn parse_day(s: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| CliError::input(format!("Invalid date '{}'. Expected: YYYY-MM-DD", s)))
}

pub fn parse_month(s: &str) -> CliResult<YearMonth> {
    s.parse()
        .map_err(|_| CliError::input(format!("Invalid month '{}'. Expected: YYYY-MM", s)))
}
