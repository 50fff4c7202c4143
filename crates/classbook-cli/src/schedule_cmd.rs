use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use chrono::NaiveDate;
use classbook_core::format::format_time_12_hour;
use classbook_core::schedule::{SCHEDULE_CSV_HEADER, merge_today_schedule, schedule_csv_rows};
use classbook_core::{Clock, ScheduleEntry};
use serde::Serialize;

use crate::cli::ScheduleArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{load_dataset, parse_day};

#[derive(Debug, Serialize)]
struct ScheduleOutput<'a> {
    date: String,
    entries: &'a [ScheduleEntry],
}

pub fn run_schedule(
    args: ScheduleArgs,
    clock: &dyn Clock,
    output_format: OutputFormat,
) -> CliResult<ExitCode> {
    let today = match &args.today {
        Some(day) => parse_day(day)?,
        None => clock.today(),
    };
    let dataset = load_dataset(&args.input)?;

    let entries = merge_today_schedule(&dataset.classes, &dataset.trial_classes, today);

    match output_format {
        OutputFormat::Json => {
            let output = ScheduleOutput {
                date: today.format("%Y-%m-%d").to_string(),
                entries: &entries,
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => print_text(&entries, today),
        OutputFormat::Csv => {
            let csv = schedule_csv(&entries)
                .map_err(|e| CliError::runtime(format!("Failed to write CSV: {:#}", e)))?;
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(csv.as_bytes())
                .map_err(|e| CliError::runtime(format!("Failed to write output: {}", e)))?;
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn print_text(entries: &[ScheduleEntry], today: NaiveDate) {
    if entries.is_empty() {
        println!("No classes on {}", today.format("%Y-%m-%d"));
        return;
    }

    for entry in entries {
        let student = entry
            .student_name
            .as_deref()
            .or(entry.student_id.as_deref())
            .unwrap_or("-");
        let teacher = entry
            .teacher_name
            .as_deref()
            .or(entry.teacher_id.as_deref())
            .unwrap_or("-");

        println!(
            "{} - {} | {} | {} | {} | {} | {}",
            format_time_12_hour(&entry.start_time),
            format_time_12_hour(&entry.end_time),
            entry.kind,
            entry.id,
            student,
            teacher,
            entry.status
        );
    }
}

fn schedule_csv(entries: &[ScheduleEntry]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(SCHEDULE_CSV_HEADER)
        .context("Failed to write CSV header")?;
    for row in schedule_csv_rows(entries) {
        wtr.write_record(&row)
            .with_context(|| format!("Failed to write CSV row for '{}'", row[0]))?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV: {}", e))?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}
