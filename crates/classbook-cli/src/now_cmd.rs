use std::process::ExitCode;

use classbook_core::Clock;
use classbook_core::format::current_date_time;

use crate::cli::NowArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};

pub fn run_now(_args: NowArgs, clock: &dyn Clock, output_format: OutputFormat) -> CliResult<ExitCode> {
    let current = current_date_time(clock);

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&current)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text | OutputFormat::Csv => {
            println!("Date: {}", current.date);
            println!("Time: {}", current.time);
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
