use std::process::ExitCode;

use classbook_core::slots::{generate_time_slots, generate_time_slots_12_hour};

use crate::cli::SlotsArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};

pub fn run_slots(args: SlotsArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let slots = match args.clock.to_lowercase().as_str() {
        "24h" => generate_time_slots(args.start_hour, args.end_hour, args.interval),
        "12h" => generate_time_slots_12_hour(args.start_hour, args.end_hour, args.interval),
        _ => {
            return Err(CliError::input(format!(
                "Invalid clock '{}'. Expected: 24h, 12h",
                args.clock
            )));
        }
    };

    if slots.is_empty() {
        tracing::warn!(
            start_hour = args.start_hour,
            end_hour = args.end_hour,
            interval = args.interval,
            "no slots for these parameters"
        );
    }

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&slots)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text | OutputFormat::Csv => {
            for slot in slots {
                println!("{}", slot);
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
