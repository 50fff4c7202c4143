use std::process::ExitCode;

use clap::Parser;
use classbook_core::Clock;
use tracing_subscriber::EnvFilter;

mod cli;
mod date_cmd;
mod error;
mod now_cmd;
mod schedule_cmd;
mod shared;
mod slots_cmd;
mod stats_cmd;
mod time_cmd;

use cli::{Cli, Commands};
use date_cmd::run_date;
use error::{OutputFormat, output_format_hint, parse_output_format, render_error};
use now_cmd::run_now;
use schedule_cmd::run_schedule;
use shared::build_clock;
use slots_cmd::run_slots;
use stats_cmd::run_stats;
use time_cmd::run_time;

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse `--output-format`, rendering the failure in the best-guess format.
fn resolve_output_format(raw: &str, allowed: &[OutputFormat]) -> Result<OutputFormat, ExitCode> {
    let fallback = output_format_hint(raw);
    parse_output_format(raw, allowed).map_err(|err| render_error(&err, fallback))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(tz = %cli.tz, now = ?cli.now, "parsed arguments");

    let clock = || build_clock(&cli.tz, cli.now.as_deref());

    match cli.command {
        Commands::Time(args) => {
            let output_format =
                match resolve_output_format(&args.output_format, OutputFormat::JSON_TEXT) {
                    Ok(format) => format,
                    Err(code) => return code,
                };

            match run_time(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Date(args) => {
            let output_format =
                match resolve_output_format(&args.output_format, OutputFormat::JSON_TEXT) {
                    Ok(format) => format,
                    Err(code) => return code,
                };

            match clock().and_then(|clock| run_date(args, clock.now(), output_format)) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Slots(args) => {
            let output_format =
                match resolve_output_format(&args.output_format, OutputFormat::JSON_TEXT) {
                    Ok(format) => format,
                    Err(code) => return code,
                };

            match run_slots(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Schedule(args) => {
            let output_format =
                match resolve_output_format(&args.output_format, OutputFormat::JSON_TEXT_CSV) {
                    Ok(format) => format,
                    Err(code) => return code,
                };

            match clock().and_then(|clock| run_schedule(args, clock.as_ref(), output_format)) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Stats(args) => {
            let output_format =
                match resolve_output_format(args.command.output_format(), OutputFormat::JSON_TEXT) {
                    Ok(format) => format,
                    Err(code) => return code,
                };

            match clock().and_then(|clock| run_stats(args.command, clock.as_ref(), output_format))
            {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Now(args) => {
            let output_format =
                match resolve_output_format(&args.output_format, OutputFormat::JSON_TEXT) {
                    Ok(format) => format,
                    Err(code) => return code,
                };

            match clock().and_then(|clock| run_now(args, clock.as_ref(), output_format)) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
    }
}
