//! # Shipping Quote CLI
//!
//! Prints the tiered shipping rate a cart would be offered.
//!
//! ## Usage
//! ```bash
//! # Default schedule, 16 items → $19.02
//! TIERSHIP_ENABLED=yes cargo run -p tiership-quote -- --qty 16
//!
//! # Settings file, two cart lines, shipping to Canada
//! cargo run -p tiership-quote -- --settings ./shipping.json --country CA --qty 3 --qty 2
//!
//! # Only check that a settings file is valid
//! cargo run -p tiership-quote -- --settings ./shipping.json --check
//! ```

mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use tiership_core::validation::normalize_country_code;
use tiership_core::{Destination, ShippingMethod};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use crate::error::{QuoteError, QuoteResult};

/// Parsed command line.
#[derive(Debug, Default, PartialEq, Eq)]
struct QuoteArgs {
    settings_path: Option<PathBuf>,
    country: Option<String>,
    quantities: Vec<u32>,
    check_only: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Run(QuoteArgs),
}

fn main() -> ExitCode {
    init_tracing();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return ExitCode::from(2);
        }
    };

    let args = match command {
        Command::Help => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Command::Run(args) => args,
    };

    match run(&args, |key| std::env::var(key).ok()) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Loads and validates settings, then quotes (or just reports validity).
///
/// `var` looks up `TIERSHIP_*` overrides.
fn run<F>(args: &QuoteArgs, var: F) -> QuoteResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    let settings = config::load_settings(args.settings_path.as_deref(), var)?;
    let method = ShippingMethod::from_settings(&settings)?;
    info!(label = method.label(), enabled = method.is_enabled(), "Shipping settings valid");

    if args.check_only {
        return Ok("Settings OK".to_string());
    }

    let destination = Destination {
        country: args.country.clone(),
    };

    match method.quote_lines(&destination, &args.quantities) {
        Some(quote) => Ok(serde_json::to_string_pretty(&quote)?),
        None => Ok(format!(
            "{} is not offered for this destination",
            method.label()
        )),
    }
}

fn parse_args<I>(args: I) -> QuoteResult<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = QuoteArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--settings" | "-s" => {
                let path = next_value(&mut args, &arg)?;
                parsed.settings_path = Some(PathBuf::from(path));
            }
            "--country" | "-c" => {
                let code = next_value(&mut args, &arg)?;
                parsed.country = normalize_country_code(&code);
            }
            "--qty" | "-q" => {
                let value = next_value(&mut args, &arg)?;
                let qty = value.trim().parse().map_err(|_| {
                    QuoteError::InvalidArgument(format!(
                        "{arg} expects a whole number, got '{value}'"
                    ))
                })?;
                parsed.quantities.push(qty);
            }
            "--check" => parsed.check_only = true,
            "--help" | "-h" => return Ok(Command::Help),
            other => {
                return Err(QuoteError::InvalidArgument(format!("unknown option '{other}'")));
            }
        }
    }

    if parsed.quantities.is_empty() && !parsed.check_only {
        return Err(QuoteError::InvalidArgument(
            "at least one --qty is required".to_string(),
        ));
    }

    Ok(Command::Run(parsed))
}

fn next_value<I>(args: &mut I, flag: &str) -> QuoteResult<String>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| QuoteError::InvalidArgument(format!("{flag} requires a value")))
}

fn print_usage() {
    eprintln!("Usage: tiership-quote [OPTIONS] --qty <N>...");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -s, --settings <PATH>  JSON settings file (default: built-in defaults)");
    eprintln!("  -c, --country <CODE>   Destination country code, e.g. US");
    eprintln!("  -q, --qty <N>          Quantity of one cart line (repeatable)");
    eprintln!("      --check            Validate settings and exit");
    eprintln!("  -h, --help             Show this help message");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show pricing decisions
/// - Default: INFO, DEBUG for tiership crates
///
/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tiership=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .with_writer(std::io::stderr)
        .init();
}
