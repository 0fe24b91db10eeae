//! `slots` CLI -- compute booking slots from JSON requests on the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Compute all slots for a request (stdin → stdout)
//! cat request.json | slots compute
//!
//! # From file to file, pretty-printed
//! slots compute -i request.json -o slots.json --pretty
//!
//! # Override the 30-minute stride (also read from SLOTS_STRIDE_MINUTES)
//! slots compute -i request.json --stride 15
//!
//! # Earliest bookable slot, or `null`
//! slots next -i request.json
//!
//! # Check a vendor's operating-hours table before saving it
//! slots validate -i hours.json
//!
//! # Debug logging to stderr (or set RUST_LOG)
//! slots -v compute -i request.json
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use slot_engine::{first_available_slot, OperatingHours, SlotRequest, TimeSlot};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Helensvale Connect booking-slot calculator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute every candidate slot for a request
    Compute(RequestArgs),
    /// Print the earliest available slot for a request (or `null`)
    Next(RequestArgs),
    /// Validate an operating-hours table
    Validate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[derive(Args)]
struct RequestArgs {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Minutes between candidate start times (overrides the request's strideMinutes)
    #[arg(long, env = "SLOTS_STRIDE_MINUTES")]
    stride: Option<u32>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Compute(args) => {
            let slots = evaluate(&args)?;
            let json = to_json(&slots, args.pretty)?;
            write_output(args.output.as_deref(), &json)?;
        }
        Commands::Next(args) => {
            let slots = evaluate(&args)?;
            let next: Option<TimeSlot> = first_available_slot(&slots);
            debug!(found = next.is_some(), "next available slot");
            let json = to_json(&next, args.pretty)?;
            write_output(args.output.as_deref(), &json)?;
        }
        Commands::Validate { input } => {
            let raw = read_input(input.as_deref())?;
            let hours: OperatingHours =
                serde_json::from_str(&raw).context("Failed to parse operating hours JSON")?;
            hours.validate().context("Invalid operating hours")?;
            let open_days = hours.iter().filter(|(_, day)| day.is_open).count();
            println!("OK: {} open day(s)", open_days);
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays pure JSON.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn evaluate(args: &RequestArgs) -> Result<Vec<TimeSlot>> {
    let raw = read_input(args.input.as_deref())?;
    let request = SlotRequest::from_json(&raw).context("Failed to parse slot request")?;
    request
        .evaluate_with(args.stride)
        .context("Failed to compute slots")
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    json.push('\n');
    Ok(json)
}

/// The whole request body, from `path` or stdin.
fn read_input(path: Option<&Path>) -> Result<String> {
    let Some(path) = path else {
        let mut raw = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut raw)
            .context("Failed to read from stdin")?;
        return Ok(raw);
    };
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

fn write_output(path: Option<&Path>, json: &str) -> Result<()> {
    if let Some(path) = path {
        return fs::write(path, json)
            .with_context(|| format!("Failed to write file: {}", path.display()));
    }
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(json.as_bytes())
        .context("Failed to write to stdout")?;
    stdout.flush().context("Failed to flush stdout")
}
