//! Station uptime report tool
//!
//! Computes per-station uptime percentages from a charger availability
//! report file.
//!
//! ```sh
//! # Plain report, one "<station_id> <pct>" line per station
//! uptime-report input.txt
//!
//! # JSON output
//! uptime-report --format json input.txt
//!
//! # Validate the file without computing
//! uptime-report --check input.txt
//! ```
//!
//! On any malformed input the tool prints exactly `ERROR` on stdout and
//! exits non-zero; diagnostics go to stderr via tracing.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::error;

use texnouz_uptime::{compute_station_uptimes, load_report, render_json, render_plain};

/// Per-station uptime percentages from charger availability reports.
#[derive(Parser, Debug)]
#[command(
    name = "uptime-report",
    version,
    about = "Compute per-station uptime from charger availability reports",
    long_about = "Reads a two-section report file ([Stations] membership, then \
                  [Charger Availability Reports] intervals) and prints the \
                  percentage of its observed window each station had at least \
                  one charger up."
)]
struct Cli {
    /// Path to the report file.
    file: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value = "plain")]
    format: Format,

    /// Parse and validate the file, print a summary, and exit.
    #[arg(long)]
    check: bool,

    /// Log level for diagnostics on stderr (trace, debug, info, warn, error).
    #[arg(short = 'l', long, default_value = "warn")]
    log_level: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Plain,
    Json,
}

fn init_tracing(level: &str) {
    // RUST_LOG takes precedence over the flag when set.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let network = match load_report(&cli.file) {
        Ok(network) => network,
        Err(err) => {
            error!(file = %cli.file.display(), %err, "failed to load report");
            // The machine-readable single failure indicator.
            println!("ERROR");
            return ExitCode::FAILURE;
        }
    };

    if cli.check {
        println!(
            "OK: {} stations, {} chargers, {} reports",
            network.station_count(),
            network.charger_count(),
            network.report_count()
        );
        return ExitCode::SUCCESS;
    }

    let results = compute_station_uptimes(&network);
    match cli.format {
        Format::Plain => print!("{}", render_plain(&results)),
        Format::Json => match render_json(&results) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!(%err, "failed to serialize results");
                println!("ERROR");
                return ExitCode::FAILURE;
            }
        },
    }
    ExitCode::SUCCESS
}
