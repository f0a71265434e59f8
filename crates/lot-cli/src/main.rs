//! `parking-lot` CLI — report the busiest parking lot interval per day.
//!
//! ## Usage
//!
//! ```sh
//! # One day of "HH:MM HH:MM" lines (defaults to ./numbers.txt)
//! parking-lot single-day -i numbers.txt
//!
//! # Multi-day JSON log (defaults to ./test_data1.json)
//! parking-lot multi-day -i test_data1.json
//!
//! # Machine-readable output
//! parking-lot --json multi-day
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG=debug` for per-day details.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lot_engine::DayReport;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "parking-lot",
    version,
    about = "Find when a parking lot held the most cars"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print reports as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one day of "HH:MM HH:MM" arrival/leave pairs
    SingleDay {
        /// Input text file, one vehicle per line
        #[arg(short, long, default_value = "numbers.txt")]
        input: PathBuf,
    },
    /// Analyze a JSON log of visits spanning several days
    MultiDay {
        /// Input JSON file with Id/ArrivalTime/LeaveTime records
        #[arg(short, long, default_value = "test_data1.json")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let reports = match &cli.command {
        Commands::SingleDay { input } => single_day(input)?,
        Commands::MultiDay { input } => multi_day(input)?,
    };

    let output = if cli.json {
        let mut json = lot_engine::render_json(&reports).context("Failed to serialize reports")?;
        json.push('\n');
        json
    } else {
        lot_engine::render_reports(&reports)
    };
    print!("{}", output);

    Ok(())
}

fn single_day(path: &Path) -> Result<Vec<DayReport>> {
    let text = read(path)?;
    let events = lot_engine::parse_time_pairs(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(vec![lot_engine::analyze_day(&events)])
}

fn multi_day(path: &Path) -> Result<Vec<DayReport>> {
    let json = read(path)?;
    let records = lot_engine::parse_json_records(&json)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!(records = records.len(), "loaded parking records");

    let days = lot_engine::group_by_day(lot_engine::records_to_events(&records));
    Ok(lot_engine::analyze_days(&days))
}

fn read(path: &Path) -> Result<String> {
    lot_engine::read_input(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}
