//! `slots` CLI — compute a host's bookable slots from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Compute slots for the query's date (stdin → stdout)
//! cat query.json | slots compute
//!
//! # Override the date and slot length
//! slots compute -i query.json --date 2026-03-05 --duration 30
//!
//! # Render the slots in the viewer's timezone
//! slots compute -i query.json --viewer-tz America/Los_Angeles
//!
//! # List a whole week
//! slots range -i query.json --from 2026-03-02 --to 2026-03-08
//! ```
//!
//! The query file uses the same JSON shape as the WASM binding. Diagnostics go
//! to stderr; set `RUST_LOG=slot_engine=debug` to trace each computation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slot_engine::query::SlotDto;
use slot_engine::{CandidateSlot, SlotQuery};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Compute bookable availability slots for a host"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the free slots for one host-local date
    Compute {
        /// Query JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Date to compute (YYYY-MM-DD), overriding the query's date
        #[arg(long)]
        date: Option<String>,
        /// Slot length in minutes, overriding the query's slotDurationMinutes
        #[arg(long, allow_negative_numbers = true)]
        duration: Option<i64>,
        /// Render slots in this IANA timezone instead of UTC
        #[arg(long)]
        viewer_tz: Option<String>,
    },
    /// Compute the free slots for every date in an inclusive range
    Range {
        /// Query JSON file (reads from stdin if omitted); its date is ignored
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// First date (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        /// Last date (YYYY-MM-DD)
        #[arg(long)]
        to: String,
        /// Slot length in minutes, overriding the query's slotDurationMinutes
        #[arg(long, allow_negative_numbers = true)]
        duration: Option<i64>,
        /// Render slots in this IANA timezone instead of UTC
        #[arg(long)]
        viewer_tz: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compute {
            input,
            output,
            date,
            duration,
            viewer_tz,
        } => {
            let mut query = read_query(input.as_deref())?;
            if let Some(date) = date {
                query.date = date;
            }
            if duration.is_some() {
                query.slot_duration_minutes = duration;
            }
            debug!("Computing slots for {} in {}", query.date, query.policy.timezone);

            let slots = query.compute().context("Failed to compute slots")?;
            let rendered = render(&slots, viewer_tz.as_deref())?;
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Range {
            input,
            output,
            from,
            to,
            duration,
            viewer_tz,
        } => {
            let mut query = read_query(input.as_deref())?;
            if duration.is_some() {
                query.slot_duration_minutes = duration;
            }
            let policy = query.policy.to_policy().context("Invalid policy")?;
            let busy = query.busy().context("Invalid busy interval")?;

            let slots = slot_engine::compute_slots_range(
                &from,
                &to,
                &policy,
                &busy,
                query.duration_minutes(),
            )
            .context("Failed to compute slots")?;
            let rendered = render(&slots, viewer_tz.as_deref())?;
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

/// Pretty-print slots as UTC, or in the viewer's zone when one is given.
fn render(slots: &[CandidateSlot], viewer_tz: Option<&str>) -> Result<String> {
    let json = match viewer_tz {
        Some(tz) => {
            let local = slot_engine::localize_slots(slots, tz).context("Invalid viewer timezone")?;
            serde_json::to_string_pretty(&local)?
        }
        None => {
            let dtos: Vec<SlotDto> = slots.iter().map(SlotDto::from).collect();
            serde_json::to_string_pretty(&dtos)?
        }
    };
    Ok(json)
}

fn read_query(path: Option<&str>) -> Result<SlotQuery> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse query JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
