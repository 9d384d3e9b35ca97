//! `slot` CLI — check booking conflicts and find open gaps from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Check a candidate time against a slot file
//! slot check --time "2025-06-19 13:30" -i slots.json
//!
//! # Same, reading the slot list from stdin
//! cat slots.json | slot check --time "2025-06-19 13:30"
//!
//! # Override the spacing policy
//! slot check --time "2025-06-19 14:00" -i slots.json --min-gap 120
//!
//! # Find the widest gap between adjacent open slots
//! slot optimal -i slots.json
//!
//! # Length of a slot identifier
//! slot analyze slot-001
//! ```
//!
//! Slot files are JSON arrays of `{"id", "time", "reserved"}` records with
//! times in `YYYY-MM-DD HH:MM` format.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use slot_engine::{
    analyze_slot, check_conflict_with_policy, find_optimal_gap, SessionPolicy, Slot,
};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "slot", version, about = "Lesson slot reservation conflict engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a candidate time conflicts with reserved slots
    Check {
        /// Candidate time in "YYYY-MM-DD HH:MM" format
        #[arg(short, long)]
        time: String,
        /// Slot list JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Minimum spacing from any reserved session start, in minutes
        #[arg(long, default_value_t = 60)]
        min_gap: i64,
        /// Session duration in minutes
        #[arg(long, default_value_t = 60)]
        duration: i64,
    },
    /// Find the widest gap between adjacent unreserved slots
    Optimal {
        /// Slot list JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the character count of a slot identifier
    Analyze {
        /// Slot identifier
        id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            time,
            input,
            min_gap,
            duration,
        } => {
            let slots = read_slots(input.as_deref())?;
            let policy = SessionPolicy {
                duration_minutes: duration,
                min_gap_minutes: min_gap,
            };
            let has_conflict = check_conflict_with_policy(&slots, &time, policy)
                .context("Conflict check failed")?;

            let message = if has_conflict {
                "Time conflict detected"
            } else {
                "No conflict"
            };
            println!(
                "{}",
                json!({ "hasConflict": has_conflict, "message": message })
            );
        }
        Commands::Optimal { input } => {
            let slots = read_slots(input.as_deref())?;
            let optimal = find_optimal_gap(&slots).context("Gap search failed")?;

            let message = if optimal.gap_minutes > 0 {
                "Optimal slot calculated"
            } else {
                "No qualifying gap found"
            };
            println!("{}", json!({ "optimal": optimal, "message": message }));
        }
        Commands::Analyze { id } => {
            println!("{}", analyze_slot(&id));
        }
    }

    Ok(())
}

/// Read and deserialize a slot list from a file or stdin.
fn read_slots(path: Option<&str>) -> Result<Vec<Slot>> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("Slot list must be a JSON array of slot records")
}
