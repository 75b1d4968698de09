//! Command implementations for the national day overlaps CLI.
//!
//! Provides subcommands that load the prepared dataset, run one analysis and
//! print it, or export every analysis as JSON for the chart layer.

use anyhow::Context;
use clap::Subcommand;
use log::info;
use ndo_core::event::Event;

pub mod overlaps;
pub mod report;
pub mod stats;

/// Dataset produced by the ingestion step.
pub const DEFAULT_DATA_PATH: &str = "independence_and_national_days_updated.csv";

#[derive(Subcommand)]
pub enum Command {
    /// Compare expected (binomial) and observed national day overlaps
    Overlaps {
        /// Path to the events CSV
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_PATH)]
        data: String,

        /// Event count for the binomial model (defaults to the number of valid dates)
        #[arg(short = 'n', long)]
        events: Option<u32>,
    },

    /// Show the distribution of national days by season
    Seasons {
        /// Path to the events CSV
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_PATH)]
        data: String,
    },

    /// Show hemisphere counts and the hemisphere-by-season table
    Hemispheres {
        /// Path to the events CSV
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_PATH)]
        data: String,
    },

    /// Show the distribution of national days by month
    Months {
        /// Path to the events CSV
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_PATH)]
        data: String,
    },

    /// Export every analysis as JSON
    Report {
        /// Path to the events CSV
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_PATH)]
        data: String,

        /// Output path for the JSON report
        #[arg(short = 'o', long)]
        output: String,

        /// Event count for the binomial model (defaults to the number of valid dates)
        #[arg(short = 'n', long)]
        events: Option<u32>,
    },
}

/// Read and parse the events CSV at `path`.
pub fn load_events(path: &str) -> anyhow::Result<Vec<Event>> {
    info!("Loading events from {}", path);
    let csv_data =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    let events =
        Event::parse_event_csv(&csv_data).with_context(|| format!("Failed to parse {}", path))?;
    Ok(events)
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Overlaps { data, events } => overlaps::run_overlaps(&data, events),
        Command::Seasons { data } => stats::run_seasons(&data),
        Command::Hemispheres { data } => stats::run_hemispheres(&data),
        Command::Months { data } => stats::run_months(&data),
        Command::Report {
            data,
            output,
            events,
        } => report::run_report(&data, &output, events),
    }
}
