//! JSON export of the full analysis.

use crate::load_events;
use anyhow::Context;
use log::info;
use ndo_analysis::report::AnalysisReport;

/// Build the full report and write it to `output` as pretty JSON.
pub fn run_report(data: &str, output: &str, model_events: Option<u32>) -> anyhow::Result<()> {
    let events = load_events(data)?;
    let report = AnalysisReport::build(&events, model_events)?;
    let json = serde_json::to_string_pretty(&report)?;
    std::fs::write(output, json).with_context(|| format!("Failed to write {}", output))?;
    info!(
        "Report complete. {} events analyzed, written to {}",
        report.total_events, output
    );
    Ok(())
}
