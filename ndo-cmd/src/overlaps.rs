//! Expected versus observed overlap tables.

use crate::load_events;
use ndo_analysis::{
    binomial::{BinomialDistribution, THEORETICAL_OVERLAP_SIZES},
    overlap::EmpiricalOverlaps,
};

/// Print the theoretical series and the theoretical-vs-empirical comparison.
pub fn run_overlaps(data: &str, model_events: Option<u32>) -> anyhow::Result<()> {
    let events = load_events(data)?;
    let overlaps = EmpiricalOverlaps::from_events(&events);
    let n = model_events.unwrap_or(overlaps.event_count() as u32);
    let model = BinomialDistribution::for_calendar_year(n)?;

    println!("Independence/National Day Overlaps (n = {}, p = 1/365)", n);
    println!("{:>12} {:>14} {:>16}", "Overlap Size", "Probability", "Expected Days");
    let sizes = THEORETICAL_OVERLAP_SIZES.filter(|&k| model.supports(k));
    for row in model.expected_overlaps(sizes)? {
        println!(
            "{:>12} {:>14.6} {:>16.2}",
            row.k, row.probability, row.expected_days
        );
    }

    println!();
    println!(
        "Expected vs Empirical ({} valid dates, {} dropped, largest overlap {})",
        overlaps.event_count(),
        overlaps.dropped(),
        overlaps.largest_overlap()
    );
    println!(
        "{:>12} {:>18} {:>20}",
        "Overlap Size", "Empirical (Actual)", "Expected (Binomial)"
    );
    for row in overlaps.compare(&model)? {
        let expected = row
            .expected_rounded
            .map_or_else(|| "-".to_string(), |days| days.to_string());
        println!("{:>12} {:>18} {:>20}", row.k, row.empirical, expected);
    }
    Ok(())
}
