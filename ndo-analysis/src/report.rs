//! Serializable bundle of every analysis output, for an external chart
//! renderer to consume as JSON.

use crate::{
    aggregate::{
        hemisphere_counts, hemisphere_season_table, month_histogram, season_counts, CategoryCount,
        HemisphereCounts, HemisphereSeasonTable, MonthHistogram,
    },
    binomial::{BinomialDistribution, ExpectedOverlap, THEORETICAL_OVERLAP_SIZES},
    overlap::{EmpiricalOverlaps, OverlapComparison},
};
use log::info;
use ndo_core::{error::Result, event::Event, hemisphere::Hemisphere, season::Season};
use serde::Serialize;

/// One choropleth location: an alpha-3 code colored by season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapRow {
    pub alpha3: &'static str,
    pub season: Season,
    pub country: String,
    pub display_date: String,
}

/// Legend entry for a season color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonColor {
    pub season: Season,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub total_events: usize,
    pub valid_dates: usize,
    pub dropped_dates: usize,
    /// Event count fed to the binomial model
    pub model_events: u32,
    pub theoretical: Vec<ExpectedOverlap>,
    pub comparison: Vec<OverlapComparison>,
    pub season_counts: Vec<CategoryCount<Season>>,
    pub season_colors: Vec<SeasonColor>,
    pub hemisphere_counts: HemisphereCounts,
    pub hemisphere_seasons: HemisphereSeasonTable,
    pub most_common_seasons: Vec<(Hemisphere, CategoryCount<Season>)>,
    pub month_histogram: MonthHistogram,
    pub map: Vec<MapRow>,
}

/// Choropleth rows for every event with a resolvable alpha-3 code.
pub fn map_rows(events: &[Event]) -> Vec<MapRow> {
    events
        .iter()
        .filter_map(|event| {
            event.alpha3().map(|alpha3| MapRow {
                alpha3,
                season: event.season(),
                country: event.country.clone(),
                display_date: event.display_date.clone(),
            })
        })
        .collect()
}

/// The season color legend, in season order.
pub fn season_colors() -> Vec<SeasonColor> {
    Season::ALL
        .iter()
        .filter_map(|&season| season.color().map(|color| SeasonColor { season, color }))
        .collect()
}

impl AnalysisReport {
    /// Run every analysis over `events`.
    ///
    /// The binomial model uses `model_events` when given, otherwise the number
    /// of events with a valid date. The theoretical series stops at that `n`.
    pub fn build(events: &[Event], model_events: Option<u32>) -> Result<AnalysisReport> {
        let overlaps = EmpiricalOverlaps::from_events(events);
        let n = model_events.unwrap_or(overlaps.event_count() as u32);
        let model = BinomialDistribution::for_calendar_year(n)?;
        info!(
            "Building report for {} events (model n = {})",
            events.len(),
            n
        );
        let hemisphere_seasons = hemisphere_season_table(events);
        Ok(AnalysisReport {
            total_events: events.len(),
            valid_dates: overlaps.event_count(),
            dropped_dates: overlaps.dropped(),
            model_events: n,
            theoretical: model
                .expected_overlaps(THEORETICAL_OVERLAP_SIZES.filter(|&k| model.supports(k)))?,
            comparison: overlaps.compare(&model)?,
            season_counts: season_counts(events),
            season_colors: season_colors(),
            hemisphere_counts: hemisphere_counts(events),
            most_common_seasons: hemisphere_seasons.most_common_by_hemisphere(),
            hemisphere_seasons,
            month_histogram: month_histogram(events),
            map: map_rows(events),
        })
    }
}
