//! Frequency tables over classified events: seasons, hemispheres, their
//! cross-tabulation and a calendar-month histogram.

use log::debug;
use ndo_core::{event::Event, hemisphere::Hemisphere, season::Season};
use serde::Serialize;
use std::collections::BTreeMap;

/// Abbreviated month names, one per histogram bin.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A category label and how many events carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount<T> {
    pub category: T,
    pub count: usize,
}

/// Counts per known hemisphere. Rows without one are only tallied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HemisphereCounts {
    pub counts: Vec<CategoryCount<Hemisphere>>,
    pub excluded: usize,
}

/// Hemisphere-by-season cross-tabulation.
///
/// Rows are the known hemispheres present in the data; columns are the seasons
/// present among those rows, ordered alphabetically by label. Missing cells
/// are zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HemisphereSeasonTable {
    pub seasons: Vec<Season>,
    pub rows: Vec<HemisphereSeasonRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HemisphereSeasonRow {
    pub hemisphere: Hemisphere,
    /// One count per entry of [`HemisphereSeasonTable::seasons`]
    pub counts: Vec<usize>,
}

/// Twelve calendar-month bins, January first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthHistogram {
    pub bins: [usize; 12],
    /// Events whose date could not be parsed
    pub excluded: usize,
}

/// Sort by count descending, ties in category order.
fn sorted_counts<T: Ord + Copy>(tally: BTreeMap<T, usize>) -> Vec<CategoryCount<T>> {
    let mut counts: Vec<CategoryCount<T>> = tally
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then(a.category.cmp(&b.category)));
    counts
}

/// Events per season, `Unknown` included, most frequent first.
pub fn season_counts(events: &[Event]) -> Vec<CategoryCount<Season>> {
    let mut tally: BTreeMap<Season, usize> = BTreeMap::new();
    for event in events {
        *tally.entry(event.season()).or_default() += 1;
    }
    sorted_counts(tally)
}

/// Events per hemisphere, most frequent first. Events without a known
/// hemisphere are excluded.
pub fn hemisphere_counts(events: &[Event]) -> HemisphereCounts {
    let mut tally: BTreeMap<Hemisphere, usize> = BTreeMap::new();
    let mut excluded = 0;
    for event in events {
        let hemisphere = event.hemisphere();
        if hemisphere.is_known() {
            *tally.entry(hemisphere).or_default() += 1;
        } else {
            debug!("No hemisphere for {}", event.country);
            excluded += 1;
        }
    }
    HemisphereCounts {
        counts: sorted_counts(tally),
        excluded,
    }
}

/// Cross-tabulate known hemispheres against seasons.
pub fn hemisphere_season_table(events: &[Event]) -> HemisphereSeasonTable {
    let mut cells: BTreeMap<Hemisphere, BTreeMap<Season, usize>> = BTreeMap::new();
    for event in events {
        let hemisphere = event.hemisphere();
        if !hemisphere.is_known() {
            continue;
        }
        *cells
            .entry(hemisphere)
            .or_default()
            .entry(event.season())
            .or_default() += 1;
    }

    let mut seasons: Vec<Season> = cells
        .values()
        .flat_map(|row| row.keys().copied())
        .collect();
    seasons.sort_by_key(|season| season.label());
    seasons.dedup();

    let rows = cells
        .into_iter()
        .map(|(hemisphere, row)| HemisphereSeasonRow {
            hemisphere,
            counts: seasons
                .iter()
                .map(|season| row.get(season).copied().unwrap_or(0))
                .collect(),
        })
        .collect();

    HemisphereSeasonTable { seasons, rows }
}

impl HemisphereSeasonTable {
    pub fn get(&self, hemisphere: Hemisphere, season: Season) -> usize {
        let column = self.seasons.iter().position(|s| *s == season);
        let row = self.rows.iter().find(|r| r.hemisphere == hemisphere);
        match (row, column) {
            (Some(row), Some(column)) => row.counts[column],
            _ => 0,
        }
    }

    /// The season with the highest count in a hemisphere's row. Ties go to
    /// the first column.
    pub fn most_common_season(&self, hemisphere: Hemisphere) -> Option<CategoryCount<Season>> {
        let row = self.rows.iter().find(|r| r.hemisphere == hemisphere)?;
        let mut best: Option<CategoryCount<Season>> = None;
        for (season, &count) in self.seasons.iter().zip(&row.counts) {
            if best.as_ref().map_or(true, |b| count > b.count) {
                best = Some(CategoryCount {
                    category: *season,
                    count,
                });
            }
        }
        best
    }

    /// Most common season for Northern and Southern, where present.
    pub fn most_common_by_hemisphere(&self) -> Vec<(Hemisphere, CategoryCount<Season>)> {
        Hemisphere::KNOWN
            .iter()
            .filter_map(|&h| self.most_common_season(h).map(|c| (h, c)))
            .collect()
    }
}

/// Bin events by calendar month. Unparseable dates are excluded.
pub fn month_histogram(events: &[Event]) -> MonthHistogram {
    let mut bins = [0usize; 12];
    let mut excluded = 0;
    for event in events {
        match event.month() {
            Some(month) => bins[month as usize - 1] += 1,
            None => excluded += 1,
        }
    }
    MonthHistogram { bins, excluded }
}

impl MonthHistogram {
    /// `(month name, count)` pairs, January first.
    pub fn labeled(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        MONTH_NAMES.iter().copied().zip(self.bins.iter().copied())
    }

    pub fn total(&self) -> usize {
        self.bins.iter().sum()
    }
}
