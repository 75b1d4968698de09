//! Observed day coincidences and their comparison against the binomial model.

use crate::binomial::BinomialDistribution;
use log::{debug, warn};
use ndo_core::{display_date::DisplayDate, error::Result, event::Event};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::ops::RangeInclusive;

/// Coincidence sizes counted from the data.
pub const OVERLAP_SIZES: RangeInclusive<u32> = 1..=5;

/// Number of distinct days carrying exactly `k` events, for each `k` in
/// [`OVERLAP_SIZES`]. Sizes with no matching day are present with a zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlapCounts(pub BTreeMap<u32, usize>);

/// Theoretical and observed day counts for one coincidence size.
///
/// `expected` is `None` when the model has fewer than `k` events.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlapComparison {
    pub k: u32,
    pub empirical: usize,
    pub expected: Option<f64>,
    pub expected_rounded: Option<u64>,
}

/// The parsed dates of a dataset grouped by day, with unparseable rows
/// already dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmpiricalOverlaps {
    per_day: HashMap<DisplayDate, usize>,
    valid: usize,
    dropped: usize,
}

impl OverlapCounts {
    pub fn get(&self, k: u32) -> usize {
        self.0.get(&k).copied().unwrap_or(0)
    }

    /// Coincidence sizes in ascending order.
    pub fn sizes(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.0.iter().map(|(&k, &count)| (k, count))
    }

    /// `sum(k * count[k])`: the number of events covered by the counted sizes.
    pub fn total_events(&self) -> usize {
        self.iter().map(|(k, count)| k as usize * count).sum()
    }
}

impl EmpiricalOverlaps {
    /// Collect the parseable dates of `events`.
    ///
    /// Dropped rows shrink the effective `n`, so the observed counts cover
    /// fewer events than the dataset holds.
    pub fn from_events(events: &[Event]) -> EmpiricalOverlaps {
        let mut overlaps = EmpiricalOverlaps::from_dates(events.iter().filter_map(Event::date));
        overlaps.dropped = events.len() - overlaps.valid;
        if overlaps.dropped > 0 {
            warn!(
                "Dropped {} of {} events with unparseable dates; overlaps cover {} events",
                overlaps.dropped,
                events.len(),
                overlaps.valid
            );
        }
        overlaps
    }

    pub fn from_dates<I>(dates: I) -> EmpiricalOverlaps
    where
        I: IntoIterator<Item = DisplayDate>,
    {
        let mut per_day: HashMap<DisplayDate, usize> = HashMap::new();
        let mut valid = 0;
        for date in dates {
            *per_day.entry(date).or_default() += 1;
            valid += 1;
        }
        EmpiricalOverlaps {
            per_day,
            valid,
            dropped: 0,
        }
    }

    /// Number of events with a valid date.
    pub fn event_count(&self) -> usize {
        self.valid
    }

    /// Number of events discarded for an unparseable date.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Size of the most crowded day, 0 when there are no dates.
    pub fn largest_overlap(&self) -> usize {
        self.per_day.values().copied().max().unwrap_or(0)
    }

    /// Count days by how many events share them.
    pub fn count_overlaps(&self) -> OverlapCounts {
        let mut counts: BTreeMap<u32, usize> = OVERLAP_SIZES.map(|k| (k, 0)).collect();
        let mut uncounted = 0;
        for &size in self.per_day.values() {
            match counts.get_mut(&(size as u32)) {
                Some(count) => *count += 1,
                None => uncounted += 1,
            }
        }
        if uncounted > 0 {
            warn!(
                "{} days hold more than {} events and are not counted",
                uncounted,
                OVERLAP_SIZES.end()
            );
        }
        OverlapCounts(counts)
    }

    /// Line up observed counts with the model's expected counts over the same
    /// coincidence sizes. Sizes the model cannot reach keep their observed
    /// count with no expectation.
    pub fn compare(&self, model: &BinomialDistribution) -> Result<Vec<OverlapComparison>> {
        let counts = self.count_overlaps();
        let reachable: Vec<u32> = counts.sizes().filter(|&k| model.supports(k)).collect();
        if reachable.len() < counts.0.len() {
            debug!("No expectation for overlaps above model n = {}", model.n());
        }
        let mut expected = model.expected_overlaps(reachable)?.into_iter().peekable();
        Ok(counts
            .iter()
            .map(|(k, empirical)| {
                let theory = expected.next_if(|e| e.k == k);
                OverlapComparison {
                    k,
                    empirical,
                    expected: theory.map(|t| t.expected_days),
                    expected_rounded: theory.map(|t| t.rounded()),
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{EmpiricalOverlaps, OverlapCounts};
    use crate::binomial::BinomialDistribution;
    use ndo_core::{display_date::DisplayDate, event::Event};
    use std::collections::BTreeMap;

    fn events(dates: &[&str]) -> Vec<Event> {
        dates
            .iter()
            .enumerate()
            .map(|(i, d)| Event::new(&format!("Country {}", i), d, None))
            .collect()
    }

    #[test]
    fn test_count_overlaps_hand_built() {
        let data = events(&[
            "01.Jan", "01.Jan", "01.Jan", "02.Feb", "02.Feb", "03.Mar",
        ]);
        let counts = EmpiricalOverlaps::from_events(&data).count_overlaps();
        let expected = OverlapCounts(BTreeMap::from([(1, 1), (2, 1), (3, 1), (4, 0), (5, 0)]));
        assert_eq!(counts, expected);
    }

    #[test]
    fn test_unparseable_dates_are_dropped() {
        let data = events(&["01.Jan", "garbage", "01.Jan", "", "15.Aug"]);
        let overlaps = EmpiricalOverlaps::from_events(&data);
        assert_eq!(overlaps.event_count(), 3);
        assert_eq!(overlaps.dropped(), 2);
        let counts = overlaps.count_overlaps();
        assert_eq!(counts.get(1), 1);
        assert_eq!(counts.get(2), 1);
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let counts = EmpiricalOverlaps::from_events(&[]).count_overlaps();
        assert_eq!(counts.sizes().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert!(counts.iter().all(|(_, count)| count == 0));
        assert_eq!(counts.get(9), 0);
    }

    #[test]
    fn test_total_events_round_trip() {
        // 4 singles, 3 pairs, 2 triples, 1 quadruple, 1 quintuple
        let mut dates = Vec::new();
        let mut day = 1;
        for (size, days) in [(1, 4), (2, 3), (3, 2), (4, 1), (5, 1)] {
            for _ in 0..days {
                let date = DisplayDate::from_md_opt(6, day).unwrap();
                dates.extend(std::iter::repeat(date).take(size));
                day += 1;
            }
        }
        let valid = dates.len();
        let overlaps = EmpiricalOverlaps::from_dates(dates);
        let counts = overlaps.count_overlaps();
        assert_eq!(counts.get(1), 4);
        assert_eq!(counts.get(2), 3);
        assert_eq!(counts.get(3), 2);
        assert_eq!(counts.get(4), 1);
        assert_eq!(counts.get(5), 1);
        assert_eq!(counts.total_events(), valid);
        assert_eq!(overlaps.largest_overlap(), 5);
    }

    #[test]
    fn test_groups_above_range_are_not_counted() {
        let jan1 = DisplayDate::from_md_opt(1, 1).unwrap();
        let jul4 = DisplayDate::from_md_opt(7, 4).unwrap();
        let mut dates = vec![jan1; 6];
        dates.push(jul4);
        let overlaps = EmpiricalOverlaps::from_dates(dates);
        let counts = overlaps.count_overlaps();
        assert_eq!(counts.get(1), 1);
        assert_eq!(counts.total_events(), 1);
        assert_eq!(overlaps.largest_overlap(), 6);
    }

    #[test]
    fn test_count_overlaps_is_idempotent() {
        let data = events(&["01.Jan", "01.Jan", "14.Jul", "bad"]);
        let overlaps = EmpiricalOverlaps::from_events(&data);
        assert_eq!(overlaps.count_overlaps(), overlaps.count_overlaps());
        assert_eq!(
            EmpiricalOverlaps::from_events(&data),
            EmpiricalOverlaps::from_events(&data)
        );
    }

    #[test]
    fn test_compare_aligns_sizes() {
        let data = events(&["01.Jan", "01.Jan", "02.Feb", "03.Mar"]);
        let overlaps = EmpiricalOverlaps::from_events(&data);
        let model = BinomialDistribution::for_calendar_year(201).unwrap();
        let rows = overlaps.compare(&model).unwrap();
        let ks: Vec<u32> = rows.iter().map(|r| r.k).collect();
        assert_eq!(ks, vec![1, 2, 3, 4, 5]);
        assert_eq!(rows[0].empirical, 2);
        assert_eq!(rows[1].empirical, 1);
        let rounded: Vec<Option<u64>> = rows.iter().map(|r| r.expected_rounded).collect();
        assert_eq!(rounded, vec![Some(116), Some(32), Some(6), Some(1), Some(0)]);
    }

    #[test]
    fn test_compare_with_fewer_events_than_sizes() {
        let data = events(&["01.Jan", "01.Jan", "14.Jul"]);
        let overlaps = EmpiricalOverlaps::from_events(&data);
        let model = BinomialDistribution::for_calendar_year(3).unwrap();
        let rows = overlaps.compare(&model).unwrap();
        let ks: Vec<u32> = rows.iter().map(|r| r.k).collect();
        assert_eq!(ks, vec![1, 2, 3, 4, 5]);
        let empirical: Vec<usize> = rows.iter().map(|r| r.empirical).collect();
        assert_eq!(empirical, vec![1, 1, 0, 0, 0]);
        assert!(rows[..3].iter().all(|r| r.expected.is_some()));
        assert!(rows[3..].iter().all(|r| r.expected.is_none()));
        assert!(rows[3..].iter().all(|r| r.expected_rounded.is_none()));
    }

    #[test]
    fn test_largest_overlap_matches_counts() {
        let data = events(&["01.Jan", "01.Jan", "01.Jan", "14.Jul", "bad"]);
        let overlaps = EmpiricalOverlaps::from_events(&data);
        assert_eq!(overlaps.largest_overlap(), 3);
        assert_eq!(overlaps.count_overlaps().get(3), 1);
        assert_eq!(overlaps.event_count(), 4);
        assert_eq!(EmpiricalOverlaps::from_dates(Vec::<DisplayDate>::new()).largest_overlap(), 0);
    }
}
