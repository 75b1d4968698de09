//! Birthday-problem model for day coincidences.
//!
//! Each of `n` events lands on one of [`DAYS_IN_YEAR`] days uniformly at
//! random, so the number landing on any one day is Binomial(n, 1/365).
//! Multiplying the probability mass by the number of days gives the expected
//! count of days carrying exactly `k` events.

use ndo_core::error::{NdoError, Result};
use serde::Serialize;
use statrs::function::factorial::binomial;
use std::ops::RangeInclusive;

/// Days in a (non-leap) year, used as both the uniform denominator and the
/// scale for expected counts.
pub const DAYS_IN_YEAR: u32 = 365;

/// Coincidence sizes shown in the stand-alone theoretical series.
pub const THEORETICAL_OVERLAP_SIZES: RangeInclusive<u32> = 1..=4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinomialDistribution {
    n: u32,
    p: f64,
}

/// Expected number of days in a year with exactly `k` coinciding events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExpectedOverlap {
    pub k: u32,
    pub probability: f64,
    pub expected_days: f64,
}

impl BinomialDistribution {
    /// Create a distribution over `n` trials with success probability `p`.
    pub fn new(n: u32, p: f64) -> Result<BinomialDistribution> {
        if n == 0 {
            return Err(NdoError::InvalidEventCount(n));
        }
        if !(0.0..=1.0).contains(&p) {
            return Err(NdoError::InvalidProbability(p));
        }
        Ok(BinomialDistribution { n, p })
    }

    /// `n` events spread uniformly over a calendar year.
    pub fn for_calendar_year(n: u32) -> Result<BinomialDistribution> {
        BinomialDistribution::new(n, 1.0 / f64::from(DAYS_IN_YEAR))
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    /// Whether `k` coincident events can occur among `n` trials.
    pub fn supports(&self, k: u32) -> bool {
        k <= self.n
    }

    /// Probability mass `C(n,k) * p^k * (1-p)^(n-k)`.
    ///
    /// `k > n` is rejected rather than reported as zero probability.
    pub fn pmf(&self, k: u32) -> Result<f64> {
        if !self.supports(k) {
            return Err(NdoError::InvalidCoincidenceSize { k, n: self.n });
        }
        let q = 1.0 - self.p;
        let mass = if k == 0 {
            q.powf(f64::from(self.n))
        } else if k == self.n {
            self.p.powf(f64::from(self.n))
        } else {
            binomial(u64::from(self.n), u64::from(k))
                * self.p.powf(f64::from(k))
                * q.powf(f64::from(self.n - k))
        };
        Ok(mass)
    }

    /// Expected number of days in a year on which exactly `k` events fall.
    pub fn expected_days(&self, k: u32) -> Result<f64> {
        Ok(self.pmf(k)? * f64::from(DAYS_IN_YEAR))
    }

    /// Expected days for every requested `k`, returned in ascending `k`.
    pub fn expected_overlaps<I>(&self, sizes: I) -> Result<Vec<ExpectedOverlap>>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut sizes: Vec<u32> = sizes.into_iter().collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
            .into_iter()
            .map(|k| {
                let probability = self.pmf(k)?;
                Ok(ExpectedOverlap {
                    k,
                    probability,
                    expected_days: probability * f64::from(DAYS_IN_YEAR),
                })
            })
            .collect()
    }
}

impl ExpectedOverlap {
    /// Expected days rounded to a whole count, for side-by-side comparison
    /// with observed counts.
    pub fn rounded(&self) -> u64 {
        self.expected_days.round() as u64
    }
}
