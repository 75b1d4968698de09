//! Overlap estimation and seasonal aggregation for national day events.
//!
//! This crate turns loaded [`ndo_core::event::Event`]s into the structured
//! series an external chart layer renders: expected versus observed day
//! coincidences, season and hemisphere tallies, a month histogram and
//! choropleth rows.

pub mod aggregate;
pub mod binomial;
pub mod overlap;
pub mod report;
