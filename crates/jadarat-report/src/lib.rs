//! jadarat-report: descriptive charts over the Jadarat job postings export.
//!
//! This crate loads a pre-cleaned postings table into strongly typed
//! records, runs a handful of independent aggregations over it (regions,
//! gender requirements, experience split, vacancy demand, salaries) and
//! assembles the results into a single HTML report built from Plotly charts
//! and short narrative blocks.
//!
//! The design favors small, testable modules: aggregations are pure
//! functions of the loaded table, chart and report assembly only consume
//! their outputs.
pub mod aggregate;
pub mod config;
pub mod error;
pub mod generator;
pub mod io;
pub mod model;
pub mod narrative;
pub mod report;

pub use error::ReportError;
