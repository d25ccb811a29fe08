//! Report assembly: Plotly chart builders and the HTML page they are
//! embedded in.
pub mod plots;
pub mod report;

pub use report::{Report, ReportSection};
