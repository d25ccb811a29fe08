//! Readers for the postings export.
pub mod postings;

pub use postings::{load_postings, load_postings_from_reader, load_postings_with_columns};
