use std::collections::BTreeMap;

use serde::Serialize;

use super::AggregateEntry;
use crate::model::{Gender, PostingTable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenderCount {
    pub gender: Gender,
    pub postings: usize,
}

impl AggregateEntry for GenderCount {
    fn label(&self) -> String {
        self.gender.label().to_string()
    }

    fn measure(&self) -> f64 {
        self.postings as f64
    }
}

/// Raw posting count per gender requirement. Only observed categories are
/// returned, in the order both, male, female.
pub fn gender_distribution(table: &PostingTable) -> Vec<GenderCount> {
    let mut counts: BTreeMap<Gender, usize> = BTreeMap::new();
    for posting in table {
        *counts.entry(posting.gender).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(gender, postings)| GenderCount { gender, postings })
        .collect()
}
