use std::collections::BTreeMap;

use serde::Serialize;

use super::AggregateEntry;
use crate::model::{ExperienceCategory, PostingTable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceCount {
    pub category: ExperienceCategory,
    pub postings: usize,
}

impl AggregateEntry for ExperienceCount {
    fn label(&self) -> String {
        self.category.label().to_string()
    }

    fn measure(&self) -> f64 {
        self.postings as f64
    }
}

/// Posting count per experience category (see
/// [`classify_experience`](crate::model::classify_experience)).
pub fn experience_split(table: &PostingTable) -> Vec<ExperienceCount> {
    let mut counts: BTreeMap<ExperienceCategory, usize> = BTreeMap::new();
    for posting in table {
        *counts.entry(posting.experience_category()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(category, postings)| ExperienceCount { category, postings })
        .collect()
}
