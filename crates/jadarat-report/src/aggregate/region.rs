use serde::Serialize;

use super::{group_in_order, AggregateEntry};
use crate::model::PostingTable;

/// Share of all postings located in one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionShare {
    pub region: String,
    pub postings: usize,
    /// Percentage of all postings, one decimal place.
    pub percent: f64,
}

impl AggregateEntry for RegionShare {
    fn label(&self) -> String {
        self.region.clone()
    }

    fn measure(&self) -> f64 {
        self.percent
    }
}

/// Count postings per region and express each count as a percentage of the
/// total, rounded to one decimal place.
///
/// Rounding works on whole tenths of a percent with the largest-remainder
/// method, so the percentages always add up to exactly 100.0. Entries are
/// sorted by share descending; equal counts keep their input order.
pub fn region_distribution(table: &PostingTable) -> Vec<RegionShare> {
    let total = table.len();
    if total == 0 {
        return Vec::new();
    }

    let mut counts: Vec<(String, usize)> =
        group_in_order(table.iter().map(|p| (p.region.as_str(), ())))
            .into_iter()
            .map(|(region, rows)| (region.to_string(), rows.len()))
            .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let sizes: Vec<usize> = counts.iter().map(|c| c.1).collect();
    let tenths = largest_remainder_tenths(&sizes, total);

    counts
        .into_iter()
        .zip(tenths)
        .map(|((region, postings), tenths)| RegionShare {
            region,
            postings,
            percent: tenths as f64 / 10.0,
        })
        .collect()
}

/// Apportion 1000 tenths of a percent over `counts`. Ties in the remainder
/// go to the earlier entry.
fn largest_remainder_tenths(counts: &[usize], total: usize) -> Vec<usize> {
    let mut tenths: Vec<usize> = counts.iter().map(|&c| c * 1000 / total).collect();
    let assigned: usize = tenths.iter().sum();

    let mut by_remainder: Vec<(usize, usize)> = counts
        .iter()
        .enumerate()
        .map(|(i, &c)| (i, c * 1000 % total))
        .collect();
    by_remainder.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    for &(i, _) in by_remainder.iter().take(1000 - assigned) {
        tenths[i] += 1;
    }
    tenths
}
