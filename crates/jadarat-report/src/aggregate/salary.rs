//! Salary statistics by required experience.
use std::collections::BTreeMap;

use serde::Serialize;

use super::AggregateEntry;
use crate::model::PostingTable;

/// A salary statistic (median or mean) for one experience level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryStat {
    pub years_experience: u32,
    pub salary_sar: f64,
}

impl AggregateEntry for SalaryStat {
    fn label(&self) -> String {
        self.years_experience.to_string()
    }

    fn measure(&self) -> f64 {
        self.salary_sar
    }
}

/// Salary spread of fresh-graduate postings.
///
/// `NoData` is reported when no zero-experience posting carries a salary; it
/// is never collapsed into a zero-valued range.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FreshGraduateSalary {
    NoData,
    Range { min: f64, max: f64, mean: f64 },
}

impl FreshGraduateSalary {
    pub fn is_no_data(&self) -> bool {
        matches!(self, FreshGraduateSalary::NoData)
    }
}

pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Known salaries grouped by years of experience, ascending. Experience
/// levels where every salary is missing do not appear.
fn salaries_by_experience(table: &PostingTable) -> BTreeMap<u32, Vec<f64>> {
    let mut grouped: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for posting in table {
        if let Some(salary) = posting.salary_sar {
            grouped
                .entry(posting.years_experience)
                .or_default()
                .push(salary);
        }
    }
    grouped
}

fn summarize_by_experience(
    table: &PostingTable,
    statistic: fn(&[f64]) -> Option<f64>,
) -> Vec<SalaryStat> {
    salaries_by_experience(table)
        .into_iter()
        .filter_map(|(years_experience, salaries)| {
            statistic(&salaries).map(|salary_sar| SalaryStat {
                years_experience,
                salary_sar,
            })
        })
        .collect()
}

pub fn median_salary_by_experience(table: &PostingTable) -> Vec<SalaryStat> {
    summarize_by_experience(table, median)
}

pub fn mean_salary_by_experience(table: &PostingTable) -> Vec<SalaryStat> {
    summarize_by_experience(table, mean)
}

/// Minimum, maximum and mean salary over postings that require no
/// experience.
pub fn fresh_graduate_salary(table: &PostingTable) -> FreshGraduateSalary {
    let salaries: Vec<f64> = table
        .iter()
        .filter(|p| p.is_fresh_graduate())
        .filter_map(|p| p.salary_sar)
        .collect();

    let Some(average) = mean(&salaries) else {
        log::warn!("No salary data found for fresh graduates (0 years of experience)");
        return FreshGraduateSalary::NoData;
    };
    let min = salaries.iter().copied().fold(f64::INFINITY, f64::min);
    let max = salaries.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    FreshGraduateSalary::Range {
        min,
        max,
        mean: average,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_even_length_averages_middle_pair() {
        assert_eq!(median(&[4000.0, 3000.0, 6000.0, 5000.0]), Some(4500.0));
        assert_eq!(median(&[7.0, 1.0, 3.0]), Some(3.0));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[2.0, 4.0]), Some(3.0));
    }
}
