//! Group-by aggregations over the postings table.
//!
//! Every routine is a pure function of `&PostingTable` and returns an
//! ordered list of entries. Entries implement [`AggregateEntry`] so the
//! chart builders can consume any of them as label/measure pairs.
use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

use crate::model::PostingTable;

pub mod demand;
pub mod experience;
pub mod gender;
pub mod region;
pub mod salary;

pub use demand::{top_job_demand, JobDemand};
pub use experience::{experience_split, ExperienceCount};
pub use gender::{gender_distribution, GenderCount};
pub use region::{region_distribution, RegionShare};
pub use salary::{
    fresh_graduate_salary, mean_salary_by_experience, median_salary_by_experience,
    FreshGraduateSalary, SalaryStat,
};

/// A categorical key paired with a numeric measure.
pub trait AggregateEntry {
    fn label(&self) -> String;
    fn measure(&self) -> f64;
}

/// Split entries into parallel label and measure vectors.
pub fn labels_and_measures<T: AggregateEntry>(entries: &[T]) -> (Vec<String>, Vec<f64>) {
    entries.iter().map(|e| (e.label(), e.measure())).unzip()
}

/// Group values by key, keeping keys in order of first appearance.
pub(crate) fn group_in_order<K, V, I>(items: I) -> Vec<(K, Vec<V>)>
where
    K: Hash + Eq + Clone,
    I: IntoIterator<Item = (K, V)>,
{
    let mut position: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<V>)> = Vec::new();
    for (key, value) in items {
        match position.get(&key) {
            Some(&idx) => groups[idx].1.push(value),
            None => {
                position.insert(key.clone(), groups.len());
                groups.push((key, vec![value]));
            }
        }
    }
    groups
}

/// All aggregates shown by the report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub total_postings: usize,
    pub regions: Vec<RegionShare>,
    pub genders: Vec<GenderCount>,
    pub experience: Vec<ExperienceCount>,
    pub top_jobs: Vec<JobDemand>,
    pub median_salary: Vec<SalaryStat>,
    pub mean_salary: Vec<SalaryStat>,
    pub fresh_graduate_salary: FreshGraduateSalary,
}

impl ReportData {
    /// Compute every aggregate. The routines share nothing but the read-only
    /// table, so they are evaluated in parallel.
    pub fn compute(table: &PostingTable, top_jobs: usize) -> Self {
        let ((regions, genders), ((experience, top), (salaries, fresh))) = rayon::join(
            || {
                rayon::join(
                    || region_distribution(table),
                    || gender_distribution(table),
                )
            },
            || {
                rayon::join(
                    || {
                        rayon::join(
                            || experience_split(table),
                            || top_job_demand(table, top_jobs),
                        )
                    },
                    || {
                        rayon::join(
                            || {
                                (
                                    median_salary_by_experience(table),
                                    mean_salary_by_experience(table),
                                )
                            },
                            || fresh_graduate_salary(table),
                        )
                    },
                )
            },
        );
        let (median_salary, mean_salary) = salaries;

        log::debug!(
            "Aggregated {} postings: {} regions, {} job titles kept, {} salary levels",
            table.len(),
            regions.len(),
            top.len(),
            median_salary.len()
        );

        ReportData {
            total_postings: table.len(),
            regions,
            genders,
            experience,
            top_jobs: top,
            median_salary,
            mean_salary,
            fresh_graduate_salary: fresh,
        }
    }
}
