use serde::Serialize;

use super::{group_in_order, AggregateEntry};
use crate::model::PostingTable;

/// Total open vacancies advertised under one job title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobDemand {
    pub job_title: String,
    pub vacancies: u64,
}

impl AggregateEntry for JobDemand {
    fn label(&self) -> String {
        self.job_title.clone()
    }

    fn measure(&self) -> f64 {
        self.vacancies as f64
    }
}

/// Sum available vacancies per job title and keep the `limit` titles with
/// the highest demand. Ties keep the order in which titles first appear.
pub fn top_job_demand(table: &PostingTable, limit: usize) -> Vec<JobDemand> {
    let mut demand: Vec<JobDemand> = group_in_order(
        table
            .iter()
            .map(|p| (p.job_title.as_str(), p.available_vacancies as u64)),
    )
    .into_iter()
    .map(|(title, vacancies)| JobDemand {
        job_title: title.to_string(),
        vacancies: vacancies.iter().sum(),
    })
    .collect();

    demand.sort_by(|a, b| b.vacancies.cmp(&a.vacancies));
    demand.truncate(limit);
    demand
}
