//! Integration tests for the group-by aggregations.

use jadarat_report::aggregate::{
    experience_split, fresh_graduate_salary, gender_distribution, mean_salary_by_experience,
    median_salary_by_experience, region_distribution, top_job_demand, FreshGraduateSalary,
    ReportData,
};
use jadarat_report::model::{ExperienceCategory, Gender, JobPosting, PostingTable};

fn posting(
    region: &str,
    title: &str,
    gender: Gender,
    years: u32,
    vacancies: u32,
    salary: Option<f64>,
) -> JobPosting {
    JobPosting {
        region: region.to_string(),
        job_title: title.to_string(),
        gender,
        years_experience: years,
        available_vacancies: vacancies,
        salary_sar: salary,
    }
}

fn simple(region: &str) -> JobPosting {
    posting(region, "Clerk", Gender::Both, 0, 1, Some(4000.0))
}

// ---------------------------------------------------------------------------
// RegionDistribution
// ---------------------------------------------------------------------------

#[test]
fn region_shares_match_known_counts() {
    let mut rows = Vec::new();
    rows.extend((0..427).map(|_| simple("Riyadh")));
    rows.extend((0..250).map(|_| simple("Mecca")));
    rows.extend((0..147).map(|_| simple("Eastern")));
    rows.extend((0..100).map(|_| simple("Medina")));
    rows.extend((0..76).map(|_| simple("Jazan")));
    let table = PostingTable::new(rows);

    let regions = region_distribution(&table);
    assert_eq!(regions.len(), 5);
    assert_eq!(regions[0].region, "Riyadh");
    assert!((regions[0].percent - 42.7).abs() < 1e-9);
    assert_eq!(regions[1].region, "Mecca");
    assert!((regions[1].percent - 25.0).abs() < 1e-9);
    assert_eq!(regions[2].region, "Eastern");
    assert!((regions[2].percent - 14.7).abs() < 1e-9);
    assert_eq!(regions[0].postings, 427);
}

#[test]
fn region_shares_sum_to_one_hundred() {
    let layouts: Vec<Vec<usize>> = vec![
        vec![1],
        vec![1, 1, 1],
        vec![1, 1, 1, 1, 1, 1, 1],
        vec![13, 7, 5, 3, 2, 1, 1, 1, 1, 1, 1, 1, 1],
        vec![999, 1],
    ];
    for counts in layouts {
        let rows: Vec<JobPosting> = counts
            .iter()
            .enumerate()
            .flat_map(|(i, &n)| (0..n).map(move |_| simple(&format!("region-{}", i))))
            .collect();
        let table = PostingTable::new(rows);
        let sum: f64 = region_distribution(&table).iter().map(|r| r.percent).sum();
        assert!((sum - 100.0).abs() <= 0.1, "sum was {} for {:?}", sum, counts);
    }
}

#[test]
fn region_shares_sorted_descending() {
    let rows = vec![simple("Hail"), simple("Riyadh"), simple("Riyadh"), simple("Tabuk")];
    let regions = region_distribution(&PostingTable::new(rows));
    let names: Vec<&str> = regions.iter().map(|r| r.region.as_str()).collect();
    assert_eq!(names, vec!["Riyadh", "Hail", "Tabuk"]);
    for pair in regions.windows(2) {
        assert!(pair[0].percent >= pair[1].percent);
    }
}

#[test]
fn region_shares_empty_table() {
    assert!(region_distribution(&PostingTable::default()).is_empty());
}

// ---------------------------------------------------------------------------
// GenderDistribution
// ---------------------------------------------------------------------------

#[test]
fn gender_counts_observed_categories_only() {
    let table = PostingTable::new(vec![
        posting("Riyadh", "Driver", Gender::Both, 0, 1, None),
        posting("Riyadh", "Driver", Gender::Male, 0, 1, None),
        posting("Riyadh", "Driver", Gender::Both, 0, 1, None),
    ]);
    let genders = gender_distribution(&table);
    assert_eq!(genders.len(), 2);
    assert_eq!(genders[0].gender, Gender::Both);
    assert_eq!(genders[0].postings, 2);
    assert_eq!(genders[1].gender, Gender::Male);
    assert_eq!(genders[1].postings, 1);
    assert!(genders.iter().all(|g| g.gender != Gender::Female));
}

#[test]
fn gender_counts_sum_to_row_count() {
    let genders = [Gender::Female, Gender::Male, Gender::Both, Gender::Female, Gender::Male];
    let table: PostingTable = genders
        .iter()
        .map(|&g| posting("Mecca", "Nurse", g, 1, 1, None))
        .collect();
    let total: usize = gender_distribution(&table).iter().map(|g| g.postings).sum();
    assert_eq!(total, table.len());
}

// ---------------------------------------------------------------------------
// ExperienceCategorySplit
// ---------------------------------------------------------------------------

#[test]
fn experience_split_counts_zero_years_as_fresh() {
    let table: PostingTable = [0, 0, 5]
        .iter()
        .map(|&years| posting("Riyadh", "Engineer", Gender::Both, years, 1, None))
        .collect();
    let split = experience_split(&table);

    let fresh = split
        .iter()
        .find(|e| e.category == ExperienceCategory::FreshGraduates)
        .unwrap();
    let experienced = split
        .iter()
        .find(|e| e.category == ExperienceCategory::Experienced)
        .unwrap();
    assert_eq!(fresh.postings, 2);
    assert_eq!(experienced.postings, 1);
}

#[test]
fn experience_split_sums_to_row_count() {
    let table: PostingTable = [0, 1, 2, 0, 10, 3, 0]
        .iter()
        .map(|&years| posting("Riyadh", "Engineer", Gender::Both, years, 1, None))
        .collect();
    let split = experience_split(&table);
    assert_eq!(split.iter().map(|e| e.postings).sum::<usize>(), table.len());
    let fresh_rows = table.iter().filter(|p| p.years_experience == 0).count();
    let fresh = split
        .iter()
        .find(|e| e.category == ExperienceCategory::FreshGraduates)
        .map(|e| e.postings)
        .unwrap_or(0);
    assert_eq!(fresh, fresh_rows);
}

// ---------------------------------------------------------------------------
// TopJobDemand
// ---------------------------------------------------------------------------

#[test]
fn top_demand_sums_vacancies_not_postings() {
    let table = PostingTable::new(vec![
        posting("Riyadh", "Driver", Gender::Male, 0, 10, None),
        posting("Riyadh", "Cashier", Gender::Both, 0, 1, None),
        posting("Riyadh", "Cashier", Gender::Both, 0, 1, None),
        posting("Riyadh", "Cashier", Gender::Both, 0, 1, None),
    ]);
    let demand = top_job_demand(&table, 10);
    assert_eq!(demand[0].job_title, "Driver");
    assert_eq!(demand[0].vacancies, 10);
    assert_eq!(demand[1].job_title, "Cashier");
    assert_eq!(demand[1].vacancies, 3);
}

#[test]
fn top_demand_keeps_at_most_limit_sorted() {
    let table: PostingTable = (0..15)
        .map(|i| posting("Riyadh", &format!("title-{}", i), Gender::Both, 0, (i % 4) as u32, None))
        .collect();
    let demand = top_job_demand(&table, 10);
    assert_eq!(demand.len(), 10);
    for pair in demand.windows(2) {
        assert!(pair[0].vacancies >= pair[1].vacancies);
    }
    // title-3, title-7, title-11 all have 3 vacancies: input order is kept
    let leaders: Vec<&str> = demand.iter().take(3).map(|d| d.job_title.as_str()).collect();
    assert_eq!(leaders, vec!["title-3", "title-7", "title-11"]);
}

#[test]
fn top_demand_with_few_titles_has_no_padding() {
    let table = PostingTable::new(vec![
        posting("Riyadh", "Driver", Gender::Male, 0, 2, None),
        posting("Riyadh", "Chef", Gender::Male, 0, 1, None),
    ]);
    assert_eq!(top_job_demand(&table, 10).len(), 2);
}

// ---------------------------------------------------------------------------
// SalaryByExperience
// ---------------------------------------------------------------------------

#[test]
fn salary_stats_exclude_missing_values() {
    let table = PostingTable::new(vec![
        posting("Riyadh", "A", Gender::Both, 0, 1, Some(3000.0)),
        posting("Riyadh", "A", Gender::Both, 0, 1, None),
        posting("Riyadh", "A", Gender::Both, 0, 1, Some(5000.0)),
        posting("Riyadh", "A", Gender::Both, 2, 1, Some(6000.0)),
        posting("Riyadh", "A", Gender::Both, 7, 1, None),
    ]);

    let median = median_salary_by_experience(&table);
    let mean = mean_salary_by_experience(&table);

    let years: Vec<u32> = median.iter().map(|s| s.years_experience).collect();
    assert_eq!(years, vec![0, 2], "experience levels without salaries are omitted");
    assert_eq!(median[0].salary_sar, 4000.0);
    assert_eq!(mean[0].salary_sar, 4000.0);
    assert_eq!(mean[1].salary_sar, 6000.0);
    assert!(median.iter().chain(mean.iter()).all(|s| s.salary_sar.is_finite()));
}

#[test]
fn fresh_graduate_summary_reports_range() {
    let table = PostingTable::new(vec![
        posting("Riyadh", "A", Gender::Both, 0, 1, Some(3000.0)),
        posting("Riyadh", "A", Gender::Both, 0, 1, Some(6000.0)),
        posting("Riyadh", "A", Gender::Both, 0, 1, None),
        posting("Riyadh", "A", Gender::Both, 4, 1, Some(20000.0)),
    ]);
    match fresh_graduate_salary(&table) {
        FreshGraduateSalary::Range { min, max, mean } => {
            assert_eq!(min, 3000.0);
            assert_eq!(max, 6000.0);
            assert_eq!(mean, 4500.0);
        }
        FreshGraduateSalary::NoData => panic!("expected a salary range"),
    }
}

#[test]
fn fresh_graduate_summary_empty_table_is_no_data() {
    let summary = fresh_graduate_salary(&PostingTable::default());
    assert!(summary.is_no_data());
    assert_ne!(
        summary,
        FreshGraduateSalary::Range {
            min: 0.0,
            max: 0.0,
            mean: 0.0
        }
    );
}

#[test]
fn fresh_graduate_summary_without_fresh_rows_is_no_data() {
    let table = PostingTable::new(vec![posting("Riyadh", "A", Gender::Both, 3, 1, Some(7000.0))]);
    assert_eq!(fresh_graduate_salary(&table), FreshGraduateSalary::NoData);
}

// ---------------------------------------------------------------------------
// ReportData
// ---------------------------------------------------------------------------

#[test]
fn report_data_serializes_no_data_status() {
    let data = ReportData::compute(&PostingTable::default(), 10);
    assert_eq!(data.total_postings, 0);
    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(json["fresh_graduate_salary"]["status"], "no_data");
}

#[test]
fn report_data_matches_individual_routines() {
    let table = PostingTable::new(vec![
        posting("Riyadh", "Driver", Gender::Male, 0, 4, Some(4000.0)),
        posting("Mecca", "Nurse", Gender::Female, 2, 2, Some(7000.0)),
        posting("Riyadh", "Driver", Gender::Both, 5, 1, None),
    ]);
    let data = ReportData::compute(&table, 1);
    assert_eq!(data.total_postings, 3);
    assert_eq!(data.regions, region_distribution(&table));
    assert_eq!(data.genders, gender_distribution(&table));
    assert_eq!(data.experience, experience_split(&table));
    assert_eq!(data.top_jobs, top_job_demand(&table, 1));
    assert_eq!(data.median_salary, median_salary_by_experience(&table));
    assert_eq!(data.mean_salary, mean_salary_by_experience(&table));
    assert_eq!(data.fresh_graduate_salary, fresh_graduate_salary(&table));
}
