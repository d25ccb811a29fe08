//! Commentary blocks placed around the charts.
//!
//! Framing text is static; every number quoted is taken from the computed
//! aggregates.
use maud::{html, Markup};

use crate::aggregate::{
    ExperienceCount, FreshGraduateSalary, GenderCount, JobDemand, RegionShare, SalaryStat,
};
use crate::model::{ExperienceCategory, Gender};

/// Regions below this share are called out as thin markets.
const SMALL_REGION_PERCENT: f64 = 3.0;

pub const NO_FRESH_GRADUATE_DATA: &str =
    "No data found for fresh graduates (0 years of experience).";

/// Salary amounts print without decimals when whole.
pub fn format_sar(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn introduction() -> Markup {
    html! {
        p {
            "Imagine this: you're sitting at your computer, ready to kick off your job search. "
            "You log into " strong { "Jadarat" } ", wondering: where are the jobs, who's hiring, "
            "and what is the salary going to look like?"
        }
        p {
            "We went through Jadarat's job postings to answer exactly those questions. "
            "Some of the answers might change how you approach your job hunt."
        }
    }
}

pub fn regions_intro(regions: &[RegionShare]) -> Markup {
    html! {
        p {
            strong { "Question #1:" }
            " If you could pick anywhere in Saudi Arabia to find a job, where would you go?"
        }
        @if let Some((leader, runners_up)) = regions.split_first() {
            p {
                "The data points to " strong { (leader.region) } ": "
                strong { (format_percent(leader.percent)) }
                " of all job postings come from " (leader.region) " alone."
                @if !runners_up.is_empty() {
                    " Not far behind "
                    @if runners_up.len() == 1 { "is " } @else { "are " }
                    @for (idx, region) in runners_up.iter().take(2).enumerate() {
                        @if idx > 0 { " and " }
                        strong { (region.region) " (" (format_percent(region.percent)) ")" }
                    }
                    "."
                }
            }
        } @else {
            p { "There are no postings to break down by region." }
        }
    }
}

pub fn regions_outro(regions: &[RegionShare]) -> Markup {
    let small: Vec<&RegionShare> = regions
        .iter()
        .filter(|r| r.percent < SMALL_REGION_PERCENT)
        .collect();
    html! {
        @if !small.is_empty() {
            p {
                "Outside the major hubs the postings drop fast: "
                strong { (small.len()) }
                @if small.len() == 1 { " region offers" } @else { " regions offer" }
                " under " (format_percent(SMALL_REGION_PERCENT)) " of postings each. "
                "If you're set on a specific region, be ready for a challenge."
            }
        }
        p {
            em { "Tip for Job Seekers:" }
            " head to where the postings concentrate if you want to maximize your chances."
        }
    }
}

pub fn gender_intro(genders: &[GenderCount], total_postings: usize) -> Markup {
    let count_of = |gender: Gender| {
        genders
            .iter()
            .find(|g| g.gender == gender)
            .map(|g| g.postings)
            .unwrap_or(0)
    };
    html! {
        p {
            strong { "Question #2:" }
            " Does your gender play a role in how many job postings you'll see?"
        }
        p {
            "Out of " (total_postings) " postings, "
            strong { (count_of(Gender::Both)) } " are open to both men and women, "
            strong { (count_of(Gender::Male)) }
            " are specifically looking for male candidates, and "
            strong { (count_of(Gender::Female)) } " are targeting female candidates."
        }
    }
}

pub fn gender_outro() -> Markup {
    html! {
        p {
            "Gender-neutral postings are a large part of the market, so knowing where to focus "
            "your search makes a real difference."
        }
        p {
            em { "Key Insight for Employers:" }
            " inclusive hiring practices fit a market that is already leaning towards "
            "balanced roles."
        }
    }
}

pub fn experience_intro(experience: &[ExperienceCount]) -> Markup {
    let count_of = |category: ExperienceCategory| {
        experience
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.postings)
            .unwrap_or(0)
    };
    let fresh = count_of(ExperienceCategory::FreshGraduates);
    let experienced = count_of(ExperienceCategory::Experienced);
    html! {
        p {
            strong { "Question #3:" }
            " Is experience the key to getting hired?"
        }
        p {
            strong { (fresh) " job postings" } " are looking for fresh graduates, compared to "
            strong { (experienced) } " for experienced professionals."
            @if fresh > experienced {
                " Fresh talent is in demand, and companies are hungry for new perspectives."
            } @else if experienced > fresh {
                " Experience still opens more doors than a fresh degree."
            }
        }
    }
}

pub fn experience_outro() -> Markup {
    html! {
        p {
            em { "Advice to Job Seekers:" }
            " if you're fresh out of college, don't shy away from applying to roles you think "
            "you'd be great at. Experienced folks should stay sharp: employers still value "
            "leadership and expertise."
        }
    }
}

pub fn demand_intro(top_jobs: &[JobDemand]) -> Markup {
    let total: u64 = top_jobs.iter().map(|j| j.vacancies).sum();
    let share = |job: &JobDemand| {
        if total == 0 {
            0.0
        } else {
            job.vacancies as f64 / total as f64 * 100.0
        }
    };
    html! {
        p {
            strong { "Question #4:" }
            " What roles are employers chasing after right now?"
        }
        @if let Some((first, rest)) = top_jobs.split_first() {
            p {
                "At the top of the list: " strong { (first.job_title) } ", making up "
                strong { (format_percent(share(first))) } " of the vacancies among the top "
                (top_jobs.len()) " titles."
                @if !rest.is_empty() {
                    " Following close behind "
                    @if rest.len() == 1 { "is " } @else { "are " }
                    @for (idx, job) in rest.iter().take(2).enumerate() {
                        @if idx > 0 { " and " }
                        strong { (job.job_title) " (" (format_percent(share(job))) ")" }
                    }
                    "."
                }
            }
        } @else {
            p { "There are no job titles to rank." }
        }
    }
}

pub fn demand_outro() -> Markup {
    html! {
        p {
            em { "Pro Tip for Job Seekers:" }
            " if your experience matches one of these roles, polish that CV. The demand is there."
        }
    }
}

pub fn salary_intro() -> Markup {
    html! {
        p {
            "Now the part everyone is curious about: the paycheck. Whether you're just starting "
            "out or building up your experience, it's good to know what you're worth."
        }
    }
}

pub fn fresh_graduate_salary(summary: &FreshGraduateSalary) -> Markup {
    html! {
        @match summary {
            FreshGraduateSalary::Range { min, max, mean } => {
                p {
                    "The salary range for fresh graduates is between "
                    strong { (format_sar(*min)) " SAR" }
                    " and "
                    strong { (format_sar(*max)) " SAR" } "."
                }
                p {
                    "The average salary for fresh graduates is "
                    strong { (format!("{:.2}", mean)) " SAR" } "."
                }
            }
            FreshGraduateSalary::NoData => {
                p { (NO_FRESH_GRADUATE_DATA) }
            }
        }
    }
}

pub fn salary_outro(median_salary: &[SalaryStat]) -> Markup {
    let fresh_median = median_salary.iter().find(|s| s.years_experience == 0);
    let top = median_salary
        .iter()
        .max_by(|a, b| a.salary_sar.total_cmp(&b.salary_sar));
    html! {
        @if let Some(fresh) = fresh_median {
            p {
                "As a fresh graduate you're looking at a "
                strong { "median salary of " (format_sar(fresh.salary_sar)) " SAR" } "."
            }
        }
        @if let Some(top) = top {
            p {
                "The highest median salary, " strong { (format_sar(top.salary_sar)) " SAR" }
                ", is offered at " strong { (top.years_experience) " years" } " of experience."
            }
        }
        p {
            "So there you have it: a clear picture of what to expect in terms of salaries, job "
            "demand, and opportunities in the Saudi job market. Good luck on your job search!"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_data_sentence_is_rendered() {
        let html = fresh_graduate_salary(&FreshGraduateSalary::NoData).into_string();
        assert!(html.contains(NO_FRESH_GRADUATE_DATA));
    }

    #[test]
    fn fresh_range_rounds_mean_to_two_decimals() {
        let html = fresh_graduate_salary(&FreshGraduateSalary::Range {
            min: 3000.0,
            max: 9000.0,
            mean: 4676.456,
        })
        .into_string();
        assert!(html.contains("3000 SAR"));
        assert!(html.contains("9000 SAR"));
        assert!(html.contains("4676.46 SAR"));
    }

    #[test]
    fn regions_intro_names_leader() {
        let regions = vec![
            RegionShare {
                region: "Riyadh".to_string(),
                postings: 427,
                percent: 42.7,
            },
            RegionShare {
                region: "Mecca".to_string(),
                postings: 250,
                percent: 25.0,
            },
        ];
        let html = regions_intro(&regions).into_string();
        assert!(html.contains("Riyadh"));
        assert!(html.contains("42.7%"));
        assert!(html.contains("Mecca (25.0%)"));
    }
}
