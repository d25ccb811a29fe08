//! Typed records for the postings table.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Gender requirement stated on a posting.
///
/// Declaration order is the display order used by the gender chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Both,
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Both, Gender::Male, Gender::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Both => "Both",
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        match value {
            "ذكر" => return Ok(Gender::Male),
            "أنثى" | "انثى" => return Ok(Gender::Female),
            "كلاهما" | "ذكر وأنثى" | "ذكر وانثى" => return Ok(Gender::Both),
            _ => {}
        }
        match value.to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "both" | "any" => Ok(Gender::Both),
            _ => Err(format!("Unknown gender requirement: '{}'", value)),
        }
    }
}

/// Derived binary experience class of a posting.
///
/// Declaration order is the display order used by the experience chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceCategory {
    Experienced,
    FreshGraduates,
}

impl ExperienceCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceCategory::Experienced => "Experienced",
            ExperienceCategory::FreshGraduates => "Fresh Graduates",
        }
    }
}

impl fmt::Display for ExperienceCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a posting by its required years of experience.
///
/// Exactly zero years is a fresh-graduate posting; every other value is
/// experienced. This is an equality test, not a threshold.
pub fn classify_experience(years_experience: u32) -> ExperienceCategory {
    if years_experience == 0 {
        ExperienceCategory::FreshGraduates
    } else {
        ExperienceCategory::Experienced
    }
}

/// One row of the postings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub region: String,
    pub job_title: String,
    pub gender: Gender,
    pub years_experience: u32,
    pub available_vacancies: u32,
    /// Monthly salary in SAR, `None` when the export left it blank.
    pub salary_sar: Option<f64>,
}

impl JobPosting {
    pub fn experience_category(&self) -> ExperienceCategory {
        classify_experience(self.years_experience)
    }

    pub fn is_fresh_graduate(&self) -> bool {
        self.experience_category() == ExperienceCategory::FreshGraduates
    }
}

/// The loaded postings, immutable once built.
#[derive(Debug, Clone, Default)]
pub struct PostingTable {
    rows: Vec<JobPosting>,
}

impl PostingTable {
    pub fn new(rows: Vec<JobPosting>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JobPosting> {
        self.rows.iter()
    }

    pub fn rows(&self) -> &[JobPosting] {
        &self.rows
    }
}

impl FromIterator<JobPosting> for PostingTable {
    fn from_iter<I: IntoIterator<Item = JobPosting>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PostingTable {
    type Item = &'a JobPosting;
    type IntoIter = std::slice::Iter<'a, JobPosting>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
