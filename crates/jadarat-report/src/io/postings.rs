//! Postings CSV/TSV reader.
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::StringRecord;

use crate::config::ColumnNames;
use crate::error::{ReportError, Result};
use crate::model::{Gender, JobPosting, PostingTable};

const REGION_ALIASES: &[&str] = &["region"];
const JOB_TITLE_ALIASES: &[&str] = &["job_title", "job title", "title"];
const GENDER_ALIASES: &[&str] = &["gender", "gender_requirement"];
const YEARS_ALIASES: &[&str] = &["years_experience", "experience_years", "experience"];
const VACANCIES_ALIASES: &[&str] = &["available_vacancies", "vacancies"];
const SALARY_ALIASES: &[&str] = &["salary_sar", "salary"];

/// Salary cells holding one of these count as missing. Text columns only
/// treat an empty cell as missing.
const MISSING_MARKERS: &[&str] = &["nan", "na", "n/a", "null", "none"];

/// Resolved positions of the required columns in the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndices {
    region: usize,
    job_title: usize,
    gender: usize,
    years_experience: usize,
    available_vacancies: usize,
    salary: usize,
}

/// Load postings using the default (Arabic) column names.
pub fn load_postings<P: AsRef<Path>>(path: P) -> Result<PostingTable> {
    load_postings_with_columns(path, &ColumnNames::default())
}

/// Load postings from a `.csv` or `.tsv` file.
pub fn load_postings_with_columns<P: AsRef<Path>>(
    path: P,
    columns: &ColumnNames,
) -> Result<PostingTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReportError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let is_tsv = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("tsv"))
        .unwrap_or(false);
    let delimiter = if is_tsv { b'\t' } else { b',' };

    let table = load_postings_from_reader(BufReader::new(file), delimiter, columns)?;
    log::info!("Loaded {} postings from {}", table.len(), path.display());
    Ok(table)
}

/// Parse postings from any reader with a header row.
pub fn load_postings_from_reader<R: Read>(
    reader: R,
    delimiter: u8,
    columns: &ColumnNames,
) -> Result<PostingTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|source| ReportError::Csv { row: 0, source })?
        .clone();
    let idx = resolve_columns(&headers, columns)?;
    log::trace!("Resolved postings columns: {:?}", idx);

    let mut rows = Vec::new();
    for (row_idx, result) in rdr.records().enumerate() {
        let row = row_idx + 1;
        let record = result.map_err(|source| ReportError::Csv { row, source })?;

        let region = required_text(&record, idx.region, row, &columns.region)?;
        let job_title = required_text(&record, idx.job_title, row, &columns.job_title)?;
        let gender = required_text(&record, idx.gender, row, &columns.gender)?
            .parse::<Gender>()
            .map_err(|message| ReportError::Parse {
                row,
                column: columns.gender.clone(),
                message,
            })?;

        let years_experience = parse_count(cell(&record, idx.years_experience))
            .map_err(|message| ReportError::Parse {
                row,
                column: columns.years_experience.clone(),
                message,
            })?;
        let available_vacancies = parse_count(cell(&record, idx.available_vacancies))
            .map_err(|message| ReportError::Parse {
                row,
                column: columns.available_vacancies.clone(),
                message,
            })?;
        let salary_sar = parse_salary(cell(&record, idx.salary)).map_err(|message| {
            ReportError::Parse {
                row,
                column: columns.salary.clone(),
                message,
            }
        })?;

        rows.push(JobPosting {
            region,
            job_title,
            gender,
            years_experience,
            available_vacancies,
            salary_sar,
        });
    }

    Ok(PostingTable::new(rows))
}

fn normalize_header(header: &str) -> &str {
    header.trim_start_matches('\u{feff}').trim()
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    let name = name.trim();
    headers
        .iter()
        .position(|header| normalize_header(header).eq_ignore_ascii_case(name))
}

fn find_any_column(headers: &StringRecord, configured: &str, aliases: &[&str]) -> Option<usize> {
    find_column(headers, configured).or_else(|| {
        aliases
            .iter()
            .find_map(|alias| find_column(headers, alias))
    })
}

fn resolve_columns(headers: &StringRecord, columns: &ColumnNames) -> Result<ColumnIndices> {
    let mut missing = Vec::new();
    let mut lookup = |configured: &String, aliases: &[&str]| {
        let found = find_any_column(headers, configured, aliases);
        if found.is_none() {
            missing.push(configured.clone());
        }
        found.unwrap_or(usize::MAX)
    };

    let indices = ColumnIndices {
        region: lookup(&columns.region, REGION_ALIASES),
        job_title: lookup(&columns.job_title, JOB_TITLE_ALIASES),
        gender: lookup(&columns.gender, GENDER_ALIASES),
        years_experience: lookup(&columns.years_experience, YEARS_ALIASES),
        available_vacancies: lookup(&columns.available_vacancies, VACANCIES_ALIASES),
        salary: lookup(&columns.salary, SALARY_ALIASES),
    };

    if !missing.is_empty() {
        return Err(ReportError::MissingColumns(missing));
    }
    Ok(indices)
}

fn cell(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or_default().trim()
}

fn required_text(record: &StringRecord, idx: usize, row: usize, column: &str) -> Result<String> {
    let value = cell(record, idx);
    if value.is_empty() {
        return Err(ReportError::MissingValue {
            row,
            column: column.to_string(),
        });
    }
    Ok(value.to_string())
}

fn is_missing_marker(value: &str) -> bool {
    MISSING_MARKERS
        .iter()
        .any(|marker| value.eq_ignore_ascii_case(marker))
}

/// Parse a non-negative whole number, accepting the `3.0` form pandas writes
/// for integer columns that once held NaN.
fn parse_count(value: &str) -> std::result::Result<u32, String> {
    if let Ok(n) = value.parse::<u32>() {
        return Ok(n);
    }
    let parsed = value
        .parse::<f64>()
        .map_err(|_| format!("expected a non-negative integer, got '{}'", value))?;
    let integral = parsed.fract() == 0.0;
    if !parsed.is_finite() || parsed < 0.0 || !integral || parsed > u32::MAX as f64 {
        return Err(format!("expected a non-negative integer, got '{}'", value));
    }
    Ok(parsed as u32)
}

fn parse_salary(value: &str) -> std::result::Result<Option<f64>, String> {
    if value.is_empty() || is_missing_marker(value) {
        return Ok(None);
    }
    let parsed = value
        .parse::<f64>()
        .map_err(|_| format!("expected a salary amount, got '{}'", value))?;
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(format!("expected a non-negative salary, got '{}'", value));
    }
    Ok(Some(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_accepts_integral_floats() {
        assert_eq!(parse_count("3"), Ok(3));
        assert_eq!(parse_count("3.0"), Ok(3));
        assert!(parse_count("2.5").is_err());
        assert!(parse_count("-1").is_err());
        assert!(parse_count("").is_err());
    }

    #[test]
    fn salary_markers_are_missing() {
        assert_eq!(parse_salary(""), Ok(None));
        assert_eq!(parse_salary("NaN"), Ok(None));
        assert_eq!(parse_salary("4000.0"), Ok(Some(4000.0)));
        assert!(parse_salary("-5").is_err());
        assert!(parse_salary("lots").is_err());
    }

    #[test]
    fn header_lookup_strips_bom_and_case() {
        let headers = StringRecord::from(vec!["\u{feff}Region", " Job_Title "]);
        assert_eq!(find_column(&headers, "region"), Some(0));
        assert_eq!(find_column(&headers, "job_title"), Some(1));
    }
}
