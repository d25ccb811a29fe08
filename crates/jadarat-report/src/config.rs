use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Plotly's sequential Viridis scale, as used by the published report.
pub const VIRIDIS: [&str; 10] = [
    "#440154", "#482878", "#3e4989", "#31688e", "#26828e", "#1f9e89", "#35b779", "#6ece58",
    "#b5de2b", "#fde725",
];

/// Central configuration for a report run.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    pub title: String,
    /// Number of job titles kept by the demand chart.
    pub top_jobs: usize,
    pub columns: ColumnNames,
    pub theme: ChartTheme,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Wanna Get Hired? Let's Uncover What's Really Going On with Jobs in Saudi Arabia!"
                .to_string(),
            top_jobs: 10,
            columns: ColumnNames::default(),
            theme: ChartTheme::default(),
        }
    }
}

impl ReportConfig {
    pub fn validate(&self) -> Result<()> {
        if self.top_jobs == 0 {
            return Err(ReportError::InvalidConfig(
                "top_jobs must be at least 1".to_string(),
            ));
        }
        self.columns.validate()?;
        self.theme.validate()
    }
}

/// Header names of the six required columns.
///
/// Defaults are the Arabic headers of the cleaned export.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ColumnNames {
    pub region: String,
    pub job_title: String,
    pub gender: String,
    pub years_experience: String,
    pub available_vacancies: String,
    pub salary: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            region: "المنطقة".to_string(),
            job_title: "العنوان الوظيفي".to_string(),
            gender: "الجنس".to_string(),
            years_experience: "سنوات الخبرة".to_string(),
            available_vacancies: "الشواغر المتوفرة".to_string(),
            salary: "الراتب بالريال السعودي".to_string(),
        }
    }
}

impl ColumnNames {
    fn validate(&self) -> Result<()> {
        let names = [
            ("region", &self.region),
            ("job_title", &self.job_title),
            ("gender", &self.gender),
            ("years_experience", &self.years_experience),
            ("available_vacancies", &self.available_vacancies),
            ("salary", &self.salary),
        ];
        for (field, name) in names {
            if name.trim().is_empty() {
                return Err(ReportError::InvalidConfig(format!(
                    "column name for '{}' must not be empty",
                    field
                )));
            }
        }
        Ok(())
    }
}

/// Cosmetic options shared by every chart.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ChartTheme {
    /// Ordered color sequence, first color is used for single-trace bars.
    pub palette: Vec<String>,
    pub transparent_background: bool,
    /// Color of titles, labels and axis lines.
    pub text_color: String,
    /// Fraction of the radius cut out of donut charts.
    pub donut_hole: f64,
    pub width: usize,
    /// Width of the demand and salary charts.
    pub wide_width: usize,
    pub height: usize,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            palette: VIRIDIS.iter().map(|c| c.to_string()).collect(),
            transparent_background: true,
            text_color: "grey".to_string(),
            donut_hole: 0.3,
            width: 700,
            wide_width: 800,
            height: 500,
        }
    }
}

impl ChartTheme {
    fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(ReportError::InvalidConfig(
                "theme.palette must contain at least one color".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.donut_hole) {
            return Err(ReportError::InvalidConfig(format!(
                "theme.donut_hole must be in [0, 1), got {}",
                self.donut_hole
            )));
        }
        if self.width == 0 || self.wide_width == 0 || self.height == 0 {
            return Err(ReportError::InvalidConfig(
                "chart dimensions must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load a report configuration from a JSON file. Missing fields fall back to
/// their defaults.
pub fn load_report_config<P: AsRef<Path>>(path: P) -> Result<ReportConfig> {
    let content = std::fs::read_to_string(&path).map_err(|source| ReportError::FileAccess {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    let config: ReportConfig = serde_json::from_str(&content).map_err(|e| {
        ReportError::InvalidConfig(format!("{}: {}", path.as_ref().display(), e))
    })?;
    config.validate()?;
    Ok(config)
}
