//! Report generation: load the postings, aggregate, assemble the page.
use std::path::Path;

use maud::html;

use crate::aggregate::ReportData;
use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::io::load_postings_with_columns;
use crate::model::PostingTable;
use crate::narrative;
use crate::report::plots::{plot_bars, plot_donut, ChartLayout};
use crate::report::{Report, ReportSection};

pub const APP_NAME: &str = "Jadarat Insights";

/// Runs the linear load → aggregate → render flow for one configuration.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    config: ReportConfig,
    version: String,
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    /// Version string printed in the report footer.
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn load<P: AsRef<Path>>(&self, data_path: P) -> Result<PostingTable> {
        load_postings_with_columns(data_path, &self.config.columns)
    }

    pub fn summarize(&self, table: &PostingTable) -> ReportData {
        ReportData::compute(table, self.config.top_jobs)
    }

    /// Assemble the report sections in their fixed reading order.
    pub fn build(&self, data: &ReportData) -> Report {
        let theme = &self.config.theme;
        let mut report = Report::new(
            APP_NAME,
            &self.version,
            &self.config.title,
            Some("Where the jobs are, who is hiring, and what they pay on Jadarat"),
        );

        /* Section 1: Introduction */
        {
            let mut section = ReportSection::new("Introduction");
            section.add_content(narrative::introduction());
            report.add_section(section);
        }

        /* Section 2: Regions */
        {
            let mut section = ReportSection::new("So, Let's Talk Numbers: Where Are the Jobs?");
            section.add_content(narrative::regions_intro(&data.regions));
            section.add_plot(plot_donut(
                &data.regions,
                &ChartLayout::new(
                    "Proportion of Job Postings by Region",
                    theme.width,
                    theme.height,
                ),
                theme,
            ));
            section.add_content(narrative::regions_outro(&data.regions));
            report.add_section(section);
        }

        /* Section 3: Gender */
        {
            let mut section =
                ReportSection::new("Gender Talk: Who's Getting Hired More, Men or Women?");
            section.add_content(narrative::gender_intro(&data.genders, data.total_postings));
            section.add_plot(plot_bars(
                &data.genders,
                &ChartLayout::new("Job Postings by Gender", theme.width, theme.height)
                    .axis_titles("Gender", "Number of Job Postings"),
                theme,
                true,
            ));
            section.add_content(narrative::gender_outro());
            report.add_section(section);
        }

        /* Section 4: Experience */
        {
            let mut section =
                ReportSection::new("Fresh Graduate vs. Experienced: Who's Winning the Job Game?");
            section.add_content(narrative::experience_intro(&data.experience));
            section.add_plot(plot_bars(
                &data.experience,
                &ChartLayout::new(
                    "Job Postings for Fresh Graduates vs Experienced Professionals",
                    theme.width,
                    theme.height,
                )
                .axis_titles("Experience Category", "Number of Job Postings"),
                theme,
                true,
            ));
            section.add_content(narrative::experience_outro());
            report.add_section(section);
        }

        /* Section 5: Demand */
        {
            let mut section =
                ReportSection::new("The Big Question: What Are the Most In-Demand Jobs?");
            section.add_content(narrative::demand_intro(&data.top_jobs));
            section.add_plot(plot_donut(
                &data.top_jobs,
                &ChartLayout::new(
                    &format!(
                        "Top {} Most In-Demand Jobs in Saudi Arabia",
                        self.config.top_jobs
                    ),
                    theme.wide_width,
                    theme.height,
                )
                .legend_title("Job Title"),
                theme,
            ));
            section.add_content(narrative::demand_outro());
            report.add_section(section);
        }

        /* Section 6: Salaries */
        {
            let mut section =
                ReportSection::new("Now, Let's Talk Money: What Can You Expect to Get Paid?");
            section.add_content(narrative::salary_intro());

            section.add_content(html! { h3 { "Median Salary by Experience Level" } });
            section.add_plot(plot_bars(
                &data.median_salary,
                &ChartLayout::new(
                    "Median Salary by Experience Level",
                    theme.wide_width,
                    theme.height,
                )
                .axis_titles("Years of Experience", "Median Salary (SAR)"),
                theme,
                false,
            ));

            section.add_content(html! { h3 { "Average Salary by Experience Level" } });
            section.add_plot(plot_bars(
                &data.mean_salary,
                &ChartLayout::new(
                    "Average Salary by Experience Level",
                    theme.wide_width,
                    theme.height,
                )
                .axis_titles("Years of Experience", "Average Salary (SAR)"),
                theme,
                false,
            ));

            section.add_content(html! { h3 { "Salary Range for Fresh Graduates" } });
            section.add_content(narrative::fresh_graduate_salary(&data.fresh_graduate_salary));
            section.add_content(narrative::salary_outro(&data.median_salary));
            report.add_section(section);
        }

        report
    }

    /// Load `data_path`, build the report and write it to `output_path`.
    /// Returns the aggregates the page was built from.
    pub fn generate<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        data_path: P,
        output_path: Q,
    ) -> Result<ReportData> {
        let table = self.load(data_path)?;
        let data = self.summarize(&table);
        self.write(&data, output_path)?;
        Ok(data)
    }

    /// Render `data` and write the page to `output_path`.
    pub fn write<P: AsRef<Path>>(&self, data: &ReportData, output_path: P) -> Result<()> {
        let output_path = output_path.as_ref();
        self.build(data)
            .save_to_file(output_path)
            .map_err(|source| ReportError::ReportWrite {
                path: output_path.to_path_buf(),
                source,
            })
    }
}

/// Build the report for an already loaded table.
pub fn build_report(table: &PostingTable, config: &ReportConfig) -> Result<Report> {
    let generator = ReportGenerator::new(config.clone())?;
    Ok(generator.build(&generator.summarize(table)))
}

/// Load `data_path`, render the report to `output_path` and return the
/// aggregates it shows.
pub fn generate_report<P: AsRef<Path>, Q: AsRef<Path>>(
    data_path: P,
    output_path: Q,
    config: &ReportConfig,
) -> Result<ReportData> {
    ReportGenerator::new(config.clone())?.generate(data_path, output_path)
}
