use anyhow::{Context, Result};

use jadarat_report::aggregate::{FreshGraduateSalary, ReportData};
use jadarat_report::generator::ReportGenerator;

use super::input::RunConfig;

fn generator(config: &RunConfig) -> Result<ReportGenerator> {
    Ok(ReportGenerator::new(config.report.clone())
        .context("Invalid report configuration")?
        .with_version(&config.version))
}

/// Render the HTML report described by `config`.
pub fn run_render(config: &RunConfig) -> Result<ReportData> {
    let start_time = std::time::Instant::now();
    let generator = generator(config)?;
    let table = generator
        .load(&config.data_file)
        .with_context(|| format!("Failed to load postings from {}", config.data_file))?;
    let data = generator.summarize(&table);
    generator
        .write(&data, &config.output_file)
        .with_context(|| format!("Failed to save report to {}", config.output_file))?;

    log::info!(
        "Rendered {} postings into {} in {:?}",
        data.total_postings,
        config.output_file,
        start_time.elapsed()
    );
    if let FreshGraduateSalary::NoData = data.fresh_graduate_salary {
        log::warn!("Report has no fresh-graduate salary data");
    }
    Ok(data)
}

/// Compute the aggregates without rendering, as pretty-printed JSON.
pub fn run_summarize(config: &RunConfig) -> Result<String> {
    let generator = generator(config)?;
    let table = generator
        .load(&config.data_file)
        .with_context(|| format!("Failed to load postings from {}", config.data_file))?;
    let data = generator.summarize(&table);
    serde_json::to_string_pretty(&data).context("Failed to serialize report data")
}
