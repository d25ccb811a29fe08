use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use jadarat_report::config::ReportConfig;

use crate::util::validate_postings_file;

/// Everything a `render` or `summarize` run needs.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RunConfig {
    pub version: String,
    pub data_file: String,
    pub output_file: String,
    pub report: ReportConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            version: clap::crate_version!().to_string(),
            data_file: String::from("cleaned_data.csv"),
            output_file: String::from("jadarat_report.html"),
            report: ReportConfig::default(),
        }
    }
}

impl RunConfig {
    /// Build the run configuration from an optional JSON file, then apply
    /// command-line overrides. Fields missing from the file keep their
    /// defaults.
    pub fn from_arguments(config_path: Option<&PathBuf>, matches: &ArgMatches) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => {
                log::info!("No config file provided; using defaults.");
                RunConfig::default()
            }
        };

        if let Some(data_file) = matches.get_one::<PathBuf>("data") {
            config.data_file = data_file.to_string_lossy().into_owned();
        }
        if let Ok(Some(output_file)) = matches.try_get_one::<PathBuf>("output_file") {
            config.output_file = output_file.to_string_lossy().into_owned();
        }
        if let Some(top_jobs) = matches.get_one::<usize>("top_jobs") {
            config.report.top_jobs = *top_jobs;
        }

        validate_postings_file(&config.data_file)?;
        config
            .report
            .validate()
            .context("Invalid report configuration")?;

        Ok(config)
    }

    fn from_file(config_path: &PathBuf) -> Result<Self> {
        let config_json = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let partial: serde_json::Value = serde_json::from_str(&config_json)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
        let mut config = RunConfig::default();

        macro_rules! load_or_default {
            ($field:ident) => {
                if let Some(val) = partial.get(stringify!($field)) {
                    if let Ok(parsed) = serde_json::from_value(val.clone()) {
                        config.$field = parsed;
                    } else {
                        log::warn!(
                            "Config Invalid value for '{}', using default: {:?}",
                            stringify!($field), config.$field
                        );
                    }
                } else {
                    log::warn!(
                        "Config Missing field '{}', using default: {:?}",
                        stringify!($field), config.$field
                    );
                }
            };
        }

        load_or_default!(data_file);
        load_or_default!(output_file);
        load_or_default!(report);

        Ok(config)
    }
}
