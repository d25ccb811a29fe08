use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while loading postings or producing the report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to open postings file {}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed delimited record (unbalanced quotes, bad UTF-8, ...).
    #[error("Failed to read row {row}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid value in column '{column}' at row {row}: {message}")]
    Parse {
        row: usize,
        column: String,
        message: String,
    },

    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Empty value in required column '{column}' at row {row}")]
    MissingValue { row: usize, column: String },

    #[error("Failed to write report to {}", .path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// Schema errors are violations of the required-column contract, as
    /// opposed to unreadable files or unparseable values.
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            ReportError::MissingColumns(_) | ReportError::MissingValue { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
