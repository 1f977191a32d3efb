//! Error types for the report scanner.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our custom error.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Errors that can occur while scanning an evaluation report.
#[derive(Error, Debug)]
pub enum TallyError {
    /// Error reading a report or config file.
    #[error("I/O error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report file does not exist.
    #[error("Report not found at '{0}'")]
    ReportNotFound(PathBuf),

    /// A row needed a tab-separated value but had none.
    #[error("Line {line}: row '{label}' has no tab-separated value")]
    MissingValue { line: usize, label: String },

    /// A per-query score is not a number.
    #[error("Line {line}: invalid score '{value}'")]
    InvalidScore { line: usize, value: String },

    /// More per-query MAP rows than baseline entries.
    #[error("Line {line}: baseline index {index} out of range (baseline has {len} entries)")]
    BaselineExhausted {
        line: usize,
        index: usize,
        len: usize,
    },

    /// Configuration file error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TallyError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
