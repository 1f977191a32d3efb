//! Configuration for the report scanner.
//!
//! Supports both environment variables and YAML config file.
//! Environment variables take precedence over config file values.

use crate::error::{Result, TallyError};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Conventional name of the saved `trec_eval` output.
pub const DEFAULT_REPORT_PATH: &str = "tmpout";

/// Environment variable overriding the report path.
pub const REPORT_PATH_ENV: &str = "TREC_TALLY_REPORT";

/// Report input settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Path of the evaluation report to scan.
    #[serde(default = "default_report_path")]
    pub path: PathBuf,
}

fn default_report_path() -> PathBuf {
    PathBuf::from(DEFAULT_REPORT_PATH)
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: default_report_path(),
        }
    }
}

/// Full application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Report settings
    #[serde(default)]
    pub report: ReportConfig,
}

/// Configuration file structure (YAML format).
#[derive(Debug, Deserialize)]
struct ConfigFile {
    report: Option<ReportFileSection>,
}

#[derive(Debug, Deserialize)]
struct ReportFileSection {
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables and optional config file.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variable (TREC_TALLY_REPORT)
    /// 2. Config file (~/.config/trec-tally/config.yaml)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        let mut config = Config::default();

        if let Some(config_path) = Self::config_file_path() {
            if config_path.exists() {
                config = Self::load_from_file(&config_path)?;
            }
        }

        config.apply_env(env::var(REPORT_PATH_ENV).ok());

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TallyError::io(path, e))?;
        Self::from_yaml(&content)
    }

    fn from_yaml(content: &str) -> Result<Self> {
        let mut config = Config::default();
        if content.trim().is_empty() {
            return Ok(config);
        }

        let file_config: ConfigFile = serde_yaml::from_str(content)
            .map_err(|e| TallyError::Config(format!("Failed to parse config file: {}", e)))?;

        if let Some(report) = file_config.report {
            if let Some(path) = report.path {
                config.report.path = path;
            }
        }

        Ok(config)
    }

    fn apply_env(&mut self, report_path: Option<String>) {
        if let Some(path) = report_path.filter(|p| !p.is_empty()) {
            self.report.path = PathBuf::from(path);
        }
    }

    /// Get the default config file path.
    pub fn config_file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "trec-tally")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Replace the report path, e.g. from a command-line argument.
    pub fn with_report(mut self, path: impl Into<PathBuf>) -> Self {
        self.report.path = path.into();
        self
    }
}
