//! trec-tally - summarise `trec_eval` reports against a baseline run.
//!
//! Reads the text report written by `trec_eval`, keeps the aggregate
//! P10/P20/P30/MAP values, and counts how many queries beat or trail a
//! baseline run on per-query MAP.
//!
//! # Quick Start
//!
//! ```no_run
//! use trec_tally::{baseline::Baseline, config::Config, scanner::scan_file};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let summary = scan_file(&config.report.path, &Baseline::default())?;
//!     print!("{}", summary);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - **ReportLine**: classifies one report row by metric and label
//! - **Baseline**: the per-query MAP table a run is compared against
//! - **scan_reader / scan_file**: the single-pass scanner producing a `Summary`

pub mod baseline;
pub mod config;
pub mod error;
pub mod report;
pub mod scanner;

// Re-export commonly used types
pub use baseline::{Baseline, DEFAULT_BASELINE};
pub use config::Config;
pub use error::{Result, TallyError};
pub use report::ReportLine;
pub use scanner::{Summary, Tally, scan_file, scan_reader, scan_str};
