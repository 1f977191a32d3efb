//! Single-pass report scanner.
//!
//! Reads a `trec_eval` report once and produces a [`Summary`]: the aggregate
//! P10/P20/P30/MAP values as written in the report, plus a win/loss tally of
//! per-query MAP against a [`Baseline`].
//!
//! Every `map` row advances the baseline index, the `all` row included. When
//! the summary row precedes the per-query rows, the first query is therefore
//! compared against the second baseline entry.

use crate::baseline::Baseline;
use crate::error::{Result, TallyError};
use crate::report::ReportLine;
use log::{debug, info};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Metric name of mean average precision rows.
const MAP_METRIC: &str = "map";

/// Per-query MAP comparison counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Queries scoring strictly above the baseline.
    pub win: usize,
    /// Queries scoring strictly below the baseline.
    pub loss: usize,
}

impl Tally {
    /// Record one comparison. Ties leave the tally unchanged.
    pub fn record(&mut self, score: f64, baseline: f64) {
        if score > baseline {
            self.win += 1;
        } else if score < baseline {
            self.loss += 1;
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.win, self.loss)
    }
}

/// Outcome of one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Aggregate precision at 10, verbatim.
    pub p10: String,
    /// Aggregate precision at 20, verbatim.
    pub p20: String,
    /// Aggregate precision at 30, verbatim.
    pub p30: String,
    /// Aggregate MAP, verbatim.
    pub map: String,
    pub tally: Tally,
}

impl Summary {
    fn aggregate_slot(&mut self, metric: &str) -> Option<&mut String> {
        match metric {
            "P10" => Some(&mut self.p10),
            "P20" => Some(&mut self.p20),
            "P30" => Some(&mut self.p30),
            MAP_METRIC => Some(&mut self.map),
            _ => None,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.p10)?;
        writeln!(f, "{}", self.p20)?;
        writeln!(f, "{}", self.p30)?;
        writeln!(f, "{}", self.map)?;
        writeln!(f, "{}", self.tally)
    }
}

/// Scan a report from any buffered reader.
///
/// `source` names the input in I/O errors.
pub fn scan_reader<R: BufRead>(reader: R, source: &Path, baseline: &Baseline) -> Result<Summary> {
    let mut summary = Summary::default();
    let mut query_index = 0;
    let mut lines_read = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| TallyError::io(source, e))?;
        let line_no = idx + 1;
        lines_read = line_no;
        let row = ReportLine::parse(&line);

        if row.metric == MAP_METRIC {
            if !row.is_aggregate() {
                let score = row.score(line_no)?;
                let expected = baseline.score_at(query_index, line_no)?;
                summary.tally.record(score, expected);
                debug!(
                    "query {} (baseline #{}): {} vs {}",
                    row.label, query_index, score, expected
                );
            }
            query_index += 1;
        }

        if row.token_count > 2 && row.is_aggregate() {
            if let Some(slot) = summary.aggregate_slot(row.metric) {
                let value = row.require_value(line_no)?;
                debug!("aggregate {} = {}", row.metric, value);
                *slot = value.to_string();
            }
        }
    }

    info!(
        "Scanned {} lines: {} wins, {} losses",
        lines_read, summary.tally.win, summary.tally.loss
    );

    Ok(summary)
}

/// Scan an in-memory report.
pub fn scan_str(report: &str, baseline: &Baseline) -> Result<Summary> {
    scan_reader(report.as_bytes(), Path::new("<memory>"), baseline)
}

/// Scan a report file.
pub fn scan_file(path: &Path, baseline: &Baseline) -> Result<Summary> {
    if !path.exists() {
        return Err(TallyError::ReportNotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|e| TallyError::io(path, e))?;
    info!("Scanning report {}", path.display());
    scan_reader(BufReader::new(file), path, baseline)
}
