//! Line-level view of a `trec_eval` report.
//!
//! A report row looks like `map                   \t51\t0.0180`: the metric
//! name, space padding, then the row label and the value separated by tabs.
//! The label is either a query id or `all` for the aggregate summary row.

use crate::error::{Result, TallyError};

/// Label of the aggregate summary row.
pub const AGGREGATE_LABEL: &str = "all";

/// One classified report line, borrowing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLine<'a> {
    /// First space-delimited token (the metric name).
    pub metric: &'a str,
    /// Number of tokens when splitting on single spaces, empty tokens included.
    pub token_count: usize,
    /// Query id or `all`.
    pub label: &'a str,
    /// Text after the first tab of the last token, if any.
    pub value: Option<&'a str>,
}

impl<'a> ReportLine<'a> {
    /// Classify a line. Never fails; missing parts surface later through
    /// [`require_value`](Self::require_value) and [`score`](Self::score).
    pub fn parse(line: &'a str) -> Self {
        let mut metric = "";
        let mut last = "";
        let mut token_count = 0;
        for token in line.split(' ') {
            if token_count == 0 {
                metric = token;
            }
            last = token;
            token_count += 1;
        }

        let mut fields = last.trim().split('\t');
        let label = fields.next().unwrap_or_default();
        let value = fields.next();

        Self {
            metric,
            token_count,
            label,
            value,
        }
    }

    /// Whether this is the `all` summary row.
    pub fn is_aggregate(&self) -> bool {
        self.label == AGGREGATE_LABEL
    }

    /// The raw value, or an error naming the offending line.
    pub fn require_value(&self, line_no: usize) -> Result<&'a str> {
        self.value.ok_or_else(|| TallyError::MissingValue {
            line: line_no,
            label: self.label.to_string(),
        })
    }

    /// The value parsed as a score.
    pub fn score(&self, line_no: usize) -> Result<f64> {
        let value = self.require_value(line_no)?;
        value
            .trim()
            .parse::<f64>()
            .map_err(|_| TallyError::InvalidScore {
                line: line_no,
                value: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trec_eval_row() {
        let line = ReportLine::parse("map                   \t51\t0.0180");

        assert_eq!(line.metric, "map");
        assert_eq!(line.label, "51");
        assert_eq!(line.value, Some("0.0180"));
        assert!(line.token_count > 2);
        assert!(!line.is_aggregate());
    }

    #[test]
    fn test_parse_aggregate_row() {
        let line = ReportLine::parse("P10                   \tall\t0.4000");

        assert_eq!(line.metric, "P10");
        assert!(line.is_aggregate());
        assert_eq!(line.require_value(1).unwrap(), "0.4000");
    }

    #[test]
    fn test_padding_counts_as_tokens() {
        assert_eq!(ReportLine::parse("P10 \tall\t0.4").token_count, 2);
        assert_eq!(ReportLine::parse("P10  \tall\t0.4").token_count, 3);
        assert_eq!(ReportLine::parse("map").token_count, 1);
    }

    #[test]
    fn test_trailing_whitespace_is_trimmed() {
        let line = ReportLine::parse("map  \t7\t0.2500\r");
        assert_eq!(line.value, Some("0.2500"));
        assert_eq!(line.score(1).unwrap(), 0.25);
    }

    #[test]
    fn test_empty_line() {
        let line = ReportLine::parse("");
        assert_eq!(line.metric, "");
        assert_eq!(line.label, "");
        assert_eq!(line.value, None);
        assert_eq!(line.token_count, 1);
    }

    #[test]
    fn test_missing_value() {
        let line = ReportLine::parse("map  51");
        assert!(matches!(
            line.score(4),
            Err(TallyError::MissingValue { line: 4, .. })
        ));
    }

    #[test]
    fn test_invalid_score() {
        let line = ReportLine::parse("map  \t51\tn/a");
        match line.score(9) {
            Err(TallyError::InvalidScore { line, value }) => {
                assert_eq!(line, 9);
                assert_eq!(value, "n/a");
            }
            other => panic!("expected InvalidScore, got {:?}", other),
        }
    }

    #[test]
    fn test_extra_tab_fields_are_ignored() {
        let line = ReportLine::parse("map  \t51\t0.3\textra");
        assert_eq!(line.value, Some("0.3"));
    }
}
