//! Baseline per-query MAP scores that a run is compared against.

use crate::error::{Result, TallyError};

/// Per-query MAP of the reference run, in report order.
pub const DEFAULT_BASELINE: [f64; 20] = [
    0.0180, 0.0013, 0.0146, 0.0585, 0.2721, 0.1555, 0.0183, 0.0014, 0.0000, 0.0729, 0.1118,
    0.0043, 0.0336, 0.0481, 0.0288, 0.0615, 0.0862, 0.0000, 0.0175, 0.0006,
];

/// An ordered table of baseline MAP values, indexed by query position.
#[derive(Debug, Clone, PartialEq)]
pub struct Baseline {
    scores: Vec<f64>,
}

impl Baseline {
    pub fn new(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    /// Score at `index`. Indexing past the end is an error, never a wrap.
    pub fn score_at(&self, index: usize, line_no: usize) -> Result<f64> {
        self.scores
            .get(index)
            .copied()
            .ok_or(TallyError::BaselineExhausted {
                line: line_no,
                index,
                len: self.scores.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }
}

impl Default for Baseline {
    fn default() -> Self {
        Self::new(DEFAULT_BASELINE.to_vec())
    }
}
