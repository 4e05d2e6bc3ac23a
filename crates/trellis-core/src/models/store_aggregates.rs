use serde::{Deserialize, Serialize};

/// Sample counts by provenance over some window.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceCounts {
    pub real: u64,
    pub synthetic: u64,
}

impl SourceCounts {
    pub fn total(&self) -> u64 {
        self.real + self.synthetic
    }

    /// Fraction of the corpus that is synthetic. 0.0 for an empty corpus.
    pub fn synthetic_ratio(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.synthetic as f64 / total as f64
    }
}

/// Prediction outcomes for one intent over some window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntentOutcome {
    pub intent_code: String,
    /// Samples the deployed model classified correctly.
    pub correct: u64,
    /// Samples it got wrong.
    pub incorrect: u64,
}

/// One bucket of the GRAPE score histogram.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreBucket {
    /// Display label, e.g. `"0.6-0.8"`.
    pub label: String,
    /// Inclusive lower bound.
    pub lower: f64,
    /// Exclusive upper bound (inclusive for the final bucket).
    pub upper: f64,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_of_empty_corpus_is_zero() {
        let counts = SourceCounts::default();
        assert_eq!(counts.synthetic_ratio(), 0.0);
    }

    #[test]
    fn ratio_is_synthetic_over_total() {
        let counts = SourceCounts {
            real: 70,
            synthetic: 30,
        };
        assert!((counts.synthetic_ratio() - 0.3).abs() < 1e-12);
        assert_eq!(counts.total(), 100);
    }
}
