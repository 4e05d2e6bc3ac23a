//! GRAPE filter: keep the best-agreeing fraction of a candidate batch.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use trellis_core::sample::{Confidence, SyntheticSample};
use trellis_core::traits::IIntentMatcher;

use crate::scorer;

/// A candidate paired with its model-agreement score. Ownership of the
/// sample moves through the filter with its score, so nothing aliases the
/// batch while it is being ranked.
struct ScoredCandidate {
    sample: SyntheticSample,
    score: Confidence,
}

/// Generation-Rating Agreement Pruning engine.
///
/// Scores each candidate against the deployed intent model, ranks by
/// score, and keeps the top `keep_ratio` fraction.
pub struct GrapeFilter {
    matcher: Arc<dyn IIntentMatcher>,
    keep_ratio: f64,
}

impl GrapeFilter {
    pub fn new(matcher: Arc<dyn IIntentMatcher>, keep_ratio: f64) -> Self {
        Self {
            matcher,
            keep_ratio,
        }
    }

    /// Same matcher, different keep ratio. Lets a per-tenant setting
    /// override the ratio this filter was built with.
    pub fn with_keep_ratio(&self, keep_ratio: f64) -> Self {
        Self {
            matcher: self.matcher.clone(),
            keep_ratio,
        }
    }

    /// Filter a batch. Empty input yields empty output, never an error.
    ///
    /// Kept samples come back in score-descending order with `grape_score`
    /// set; the orchestrator's final cap relies on that order. Discarded
    /// samples are dropped entirely.
    pub fn filter(&self, candidates: Vec<SyntheticSample>) -> Vec<SyntheticSample> {
        if candidates.is_empty() {
            return Vec::new();
        }
        let total = candidates.len();
        let mut scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .map(|sample| {
                let score = scorer::score_sample(self.matcher.as_ref(), &sample);
                ScoredCandidate { sample, score }
            })
            .collect();
        // Descending; ties keep their relative order (stable sort).
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        let keep = keep_count(total, self.keep_ratio);
        debug!(total, keep, "ranked candidate batch");
        scored.truncate(keep);
        scored
            .into_iter()
            .map(|mut c| {
                c.sample.grape_score = Some(c.score);
                c.sample
            })
            .collect()
    }
}

/// `ceil(total × ratio)`, with a floor of one sample kept.
fn keep_count(total: usize, ratio: f64) -> usize {
    let count = ((total as f64) * ratio).ceil() as usize;
    count.max(1)
}
