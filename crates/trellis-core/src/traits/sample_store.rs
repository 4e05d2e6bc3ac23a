use chrono::{DateTime, Utc};

use crate::errors::TrellisResult;
use crate::models::{IntentOutcome, ScoreBucket, SourceCounts};
use crate::sample::TrainingSample;

/// Persistence and aggregate queries over training samples.
pub trait ISampleStore: Send + Sync {
    // --- Writes ---
    /// Insert a batch atomically: either every sample lands or none does.
    /// Returns the number inserted.
    fn insert_batch(&self, samples: &[TrainingSample]) -> TrellisResult<usize>;

    // --- Aggregates ---
    /// Sample counts by provenance since `since`.
    fn count_by_source_since(
        &self,
        tenant_id: &str,
        since: DateTime<Utc>,
    ) -> TrellisResult<SourceCounts>;

    /// Accuracy of the deployed model on real samples since `since`.
    /// `None` when no real sample in the window has a recorded outcome.
    fn real_accuracy_since(
        &self,
        tenant_id: &str,
        since: DateTime<Utc>,
    ) -> TrellisResult<Option<f64>>;

    /// Accuracy on synthetic samples since `since`. `None` on no data.
    fn synthetic_accuracy_since(
        &self,
        tenant_id: &str,
        since: DateTime<Utc>,
    ) -> TrellisResult<Option<f64>>;

    /// Per-intent correct/incorrect counts since `since`.
    fn intent_outcomes_since(
        &self,
        tenant_id: &str,
        since: DateTime<Utc>,
    ) -> TrellisResult<Vec<IntentOutcome>>;

    /// Histogram of GRAPE scores across a tenant's synthetic samples.
    fn grape_score_distribution(&self, tenant_id: &str) -> TrellisResult<Vec<ScoreBucket>>;
}
