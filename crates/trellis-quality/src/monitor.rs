//! On-demand assembly of per-tenant quality metrics.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use trellis_core::config::QualityConfig;
use trellis_core::constants::TREND_WINDOW_DAYS;
use trellis_core::errors::TrellisResult;
use trellis_core::models::{ScoreBucket, SourceCounts, SyntheticDataMetrics};
use trellis_core::traits::ISampleStore;

use crate::divergence::distribution_drift;
use crate::trend::{seven_day_trend, start_of_day};

/// Blends real and synthetic accuracy, weighted by sample counts.
///
/// A side with no measured accuracy contributes zero, so a tenant whose
/// synthetic samples never received an outcome is pulled down rather
/// than flattered. Returns `None` when neither side has a reading or
/// the window holds no samples at all.
pub fn mixed_accuracy(
    real: Option<f64>,
    synthetic: Option<f64>,
    counts: &SourceCounts,
) -> Option<f64> {
    if real.is_none() && synthetic.is_none() {
        return None;
    }
    let total = counts.total();
    if total == 0 {
        return None;
    }
    let real_weight = counts.real as f64 / total as f64;
    let synthetic_weight = counts.synthetic as f64 / total as f64;
    Some(real.unwrap_or(0.0) * real_weight + synthetic.unwrap_or(0.0) * synthetic_weight)
}

/// Computes daily health snapshots for the synthetic data of a tenant.
///
/// Every reading is assembled on demand from the sample store; the
/// monitor itself keeps no state between calls.
pub struct QualityMonitor {
    /// Store queried for counts, accuracies and per-intent outcomes.
    store: Arc<dyn ISampleStore>,
    /// Thresholds used for the embedded alert evaluation.
    config: QualityConfig,
}

impl QualityMonitor {
    pub fn new(store: Arc<dyn ISampleStore>, config: QualityConfig) -> Self {
        Self { store, config }
    }

    /// Assembles the quality snapshot for one tenant and calendar day.
    ///
    /// The accuracy window starts at midnight UTC of `date`; the trend
    /// and drift look further back over the trailing week. Aside from
    /// store reads this is side-effect free.
    pub fn daily_metrics(
        &self,
        tenant_id: &str,
        date: DateTime<Utc>,
    ) -> TrellisResult<SyntheticDataMetrics> {
        let day_start = start_of_day(date);
        debug!(tenant_id = %tenant_id, day_start = %day_start, "computing daily quality metrics");

        let counts = self.store.count_by_source_since(tenant_id, day_start)?;
        let real_accuracy = self.store.real_accuracy_since(tenant_id, day_start)?;
        let synthetic_accuracy = self.store.synthetic_accuracy_since(tenant_id, day_start)?;
        let mixed = mixed_accuracy(real_accuracy, synthetic_accuracy, &counts);

        let accuracy_trend_7d = seven_day_trend(self.store.as_ref(), tenant_id, date)?;

        let week_start = start_of_day(date - Duration::days(TREND_WINDOW_DAYS));
        let outcomes = self.store.intent_outcomes_since(tenant_id, week_start)?;
        let drift = distribution_drift(&outcomes);

        let (should_trip, alert) = self.evaluate(real_accuracy, synthetic_accuracy, drift);

        info!(
            tenant_id = %tenant_id,
            real_count = counts.real,
            synthetic_count = counts.synthetic,
            drift = drift,
            should_trip = should_trip,
            "daily quality metrics computed"
        );

        Ok(SyntheticDataMetrics {
            tenant_id: tenant_id.to_string(),
            date: day_start,
            real_count: counts.real,
            synthetic_count: counts.synthetic,
            real_accuracy,
            synthetic_accuracy,
            mixed_accuracy: mixed,
            accuracy_trend_7d,
            distribution_drift: drift,
            should_trip,
            alert,
        })
    }

    /// Histogram of persisted curation scores, for dashboard use.
    pub fn grape_score_distribution(&self, tenant_id: &str) -> TrellisResult<Vec<ScoreBucket>> {
        self.store.grape_score_distribution(tenant_id)
    }

    /// Embedded alert evaluation stored on the snapshot itself.
    ///
    /// Flags a tenant when synthetic accuracy lags real accuracy by more
    /// than the configured tolerance, or when distribution drift crosses
    /// its threshold. The message enumerates every condition that fired.
    fn evaluate(
        &self,
        real_accuracy: Option<f64>,
        synthetic_accuracy: Option<f64>,
        drift: f64,
    ) -> (bool, Option<String>) {
        let mut conditions = Vec::new();

        if let (Some(real), Some(synthetic)) = (real_accuracy, synthetic_accuracy) {
            let gap = real - synthetic;
            if gap > 1.0 - self.config.accuracy_threshold {
                conditions.push(format!(
                    "synthetic accuracy {synthetic:.3} lags real accuracy {real:.3} by {gap:.3}"
                ));
            }
        }
        if drift > self.config.drift_threshold {
            conditions.push(format!(
                "distribution drift {drift:.3} exceeds threshold {:.3}",
                self.config.drift_threshold
            ));
        }

        if conditions.is_empty() {
            (false, None)
        } else {
            (true, Some(conditions.join("; ")))
        }
    }
}
