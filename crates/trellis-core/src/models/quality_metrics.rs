use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of synthetic-data health for one tenant at one point in time.
///
/// Produced by the quality monitor; consumed by the circuit breaker and by
/// operators reading the alert stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntheticDataMetrics {
    pub tenant_id: String,
    /// Start of the evaluation window.
    pub date: DateTime<Utc>,
    /// Real samples in the window.
    pub real_count: u64,
    /// Synthetic samples in the window.
    pub synthetic_count: u64,
    /// Model accuracy on real samples. `None` when no real sample in the
    /// window has a recorded prediction outcome.
    pub real_accuracy: Option<f64>,
    /// Model accuracy on synthetic samples. `None` on no data, same as above.
    pub synthetic_accuracy: Option<f64>,
    /// Count-weighted blend of the two accuracies. `None` when neither
    /// population has data.
    pub mixed_accuracy: Option<f64>,
    /// Late-window minus early-window accuracy over the last 7 days.
    /// Negative means accuracy is falling. 0.0 when either side lacks data.
    pub accuracy_trend_7d: f64,
    /// Jensen-Shannon divergence between correct and incorrect per-intent
    /// distributions, normalized to [0.0, 1.0].
    pub distribution_drift: f64,
    /// Whether these metrics cross the trip thresholds.
    pub should_trip: bool,
    /// Operator-facing description of what tripped, when something did.
    pub alert: Option<String>,
}

impl SyntheticDataMetrics {
    /// Total samples in the window.
    pub fn total_count(&self) -> u64 {
        self.real_count + self.synthetic_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_both_populations() {
        let metrics = SyntheticDataMetrics {
            tenant_id: "tenant-1".to_string(),
            date: Utc::now(),
            real_count: 70,
            synthetic_count: 30,
            real_accuracy: Some(0.9),
            synthetic_accuracy: Some(0.8),
            mixed_accuracy: Some(0.87),
            accuracy_trend_7d: -0.02,
            distribution_drift: 0.05,
            should_trip: false,
            alert: None,
        };
        assert_eq!(metrics.total_count(), 100);
    }
}
