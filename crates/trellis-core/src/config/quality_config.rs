use serde::{Deserialize, Serialize};

use super::defaults;

/// Quality-monitor and circuit-breaker configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QualityConfig {
    /// Mixed accuracy below this trips the breaker.
    pub accuracy_threshold: f64,
    /// Distribution drift above this trips the breaker.
    pub drift_threshold: f64,
    /// Tenants with fewer samples than this in the window are not judged
    /// during the scheduled sweep.
    pub min_sample_count: u64,
    /// Advisory hold-off before a tripped tenant should be reset.
    pub cooldown_hours: i64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            accuracy_threshold: defaults::DEFAULT_ACCURACY_THRESHOLD,
            drift_threshold: defaults::DEFAULT_DRIFT_THRESHOLD,
            min_sample_count: defaults::DEFAULT_MIN_SAMPLE_COUNT,
            cooldown_hours: defaults::DEFAULT_COOLDOWN_HOURS,
        }
    }
}
