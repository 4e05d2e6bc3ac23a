//! Synthetic-to-total ratio admission check.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use trellis_core::config::SynthesisConfig;
use trellis_core::errors::TrellisResult;
use trellis_core::traits::ISampleStore;

/// Whether the tenant may receive more synthetic samples.
///
/// Counts both sources over the trailing `ratio_window_days` window and
/// admits while `synthetic / total` stays strictly below
/// `max_synthetic_ratio`. A ratio of 1.0 or more disables the ceiling
/// entirely, and an empty window always admits so new tenants can
/// bootstrap from zero.
///
/// This is a check-then-act gate: concurrent generators can each pass
/// the check and overshoot the ceiling by one batch, which the next
/// check absorbs.
pub fn check_ratio_limit(
    store: &dyn ISampleStore,
    tenant_id: &str,
    config: &SynthesisConfig,
    now: DateTime<Utc>,
) -> TrellisResult<bool> {
    if config.max_synthetic_ratio >= 1.0 {
        return Ok(true);
    }

    let window_start = now - Duration::days(config.ratio_window_days);
    let counts = store.count_by_source_since(tenant_id, window_start)?;
    if counts.total() == 0 {
        return Ok(true);
    }

    let ratio = counts.synthetic as f64 / counts.total() as f64;
    let admitted = ratio < config.max_synthetic_ratio;
    debug!(
        tenant_id = %tenant_id,
        real = counts.real,
        synthetic = counts.synthetic,
        ratio = ratio,
        ceiling = config.max_synthetic_ratio,
        admitted = admitted,
        "ratio admission check"
    );
    Ok(admitted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::{training_sample, MemorySampleStore};
    use trellis_core::sample::SampleSource;

    fn config_with_ratio(max_synthetic_ratio: f64) -> SynthesisConfig {
        SynthesisConfig {
            max_synthetic_ratio,
            ..SynthesisConfig::default()
        }
    }

    #[test]
    fn empty_store_admits() {
        let store = MemorySampleStore::new();
        let admitted =
            check_ratio_limit(&store, "acme", &config_with_ratio(0.5), Utc::now()).unwrap();
        assert!(admitted);
    }

    #[test]
    fn admits_below_ceiling_and_blocks_at_it() {
        let store = MemorySampleStore::new();
        for _ in 0..6 {
            store.push(training_sample("acme", SampleSource::Real, None, 1));
        }
        for _ in 0..3 {
            store.push(training_sample("acme", SampleSource::Synthetic, None, 1));
        }
        // 3 of 9 synthetic, under the 0.5 ceiling.
        let config = config_with_ratio(0.5);
        assert!(check_ratio_limit(&store, "acme", &config, Utc::now()).unwrap());

        for _ in 0..3 {
            store.push(training_sample("acme", SampleSource::Synthetic, None, 1));
        }
        // Exactly at the ceiling now; the comparison is strict.
        assert!(!check_ratio_limit(&store, "acme", &config, Utc::now()).unwrap());
    }

    #[test]
    fn ratio_of_one_disables_the_ceiling() {
        let store = MemorySampleStore::new();
        for _ in 0..10 {
            store.push(training_sample("acme", SampleSource::Synthetic, None, 1));
        }
        assert!(check_ratio_limit(&store, "acme", &config_with_ratio(1.0), Utc::now()).unwrap());
    }

    #[test]
    fn window_excludes_old_samples() {
        let store = MemorySampleStore::new();
        // All synthetic, but outside the 30-day default window.
        for _ in 0..10 {
            store.push(training_sample("acme", SampleSource::Synthetic, None, 45));
        }
        assert!(check_ratio_limit(&store, "acme", &config_with_ratio(0.5), Utc::now()).unwrap());
    }
}
