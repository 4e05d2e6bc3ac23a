//! In-memory sample store.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use trellis_core::constants::GRAPE_SCORE_BUCKETS;
use trellis_core::errors::{StoreError, TrellisResult};
use trellis_core::models::{IntentOutcome, ScoreBucket, SourceCounts};
use trellis_core::sample::{SampleSource, TrainingSample};
use trellis_core::traits::ISampleStore;

/// `ISampleStore` backed by a `Mutex<Vec<_>>`, with every aggregate
/// computed in plain iterator code.
#[derive(Default)]
pub struct MemorySampleStore {
    samples: Mutex<Vec<TrainingSample>>,
    fail_next: AtomicBool,
}

impl MemorySampleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_samples(samples: Vec<TrainingSample>) -> Self {
        Self {
            samples: Mutex::new(samples),
            fail_next: AtomicBool::new(false),
        }
    }

    /// Make the next `insert_batch` fail atomically (nothing persisted).
    pub fn fail_next_insert(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Seed one sample directly, bypassing the batch path.
    pub fn push(&self, sample: TrainingSample) {
        self.samples.lock().unwrap().push(sample);
    }

    /// Snapshot of everything persisted so far.
    pub fn samples(&self) -> Vec<TrainingSample> {
        self.samples.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.samples.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn accuracy(
        &self,
        tenant_id: &str,
        since: DateTime<Utc>,
        source: SampleSource,
    ) -> Option<f64> {
        let guard = self.samples.lock().unwrap();
        let outcomes: Vec<bool> = guard
            .iter()
            .filter(|s| s.tenant_id == tenant_id && s.source == source && s.created_at >= since)
            .filter_map(|s| s.prediction_correct)
            .collect();
        if outcomes.is_empty() {
            return None;
        }
        let correct = outcomes.iter().filter(|c| **c).count();
        Some(correct as f64 / outcomes.len() as f64)
    }
}

impl ISampleStore for MemorySampleStore {
    fn insert_batch(&self, samples: &[TrainingSample]) -> TrellisResult<usize> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(StoreError::BatchInsertFailed {
                count: samples.len(),
                reason: "simulated store outage".to_string(),
            }
            .into());
        }
        self.samples.lock().unwrap().extend_from_slice(samples);
        Ok(samples.len())
    }

    fn count_by_source_since(
        &self,
        tenant_id: &str,
        since: DateTime<Utc>,
    ) -> TrellisResult<SourceCounts> {
        let guard = self.samples.lock().unwrap();
        let mut counts = SourceCounts::default();
        for sample in guard
            .iter()
            .filter(|s| s.tenant_id == tenant_id && s.created_at >= since)
        {
            match sample.source {
                SampleSource::Real => counts.real += 1,
                SampleSource::Synthetic => counts.synthetic += 1,
            }
        }
        Ok(counts)
    }

    fn real_accuracy_since(
        &self,
        tenant_id: &str,
        since: DateTime<Utc>,
    ) -> TrellisResult<Option<f64>> {
        Ok(self.accuracy(tenant_id, since, SampleSource::Real))
    }

    fn synthetic_accuracy_since(
        &self,
        tenant_id: &str,
        since: DateTime<Utc>,
    ) -> TrellisResult<Option<f64>> {
        Ok(self.accuracy(tenant_id, since, SampleSource::Synthetic))
    }

    fn intent_outcomes_since(
        &self,
        tenant_id: &str,
        since: DateTime<Utc>,
    ) -> TrellisResult<Vec<IntentOutcome>> {
        let guard = self.samples.lock().unwrap();
        let mut by_intent: BTreeMap<String, (u64, u64)> = BTreeMap::new();
        for sample in guard
            .iter()
            .filter(|s| s.tenant_id == tenant_id && s.created_at >= since)
        {
            if let Some(correct) = sample.prediction_correct {
                let entry = by_intent.entry(sample.intent_code.clone()).or_default();
                if correct {
                    entry.0 += 1;
                } else {
                    entry.1 += 1;
                }
            }
        }
        Ok(by_intent
            .into_iter()
            .map(|(intent_code, (correct, incorrect))| IntentOutcome {
                intent_code,
                correct,
                incorrect,
            })
            .collect())
    }

    fn grape_score_distribution(&self, tenant_id: &str) -> TrellisResult<Vec<ScoreBucket>> {
        let guard = self.samples.lock().unwrap();
        let scores: Vec<f64> = guard
            .iter()
            .filter(|s| s.tenant_id == tenant_id && s.source == SampleSource::Synthetic)
            .filter_map(|s| s.grape_score.map(f64::from))
            .collect();
        let mut buckets = Vec::with_capacity(GRAPE_SCORE_BUCKETS.len() - 1);
        for window in GRAPE_SCORE_BUCKETS.windows(2) {
            let (lower, upper) = (window[0], window[1]);
            let last = upper >= 1.0;
            let count = scores
                .iter()
                .filter(|s| **s >= lower && (**s < upper || (last && **s <= upper)))
                .count() as u64;
            buckets.push(ScoreBucket {
                label: format!("{lower:.1}-{upper:.1}"),
                lower,
                upper,
                count,
            });
        }
        Ok(buckets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::training_sample;

    #[test]
    fn failed_insert_persists_nothing_and_resets() {
        let store = MemorySampleStore::new();
        store.fail_next_insert();
        let batch = vec![training_sample("t1", SampleSource::Synthetic, None, 0)];
        assert!(store.insert_batch(&batch).is_err());
        assert!(store.is_empty());
        // The toggle is one-shot.
        assert_eq!(store.insert_batch(&batch).unwrap(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn counts_respect_tenant_and_window() {
        let store = MemorySampleStore::new();
        store.push(training_sample("t1", SampleSource::Real, None, 0));
        store.push(training_sample("t1", SampleSource::Synthetic, None, 0));
        store.push(training_sample("t1", SampleSource::Real, None, 90));
        store.push(training_sample("t2", SampleSource::Real, None, 0));

        let since = Utc::now() - chrono::Duration::days(30);
        let counts = store.count_by_source_since("t1", since).unwrap();
        assert_eq!(counts.real, 1);
        assert_eq!(counts.synthetic, 1);
    }

    #[test]
    fn accuracy_ignores_samples_without_outcomes() {
        let store = MemorySampleStore::new();
        store.push(training_sample("t1", SampleSource::Real, Some(true), 0));
        store.push(training_sample("t1", SampleSource::Real, Some(false), 0));
        store.push(training_sample("t1", SampleSource::Real, None, 0));

        let since = Utc::now() - chrono::Duration::days(7);
        let accuracy = store.real_accuracy_since("t1", since).unwrap();
        assert_eq!(accuracy, Some(0.5));
        assert_eq!(store.synthetic_accuracy_since("t1", since).unwrap(), None);
    }

    #[test]
    fn score_histogram_buckets_cover_the_range() {
        let store = MemorySampleStore::new();
        let mut sample = training_sample("t1", SampleSource::Synthetic, None, 0);
        sample.grape_score = Some(trellis_core::sample::Confidence::new(1.0));
        store.push(sample);
        let mut sample = training_sample("t1", SampleSource::Synthetic, None, 0);
        sample.grape_score = Some(trellis_core::sample::Confidence::new(0.25));
        store.push(sample);

        let buckets = store.grape_score_distribution("t1").unwrap();
        assert_eq!(buckets.len(), 5);
        assert_eq!(buckets[1].count, 1, "0.25 lands in 0.2-0.4");
        assert_eq!(buckets[4].count, 1, "1.0 lands in the closed top bucket");
    }
}
