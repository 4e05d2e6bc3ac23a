use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::confidence::Confidence;
use super::synthetic::SyntheticSample;

/// Provenance of a training sample.
///
/// Serialized in UPPERCASE so stored rows read `REAL` / `SYNTHETIC`,
/// matching the labels the ratio and accuracy queries group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SampleSource {
    /// Captured from an actual user interaction.
    Real,
    /// Produced by the synthesis pipeline.
    Synthetic,
}

/// A persisted training sample, real or synthetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSample {
    /// UUID v4 identifier.
    pub id: String,
    /// Tenant that owns this sample.
    pub tenant_id: String,
    /// The utterance text.
    pub user_input: String,
    /// Intent label.
    pub intent_code: String,
    /// Slot values, keyed by slot name.
    pub params: HashMap<String, String>,
    /// Whether this row came from a real interaction or the synthesizer.
    pub source: SampleSource,
    /// Strong-signal samples (explicit user confirmation) outrank weak ones
    /// during training. Synthetic samples are never strong.
    pub strong_signal: bool,
    /// GRAPE score carried over from the synthetic candidate. `None` for
    /// real samples.
    pub grape_score: Option<Confidence>,
    /// Outcome of the deployed model's prediction on this input, once known.
    /// `None` until the feedback loop reports back.
    pub prediction_correct: Option<bool>,
    /// When the sample was persisted.
    pub created_at: DateTime<Utc>,
}

impl TrainingSample {
    /// Convert a filtered synthetic candidate into a persistable sample.
    /// The GRAPE score carries over; skeleton lineage stays behind.
    pub fn from_synthetic(sample: SyntheticSample, tenant_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            tenant_id: tenant_id.to_string(),
            user_input: sample.user_input,
            intent_code: sample.intent_code,
            params: sample.params,
            source: SampleSource::Synthetic,
            strong_signal: false,
            grape_score: sample.grape_score,
            prediction_correct: None,
            created_at: now,
        }
    }
}

/// Identity equality: two samples are equal if they have the same ID.
impl PartialEq for TrainingSample {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Confidence;

    fn candidate() -> SyntheticSample {
        SyntheticSample::first_order(
            "show sales for last 7 days".to_string(),
            "sales.query".to_string(),
            HashMap::from([("range".to_string(), "last 7 days".to_string())]),
            Confidence::new(0.85),
            "skel-9".to_string(),
        )
    }

    #[test]
    fn from_synthetic_marks_provenance() {
        let now = Utc::now();
        let mut scored = candidate();
        scored.grape_score = Some(Confidence::new(0.72));
        let sample = TrainingSample::from_synthetic(scored, "tenant-1", now);
        assert_eq!(sample.source, SampleSource::Synthetic);
        assert!(!sample.strong_signal);
        assert_eq!(sample.grape_score.map(Confidence::value), Some(0.72));
        assert!(sample.prediction_correct.is_none());
        assert_eq!(sample.tenant_id, "tenant-1");
        assert_eq!(sample.created_at, now);
    }

    #[test]
    fn from_synthetic_assigns_fresh_ids() {
        let now = Utc::now();
        let a = TrainingSample::from_synthetic(candidate(), "tenant-1", now);
        let b = TrainingSample::from_synthetic(candidate(), "tenant-1", now);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn source_serializes_uppercase() {
        let json = serde_json::to_string(&SampleSource::Synthetic).unwrap();
        assert_eq!(json, "\"SYNTHETIC\"");
        let json = serde_json::to_string(&SampleSource::Real).unwrap();
        assert_eq!(json, "\"REAL\"");
    }
}
