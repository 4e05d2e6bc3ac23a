//! Sample builders.

use std::collections::HashMap;

use chrono::{Duration, Utc};

use trellis_core::sample::{
    Confidence, SampleSource, SyntheticSample, TrainingSample,
};

/// A first-order candidate with empty params and full confidence.
pub fn synthetic_sample(intent_code: &str, user_input: &str) -> SyntheticSample {
    SyntheticSample::first_order(
        user_input.to_string(),
        intent_code.to_string(),
        HashMap::new(),
        Confidence::new(1.0),
        "skel-fixture".to_string(),
    )
}

/// A persisted sample created `days_ago` days before now, with an optional
/// recorded prediction outcome.
pub fn training_sample(
    tenant_id: &str,
    source: SampleSource,
    correct: Option<bool>,
    days_ago: i64,
) -> TrainingSample {
    TrainingSample {
        id: uuid::Uuid::new_v4().to_string(),
        tenant_id: tenant_id.to_string(),
        user_input: "查销售额".to_string(),
        intent_code: "sales.query".to_string(),
        params: HashMap::new(),
        source,
        strong_signal: false,
        grape_score: None,
        prediction_correct: correct,
        created_at: Utc::now() - Duration::days(days_ago),
    }
}

/// A real sample for a specific intent with a recorded outcome, for
/// building per-intent distributions.
pub fn intent_outcome_sample(
    tenant_id: &str,
    intent_code: &str,
    correct: bool,
    days_ago: i64,
) -> TrainingSample {
    let mut sample = training_sample(tenant_id, SampleSource::Real, Some(correct), days_ago);
    sample.intent_code = intent_code.to_string();
    sample
}
