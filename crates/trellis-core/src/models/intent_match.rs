use serde::{Deserialize, Serialize};

/// What the intent matcher recognized in an utterance.
///
/// "Nothing recognized" is expressed as `Ok(None)` from the matcher, not
/// as a prediction with an empty code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntentPrediction {
    /// Recognized intent.
    pub intent_code: String,
    /// Matcher confidence in [0.0, 1.0], when the matcher reports one.
    pub confidence: Option<f64>,
}

impl IntentPrediction {
    pub fn new(intent_code: &str, confidence: f64) -> Self {
        Self {
            intent_code: intent_code.to_string(),
            confidence: Some(confidence),
        }
    }

    /// A recognition whose matcher produced no usable confidence.
    pub fn without_confidence(intent_code: &str) -> Self {
        Self {
            intent_code: intent_code.to_string(),
            confidence: None,
        }
    }
}
