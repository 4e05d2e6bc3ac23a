//! Intent matcher fakes.

use std::collections::HashMap;

use trellis_core::errors::{TrellisError, TrellisResult};
use trellis_core::models::IntentPrediction;
use trellis_core::traits::IIntentMatcher;

/// Scripted matcher: exact-text responses plus an optional fallback
/// prediction echoed for any other text. With neither, it recognizes
/// nothing.
#[derive(Default)]
pub struct EchoIntentMatcher {
    responses: HashMap<String, IntentPrediction>,
    fallback: Option<IntentPrediction>,
}

impl EchoIntentMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Echo this prediction for any text without a scripted response.
    pub fn with_fallback(mut self, prediction: IntentPrediction) -> Self {
        self.fallback = Some(prediction);
        self
    }

    /// Script a response for one exact input text.
    pub fn respond(mut self, text: &str, prediction: IntentPrediction) -> Self {
        self.responses.insert(text.to_string(), prediction);
        self
    }
}

impl IIntentMatcher for EchoIntentMatcher {
    fn recognize(&self, text: &str) -> TrellisResult<Option<IntentPrediction>> {
        Ok(self
            .responses
            .get(text)
            .cloned()
            .or_else(|| self.fallback.clone()))
    }
}

/// Matcher standing in for a degraded model: every call errors.
pub struct FailingIntentMatcher;

impl IIntentMatcher for FailingIntentMatcher {
    fn recognize(&self, _text: &str) -> TrellisResult<Option<IntentPrediction>> {
        Err(TrellisError::Matcher {
            message: "simulated matcher outage".to_string(),
        })
    }
}
