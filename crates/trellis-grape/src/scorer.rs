//! Model-agreement scoring for one candidate.

use tracing::warn;

use trellis_core::sample::{Confidence, SyntheticSample};
use trellis_core::traits::IIntentMatcher;

/// Ask the deployed model what it sees in the candidate's text.
///
/// The score is the model's confidence when it recognizes the claimed
/// intent. No recognition, a different intent, and a missing confidence
/// all score 0.0. A matcher error also scores 0.0, with a warning; scoring
/// never propagates failures.
pub fn score_sample(matcher: &dyn IIntentMatcher, sample: &SyntheticSample) -> Confidence {
    match matcher.recognize(&sample.user_input) {
        Ok(Some(prediction)) if prediction.intent_code == sample.intent_code => {
            Confidence::new(prediction.confidence.unwrap_or(0.0))
        }
        Ok(_) => Confidence::new(0.0),
        Err(e) => {
            warn!(
                intent_code = %sample.intent_code,
                error = %e,
                "intent matcher failed during scoring, scoring 0"
            );
            Confidence::new(0.0)
        }
    }
}
