use crate::errors::TrellisResult;
use crate::models::IntentPrediction;

/// The deployed intent-classification model, as seen by the GRAPE filter.
///
/// `Ok(None)` means the model recognized nothing in the text. `Err` means
/// the model itself failed; the filter treats both as zero-score evidence
/// rather than propagating.
pub trait IIntentMatcher: Send + Sync {
    fn recognize(&self, text: &str) -> TrellisResult<Option<IntentPrediction>>;
}
