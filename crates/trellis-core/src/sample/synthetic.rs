use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::confidence::Confidence;
use crate::constants::FIRST_ORDER_GENERATION;

/// A candidate training utterance produced by the synthesis engine.
///
/// Candidates are not persisted directly: they flow through validation and
/// GRAPE filtering first, and only survivors are converted into
/// [`TrainingSample`](super::TrainingSample)s.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SyntheticSample {
    /// The generated natural-language utterance.
    pub user_input: String,
    /// Intent this utterance is supposed to express.
    pub intent_code: String,
    /// Slot values substituted into the pattern, keyed by slot name.
    pub params: HashMap<String, String>,
    /// Generator's own confidence: the fraction of required slots actually
    /// filled. 1.0 when the skeleton has no required slots.
    pub generator_confidence: Confidence,
    /// Synthesis generation. Always [`FIRST_ORDER_GENERATION`] in this
    /// pipeline; the field exists so stored data stays honest if
    /// synthetic-from-synthetic ever appears upstream.
    pub generation: u32,
    /// Skeleton the candidate was rendered from.
    pub skeleton_id: String,
    /// GRAPE score, filled in by the filter stage. `None` until scored.
    pub grape_score: Option<Confidence>,
}

impl SyntheticSample {
    /// Create a first-order candidate with no GRAPE score yet.
    pub fn first_order(
        user_input: String,
        intent_code: String,
        params: HashMap<String, String>,
        generator_confidence: Confidence,
        skeleton_id: String,
    ) -> Self {
        Self {
            user_input,
            intent_code,
            params,
            generator_confidence,
            generation: FIRST_ORDER_GENERATION,
            skeleton_id,
            grape_score: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_order_candidates_start_unscored() {
        let sample = SyntheticSample::first_order(
            "查询今天的销售额".to_string(),
            "sales.query".to_string(),
            HashMap::from([("time".to_string(), "今天".to_string())]),
            Confidence::new(1.0),
            "skel-1".to_string(),
        );
        assert_eq!(sample.generation, FIRST_ORDER_GENERATION);
        assert!(sample.grape_score.is_none());
    }
}
