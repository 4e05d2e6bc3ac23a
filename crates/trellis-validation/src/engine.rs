//! SampleValidator: runs every check on every candidate.

use trellis_core::models::ValidationVerdict;
use trellis_core::sample::SyntheticSample;

use crate::checks;
use crate::vocab::ValidationVocabulary;

/// Three-check validator for synthetic candidates.
///
/// Checks never short-circuit: a candidate failing structurally still runs
/// the semantic and executability checks so the verdict lists everything
/// wrong with it at once.
pub struct SampleValidator {
    vocabulary: ValidationVocabulary,
}

impl SampleValidator {
    /// Validator with the built-in vocabulary.
    pub fn new() -> Self {
        Self {
            vocabulary: ValidationVocabulary::default(),
        }
    }

    /// Validator with a substitute vocabulary. Tests use small ones.
    pub fn with_vocabulary(vocabulary: ValidationVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Run all three checks and fold the outcomes into a verdict.
    pub fn validate(&self, sample: &SyntheticSample) -> ValidationVerdict {
        let outcomes = vec![
            checks::structural::check(&sample.params),
            checks::semantic::check(&sample.params, &self.vocabulary),
            checks::executability::check(sample),
        ];
        ValidationVerdict::from_outcomes(outcomes)
    }
}

impl Default for SampleValidator {
    fn default() -> Self {
        Self::new()
    }
}
