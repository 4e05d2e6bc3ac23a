use serde::{Deserialize, Serialize};

use super::defaults;

/// Synthesis subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Global synthesis switch. When false the generator short-circuits to
    /// an empty batch regardless of per-tenant state.
    pub enabled: bool,
    /// Candidates requested per target sample. Over-generation compensates
    /// for attrition in validation and GRAPE filtering.
    pub candidate_multiplier: u32,
    /// Sleep between per-intent batches, to bound load on the shared
    /// intent-matching model.
    pub batch_interval_ms: u64,
    /// Ceiling on synthetic/(real+synthetic) within the ratio window.
    /// Values >= 1.0 mean unlimited.
    pub max_synthetic_ratio: f64,
    /// Trailing window for the ratio computation.
    pub ratio_window_days: i64,
    /// Fraction of validated candidates the GRAPE filter keeps.
    pub grape_keep_ratio: f64,
    /// Text-perturbation probabilities.
    pub randomization: RandomizationConfig,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_SYNTHESIS_ENABLED,
            candidate_multiplier: defaults::DEFAULT_CANDIDATE_MULTIPLIER,
            batch_interval_ms: defaults::DEFAULT_BATCH_INTERVAL_MS,
            max_synthetic_ratio: defaults::DEFAULT_MAX_SYNTHETIC_RATIO,
            ratio_window_days: defaults::DEFAULT_RATIO_WINDOW_DAYS,
            grape_keep_ratio: defaults::DEFAULT_GRAPE_KEEP_RATIO,
            randomization: RandomizationConfig::default(),
        }
    }
}

/// Per-strategy gate probabilities for domain randomization.
///
/// Each strategy rolls its own gate independently per candidate; the
/// strategies compose when several gates succeed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RandomizationConfig {
    /// Chance an optional slot is left unfilled.
    pub omit_optional_prob: f64,
    /// Chance the synonym-replacement pass runs on a candidate.
    pub synonym_prob: f64,
    /// Chance the typo-injection pass runs on a candidate.
    pub typo_prob: f64,
    /// Chance the clause-reordering pass runs on a candidate.
    pub reorder_prob: f64,
}

impl Default for RandomizationConfig {
    fn default() -> Self {
        Self {
            omit_optional_prob: defaults::DEFAULT_OMIT_OPTIONAL_PROB,
            synonym_prob: defaults::DEFAULT_SYNONYM_PROB,
            typo_prob: defaults::DEFAULT_TYPO_PROB,
            reorder_prob: defaults::DEFAULT_REORDER_PROB,
        }
    }
}
