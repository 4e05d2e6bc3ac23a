//! SynthesisEngine: renders candidate utterances from mined skeletons.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use trellis_core::config::{RandomizationConfig, SynthesisConfig};
use trellis_core::sample::SyntheticSample;
use trellis_core::skeleton::Skeleton;

use crate::randomization::{self, RandomizationTables};
use crate::slots;

/// The scenario generator.
///
/// Crosses skeleton patterns with slot values, then perturbs the rendered
/// text. Non-deterministic by design; tests pin the seed.
pub struct SynthesisEngine {
    /// Perturbation gate probabilities.
    config: RandomizationConfig,
    /// Global synthesis switch. Per-tenant switches live in the tenant
    /// config store and are checked upstream by the pipeline.
    enabled: bool,
    /// Immutable lookup tables for the perturbation passes.
    tables: RandomizationTables,
    /// Injectable random source; behind a Mutex because `generate` takes
    /// `&self` and the engine is shared across the pipeline.
    rng: Mutex<StdRng>,
}

impl SynthesisEngine {
    /// Create an engine seeded from OS entropy.
    pub fn new(config: &SynthesisConfig) -> Self {
        Self::build(config, StdRng::from_entropy())
    }

    /// Create an engine with a fixed seed, for deterministic tests.
    pub fn with_seed(config: &SynthesisConfig, seed: u64) -> Self {
        Self::build(config, StdRng::seed_from_u64(seed))
    }

    fn build(config: &SynthesisConfig, rng: StdRng) -> Self {
        Self {
            config: config.randomization.clone(),
            enabled: config.enabled,
            tables: RandomizationTables::default(),
            rng: Mutex::new(rng),
        }
    }

    /// Substitute the lookup tables. Tests inject small ones.
    pub fn set_tables(&mut self, tables: RandomizationTables) {
        self.tables = tables;
    }

    /// Produce up to `count` candidates from one skeleton.
    ///
    /// Never errors: a disabled engine or a skeleton without patterns
    /// yields an empty batch, and a candidate that renders blank is
    /// dropped rather than failing the batch. No ordering guarantee.
    pub fn generate(&self, skeleton: &Skeleton, count: usize) -> Vec<SyntheticSample> {
        self.generate_with(skeleton, count, &self.config)
    }

    /// [`generate`](Self::generate) with caller-resolved randomization,
    /// used when a tenant overrides the global probabilities.
    pub fn generate_with(
        &self,
        skeleton: &Skeleton,
        count: usize,
        config: &RandomizationConfig,
    ) -> Vec<SyntheticSample> {
        if !self.enabled {
            debug!(
                intent_code = %skeleton.intent_code,
                "synthesis disabled, skipping generation"
            );
            return Vec::new();
        }
        if !skeleton.has_patterns() {
            debug!(skeleton_id = %skeleton.id, "skeleton has no patterns");
            return Vec::new();
        }
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            // The RNG state stays valid after a panic elsewhere.
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut samples = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(sample) = self.synthesize_one(skeleton, config, &mut *rng) {
                samples.push(sample);
            }
        }
        info!(
            intent_code = %skeleton.intent_code,
            skeleton_id = %skeleton.id,
            requested = count,
            produced = samples.len(),
            "generated candidate batch"
        );
        samples
    }

    /// One candidate: pattern pick, slot fill, render, perturb.
    fn synthesize_one<R: Rng>(
        &self,
        skeleton: &Skeleton,
        config: &RandomizationConfig,
        rng: &mut R,
    ) -> Option<SyntheticSample> {
        let pattern = skeleton.patterns.choose(rng)?;
        let params = slots::fill_slots(skeleton, config.omit_optional_prob, rng);
        let rendered = slots::render(pattern, &params);
        if rendered.is_empty() {
            debug!(
                skeleton_id = %skeleton.id,
                pattern = %pattern,
                "candidate rendered blank, dropped"
            );
            return None;
        }
        let text = randomization::apply(rendered, config, &self.tables, rng);
        if text.trim().is_empty() {
            debug!(skeleton_id = %skeleton.id, "candidate blank after randomization, dropped");
            return None;
        }
        let confidence = slots::required_fill_ratio(skeleton, &params);
        Some(SyntheticSample::first_order(
            text,
            skeleton.intent_code.clone(),
            params,
            confidence,
            skeleton.id.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::skeleton::SlotSpec;

    fn quiet_config() -> SynthesisConfig {
        SynthesisConfig {
            randomization: RandomizationConfig {
                omit_optional_prob: 0.0,
                synonym_prob: 0.0,
                typo_prob: 0.0,
                reorder_prob: 0.0,
            },
            ..SynthesisConfig::default()
        }
    }

    fn metric_skeleton() -> Skeleton {
        Skeleton {
            id: "skel-metric".to_string(),
            intent_code: "report.metric".to_string(),
            patterns: vec!["{METRIC}是多少".to_string()],
            slots: vec![SlotSpec::required("METRIC", &["销售额"])],
        }
    }

    #[test]
    fn renders_every_requested_candidate() {
        let engine = SynthesisEngine::with_seed(&quiet_config(), 42);
        let samples = engine.generate(&metric_skeleton(), 15);
        assert_eq!(samples.len(), 15);
        for sample in &samples {
            assert_eq!(sample.user_input, "销售额是多少");
            assert_eq!(sample.intent_code, "report.metric");
            assert_eq!(sample.generator_confidence.value(), 1.0);
            assert_eq!(sample.skeleton_id, "skel-metric");
            assert!(sample.grape_score.is_none());
        }
    }

    #[test]
    fn disabled_engine_generates_nothing() {
        let mut config = quiet_config();
        config.enabled = false;
        let engine = SynthesisEngine::with_seed(&config, 42);
        assert!(engine.generate(&metric_skeleton(), 10).is_empty());
    }

    #[test]
    fn skeleton_without_patterns_generates_nothing() {
        let engine = SynthesisEngine::with_seed(&quiet_config(), 42);
        let empty = Skeleton {
            id: "skel-empty".to_string(),
            intent_code: "report.metric".to_string(),
            patterns: vec![],
            slots: vec![],
        };
        assert!(engine.generate(&empty, 10).is_empty());
    }

    #[test]
    fn same_seed_reproduces_the_batch() {
        let mut config = quiet_config();
        config.randomization.typo_prob = 0.5;
        config.randomization.reorder_prob = 0.5;
        let a = SynthesisEngine::with_seed(&config, 7).generate(&metric_skeleton(), 20);
        let b = SynthesisEngine::with_seed(&config, 7).generate(&metric_skeleton(), 20);
        assert_eq!(a, b);
    }

    #[test]
    fn unfilled_required_slot_lowers_confidence() {
        let engine = SynthesisEngine::with_seed(&quiet_config(), 42);
        let skeleton = Skeleton {
            id: "skel-2".to_string(),
            intent_code: "report.metric".to_string(),
            patterns: vec!["查{TIME}的{METRIC}".to_string()],
            slots: vec![
                SlotSpec::required("TIME", &["今天"]),
                // Required slot with no observed values cannot be filled.
                SlotSpec::required("METRIC", &[]),
            ],
        };
        let samples = engine.generate(&skeleton, 5);
        assert_eq!(samples.len(), 5);
        for sample in &samples {
            assert_eq!(sample.user_input, "查今天的");
            assert_eq!(sample.generator_confidence.value(), 0.5);
        }
    }

    #[test]
    fn pattern_choice_spreads_across_the_list() {
        let engine = SynthesisEngine::with_seed(&quiet_config(), 42);
        let skeleton = Skeleton {
            id: "skel-3".to_string(),
            intent_code: "report.metric".to_string(),
            patterns: vec!["查销售额".to_string(), "看订单".to_string()],
            slots: vec![],
        };
        let samples = engine.generate(&skeleton, 60);
        let first = samples
            .iter()
            .filter(|s| s.user_input == "查销售额")
            .count();
        assert!(first > 10 && first < 50, "uniform pick looks skewed: {first}/60");
    }
}
