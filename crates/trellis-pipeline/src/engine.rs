//! Orchestrates the generation funnel for one tenant at a time.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{debug, error, info, warn};

use trellis_core::config::SynthesisConfig;
use trellis_core::models::{BatchGenerationReport, GenerationResult};
use trellis_core::sample::{SyntheticSample, TrainingSample};
use trellis_core::traits::{IIntentMatcher, ISampleStore, ISkeletonSource, ITenantConfigStore};
use trellis_grape::GrapeFilter;
use trellis_synthesis::SynthesisEngine;
use trellis_validation::SampleValidator;

use crate::ratio::check_ratio_limit;
use crate::throttle::StopToken;

/// Runs the full funnel per intent: admission, over-generation,
/// validation, GRAPE curation, persistence.
///
/// One pipeline serves one process; cross-tenant parallelism is the
/// caller's concern. Every run is synchronous and the per-intent entry
/// point never returns `Err`, reporting failures through
/// [`GenerationResult::error_message`] instead.
pub struct GenerationPipeline {
    /// Builds skeletons from a tenant's real query history.
    skeletons: Arc<dyn ISkeletonSource>,
    /// Destination for accepted samples and source of ratio counts.
    store: Arc<dyn ISampleStore>,
    /// Per-tenant synthesis switches and setting overrides.
    tenants: Arc<dyn ITenantConfigStore>,
    /// Candidate generator.
    synthesis: SynthesisEngine,
    /// Cheap rule checks applied before model scoring.
    validator: SampleValidator,
    /// Model-agreement filter, rebuilt per call when a tenant overrides
    /// the keep ratio.
    grape: GrapeFilter,
    /// Global configuration, used when a tenant has no override.
    config: SynthesisConfig,
    /// Cancellation flag for batch runs.
    stop: Arc<StopToken>,
}

impl GenerationPipeline {
    pub fn new(
        skeletons: Arc<dyn ISkeletonSource>,
        matcher: Arc<dyn IIntentMatcher>,
        store: Arc<dyn ISampleStore>,
        tenants: Arc<dyn ITenantConfigStore>,
        config: SynthesisConfig,
    ) -> Self {
        let synthesis = SynthesisEngine::new(&config);
        let grape = GrapeFilter::new(matcher, config.grape_keep_ratio);
        Self {
            skeletons,
            store,
            tenants,
            synthesis,
            validator: SampleValidator::new(),
            grape,
            config,
            stop: Arc::new(StopToken::new()),
        }
    }

    /// Replaces the default validator, e.g. with tenant-specific
    /// vocabulary.
    pub fn set_validator(&mut self, validator: SampleValidator) {
        self.validator = validator;
    }

    /// Handle for interrupting a running batch from another thread.
    pub fn stop_token(&self) -> Arc<StopToken> {
        self.stop.clone()
    }

    /// Generates, curates and persists up to `target_count` samples for
    /// one intent.
    ///
    /// Admission rejections (disabled tenant, ratio ceiling, missing
    /// skeleton) and store failures all come back as a result with
    /// `error_message` set and `saved = 0`; this method never panics and
    /// never returns `Err`.
    pub fn generate_for_intent(
        &self,
        intent_code: &str,
        tenant_id: &str,
        target_count: usize,
    ) -> GenerationResult {
        let started = Instant::now();
        let config = self.resolve_config(tenant_id);

        // Admission gates, cheapest first.
        match self.tenants.synthesis_state(tenant_id) {
            Ok(Some(state)) if !state.enabled => {
                return finish(
                    GenerationResult::rejected(
                        intent_code,
                        tenant_id,
                        "synthetic generation is disabled for this tenant",
                    ),
                    started,
                );
            }
            Ok(_) => {}
            Err(e) => {
                return finish(
                    GenerationResult::rejected(
                        intent_code,
                        tenant_id,
                        &format!("tenant state unavailable: {e}"),
                    ),
                    started,
                );
            }
        }
        if !config.enabled {
            return finish(
                GenerationResult::rejected(
                    intent_code,
                    tenant_id,
                    "synthesis is disabled by configuration",
                ),
                started,
            );
        }
        match check_ratio_limit(self.store.as_ref(), tenant_id, &config, Utc::now()) {
            Ok(true) => {}
            Ok(false) => {
                return finish(
                    GenerationResult::rejected(
                        intent_code,
                        tenant_id,
                        "synthetic ratio ceiling reached",
                    ),
                    started,
                );
            }
            Err(e) => {
                return finish(
                    GenerationResult::rejected(
                        intent_code,
                        tenant_id,
                        &format!("ratio check failed: {e}"),
                    ),
                    started,
                );
            }
        }

        let skeleton = match self.skeletons.build_from_history(intent_code, tenant_id) {
            Ok(Some(skeleton)) => skeleton,
            Ok(None) => {
                return finish(
                    GenerationResult::rejected(
                        intent_code,
                        tenant_id,
                        "no skeleton available for this intent",
                    ),
                    started,
                );
            }
            Err(e) => {
                return finish(
                    GenerationResult::rejected(
                        intent_code,
                        tenant_id,
                        &format!("skeleton fetch failed: {e}"),
                    ),
                    started,
                );
            }
        };

        // Over-generate so validation and GRAPE have something to discard.
        let candidate_count = target_count * config.candidate_multiplier as usize;
        let candidates =
            self.synthesis
                .generate_with(&skeleton, candidate_count, &config.randomization);
        let generated = candidates.len();

        let valid: Vec<SyntheticSample> = candidates
            .into_iter()
            .filter(|sample| self.validator.validate(sample).valid)
            .collect();
        let validated = valid.len();

        let mut kept = self
            .grape
            .with_keep_ratio(config.grape_keep_ratio)
            .filter(valid);
        let filtered = kept.len();

        // Score-descending from the filter, so the cap keeps the best.
        kept.truncate(target_count);

        let now = Utc::now();
        let rows: Vec<TrainingSample> = kept
            .into_iter()
            .map(|sample| TrainingSample::from_synthetic(sample, tenant_id, now))
            .collect();

        let (saved, error_message) = if rows.is_empty() {
            (0, None)
        } else {
            match self.store.insert_batch(&rows) {
                Ok(count) => (count, None),
                Err(e) => {
                    error!(
                        tenant_id = %tenant_id,
                        intent_code = %intent_code,
                        error = %e,
                        "batch insert failed, no samples saved"
                    );
                    (0, Some(format!("sample persistence failed: {e}")))
                }
            }
        };

        let result = GenerationResult {
            intent_code: intent_code.to_string(),
            tenant_id: tenant_id.to_string(),
            generated,
            validated,
            filtered,
            saved,
            skeleton_id: Some(skeleton.id.clone()),
            duration_ms: started.elapsed().as_millis() as u64,
            error_message,
        };
        info!(
            tenant_id = %tenant_id,
            intent_code = %intent_code,
            generated = result.generated,
            validated = result.validated,
            filtered = result.filtered,
            saved = result.saved,
            duration_ms = result.duration_ms,
            "generation run finished"
        );
        result
    }

    /// Runs [`generate_for_intent`](Self::generate_for_intent) for every
    /// intent the tenant has history for, pacing runs by
    /// `batch_interval_ms`.
    ///
    /// The ratio ceiling is re-checked before each intent since earlier
    /// batches move it; hitting the ceiling or the stop token aborts the
    /// remaining intents while keeping completed results.
    pub fn generate_for_all_intents(
        &self,
        tenant_id: &str,
        samples_per_intent: usize,
    ) -> BatchGenerationReport {
        let config = self.resolve_config(tenant_id);
        let mut report = BatchGenerationReport {
            results: Vec::new(),
            interrupted: false,
        };

        let intents = match self.skeletons.available_intent_codes(tenant_id) {
            Ok(intents) => intents,
            Err(e) => {
                error!(tenant_id = %tenant_id, error = %e, "cannot list intent codes, batch skipped");
                return report;
            }
        };
        if intents.is_empty() {
            debug!(tenant_id = %tenant_id, "no intents with history, nothing to generate");
            return report;
        }

        info!(tenant_id = %tenant_id, intents = intents.len(), "starting batch generation");
        let interval = Duration::from_millis(config.batch_interval_ms);

        for (position, intent_code) in intents.iter().enumerate() {
            if self.stop.is_interrupted() {
                report.interrupted = true;
                break;
            }
            // Earlier intents may have pushed the tenant over the ceiling.
            match check_ratio_limit(self.store.as_ref(), tenant_id, &config, Utc::now()) {
                Ok(true) => {}
                Ok(false) => {
                    info!(
                        tenant_id = %tenant_id,
                        completed = report.results.len(),
                        "ratio ceiling reached, stopping batch early"
                    );
                    report.interrupted = true;
                    break;
                }
                Err(e) => {
                    warn!(tenant_id = %tenant_id, error = %e, "ratio check failed, stopping batch");
                    report.interrupted = true;
                    break;
                }
            }

            report
                .results
                .push(self.generate_for_intent(intent_code, tenant_id, samples_per_intent));

            let is_last = position + 1 == intents.len();
            if !is_last && !self.stop.sleep(interval) {
                report.interrupted = true;
                break;
            }
        }

        info!(
            tenant_id = %tenant_id,
            intents_run = report.results.len(),
            total_saved = report.total_saved(),
            interrupted = report.interrupted,
            "batch generation finished"
        );
        report
    }

    /// Tenant settings override the global configuration when present;
    /// an unreadable settings row falls back to global with a warning.
    fn resolve_config(&self, tenant_id: &str) -> SynthesisConfig {
        match self.tenants.settings(tenant_id) {
            Ok(Some(settings)) => settings.synthesis,
            Ok(None) => self.config.clone(),
            Err(e) => {
                warn!(tenant_id = %tenant_id, error = %e, "tenant settings unavailable, using global config");
                self.config.clone()
            }
        }
    }
}

fn finish(mut result: GenerationResult, started: Instant) -> GenerationResult {
    result.duration_ms = started.elapsed().as_millis() as u64;
    if let Some(reason) = &result.error_message {
        debug!(
            tenant_id = %result.tenant_id,
            intent_code = %result.intent_code,
            reason = %reason,
            "generation run rejected"
        );
    }
    result
}
