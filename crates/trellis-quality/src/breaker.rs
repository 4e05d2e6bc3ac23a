//! Circuit breaker that shuts off degrading synthetic generation.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, error, info, warn};

use trellis_core::config::QualityConfig;
use trellis_core::errors::TrellisResult;
use trellis_core::models::{SweepReport, SynthesisState, SyntheticDataMetrics};
use trellis_core::traits::ITenantConfigStore;

use crate::alerts::{AlertSink, LogAlertSink};
use crate::monitor::QualityMonitor;

enum TenantEvaluation {
    Skipped,
    Healthy,
    Tripped,
}

/// Disables synthetic generation for tenants whose quality metrics fall
/// below the configured floor.
///
/// Tripping is one-way: the breaker never re-enables a tenant on its
/// own. Recovery goes through [`CircuitBreaker::reset`], typically after
/// an operator has looked at the alert.
pub struct CircuitBreaker {
    /// Per-tenant synthesis switches.
    tenants: Arc<dyn ITenantConfigStore>,
    /// Supplies the daily metrics the trip decision is based on.
    monitor: QualityMonitor,
    /// Thresholds and sweep gating.
    config: QualityConfig,
    /// Receives one notification per trip.
    alerts: Box<dyn AlertSink>,
}

impl CircuitBreaker {
    pub fn new(
        tenants: Arc<dyn ITenantConfigStore>,
        monitor: QualityMonitor,
        config: QualityConfig,
    ) -> Self {
        Self::with_alert_sink(tenants, monitor, config, Box::new(LogAlertSink))
    }

    pub fn with_alert_sink(
        tenants: Arc<dyn ITenantConfigStore>,
        monitor: QualityMonitor,
        config: QualityConfig,
        alerts: Box<dyn AlertSink>,
    ) -> Self {
        Self {
            tenants,
            monitor,
            config,
            alerts,
        }
    }

    /// Pure trip predicate over an already-computed snapshot.
    ///
    /// Absent metrics never trip; a tenant we know nothing about is left
    /// alone. Otherwise the breaker trips when mixed accuracy is present
    /// and below the accuracy threshold, or distribution drift exceeds
    /// the drift threshold.
    pub fn should_trip(&self, metrics: Option<&SyntheticDataMetrics>) -> bool {
        self.trip_reason(metrics).is_some()
    }

    fn trip_reason(&self, metrics: Option<&SyntheticDataMetrics>) -> Option<String> {
        let metrics = metrics?;
        let mut reasons = Vec::new();

        if let Some(mixed) = metrics.mixed_accuracy {
            if mixed < self.config.accuracy_threshold {
                reasons.push(format!(
                    "mixed accuracy {mixed:.3} below threshold {:.3}",
                    self.config.accuracy_threshold
                ));
            }
        }
        if metrics.distribution_drift > self.config.drift_threshold {
            reasons.push(format!(
                "distribution drift {:.3} exceeds threshold {:.3}",
                metrics.distribution_drift, self.config.drift_threshold
            ));
        }

        if reasons.is_empty() {
            None
        } else {
            Some(reasons.join("; "))
        }
    }

    /// Evaluates yesterday's metrics for every enabled tenant and trips
    /// the ones that fail.
    ///
    /// Meant to run once per day. Tenants below `min_sample_count` are
    /// skipped rather than judged on noise; a failure for one tenant is
    /// recorded and the sweep moves on to the next.
    pub fn sweep(&self, today: DateTime<Utc>) -> SweepReport {
        let mut report = SweepReport::default();

        let tenant_ids = match self.tenants.enabled_tenants() {
            Ok(ids) => ids,
            Err(e) => {
                error!(error = %e, "cannot list enabled tenants, sweep aborted");
                report.failures.push(("*".to_string(), e.to_string()));
                return report;
            }
        };

        let yesterday = today - Duration::days(1);
        for tenant_id in tenant_ids {
            match self.evaluate_tenant(&tenant_id, yesterday) {
                Ok(TenantEvaluation::Skipped) => report.skipped_insufficient += 1,
                Ok(TenantEvaluation::Healthy) => report.evaluated += 1,
                Ok(TenantEvaluation::Tripped) => {
                    report.evaluated += 1;
                    report.tripped += 1;
                }
                Err(e) => {
                    error!(tenant_id = %tenant_id, error = %e, "sweep evaluation failed, continuing");
                    report.failures.push((tenant_id.clone(), e.to_string()));
                }
            }
        }

        info!(
            evaluated = report.evaluated,
            tripped = report.tripped,
            skipped = report.skipped_insufficient,
            failures = report.failures.len(),
            "circuit breaker sweep finished"
        );
        report
    }

    fn evaluate_tenant(
        &self,
        tenant_id: &str,
        date: DateTime<Utc>,
    ) -> TrellisResult<TenantEvaluation> {
        let metrics = self.monitor.daily_metrics(tenant_id, date)?;

        if metrics.total_count() < self.config.min_sample_count {
            debug!(
                tenant_id = %tenant_id,
                total = metrics.total_count(),
                minimum = self.config.min_sample_count,
                "sample count below sweep minimum, skipping"
            );
            return Ok(TenantEvaluation::Skipped);
        }

        match self.trip_reason(Some(&metrics)) {
            Some(reason) => {
                self.disable_synthetic(tenant_id, &reason)?;
                Ok(TenantEvaluation::Tripped)
            }
            None => Ok(TenantEvaluation::Healthy),
        }
    }

    /// Turns the tenant's synthesis switch off and records why.
    ///
    /// Idempotent: an already-disabled tenant keeps its original reason
    /// and timestamp. A tenant with no configuration row at all is a
    /// warn-level no-op.
    pub fn disable_synthetic(&self, tenant_id: &str, reason: &str) -> TrellisResult<()> {
        match self.tenants.synthesis_state(tenant_id)? {
            None => {
                warn!(tenant_id = %tenant_id, "no tenant configuration, disable request ignored");
                Ok(())
            }
            Some(state) if !state.enabled => {
                debug!(tenant_id = %tenant_id, "synthesis already disabled");
                Ok(())
            }
            Some(_) => {
                let state = SynthesisState::disabled(reason, Utc::now());
                self.tenants.set_synthesis_state(tenant_id, state)?;
                warn!(tenant_id = %tenant_id, reason = %reason, "synthetic generation disabled");
                self.alerts.emit(tenant_id, reason);
                Ok(())
            }
        }
    }

    /// Manually re-enables synthesis for a tripped tenant, clearing the
    /// stored reason and timestamp.
    pub fn reset(&self, tenant_id: &str) -> TrellisResult<()> {
        self.tenants
            .set_synthesis_state(tenant_id, SynthesisState::enabled())?;
        info!(tenant_id = %tenant_id, "circuit breaker reset, synthesis re-enabled");
        Ok(())
    }

    /// Whether the advisory cooldown has passed since the trip.
    ///
    /// Purely informational for operators; [`CircuitBreaker::reset`]
    /// never refuses. A state without a trip timestamp counts as
    /// elapsed.
    pub fn cooldown_elapsed(&self, state: &SynthesisState, now: DateTime<Utc>) -> bool {
        match state.disabled_at {
            Some(at) => now - at >= Duration::hours(self.config.cooldown_hours),
            None => true,
        }
    }
}
