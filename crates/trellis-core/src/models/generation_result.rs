use serde::{Deserialize, Serialize};

/// Per-intent funnel counts from one generation run.
///
/// The counts narrow monotonically: `generated >= validated >= filtered
/// >= saved`. A run that was rejected before synthesis (disabled tenant,
/// missing skeleton, ratio cap) reports zeros with `error_message` set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub intent_code: String,
    pub tenant_id: String,
    /// Candidates produced by the synthesis engine.
    pub generated: usize,
    /// Candidates surviving the three validation checks.
    pub validated: usize,
    /// Candidates surviving the GRAPE filter.
    pub filtered: usize,
    /// Samples actually persisted.
    pub saved: usize,
    /// Skeleton used, when synthesis ran at all.
    pub skeleton_id: Option<String>,
    /// Wall-clock duration of the run.
    pub duration_ms: u64,
    /// Why the run produced nothing, when it didn't.
    pub error_message: Option<String>,
}

impl GenerationResult {
    /// A run rejected before any candidates were produced.
    pub fn rejected(intent_code: &str, tenant_id: &str, reason: &str) -> Self {
        Self {
            intent_code: intent_code.to_string(),
            tenant_id: tenant_id.to_string(),
            generated: 0,
            validated: 0,
            filtered: 0,
            saved: 0,
            skeleton_id: None,
            duration_ms: 0,
            error_message: Some(reason.to_string()),
        }
    }

    /// True when the run persisted at least one sample.
    pub fn produced_samples(&self) -> bool {
        self.saved > 0
    }
}

/// Outcome of a batch run across every enabled intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchGenerationReport {
    /// One entry per intent attempted, in attempt order.
    pub results: Vec<GenerationResult>,
    /// True when the run stopped early (stop token or ratio cap).
    pub interrupted: bool,
}

impl BatchGenerationReport {
    /// Total samples persisted across all intents in this batch.
    pub fn total_saved(&self) -> usize {
        self.results.iter().map(|r| r.saved).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_runs_report_zero_counts() {
        let result = GenerationResult::rejected("sales.query", "tenant-1", "no skeleton");
        assert_eq!(result.generated, 0);
        assert_eq!(result.saved, 0);
        assert!(!result.produced_samples());
        assert_eq!(result.error_message.as_deref(), Some("no skeleton"));
    }

    #[test]
    fn batch_totals_sum_saved_counts() {
        let mut ok = GenerationResult::rejected("a", "t", "x");
        ok.saved = 3;
        ok.error_message = None;
        let report = BatchGenerationReport {
            results: vec![ok, GenerationResult::rejected("b", "t", "no skeleton")],
            interrupted: false,
        };
        assert_eq!(report.total_saved(), 3);
    }
}
