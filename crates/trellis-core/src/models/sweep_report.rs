use serde::{Deserialize, Serialize};

/// Outcome of one scheduled circuit-breaker sweep across all tenants.
///
/// A failing tenant never aborts the sweep; its error lands in `failures`
/// and evaluation moves on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SweepReport {
    /// Tenants whose metrics were computed and checked.
    pub evaluated: usize,
    /// Tenants disabled during this sweep.
    pub tripped: usize,
    /// Tenants skipped because their window held too few samples to judge.
    pub skipped_insufficient: usize,
    /// Per-tenant errors, as `(tenant_id, error)` pairs.
    pub failures: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_report_is_empty() {
        let report = SweepReport::default();
        assert_eq!(report.evaluated, 0);
        assert_eq!(report.tripped, 0);
        assert!(report.failures.is_empty());
    }
}
