//! Distribution drift via a Jensen-Shannon divergence proxy.
//!
//! Compares how correct and incorrect predictions distribute across
//! intents. A healthy model fails roughly where it succeeds; when the
//! failures concentrate on intents the successes never touch, the two
//! distributions diverge and the score rises.

use std::f64::consts::LN_2;

use trellis_core::models::IntentOutcome;

/// Normalized Jensen-Shannon divergence between the per-intent
/// distribution of correct predictions and the per-intent distribution
/// of incorrect ones.
///
/// Returns 0.0 when either side has no mass at all, since an absent
/// distribution carries no drift evidence. The result is normalized by
/// ln 2 and clamped to [0.0, 1.0]; 1.0 means the two distributions are
/// fully disjoint.
pub fn distribution_drift(outcomes: &[IntentOutcome]) -> f64 {
    let correct_total: u64 = outcomes.iter().map(|o| o.correct).sum();
    let incorrect_total: u64 = outcomes.iter().map(|o| o.incorrect).sum();
    if correct_total == 0 || incorrect_total == 0 {
        return 0.0;
    }

    let mut divergence = 0.0;
    for outcome in outcomes {
        let p = outcome.correct as f64 / correct_total as f64;
        let q = outcome.incorrect as f64 / incorrect_total as f64;
        if p > 0.0 && q > 0.0 {
            let m = (p + q) / 2.0;
            divergence += 0.5 * p * (p / m).ln() + 0.5 * q * (q / m).ln();
        } else if p > 0.0 {
            // One-sided mass: the KL term against m = p/2 collapses to ln 2.
            divergence += 0.5 * p * LN_2;
        } else if q > 0.0 {
            divergence += 0.5 * q * LN_2;
        }
    }

    let normalized = divergence / LN_2;
    if !normalized.is_finite() {
        return 0.0;
    }
    normalized.clamp(0.0, 1.0)
}
