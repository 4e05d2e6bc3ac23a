//! Semantic check: present anchor values must actually mean what they
//! claim.

use std::collections::HashMap;

use trellis_core::models::CheckOutcome;

use super::{METRIC_KEY, TIME_KEY};
use crate::vocab::ValidationVocabulary;

/// Evaluate whichever of TIME/METRIC is present. Absence is not an error
/// here; that is the structural check's concern.
pub fn check(params: &HashMap<String, String>, vocab: &ValidationVocabulary) -> CheckOutcome {
    let mut problems = Vec::new();
    if let Some(time) = params.get(TIME_KEY) {
        if !time.is_empty() && !vocab.recognizes_time(time) {
            problems.push(format!("unrecognized TIME expression: {time}"));
        }
    }
    if let Some(metric) = params.get(METRIC_KEY) {
        if !metric.is_empty() && !vocab.recognizes_metric(metric) {
            problems.push(format!("unrecognized METRIC name: {metric}"));
        }
    }
    if problems.is_empty() {
        CheckOutcome::pass()
    } else {
        CheckOutcome::fail(problems.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> ValidationVocabulary {
        ValidationVocabulary::new(&["今天"], &["销售额"])
    }

    #[test]
    fn absent_anchors_are_not_this_checks_problem() {
        assert!(check(&HashMap::new(), &vocab()).passed);
    }

    #[test]
    fn recognized_values_pass() {
        let params = HashMap::from([
            (TIME_KEY.to_string(), "今天".to_string()),
            (METRIC_KEY.to_string(), "销售额".to_string()),
        ]);
        assert!(check(&params, &vocab()).passed);
    }

    #[test]
    fn date_and_range_forms_pass_without_vocabulary_entries() {
        let params = HashMap::from([(TIME_KEY.to_string(), "2025-03-15".to_string())]);
        assert!(check(&params, &vocab()).passed);
        let params = HashMap::from([(TIME_KEY.to_string(), "最近30天".to_string())]);
        assert!(check(&params, &vocab()).passed);
    }

    #[test]
    fn both_unrecognized_values_land_in_one_message() {
        let params = HashMap::from([
            (TIME_KEY.to_string(), "将来".to_string()),
            (METRIC_KEY.to_string(), "天气".to_string()),
        ]);
        let outcome = check(&params, &vocab());
        assert!(!outcome.passed);
        let message = outcome.message.unwrap();
        assert!(message.contains("TIME"));
        assert!(message.contains("METRIC"));
    }
}
