//! Structural check: the candidate must carry at least one anchor
//! parameter.

use std::collections::HashMap;

use trellis_core::models::CheckOutcome;

use super::{METRIC_KEY, TIME_KEY};

/// Pass when `params` holds a non-empty TIME or a non-empty METRIC.
/// Either one suffices; a candidate with neither cannot anchor a query.
pub fn check(params: &HashMap<String, String>) -> CheckOutcome {
    let has_time = params.get(TIME_KEY).is_some_and(|v| !v.is_empty());
    let has_metric = params.get(METRIC_KEY).is_some_and(|v| !v.is_empty());
    if has_time || has_metric {
        CheckOutcome::pass()
    } else {
        CheckOutcome::fail("sample carries neither a TIME nor a METRIC parameter")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn either_anchor_alone_passes() {
        let time_only = HashMap::from([(TIME_KEY.to_string(), "今天".to_string())]);
        assert!(check(&time_only).passed);

        let metric_only = HashMap::from([(METRIC_KEY.to_string(), "销售额".to_string())]);
        assert!(check(&metric_only).passed);
    }

    #[test]
    fn empty_values_do_not_count() {
        let blank = HashMap::from([
            (TIME_KEY.to_string(), String::new()),
            (METRIC_KEY.to_string(), String::new()),
        ]);
        assert!(!check(&blank).passed);
    }

    #[test]
    fn no_anchors_fails_with_message() {
        let outcome = check(&HashMap::new());
        assert!(!outcome.passed);
        assert!(outcome.message.is_some_and(|m| m.contains("TIME")));
    }
}
