//! Executability check: the candidate carries enough to act on.

use trellis_core::models::CheckOutcome;
use trellis_core::sample::SyntheticSample;

/// `user_input` and `intent_code` must both be non-blank.
/// Whitespace-only counts as blank.
pub fn check(sample: &SyntheticSample) -> CheckOutcome {
    let mut blank = Vec::new();
    if sample.user_input.trim().is_empty() {
        blank.push("user_input");
    }
    if sample.intent_code.trim().is_empty() {
        blank.push("intent_code");
    }
    if blank.is_empty() {
        CheckOutcome::pass()
    } else {
        CheckOutcome::fail(format!("blank {}", blank.join(" and ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use trellis_core::sample::Confidence;

    fn sample(user_input: &str, intent_code: &str) -> SyntheticSample {
        SyntheticSample::first_order(
            user_input.to_string(),
            intent_code.to_string(),
            HashMap::new(),
            Confidence::new(1.0),
            "skel".to_string(),
        )
    }

    #[test]
    fn populated_sample_passes() {
        assert!(check(&sample("查销售额", "sales.query")).passed);
    }

    #[test]
    fn whitespace_only_input_is_blank() {
        let outcome = check(&sample("   ", "sales.query"));
        assert!(!outcome.passed);
        assert!(outcome.message.is_some_and(|m| m.contains("user_input")));
    }

    #[test]
    fn both_blank_fields_named_in_message() {
        let outcome = check(&sample("", " "));
        assert!(!outcome.passed);
        let message = outcome.message.unwrap();
        assert!(message.contains("user_input") && message.contains("intent_code"));
    }
}
