use serde::{Deserialize, Serialize};

/// Outcome of a single validation check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckOutcome {
    pub passed: bool,
    /// Reason for the failure. `None` on pass.
    pub message: Option<String>,
}

impl CheckOutcome {
    pub fn pass() -> Self {
        Self {
            passed: true,
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: Some(message.into()),
        }
    }
}

/// Result of running all validation checks on one candidate.
///
/// Checks never short-circuit: `errors` lists every failure so rejection
/// logs show the full picture, not just the first problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationVerdict {
    /// True only when every check passed.
    pub valid: bool,
    /// One message per failed check.
    pub errors: Vec<String>,
}

impl ValidationVerdict {
    /// Fold individual check outcomes into a verdict. Empty failures mean
    /// a pass.
    pub fn from_outcomes(outcomes: Vec<CheckOutcome>) -> Self {
        let errors: Vec<String> = outcomes
            .into_iter()
            .filter(|o| !o.passed)
            .filter_map(|o| o.message)
            .collect();
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_passes_mean_valid() {
        let verdict = ValidationVerdict::from_outcomes(vec![
            CheckOutcome::pass(),
            CheckOutcome::pass(),
            CheckOutcome::pass(),
        ]);
        assert!(verdict.valid);
        assert!(verdict.errors.is_empty());
    }

    #[test]
    fn every_failure_is_collected() {
        let verdict = ValidationVerdict::from_outcomes(vec![
            CheckOutcome::fail("unfilled placeholder {time}"),
            CheckOutcome::pass(),
            CheckOutcome::fail("blank input"),
        ]);
        assert!(!verdict.valid);
        assert_eq!(verdict.errors.len(), 2);
        assert!(verdict.errors[0].contains("placeholder"));
        assert!(verdict.errors[1].contains("blank"));
    }
}
