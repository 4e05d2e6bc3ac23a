use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-tenant synthesis switch, flipped by the circuit breaker.
///
/// Once disabled, a tenant stays disabled until an operator resets it;
/// there is no automatic re-enable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SynthesisState {
    pub enabled: bool,
    /// Why the breaker tripped. `None` while enabled.
    pub disabled_reason: Option<String>,
    /// When the breaker tripped. `None` while enabled.
    pub disabled_at: Option<DateTime<Utc>>,
}

impl SynthesisState {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            disabled_reason: None,
            disabled_at: None,
        }
    }

    pub fn disabled(reason: &str, at: DateTime<Utc>) -> Self {
        Self {
            enabled: false,
            disabled_reason: Some(reason.to_string()),
            disabled_at: Some(at),
        }
    }
}

impl Default for SynthesisState {
    fn default() -> Self {
        Self::enabled()
    }
}
