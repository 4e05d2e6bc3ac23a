pub mod defaults;
pub mod quality_config;
pub mod synthesis_config;

pub use quality_config::QualityConfig;
pub use synthesis_config::{RandomizationConfig, SynthesisConfig};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{TrellisError, TrellisResult};

/// Top-level configuration for the whole pipeline.
///
/// Every field carries a default, so an empty TOML document is a valid
/// configuration. Per-tenant overrides come from the tenant config store
/// and replace this wholesale, not field by field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrellisConfig {
    pub synthesis: SynthesisConfig,
    pub quality: QualityConfig,
}

impl TrellisConfig {
    /// Parse from a TOML string.
    pub fn from_toml_str(raw: &str) -> TrellisResult<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| TrellisError::InvalidConfig {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and parse a TOML file.
    pub fn from_file(path: &Path) -> TrellisResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| TrellisError::InvalidConfig {
            message: format!("cannot read {}: {e}", path.display()),
        })?;
        Self::from_toml_str(&raw)
    }

    /// Reject configurations that would misbehave at runtime.
    pub fn validate(&self) -> TrellisResult<()> {
        let probs = [
            ("omit_optional_prob", self.synthesis.randomization.omit_optional_prob),
            ("synonym_prob", self.synthesis.randomization.synonym_prob),
            ("typo_prob", self.synthesis.randomization.typo_prob),
            ("reorder_prob", self.synthesis.randomization.reorder_prob),
        ];
        for (name, p) in probs {
            if !(0.0..=1.0).contains(&p) {
                return Err(TrellisError::InvalidConfig {
                    message: format!("{name} must be in [0.0, 1.0], got {p}"),
                });
            }
        }
        if !(0.0..=1.0).contains(&self.synthesis.grape_keep_ratio) {
            return Err(TrellisError::InvalidConfig {
                message: format!(
                    "grape_keep_ratio must be in [0.0, 1.0], got {}",
                    self.synthesis.grape_keep_ratio
                ),
            });
        }
        if self.synthesis.max_synthetic_ratio < 0.0 {
            return Err(TrellisError::InvalidConfig {
                message: format!(
                    "max_synthetic_ratio must be non-negative, got {}",
                    self.synthesis.max_synthetic_ratio
                ),
            });
        }
        if self.synthesis.candidate_multiplier == 0 {
            return Err(TrellisError::InvalidConfig {
                message: "candidate_multiplier must be at least 1".to_string(),
            });
        }
        if self.synthesis.ratio_window_days <= 0 {
            return Err(TrellisError::InvalidConfig {
                message: format!(
                    "ratio_window_days must be positive, got {}",
                    self.synthesis.ratio_window_days
                ),
            });
        }
        if !(0.0..=1.0).contains(&self.quality.accuracy_threshold) {
            return Err(TrellisError::InvalidConfig {
                message: format!(
                    "accuracy_threshold must be in [0.0, 1.0], got {}",
                    self.quality.accuracy_threshold
                ),
            });
        }
        if self.quality.drift_threshold < 0.0 {
            return Err(TrellisError::InvalidConfig {
                message: format!(
                    "drift_threshold must be non-negative, got {}",
                    self.quality.drift_threshold
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = TrellisConfig::from_toml_str("").unwrap();
        assert!(config.synthesis.enabled);
        assert_eq!(config.synthesis.candidate_multiplier, 3);
        assert_eq!(config.synthesis.max_synthetic_ratio, 0.5);
        assert_eq!(config.synthesis.grape_keep_ratio, 0.3);
        assert_eq!(config.quality.accuracy_threshold, 0.85);
        assert_eq!(config.quality.drift_threshold, 0.10);
        assert_eq!(config.quality.min_sample_count, 50);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let raw = r#"
            [synthesis]
            candidate_multiplier = 5
            grape_keep_ratio = 0.5

            [quality]
            accuracy_threshold = 0.9
        "#;
        let config = TrellisConfig::from_toml_str(raw).unwrap();
        assert_eq!(config.synthesis.candidate_multiplier, 5);
        assert_eq!(config.synthesis.grape_keep_ratio, 0.5);
        assert_eq!(config.synthesis.batch_interval_ms, 1000);
        assert_eq!(config.quality.accuracy_threshold, 0.9);
        assert_eq!(config.quality.drift_threshold, 0.10);
    }

    #[test]
    fn out_of_range_probability_is_rejected() {
        let raw = r#"
            [synthesis.randomization]
            typo_prob = 1.5
        "#;
        let err = TrellisConfig::from_toml_str(raw).unwrap_err();
        assert!(err.to_string().contains("typo_prob"));
    }

    #[test]
    fn zero_multiplier_is_rejected() {
        let raw = r#"
            [synthesis]
            candidate_multiplier = 0
        "#;
        assert!(TrellisConfig::from_toml_str(raw).is_err());
    }

    #[test]
    fn ratio_above_one_is_allowed_as_unlimited() {
        let raw = r#"
            [synthesis]
            max_synthetic_ratio = 2.0
        "#;
        let config = TrellisConfig::from_toml_str(raw).unwrap();
        assert_eq!(config.synthesis.max_synthetic_ratio, 2.0);
    }
}
