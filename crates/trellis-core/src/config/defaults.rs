//! Default values for every configurable knob, in one place.

// --- Synthesis ---
pub const DEFAULT_SYNTHESIS_ENABLED: bool = true;
pub const DEFAULT_CANDIDATE_MULTIPLIER: u32 = 3;
pub const DEFAULT_BATCH_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_MAX_SYNTHETIC_RATIO: f64 = 0.5;
pub const DEFAULT_RATIO_WINDOW_DAYS: i64 = 30;
pub const DEFAULT_GRAPE_KEEP_RATIO: f64 = 0.3;

// --- Domain randomization ---
pub const DEFAULT_OMIT_OPTIONAL_PROB: f64 = 0.3;
pub const DEFAULT_SYNONYM_PROB: f64 = 0.3;
pub const DEFAULT_TYPO_PROB: f64 = 0.1;
pub const DEFAULT_REORDER_PROB: f64 = 0.2;

// --- Quality / circuit breaker ---
pub const DEFAULT_ACCURACY_THRESHOLD: f64 = 0.85;
pub const DEFAULT_DRIFT_THRESHOLD: f64 = 0.10;
pub const DEFAULT_MIN_SAMPLE_COUNT: u64 = 50;
pub const DEFAULT_COOLDOWN_HOURS: i64 = 24;
