/// Trellis system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generation number assigned to samples synthesized directly from real data.
/// Higher generations would mean synthetic-from-synthetic, which the pipeline
/// never produces.
pub const FIRST_ORDER_GENERATION: u32 = 1;

/// Maximum attempts at placing a typo before giving up on a candidate string.
pub const MAX_TYPO_ATTEMPTS: usize = 10;

/// Maximum number of typos injected into a single utterance.
pub const MAX_TYPOS_PER_UTTERANCE: usize = 2;

/// Days of history compared when computing the 7-day accuracy trend.
pub const TREND_WINDOW_DAYS: i64 = 7;

/// Bucket edges for the GRAPE score histogram. Each adjacent pair forms a
/// half-open bucket `[lower, upper)`; the final bucket is closed.
pub const GRAPE_SCORE_BUCKETS: [f64; 6] = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];
