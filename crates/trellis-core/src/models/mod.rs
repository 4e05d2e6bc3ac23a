pub mod generation_result;
pub mod intent_match;
pub mod quality_metrics;
pub mod store_aggregates;
pub mod sweep_report;
pub mod synthesis_state;
pub mod validation_verdict;

pub use generation_result::{BatchGenerationReport, GenerationResult};
pub use intent_match::IntentPrediction;
pub use quality_metrics::SyntheticDataMetrics;
pub use store_aggregates::{IntentOutcome, ScoreBucket, SourceCounts};
pub use sweep_report::SweepReport;
pub use synthesis_state::SynthesisState;
pub use validation_verdict::{CheckOutcome, ValidationVerdict};
