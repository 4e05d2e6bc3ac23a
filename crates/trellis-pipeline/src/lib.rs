//! Generation orchestrator for synthetic training data.
//!
//! [`GenerationPipeline`] chains the funnel end to end: admission checks
//! (tenant switch, synthetic-ratio ceiling), skeleton lookup,
//! over-generation, rule validation, GRAPE curation and atomic
//! persistence. Batch runs across a tenant's intents are paced and can
//! be interrupted through a shared [`StopToken`].

pub mod engine;
pub mod ratio;
pub mod throttle;

pub use engine::GenerationPipeline;
pub use ratio::check_ratio_limit;
pub use throttle::StopToken;
