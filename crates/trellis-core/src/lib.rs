//! # trellis-core
//!
//! Foundation crate for the Trellis synthetic training pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod sample;
pub mod skeleton;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TrellisConfig;
pub use errors::{TrellisError, TrellisResult};
pub use sample::{Confidence, SampleSource, SyntheticSample, TrainingSample};
pub use skeleton::{Skeleton, SlotSpec};
