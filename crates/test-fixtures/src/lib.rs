//! In-memory fakes and sample builders shared by tests across the
//! workspace.
//!
//! Every collaborator trait has a deterministic in-memory implementation
//! here, so integration tests can exercise whole pipelines without
//! external services.

pub mod build;
pub mod matcher;
pub mod skeleton;
pub mod store;
pub mod tenant;

pub use build::{intent_outcome_sample, synthetic_sample, training_sample};
pub use matcher::{EchoIntentMatcher, FailingIntentMatcher};
pub use skeleton::StaticSkeletonSource;
pub use store::MemorySampleStore;
pub use tenant::MemoryTenantConfig;
