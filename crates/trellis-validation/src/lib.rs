//! # trellis-validation
//!
//! Sample validator: structural, semantic, and executability checks over
//! synthetic candidates. All checks always run; failures accumulate into
//! one verdict.

pub mod checks;
pub mod engine;
pub mod vocab;

pub use engine::SampleValidator;
pub use vocab::ValidationVocabulary;
