//! # trellis-synthesis
//!
//! Scenario generator: turns skeletons mined from real user history into
//! batches of candidate synthetic samples via pattern selection, slot
//! filling, and domain randomization.

pub mod engine;
pub mod randomization;
pub mod slots;

pub use engine::SynthesisEngine;
pub use randomization::{RandomizationTables, SynonymTable, TypoTable};
