//! # trellis-grape
//!
//! GRAPE (Generation-Rating Agreement Pruning) filter: re-ranks validated
//! synthetic candidates by asking the deployed intent model whether it
//! agrees with each candidate's claimed intent, then keeps the top
//! fraction.

pub mod filter;
pub mod scorer;

pub use filter::GrapeFilter;
pub use scorer::score_sample;
