//! Clause reordering.

use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle comma-separated clauses.
///
/// Splits on ASCII and full-width commas, drops blank fragments, rejoins
/// with `", "`. Input with fewer than two clauses comes back unchanged,
/// including its original punctuation.
pub fn shuffle_clauses<R: Rng>(text: &str, rng: &mut R) -> String {
    let mut clauses: Vec<&str> = text
        .split([',', '，'])
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();
    if clauses.len() <= 1 {
        return text.to_string();
    }
    clauses.shuffle(rng);
    clauses.join(", ")
}
