//! Domain randomization: three independent text perturbations, each gated
//! by its own configured probability.

pub mod reorder;
pub mod synonyms;
pub mod typos;

pub use synonyms::SynonymTable;
pub use typos::TypoTable;

use rand::Rng;

use trellis_core::config::RandomizationConfig;

/// Immutable lookup tables shared by the perturbation passes.
///
/// Loaded once at startup and injected, never mutated; tests substitute
/// smaller tables.
#[derive(Debug, Clone, Default)]
pub struct RandomizationTables {
    pub synonyms: SynonymTable,
    pub typos: TypoTable,
}

/// Run the perturbation passes over one candidate utterance.
///
/// Each pass rolls its own gate independently, so several can fire on the
/// same text. Pass order is synonym, typo, reorder.
pub fn apply<R: Rng>(
    text: String,
    config: &RandomizationConfig,
    tables: &RandomizationTables,
    rng: &mut R,
) -> String {
    // gen_bool panics outside [0, 1].
    let mut text = text;
    if rng.gen_bool(config.synonym_prob.clamp(0.0, 1.0)) {
        text = synonyms::replace(&text, &tables.synonyms, rng);
    }
    if rng.gen_bool(config.typo_prob.clamp(0.0, 1.0)) {
        text = typos::inject(&text, &tables.typos, rng);
    }
    if rng.gen_bool(config.reorder_prob.clamp(0.0, 1.0)) {
        text = reorder::shuffle_clauses(&text, rng);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_probabilities_leave_text_untouched() {
        let config = RandomizationConfig {
            omit_optional_prob: 0.0,
            synonym_prob: 0.0,
            typo_prob: 0.0,
            reorder_prob: 0.0,
        };
        let mut rng = StdRng::seed_from_u64(11);
        let out = apply(
            "show sales report".to_string(),
            &config,
            &RandomizationTables::default(),
            &mut rng,
        );
        assert_eq!(out, "show sales report");
    }

    #[test]
    fn full_typo_probability_perturbs_letters() {
        let config = RandomizationConfig {
            omit_optional_prob: 0.0,
            synonym_prob: 0.0,
            typo_prob: 1.0,
            reorder_prob: 0.0,
        };
        let mut rng = StdRng::seed_from_u64(11);
        let mut changed = 0;
        for _ in 0..20 {
            let out = apply(
                "checkout".to_string(),
                &config,
                &RandomizationTables::default(),
                &mut rng,
            );
            assert_eq!(out.len(), "checkout".len());
            if out != "checkout" {
                changed += 1;
            }
        }
        // A second typo can land on the same position and revert the
        // first, so individual runs may come back clean.
        assert!(changed >= 15, "only {changed}/20 runs were perturbed");
    }
}
