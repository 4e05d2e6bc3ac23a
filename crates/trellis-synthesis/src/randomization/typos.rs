//! Keyboard-adjacent typo injection.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use trellis_core::constants::{MAX_TYPOS_PER_UTTERANCE, MAX_TYPO_ATTEMPTS};

/// Confusable-character map: for each lowercase ASCII letter, the keys
/// physically adjacent to it on a QWERTY layout.
#[derive(Debug, Clone)]
pub struct TypoTable {
    adjacent: HashMap<char, Vec<char>>,
}

impl TypoTable {
    pub fn new(entries: &[(char, &[char])]) -> Self {
        let adjacent = entries
            .iter()
            .map(|(c, adj)| (*c, adj.to_vec()))
            .collect();
        Self { adjacent }
    }

    /// Adjacent keys for a lowercase letter.
    pub fn adjacent(&self, c: char) -> Option<&[char]> {
        self.adjacent.get(&c).map(Vec::as_slice)
    }
}

impl Default for TypoTable {
    fn default() -> Self {
        Self::new(&[
            ('q', &['w', 'a']),
            ('w', &['q', 'e', 's']),
            ('e', &['w', 'r', 'd']),
            ('r', &['e', 't', 'f']),
            ('t', &['r', 'y', 'g']),
            ('y', &['t', 'u', 'h']),
            ('u', &['y', 'i', 'j']),
            ('i', &['u', 'o', 'k']),
            ('o', &['i', 'p', 'l']),
            ('p', &['o', 'l']),
            ('a', &['q', 's', 'z']),
            ('s', &['a', 'd', 'w', 'x']),
            ('d', &['s', 'f', 'e', 'c']),
            ('f', &['d', 'g', 'r', 'v']),
            ('g', &['f', 'h', 't', 'b']),
            ('h', &['g', 'j', 'y', 'n']),
            ('j', &['h', 'k', 'u', 'm']),
            ('k', &['j', 'l', 'i']),
            ('l', &['k', 'o', 'p']),
            ('z', &['a', 'x']),
            ('x', &['z', 's', 'c']),
            ('c', &['x', 'd', 'v']),
            ('v', &['c', 'f', 'b']),
            ('b', &['v', 'g', 'n']),
            ('n', &['b', 'h', 'm']),
            ('m', &['n', 'j']),
        ])
    }
}

/// Inject 1-2 typos at random ASCII-letter positions, preserving case.
///
/// Each typo gets up to [`MAX_TYPO_ATTEMPTS`] draws to land on a letter
/// with a table entry; text with no such position (for example pure
/// Chinese) passes through unchanged.
pub fn inject<R: Rng>(text: &str, table: &TypoTable, rng: &mut R) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let typo_count = rng.gen_range(1..=MAX_TYPOS_PER_UTTERANCE);
    for _ in 0..typo_count {
        for _ in 0..MAX_TYPO_ATTEMPTS {
            let idx = rng.gen_range(0..chars.len());
            let original = chars[idx];
            if !original.is_ascii_alphabetic() {
                continue;
            }
            let options = match table.adjacent(original.to_ascii_lowercase()) {
                Some(options) if !options.is_empty() => options,
                _ => continue,
            };
            if let Some(&replacement) = options.choose(rng) {
                chars[idx] = if original.is_ascii_uppercase() {
                    replacement.to_ascii_uppercase()
                } else {
                    replacement
                };
            }
            break;
        }
    }
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn non_alphabetic_text_is_unchanged() {
        let mut rng = StdRng::seed_from_u64(3);
        let out = inject("查询销售额", &TypoTable::default(), &mut rng);
        assert_eq!(out, "查询销售额");
    }

    #[test]
    fn typo_lands_on_a_letter_and_preserves_case() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let out = inject("Sales", &TypoTable::default(), &mut rng);
            assert_eq!(out.chars().count(), 5);
            // First letter may be replaced but stays uppercase.
            assert!(out.chars().next().is_some_and(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn at_most_two_positions_change() {
        let mut rng = StdRng::seed_from_u64(9);
        let original = "checkout";
        for _ in 0..50 {
            let out = inject(original, &TypoTable::default(), &mut rng);
            let diffs = original
                .chars()
                .zip(out.chars())
                .filter(|(a, b)| a != b)
                .count();
            assert!(diffs <= 2, "expected <=2 diffs, got {diffs} in {out}");
        }
    }

    #[test]
    fn empty_input_stays_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(inject("", &TypoTable::default(), &mut rng), "");
    }
}
