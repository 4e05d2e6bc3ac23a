//! Synonym replacement over whitespace-delimited tokens.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

/// Case-insensitive synonym lookup table.
///
/// Keys are stored lowercased. The table is immutable after construction
/// and injected into the engine, so tests can substitute a small one.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    pub fn new(entries: &[(&str, &[&str])]) -> Self {
        let entries = entries
            .iter()
            .map(|(word, synonyms)| {
                (
                    word.to_lowercase(),
                    synonyms.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Case-insensitive lookup.
    pub fn lookup(&self, word: &str) -> Option<&[String]> {
        self.entries
            .get(&word.to_lowercase())
            .map(Vec::as_slice)
    }
}

impl Default for SynonymTable {
    /// Built-in business vocabulary covering the utterances the skeleton
    /// miner produces, Chinese and English.
    fn default() -> Self {
        Self::new(&[
            ("查询", &["查一下", "查看", "看看"]),
            ("统计", &["汇总", "计算"]),
            ("销售额", &["营业额", "销售收入"]),
            ("订单", &["单子", "订单量"]),
            ("show", &["display", "view"]),
            ("query", &["check", "lookup"]),
            ("sales", &["revenue", "turnover"]),
            ("report", &["summary", "overview"]),
            ("total", &["overall", "aggregate"]),
            ("orders", &["purchases", "transactions"]),
        ])
    }
}

/// Replace tokens that have table entries, each behind a 50% coin.
///
/// Tokens are whitespace-delimited; text without whitespace (typical for
/// Chinese utterances) is a single token and only changes on a whole-token
/// match. The first letter's capitalization carries over.
pub fn replace<R: Rng>(text: &str, table: &SynonymTable, rng: &mut R) -> String {
    let replaced: Vec<String> = text
        .split_whitespace()
        .map(|token| {
            let candidates = match table.lookup(token) {
                Some(c) if !c.is_empty() => c,
                _ => return token.to_string(),
            };
            if !rng.gen_bool(0.5) {
                return token.to_string();
            }
            match candidates.choose(rng) {
                Some(synonym) => match_capitalization(token, synonym),
                None => token.to_string(),
            }
        })
        .collect();
    replaced.join(" ")
}

/// Carry the original token's first-letter capitalization onto the
/// replacement.
fn match_capitalization(original: &str, replacement: &str) -> String {
    let first_is_upper = original.chars().next().is_some_and(char::is_uppercase);
    if !first_is_upper {
        return replacement.to_string();
    }
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
