//! Slot filling and pattern rendering.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use trellis_core::sample::Confidence;
use trellis_core::skeleton::Skeleton;

/// Pick values for a skeleton's slots.
///
/// Optional slots are skipped when the omit roll succeeds; slots with an
/// empty value set are skipped outright. Required slots with values are
/// always filled.
pub fn fill_slots<R: Rng>(
    skeleton: &Skeleton,
    omit_optional_prob: f64,
    rng: &mut R,
) -> HashMap<String, String> {
    // gen_bool panics outside [0, 1].
    let omit_optional_prob = omit_optional_prob.clamp(0.0, 1.0);
    let mut params = HashMap::new();
    for slot in &skeleton.slots {
        if !slot.is_fillable() {
            continue;
        }
        if !slot.required && rng.gen_bool(omit_optional_prob) {
            continue;
        }
        if let Some(value) = slot.values.choose(rng) {
            params.insert(slot.name.clone(), value.clone());
        }
    }
    params
}

/// Substitute every `{SLOT}` occurrence in the pattern.
///
/// Slots missing from `params` substitute to an empty string, then repeated
/// whitespace collapses to a single space and the result is trimmed. An
/// omitted optional slot therefore leaves no hole in the text.
pub fn render(pattern: &str, params: &HashMap<String, String>) -> String {
    let mut text = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while let Some(open) = rest.find('{') {
        text.push_str(&rest[..open]);
        match rest[open..].find('}') {
            Some(close_off) => {
                let name = &rest[open + 1..open + close_off];
                match params.get(name) {
                    Some(value) => text.push_str(value),
                    // Omitted optionals land here too; an unknown name
                    // points at a skeleton bug.
                    None => debug!(slot = %name, "placeholder without a value, substituted empty"),
                }
                rest = &rest[open + close_off + 1..];
            }
            None => {
                // Unbalanced brace: keep the remainder verbatim.
                text.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    text.push_str(rest);
    collapse_whitespace(&text)
}

/// Fraction of required slots that got a value. 1.0 with no required slots.
pub fn required_fill_ratio(skeleton: &Skeleton, params: &HashMap<String, String>) -> Confidence {
    let required: Vec<&str> = skeleton
        .slots
        .iter()
        .filter(|s| s.required)
        .map(|s| s.name.as_str())
        .collect();
    if required.is_empty() {
        return Confidence::new(1.0);
    }
    let filled = required
        .iter()
        .filter(|name| params.get(**name).is_some_and(|v| !v.is_empty()))
        .count();
    Confidence::new(filled as f64 / required.len() as f64)
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_space = false;
    for ch in text.trim().chars() {
        if ch.is_whitespace() {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
        } else {
            out.push(ch);
            last_was_space = false;
        }
    }
    out
}
