use serde::{Deserialize, Serialize};

/// One fillable slot in a skeleton pattern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotSpec {
    /// Slot name as it appears inside `{braces}` in the pattern text.
    pub name: String,
    /// Required slots are always filled; optional ones may be omitted
    /// during domain randomization.
    pub required: bool,
    /// Candidate fill values mined from real user history.
    pub values: Vec<String>,
}

impl SlotSpec {
    pub fn required(name: &str, values: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            required: true,
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    pub fn optional(name: &str, values: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            required: false,
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// A slot with no observed values can never be filled.
    pub fn is_fillable(&self) -> bool {
        !self.values.is_empty()
    }
}

/// An utterance template mined from real user history for one intent.
///
/// A skeleton is a set of surface patterns (`"查{time}的{metric}"`) plus the
/// slot vocabulary observed for that intent. The synthesis engine crosses
/// patterns with slot values to produce candidate utterances.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Skeleton {
    /// Stable identifier, carried onto every candidate for lineage.
    pub id: String,
    /// Intent all patterns in this skeleton express.
    pub intent_code: String,
    /// Surface templates with `{slot}` placeholders.
    pub patterns: Vec<String>,
    /// Slot vocabulary for this intent.
    pub slots: Vec<SlotSpec>,
}

impl Skeleton {
    /// Look up a slot spec by name.
    pub fn slot(&self, name: &str) -> Option<&SlotSpec> {
        self.slots.iter().find(|s| s.name == name)
    }

    /// A skeleton with no patterns cannot produce candidates.
    pub fn has_patterns(&self) -> bool {
        !self.patterns.is_empty()
    }
}
