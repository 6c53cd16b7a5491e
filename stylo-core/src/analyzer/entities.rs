//! Heuristic named-entity extraction.
//!
//! Scans the ORIGINAL raw text — not the lowercased token stream — for
//! capitalized words and treats each distinct surface form as a candidate
//! proper noun. A word qualifies when it is a maximal letter run whose
//! first character is an ASCII uppercase letter (mixed case is allowed
//! after: "McCoy" qualifies). Candidates matching a blacklist of common
//! capitalized function words (sentence-initial "The", "And", ...) are
//! removed by exact case-sensitive comparison.
//!
//! The result is a deduplicated set of surface forms; frequency is
//! discarded at this stage. The heuristic both over-counts (capitalized
//! common words outside the blacklist) and under-counts (lowercase-only
//! mentions, multi-word entities). That imprecision is an accepted
//! tradeoff of the design, not something this module tries to repair.

use rustc_hash::FxHashSet;

use crate::analyzer::tokenizer::for_each_word;

/// Capitalized function words that are never entities.
pub const DEFAULT_BLACKLIST: &[&str] = &[
    "The", "And", "In", "A", "But", "As", "With", "For", "To", "At", "On",
];

/// Extracts candidate named entities from raw text.
#[derive(Debug, Clone)]
pub struct EntityExtractor {
    blacklist: FxHashSet<String>,
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_BLACKLIST.iter().map(|s| s.to_string()))
    }
}

impl EntityExtractor {
    /// Creates an extractor with the given blacklist of surface forms.
    pub fn new(blacklist: impl IntoIterator<Item = String>) -> Self {
        Self {
            blacklist: blacklist.into_iter().collect(),
        }
    }

    /// Collects the distinct capitalized surface forms in `raw_text`,
    /// minus the blacklist.
    pub fn extract(&self, raw_text: &str) -> FxHashSet<String> {
        let mut entities = FxHashSet::default();
        for_each_word(raw_text, |word, _| {
            if word.as_bytes()[0].is_ascii_uppercase() && !self.blacklist.contains(word) {
                entities.insert(word.to_string());
            }
        });
        entities
    }
}
