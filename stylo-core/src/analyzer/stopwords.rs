//! Stopword filtering with a preserved-terms allow-list.
//!
//! Uses the standard English list from the `stop-words` crate, held in an
//! `FxHashSet` for fast membership checks. A small allow-list of preserved
//! terms overrides the stopword set: corpus-specific proper nouns survive
//! filtering even when they collide with a grammatical stopword.
//!
//! Both sets are explicit values on the filter — never global state — so
//! differently configured filters can coexist and tests can swap lists.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Preserved corpus names: proper nouns that must survive filtering.
pub const DEFAULT_PRESERVED: &[&str] = &["romeo", "juliet", "verona"];

/// Returns the standard English stopword list.
pub fn english_stopwords() -> Vec<String> {
    get(LANGUAGE::English).iter().map(|s| s.to_string()).collect()
}

/// Drops stopwords from the normalized token stream.
///
/// A token is dropped when it is in the stopword set and *not* in the
/// preserved set. Matching is case-sensitive exact match against the
/// lowercase forms the tokenizer produces.
///
/// # Example
///
/// ```
/// use stylo_core::analyzer::stopwords::StopwordFilter;
///
/// let filter = StopwordFilter::default();
/// assert!(filter.is_dropped("the"));
/// assert!(!filter.is_dropped("romeo")); // preserved
/// assert!(!filter.is_dropped("dagger")); // not a stopword
/// ```
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Stopword set (lowercase).
    stopwords: FxHashSet<String>,
    /// Allow-list that overrides the stopword set (lowercase).
    preserved: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english(DEFAULT_PRESERVED)
    }
}

impl StopwordFilter {
    /// Creates a filter over the standard English stopword list with the
    /// given preserved terms.
    pub fn english(preserved: &[&str]) -> Self {
        Self::from_lists(english_stopwords(), preserved.iter().map(|s| s.to_string()))
    }

    /// Creates a filter from explicit stopword and preserved-term lists.
    pub fn from_lists(
        stopwords: impl IntoIterator<Item = String>,
        preserved: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            stopwords: stopwords.into_iter().collect(),
            preserved: preserved.into_iter().collect(),
        }
    }

    /// Whether `token` should be dropped from the normalized stream.
    #[inline]
    pub fn is_dropped(&self, token: &str) -> bool {
        self.stopwords.contains(token) && !self.preserved.contains(token)
    }

    /// Number of stopwords in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Whether the stopword set is empty.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
