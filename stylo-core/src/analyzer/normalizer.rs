//! Token normalization pipeline.
//!
//! Composes the three per-token sub-steps in fixed order:
//!
//! 1. **Lemmatize** ([`crate::analyzer::lemmatizer`]): suffix-rule reduction
//! 2. **Filter** ([`crate::analyzer::stopwords`]): drop stopwords unless preserved
//! 3. **Stem**: Porter-family English stemmer (`rust-stemmers`)
//!
//! Dropped tokens leave no placeholder; output ordering follows input
//! ordering. The stemmer may further shorten the lemmatized form
//! ("running" → "runn" → "runn" stays, but "beauty" → "beauti").

use rust_stemmers::{Algorithm, Stemmer};

use crate::analyzer::lemmatizer::lemmatize;
use crate::analyzer::stopwords::StopwordFilter;

/// Normalizes tokens: lemmatize → stopword-filter → stem.
///
/// Holds the stopword filter and the stemmer as explicit immutable state;
/// construct one per configuration rather than sharing globals.
pub struct TokenNormalizer {
    filter: StopwordFilter,
    stemmer: Stemmer,
}

impl Default for TokenNormalizer {
    fn default() -> Self {
        Self::new(StopwordFilter::default())
    }
}

impl TokenNormalizer {
    /// Creates a normalizer with the given stopword filter and the
    /// standard English stemmer.
    pub fn new(filter: StopwordFilter) -> Self {
        Self {
            filter,
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Normalizes one lowercase token.
    ///
    /// Returns `None` when the stopword filter drops the token. The filter
    /// runs on the *lemmatized* form, matching it against the lowercase
    /// stopword and preserved-term sets.
    pub fn normalize(&self, token: &str) -> Option<String> {
        let lemma = lemmatize(token);
        if self.filter.is_dropped(&lemma) {
            return None;
        }
        Some(self.stemmer.stem(&lemma).into_owned())
    }

    /// Normalizes a token sequence, preserving the order of survivors.
    pub fn normalize_all(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter_map(|token| self.normalize(token))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopwords_are_dropped() {
        let normalizer = TokenNormalizer::default();
        assert_eq!(normalizer.normalize("the"), None);
        assert_eq!(normalizer.normalize("and"), None);
    }

    #[test]
    fn preserved_names_survive() {
        let normalizer = TokenNormalizer::default();
        assert!(normalizer.normalize("romeo").is_some());
        assert!(normalizer.normalize("juliet").is_some());
        assert!(normalizer.normalize("verona").is_some());
    }

    #[test]
    fn lemmatization_happens_before_filtering() {
        // "apples" lemmatizes to "appl", which is not a stopword
        let normalizer = TokenNormalizer::default();
        assert!(normalizer.normalize("apples").is_some());
    }

    #[test]
    fn stemming_applies_after_filtering() {
        let normalizer = TokenNormalizer::default();
        // "beauty" stems to "beauti" under the English stemmer
        assert_eq!(normalizer.normalize("beauty").as_deref(), Some("beauti"));
    }

    #[test]
    fn sequence_order_is_preserved() {
        let normalizer = TokenNormalizer::default();
        let tokens: Vec<String> = ["the", "quick", "fox", "and", "hound"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let normalized = normalizer.normalize_all(&tokens);
        assert_eq!(normalized, vec!["quick", "fox", "hound"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let normalizer = TokenNormalizer::default();
        assert!(normalizer.normalize_all(&[]).is_empty());
    }
}
