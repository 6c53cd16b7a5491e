//! The analysis operation and its immutable result.
//!
//! [`Analyzer::analyze`] runs the full pipeline over one [`Document`] and
//! returns an [`AnalysisResult`] owning every derived statistic. Analysis
//! is a pure operation: the analyzer holds only immutable configuration,
//! the result never changes after construction, and re-analyzing changed
//! text means calling `analyze` on a new document. Independently built
//! analyzers share nothing, so documents can be processed on separate
//! threads without synchronization.

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use stylo_types::{Document, TermCount};

use crate::analyzer::entities::{EntityExtractor, DEFAULT_BLACKLIST};
use crate::analyzer::ngram::{count_ngrams, Ngram, DEFAULT_NGRAM_SIZE};
use crate::analyzer::normalizer::TokenNormalizer;
use crate::analyzer::stopwords::{english_stopwords, StopwordFilter, DEFAULT_PRESERVED};
use crate::analyzer::tokenizer::tokenize_lower;

/// Configuration for an [`Analyzer`].
///
/// Every word list the pipeline consults lives here as an explicit value.
/// The defaults reproduce the standard setup: English stopwords, the
/// corpus names preserved, the common capitalized function words
/// blacklisted, trigram windows.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Width of the n-gram window (default 3).
    pub ngram_size: usize,
    /// Stopword list, lowercase.
    pub stopwords: Vec<String>,
    /// Terms that survive stopword filtering, lowercase.
    pub preserved_terms: Vec<String>,
    /// Capitalized surface forms excluded from entity extraction.
    pub entity_blacklist: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            ngram_size: DEFAULT_NGRAM_SIZE,
            stopwords: english_stopwords(),
            preserved_terms: DEFAULT_PRESERVED.iter().map(|s| s.to_string()).collect(),
            entity_blacklist: DEFAULT_BLACKLIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Runs the stylometric pipeline over documents.
pub struct Analyzer {
    ngram_size: usize,
    normalizer: TokenNormalizer,
    entities: EntityExtractor,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl Analyzer {
    /// Builds an analyzer from explicit configuration.
    pub fn new(config: AnalyzerConfig) -> Self {
        let filter = StopwordFilter::from_lists(config.stopwords, config.preserved_terms);
        Self {
            ngram_size: config.ngram_size,
            normalizer: TokenNormalizer::new(filter),
            entities: EntityExtractor::new(config.entity_blacklist),
        }
    }

    /// Analyzes one document, eagerly computing every derived statistic.
    ///
    /// Zero-token input is not an error: it yields empty frequency and
    /// entity structures and a summary reporting zero counts.
    pub fn analyze(&self, document: &Document) -> AnalysisResult {
        let tokens = tokenize_lower(document.raw_text());
        let raw_token_count = tokens.len();

        let normalized = self.normalizer.normalize_all(&tokens);
        debug!(
            "{}: {} raw tokens, {} after normalization",
            document.name(),
            raw_token_count,
            normalized.len()
        );

        let entities = self.entities.extract(document.raw_text());
        let token_freq = count_tokens(&normalized);
        let ngram_freq = count_ngrams(&normalized, self.ngram_size);

        AnalysisResult {
            name: document.name().to_string(),
            ngram_size: self.ngram_size,
            raw_token_count,
            normalized,
            entities,
            token_freq,
            ngram_freq,
        }
    }
}

/// Counts occurrences of each distinct normalized token.
fn count_tokens(tokens: &[String]) -> FxHashMap<String, u32> {
    let mut counts: FxHashMap<String, u32> = FxHashMap::default();
    for token in tokens {
        match counts.get_mut(token.as_str()) {
            Some(count) => *count += 1,
            None => {
                counts.insert(token.clone(), 1);
            }
        }
    }
    counts
}

/// Immutable statistics derived from one document.
///
/// Computed once by [`Analyzer::analyze`]; the accessors never recompute
/// or mutate anything.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    name: String,
    ngram_size: usize,
    raw_token_count: usize,
    normalized: Vec<String>,
    entities: FxHashSet<String>,
    token_freq: FxHashMap<String, u32>,
    ngram_freq: FxHashMap<Ngram, u32>,
}

impl AnalysisResult {
    /// The analyzed document's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width of the n-gram window this result was computed with.
    pub fn ngram_size(&self) -> usize {
        self.ngram_size
    }

    /// Number of raw word tokens before normalization.
    pub fn raw_token_count(&self) -> usize {
        self.raw_token_count
    }

    /// The normalized token sequence, in document order.
    pub fn normalized_tokens(&self) -> &[String] {
        &self.normalized
    }

    /// Distinct capitalized surface forms found in the raw text.
    pub fn entities(&self) -> &FxHashSet<String> {
        &self.entities
    }

    /// Entity surface forms in lexicographic order, for stable display.
    pub fn sorted_entities(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.entities.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted
    }

    /// The `n` highest-count normalized tokens.
    ///
    /// Returns at most `n` entries (never more than there are distinct
    /// tokens), ordered by count descending, ties broken by token
    /// ascending. The tie-break is part of the contract: equal inputs
    /// always produce identical listings.
    pub fn top_tokens(&self, n: usize) -> Vec<TermCount> {
        top_k(&self.token_freq, n)
            .into_iter()
            .map(|(term, count)| TermCount::new(term, count))
            .collect()
    }

    /// The `k` highest-count n-grams, with the same ordering contract as
    /// [`top_tokens`](Self::top_tokens) (lexicographic over the tuple).
    pub fn top_ngrams(&self, k: usize) -> Vec<(Ngram, u32)> {
        top_k(&self.ngram_freq, k)
    }

    /// Number of distinct n-gram keys this result shares with `other`.
    ///
    /// Shared high-frequency n-grams across texts are the core signal for
    /// arguing common authorship.
    pub fn shared_ngrams(&self, other: &Self) -> usize {
        let (small, large) = if self.ngram_freq.len() <= other.ngram_freq.len() {
            (&self.ngram_freq, &other.ngram_freq)
        } else {
            (&other.ngram_freq, &self.ngram_freq)
        };
        small.keys().filter(|k| large.contains_key(*k)).count()
    }

    /// Jaccard similarity of the two results' distinct n-gram sets.
    ///
    /// Returns 0.0 when both sets are empty.
    pub fn ngram_jaccard(&self, other: &Self) -> f64 {
        let shared = self.shared_ngrams(other);
        let union = self.ngram_freq.len() + other.ngram_freq.len() - shared;
        if union == 0 {
            0.0
        } else {
            shared as f64 / union as f64
        }
    }
}

/// Extracts the `k` highest-count entries from a frequency map.
///
/// Order: count descending, then key ascending.
fn top_k<K: Clone + Ord>(freq: &FxHashMap<K, u32>, k: usize) -> Vec<(K, u32)> {
    let mut entries: Vec<(K, u32)> = freq.iter().map(|(key, &c)| (key.clone(), c)).collect();
    entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(k);
    entries
}
