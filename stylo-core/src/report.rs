//! Human-readable per-document summaries.
//!
//! Presentation only: [`Summary`] borrows an [`AnalysisResult`] and
//! renders it through `fmt::Display`. No data-model state depends on
//! anything here, and the caller decides where the text goes.

use core::fmt;

use crate::analysis::AnalysisResult;

/// Default number of token entries in a summary.
pub const DEFAULT_TOP_TOKENS: usize = 20;
/// Default number of n-gram entries in a summary.
pub const DEFAULT_TOP_NGRAMS: usize = 10;

/// A formatted report over one analysis result.
///
/// Renders the document name header, raw token count, the sorted entity
/// list, the top token frequencies, and the top n-gram frequencies (each
/// n-gram as its tokens joined by single spaces).
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    result: &'a AnalysisResult,
    top_tokens: usize,
    top_ngrams: usize,
}

impl<'a> Summary<'a> {
    /// Creates a summary with the default limits (top 20 tokens, top 10
    /// n-grams).
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self::with_limits(result, DEFAULT_TOP_TOKENS, DEFAULT_TOP_NGRAMS)
    }

    /// Creates a summary with explicit entry limits.
    pub fn with_limits(result: &'a AnalysisResult, top_tokens: usize, top_ngrams: usize) -> Self {
        Self {
            result,
            top_tokens,
            top_ngrams,
        }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;

        writeln!(f, "=== {} ===", result.name())?;
        writeln!(f, "Total tokens (raw): {}", result.raw_token_count())?;

        let entities = result.sorted_entities();
        writeln!(
            f,
            "Unique named entities ({}): {}",
            entities.len(),
            entities.join(", ")
        )?;

        writeln!(f, "Top {} tokens (after processing):", self.top_tokens)?;
        for entry in result.top_tokens(self.top_tokens) {
            writeln!(f, "  {}: {}", entry.term, entry.count)?;
        }

        let label = if result.ngram_size() == 3 {
            "trigrams".to_string()
        } else {
            format!("{}-grams", result.ngram_size())
        };
        writeln!(f, "Top {} {}:", self.top_ngrams, label)?;
        for (ngram, count) in result.top_ngrams(self.top_ngrams) {
            writeln!(f, "  {}: {}", ngram.join(" "), count)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Analyzer;
    use stylo_types::Document;

    fn summarize(text: &str) -> String {
        let result = Analyzer::default().analyze(&Document::new("sample", text));
        Summary::new(&result).to_string()
    }

    #[test]
    fn header_and_counts() {
        let text = summarize("Romeo loves Juliet. Juliet loves Romeo.");
        assert!(text.starts_with("=== sample ==="));
        assert!(text.contains("Total tokens (raw): 6"));
    }

    #[test]
    fn entities_are_sorted() {
        let text = summarize("Verona. Juliet. Romeo.");
        assert!(text.contains("Unique named entities (3): Juliet, Romeo, Verona"));
    }

    #[test]
    fn empty_document_reports_zeros() {
        let text = summarize("");
        assert!(text.contains("Total tokens (raw): 0"));
        assert!(text.contains("Unique named entities (0):"));
    }

    #[test]
    fn trigram_lines_join_tokens_with_spaces() {
        let text = summarize("dagger poison tomb dagger poison tomb dagger poison tomb");
        assert!(text.contains("  dagger poison tomb: 3"));
    }

    #[test]
    fn non_default_width_changes_label() {
        let analyzer = Analyzer::new(crate::analysis::AnalyzerConfig {
            ngram_size: 2,
            ..Default::default()
        });
        let result = analyzer.analyze(&Document::new("sample", "dagger poison tomb"));
        let text = Summary::new(&result).to_string();
        assert!(text.contains("Top 10 2-grams:"));
    }
}
