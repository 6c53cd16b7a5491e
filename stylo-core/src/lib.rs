//! # stylo-core — comparative stylometric analysis
//!
//! A batch pipeline over raw text producing the derived frequency
//! statistics used to argue common authorship between documents:
//!
//! 1. **Tokenizer** ([`analyzer::tokenizer`]): extracts lowercase alphabetic
//!    word tokens from raw text.
//! 2. **Normalizer** ([`analyzer::normalizer`]): per-token lemmatization,
//!    stopword filtering (with a preserved-terms allow-list), and stemming.
//! 3. **Entity extractor** ([`analyzer::entities`]): capitalized-word
//!    heuristics over the original, unlowered text.
//! 4. **Frequency aggregation** ([`analyzer::ngram`], [`analysis`]): token
//!    and sliding-window n-gram counts over the normalized sequence.
//! 5. **Reporting** ([`report`]): a human-readable per-document summary.
//!
//! The pipeline is exposed as a pure operation: [`Analyzer::analyze`] takes
//! a [`Document`] and returns an immutable [`AnalysisResult`]. All
//! configuration (n-gram width, stopword list, preserved terms, entity
//! blacklist) lives in an explicit [`AnalyzerConfig`] value — there is no
//! ambient global state, so independently configured analyzers never
//! interfere and every word list is swappable in tests.
//!
//! ## Example
//!
//! ```
//! use stylo_core::{Analyzer, AnalyzerConfig, Document};
//!
//! let analyzer = Analyzer::new(AnalyzerConfig::default());
//! let doc = Document::new("sample", "The Quick fox. The Quick Fox ran.");
//! let result = analyzer.analyze(&doc);
//!
//! assert_eq!(result.raw_token_count(), 7);
//! assert!(result.entities().contains("Quick"));
//! assert!(result.entities().contains("Fox"));
//! assert!(!result.entities().contains("The")); // blacklisted
//! ```

pub mod analysis;
pub mod analyzer;
pub mod corpus;
pub mod error;
pub mod report;

pub use analysis::{Analyzer, AnalyzerConfig, AnalysisResult};
pub use error::{Result, StyloError};
pub use report::Summary;
pub use stylo_types::{Document, TermCount};
