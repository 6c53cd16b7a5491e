//! Text analysis pipeline stages.
//!
//! This module provides the per-stage components:
//! - **Tokenizer**: extracts alphabetic word tokens from raw text
//! - **Lemmatizer**: rule-based suffix reduction to approximate base forms
//! - **Stopwords**: filtering with a preserved-terms allow-list
//! - **Normalizer**: lemmatize → filter → stem, composed per token
//! - **Entities**: capitalized-word heuristics over the raw text
//! - **Ngram**: sliding-window n-gram counting over normalized tokens

pub mod entities;
pub mod lemmatizer;
pub mod ngram;
pub mod normalizer;
pub mod stopwords;
pub mod tokenizer;

pub use entities::EntityExtractor;
pub use lemmatizer::lemmatize;
pub use ngram::{count_ngrams, for_each_ngram, Ngram};
pub use normalizer::TokenNormalizer;
pub use stopwords::StopwordFilter;
