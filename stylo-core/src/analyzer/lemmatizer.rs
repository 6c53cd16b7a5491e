//! Rule-based suffix lemmatizer.
//!
//! Reduces a word to an approximate base form by pattern-matching on its
//! suffix — no dictionary, no part-of-speech knowledge. Exactly one rule
//! fires, in priority order:
//!
//! | rule | condition | result |
//! |------|-----------|--------|
//! | 1 | ends `ies`, len > 3 | strip `ies`, append `y` |
//! | 2 | ends `es` | strip `es` |
//! | 3 | ends `ed`, len > 4 | strip `ed` |
//! | 4 | ends `ing`, len > 5 | strip `ing` |
//! | 5 | ends `s`, len > 3 | strip `s` |
//! | 6 | otherwise | unchanged |
//!
//! The length thresholds keep short words intact ("is", "as"). There is no
//! double-consonant repair: "running" lemmatizes to "runn", and the
//! stemmer downstream is expected to finish the job.

use std::borrow::Cow;

/// Lemmatizes a single lowercase token.
///
/// Input is expected to be a lowercase ASCII word as produced by the
/// tokenizer; length thresholds are in bytes, which for ASCII input equals
/// characters.
///
/// # Examples
///
/// ```
/// use stylo_core::analyzer::lemmatizer::lemmatize;
///
/// assert_eq!(lemmatize("flies"), "fly");
/// assert_eq!(lemmatize("boxes"), "box");
/// assert_eq!(lemmatize("jumped"), "jump");
/// assert_eq!(lemmatize("running"), "runn"); // no double-consonant repair
/// assert_eq!(lemmatize("cats"), "cat");
/// assert_eq!(lemmatize("is"), "is"); // too short for the "s" rule
/// ```
pub fn lemmatize(word: &str) -> Cow<'_, str> {
    let len = word.len();

    if len > 3 {
        if let Some(base) = word.strip_suffix("ies") {
            let mut lemma = String::with_capacity(base.len() + 1);
            lemma.push_str(base);
            lemma.push('y');
            return Cow::Owned(lemma);
        }
    }
    if let Some(base) = word.strip_suffix("es") {
        return Cow::Borrowed(base);
    }
    if len > 4 {
        if let Some(base) = word.strip_suffix("ed") {
            return Cow::Borrowed(base);
        }
    }
    if len > 5 {
        if let Some(base) = word.strip_suffix("ing") {
            return Cow::Borrowed(base);
        }
    }
    if len > 3 {
        if let Some(base) = word.strip_suffix("s") {
            return Cow::Borrowed(base);
        }
    }

    Cow::Borrowed(word)
}
