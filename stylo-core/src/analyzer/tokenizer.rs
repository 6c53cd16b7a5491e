//! Streaming word tokenizer.
//!
//! Splits raw text into word tokens for the analysis pipeline. A token is a
//! maximal run of ASCII letters (`a`-`z`, `A`-`Z`); digits, punctuation,
//! whitespace and non-ASCII bytes are separators and never appear inside a
//! token. The scan is purely lexical — it knows nothing about sentence
//! boundaries.
//!
//! ## What It Does
//!
//! Given raw input like `"Hello, World! 123"`, it emits each word with its
//! ordinal position, surface case preserved:
//!
//! ```ignore
//! ("Hello", 0)
//! ("World", 1)
//! ```
//!
//! ## Key Features
//!
//! - **Zero allocation**: emitted tokens are slices of the original string
//! - **Streaming**: a callback receives tokens, no intermediate collection
//! - **Case preserving**: the entity extractor needs the raw surface form;
//!   [`tokenize_lower`] materializes the lowercased stream the frequency
//!   pipeline works on
//!
//! ## Usage
//!
//! ```
//! use stylo_core::analyzer::tokenizer::tokenize_lower;
//!
//! let tokens = tokenize_lower("Hello, World! 123");
//! assert_eq!(tokens, vec!["hello".to_string(), "world".to_string()]);
//! ```

#[inline(always)]
const fn is_ascii_letter(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'A'..=b'Z')
}

/// Scans `text` and emits each maximal ASCII-letter run via `emit`.
///
/// The callback receives `(token, position)` where `token` is a slice of
/// the original input (surface case preserved) and `position` is the
/// ordinal index of the token in left-to-right order. Empty input emits
/// nothing. After emitting a token at position `u32::MAX`, further
/// emissions stop (overflow protection).
#[inline]
pub fn for_each_word<'a, F>(text: &'a str, mut emit: F)
where
    F: FnMut(&'a str, u32),
{
    let bytes = text.as_bytes();
    let mut start: Option<usize> = None;
    let mut pos = 0u32;

    for (i, &b) in bytes.iter().enumerate() {
        if is_ascii_letter(b) {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            // Runs consist solely of ASCII letters, so both endpoints are
            // char boundaries and the slice is always valid UTF-8.
            emit(&text[s..i], pos);
            if pos == u32::MAX {
                return;
            }
            pos += 1;
        }
    }

    if let Some(s) = start {
        emit(&text[s..], pos);
    }
}

/// Materializes the lowercased token sequence for `text`.
///
/// Token order matches the order of each token's first character in the
/// raw text. This is the input to the normalization pipeline.
pub fn tokenize_lower(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for_each_word(text, |word, _| tokens.push(word.to_ascii_lowercase()));
    tokens
}

/// Counts word tokens without materializing them.
pub fn count_words(text: &str) -> usize {
    let mut count = 0usize;
    for_each_word(text, |_, _| count += 1);
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<(&str, u32)> {
        let mut out = Vec::new();
        for_each_word(input, |word, pos| out.push((word, pos)));
        out
    }

    #[test]
    fn basic_words() {
        assert_eq!(
            collect("Hello, World! 123"),
            vec![("Hello", 0), ("World", 1)]
        );
    }

    #[test]
    fn no_letters_yields_nothing() {
        assert!(collect("123 !!! ... 456").is_empty());
        assert!(collect("").is_empty());
    }

    #[test]
    fn digits_and_punctuation_split_runs() {
        assert_eq!(
            collect("abc123def-ghi"),
            vec![("abc", 0), ("def", 1), ("ghi", 2)]
        );
    }

    #[test]
    fn apostrophes_split() {
        // "don't" is two alphabetic runs; the apostrophe is a separator
        assert_eq!(collect("don't"), vec![("don", 0), ("t", 1)]);
    }

    #[test]
    fn non_ascii_is_a_separator() {
        // é is not an ASCII letter, so it splits the run
        assert_eq!(collect("café au lait"), vec![("caf", 0), ("au", 1), ("lait", 2)]);
    }

    #[test]
    fn token_at_end_of_input() {
        assert_eq!(collect("the end"), vec![("the", 0), ("end", 1)]);
    }

    #[test]
    fn lowercasing() {
        assert_eq!(
            tokenize_lower("The QUICK Fox"),
            vec!["the", "quick", "fox"]
        );
    }

    #[test]
    fn count_matches_emit() {
        let text = "one two three four";
        assert_eq!(count_words(text), tokenize_lower(text).len());
    }
}
