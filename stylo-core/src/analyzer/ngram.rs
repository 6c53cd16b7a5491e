//! Sliding-window n-gram counting.
//!
//! Extracts every contiguous window of N tokens (sliding by 1) from the
//! normalized token sequence and counts occurrences per ordered N-tuple.
//! For a sequence of length L, exactly `max(0, L - N + 1)` windows are
//! observed; a sequence shorter than N yields an empty map, not an error.
//!
//! The default window width is 3 (trigrams), which is where local
//! stylistic patterns show up for authorship comparison.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Default n-gram width.
pub const DEFAULT_NGRAM_SIZE: usize = 3;

/// An ordered tuple of consecutive normalized tokens.
///
/// Backed by a `SmallVec` sized so the default trigram key needs no
/// separate heap allocation for its spine.
pub type Ngram = SmallVec<[String; 3]>;

/// Visits every width-`n` window of `tokens` in order.
///
/// Emits nothing when `n` is zero or the sequence is shorter than `n`.
#[inline]
pub fn for_each_ngram<'a, F>(tokens: &'a [String], n: usize, mut callback: F)
where
    F: FnMut(&'a [String]),
{
    if n == 0 || tokens.len() < n {
        return;
    }
    for window in tokens.windows(n) {
        callback(window);
    }
}

/// Number of windows a sequence of length `len` produces for width `n`.
#[inline]
pub fn ngram_count(len: usize, n: usize) -> usize {
    if n == 0 || len < n {
        0
    } else {
        len - n + 1
    }
}

/// Counts occurrences of each distinct width-`n` window in `tokens`.
pub fn count_ngrams(tokens: &[String], n: usize) -> FxHashMap<Ngram, u32> {
    let mut counts: FxHashMap<Ngram, u32> = FxHashMap::default();
    for_each_ngram(tokens, n, |window| {
        // Look up by slice first so repeated windows clone no strings
        match counts.get_mut(window) {
            Some(count) => *count += 1,
            None => {
                counts.insert(window.iter().cloned().collect(), 1);
            }
        }
    });
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn window_arithmetic() {
        assert_eq!(ngram_count(5, 3), 3);
        assert_eq!(ngram_count(3, 3), 1);
        assert_eq!(ngram_count(2, 3), 0);
        assert_eq!(ngram_count(0, 3), 0);
        assert_eq!(ngram_count(5, 0), 0);
    }

    #[test]
    fn short_sequence_yields_empty_map() {
        let counts = count_ngrams(&toks(&["a", "b"]), 3);
        assert!(counts.is_empty());
    }

    #[test]
    fn total_observations_match_window_count() {
        let tokens = toks(&["a", "b", "a", "b", "a"]);
        let counts = count_ngrams(&tokens, 3);
        let total: u32 = counts.values().sum();
        assert_eq!(total as usize, ngram_count(tokens.len(), 3));
    }

    #[test]
    fn repeated_windows_accumulate() {
        let tokens = toks(&["x", "y", "z", "x", "y", "z"]);
        let counts = count_ngrams(&tokens, 3);
        let key: Ngram = toks(&["x", "y", "z"]).into_iter().collect();
        assert_eq!(counts.get(&key).copied(), Some(2));
    }

    #[test]
    fn order_within_window_matters() {
        let counts = count_ngrams(&toks(&["a", "b", "b", "a"]), 2);
        let ab: Ngram = toks(&["a", "b"]).into_iter().collect();
        let ba: Ngram = toks(&["b", "a"]).into_iter().collect();
        assert_eq!(counts.get(&ab).copied(), Some(1));
        assert_eq!(counts.get(&ba).copied(), Some(1));
    }

    #[test]
    fn non_default_width() {
        let tokens = toks(&["a", "b", "c", "d"]);
        let counts = count_ngrams(&tokens, 2);
        assert_eq!(counts.len(), 3);
        let counts = count_ngrams(&tokens, 4);
        assert_eq!(counts.len(), 1);
    }
}
