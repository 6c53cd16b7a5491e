//! Core types for the Stylo stylometric analysis toolkit.
//!
//! This crate provides the fundamental types that are shared across
//! the Stylo ecosystem. Keeping types separate ensures:
//!
//! - **Cross-crate compatibility**: Core and CLI share the same types
//! - **Clean boundaries**: No circular dependencies between crates
//! - **Zero dependencies**: These types pull in nothing else

#![warn(missing_docs)]

use core::fmt;

/// An immutable input text with a human-readable name.
///
/// A `Document` is the unit of analysis: one named body of raw text,
/// read fully into memory. It is never mutated after construction —
/// every derived statistic is computed from it by an analysis pass,
/// and re-analysis of changed text means building a new `Document`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    raw_text: String,
}

impl Document {
    /// Creates a document from a name and its full raw text.
    pub fn new(name: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_text: raw_text.into(),
        }
    }

    /// The document's display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw text, exactly as loaded. Surface case is preserved.
    #[inline]
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Length of the raw text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.raw_text.len()
    }

    /// Whether the raw text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw_text.is_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes)", self.name, self.raw_text.len())
    }
}

/// A term together with its occurrence count.
///
/// Results are ordered by count (descending), then by term (ascending).
/// The secondary lexicographic key makes top-k listings deterministic:
/// two runs over the same input always rank tied terms identically,
/// regardless of hash-map iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermCount {
    /// The normalized term.
    pub term: String,
    /// Number of occurrences.
    pub count: u32,
}

impl TermCount {
    /// Creates a new term/count pair.
    #[inline]
    pub fn new(term: impl Into<String>, count: u32) -> Self {
        Self {
            term: term.into(),
            count,
        }
    }
}

impl PartialOrd for TermCount {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TermCount {
    /// Rank ordering: sorting ascending yields display order.
    ///
    /// Primary: count (higher counts sort first).
    /// Secondary: term (lexicographic, for deterministic ties).
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        match other.count.cmp(&self.count) {
            core::cmp::Ordering::Equal => self.term.cmp(&other.term),
            ord => ord,
        }
    }
}

impl fmt::Display for TermCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.term, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_accessors() {
        let doc = Document::new("sample", "Two households, both alike in dignity");
        assert_eq!(doc.name(), "sample");
        assert!(doc.raw_text().starts_with("Two"));
        assert!(!doc.is_empty());
    }

    #[test]
    fn empty_document() {
        let doc = Document::new("blank", "");
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
    }

    #[test]
    fn term_count_ordering() {
        let a = TermCount::new("night", 9);
        let b = TermCount::new("love", 9); // Same count as a
        let c = TermCount::new("sun", 2);

        let mut ranked = vec![a.clone(), c.clone(), b.clone()];
        ranked.sort();

        // Higher count first; within a tie, lexicographic ascending
        assert_eq!(ranked, vec![b, a, c]);
    }
}
