//! Error types for Stylo operations.
//!
//! The taxonomy is deliberately small: analysis itself cannot fail
//! (empty or degenerate input yields empty statistics, not an error),
//! so everything here is about getting source text into memory.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Stylo operations.
#[derive(Error, Debug)]
pub enum StyloError {
    /// Input file does not exist.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O failure while reading an input file.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the file that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Input file is not valid UTF-8.
    #[error("{path} is not valid UTF-8 (error at byte {valid_up_to})")]
    InvalidUtf8 {
        /// Path of the offending file.
        path: PathBuf,
        /// Byte offset of the first invalid sequence.
        valid_up_to: usize,
    },
}

/// Result type alias for Stylo operations.
pub type Result<T> = std::result::Result<T, StyloError>;
