//! Error types for the S-expression tokenizer

use thiserror::Error;

/// Tokenizer errors
///
/// The scan itself never fails: malformed input silently stops it. These
/// variants only surface when a caller opts into strict reporting or runs
/// a parallel batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Scan stopped before the end of input
    ///
    /// **Triggered by:** An unterminated string literal, or a string whose final
    /// backslash has nothing left to escape
    /// **Example:** `(print "hello` (no closing quote)
    /// **Note:** The offset is where the scan stopped; everything from there on was dropped
    #[error("Truncated input at line {line}, column {column}: scan stopped on '{found}' at byte {offset}")]
    TruncatedInput {
        /// Byte offset where the scan stopped
        offset: usize,
        /// Line number where the scan stopped (1-indexed)
        line: usize,
        /// Column number where the scan stopped (1-indexed)
        column: usize,
        /// Character at the stop offset
        found: char,
    },

    /// Rayon thread pool could not be built for a batch
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

impl Error {
    /// True when truncation happened on an opening string quote
    pub fn is_unterminated_string(&self) -> bool {
        matches!(self, Error::TruncatedInput { found: '"', .. })
    }
}

/// Result type for tokenizer operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_input_message() {
        let err = Error::TruncatedInput {
            offset: 7,
            line: 1,
            column: 8,
            found: '"',
        };

        assert_eq!(
            err.to_string(),
            "Truncated input at line 1, column 8: scan stopped on '\"' at byte 7"
        );
        assert!(err.is_unterminated_string());
    }

    #[test]
    fn test_thread_pool_is_not_unterminated_string() {
        let err = Error::ThreadPool("no threads".to_string());
        assert!(!err.is_unterminated_string());
        assert_eq!(err.to_string(), "Thread pool error: no threads");
    }
}
