//! Parallel executor for batch tokenization
//!
//! Uses Rayon for work-stealing parallelism with a configurable thread count.
//! Each source is scanned by its own scanner, so no state is shared.

use crate::error::{Error, Result};
use crate::lexer::{tokenize_with, ScanConfig, Token};
use rayon::prelude::*;

/// Configuration for parallel tokenization
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Maximum number of worker threads (default: num_cpus)
    pub max_parallelism: usize,
    /// Per-source scan configuration
    pub scan: ScanConfig,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            max_parallelism: num_cpus::get(),
            scan: ScanConfig::default(),
        }
    }
}

/// Tokenizes every source in `sources` concurrently
///
/// # Returns
/// * `Ok(Vec<Vec<Token>>)` - One token list per source, in input order
/// * `Err(Error)` - The first truncation in input order (only under
///   `TruncationPolicy::Error`), or a thread pool failure
///
/// # Example
/// ```
/// use sexpr_tokenizer::parallel::{tokenize_batch, ParallelConfig};
///
/// let sources = ["(+ 1 2)", "[a b]"];
/// let batches = tokenize_batch(&sources, &ParallelConfig::default()).unwrap();
/// assert_eq!(batches[1].len(), 4);
/// ```
pub fn tokenize_batch<'src, S>(
    sources: &'src [S],
    config: &ParallelConfig,
) -> Result<Vec<Vec<Token<'src>>>>
where
    S: AsRef<str> + Sync,
{
    // Empty batch fast path
    if sources.is_empty() {
        return Ok(Vec::new());
    }

    // Single source - no parallelism needed
    if sources.len() == 1 {
        let tokens = tokenize_with(sources[0].as_ref(), &config.scan)?;
        return Ok(vec![tokens]);
    }

    let threads = config.max_parallelism.max(1).min(sources.len());
    tracing::debug!(sources = sources.len(), threads, "tokenizing batch");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| Error::ThreadPool(e.to_string()))?;

    let results: Vec<Result<Vec<Token<'src>>>> = pool.install(|| {
        sources
            .par_iter()
            .map(|source| tokenize_with(source.as_ref(), &config.scan))
            .collect()
    });

    results.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_tokenize_batch_basic() {
        let sources = vec![
            "(+ 1 2)".to_string(),
            "'(a b)".to_string(),
            "~@x".to_string(),
        ];

        let results = tokenize_batch(&sources, &ParallelConfig::default()).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(texts(&results[0]), vec!["(", "+", "1", "2", ")"]);
        assert_eq!(texts(&results[1]), vec!["'", "(", "a", "b", ")"]);
        assert_eq!(texts(&results[2]), vec!["~@", "x"]);
    }

    #[test]
    fn test_tokenize_batch_empty() {
        let sources: Vec<&str> = vec![];
        let results = tokenize_batch(&sources, &ParallelConfig::default()).unwrap();
        assert_eq!(results.len(), 0);
    }

    #[test]
    fn test_tokenize_batch_matches_sequential() {
        let sources: Vec<String> = (0..64)
            .map(|i| format!("(def x{} [{} \"s{}\"]) ; n{}", i, i, i, i))
            .collect();

        let config = ParallelConfig {
            max_parallelism: 4,
            ..Default::default()
        };
        let results = tokenize_batch(&sources, &config).unwrap();

        for (source, tokens) in sources.iter().zip(&results) {
            assert_eq!(tokens, &tokenize(source));
        }
    }

    #[test]
    fn test_tokenize_batch_silent_truncation() {
        let sources = ["(a \"b", "(c)"];
        let results = tokenize_batch(&sources, &ParallelConfig::default()).unwrap();
        assert_eq!(texts(&results[0]), vec!["(", "a"]);
        assert_eq!(texts(&results[1]), vec!["(", "c", ")"]);
    }

    #[test]
    fn test_tokenize_batch_strict_reports_first_error() {
        let sources = ["(ok)", "x \"one", "\"two"];

        let config = ParallelConfig {
            scan: ScanConfig::strict(),
            ..Default::default()
        };

        let err = tokenize_batch(&sources, &config).unwrap_err();
        assert_eq!(
            err,
            Error::TruncatedInput {
                offset: 2,
                line: 1,
                column: 3,
                found: '"',
            }
        );
    }

    #[test]
    fn test_tokenize_batch_single_strict() {
        let sources = ["\"open"];
        let config = ParallelConfig {
            scan: ScanConfig::strict(),
            max_parallelism: 1,
        };
        assert!(tokenize_batch(&sources, &config)
            .unwrap_err()
            .is_unterminated_string());
    }
}
