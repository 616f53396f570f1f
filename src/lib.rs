//! # sexpr-tokenizer - Lexical Scanner for Lisp-Family Syntax
//!
//! Converts S-expression source text into the ordered token stream a reader
//! consumes to build lists, vectors, maps and atoms.
//!
//! ## Quick Start
//!
//! ```rust
//! use sexpr_tokenizer::tokenize;
//!
//! let tokens = tokenize("(def xs '[1 2 3]) ; comment");
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
//!
//! assert_eq!(texts, ["(", "def", "xs", "'", "[", "1", "2", "3", "]", ")"]);
//! ```
//!
//! ## Token Rules
//!
//! At each position, after skipping whitespace and commas, the first rule
//! that matches wins:
//!
//! - `~@` (unquote-splice)
//! - a single structural character: one of `[]{}()'~^@` or a backtick
//! - a complete double-quoted string, escapes kept verbatim; a backslash
//!   never escapes a line terminator
//! - a `;` comment up to the next `\n`, `\r`, U+2028 or U+2029 (discarded)
//! - an atom: the longest run of anything else
//!
//! Whitespace follows ECMAScript `\s`: U+FEFF separates tokens, U+0085
//! does not.
//!
//! Tokens are exact slices of the source. Nothing is classified during the
//! scan; [`Token::kind`] classifies a token afterwards if the reader wants it.
//!
//! ## Malformed Input
//!
//! An unterminated string stops the scan silently. The tokens before it are
//! kept and the rest of the input is dropped:
//!
//! ```rust
//! use sexpr_tokenizer::{tokenize, tokenize_strict, Scanner};
//!
//! assert_eq!(tokenize("(print \"oops").len(), 2);
//!
//! // The summary tells the reader where the scan stopped
//! let mut scanner = Scanner::new("(print \"oops");
//! let summary = scanner.summary();
//! assert!(summary.is_truncated());
//! assert_eq!(summary.consumed, 7);
//!
//! // Or ask for an error at the same point
//! assert!(tokenize_strict("(print \"oops").is_err());
//! ```
//!
//! ## Streaming Into a Sink
//!
//! ```rust
//! use sexpr_tokenizer::tokenize_into;
//!
//! let mut owned: Vec<String> = Vec::new();
//! let summary = tokenize_into("~@(rest)", &mut owned);
//!
//! assert_eq!(owned, ["~@", "(", "rest", ")"]);
//! assert_eq!(summary.emitted, 4);
//! ```
//!
//! ## License
//!
//! Licensed under the [MIT License](https://opensource.org/licenses/MIT).

/// Version of the tokenizer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parallel;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{
    tokenize, tokenize_into, tokenize_strict, tokenize_with, FnSink, SExprScanner, ScanConfig,
    ScanStop, ScanSummary, Span, Token, TokenKind, TokenSink, TruncationPolicy,
};
pub use parallel::{tokenize_batch, ParallelConfig};

/// Type alias for the S-expression scanner (lexer).
/// Converts raw source text into tokens for the reader.
pub type Scanner<'src> = SExprScanner<'src>;
