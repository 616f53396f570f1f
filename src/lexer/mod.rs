//! Lexical analysis for S-expressions
//!
//! Converts source text into a stream of tokens for a downstream reader.

mod config;
mod sexpr_scanner;
mod sink;
mod token;

pub use config::{ScanConfig, TruncationPolicy};
pub use sexpr_scanner::{
    tokenize, tokenize_into, tokenize_strict, tokenize_with, SExprScanner, ScanStop, ScanSummary,
    ATOM_DELIMITERS, STRUCTURAL_CHARS,
};
pub use sink::{FnSink, TokenSink};
pub use token::{Span, Token, TokenKind};
