use super::config::{ScanConfig, TruncationPolicy};
use super::sink::TokenSink;
use super::token::{Span, Token};
use crate::error::{Error, Result};

/// Characters that always form a token on their own
pub const STRUCTURAL_CHARS: [char; 11] = ['[', ']', '{', '}', '(', ')', '\'', '`', '~', '^', '@'];

/// Non-whitespace characters that end an atom
pub const ATOM_DELIMITERS: [char; 11] = ['[', ']', '{', '}', '(', ')', '\'', '"', '`', ',', ';'];

/// Why a scan stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStop {
    /// Nothing but separators and comments remained
    Exhausted,
    /// No lexeme matched with input still remaining; the rest was dropped
    Truncated {
        /// Byte offset where the scan stopped
        offset: usize,
        /// Line number at the stop (1-indexed)
        line: usize,
        /// Column number at the stop (1-indexed)
        column: usize,
        /// Character at the stop offset
        found: char,
    },
}

impl ScanStop {
    /// Converts a truncation into its error, if this is one
    pub fn into_error(self) -> Option<Error> {
        match self {
            ScanStop::Exhausted => None,
            ScanStop::Truncated {
                offset,
                line,
                column,
                found,
            } => Some(Error::TruncatedInput {
                offset,
                line,
                column,
                found,
            }),
        }
    }
}

/// Result of running a scan to its stop condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    /// Number of tokens emitted
    pub emitted: usize,
    /// Bytes consumed, skipped separators and comments included
    pub consumed: usize,
    /// How the scan ended
    pub stop: ScanStop,
}

impl ScanSummary {
    /// True when input remained after the scan stopped
    pub fn is_truncated(&self) -> bool {
        matches!(self.stop, ScanStop::Truncated { .. })
    }
}

/// One match attempt at the scan position
enum Lexeme {
    /// Emittable token of the given byte length
    Token(usize),
    /// Line comment of the given byte length, discarded
    Comment(usize),
    /// Nothing matched; the scan stops here
    Empty,
}

/// Scanner for S-expression (LISP-style) syntax
///
/// Scans lazily: each call to [`Iterator::next`] skips separators and
/// comments and yields one token. Once the scan stops it stays stopped.
#[derive(Debug, Clone)]
pub struct SExprScanner<'src> {
    /// Source being scanned
    source: &'src str,
    /// Current byte position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
    /// Tokens emitted so far
    emitted: usize,
    /// Set once the stop condition fires
    stop: Option<ScanStop>,
}

impl<'src> SExprScanner<'src> {
    /// Creates a new S-expression scanner over source code
    pub fn new(source: &'src str) -> Self {
        SExprScanner {
            source,
            current: 0,
            line: 1,
            column: 1,
            emitted: 0,
            stop: None,
        }
    }

    /// Bytes consumed so far
    pub fn consumed(&self) -> usize {
        self.current
    }

    /// The stop condition, once the scan has reached it
    pub fn stop(&self) -> Option<ScanStop> {
        self.stop
    }

    /// Runs the scan to its stop condition, pushing every token into `sink`
    pub fn scan_into<S: TokenSink<'src>>(&mut self, mut sink: S) -> ScanSummary {
        for token in self.by_ref() {
            sink.push(token);
        }
        self.summary()
    }

    /// Runs the scan to its stop condition and collects the tokens
    pub fn scan_tokens(&mut self) -> Vec<Token<'src>> {
        let mut tokens = Vec::new();
        self.scan_into(&mut tokens);
        tokens
    }

    /// Summary of the scan; finishes the scan first if still running
    pub fn summary(&mut self) -> ScanSummary {
        let stop = loop {
            if let Some(stop) = self.stop {
                break stop;
            }
            self.next();
        };

        ScanSummary {
            emitted: self.emitted,
            consumed: self.current,
            stop,
        }
    }

    fn next_token(&mut self) -> Option<Token<'src>> {
        loop {
            self.skip_separators();

            match self.match_lexeme() {
                Lexeme::Comment(len) => self.advance(len),
                Lexeme::Token(len) => {
                    let start = self.current;
                    let (line, column) = (self.line, self.column);
                    self.advance(len);
                    self.emitted += 1;
                    return Some(Token::new(
                        &self.source[start..self.current],
                        Span::new(start, self.current),
                        line,
                        column,
                    ));
                }
                Lexeme::Empty => {
                    self.finish();
                    return None;
                }
            }
        }
    }

    fn finish(&mut self) {
        let stop = match self.rest().chars().next() {
            None => ScanStop::Exhausted,
            Some(found) => {
                tracing::debug!(
                    offset = self.current,
                    line = self.line,
                    column = self.column,
                    %found,
                    "scan truncated"
                );
                ScanStop::Truncated {
                    offset: self.current,
                    line: self.line,
                    column: self.column,
                    found,
                }
            }
        };

        tracing::trace!(emitted = self.emitted, consumed = self.current, "scan finished");
        self.stop = Some(stop);
    }

    /// Tries each alternative in priority order at the current position
    fn match_lexeme(&self) -> Lexeme {
        let rest = self.rest();

        if rest.starts_with("~@") {
            return Lexeme::Token(2);
        }

        let Some(c) = rest.chars().next() else {
            return Lexeme::Empty;
        };

        if STRUCTURAL_CHARS.contains(&c) {
            return Lexeme::Token(c.len_utf8());
        }

        if c == '"' {
            if let Some(len) = string_len(rest) {
                return Lexeme::Token(len);
            }
        }

        if c == ';' {
            return Lexeme::Comment(rest.find(is_line_terminator).unwrap_or(rest.len()));
        }

        match rest.find(is_atom_delimiter).unwrap_or(rest.len()) {
            0 => Lexeme::Empty,
            len => Lexeme::Token(len),
        }
    }

    fn skip_separators(&mut self) {
        let len = self
            .rest()
            .find(|c: char| !is_separator(c))
            .unwrap_or(self.rest().len());
        self.advance(len);
    }

    fn rest(&self) -> &'src str {
        &self.source[self.current..]
    }

    fn advance(&mut self, len: usize) {
        for c in self.source[self.current..self.current + len].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.current += len;
    }
}

impl<'src> Iterator for SExprScanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        if self.stop.is_some() {
            return None;
        }
        self.next_token()
    }
}

impl std::iter::FusedIterator for SExprScanner<'_> {}

/// Whitespace and commas separate tokens and are never emitted
fn is_separator(c: char) -> bool {
    is_whitespace(c) || c == ','
}

fn is_atom_delimiter(c: char) -> bool {
    is_whitespace(c) || ATOM_DELIMITERS.contains(&c)
}

/// ECMAScript whitespace: Unicode White_Space without U+0085, plus the BOM
fn is_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Ends a comment; cannot follow an escaping backslash
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Byte length of a complete string literal at the start of `rest`, if any
fn string_len(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices().skip(1);
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                let (_, escaped) = chars.next()?;
                if is_line_terminator(escaped) {
                    return None;
                }
            }
            '"' => return Some(i + 1),
            _ => {}
        }
    }
    None
}

/// Tokenizes `source`, stopping silently on malformed input
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    SExprScanner::new(source).scan_tokens()
}

/// Tokenizes `source` into `sink`, returning where and why the scan stopped
pub fn tokenize_into<'src, S: TokenSink<'src>>(source: &'src str, sink: S) -> ScanSummary {
    SExprScanner::new(source).scan_into(sink)
}

/// Tokenizes `source`, reporting early stops as [`Error::TruncatedInput`]
pub fn tokenize_strict(source: &str) -> Result<Vec<Token<'_>>> {
    tokenize_with(source, &ScanConfig::strict())
}

/// Tokenizes `source` under the given configuration
pub fn tokenize_with<'src>(source: &'src str, config: &ScanConfig) -> Result<Vec<Token<'src>>> {
    let mut tokens = Vec::new();
    let summary = tokenize_into(source, &mut tokens);

    match config.on_truncation {
        TruncationPolicy::Silent => Ok(tokens),
        TruncationPolicy::Error => match summary.stop.into_error() {
            Some(err) => Err(err),
            None => Ok(tokens),
        },
    }
}
