use serde::{Deserialize, Serialize};

/// Half-open byte range of a token within its source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset of the first byte
    pub start: usize,
    /// Byte offset one past the last byte
    pub end: usize,
}

impl Span {
    /// Creates a span covering `start..end`
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for a zero-length span
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A single token from the source code
///
/// The text is borrowed straight from the source buffer. Tokens carry no
/// type tag; see [`Token::kind`] for after-the-fact classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token<'src> {
    /// Exact source text of the token
    pub text: &'src str,
    /// Byte range of `text` in the source
    pub span: Span,
    /// Line number where token appears (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed, in chars)
    pub column: usize,
}

impl<'src> Token<'src> {
    /// Creates a new token with the given properties
    pub fn new(text: &'src str, span: Span, line: usize, column: usize) -> Self {
        Token {
            text,
            span,
            line,
            column,
        }
    }

    /// Classifies the token by its text
    pub fn kind(&self) -> TokenKind {
        TokenKind::of(self.text)
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.text)
    }
}

/// Reader-level classification of a token's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Unquote-splice marker (~@)
    SpliceUnquote,
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Left bracket [
    LeftBracket,
    /// Right bracket ]
    RightBracket,
    /// Left brace {
    LeftBrace,
    /// Right brace }
    RightBrace,
    /// Quote (')
    Quote,
    /// Backtick for quasi-quote (`)
    Backtick,
    /// Tilde for unquote (~)
    Tilde,
    /// Caret for metadata (^)
    Caret,
    /// At symbol for deref (@)
    At,
    /// Double-quoted string, quotes and escapes included verbatim
    String,
    /// Anything else: symbols, numbers, keywords
    Atom,
}

impl TokenKind {
    /// Classifies a token text
    pub fn of(text: &str) -> TokenKind {
        match text {
            "~@" => TokenKind::SpliceUnquote,
            "(" => TokenKind::LeftParen,
            ")" => TokenKind::RightParen,
            "[" => TokenKind::LeftBracket,
            "]" => TokenKind::RightBracket,
            "{" => TokenKind::LeftBrace,
            "}" => TokenKind::RightBrace,
            "'" => TokenKind::Quote,
            "`" => TokenKind::Backtick,
            "~" => TokenKind::Tilde,
            "^" => TokenKind::Caret,
            "@" => TokenKind::At,
            t if t.starts_with('"') => TokenKind::String,
            _ => TokenKind::Atom,
        }
    }

    /// True for the opening and closing brackets of lists, vectors and maps
    pub fn is_delimiter(&self) -> bool {
        matches!(
            self,
            TokenKind::LeftParen
                | TokenKind::RightParen
                | TokenKind::LeftBracket
                | TokenKind::RightBracket
                | TokenKind::LeftBrace
                | TokenKind::RightBrace
        )
    }

    /// True for the reader macro prefixes (', `, ~, ~@, ^, @)
    pub fn is_reader_macro(&self) -> bool {
        matches!(
            self,
            TokenKind::Quote
                | TokenKind::Backtick
                | TokenKind::Tilde
                | TokenKind::SpliceUnquote
                | TokenKind::Caret
                | TokenKind::At
        )
    }
}
