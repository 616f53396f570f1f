//! Destinations for scanned tokens
//!
//! The scanner pushes each token into a [`TokenSink`] the moment it is
//! recognized, so callers decide how tokens are stored.

use super::token::Token;

/// Receives tokens in scan order, one call per token
pub trait TokenSink<'src> {
    /// Accepts the next token
    fn push(&mut self, token: Token<'src>);
}

impl<'src> TokenSink<'src> for Vec<Token<'src>> {
    fn push(&mut self, token: Token<'src>) {
        Vec::push(self, token);
    }
}

/// Owned copies of the token texts, for containers that outlive the source
impl<'src> TokenSink<'src> for Vec<String> {
    fn push(&mut self, token: Token<'src>) {
        Vec::push(self, token.text.to_string());
    }
}

impl<'src, S: TokenSink<'src> + ?Sized> TokenSink<'src> for &mut S {
    fn push(&mut self, token: Token<'src>) {
        (**self).push(token);
    }
}

/// Adapts a closure into a sink
pub struct FnSink<F>(pub F);

impl<'src, F> TokenSink<'src> for FnSink<F>
where
    F: FnMut(Token<'src>),
{
    fn push(&mut self, token: Token<'src>) {
        (self.0)(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::token::Span;

    fn token(text: &str, start: usize) -> Token<'_> {
        Token::new(text, Span::new(start, start + text.len()), 1, start + 1)
    }

    #[test]
    fn test_vec_of_strings_copies_text() {
        let mut out: Vec<String> = Vec::new();
        TokenSink::push(&mut out, token("(", 0));
        TokenSink::push(&mut out, token("x", 1));
        assert_eq!(out, vec!["(".to_string(), "x".to_string()]);
    }

    fn feed<'s, S: TokenSink<'s>>(mut sink: S, tokens: Vec<Token<'s>>) {
        for t in tokens {
            sink.push(t);
        }
    }

    #[test]
    fn test_fn_sink_and_reborrow() {
        let mut seen = Vec::new();
        {
            let mut sink = FnSink(|t: Token<'_>| seen.push(t.span.start));
            feed(&mut sink, vec![token("a", 0)]);
            feed(&mut sink, vec![token("b", 2)]);
        }
        assert_eq!(seen, vec![0, 2]);
    }
}
