//! Implementation of the lison lexer
//!
//! This module provides convenience functions for tokenizing lison text.
//! The actual classification is handled entirely by logos.

use crate::lison::lexer::symbols::Symbol;
use logos::Logos;
use std::ops::Range;

/// Iterator over the symbols of a source string
pub struct LisonLexer<'source> {
    inner: logos::Lexer<'source, Symbol>,
}

impl<'source> LisonLexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            inner: Symbol::lexer(source),
        }
    }

    /// Byte span of the most recently produced symbol
    pub fn span(&self) -> Range<usize> {
        self.inner.span()
    }
}

impl Iterator for LisonLexer<'_> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Symbol> {
        // Every character matches exactly one pattern, so logos never reports an
        // error here; skipping them keeps the iterator total regardless.
        loop {
            match self.inner.next()? {
                Ok(symbol) => return Some(symbol),
                Err(()) => continue,
            }
        }
    }
}

/// Convenience function to tokenize a string and collect all symbols
pub fn tokenize(source: &str) -> Vec<Symbol> {
    LisonLexer::new(source).collect()
}

/// Convenience function to tokenize a string and collect symbols with their byte spans
pub fn tokenize_with_spans(source: &str) -> Vec<(Symbol, Range<usize>)> {
    let mut lexer = LisonLexer::new(source);
    let mut symbols = Vec::new();

    while let Some(symbol) = lexer.next() {
        symbols.push((symbol, lexer.span()));
    }

    symbols
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_list_tokenization() {
        let symbols = tokenize("(1 :k)");
        assert_eq!(
            symbols,
            vec![
                Symbol::LeftParen,
                Symbol::Digit('1'),
                Symbol::Whitespace,
                Symbol::Char(':'),
                Symbol::Char('k'),
                Symbol::RightParen,
            ]
        );
    }

    #[test]
    fn test_literal_tokenization() {
        let symbols = tokenize("'a b'");
        assert_eq!(
            symbols,
            vec![
                Symbol::Quote,
                Symbol::Char('a'),
                Symbol::Whitespace,
                Symbol::Char('b'),
                Symbol::Quote,
            ]
        );
    }

    #[test]
    fn test_float_tokenization() {
        let symbols = tokenize("2.5");
        assert_eq!(
            symbols,
            vec![Symbol::Digit('2'), Symbol::Char('.'), Symbol::Digit('5')]
        );
    }

    #[test]
    fn test_one_symbol_per_character() {
        let source = "( 'x\ty'\n-12.0 :kw ) é";
        assert_eq!(tokenize(source).len(), source.chars().count());
    }

    #[test]
    fn test_empty_input() {
        let symbols = tokenize("");
        assert_eq!(symbols, vec![]);
    }

    #[test]
    fn test_tokenize_with_spans() {
        let symbols = tokenize_with_spans("(é)");
        assert_eq!(
            symbols,
            vec![
                (Symbol::LeftParen, 0..1),
                (Symbol::Char('é'), 1..3),
                (Symbol::RightParen, 3..4),
            ]
        );
    }
}
