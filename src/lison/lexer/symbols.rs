//! Symbol definitions for the lison format
//!
//! This module defines all the symbols that can be produced by the lison lexer.
//! The symbols are defined using the logos derive macro. Each pattern matches a
//! single character and the patterns are disjoint, so any input is covered.
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All possible symbols in the lison format
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum Symbol {
    #[token("'")]
    Quote,

    #[token("(")]
    LeftParen,

    #[token(")")]
    RightParen,

    // Only space, tab and newline separate terms; `\r` is an ordinary character
    #[regex(r"[ \t\n]")]
    Whitespace,

    #[regex(r"[0-9]", first_char)]
    Digit(char),

    // Catch-all for every other single character
    #[regex(r"[^'() \t\n0-9]", first_char)]
    Char(char),
}

fn first_char(lex: &mut logos::Lexer<Symbol>) -> Option<char> {
    lex.slice().chars().next()
}

impl Symbol {
    /// The character this symbol stands for.
    ///
    /// Whitespace has no memory of which blank it came from and reads back as a
    /// single space.
    pub fn as_char(&self) -> char {
        match self {
            Symbol::Quote => '\'',
            Symbol::LeftParen => '(',
            Symbol::RightParen => ')',
            Symbol::Whitespace => ' ',
            Symbol::Digit(c) | Symbol::Char(c) => *c,
        }
    }

    /// Check if this symbol is whitespace
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Symbol::Whitespace)
    }

    /// Check if this symbol is a decimal digit
    pub fn is_digit(&self) -> bool {
        matches!(self, Symbol::Digit(_))
    }

    /// Check if this symbol is the given plain character
    pub fn is_char(&self, expected: char) -> bool {
        matches!(self, Symbol::Char(c) if *c == expected)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Quote => write!(f, "<quote>"),
            Symbol::LeftParen => write!(f, "<left-paren>"),
            Symbol::RightParen => write!(f, "<right-paren>"),
            Symbol::Whitespace => write!(f, "<whitespace>"),
            Symbol::Digit(c) => write!(f, "<digit:{c}>"),
            Symbol::Char(c) => write!(f, "<char:{}>", c.escape_default()),
        }
    }
}
