//! Lexer module for the lison format
//!
//! This module contains the tokenization logic for the lison format,
//! including symbol definitions and the lexer implementation.
//!
//! Lexing is a plain per-character classification: every character of the input
//! produces exactly one symbol, so the lexer has no failure mode. Grouping digits
//! into numbers or characters into keywords is left to the parser, which is the
//! only place that knows which production it is trying.

pub mod lexer_impl;
pub mod symbols;

pub use lexer_impl::{tokenize, tokenize_with_spans, LisonLexer};
pub use symbols::Symbol;
