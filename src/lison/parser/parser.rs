//! Recursive-descent parser for the lison format
//!
//! The parser walks a borrowed symbol slice with a single cursor. Lists are
//! recognised by their opening paren; every other term is found by trying the
//! productions in a fixed order, each from the same starting position:
//!
//! 1. literal - the quote delimiter is unambiguous
//! 2. float - its prefix is an integer, so it must go before integer
//! 3. integer
//! 4. keyword - accepts nearly any run of characters, so it goes last
//!
//! A production either consumes a complete term or leaves the cursor where it
//! found it (see [`Parser::attempt`]). Only a failure of all alternatives turns
//! into the error object, and an error anywhere inside a list makes the whole
//! list an error.

use crate::lison::ast::Object;
use crate::lison::lexer::Symbol;

/// A saved cursor position to return to when a production fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Checkpoint(usize);

/// Parser over a symbol slice. Each value parses exactly one object.
#[derive(Debug)]
pub struct Parser<'a> {
    symbols: &'a [Symbol],
    cursor: usize,
    end: usize,
}

impl<'a> Parser<'a> {
    pub fn new(symbols: &'a [Symbol]) -> Self {
        Self {
            symbols,
            cursor: 0,
            end: symbols.len(),
        }
    }

    /// Parse the first object of the stream
    pub fn parse(mut self) -> Object {
        self.object()
    }

    // ------------------------------------------------------------------
    // Cursor primitives
    // ------------------------------------------------------------------

    fn peek(&self) -> Option<Symbol> {
        if self.cursor < self.end {
            self.symbols.get(self.cursor).copied()
        } else {
            None
        }
    }

    fn advance(&mut self) {
        if self.cursor < self.end {
            self.cursor += 1;
        }
    }

    fn at_end(&self) -> bool {
        self.cursor >= self.end
    }

    /// Whitespace, a closing paren or the end of input ends a bare term
    fn at_terminator(&self) -> bool {
        matches!(
            self.peek(),
            None | Some(Symbol::Whitespace) | Some(Symbol::RightParen)
        )
    }

    fn accept(&mut self, expected: Symbol) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn accept_char(&mut self, expected: char) -> bool {
        match self.peek() {
            Some(symbol) if symbol.is_char(expected) => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    /// Returns how many whitespace symbols were skipped
    fn skip_whitespace(&mut self) -> usize {
        let start = self.cursor;
        while self.accept(Symbol::Whitespace) {}
        self.cursor - start
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.cursor)
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.cursor = checkpoint.0;
    }

    /// Run a production, rewinding the cursor if it does not match
    fn attempt<F>(&mut self, production: F) -> Option<Object>
    where
        F: FnOnce(&mut Self) -> Option<Object>,
    {
        let checkpoint = self.checkpoint();
        let result = production(self);
        if result.is_none() {
            self.restore(checkpoint);
        }
        result
    }

    // ------------------------------------------------------------------
    // Productions
    // ------------------------------------------------------------------

    fn object(&mut self) -> Object {
        self.skip_whitespace();

        if self.peek() == Some(Symbol::LeftParen) {
            return self.list();
        }

        self.attempt(Self::literal)
            .or_else(|| self.attempt(Self::float))
            .or_else(|| self.attempt(Self::integer))
            .or_else(|| self.attempt(Self::keyword))
            .unwrap_or_else(Object::error)
    }

    fn list(&mut self) -> Object {
        if !self.accept(Symbol::LeftParen) {
            return Object::error();
        }
        self.skip_whitespace();

        let mut list = Object::list();
        if self.accept(Symbol::RightParen) {
            return list;
        }

        loop {
            let child = self.object();
            if child.is_error() {
                return Object::error();
            }
            list.append(child);

            let separated = self.skip_whitespace() > 0;
            if self.accept(Symbol::RightParen) {
                return list;
            }
            // Unclosed list, or two elements glued together
            if self.at_end() || !separated {
                return Object::error();
            }
        }
    }

    fn literal(&mut self) -> Option<Object> {
        if !self.accept(Symbol::Quote) {
            return None;
        }

        let mut text = String::new();
        loop {
            match self.peek()? {
                Symbol::Quote => {
                    self.advance();
                    return Some(Object::literal(text));
                }
                symbol => {
                    text.push(symbol.as_char());
                    self.advance();
                }
            }
        }
    }

    fn float(&mut self) -> Option<Object> {
        let mut text = String::new();
        self.sign(&mut text);
        if self.digits(&mut text) == 0 || !self.accept_char('.') {
            return None;
        }
        text.push('.');
        if self.digits(&mut text) == 0 || !self.at_terminator() {
            return None;
        }
        // Past the f64 range fails like integer overflow
        text.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Object::float)
    }

    fn integer(&mut self) -> Option<Object> {
        let mut text = String::new();
        self.sign(&mut text);
        if self.digits(&mut text) == 0 || !self.at_terminator() {
            return None;
        }
        // Out of i64 range fails like any other mismatch
        text.parse::<i64>().ok().map(Object::integer)
    }

    fn keyword(&mut self) -> Option<Object> {
        if !self.accept_char(':') {
            return None;
        }

        let mut name = String::new();
        while let Some(symbol) = self.peek().filter(|s| !s.is_whitespace()) {
            if symbol == Symbol::RightParen {
                break;
            }
            name.push(symbol.as_char());
            self.advance();
        }
        Some(Object::keyword(name))
    }

    fn sign(&mut self, text: &mut String) {
        if self.accept_char('-') {
            text.push('-');
        }
    }

    fn digits(&mut self, text: &mut String) -> usize {
        let mut count = 0;
        while let Some(Symbol::Digit(c)) = self.peek() {
            text.push(c);
            self.advance();
            count += 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lison::lexer::tokenize;

    fn parse_str(source: &str) -> Object {
        Parser::new(&tokenize(source)).parse()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(parse_str("()"), Object::list());
        assert_eq!(parse_str("(  \n )"), Object::list());
    }

    #[test]
    fn test_list_of_literals() {
        assert_eq!(
            parse_str("('a' 'b')"),
            Object::from(vec![Object::literal("a"), Object::literal("b")])
        );
    }

    #[test]
    fn test_tie_break_order() {
        assert_eq!(
            parse_str("(1 2.5 :k 'x')"),
            Object::from(vec![
                Object::integer(1),
                Object::float(2.5),
                Object::keyword("k"),
                Object::literal("x"),
            ])
        );
    }

    #[test]
    fn test_nested_lists() {
        assert_eq!(
            parse_str("((1) (() :a))"),
            Object::from(vec![
                Object::from(vec![Object::integer(1)]),
                Object::from(vec![Object::list(), Object::keyword("a")]),
            ])
        );
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(parse_str(" \t\n42"), Object::integer(42));
    }

    #[test]
    fn test_literal_normalizes_whitespace() {
        assert_eq!(parse_str("'a\tb\nc d'"), Object::literal("a b c d"));
    }

    #[test]
    fn test_literal_accepts_digits_and_parens() {
        assert_eq!(parse_str("'(1) :x'"), Object::literal("(1) :x"));
    }

    #[test]
    fn test_empty_literal() {
        assert_eq!(parse_str("''"), Object::literal(""));
    }

    #[test]
    fn test_unterminated_literal() {
        assert!(parse_str("'unterminated").is_error());
    }

    #[test]
    fn test_integer_needs_terminator() {
        assert_eq!(parse_str("12)"), Object::integer(12));
        assert!(parse_str("12a").is_error());
        assert!(parse_str("(12a)").is_error());
    }

    #[test]
    fn test_float_shapes() {
        assert_eq!(parse_str("0.5"), Object::float(0.5));
        assert_eq!(parse_str("10.25"), Object::float(10.25));
        assert!(parse_str("1.").is_error());
        assert!(parse_str(".5").is_error());
        assert!(parse_str("1.2.3").is_error());
    }

    #[test]
    fn test_negative_numbers() {
        assert_eq!(parse_str("-7"), Object::integer(-7));
        assert_eq!(parse_str("-0.5"), Object::float(-0.5));
        assert_eq!(
            parse_str("-9223372036854775808"),
            Object::integer(i64::MIN)
        );
        assert!(parse_str("-").is_error());
        assert!(parse_str("--1").is_error());
    }

    #[test]
    fn test_integer_overflow_is_error() {
        assert!(parse_str("9223372036854775808").is_error());
    }

    #[test]
    fn test_keyword_shapes() {
        assert_eq!(parse_str(":k"), Object::keyword("k"));
        assert_eq!(parse_str(":"), Object::keyword(""));
        assert_eq!(parse_str("(:)"), Object::from(vec![Object::keyword("")]));
        assert_eq!(parse_str(":a'b(c"), Object::keyword("a'b(c"));
        assert_eq!(parse_str(":12"), Object::keyword("12"));
    }

    #[test]
    fn test_bare_words_are_errors() {
        assert!(parse_str("word").is_error());
        assert!(parse_str("ERROR").is_error());
    }

    #[test]
    fn test_structural_errors() {
        assert!(parse_str("(").is_error());
        assert!(parse_str(")").is_error());
        assert!(parse_str("").is_error());
        assert!(parse_str("   ").is_error());
        assert!(parse_str("(1 2").is_error());
        assert!(parse_str("(1 ").is_error());
    }

    #[test]
    fn test_error_child_poisons_list() {
        assert!(parse_str("(1 bad 3)").is_error());
        assert!(parse_str("((1 (2 x)) 3)").is_error());
    }

    #[test]
    fn test_missing_separator_is_error() {
        assert!(parse_str("('a''b')").is_error());
        assert!(parse_str("(()())").is_error());
    }

    #[test]
    fn test_checkpoint_restores_cursor() {
        let symbols = tokenize("12");
        let mut parser = Parser::new(&symbols);
        let result = parser.attempt(Parser::float);
        assert!(result.is_none());
        assert_eq!(parser.cursor, 0);
        assert_eq!(parser.attempt(Parser::integer), Some(Object::integer(12)));
        assert_eq!(parser.cursor, 2);
    }
}
