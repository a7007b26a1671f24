//! Public API for the parser.

use crate::lison::ast::Object;
use crate::lison::lexer::{tokenize, Symbol};
use crate::lison::parser::parser::Parser;

/// Parse a lison object from a symbol stream
///
/// Returns the error sentinel when no well-formed object starts at the beginning
/// of the stream. Symbols left over after the first object are ignored.
pub fn parse(symbols: &[Symbol]) -> Object {
    Parser::new(symbols).parse()
}

/// Main parser function that takes source text and returns the parsed object
pub fn parse_source(source: &str) -> Object {
    let symbols = tokenize(source);
    parse(&symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_matches_parse_of_tokens() {
        let source = "(1 'two' :three)";
        assert_eq!(parse_source(source), parse(&tokenize(source)));
    }

    #[test]
    fn test_trailing_input_is_ignored() {
        assert_eq!(parse_source("1 2"), Object::integer(1));
        assert_eq!(parse_source("() )"), Object::list());
    }
}
