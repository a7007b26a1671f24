//! Canonical lison renderer
//!
//! Turns an object back into lison text. Every rendered term, at every nesting
//! level, is followed by exactly one space:
//!
//! ```text
//! ( 1 2.5 :k 'x' )
//! ```
//!
//! The output is not a byte-for-byte copy of whatever was parsed: whitespace is
//! normalized and literals are written verbatim (the notation has no escapes).
//! Parsing the rendering of a well-formed object gives back an equal object.

use super::registry::{FormatError, Formatter};
use crate::lison::ast::object::Term;
use crate::lison::ast::Object;

/// Render an object as canonical lison text
pub fn render(object: &Object) -> String {
    let mut output = String::new();
    write_object(object, &mut output);
    output
}

fn write_object(object: &Object, output: &mut String) {
    match object.term() {
        Term::Literal(text) => {
            output.push('\'');
            output.push_str(text);
            output.push('\'');
        }
        Term::Integer(value) => output.push_str(&value.to_string()),
        Term::Float(value) => output.push_str(&float_text(*value)),
        Term::Keyword(name) => {
            output.push(':');
            output.push_str(name);
        }
        Term::List(children) => {
            output.push_str("( ");
            for child in children {
                write_object(child, output);
            }
            output.push(')');
        }
        Term::Error => output.push_str("ERROR"),
    }
    output.push(' ');
}

/// Decimal text of a float that always contains a `.`
///
/// Rust prints the shortest text that reads back to the same value and never
/// switches to exponent notation, so whole values only need the `.0` suffix.
pub fn float_text(value: f64) -> String {
    let mut text = value.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// Formatter for the canonical lison text
pub struct LisonFormatter;

impl Formatter for LisonFormatter {
    fn name(&self) -> &str {
        "lison"
    }

    fn serialize(&self, object: &Object) -> Result<String, FormatError> {
        Ok(render(object))
    }

    fn description(&self) -> &str {
        "Canonical lison text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_scalars() {
        assert_eq!(render(&Object::literal("a b")), "'a b' ");
        assert_eq!(render(&Object::integer(-12)), "-12 ");
        assert_eq!(render(&Object::float(2.5)), "2.5 ");
        assert_eq!(render(&Object::keyword("k")), ":k ");
        assert_eq!(render(&Object::error()), "ERROR ");
    }

    #[test]
    fn test_render_lists() {
        assert_eq!(render(&Object::list()), "( ) ");

        let list = Object::from(vec![
            Object::integer(1),
            Object::from(vec![Object::keyword("x")]),
            Object::literal("y"),
        ]);
        assert_eq!(render(&list), "( 1 ( :x ) 'y' ) ");
    }

    #[test]
    fn test_float_text_always_has_point() {
        assert_eq!(float_text(3.0), "3.0");
        assert_eq!(float_text(-0.0), "-0.0");
        assert_eq!(float_text(0.1), "0.1");
        assert_eq!(float_text(1e21), "1000000000000000000000.0");
        assert_eq!(float_text(1e-7), "0.0000001");
    }

    #[test]
    fn test_display_is_render() {
        let object = Object::from(vec![Object::float(1.0)]);
        assert_eq!(object.to_string(), render(&object));
    }

    #[test]
    fn test_formatter() {
        let formatter = LisonFormatter;
        assert_eq!(formatter.name(), "lison");
        assert_eq!(formatter.serialize(&Object::integer(7)).unwrap(), "7 ");
    }
}
