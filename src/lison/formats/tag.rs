//! XML-like AST tag serialization
//!
//! Serializes objects to an XML-like format that directly reflects the tree.
//!
//! ## Format
//!
//! - Object kind → tag name
//! - Scalar payload → text content
//! - List children → nested tags, two spaces deeper
//! - Empty lists and errors → self-closing tags
//!
//! ## Example
//!
//! ```text
//! <list>
//!   <integer>1</integer>
//!   <keyword>k</keyword>
//!   <list/>
//! </list>
//! ```

use super::lison::float_text;
use super::registry::{FormatError, Formatter};
use crate::lison::ast::object::Term;
use crate::lison::ast::Object;

/// Serialize an object to AST tag format
pub fn serialize_object(object: &Object) -> String {
    let mut lines = Vec::new();
    serialize_term(object, 0, &mut lines);
    lines.join("\n")
}

fn serialize_term(object: &Object, indent_level: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(indent_level);
    let tag = object.kind().name();

    match object.term() {
        Term::Literal(text) | Term::Keyword(text) => {
            lines.push(format!("{indent}<{tag}>{}</{tag}>", escape_xml(text)));
        }
        Term::Integer(value) => {
            lines.push(format!("{indent}<{tag}>{value}</{tag}>"));
        }
        Term::Float(value) => {
            lines.push(format!("{indent}<{tag}>{}</{tag}>", float_text(*value)));
        }
        Term::List(children) if children.is_empty() => {
            lines.push(format!("{indent}<{tag}/>"));
        }
        Term::List(children) => {
            lines.push(format!("{indent}<{tag}>"));
            for child in children {
                serialize_term(child, indent_level + 1, lines);
            }
            lines.push(format!("{indent}</{tag}>"));
        }
        Term::Error => {
            lines.push(format!("{indent}<{tag}/>"));
        }
    }
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Formatter for the AST tag format
pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, object: &Object) -> Result<String, FormatError> {
        Ok(serialize_object(object))
    }

    fn description(&self) -> &str {
        "XML-like tags mirroring the object tree"
    }
}
