//! Treeviz formatter for objects
//!
//! Treeviz is a visual representation of the object tree with one line per node,
//! which makes deep structures quick to scan.
//!
//! Nesting is drawn with box connectors, two columns per level:
//!
//! ```text
//! └─ list: 3 items
//!   ├─ integer: 1
//!   ├─ float: 2.5
//!   └─ list: 1 item
//!     └─ literal: hello world
//! ```
//!
//! Labels are truncated to 30 characters.

use super::lison::float_text;
use super::registry::{FormatError, Formatter};
use crate::lison::ast::object::Term;
use crate::lison::ast::Object;

const MAX_LABEL_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn display_label(object: &Object) -> String {
    match object.term() {
        Term::Literal(text) => text.clone(),
        Term::Integer(value) => value.to_string(),
        Term::Float(value) => float_text(*value),
        Term::Keyword(name) => format!(":{name}"),
        Term::List(children) if children.len() == 1 => "1 item".to_string(),
        Term::List(children) => format!("{} items", children.len()),
        Term::Error => "no valid term".to_string(),
    }
}

pub fn to_treeviz_str(object: &Object) -> String {
    let mut result = String::new();
    append_object(&mut result, object, "", true);
    result
}

fn append_object(result: &mut String, object: &Object, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let label = truncate(&display_label(object), MAX_LABEL_CHARS);

    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        object.kind(),
        label
    ));

    if let Some(children) = object.as_children() {
        let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        for (i, child) in children.iter().enumerate() {
            let is_last = i == children.len() - 1;
            append_object(result, child, &new_prefix, is_last);
        }
    }
}

/// Formatter for the treeviz format
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, object: &Object) -> Result<String, FormatError> {
        Ok(to_treeviz_str(object))
    }

    fn description(&self) -> &str {
        "One line per node with tree connectors"
    }
}
