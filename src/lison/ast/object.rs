//! The lison object tree
//!
//! An [`Object`] is one parsed term: a literal, an integer, a float, a keyword, a
//! list of objects, or the error sentinel left behind by a failed parse.

use crate::lison::formats::lison::render;
use crate::lison::mapping::Lison;
use serde::Serialize;
use std::fmt;

/// The closed set of payloads an object can carry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub(crate) enum Term {
    Literal(String),
    Integer(i64),
    Float(f64),
    Keyword(String),
    List(Vec<Object>),
    Error,
}

/// Discriminant of an [`Object`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Literal,
    Integer,
    Float,
    Keyword,
    List,
    Error,
}

impl ObjectKind {
    /// Lowercase name used by the inspection formats
    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::Literal => "literal",
            ObjectKind::Integer => "integer",
            ObjectKind::Float => "float",
            ObjectKind::Keyword => "keyword",
            ObjectKind::List => "list",
            ObjectKind::Error => "error",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One node of the lison tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Object {
    term: Term,
}

impl Object {
    fn new(term: Term) -> Self {
        Object { term }
    }

    pub(crate) fn term(&self) -> &Term {
        &self.term
    }

    // ------------------------------------------------------------------
    // Factories
    // ------------------------------------------------------------------

    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(Term::Literal(text.into()))
    }

    pub fn integer(value: i64) -> Self {
        Self::new(Term::Integer(value))
    }

    pub fn float(value: f64) -> Self {
        Self::new(Term::Float(value))
    }

    /// A keyword; `name` is stored without the leading `:`
    pub fn keyword(name: impl Into<String>) -> Self {
        Self::new(Term::Keyword(name.into()))
    }

    /// An empty list, ready for [`Object::append`]
    pub fn list() -> Self {
        Self::new(Term::List(Vec::new()))
    }

    /// The error sentinel
    pub fn error() -> Self {
        Self::new(Term::Error)
    }

    /// Build an object from anything implementing the mapping trait
    pub fn from_lison<T: Lison + ?Sized>(value: &T) -> Self {
        value.revert()
    }

    /// Build an object from an arbitrary value with a caller-supplied conversion
    pub fn from_value<T, F>(value: &T, convert: F) -> Self
    where
        F: FnOnce(&T) -> Object,
    {
        convert(value)
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Append a child at the end of a list. Does nothing on other variants.
    pub fn append(&mut self, child: Object) {
        if let Term::List(children) = &mut self.term {
            children.push(child);
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn kind(&self) -> ObjectKind {
        match self.term {
            Term::Literal(_) => ObjectKind::Literal,
            Term::Integer(_) => ObjectKind::Integer,
            Term::Float(_) => ObjectKind::Float,
            Term::Keyword(_) => ObjectKind::Keyword,
            Term::List(_) => ObjectKind::List,
            Term::Error => ObjectKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.term, Term::Error)
    }

    /// Call `f` once per child, in order. Does nothing on non-list objects.
    pub fn for_each_child<F>(&self, mut f: F)
    where
        F: FnMut(&Object),
    {
        if let Term::List(children) = &self.term {
            for child in children {
                f(child);
            }
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match &self.term {
            Term::Literal(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self.term {
            Term::Integer(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self.term {
            Term::Float(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_keyword(&self) -> Option<&str> {
        match &self.term {
            Term::Keyword(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_children(&self) -> Option<&[Object]> {
        match &self.term {
            Term::List(children) => Some(children),
            _ => None,
        }
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::integer(value)
    }
}

impl From<f64> for Object {
    fn from(value: f64) -> Self {
        Object::float(value)
    }
}

impl From<&str> for Object {
    fn from(text: &str) -> Self {
        Object::literal(text)
    }
}

impl From<String> for Object {
    fn from(text: String) -> Self {
        Object::literal(text)
    }
}

impl From<Vec<Object>> for Object {
    fn from(children: Vec<Object>) -> Self {
        Object::new(Term::List(children))
    }
}

impl FromIterator<Object> for Object {
    fn from_iter<I: IntoIterator<Item = Object>>(iter: I) -> Self {
        Object::from(iter.into_iter().collect::<Vec<_>>())
    }
}

/// Canonical lison text, identical to [`render`]
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
