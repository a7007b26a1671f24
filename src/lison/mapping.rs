//! Mapping between domain types and lison objects
//!
//! A type takes part in lison reading and writing by implementing [`Lison`]:
//! `absorb` fills the value from a parsed object and `revert` produces the object
//! that represents it. Text conversion in both directions comes for free.
//!
//! ```rust,ignore
//! struct Samples(Vec<f64>);
//!
//! impl Lison for Samples {
//!     fn absorb(&mut self, object: &Object) {
//!         self.0.clear();
//!         object.for_each_child(|child| self.0.push(child.as_float().unwrap_or(0.0)));
//!     }
//!
//!     fn revert(&self) -> Object {
//!         self.0.iter().copied().map(Object::float).collect()
//!     }
//! }
//! ```

use crate::lison::ast::Object;
use crate::lison::formats::render;
use crate::lison::parser::parse_source;

pub trait Lison {
    /// Populate `self` from an object.
    ///
    /// The object may be the error sentinel when the source text was malformed;
    /// implementations should fall back to default values rather than panic.
    fn absorb(&mut self, object: &Object);

    /// Produce the object representing `self`
    fn revert(&self) -> Object;

    /// Parse `source` and absorb the result
    fn deserialize(&mut self, source: &str) {
        let object = parse_source(source);
        self.absorb(&object);
    }

    /// Render the reverted object as canonical lison text
    fn serialize(&self) -> String {
        render(&self.revert())
    }
}

/// An object maps onto itself
impl Lison for Object {
    fn absorb(&mut self, object: &Object) {
        *self = object.clone();
    }

    fn revert(&self) -> Object {
        self.clone()
    }
}
