//! Testing utilities for object assertions
//!
//! This module provides a fluent API for asserting on object trees,
//! making parser tests more readable and maintainable.
//!
//! # Example
//!
//! ```rust,ignore
//! use lison::lison::parser::parse_source;
//! use lison::lison::testing::assert_object;
//!
//! let object = parse_source("(1 'two' (:three))");
//!
//! assert_object(&object)
//!     .list()
//!     .child_count(3)
//!     .child(0, |c| { c.integer(1); })
//!     .child(1, |c| { c.literal("two"); })
//!     .child(2, |c| {
//!         c.list().child(0, |k| { k.keyword("three"); });
//!     });
//! ```
//!
//! Failures panic with the path of the offending node, e.g. `root[2][0]`.

mod assertions;
mod matchers;

pub use assertions::{assert_object, ListAssertion, ObjectAssertion};
pub use matchers::TextMatch;
