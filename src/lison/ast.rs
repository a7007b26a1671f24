//! AST definitions for the lison format
//!
//! This module provides the [`Object`] tree produced by the parser and consumed by
//! the formats. The payload of an object is only reachable through the typed
//! `as_*` accessors; callers that need to branch on the variant use
//! [`Object::kind`].

pub mod object;

pub use object::{Object, ObjectKind};
