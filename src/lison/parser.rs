//! Parser module for the lison format
//!
//! This module contains the recursive-descent parser that turns the symbol
//! stream from the lexer into an [`Object`] tree.
//!
//! ## Testing
//!
//! Parser tests use the fluent assertions from the [testing module](crate::lison::testing)
//! to check the shape of the produced tree.

pub mod api;
#[allow(clippy::module_inception)]
pub mod parser;

pub use crate::lison::ast::{Object, ObjectKind};
pub use api::{parse, parse_source};
pub use parser::Parser;
