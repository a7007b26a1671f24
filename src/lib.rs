//! # lison
//!
//! A parser and renderer for LiSON, a small lisp-flavoured notation for nested
//! data: quoted literals, integers, floats, `:keywords` and parenthesized lists.
//!
//! ```text
//! (:point (1 2.5) 'a label')
//! ```
//!
//! ## Testing
//!
//! For asserting on parsed trees, see the [testing module](lison::testing).

pub mod lison;

pub use lison::ast::{Object, ObjectKind};
pub use lison::formats::render;
pub use lison::lexer::{tokenize, Symbol};
pub use lison::mapping::Lison;
pub use lison::parser::{parse, parse_source};
