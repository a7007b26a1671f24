//! Main module for lison library functionality
//!
//! The pipeline runs one direction for reading (text -> symbols -> object) and the
//! reverse for writing (object -> text):
//!
//! - `lexer` - classifies every input character into a [`lexer::Symbol`]
//! - `parser` - recursive descent over the symbols, producing an [`ast::Object`]
//! - `ast` - the object tree and its accessor contract
//! - `formats` - the canonical renderer plus inspection formats
//!
//! Around the core sit the mapping trait, storage collaborators, the processing
//! pipeline used by the binary and the fluent testing helpers.

pub mod ast;
pub mod formats;
pub mod lexer;
pub mod mapping;
pub mod parser;
pub mod processor;
pub mod storage;
pub mod testing;
