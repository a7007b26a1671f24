//! Output format implementations for object serialization
//!
//! This module contains the canonical lison renderer and the inspection formats:
//! - `lison` - canonical text, the inverse of the parser
//! - `tag` - XML-like tags mirroring the tree
//! - `treeviz` - one line per node with tree connectors
//! - `data` - JSON and YAML through serde

pub mod data;
pub mod lison;
pub mod registry;
pub mod tag;
pub mod treeviz;

pub use data::{JsonFormatter, YamlFormatter};
pub use self::lison::{render, LisonFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use tag::{serialize_object as serialize_ast_tag, TagFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
