//! Format registry for object serialization
//!
//! Every output format implements [`Formatter`]. The processing pipeline and the
//! binary look formats up by name in [`FormatRegistry::global`].

use crate::lison::ast::Object;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// One output format for an object tree
pub trait Formatter: Send + Sync {
    /// Registry key, also the `ast-<name>` suffix of a processing spec
    fn name(&self) -> &str;

    fn serialize(&self, object: &Object) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

static GLOBAL_REGISTRY: Lazy<FormatRegistry> = Lazy::new(FormatRegistry::with_defaults);

/// Formatters keyed by name, kept in name order
#[derive(Default)]
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// A registry with no formatters
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in formats: lison, tag, treeviz, json and yaml
    pub fn with_defaults() -> Self {
        let defaults: [Box<dyn Formatter>; 5] = [
            Box::new(super::LisonFormatter),
            Box::new(super::TagFormatter),
            Box::new(super::TreevizFormatter),
            Box::new(super::JsonFormatter),
            Box::new(super::YamlFormatter),
        ];

        defaults.into_iter().fold(Self::new(), |mut registry, formatter| {
            registry.insert(formatter);
            registry
        })
    }

    /// Process-wide registry with the built-in formats
    pub fn global() -> &'static FormatRegistry {
        &GLOBAL_REGISTRY
    }

    /// Add a formatter, handing back the one it displaced under the same name
    pub fn register<F>(&mut self, formatter: F) -> Option<Box<dyn Formatter>>
    where
        F: Formatter + 'static,
    {
        self.insert(Box::new(formatter))
    }

    fn insert(&mut self, formatter: Box<dyn Formatter>) -> Option<Box<dyn Formatter>> {
        self.formatters.insert(formatter.name().to_owned(), formatter)
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(Box::as_ref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Format names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.formatters.keys().map(String::as_str)
    }

    pub fn serialize(&self, object: &Object, name: &str) -> Result<String, FormatError> {
        match self.get(name) {
            Some(formatter) => formatter.serialize(object),
            None => Err(FormatError::FormatNotFound(name.to_owned())),
        }
    }
}
