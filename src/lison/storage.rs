//! Storage collaborators
//!
//! Lison itself only deals in text. A [`Storage`] supplies that text and takes the
//! rendered result back; [`load`] and [`store`] connect a storage with a type
//! implementing [`Lison`].
//!
//! Storage never fails loudly: an unset or unreadable source reads as the empty
//! string (which parses to the error sentinel), and writing without a target does
//! nothing.

use crate::lison::mapping::Lison;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

pub trait Storage {
    /// The stored text, or an empty string when nothing is available
    fn read(&self) -> String;

    /// Replace the stored text. Does nothing when there is no target.
    fn write(&self, text: &str);
}

/// Storage backed by a file on disk
#[derive(Debug, Clone, Default)]
pub struct FileStorage {
    path: Option<PathBuf>,
}

impl FileStorage {
    /// A storage with no file set yet
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    pub fn set_file(&mut self, path: impl AsRef<Path>) {
        self.path = Some(path.as_ref().to_path_buf());
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Storage for FileStorage {
    fn read(&self) -> String {
        self.path
            .as_ref()
            .and_then(|path| fs::read_to_string(path).ok())
            .unwrap_or_default()
    }

    fn write(&self, text: &str) {
        if let Some(path) = &self.path {
            // Best effort: an unwritable target behaves like an unset one
            let _ = fs::write(path, text);
        }
    }
}

/// Storage holding the text in memory
#[derive(Debug, Default)]
pub struct MemoryStorage {
    text: RefCell<String>,
}

impl MemoryStorage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: RefCell::new(text.into()),
        }
    }

    pub fn into_inner(self) -> String {
        self.text.into_inner()
    }
}

impl Storage for MemoryStorage {
    fn read(&self) -> String {
        self.text.borrow().clone()
    }

    fn write(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }
}

/// Read the storage and absorb its content into `target`
pub fn load<S, T>(storage: &S, target: &mut T)
where
    S: Storage + ?Sized,
    T: Lison + ?Sized,
{
    target.deserialize(&storage.read());
}

/// Write the canonical rendering of `source` into the storage
pub fn store<S, T>(storage: &S, source: &T)
where
    S: Storage + ?Sized,
    T: Lison + ?Sized,
{
    storage.write(&source.serialize());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lison::ast::Object;

    #[test]
    fn test_unset_file_storage() {
        let storage = FileStorage::new();
        assert_eq!(storage.read(), "");
        storage.write("ignored");
        assert!(storage.path().is_none());
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::with_path(dir.path().join("nope.lison"));
        assert_eq!(storage.read(), "");
        assert_eq!(storage.path(), Some(dir.path().join("nope.lison").as_path()));
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new("(1 2)");
        let mut object = Object::error();
        load(&storage, &mut object);
        assert_eq!(
            object,
            Object::from(vec![Object::integer(1), Object::integer(2)])
        );

        object.append(Object::integer(3));
        store(&storage, &object);
        assert_eq!(storage.into_inner(), "( 1 2 3 ) ");
    }

    #[test]
    fn test_load_from_empty_storage_yields_error() {
        let storage = MemoryStorage::default();
        let mut object = Object::list();
        load(&storage, &mut object);
        assert!(object.is_error());
    }
}
