//! Address book persistence.
//!
//! The book is persisted as a single JSON snapshot: a plain list of
//! records with named fields, so the on-disk format is stable and
//! readable rather than an opaque object graph. Value objects serialize
//! as their validated string forms, which means a hand-edited snapshot
//! with a bad phone or birthday fails loading instead of smuggling
//! invalid data into the book.

use crate::error::StorageResult;
use crate::models::AddressBook;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Abstraction over where the address book snapshot lives.
///
/// The REPL only talks to this trait; tests swap in a temp-dir-backed
/// store, and an in-memory implementation would satisfy it just as well.
pub trait BookStore {
    /// Load the book. A missing snapshot is not an error: it yields a
    /// fresh, empty book.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Persist the whole book, replacing any previous snapshot.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}

/// JSON-file-backed [`BookStore`].
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store at the given snapshot path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> StorageResult<AddressBook> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no snapshot, starting with an empty book");
                return Ok(AddressBook::new());
            }
            Err(err) => return Err(err.into()),
        };

        let book: AddressBook = serde_json::from_str(&data)?;
        info!(path = %self.path.display(), contacts = book.len(), "address book loaded");
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let data = serde_json::to_string_pretty(book)?;
        fs::write(&self.path, data)?;
        info!(path = %self.path.display(), contacts = book.len(), "address book saved");
        Ok(())
    }
}
