//! # Storage Layer
//!
//! A *library* is a set of named collections. The [`CollectionStore`] trait
//! lets commands work against a library without knowing where it lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one `<name>.csv` per collection
//!   under the library root
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Naming
//!
//! Collections are addressed by name. For the file store, a name containing a
//! path separator or ending in `.csv` is taken as a path instead, so files
//! outside the library can be opened directly.
//!
//! ## Storage Format
//!
//! ```text
//! Library/
//! ├── Binder.csv         # Semicolon-delimited, see codec.rs
//! ├── Modern Deck.csv
//! └── Trade Box.csv
//! ```

use crate::collection::Collection;
use crate::error::Result;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// One entry in a library listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSummary {
    pub name: String,
    pub rows: usize,
    pub path: Option<PathBuf>,
}

impl CollectionSummary {
    pub fn of(collection: &Collection) -> Self {
        Self {
            name: collection.name().to_string(),
            rows: collection.row_count(),
            path: collection.source_path().map(|p| p.to_path_buf()),
        }
    }
}

/// Abstract interface for a library of collections.
pub trait CollectionStore {
    /// List every collection in the library, sorted by name
    fn list(&self) -> Result<Vec<CollectionSummary>>;

    fn exists(&self, name: &str) -> bool;

    /// Where `name` lives. Two names that resolve to the same location are
    /// the same collection.
    fn resolve(&self, name: &str) -> PathBuf;

    /// Load a collection by name
    fn load(&self, name: &str) -> Result<Collection>;

    /// Save a collection (create or overwrite). Unbound collections are
    /// stored under their name.
    fn save(&mut self, collection: &mut Collection) -> Result<()>;
}
