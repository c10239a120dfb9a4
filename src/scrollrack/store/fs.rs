use super::{CollectionStore, CollectionSummary};
use crate::collection::{Collection, SaveOutcome};
use crate::error::{Result, ScrollError};
use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

pub const COLLECTION_EXT: &str = "csv";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<name>.csv`, or `name` itself when it already looks like a path.
    pub fn path_for(&self, name: &str) -> PathBuf {
        if is_path_like(name) {
            PathBuf::from(name)
        } else {
            self.root.join(format!("{}.{}", name, COLLECTION_EXT))
        }
    }
}

fn is_path_like(name: &str) -> bool {
    name.contains('/')
        || name.contains(MAIN_SEPARATOR)
        || Path::new(name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(COLLECTION_EXT))
}

impl CollectionStore for FileStore {
    fn list(&self) -> Result<Vec<CollectionSummary>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut summaries = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(ScrollError::Io)? {
            let path = entry.map_err(ScrollError::Io)?.path();
            let is_collection = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(COLLECTION_EXT));
            if !path.is_file() || !is_collection {
                continue;
            }
            match Collection::from_file(&path) {
                Ok(collection) => summaries.push(CollectionSummary::of(&collection)),
                Err(e) => tracing::warn!(path = %path.display(), "Skipping unreadable collection: {e}"),
            }
        }
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(summaries)
    }

    fn exists(&self, name: &str) -> bool {
        self.path_for(name).is_file()
    }

    /// The collection's file, canonicalized when it exists so that a library
    /// name and a path to the same file agree.
    fn resolve(&self, name: &str) -> PathBuf {
        let path = self.path_for(name);
        fs::canonicalize(&path).unwrap_or(path)
    }

    fn load(&self, name: &str) -> Result<Collection> {
        let path = self.path_for(name);
        if !path.exists() {
            return Err(ScrollError::CollectionNotFound(name.to_string()));
        }
        Collection::from_file(path)
    }

    /// Writes to the bound file, or to `path_for(name)` when unbound. Either
    /// way the collection ends up bound to the file written.
    fn save(&mut self, collection: &mut Collection) -> Result<()> {
        let target = match collection.source_path() {
            Some(_) => None,
            None => Some(self.path_for(collection.name())),
        };
        match collection.save(target.as_deref())? {
            SaveOutcome::Saved(_) => Ok(()),
            SaveOutcome::Unsaved => Err(ScrollError::Store(format!(
                "{} could not be saved",
                collection.name()
            ))),
        }
    }
}
