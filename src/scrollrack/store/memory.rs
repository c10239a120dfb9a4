use super::{CollectionStore, CollectionSummary};
use crate::collection::Collection;
use crate::error::{Result, ScrollError};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Library kept in memory. Collections are keyed by name and never bound to files.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: BTreeMap<String, Collection>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CollectionStore for InMemoryStore {
    fn list(&self) -> Result<Vec<CollectionSummary>> {
        Ok(self.collections.values().map(CollectionSummary::of).collect())
    }

    fn exists(&self, name: &str) -> bool {
        self.collections.contains_key(name)
    }

    fn resolve(&self, name: &str) -> PathBuf {
        PathBuf::from(name)
    }

    fn load(&self, name: &str) -> Result<Collection> {
        self.collections
            .get(name)
            .cloned()
            .ok_or_else(|| ScrollError::CollectionNotFound(name.to_string()))
    }

    fn save(&mut self, collection: &mut Collection) -> Result<()> {
        let mut stored = collection.clone();
        stored.clear_selection();
        self.collections.insert(collection.name().to_string(), stored);
        Ok(())
    }
}
