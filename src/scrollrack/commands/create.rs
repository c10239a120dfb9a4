use crate::collection::Collection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ScrollError};
use crate::store::CollectionStore;

pub fn run<S: CollectionStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    if name.trim().is_empty() {
        return Err(ScrollError::Api("Collection name cannot be empty".into()));
    }
    if store.exists(name) {
        return Err(ScrollError::Api(format!("Collection {} already exists", name)));
    }

    let mut collection = Collection::named(name);
    store.save(&mut collection)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Created collection {}", name)));
    Ok(result.with_collection(collection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_empty_collection() {
        let mut store = InMemoryStore::new();
        run(&mut store, "Cube").unwrap();
        assert!(store.load("Cube").unwrap().is_empty());
    }

    #[test]
    fn refuses_to_overwrite() {
        let mut store = InMemoryStore::new();
        run(&mut store, "Cube").unwrap();
        assert!(run(&mut store, "Cube").is_err());
        assert!(run(&mut store, "  ").is_err());
    }
}
