use crate::commands::{cards, CmdMessage, CmdResult};
use crate::error::{Result, ScrollError};
use crate::store::CollectionStore;

/// Appends every row of `source` to `target`. `source` is left as is.
pub fn run<S: CollectionStore>(store: &mut S, target: &str, source: &str) -> Result<CmdResult> {
    if store.resolve(target) == store.resolve(source) {
        return Err(ScrollError::Api(format!(
            "Cannot add {} to itself",
            target
        )));
    }
    let other = store.load(source)?;
    let mut collection = store.load(target)?;
    collection.add_cards(&other);
    store.save(&mut collection)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added {} from {} to {}",
        cards(other.row_count()),
        other.name(),
        collection.name()
    )));
    Ok(result.with_collection(collection))
}
