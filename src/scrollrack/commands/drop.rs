use crate::collection::RowFilter;
use crate::commands::{cards, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CollectionStore;

pub fn run<S: CollectionStore>(store: &mut S, name: &str, filter: &RowFilter) -> Result<CmdResult> {
    let mut collection = store.load(name)?;
    let mut result = CmdResult::default();

    let matched = collection.select_where(filter);
    if matched == 0 {
        result.add_message(CmdMessage::warning(format!(
            "No rows in {} match {}={}",
            collection.name(),
            filter.column,
            filter.needle
        )));
        return Ok(result.with_collection(collection));
    }

    collection.drop_selected();
    store.save(&mut collection)?;
    result.add_message(CmdMessage::success(format!(
        "Dropped {} from {}",
        cards(matched),
        collection.name()
    )));
    Ok(result.with_collection(collection))
}
