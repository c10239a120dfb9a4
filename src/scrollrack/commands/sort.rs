use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Column;
use crate::store::CollectionStore;

pub fn run<S: CollectionStore>(
    store: &mut S,
    name: &str,
    column: Column,
    ascending: bool,
) -> Result<CmdResult> {
    let mut collection = store.load(name)?;
    collection.sort_by(column, ascending);
    store.save(&mut collection)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Sorted {} by {} ({})",
        collection.name(),
        column,
        if ascending { "ascending" } else { "descending" }
    )));
    Ok(result.with_collection(collection))
}
