use crate::collection::RowFilter;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Column;
use crate::store::CollectionStore;

/// Loads a collection for display. Sorting and filtering here are never saved.
pub fn run<S: CollectionStore>(
    store: &S,
    name: &str,
    sort: Option<(Column, bool)>,
    filter: Option<&RowFilter>,
) -> Result<CmdResult> {
    let mut collection = store.load(name)?;
    if let Some((column, ascending)) = sort {
        collection.sort_by(column, ascending);
    }

    let mut result = CmdResult::default();
    if let Some(filter) = filter {
        collection.select_where(filter);
        let total = collection.row_count();
        let mut shown = collection.copy_selected();
        shown.clear_selection();
        shown.rename(collection.name());
        result.add_message(CmdMessage::info(format!(
            "{} of {} rows match",
            shown.row_count(),
            total
        )));
        collection = shown;
    }
    Ok(result.with_collection(collection))
}
