use crate::collection::Collection;
use crate::commands::{cards, CmdMessage, CmdResult};
use crate::error::{Result, ScrollError};
use crate::search::SearchPortal;
use crate::store::CollectionStore;

/// Runs a card search. With `save_as`, the results are stored in the library
/// under that name, which must not be taken yet.
pub fn run<S: CollectionStore, P: SearchPortal>(
    store: &mut S,
    portal: &P,
    query: &str,
    max_cards: usize,
    save_as: Option<&str>,
) -> Result<CmdResult> {
    if query.trim().is_empty() {
        return Err(ScrollError::Api("Search query cannot be empty".into()));
    }
    if let Some(name) = save_as {
        if store.exists(name) {
            return Err(ScrollError::Api(format!("Collection {} already exists", name)));
        }
    }

    let results = portal.search(query, max_cards)?;
    let mut collection = Collection::from_search_results(&results);
    let mut result = CmdResult::default();

    if results.truncated {
        result.add_message(CmdMessage::warning(format!(
            "Some cards were not pulled: stopped at {}. Narrow the query or raise max-cards.",
            cards(max_cards)
        )));
    }
    result.add_message(CmdMessage::info(format!(
        "Found {}",
        cards(collection.row_count())
    )));

    if let Some(name) = save_as {
        collection.rename(name);
        store.save(&mut collection)?;
        result.add_message(CmdMessage::success(format!("Saved results as {}", name)));
    }
    Ok(result.with_collection(collection))
}
