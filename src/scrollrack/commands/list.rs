use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CollectionStore;

pub fn run<S: CollectionStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed(store.list()?))
}
