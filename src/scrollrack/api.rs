//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for scrollrack operations, whatever UI sits on top.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (column names and `COLUMN=TEXT` filters from strings)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business logic and does no I/O of its own.
//!
//! ## Generic Over Store and Portal
//!
//! `ScrollRackApi<S: CollectionStore, P: SearchPortal>`:
//! - Production: `ScrollRackApi<FileStore, ScryfallPortal>`
//! - Testing: `ScrollRackApi<InMemoryStore, FakePortal>`

use crate::collection::{Collection, RowFilter};
use crate::commands;
use crate::commands::transfer::TransferMode;
use crate::error::Result;
use crate::model::Column;
use crate::search::SearchPortal;
use crate::store::CollectionStore;
use std::path::Path;

pub struct ScrollRackApi<S: CollectionStore, P: SearchPortal> {
    store: S,
    portal: P,
    paths: commands::ScrollRackPaths,
}

impl<S: CollectionStore, P: SearchPortal> ScrollRackApi<S, P> {
    pub fn new(store: S, portal: P, paths: commands::ScrollRackPaths) -> Self {
        Self {
            store,
            portal,
            paths,
        }
    }

    pub fn list_collections(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn create_collection(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, name)
    }

    pub fn show_collection(
        &self,
        name: &str,
        sort: Option<(&str, bool)>,
        filter: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let sort = match sort {
            Some((column, ascending)) => Some((column.parse::<Column>()?, ascending)),
            None => None,
        };
        let filter = filter.map(str::parse::<RowFilter>).transpose()?;
        commands::show::run(&self.store, name, sort, filter.as_ref())
    }

    pub fn sort_collection(
        &mut self,
        name: &str,
        column: &str,
        ascending: bool,
    ) -> Result<commands::CmdResult> {
        let column: Column = column.parse()?;
        commands::sort::run(&mut self.store, name, column, ascending)
    }

    pub fn search(
        &mut self,
        query: &str,
        max_cards: usize,
        save_as: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::search::run(&mut self.store, &self.portal, query, max_cards, save_as)
    }

    pub fn add_cards(&mut self, target: &str, source: &str) -> Result<commands::CmdResult> {
        commands::merge::run(&mut self.store, target, source)
    }

    pub fn copy_cards(
        &mut self,
        source: &str,
        target: &str,
        filter: &str,
    ) -> Result<commands::CmdResult> {
        let filter: RowFilter = filter.parse()?;
        commands::transfer::run(&mut self.store, source, target, &filter, TransferMode::Copy)
    }

    pub fn move_cards(
        &mut self,
        source: &str,
        target: &str,
        filter: &str,
    ) -> Result<commands::CmdResult> {
        let filter: RowFilter = filter.parse()?;
        commands::transfer::run(&mut self.store, source, target, &filter, TransferMode::Move)
    }

    pub fn drop_cards(&mut self, name: &str, filter: &str) -> Result<commands::CmdResult> {
        let filter: RowFilter = filter.parse()?;
        commands::drop::run(&mut self.store, name, &filter)
    }

    /// Saves an already open collection, e.g. one held by a UI tab.
    pub fn save_collection(
        &self,
        collection: &mut Collection,
        path: Option<&Path>,
    ) -> Result<commands::CmdResult> {
        commands::save::run(collection, path)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::ScrollRackPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, ScrollRackPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;
    use crate::error::ScrollError;
    use crate::search::fake::FakePortal;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn api() -> ScrollRackApi<InMemoryStore, FakePortal> {
        ScrollRackApi::new(
            fixtures::store(),
            FakePortal::default(),
            ScrollRackPaths {
                config_dir: PathBuf::from("/nonexistent"),
                library: PathBuf::from("/nonexistent/Library"),
            },
        )
    }

    #[test]
    fn show_parses_sort_and_filter() {
        let api = api();
        let result = api
            .show_collection("Binder", Some(("name", false)), Some("rarity=c"))
            .unwrap();
        let shown = result.collection.unwrap();
        assert_eq!(fixtures::names(&shown), vec!["Shock", "Duress"]);
    }

    #[test]
    fn bad_column_is_rejected_before_dispatch() {
        let mut api = api();
        assert!(matches!(
            api.sort_collection("Binder", "power", true),
            Err(ScrollError::UnknownColumn(_))
        ));
        assert!(api.drop_cards("Binder", "no-equals").is_err());
    }

    #[test]
    fn move_dispatches_to_transfer() {
        let mut api = api();
        api.move_cards("Binder", "Trade", "rarity=c").unwrap();
        let listed = api.list_collections().unwrap().listed;
        let rows: Vec<_> = listed.iter().map(|s| (s.name.as_str(), s.rows)).collect();
        assert_eq!(rows, vec![("Binder", 2), ("Trade", 2)]);
    }

    #[test]
    fn search_uses_portal() {
        let mut api = ScrollRackApi::new(
            InMemoryStore::new(),
            FakePortal::default(),
            api().paths().clone(),
        );
        let result = api.search("t:ouphe", 5, None).unwrap();
        assert!(result.collection.unwrap().is_empty());
    }
}
