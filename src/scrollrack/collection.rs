//! # Collections
//!
//! A [`Collection`] is a named, ordered table of [`CardRecord`]s, optionally
//! bound to a file. Row order is significant: it is what gets persisted and
//! what the user sees.
//!
//! ## Naming
//!
//! An unbound collection is called `"Unnamed"` unless given a name. Once bound
//! to a path, its name is the path's file stem, and rebinding renames it.
//! [`Collection::rename`] drops the binding instead; the file on disk is left
//! alone.
//!
//! ## Editing
//!
//! Edits are driven by the per-row `selected` flag: select rows, then copy,
//! drop, move or split them. Every edit either completes or leaves the rows
//! untouched. Copies are deep, so collections never share rows.

use crate::codec;
use crate::error::{Result, ScrollError};
use crate::model::{CardRecord, Column};
use crate::normalize::{normalize_all, RawCard};
use crate::search::{SearchPortal, SearchResults};
use crate::sort::sort_cards;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_NAME: &str = "Unnamed";
pub const SEARCH_RESULTS_NAME: &str = "Search Results";

/// Result of [`Collection::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    /// No path was given and the collection is not bound to a file.
    Unsaved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    name: String,
    source_path: Option<PathBuf>,
    rows: Vec<CardRecord>,
}

impl Default for Collection {
    fn default() -> Self {
        Self::new()
    }
}

impl Collection {
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            source_path: None,
            rows: Vec::new(),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::new()
        }
    }

    pub fn from_records(name: impl Into<String>, rows: Vec<CardRecord>) -> Self {
        Self {
            name: name.into(),
            source_path: None,
            rows,
        }
    }

    /// Builds an unbound collection from raw search entries.
    pub fn from_raw(raw: &[RawCard]) -> Self {
        Self::from_records(SEARCH_RESULTS_NAME, normalize_all(raw))
    }

    pub fn from_search_results(results: &SearchResults) -> Self {
        Self::from_raw(&results.cards)
    }

    /// Runs a search and collects the results. A truncated result set is
    /// logged; the partial rows are still returned.
    pub fn from_search<P: SearchPortal>(portal: &P, query: &str, max_cards: usize) -> Result<Self> {
        let results = portal.search(query, max_cards)?;
        if results.truncated {
            tracing::warn!(query, max_cards, "Search stopped early; results are incomplete");
        }
        Ok(Self::from_search_results(&results))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut collection = Self::new();
        collection.load(path)?;
        Ok(collection)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Binds the collection to `path` and takes its name from the file stem.
    pub fn set_source_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.name = name_from_path(&path);
        self.source_path = Some(path);
    }

    /// Renames the collection and unbinds it from its file.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.source_path = None;
    }

    pub fn rows(&self) -> &[CardRecord] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&CardRecord> {
        self.rows.get(index)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        Column::ALL.len()
    }

    pub fn header(&self, column: usize) -> Option<&'static str> {
        Column::ALL.get(column).map(|c| c.header())
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<String> {
        let column = Column::ALL.get(column)?;
        self.rows.get(row).map(|card| card.cell(*column))
    }

    pub fn push(&mut self, card: CardRecord) {
        self.rows.push(card);
    }

    // Selection ================================================================

    pub fn select(&mut self, row: usize, selected: bool) -> Result<()> {
        let count = self.rows.len();
        let card = self
            .rows
            .get_mut(row)
            .ok_or_else(|| ScrollError::Api(format!("Row {} out of range ({} rows)", row, count)))?;
        card.selected = selected;
        Ok(())
    }

    pub fn toggle(&mut self, row: usize) -> Result<()> {
        let selected = self.rows.get(row).map(|c| c.selected).unwrap_or_default();
        self.select(row, !selected)
    }

    pub fn select_all(&mut self) {
        self.rows.iter_mut().for_each(|c| c.selected = true);
    }

    pub fn clear_selection(&mut self) {
        self.rows.iter_mut().for_each(|c| c.selected = false);
    }

    pub fn selected_count(&self) -> usize {
        self.rows.iter().filter(|c| c.selected).count()
    }

    /// Selects every row matching `filter`. Rows that don't match keep their
    /// current flag. Returns how many rows were newly selected.
    pub fn select_where(&mut self, filter: &RowFilter) -> usize {
        let mut newly = 0;
        for card in self.rows.iter_mut().filter(|c| filter.matches(c)) {
            if !card.selected {
                card.selected = true;
                newly += 1;
            }
        }
        newly
    }

    // Editing ==================================================================

    /// Copies the selected rows into a new, unbound collection. Selection
    /// flags are kept on the copy so it can be edited further.
    pub fn copy_selected(&self) -> Collection {
        let rows = self.rows.iter().filter(|c| c.selected).cloned().collect();
        Collection::from_records(DEFAULT_NAME, rows)
    }

    pub fn drop_selected(&mut self) {
        self.rows.retain(|c| !c.selected);
    }

    /// Appends a copy of every row of `other`. Name and binding are unchanged.
    pub fn add_cards(&mut self, other: &Collection) {
        self.rows.extend(other.rows.iter().cloned());
    }

    /// Moves the selected rows to the end of `target`.
    pub fn move_selected(&mut self, target: &mut Collection) {
        target.add_cards(&self.copy_selected());
        self.drop_selected();
    }

    /// Moves the selected rows out into a new, unbound collection.
    pub fn split_selected(&mut self) -> Collection {
        let split = self.copy_selected();
        self.drop_selected();
        split
    }

    /// Stable single-column sort.
    pub fn sort_by(&mut self, column: Column, ascending: bool) {
        sort_cards(&mut self.rows, column, ascending);
    }

    // Persistence ==============================================================

    /// Replaces the rows with the contents of `path` and binds to it.
    /// On failure the collection is left as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let rows = codec::read_file(path)?;
        tracing::info!(path = %path.display(), rows = rows.len(), "Loaded collection");
        self.rows = rows;
        self.set_source_path(path);
        Ok(())
    }

    /// Re-reads the bound file.
    pub fn reload(&mut self) -> Result<()> {
        let path = self
            .source_path
            .clone()
            .ok_or_else(|| ScrollError::Api(format!("{} is not bound to a file", self.name)))?;
        self.load(path)
    }

    /// Writes the rows to `path`, or to the bound file when `path` is `None`.
    ///
    /// Saving an unbound collection without a path is not an error: nothing is
    /// written, a warning is logged and [`SaveOutcome::Unsaved`] is returned so
    /// the caller can ask for a path.
    pub fn save(&mut self, path: Option<&Path>) -> Result<SaveOutcome> {
        let target = match (path, &self.source_path) {
            (Some(p), _) => p.to_path_buf(),
            (None, Some(bound)) => bound.clone(),
            (None, None) => {
                tracing::warn!(collection = %self.name, "Not saved: no file path");
                return Ok(SaveOutcome::Unsaved);
            }
        };
        codec::write_file(&target, &self.rows)?;
        tracing::info!(path = %target.display(), rows = self.rows.len(), "Saved collection");
        if self.source_path.as_deref() != Some(target.as_path()) {
            self.set_source_path(target.clone());
        }
        Ok(SaveOutcome::Saved(target))
    }
}

fn name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_NAME.to_string())
}

/// Case-insensitive substring match on one column, written `column=text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFilter {
    pub column: Column,
    pub needle: String,
}

impl RowFilter {
    pub fn new(column: Column, needle: impl Into<String>) -> Self {
        Self {
            column,
            needle: needle.into(),
        }
    }

    pub fn matches(&self, card: &CardRecord) -> bool {
        card.cell(self.column)
            .to_lowercase()
            .contains(&self.needle.to_lowercase())
    }
}

impl FromStr for RowFilter {
    type Err = ScrollError;

    fn from_str(s: &str) -> Result<Self> {
        let (column, needle) = s
            .split_once('=')
            .ok_or_else(|| ScrollError::Api(format!("Expected COLUMN=TEXT, got {:?}", s)))?;
        Ok(Self::new(column.parse()?, needle))
    }
}
