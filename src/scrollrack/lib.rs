//! # ScrollRack Architecture
//!
//! ScrollRack manages personal collections of trading cards: named, ordered
//! tables of cards that can be searched for, sorted, merged and split. It is a
//! **UI-agnostic library** with a thin CLI on top; a desktop table view or any
//! other front end drives the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, print.rs)                           │
//! │  - Parses arguments, prints tables and messages             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Parses column names and COLUMN=TEXT filters              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per module, returns CmdResult              │
//! │  - Warnings travel as messages, not errors                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (collection, sort, normalize, codec)                  │
//! │  - The Collection table and its editing operations          │
//! │  - Pure transforms for search results and the file format  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/) and Search (search.rs)                    │
//! │  - CollectionStore: FileStore, InMemoryStore                │
//! │  - SearchPortal: ScryfallPortal                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! Raw search entries are normalized into [`model::CardRecord`]s and gathered
//! into a [`collection::Collection`]. Collections are edited in memory and
//! written to semicolon-delimited files by [`codec`].
//!
//! ## Threading
//!
//! Everything is synchronous. A collection is not shared between threads;
//! callers serialize edits. File I/O and searches block until done.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`collection`]: The collection table, selection and editing
//! - [`sort`]: Per-column sort keys (rarity tiers, color pie, cost)
//! - [`normalize`]: Search entries to card records
//! - [`codec`]: The persisted file format
//! - [`store`]: Library storage abstraction and implementations
//! - [`search`]: Card database search
//! - [`model`]: Core data types (`CardRecord`, `Rarity`, `Column`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod search;
pub mod sort;
pub mod store;
