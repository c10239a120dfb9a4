use crate::collection::Collection;
use crate::config::ScrollRackConfig;
use crate::store::CollectionSummary;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod drop;
pub mod list;
pub mod merge;
pub mod save;
pub mod search;
pub mod show;
pub mod sort;
pub mod transfer;

#[derive(Debug, Clone)]
pub struct ScrollRackPaths {
    pub config_dir: PathBuf,
    pub library: PathBuf,
}

impl ScrollRackPaths {
    /// Library root, honoring a `library-dir` override from the config.
    pub fn library_dir(&self, config: &ScrollRackConfig) -> PathBuf {
        config
            .library_dir
            .clone()
            .unwrap_or_else(|| self.library.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Collection to display, if the command produced one
    pub collection: Option<Collection>,
    pub listed: Vec<CollectionSummary>,
    pub config: Option<ScrollRackConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_collection(mut self, collection: Collection) -> Self {
        self.collection = Some(collection);
        self
    }

    pub fn with_listed(mut self, listed: Vec<CollectionSummary>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_config(mut self, config: ScrollRackConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}

/// Card count with the right plural.
pub(crate) fn cards(n: usize) -> String {
    if n == 1 {
        "1 card".to_string()
    } else {
        format!("{} cards", n)
    }
}
