use crate::error::{Result, ScrollError};
use crate::search::{DEFAULT_MAX_CARDS, DEFAULT_REQUEST_DELAY, MIN_REQUEST_DELAY};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";

pub const KEYS: [&str; 3] = ["library-dir", "max-cards", "request-delay-ms"];

/// Configuration for scrollrack, stored in config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScrollRackConfig {
    /// Where named collections live. Falls back to the data directory's `Library/`.
    #[serde(default)]
    pub library_dir: Option<PathBuf>,

    /// Upper bound on cards pulled by a single search
    #[serde(default = "default_max_cards")]
    pub max_cards: usize,

    /// Wait before each search request, in milliseconds
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
}

fn default_max_cards() -> usize {
    DEFAULT_MAX_CARDS
}

fn default_request_delay_ms() -> u64 {
    DEFAULT_REQUEST_DELAY.as_millis() as u64
}

impl Default for ScrollRackConfig {
    fn default() -> Self {
        Self {
            library_dir: None,
            max_cards: default_max_cards(),
            request_delay_ms: default_request_delay_ms(),
        }
    }
}

impl ScrollRackConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ScrollError::Io)?;
        let config: ScrollRackConfig =
            serde_json::from_str(&content).map_err(ScrollError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ScrollError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ScrollError::Serialization)?;
        fs::write(config_path, content).map_err(ScrollError::Io)?;
        Ok(())
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms).max(MIN_REQUEST_DELAY)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "library-dir" => Some(
                self.library_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "max-cards" => Some(self.max_cards.to_string()),
            "request-delay-ms" => Some(self.request_delay_ms.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "library-dir" => {
                self.library_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "max-cards" => {
                self.max_cards = match value.parse() {
                    Ok(n) if n > 0 => n,
                    _ => return Err(format!("max-cards must be a positive number, got {}", value)),
                };
            }
            "request-delay-ms" => {
                let ms: u64 = value
                    .parse()
                    .map_err(|_| format!("request-delay-ms must be a number, got {}", value))?;
                let min = MIN_REQUEST_DELAY.as_millis() as u64;
                if ms < min {
                    return Err(format!("request-delay-ms must be at least {}", min));
                }
                self.request_delay_ms = ms;
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ScrollRackConfig::default();
        assert_eq!(config.max_cards, 1000);
        assert_eq!(config.request_delay_ms, 200);
        assert!(config.library_dir.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = ScrollRackConfig::load(dir.path()).unwrap();
        assert_eq!(config, ScrollRackConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let mut config = ScrollRackConfig::default();
        config.set("max-cards", "250").unwrap();
        config.set("library-dir", "/cards").unwrap();
        config.save(dir.path().join("nested")).unwrap();

        let loaded = ScrollRackConfig::load(dir.path().join("nested")).unwrap();
        assert_eq!(loaded.max_cards, 250);
        assert_eq!(loaded.library_dir, Some(PathBuf::from("/cards")));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"max_cards": 50}"#).unwrap();
        let config = ScrollRackConfig::load(dir.path()).unwrap();
        assert_eq!(config.max_cards, 50);
        assert_eq!(config.request_delay_ms, 200);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = ScrollRackConfig::default();
        assert!(config.set("max-cards", "0").is_err());
        assert!(config.set("request-delay-ms", "20").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, ScrollRackConfig::default());
    }

    #[test]
    fn test_request_delay_never_below_minimum() {
        let config = ScrollRackConfig {
            request_delay_ms: 5,
            ..Default::default()
        };
        assert_eq!(config.request_delay(), MIN_REQUEST_DELAY);
    }
}
