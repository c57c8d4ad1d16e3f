//! Page configuration
//!
//! Read from `data-*` attributes on the app root element in the browser.

use serde::{Deserialize, Serialize};

use crate::consts::STORAGE_KEY;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// LocalStorage key for the list
    pub storage_key: String,
    /// Log level name (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Build from optional overrides, ignoring blank values
    pub fn from_overrides(storage_key: Option<String>, log_level: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(key) = storage_key.filter(|k| !k.trim().is_empty()) {
            config.storage_key = key.trim().to_string();
        }
        if let Some(level) = log_level.filter(|l| !l.trim().is_empty()) {
            config.log_level = level.trim().to_lowercase();
        }
        config
    }

    /// Parsed log level, Info when the name is not recognised
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_activity_list_key() {
        let config = Config::default();
        assert_eq!(config.storage_key, "activityList");
        assert_eq!(config.level(), log::Level::Info);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_overrides(Some(" myList ".into()), Some("DEBUG".into()));
        assert_eq!(config.storage_key, "myList");
        assert_eq!(config.level(), log::Level::Debug);
    }

    #[test]
    fn test_blank_and_bad_overrides_fall_back() {
        let config = Config::from_overrides(Some("   ".into()), Some("loud".into()));
        assert_eq!(config.storage_key, STORAGE_KEY);
        assert_eq!(config.level(), log::Level::Info);
    }
}
