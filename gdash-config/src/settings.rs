//! Application configuration structures

use gdash_common::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::{Validate, ValidationErrors};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(default)]
pub struct Settings {
    /// Build-style feature flags consumed by card rendering
    pub features: FeatureFlags,

    /// Game catalog configuration
    #[validate]
    pub catalog: CatalogConfig,

    /// Internationalization configuration
    pub i18n: I18nSettings,

    /// Logging configuration
    #[validate]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Validate the whole configuration tree
    pub fn validate_all(&self) -> Result<(), ValidationErrors> {
        self.validate()
    }
}

/// Feature flags consumed as booleans by the card layer
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FeatureFlags {
    /// Show per-game titles on cards
    pub show_game_card_titles: bool,

    /// Show the secondary "existing games" catalog section
    pub show_existing_games: bool,
}

/// Game catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL the per-game launch paths and SCORM packages hang off
    #[validate(url(message = "Games base URL must be a valid URL"))]
    pub games_base_url: String,

    /// Path to the primary games catalog file
    pub games_file: PathBuf,

    /// Path to the secondary "existing games" catalog file, if any
    pub existing_games_file: Option<PathBuf>,

    /// Path to the SCORM data file merged over the catalog, if any
    pub scorm_file: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            games_base_url: "https://games.example.org".to_string(),
            games_file: PathBuf::from("assets/games.json"),
            existing_games_file: None,
            scorm_file: None,
        }
    }
}

/// Internationalization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nSettings {
    /// Directory holding one `<lang>.json` translation table per language
    pub locales_dir: PathBuf,

    /// Log a warning whenever a lookup falls back to the fallback language
    pub debug: bool,
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            locales_dir: PathBuf::from("assets/locales"),
            debug: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level filter (e.g., "info", "debug", "trace")
    #[validate(length(min = 1, message = "Log level cannot be empty"))]
    pub level: String,

    /// Whether to enable pretty formatting with colors
    pub pretty: bool,

    /// Optional file path for log output
    pub file: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            pretty: true,
            file: None,
        }
    }
}

impl LoggingSettings {
    /// Convert into the logging bootstrap configuration
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            pretty_format: self.pretty,
            file_path: self.file.clone(),
            include_targets: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let settings = Settings::default();
        assert!(settings.validate_all().is_ok());
        assert!(!settings.features.show_game_card_titles);
        assert!(!settings.features.show_existing_games);
        assert_eq!(settings.catalog.games_base_url, "https://games.example.org");
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let mut settings = Settings::default();
        settings.catalog.games_base_url = "not a url".to_string();
        assert!(settings.validate_all().is_err());
    }

    #[test]
    fn test_empty_log_level_rejected() {
        let mut settings = Settings::default();
        settings.logging.level = String::new();
        assert!(settings.validate_all().is_err());
    }

    #[test]
    fn test_logging_conversion() {
        let settings = LoggingSettings {
            level: "debug".to_string(),
            pretty: false,
            file: Some("gdash.log".to_string()),
        };
        let config = settings.to_logging_config();
        assert_eq!(config.level, "debug");
        assert!(!config.pretty_format);
        assert_eq!(config.file_path.as_deref(), Some("gdash.log"));
    }
}
