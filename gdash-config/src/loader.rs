//! Configuration loading utilities

use crate::Settings;
use gdash_common::Result as DashResult;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for gdash_common::DashError {
    fn from(err: ConfigError) -> Self {
        gdash_common::DashError::config(err.to_string())
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
        debug!(path = %path.as_ref().display(), "loading configuration file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut settings: Settings = serde_yaml::from_str(&content)?;

        Self::apply_env_overrides(&mut settings)?;
        settings.validate_all()?;

        Ok(settings)
    }

    /// Load configuration from environment variables and files.
    ///
    /// Resolution order: `GDASH_CONFIG_PATH`, then `./gdash.yaml`, then
    /// defaults with environment overrides applied.
    pub fn load() -> DashResult<Settings> {
        let settings = if let Ok(config_path) = env::var("GDASH_CONFIG_PATH") {
            Self::load_config(&config_path)?
        } else if Path::new("gdash.yaml").exists() {
            Self::load_config("gdash.yaml")?
        } else {
            let mut settings = Settings::default();
            Self::apply_env_overrides(&mut settings).map_err(gdash_common::DashError::from)?;
            settings
                .validate_all()
                .map_err(ConfigError::ValidationError)
                .map_err(gdash_common::DashError::from)?;
            settings
        };

        info!("configuration loaded");
        Ok(settings)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DashResult<Settings> {
        Ok(Self::load_config(path)?)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(settings: &mut Settings) -> Result<(), ConfigError> {
        // Feature flag overrides
        if let Ok(show_titles) = env::var("GDASH_SHOW_GAME_CARD_TITLES") {
            settings.features.show_game_card_titles =
                Self::parse_env("GDASH_SHOW_GAME_CARD_TITLES", &show_titles)?;
        }

        if let Ok(show_existing) = env::var("GDASH_SHOW_EXISTING_GAMES") {
            settings.features.show_existing_games =
                Self::parse_env("GDASH_SHOW_EXISTING_GAMES", &show_existing)?;
        }

        // Catalog overrides
        if let Ok(base_url) = env::var("GDASH_GAMES_BASE_URL") {
            settings.catalog.games_base_url = base_url;
        }

        if let Ok(games_file) = env::var("GDASH_GAMES_FILE") {
            settings.catalog.games_file = PathBuf::from(games_file);
        }

        if let Ok(existing_file) = env::var("GDASH_EXISTING_GAMES_FILE") {
            settings.catalog.existing_games_file = Some(PathBuf::from(existing_file));
        }

        if let Ok(scorm_file) = env::var("GDASH_SCORM_FILE") {
            settings.catalog.scorm_file = Some(PathBuf::from(scorm_file));
        }

        // I18n overrides
        if let Ok(locales_dir) = env::var("GDASH_LOCALES_DIR") {
            settings.i18n.locales_dir = PathBuf::from(locales_dir);
        }

        if let Ok(debug) = env::var("GDASH_I18N_DEBUG") {
            settings.i18n.debug = Self::parse_env("GDASH_I18N_DEBUG", &debug)?;
        }

        // Logging overrides
        if let Ok(level) = env::var("GDASH_LOG_LEVEL") {
            settings.logging.level = level;
        }

        if let Ok(file) = env::var("GDASH_LOG_FILE") {
            settings.logging.file = Some(file);
        }

        Ok(())
    }

    fn parse_env<T>(var: &str, raw: &str) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        raw.parse().map_err(|e| ConfigError::EnvParseError {
            var: var.to_string(),
            source: Box::new(e),
        })
    }
}
