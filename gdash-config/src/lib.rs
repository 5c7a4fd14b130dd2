//! Configuration management for the gdash dashboard
//!
//! Settings are loaded from a YAML file with `GDASH_*` environment-variable
//! overrides, validated after both passes. When no file exists, defaults are
//! used so the dashboard can start with zero configuration.

pub mod loader;
pub mod settings;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{CatalogConfig, FeatureFlags, I18nSettings, LoggingSettings, Settings};
