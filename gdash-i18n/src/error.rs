//! Error types for internationalization operations

use crate::Language;
use thiserror::Error;

/// Errors that can occur during internationalization operations
#[derive(Error, Debug)]
pub enum I18nError {
    /// The configured fallback language has no translation table
    #[error("No translation table configured for fallback language '{0}'")]
    MissingFallbackTable(Language),

    /// Failed to read a translation resource file
    #[error("Failed to load translation resource: {path}")]
    ResourceLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a translation resource file
    #[error("Failed to parse translation resource {path}: {source}")]
    ResourceParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;

impl From<I18nError> for gdash_common::DashError {
    fn from(err: I18nError) -> Self {
        gdash_common::DashError::localization(err.to_string())
    }
}
