//! Error types for catalog operations

use thiserror::Error;

/// Errors that can occur while loading catalog data
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read a catalog data file
    #[error("Failed to read catalog file: {path}")]
    Load {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a catalog data file
    #[error("Failed to parse catalog file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured games base URL is not a valid absolute URL
    #[error("Invalid games base URL: {url}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<CatalogError> for gdash_common::DashError {
    fn from(err: CatalogError) -> Self {
        gdash_common::DashError::catalog(err.to_string())
    }
}
