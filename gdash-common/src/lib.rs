//! Common utilities and types for the gdash dashboard

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{DashError, Result};
pub use logging::{init_default_logging, init_logging, LoggingConfig};
