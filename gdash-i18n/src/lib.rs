//! Internationalization support for the gdash dashboard
//!
//! This crate provides the i18n core the dashboard is built around:
//!
//! - Language management for the supported English/Spanish pair
//! - A translation store with fallback resolution over flat key tables
//! - Synchronous language-change subscriptions
//! - Locale-aware number, ordinal, decimal and fraction formatting
//! - Wholesale loading of translation resources at startup
//!
//! # Example
//!
//! ```rust
//! use gdash_i18n::{I18nConfig, Language, TranslationStore, TranslationTable};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let english: TranslationTable = [("playNow", "Play Now")].into_iter().collect();
//! let spanish: TranslationTable = [("playNow", "Jugar Ahora")].into_iter().collect();
//!
//! let store = TranslationStore::new(I18nConfig {
//!     resources: [(Language::English, english), (Language::Spanish, spanish)].into(),
//!     fallback_language: Language::English,
//!     debug: false,
//! })?;
//!
//! store.set_language(Language::Spanish);
//! assert_eq!(store.translate("playNow"), "Jugar Ahora");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod format;
pub mod locale;
pub mod resource;
pub mod store;

pub use error::{I18nError, I18nResult};
pub use format::NumberFormatOptions;
pub use locale::Language;
pub use resource::{load_table, load_tables};
pub use store::{I18nConfig, Subscription, TranslationStore, TranslationTable};
