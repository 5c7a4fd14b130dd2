//! Language management and utilities

use icu::locale::{locale, Locale};
use serde::{Deserialize, Serialize};

/// Supported languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Spanish,
}

impl Default for Language {
    fn default() -> Self {
        Self::English
    }
}

impl Language {
    /// Get the language tag for this language
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
        }
    }

    /// Parse a language from a language tag
    ///
    /// Only the exact tags carried in the URL contract are accepted.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::English),
            "es" => Some(Self::Spanish),
            _ => None,
        }
    }

    /// Get the display name for this language
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Español",
        }
    }

    /// Get all supported languages
    pub fn all() -> [Self; 2] {
        [Self::English, Self::Spanish]
    }

    /// The other language of the English/Spanish pair
    pub fn toggled(&self) -> Self {
        match self {
            Self::English => Self::Spanish,
            Self::Spanish => Self::English,
        }
    }

    /// Convert to an ICU locale for number formatting and plural rules
    pub fn icu_locale(&self) -> Locale {
        match self {
            Self::English => locale!("en"),
            Self::Spanish => locale!("es"),
        }
    }

    /// Get the translation resource file name for this language
    pub fn resource_file(&self) -> String {
        format!("{}.json", self.code())
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
