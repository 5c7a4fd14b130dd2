//! Translation resource loading
//!
//! Resources are flat JSON documents (`{"key": "value", ...}`), one per
//! supported language, loaded wholesale at startup; there is no lazy fetch.

use crate::error::{I18nError, I18nResult};
use crate::store::TranslationTable;
use crate::Language;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Load the translation tables for every supported language from `dir`.
///
/// Each language is read from `<dir>/<code>.json`. A missing or malformed
/// file is an error: the dashboard ships all of its languages.
pub fn load_tables<P: AsRef<Path>>(dir: P) -> I18nResult<HashMap<Language, TranslationTable>> {
    let dir = dir.as_ref();
    let mut tables = HashMap::new();

    for language in Language::all() {
        let path = dir.join(language.resource_file());
        let table = load_table(&path)?;
        debug!(language = %language, entries = table.len(), "loaded translation table");
        tables.insert(language, table);
    }

    info!(dir = %dir.display(), "translation resources loaded");
    Ok(tables)
}

/// Load a single translation table from a flat JSON document.
pub fn load_table(path: &Path) -> I18nResult<TranslationTable> {
    let content = fs::read_to_string(path).map_err(|source| I18nError::ResourceLoad {
        path: path.display().to_string(),
        source,
    })?;

    let entries: HashMap<String, String> =
        serde_json::from_str(&content).map_err(|source| I18nError::ResourceParse {
            path: path.display().to_string(),
            source,
        })?;

    Ok(TranslationTable::from(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_table_missing_file() {
        let result = load_table(Path::new("/nonexistent/en.json"));
        assert!(matches!(result, Err(I18nError::ResourceLoad { .. })));
    }
}
