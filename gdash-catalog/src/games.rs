//! Game catalog records and data file loading

use crate::error::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// A sub-mechanic of a game, selectable from the mechanic chooser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMechanic {
    pub id: String,
    pub path: String,
}

/// One entry of the game catalog.
///
/// Catalog data is external: this crate consumes it read-only apart from the
/// in-memory SCORM merge pass. Field names are camelCase on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Game {
    pub id: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mechanics: Option<Vec<GameMechanic>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scorm_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scorm_url_es: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_es: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_title_es: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_es: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
}

/// One entry of the external SCORM data mapping, keyed by game id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScormDataEntry {
    pub game_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_es: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_title_es: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_es: Option<String>,
    /// Extra query parameters appended to the launch path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configs: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// Load an ordered game catalog from a JSON array file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> CatalogResult<Vec<Game>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Load {
        path: path.display().to_string(),
        source,
    })?;

    let games: Vec<Game> = serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    info!(path = %path.display(), count = games.len(), "game catalog loaded");
    Ok(games)
}

/// Load the SCORM data mapping from a JSON object file.
///
/// Entries are keyed by game id; the ordered map keeps merge passes
/// deterministic.
pub fn load_scorm_data<P: AsRef<Path>>(path: P) -> CatalogResult<BTreeMap<String, ScormDataEntry>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Load {
        path: path.display().to_string(),
        source,
    })?;

    let entries: BTreeMap<String, ScormDataEntry> =
        serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
            path: path.display().to_string(),
            source,
        })?;

    info!(path = %path.display(), count = entries.len(), "scorm data loaded");
    Ok(entries)
}
