//! SCORM data merge pass
//!
//! The external SCORM mapping is merged over the game catalog in memory:
//! entries with a matching game id overwrite that game, unmatched ids are
//! appended. Launch paths and package URLs are rebuilt from the entry.

use crate::error::{CatalogError, CatalogResult};
use crate::games::{Game, ScormDataEntry};
use std::collections::BTreeMap;
use tracing::{debug, warn};
use url::Url;

const DEFAULT_GRADE: &str = "K";

/// Parse the configured games base URL
pub fn parse_base_url(raw: &str) -> CatalogResult<Url> {
    Url::parse(raw).map_err(|source| CatalogError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })
}

/// Build a game entry from SCORM data.
///
/// The launch path points at `<base>/<gameName>/index.html` with any config
/// parameters appended; the SCORM packages live under
/// `<base>/<gameName>/scorm/<id>_{en,es}.zip`.
pub fn game_from_scorm(id: &str, data: &ScormDataEntry, base_url: &Url) -> Game {
    let mut game = Game {
        id: id.to_string(),
        image: data
            .image
            .clone()
            .unwrap_or_else(|| format!("./assets/images/{}.png", data.game_name)),
        grade: Some(
            data.grade
                .clone()
                .unwrap_or_else(|| DEFAULT_GRADE.to_string()),
        ),
        game_name: Some(data.game_name.clone()),
        title: data.title.clone(),
        title_es: data.title_es.clone(),
        tx_title: data.tx_title.clone(),
        tx_title_es: data.tx_title_es.clone(),
        description: data.description.clone(),
        description_es: data.description_es.clone(),
        disabled: data.disabled,
        last_updated: data.last_updated.clone(),
        ..Game::default()
    };

    if data.game_name.is_empty() {
        return game;
    }

    match base_url.join(&format!("{}/index.html", data.game_name)) {
        Ok(mut launch) => {
            if let Some(configs) = &data.configs {
                let mut pairs = launch.query_pairs_mut();
                for (key, value) in configs {
                    pairs.append_pair(key, value);
                }
            }
            game.path = Some(launch.to_string());
        }
        Err(err) => {
            warn!(id, game_name = %data.game_name, %err, "could not build launch path");
        }
    }

    for (lang, slot) in [("en", &mut game.scorm_url), ("es", &mut game.scorm_url_es)] {
        match base_url.join(&format!("{}/scorm/{}_{}.zip", data.game_name, id, lang)) {
            Ok(package) => *slot = Some(package.to_string()),
            Err(err) => {
                warn!(id, lang, %err, "could not build scorm package url");
            }
        }
    }

    game
}

/// Merge SCORM data into the catalog.
///
/// Games whose id matches a SCORM entry are rebuilt from that entry in place;
/// ids with no existing game are appended to the end of the catalog.
pub fn merge_scorm_data(
    games: &mut Vec<Game>,
    scorm_data: &BTreeMap<String, ScormDataEntry>,
    base_url: &Url,
) {
    for (id, data) in scorm_data {
        let rebuilt = game_from_scorm(id, data, base_url);
        if let Some(existing) = games.iter_mut().find(|game| game.id == *id) {
            debug!(id, "scorm entry overwrites existing game");
            *existing = rebuilt;
        } else {
            debug!(id, "scorm entry appended to catalog");
            games.push(rebuilt);
        }
    }
}
