//! Card view models
//!
//! Turns a catalog [`Game`] plus the current language into the plain data a
//! card renderer needs: localized image path, titles, description, action
//! label and launch/package URLs.

use gdash_catalog::{Game, GameMechanic};
use gdash_config::FeatureFlags;
use gdash_i18n::{Language, TranslationStore};
use tracing::warn;
use url::Url;

/// Everything a rendered game card shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCard {
    pub id: String,
    pub image: String,
    pub title: Option<String>,
    pub tx_title: Option<String>,
    pub description: Option<String>,
    /// "Play Now" for playable games, "Coming Soon" for disabled ones
    pub action_label: String,
    pub playable: bool,
    pub launch_url: Option<String>,
    pub scorm_url: Option<String>,
}

/// One entry of the mechanic chooser shown for existing games
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MechanicOption {
    pub id: String,
    pub path: String,
    pub title: String,
    pub description: String,
}

/// Build the card view model for a game.
///
/// Existing-game cards resolve their copy from the translation store under
/// `existingGamesData.<id>.*`; primary cards carry their localized copy on
/// the record itself, gated by the card-title feature flag. `hide_details`
/// (the ALL tab) suppresses titles and descriptions either way.
pub fn render_card(
    game: &Game,
    store: &TranslationStore,
    flags: &FeatureFlags,
    hide_details: bool,
    is_existing: bool,
) -> GameCard {
    let language = store.language();

    let (title, tx_title, description) = if hide_details {
        (None, None, None)
    } else if is_existing {
        (
            Some(store.t(&format!("existingGamesData.{}.title", game.id))),
            None,
            Some(store.t(&format!("existingGamesData.{}.description", game.id))),
        )
    } else {
        let title = match language {
            Language::Spanish => game.title_es.clone(),
            Language::English => game.title.clone(),
        };
        let tx_title = match language {
            Language::Spanish => game.tx_title_es.clone(),
            Language::English => game.tx_title.clone(),
        };
        let description = match language {
            Language::Spanish => game.description_es.clone(),
            Language::English => game.description.clone(),
        };
        (
            title.filter(|_| flags.show_game_card_titles),
            tx_title.filter(|_| flags.show_game_card_titles),
            description,
        )
    };

    let action_label = if game.disabled {
        store.t("comingSoon")
    } else {
        store.t("playNow")
    };

    let scorm_url = match language {
        Language::Spanish => game.scorm_url_es.clone(),
        Language::English => game.scorm_url.clone(),
    };

    GameCard {
        id: game.id.clone(),
        image: localized_image(&game.image, language, is_existing),
        title,
        tx_title,
        description,
        action_label,
        playable: !game.disabled,
        launch_url: game
            .path
            .as_deref()
            .and_then(|path| launch_url(path, language)),
        scorm_url,
    }
}

/// Mechanic chooser entries for an existing game, localized via the store
pub fn mechanic_options(game: &Game, store: &TranslationStore) -> Vec<MechanicOption> {
    let mechanics: &[GameMechanic] = game.mechanics.as_deref().unwrap_or_default();
    mechanics
        .iter()
        .map(|mechanic| MechanicOption {
            id: mechanic.id.clone(),
            path: mechanic.path.clone(),
            title: store.t(&format!(
                "existingGamesData.{}.mechanics.{}.title",
                game.id, mechanic.id
            )),
            description: store.t(&format!(
                "existingGamesData.{}.mechanics.{}.description",
                game.id, mechanic.id
            )),
        })
        .collect()
}

/// Localize an image path by suffixing the language code before `.png`.
///
/// Existing-game art only ships in English.
fn localized_image(image: &str, language: Language, is_existing: bool) -> String {
    let code = if is_existing { "en" } else { language.code() };
    match image.strip_suffix(".png") {
        Some(stem) => format!("{stem}-{code}.png"),
        None => image.to_string(),
    }
}

/// A game's launch URL carrying the active language as a query parameter
fn launch_url(path: &str, language: Language) -> Option<String> {
    let mut url = match Url::parse(path) {
        Ok(url) => url,
        Err(err) => {
            warn!(path, %err, "unparseable game launch path");
            return None;
        }
    };

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "lang")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    {
        let mut serializer = url.query_pairs_mut();
        serializer.clear();
        serializer.extend_pairs(&pairs);
        serializer.append_pair("lang", language.code());
    }

    Some(url.to_string())
}
