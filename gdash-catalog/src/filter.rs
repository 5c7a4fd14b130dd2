//! Grade filtering and the ALL-tab de-duplication rules

use crate::games::Game;
use std::collections::HashSet;

/// Catalog id excluded from every grade and ALL-tab view.
///
/// A data-driven `hidden` flag would subsume this constant; kept literal to
/// match the catalog's current shape.
pub const HIDDEN_GAME_ID: &str = "multiverse-algo-checker";

/// The ALL-tab selector value
pub const ALL_TAB: &str = "ALL";

/// Games matching a single grade exactly, hidden id excluded.
pub fn filter_by_grade<'a>(games: &'a [Game], grade: &str) -> Vec<&'a Game> {
    games
        .iter()
        .filter(|game| game.grade.as_deref() == Some(grade) && game.id != HIDDEN_GAME_ID)
        .collect()
}

/// The ALL-tab view: one entry per `gameName`, first occurrence wins.
///
/// A first occurrence claims its name before the disabled check, so a
/// disabled first occurrence suppresses every later duplicate as well;
/// there is no fallback to a second occurrence.
pub fn unique_by_game_name(games: &[Game]) -> Vec<&Game> {
    let mut seen = HashSet::new();
    games
        .iter()
        .filter(|game| {
            if game.id == HIDDEN_GAME_ID {
                return false;
            }
            let name = game.game_name.as_deref().unwrap_or("");
            if !seen.insert(name.to_string()) {
                return false;
            }
            !game.disabled
        })
        .collect()
}

/// The games visible for a grade-tab selection, availability-partitioned:
/// all non-disabled entries before all disabled ones, catalog order retained
/// within each partition.
pub fn visible_games<'a>(games: &'a [Game], selected: &str) -> Vec<&'a Game> {
    let mut visible = if selected == ALL_TAB {
        unique_by_game_name(games)
    } else {
        filter_by_grade(games, selected)
    };

    // Stable sort: relative order within each partition is preserved.
    visible.sort_by_key(|game| game.disabled);
    visible
}
