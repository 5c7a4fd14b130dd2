//! Dashboard state machine
//!
//! Holds the selected grade and the translation store handle, and keeps both
//! in sync with the URL: user actions write the URL and push history,
//! back/forward navigation reads the URL back into state.

use crate::history::Navigator;
use crate::url_state::{self, StateUpdate, ALL_TAB, GRADES};
use gdash_catalog::{visible_games, Game};
use gdash_config::Settings;
use gdash_i18n::{Language, TranslationStore};
use tracing::debug;
use url::Url;

/// The games dashboard: grade tabs, a language toggle and the filtered grid
pub struct Dashboard {
    store: TranslationStore,
    navigator: Navigator,
    games: Vec<Game>,
    existing_games: Vec<Game>,
    settings: Settings,
    selected_grade: String,
}

impl Dashboard {
    /// Build a dashboard over the given collaborators.
    ///
    /// The selected grade is seeded from the navigator's current URL; call
    /// [`mount`](Self::mount) to fully reconcile state (including language).
    pub fn new(
        store: TranslationStore,
        navigator: Navigator,
        games: Vec<Game>,
        existing_games: Vec<Game>,
        settings: Settings,
    ) -> Self {
        let state = url_state::read_state(navigator.current());
        let selected_grade = url_state::validate_grade(state.grade.as_deref());

        Self {
            store,
            navigator,
            games,
            existing_games,
            settings,
            selected_grade,
        }
    }

    /// Reconcile dashboard and store state from the current URL on load.
    ///
    /// The URL is authoritative: a valid `lang` parameter is applied, an
    /// absent one forces English even over a previously cached language. A
    /// present-but-invalid value leaves the language untouched.
    pub fn mount(&mut self) {
        self.reconcile(false);
    }

    /// Step back through history and reconcile, the popstate analog.
    ///
    /// Returns false when the history has no earlier entry.
    pub fn handle_back(&mut self) -> bool {
        if self.navigator.back().is_none() {
            return false;
        }
        self.reconcile(true);
        true
    }

    /// Step forward through history and reconcile.
    ///
    /// Returns false when the history has no later entry.
    pub fn handle_forward(&mut self) -> bool {
        if self.navigator.forward().is_none() {
            return false;
        }
        self.reconcile(true);
        true
    }

    /// Select a grade tab. Normalizes the value, updates the URL and pushes
    /// a history entry.
    pub fn select_grade(&mut self, grade: &str) {
        let grade = url_state::validate_grade(Some(grade));
        debug!(%grade, "grade selected");
        self.selected_grade = grade.clone();
        self.apply_update(StateUpdate::grade(grade), false);
    }

    /// Flip the language between English and Spanish. Notifies the store's
    /// subscribers, updates the URL and pushes a history entry.
    pub fn toggle_language(&mut self) {
        let next = self.store.language().toggled();
        debug!(language = %next, "language toggled");
        self.store.set_language(next);
        self.apply_update(StateUpdate::lang(next), false);
    }

    /// Merge a state update into the current URL.
    ///
    /// Pushes a new history entry unless `skip_history` is set, in which
    /// case the current entry is replaced in place.
    pub fn apply_update(&mut self, update: StateUpdate, skip_history: bool) {
        let mut url = self.navigator.current().clone();
        url_state::write_state(&mut url, &update);
        if skip_history {
            self.navigator.replace(url);
        } else {
            self.navigator.push(url);
        }
    }

    /// Read the URL and apply it to grade and language state.
    ///
    /// On navigation the language is only set when it differs from the
    /// current one, so subscribers see no redundant notifications.
    fn reconcile(&mut self, on_navigation: bool) {
        let state = url_state::read_state(self.navigator.current());
        self.selected_grade = url_state::validate_grade(state.grade.as_deref());

        match state.lang.as_deref() {
            Some(tag) => {
                if let Some(lang) = Language::from_code(tag) {
                    if !on_navigation || lang != self.store.language() {
                        self.store.set_language(lang);
                    }
                }
                // Present but invalid: leave the language untouched
            }
            None => {
                if !on_navigation || self.store.language() != Language::English {
                    self.store.set_language(Language::English);
                }
            }
        }
    }

    /// The grade or ALL tab currently selected
    pub fn selected_grade(&self) -> &str {
        &self.selected_grade
    }

    /// The currently active language
    pub fn language(&self) -> Language {
        self.store.language()
    }

    /// The URL the dashboard currently reflects
    pub fn current_url(&self) -> &Url {
        self.navigator.current()
    }

    /// Handle to the translation store
    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    /// Application settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// All selectable tabs in display order: the grades, then ALL
    pub fn grade_tabs() -> Vec<&'static str> {
        GRADES.iter().copied().chain([ALL_TAB]).collect()
    }

    /// Localized label for a grade tab
    pub fn grade_tab_label(&self, tab: &str) -> String {
        match tab {
            "K" => self.store.t("gradeK"),
            ALL_TAB => self.store.t("allGames"),
            grade => format!("{} {}", self.store.t("grade"), grade),
        }
    }

    /// The games visible for the current tab, availability-partitioned
    pub fn visible_games(&self) -> Vec<&Game> {
        visible_games(&self.games, &self.selected_grade)
    }

    /// The secondary catalog section, when the feature flag enables it
    pub fn existing_games(&self) -> Option<&[Game]> {
        self.settings
            .features
            .show_existing_games
            .then_some(self.existing_games.as_slice())
    }

    /// Card details are suppressed on the ALL tab
    pub fn hide_details(&self) -> bool {
        self.selected_grade == ALL_TAB
    }
}
