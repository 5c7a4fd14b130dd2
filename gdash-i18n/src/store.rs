//! Translation store with fallback resolution and language-change subscriptions
//!
//! The store is an explicitly constructed service: the composition root builds
//! one [`TranslationStore`] and clones the handle into every collaborator.
//! Cloning is cheap; all clones share the same single-threaded inner state.

use crate::error::{I18nError, I18nResult};
use crate::format::{self, NumberFormatOptions};
use crate::Language;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use tracing::{debug, info, warn};

/// Flat mapping of lookup key to display string for one language.
///
/// Keys are opaque dot-delimited strings (e.g. `existingGamesData.foo.title`);
/// no structural traversal ever happens beyond exact lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable(HashMap<String, String>);

impl TranslationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a key exactly
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, String>> for TranslationTable {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Configuration for constructing a [`TranslationStore`]
#[derive(Debug, Clone, Default)]
pub struct I18nConfig {
    /// Translation tables per language, loaded wholesale at startup
    pub resources: HashMap<Language, TranslationTable>,
    /// Language consulted when a key is missing from the active table
    pub fallback_language: Language,
    /// Emit a warning whenever a lookup falls back to the fallback table
    pub debug: bool,
}

type ListenerRc = Rc<dyn Fn(Language)>;
type ListenerWeak = Weak<dyn Fn(Language)>;

struct StoreInner {
    current_language: Language,
    fallback_language: Language,
    debug: bool,
    tables: HashMap<Language, TranslationTable>,
    /// Subscribers stored as weak references; dead entries are pruned on notify.
    listeners: Vec<ListenerWeak>,
}

/// Process-wide translation lookup service with language-change notification.
///
/// # Invariants
///
/// 1. The fallback language always has a table (checked at construction).
/// 2. Lookups never mutate the store and never fail: resolution falls through
///    active table → fallback table → the raw key itself.
/// 3. [`set_language`](Self::set_language) notifies every live subscriber
///    synchronously before returning; notification iterates a snapshot, so
///    subscribing or unsubscribing from within a callback is safe.
pub struct TranslationStore {
    inner: Rc<RefCell<StoreInner>>,
}

// Manual Clone: shares the same inner state.
impl Clone for TranslationStore {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl std::fmt::Debug for TranslationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("TranslationStore")
            .field("current_language", &inner.current_language)
            .field("fallback_language", &inner.fallback_language)
            .field("languages", &inner.tables.keys().collect::<Vec<_>>())
            .field("listener_count", &inner.listeners.len())
            .finish()
    }
}

impl TranslationStore {
    /// Construct a store from the given configuration.
    ///
    /// The initial language is the fallback language. Fails when the fallback
    /// language has no table, since fallback resolution would be meaningless.
    pub fn new(config: I18nConfig) -> I18nResult<Self> {
        if !config.resources.contains_key(&config.fallback_language) {
            return Err(I18nError::MissingFallbackTable(config.fallback_language));
        }

        info!(
            languages = ?config.resources.keys().collect::<Vec<_>>(),
            fallback = %config.fallback_language,
            "translation store initialized"
        );

        Ok(Self {
            inner: Rc::new(RefCell::new(StoreInner {
                current_language: config.fallback_language,
                fallback_language: config.fallback_language,
                debug: config.debug,
                tables: config.resources,
                listeners: Vec::new(),
            })),
        })
    }

    /// The currently active language
    pub fn language(&self) -> Language {
        self.inner.borrow().current_language
    }

    /// The configured fallback language
    pub fn fallback_language(&self) -> Language {
        self.inner.borrow().fallback_language
    }

    /// Switch the active language and notify all subscribers.
    ///
    /// A language without a loaded table is rejected with a warning and no
    /// state change. Subscribers are invoked synchronously with the new
    /// language before this method returns.
    pub fn set_language(&self, language: Language) {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.tables.contains_key(&language) {
                warn!(language = %language, "language not available");
                return;
            }
            inner.current_language = language;
            if inner.debug {
                debug!(language = %language, "language changed");
            }
        }
        self.notify(language);
    }

    /// Switch the active language by raw tag.
    ///
    /// Unknown tags are rejected with a warning and no state change.
    pub fn set_language_tag(&self, tag: &str) {
        match Language::from_code(tag) {
            Some(language) => self.set_language(language),
            None => warn!(tag, "language not available"),
        }
    }

    /// Resolve a translation key to a display string.
    ///
    /// Resolution order: the active language's table, then the fallback
    /// language's table (with a warning in debug mode), then the raw key
    /// itself. Missing keys are never an error.
    pub fn translate(&self, key: &str) -> String {
        let inner = self.inner.borrow();

        if let Some(value) = inner
            .tables
            .get(&inner.current_language)
            .and_then(|table| table.get(key))
        {
            return value.to_string();
        }

        if let Some(value) = inner
            .tables
            .get(&inner.fallback_language)
            .and_then(|table| table.get(key))
        {
            if inner.debug {
                warn!(
                    key,
                    language = %inner.current_language,
                    fallback = %inner.fallback_language,
                    "translation key missing, using fallback"
                );
            }
            return value.to_string();
        }

        warn!(key, "translation key not found");
        key.to_string()
    }

    /// Shorthand for [`translate`](Self::translate)
    pub fn t(&self, key: &str) -> String {
        self.translate(key)
    }

    /// Subscribe to language changes.
    ///
    /// The callback is invoked with the new language on every successful
    /// [`set_language`](Self::set_language). Dropping the returned
    /// [`Subscription`] unsubscribes exactly that callback; a drop during a
    /// notification pass never retracts a delivery already in flight.
    pub fn on_language_changed(&self, callback: impl Fn(Language) + 'static) -> Subscription {
        let strong: ListenerRc = Rc::new(callback);
        self.inner.borrow_mut().listeners.push(Rc::downgrade(&strong));
        Subscription { _guard: strong }
    }

    /// Number of registered listeners (including dead ones not yet pruned)
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Notify live subscribers and prune dead ones.
    ///
    /// Snapshots the listener set before iterating so callbacks may freely
    /// subscribe or unsubscribe without corrupting the pass.
    fn notify(&self, language: Language) {
        let callbacks: Vec<ListenerRc> = {
            let mut inner = self.inner.borrow_mut();
            inner.listeners.retain(|weak| weak.strong_count() > 0);
            inner.listeners.iter().filter_map(Weak::upgrade).collect()
        };

        for callback in &callbacks {
            callback(language);
        }
    }

    /// Format a number according to the active language's locale conventions.
    ///
    /// Defaults to at most two fraction digits and no trailing zeros; callers
    /// can override via `options`.
    pub fn format_number(&self, value: f64, options: Option<NumberFormatOptions>) -> String {
        format::format_number(self.language(), value, options)
    }

    /// Format a number for screen reader accessibility.
    ///
    /// For Spanish, small integers are rendered as number words for clearer
    /// pronunciation; everything else uses regular number formatting.
    pub fn format_number_for_screen_reader(&self, value: f64) -> String {
        format::format_number_for_screen_reader(self.language(), value)
    }

    /// Format a number as an ordinal (1st, 2nd, 3rd, ...)
    pub fn format_ordinal(&self, value: i64) -> String {
        format::format_ordinal(self.language(), value)
    }

    /// Format a decimal number with fixed precision (default two digits)
    pub fn format_decimal(&self, value: f64, decimals: Option<u8>) -> String {
        format::format_decimal(self.language(), value, decimals.unwrap_or(2))
    }

    /// Format a fraction as `numerator/denominator`
    pub fn format_fraction(&self, numerator: f64, denominator: f64) -> String {
        format::format_fraction(self.language(), numerator, denominator)
    }
}

/// RAII guard for a language-change subscription.
///
/// Dropping the guard drops the strong reference to the callback, so the weak
/// entry in the store's listener list fails to upgrade on the next
/// notification pass and is pruned.
pub struct Subscription {
    _guard: ListenerRc,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn test_store() -> TranslationStore {
        let english: TranslationTable = [
            ("playNow", "Play Now"),
            ("comingSoon", "Coming Soon"),
            ("onlyEnglish", "English only"),
        ]
        .into_iter()
        .collect();
        let spanish: TranslationTable = [
            ("playNow", "Jugar Ahora"),
            ("comingSoon", "Próximamente"),
        ]
        .into_iter()
        .collect();

        TranslationStore::new(I18nConfig {
            resources: [(Language::English, english), (Language::Spanish, spanish)].into(),
            fallback_language: Language::English,
            debug: true,
        })
        .expect("store construction")
    }

    #[test]
    fn test_initial_language_is_fallback() {
        let store = test_store();
        assert_eq!(store.language(), Language::English);
        assert_eq!(store.fallback_language(), Language::English);
    }

    #[test]
    fn test_missing_fallback_table_rejected() {
        let result = TranslationStore::new(I18nConfig {
            resources: [(Language::Spanish, TranslationTable::new())].into(),
            fallback_language: Language::English,
            debug: false,
        });
        assert!(matches!(
            result,
            Err(I18nError::MissingFallbackTable(Language::English))
        ));
    }

    #[test]
    fn test_translate_active_table() {
        let store = test_store();
        assert_eq!(store.translate("playNow"), "Play Now");

        store.set_language(Language::Spanish);
        assert_eq!(store.translate("playNow"), "Jugar Ahora");
    }

    #[test]
    fn test_translate_falls_back_to_fallback_table() {
        let store = test_store();
        store.set_language(Language::Spanish);
        assert_eq!(store.translate("onlyEnglish"), "English only");
    }

    #[test]
    fn test_translate_missing_key_returns_key() {
        let store = test_store();
        assert_eq!(store.translate("nope.not.here"), "nope.not.here");

        store.set_language(Language::Spanish);
        assert_eq!(store.translate("nope.not.here"), "nope.not.here");
    }

    #[test]
    fn test_set_language_tag() {
        let store = test_store();
        store.set_language_tag("es");
        assert_eq!(store.language(), Language::Spanish);

        // Unknown tags leave the store untouched
        store.set_language_tag("fr");
        assert_eq!(store.language(), Language::Spanish);
        store.set_language_tag("");
        assert_eq!(store.language(), Language::Spanish);
    }

    #[test]
    fn test_listener_invoked_exactly_once_per_change() {
        let store = test_store();
        let count = Rc::new(Cell::new(0u32));
        let seen = Rc::new(Cell::new(Language::English));

        let count_clone = Rc::clone(&count);
        let seen_clone = Rc::clone(&seen);
        let _sub = store.on_language_changed(move |lang| {
            count_clone.set(count_clone.get() + 1);
            seen_clone.set(lang);
        });

        store.set_language(Language::Spanish);
        assert_eq!(count.get(), 1);
        assert_eq!(seen.get(), Language::Spanish);

        store.set_language(Language::English);
        assert_eq!(count.get(), 2);
        assert_eq!(seen.get(), Language::English);
    }

    #[test]
    fn test_listener_sees_updated_store() {
        // Synchronous fan-out: the store is fully updated before listeners run
        let store = test_store();
        let observed = Rc::new(Cell::new(Language::English));

        let store_clone = store.clone();
        let observed_clone = Rc::clone(&observed);
        let _sub = store.on_language_changed(move |_| {
            observed_clone.set(store_clone.language());
        });

        store.set_language(Language::Spanish);
        assert_eq!(observed.get(), Language::Spanish);
    }

    #[test]
    fn test_unsubscribed_listener_not_invoked() {
        let store = test_store();
        let count = Rc::new(Cell::new(0u32));

        let count_clone = Rc::clone(&count);
        let sub = store.on_language_changed(move |_| {
            count_clone.set(count_clone.get() + 1);
        });

        store.set_language(Language::Spanish);
        assert_eq!(count.get(), 1);

        drop(sub);

        store.set_language(Language::English);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_unsupported_language_is_noop_without_notification() {
        let english: TranslationTable = [("k", "v")].into_iter().collect();
        let store = TranslationStore::new(I18nConfig {
            resources: [(Language::English, english)].into(),
            fallback_language: Language::English,
            debug: false,
        })
        .expect("store construction");

        let count = Rc::new(Cell::new(0u32));
        let count_clone = Rc::clone(&count);
        let _sub = store.on_language_changed(move |_| {
            count_clone.set(count_clone.get() + 1);
        });

        // Spanish has no table in this store
        store.set_language(Language::Spanish);
        assert_eq!(store.language(), Language::English);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_subscribe_during_notification() {
        let store = test_store();
        let late_count = Rc::new(Cell::new(0u32));
        let late_subs: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));

        let store_clone = store.clone();
        let late_count_clone = Rc::clone(&late_count);
        let late_subs_clone = Rc::clone(&late_subs);
        let _sub = store.on_language_changed(move |_| {
            let inner_count = Rc::clone(&late_count_clone);
            let sub = store_clone.on_language_changed(move |_| {
                inner_count.set(inner_count.get() + 1);
            });
            late_subs_clone.borrow_mut().push(sub);
        });

        // The listener registered during this pass must not fire for it
        store.set_language(Language::Spanish);
        assert_eq!(late_count.get(), 0);

        // But it does fire on the next change
        store.set_language(Language::English);
        assert_eq!(late_count.get(), 1);
    }

    #[test]
    fn test_unsubscribe_during_notification() {
        let store = test_store();
        let count = Rc::new(Cell::new(0u32));
        let held: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let held_clone = Rc::clone(&held);
        let _dropper = store.on_language_changed(move |_| {
            // Drop the other subscription mid-pass
            held_clone.borrow_mut().take();
        });

        let count_clone = Rc::clone(&count);
        let sub = store.on_language_changed(move |_| {
            count_clone.set(count_clone.get() + 1);
        });
        *held.borrow_mut() = Some(sub);

        // The snapshot was taken before the drop, so the in-flight delivery
        // still happens; subsequent changes no longer reach the callback.
        store.set_language(Language::Spanish);
        assert_eq!(count.get(), 1);

        store.set_language(Language::English);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_dead_listeners_pruned_on_notify() {
        let store = test_store();
        let sub_a = store.on_language_changed(|_| {});
        let _sub_b = store.on_language_changed(|_| {});
        assert_eq!(store.listener_count(), 2);

        drop(sub_a);
        assert_eq!(store.listener_count(), 2);

        store.set_language(Language::Spanish);
        assert_eq!(store.listener_count(), 1);
    }

    #[test]
    fn test_clone_shares_state() {
        let store = test_store();
        let clone = store.clone();

        clone.set_language(Language::Spanish);
        assert_eq!(store.language(), Language::Spanish);
    }

    #[test]
    fn test_table_from_iterators() {
        let table: TranslationTable = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.get("a"), Some("1"));
        assert_eq!(table.get("missing"), None);
    }
}
