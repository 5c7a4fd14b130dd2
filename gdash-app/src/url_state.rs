//! URL query state: the `grade` and `lang` parameter pair
//!
//! The query string is the single source of truth for shareable dashboard
//! state. Both parameters are omitted from the URL when they hold their
//! default value (grade `K`, language English).

use gdash_i18n::Language;
use url::Url;

/// Grade tabs in display order, without the ALL tab
pub const GRADES: [&str; 9] = ["K", "1", "2", "3", "4", "5", "6", "7", "8"];

/// The ALL-games tab selector value
pub const ALL_TAB: &str = "ALL";

/// Grade selected when the URL carries none (omitted from the URL)
pub const DEFAULT_GRADE: &str = "K";

/// The raw `grade`/`lang` pair read from a URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub grade: Option<String>,
    pub lang: Option<String>,
}

/// A partial update to the URL state; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateUpdate {
    pub grade: Option<String>,
    pub lang: Option<Language>,
}

impl StateUpdate {
    /// Update only the grade parameter
    pub fn grade(grade: impl Into<String>) -> Self {
        Self {
            grade: Some(grade.into()),
            lang: None,
        }
    }

    /// Update only the language parameter
    pub fn lang(lang: Language) -> Self {
        Self {
            grade: None,
            lang: Some(lang),
        }
    }
}

/// Parse the `grade` and `lang` parameters from a URL.
///
/// The first occurrence of each parameter wins.
pub fn read_state(url: &Url) -> QueryState {
    let mut state = QueryState::default();
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "grade" if state.grade.is_none() => state.grade = Some(value.into_owned()),
            "lang" if state.lang.is_none() => state.lang = Some(value.into_owned()),
            _ => {}
        }
    }
    state
}

/// Whether a raw value names a selectable tab (a grade or ALL)
pub fn is_valid_grade(raw: &str) -> bool {
    raw == ALL_TAB || GRADES.contains(&raw)
}

/// Normalize a raw grade value from the URL.
///
/// Members of the grade set pass through; anything else, including an
/// absent value, yields the default grade. Never fails.
pub fn validate_grade(raw: Option<&str>) -> String {
    match raw {
        Some(value) if is_valid_grade(value) => value.to_string(),
        _ => DEFAULT_GRADE.to_string(),
    }
}

/// Merge a state update into a URL's query string.
///
/// Updated fields replace any existing occurrence; a field equal to its
/// default (grade `K`, language English) is omitted entirely. Parameters the
/// update does not name are preserved.
pub fn write_state(url: &mut Url, update: &StateUpdate) {
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "grade" if update.grade.is_some() => {}
            "lang" if update.lang.is_some() => {}
            _ => pairs.push((key.into_owned(), value.into_owned())),
        }
    }

    if let Some(grade) = &update.grade {
        if grade != DEFAULT_GRADE {
            pairs.push(("grade".to_string(), grade.clone()));
        }
    }

    if let Some(lang) = update.lang {
        if lang == Language::Spanish {
            pairs.push(("lang".to_string(), lang.code().to_string()));
        }
    }

    if pairs.is_empty() {
        url.set_query(None);
    } else {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&pairs)
            .finish();
        url.set_query(Some(&query));
    }
}
