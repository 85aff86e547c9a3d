//! UI strings. The page starts in English, which is also what the
//! `data-cy` markup is checked against; other languages only apply after the
//! user picks one in the navbar.

use dioxus::prelude::*;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Clone, Debug, Default, Deserialize)]
struct Bundle(HashMap<String, String>);

pub const FALLBACK_LANG: &str = "en";

/// (code, bundle source) for every language offered in the switcher.
pub const LANGUAGES: [(&str, &str); 2] = [
    ("en", include_str!("../assets/i18n/en.json")),
    ("es", include_str!("../assets/i18n/es.json")),
];

static BUNDLES: Lazy<HashMap<&'static str, Bundle>> = Lazy::new(|| {
    LANGUAGES
        .iter()
        .map(|(code, json)| (*code, serde_json::from_str::<Bundle>(json).unwrap_or_default()))
        .collect()
});

#[derive(Clone, Debug, PartialEq)]
pub struct I18nState {
    pub lang: String,
}

impl Default for I18nState {
    fn default() -> Self {
        Self { lang: FALLBACK_LANG.to_string() }
    }
}

impl I18nState {
    /// Unsupported codes fall back to English.
    pub fn with_lang(lang: &str) -> Self {
        let lang = lang.trim().to_lowercase();
        if LANGUAGES.iter().any(|(code, _)| *code == lang) {
            Self { lang }
        } else {
            Self::default()
        }
    }
}

pub fn provide_i18n() {
    let sig: Signal<I18nState> = use_signal(I18nState::default);
    use_context_provider(|| sig);
}

pub fn use_i18n() -> Signal<I18nState> { use_context::<Signal<I18nState>>() }

pub fn set_lang(mut sig: Signal<I18nState>, lang: &str) {
    let next = I18nState::with_lang(lang);
    tracing::debug!(lang = %next.lang, "language changed");
    sig.set(next);
}

/// Looks `key` up in the active language, falling back to English and then
/// to the key itself. Safe to call anywhere under the app root.
pub fn t(key: &str) -> String {
    let lang = try_consume_context::<Signal<I18nState>>()
        .map(|sig| sig.read().lang.clone())
        .unwrap_or_else(|| FALLBACK_LANG.to_string());
    translate(&lang, key)
}

pub fn translate(lang: &str, key: &str) -> String {
    let bundles = &*BUNDLES;
    bundles
        .get(lang)
        .and_then(|b| b.0.get(key).cloned())
        .or_else(|| bundles.get(FALLBACK_LANG).and_then(|b| b.0.get(key).cloned()))
        .unwrap_or_else(|| key.to_string())
}
