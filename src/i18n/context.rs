// SPDX-License-Identifier: PMPL-1.0-or-later

//! The localization context shared by every part of the application.

use super::error::{LanguageError, LoadError};
use super::format::{format_template, Args};
use super::parser::Dictionary;
use super::resources::{EmbeddedResources, ResourceSource};
use super::store::{load_dictionaries, DictionarySet};
use super::FALLBACK_LANGUAGE;
use std::collections::BTreeSet;
use std::fmt::Display;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Language dictionaries plus the active language.
///
/// Built once by the composition root and shared by reference (or `Arc`).
/// Nothing is read from the resource source until the first call into the
/// context; that call loads every dictionary while concurrent callers wait,
/// and the outcome is kept for the life of the value. A failed load is never
/// retried: translations then degrade to returning the key itself and
/// [`load_error`](Self::load_error) reports why.
pub struct Localization {
    source: Box<dyn ResourceSource>,
    loaded: OnceLock<Result<(), LoadError>>,
    state: RwLock<State>,
}

struct State {
    dictionaries: DictionarySet,
    current: String,
}

impl Localization {
    pub fn new(source: impl ResourceSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            loaded: OnceLock::new(),
            state: RwLock::new(State {
                dictionaries: DictionarySet::new(),
                current: FALLBACK_LANGUAGE.to_string(),
            }),
        }
    }

    /// Context backed by the dictionaries compiled into the binary.
    pub fn embedded() -> Self {
        Self::new(EmbeddedResources)
    }

    /// Translate `key` in the active language.
    ///
    /// Falls back to the fallback language, then to `key` itself.
    pub fn translate(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| key.to_string())
    }

    /// Translate `key` and substitute `args` into the template found.
    ///
    /// When no template exists the key is returned as-is and `args` are
    /// ignored. Arity mismatches show up inline in the result, see
    /// [`format_template`].
    pub fn translate_with(&self, key: &str, args: &[&dyn Display]) -> String {
        match self.lookup(key) {
            Some(template) if !args.is_empty() => {
                tracing::trace!(key, args = ?Args(args), "formatting translation");
                format_template(&template, args)
            }
            Some(template) => template,
            None => key.to_string(),
        }
    }

    /// Switch the active language.
    ///
    /// Unknown codes are rejected and leave the active language unchanged.
    pub fn set_language(&self, code: &str) -> Result<(), LanguageError> {
        self.ensure_loaded();

        let mut state = self.write_state();
        if !state.dictionaries.contains(code) {
            return Err(LanguageError::Unknown {
                code: code.to_string(),
            });
        }
        state.current = code.to_string();
        drop(state);

        tracing::debug!(language = code, "active language changed");
        Ok(())
    }

    pub fn current_language(&self) -> String {
        self.read_state().current.clone()
    }

    /// Codes of every loaded language. Empty when the load failed.
    pub fn available_languages(&self) -> BTreeSet<String> {
        self.ensure_loaded();
        self.read_state().dictionaries.codes()
    }

    /// The error captured by the one-time load, if it failed.
    pub fn load_error(&self) -> Option<&LoadError> {
        self.ensure_loaded().as_ref().err()
    }

    /// Whether the one-time load has already run, successfully or not.
    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.ensure_loaded();

        let (active, fallback) = self.snapshot();
        active
            .as_deref()
            .and_then(|dict| dict.get(key))
            .or_else(|| fallback.as_deref().and_then(|dict| dict.get(key)))
            .map(str::to_string)
    }

    fn snapshot(&self) -> (Option<Arc<Dictionary>>, Option<Arc<Dictionary>>) {
        let state = self.read_state();
        (
            state.dictionaries.get(&state.current).cloned(),
            state.dictionaries.get(FALLBACK_LANGUAGE).cloned(),
        )
    }

    fn ensure_loaded(&self) -> &Result<(), LoadError> {
        self.loaded.get_or_init(|| self.load())
    }

    fn load(&self) -> Result<(), LoadError> {
        let dictionaries = match load_dictionaries(self.source.as_ref()) {
            Ok(dictionaries) => dictionaries,
            Err(err) => {
                tracing::error!(error = %err, "failed to load dictionaries");
                return Err(err);
            }
        };

        let mut state = self.write_state();
        let count = dictionaries.len();
        state.dictionaries = dictionaries;
        if !state.dictionaries.contains(&state.current) {
            state.current = FALLBACK_LANGUAGE.to_string();
        }
        drop(state);

        tracing::info!(languages = count, "dictionaries loaded");
        Ok(())
    }

    fn read_state(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Localization {
    fn default() -> Self {
        Self::embedded()
    }
}

impl std::fmt::Debug for Localization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localization")
            .field("loaded", &self.is_loaded())
            .field("current", &self.read_state().current)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::resources::MemoryResources;

    fn sample() -> Localization {
        Localization::new(
            MemoryResources::new()
                .with(
                    "ru.txt",
                    "greeting = Привет, %s!\nonly.ru = Только по-русски\nempty =",
                )
                .with("en.txt", "greeting = Hello, %s!\nempty.en ="),
        )
    }

    #[test]
    fn starts_unloaded_with_fallback_language() {
        let l10n = sample();
        assert!(!l10n.is_loaded());
        assert_eq!(l10n.current_language(), FALLBACK_LANGUAGE);
        assert!(!l10n.is_loaded(), "reading the language must not load");
    }

    #[test]
    fn translate_triggers_load() {
        let l10n = sample();
        assert_eq!(l10n.translate("only.ru"), "Только по-русски");
        assert!(l10n.is_loaded());
        assert!(l10n.load_error().is_none());
    }

    #[test]
    fn switch_and_format() {
        let l10n = sample();
        l10n.set_language("en").unwrap();
        assert_eq!(l10n.current_language(), "en");
        assert_eq!(l10n.translate_with("greeting", &[&"World"]), "Hello, World!");
        assert_eq!(l10n.translate("only.ru"), "Только по-русски");
    }

    #[test]
    fn unknown_language_leaves_state() {
        let l10n = sample();
        l10n.set_language("en").unwrap();
        let err = l10n.set_language("xx").unwrap_err();
        assert_eq!(err, LanguageError::Unknown { code: "xx".into() });
        assert_eq!(l10n.current_language(), "en");
    }

    #[test]
    fn missing_key_degrades_to_key_and_ignores_args() {
        let l10n = sample();
        assert_eq!(l10n.translate("no.such.key"), "no.such.key");
        assert_eq!(l10n.translate_with("%s %d", &[&"x", &1]), "%s %d");
    }

    #[test]
    fn empty_value_is_not_missing() {
        let l10n = sample();
        assert_eq!(l10n.translate("empty"), "");
        l10n.set_language("en").unwrap();
        assert_eq!(l10n.translate("empty.en"), "");
    }

    #[test]
    fn template_without_args_is_returned_raw() {
        let l10n = sample();
        assert_eq!(l10n.translate("greeting"), "Привет, %s!");
    }

    #[test]
    fn failed_load_is_replayed_and_degrades() {
        let l10n = Localization::new(MemoryResources::new().with("ru.txt", "broken"));
        assert_eq!(l10n.translate("greeting"), "greeting");
        assert!(matches!(l10n.load_error(), Some(LoadError::Parse { .. })));
        assert!(matches!(l10n.load_error(), Some(LoadError::Parse { .. })));
        assert!(l10n.available_languages().is_empty());
        assert!(l10n.set_language("ru").is_err());
        assert_eq!(l10n.current_language(), FALLBACK_LANGUAGE);
    }

    #[test]
    fn embedded_dictionaries_load() {
        let l10n = Localization::embedded();
        assert!(l10n.load_error().is_none());
        let langs = l10n.available_languages();
        assert!(langs.contains("ru"));
        assert!(langs.contains("en"));
        l10n.set_language("en").unwrap();
        assert_eq!(l10n.translate("menu.main.option.apps"), "Applications");
    }
}
