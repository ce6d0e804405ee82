// SPDX-License-Identifier: PMPL-1.0-or-later

//! Building the full per-language dictionary set from a resource source.

use super::error::LoadError;
use super::parser::{parse_dictionary, Dictionary};
use super::resources::{language_code, ResourceSource};
use super::FALLBACK_LANGUAGE;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

/// Every loaded language, keyed by language code.
///
/// Dictionaries sit behind `Arc` so lookups can snapshot them and release
/// the lock before formatting.
#[derive(Debug, Clone, Default)]
pub struct DictionarySet {
    languages: HashMap<String, Arc<Dictionary>>,
}

impl DictionarySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: impl Into<String>, dictionary: Dictionary) {
        self.languages.insert(code.into(), Arc::new(dictionary));
    }

    pub fn get(&self, code: &str) -> Option<&Arc<Dictionary>> {
        self.languages.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.languages.contains_key(code)
    }

    pub fn codes(&self) -> BTreeSet<String> {
        self.languages.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Read and parse every qualifying resource in `source`.
///
/// The first unreadable or malformed resource aborts the load. A set that
/// parsed cleanly but lacks [`FALLBACK_LANGUAGE`] is rejected as a whole.
pub fn load_dictionaries(source: &dyn ResourceSource) -> Result<DictionarySet, LoadError> {
    let names = source
        .names()
        .map_err(|source| LoadError::ListResources { source })?;

    let mut set = DictionarySet::new();
    for name in &names {
        let Some(code) = language_code(name) else {
            tracing::trace!(resource = %name, "skipping non-dictionary resource");
            continue;
        };

        let raw = source.read(name).map_err(|err| LoadError::ResourceRead {
            name: name.clone(),
            source: err,
        })?;
        let dictionary = parse_dictionary(&raw).map_err(|err| LoadError::Parse {
            name: name.clone(),
            source: err,
        })?;

        tracing::debug!(language = code, keys = dictionary.len(), "parsed dictionary");
        set.insert(code, dictionary);
    }

    if !set.contains(FALLBACK_LANGUAGE) {
        return Err(LoadError::MissingFallback {
            code: FALLBACK_LANGUAGE,
        });
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::error::ParseError;
    use crate::i18n::resources::MemoryResources;

    #[test]
    fn loads_every_qualifying_resource() {
        let source = MemoryResources::new()
            .with("ru.txt", "greeting = Привет")
            .with("en.txt", "greeting = Hello")
            .with(".draft.txt", "broken")
            .with("README.md", "not a dictionary");
        let set = load_dictionaries(&source).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("en").unwrap().get("greeting"), Some("Hello"));
    }

    #[test]
    fn malformed_resource_aborts_load() {
        let source = MemoryResources::new()
            .with("ru.txt", "greeting = Привет")
            .with("en.txt", "greeting Hello");
        match load_dictionaries(&source) {
            Err(LoadError::Parse { name, source }) => {
                assert_eq!(name, "en.txt");
                assert_eq!(source, ParseError::MalformedLine { line: 1 });
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn missing_fallback_is_an_error() {
        let source = MemoryResources::new().with("en.txt", "greeting = Hello");
        assert!(matches!(
            load_dictionaries(&source),
            Err(LoadError::MissingFallback { code: "ru" })
        ));
    }
}
