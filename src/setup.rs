// SPDX-License-Identifier: PMPL-1.0-or-later

//! Composition of settings, logging and localization at startup.

use crate::config::Settings;
use crate::i18n::{DirectoryResources, EmbeddedResources, Localization};
use std::sync::Arc;

/// Long-lived application state handed to every command.
#[derive(Debug)]
pub struct AppContext {
    pub settings: Settings,
    pub l10n: Arc<Localization>,
}

impl AppContext {
    /// Build the localization context and apply the requested language.
    ///
    /// Neither a failed dictionary load nor an unsupported language stops
    /// startup; the user sees a warning and untranslated or fallback text.
    pub fn new(settings: Settings) -> Self {
        let l10n = Arc::new(localization_for(&settings));
        let language = apply_startup_language(&l10n, &settings.language);
        if let Some(err) = l10n.load_error() {
            tracing::error!(error = %err, "dictionaries unavailable, showing raw keys");
        }
        tracing::info!(language = %language, "localization ready");
        Self { settings, l10n }
    }

    /// Context for the application's own messages.
    ///
    /// The configured dictionaries when they loaded, otherwise the embedded
    /// ones in the requested language so that messages never show raw keys.
    pub fn messages(&self) -> Arc<Localization> {
        if self.l10n.load_error().is_none() {
            return Arc::clone(&self.l10n);
        }
        let embedded = Localization::embedded();
        if let Err(err) = embedded.set_language(&self.settings.language) {
            tracing::debug!(error = %err, "embedded messages stay in the fallback language");
        }
        Arc::new(embedded)
    }
}

pub fn localization_for(settings: &Settings) -> Localization {
    match &settings.locales_dir {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "using dictionaries from directory");
            Localization::new(DirectoryResources::new(dir))
        }
        None => Localization::new(EmbeddedResources),
    }
}

/// Switch to `requested`, warning on stderr when it is not available.
///
/// Returns the language that ends up active.
pub fn apply_startup_language(l10n: &Localization, requested: &str) -> String {
    if let Err(err) = l10n.set_language(requested) {
        tracing::warn!(error = %err, "startup language rejected");
        eprintln!("{}", unsupported_language_message(l10n, requested));
    }
    l10n.current_language()
}

/// Warning for a language that cannot be activated.
///
/// Worded in English when the dictionaries themselves failed to load.
pub fn unsupported_language_message(l10n: &Localization, requested: &str) -> String {
    if l10n.load_error().is_some() {
        format!("Language {requested} is not available, keeping the default language")
    } else {
        crate::tr!(l10n, "language.warn.unsupported", requested)
    }
}

/// Describe a failed dictionary load, cause chain included.
pub fn load_failure_message(l10n: &Localization) -> Option<String> {
    l10n.load_error()
        .map(|err| format!("Dictionaries failed to load: {}", error_chain(err)))
}

/// `err` followed by each of its sources, joined with `: `.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
