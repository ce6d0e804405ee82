// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localization engine for terem.
//!
//! Every user-visible string is looked up through a [`Localization`] by a
//! dotted key such as `"menu.main.option.apps"`. Each language lives in its
//! own `key = value` text resource (see [`parser`] for the grammar); the
//! Russian and English dictionaries are compiled in from `locales/`, and a
//! directory on disk can replace them.
//!
//! ## Lookup order
//!
//! 1. the active language,
//! 2. the fallback language ([`FALLBACK_LANGUAGE`]),
//! 3. the key itself, verbatim.
//!
//! Missing translations are never an error; the UI shows raw keys instead.
//!
//! ## Loading
//!
//! Dictionaries are loaded lazily, once, by whichever thread touches the
//! context first. A malformed resource or a missing fallback dictionary fails
//! the whole load; the captured [`LoadError`] stays available through
//! [`Localization::load_error`] and every lookup degrades to the key.
//!
//! ## Supported languages
//!
//! | Code | Language |
//! |------|----------|
//! | ru   | Russian (fallback) |
//! | en   | English  |

pub mod parser;

mod context;
mod error;
mod format;
mod resources;
mod store;

pub use context::Localization;
pub use error::{LanguageError, LoadError, ParseError};
pub use format::{format_template, Args};
pub use parser::{parse_dictionary, unescape, Dictionary};
pub use resources::{
    language_code, DirectoryResources, EmbeddedResources, MemoryResources, ResourceSource,
    RESOURCE_EXTENSION,
};
pub use store::{load_dictionaries, DictionarySet};

/// Language consulted when the active one lacks a key.
///
/// Its dictionary must exist for a load to succeed.
pub const FALLBACK_LANGUAGE: &str = "ru";
