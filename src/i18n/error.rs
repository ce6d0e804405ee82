// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for dictionary parsing, loading and language switching.

use std::io;
use thiserror::Error;

/// A grammar violation inside a single dictionary resource.
///
/// Line numbers are 1-based and count every physical line, including
/// comments and blank lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: missing unescaped '=' between key and value")]
    MalformedLine { line: usize },

    #[error("line {line}: empty key")]
    EmptyKey { line: usize },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedLine { line } | Self::EmptyKey { line } => *line,
        }
    }
}

/// Failure of the one-time dictionary load.
///
/// Captured once per [`Localization`](super::Localization) and handed back
/// unchanged to every caller that asks for it afterwards.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("listing dictionary resources")]
    ListResources {
        #[source]
        source: io::Error,
    },

    #[error("reading dictionary resource {name}")]
    ResourceRead {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("parsing dictionary resource {name}")]
    Parse {
        name: String,
        #[source]
        source: ParseError,
    },

    #[error("fallback language {code} is missing")]
    MissingFallback { code: &'static str },
}

/// Rejection of a language switch; the active language is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("language {code} is not available")]
    Unknown { code: String },
}
