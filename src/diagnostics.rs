// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dictionary audit behind `terem check`.
//!
//! Unlike the runtime load, which stops at the first bad resource, the audit
//! parses every resource on its own and reports all of them.

use crate::i18n::{
    language_code, parse_dictionary, Dictionary, Localization, ResourceSource,
    FALLBACK_LANGUAGE,
};
use crate::tr;
use anyhow::{Context, Result};
use colored::*;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub label: String,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: impl Into<String>, level: Level, detail: String) -> Self {
        Self {
            label: label.into(),
            level,
            detail,
        }
    }

    fn ok(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    pub fn line(&self) -> String {
        format!("  [{}] {:12} {}", self.level.tag(), self.label, self.detail)
    }
}

/// Audit outcome for a whole resource source.
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub entries: Vec<Diagnostic>,
}

impl AuditReport {
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|entry| entry.level == Level::Error)
    }

    pub fn print(&self) {
        for entry in &self.entries {
            println!("{}", entry.line());
        }
    }
}

/// Parse every dictionary in `source` and compare key coverage with the
/// fallback language. Report details are worded through `l10n`.
pub fn audit(l10n: &Localization, source: &dyn ResourceSource) -> Result<AuditReport> {
    let names = source.names().context("listing dictionary resources")?;

    let mut report = AuditReport::default();
    let mut parsed: BTreeMap<String, Dictionary> = BTreeMap::new();

    for name in &names {
        let Some(code) = language_code(name) else {
            continue;
        };
        let result = source
            .read(name)
            .map_err(|err| tr!(l10n, "cli.check.unreadable", err))
            .and_then(|raw| parse_dictionary(&raw).map_err(|err| err.to_string()));
        match result {
            Ok(dict) => {
                let detail = tr!(l10n, "cli.check.keys", dict.len());
                report.entries.push(Diagnostic::ok(name.as_str(), detail));
                parsed.insert(code.to_string(), dict);
            }
            Err(detail) => report.entries.push(Diagnostic::error(name.as_str(), detail)),
        }
    }

    match parsed.get(FALLBACK_LANGUAGE) {
        Some(fallback) => {
            for (code, dict) in parsed.iter().filter(|(code, _)| *code != FALLBACK_LANGUAGE) {
                let mut missing: Vec<&str> = fallback
                    .keys()
                    .filter(|key| !dict.contains_key(key))
                    .collect();
                if missing.is_empty() {
                    continue;
                }
                missing.sort_unstable();
                report.entries.push(Diagnostic::warning(
                    code.as_str(),
                    format!(
                        "{}: {}",
                        tr!(l10n, "cli.check.missing", missing.len()),
                        missing.join(", ")
                    ),
                ));
            }
        }
        None => report.entries.push(Diagnostic::error(
            FALLBACK_LANGUAGE,
            tr!(l10n, "cli.check.no_fallback", FALLBACK_LANGUAGE),
        )),
    }

    Ok(report)
}
