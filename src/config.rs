// SPDX-License-Identifier: PMPL-1.0-or-later

//! Application settings loaded from YAML with environment overrides.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "/opt/etc/terem/config.yaml";
pub const DEFAULT_LOG_FILE: &str = "/tmp/terem.log";
pub const DEFAULT_LANGUAGE: &str = "en";

pub const LANG_ENV: &str = "TEREM_LANG";
pub const LOCALES_ENV: &str = "TEREM_LOCALES";
pub const LOG_ENV: &str = "TEREM_LOG";
pub const DEBUG_ENV: &str = "DEBUG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Language requested at startup.
    pub language: String,
    /// Directory of `<code>.txt` dictionaries replacing the embedded ones.
    pub locales_dir: Option<PathBuf>,
    pub log_file: PathBuf,
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            locales_dir: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            debug: false,
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("reading config {}", path.display()))
            }
        };
        Self::from_yaml(&content).with_context(|| format!("parsing yaml config {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply overrides read through `lookup` (normally the process environment).
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(language) = non_empty(lookup(LANG_ENV)) {
            self.language = language;
        }
        if let Some(dir) = non_empty(lookup(LOCALES_ENV)) {
            self.locales_dir = Some(PathBuf::from(dir));
        }
        if let Some(file) = non_empty(lookup(LOG_ENV)) {
            self.log_file = PathBuf::from(file);
        }
        if let Some(flag) = non_empty(lookup(DEBUG_ENV)) {
            self.debug = parse_flag(&flag);
        }
    }

    pub fn apply_process_env(&mut self) {
        self.apply_env(|key| std::env::var(key).ok());
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
