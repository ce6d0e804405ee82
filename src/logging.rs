// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tracing subscriber setup.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::fmt;

/// Where log records ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(String),
    Stderr,
}

pub fn max_level(debug: bool) -> Level {
    if debug {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Install the global subscriber, appending to `log_file` when it can be
/// opened and writing to stderr otherwise.
///
/// Calling this twice is harmless; the second subscriber is discarded.
pub fn init(log_file: &Path, debug: bool) -> LogTarget {
    let level = max_level(debug);
    match open_log(log_file) {
        Ok(file) => {
            let _ = fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
            LogTarget::File(log_file.display().to_string())
        }
        Err(err) => {
            let _ = fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .try_init();
            tracing::warn!(
                path = %log_file.display(),
                error = %err,
                "cannot open log file, logging to stderr"
            );
            LogTarget::Stderr
        }
    }
}

fn open_log(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
