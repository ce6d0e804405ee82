// SPDX-License-Identifier: PMPL-1.0-or-later

//! Named text resources holding one language dictionary each.
//!
//! A resource named `en.txt` provides language `en`. Names starting with a
//! dot are hidden and skipped, as are names carrying any extension other
//! than `.txt`. A bare name without an extension is taken verbatim as the
//! language code.

use std::fs;
use std::io;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Extension recognised on dictionary resources.
pub const RESOURCE_EXTENSION: &str = "txt";

const EMBEDDED: &[(&str, &str)] = &[
    ("en.txt", include_str!("../../locales/en.txt")),
    ("ru.txt", include_str!("../../locales/ru.txt")),
];

/// An enumerable collection of dictionary resources.
pub trait ResourceSource: Send + Sync {
    /// Names of every resource, qualifying or not.
    fn names(&self) -> io::Result<Vec<String>>;

    /// Full text of the resource called `name`.
    fn read(&self, name: &str) -> io::Result<String>;
}

/// Derive the language code from a resource name.
///
/// # Examples
///
/// ```
/// use terem::i18n::language_code;
///
/// assert_eq!(language_code("en.txt"), Some("en"));
/// assert_eq!(language_code("ru"), Some("ru"));
/// assert_eq!(language_code(".hidden.txt"), None);
/// assert_eq!(language_code("notes.md"), None);
/// ```
pub fn language_code(name: &str) -> Option<&str> {
    if name.starts_with('.') {
        return None;
    }
    let code = match name.rsplit_once('.') {
        Some((stem, ext)) if ext == RESOURCE_EXTENSION => stem,
        Some(_) => return None,
        None => name,
    };
    (!code.is_empty()).then_some(code)
}

/// Dictionaries compiled into the binary from `locales/`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedResources;

impl ResourceSource for EmbeddedResources {
    fn names(&self) -> io::Result<Vec<String>> {
        Ok(EMBEDDED.iter().map(|(name, _)| (*name).to_string()).collect())
    }

    fn read(&self, name: &str) -> io::Result<String> {
        EMBEDDED
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, body)| (*body).to_string())
            .ok_or_else(|| not_found(name))
    }
}

/// Dictionaries read from files directly inside a directory.
///
/// Symlinks to files are followed; subdirectories and dangling links are
/// ignored.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceSource for DirectoryResources {
    fn names(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(io::Error::from)?;
            // follows symlinks; dangling ones report false
            if !entry.path().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn read(&self, name: &str) -> io::Result<String> {
        fs::read_to_string(self.root.join(name))
    }
}

/// In-memory resources, mostly for tests and tooling.
#[derive(Debug, Default, Clone)]
pub struct MemoryResources {
    entries: Vec<(String, String)>,
}

impl MemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, body: impl Into<String>) -> Self {
        self.entries.push((name.into(), body.into()));
        self
    }
}

impl ResourceSource for MemoryResources {
    fn names(&self) -> io::Result<Vec<String>> {
        Ok(self.entries.iter().map(|(name, _)| name.clone()).collect())
    }

    fn read(&self, name: &str) -> io::Result<String> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, body)| body.clone())
            .ok_or_else(|| not_found(name))
    }
}

fn not_found(name: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("resource {} not found", name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_code_rules() {
        assert_eq!(language_code("en.txt"), Some("en"));
        assert_eq!(language_code("pt-BR.txt"), Some("pt-BR"));
        assert_eq!(language_code("kk"), Some("kk"));
        assert_eq!(language_code(".ru.txt"), None);
        assert_eq!(language_code(".gitkeep"), None);
        assert_eq!(language_code("readme.md"), None);
        assert_eq!(language_code("en.txt.bak"), None);
        assert_eq!(language_code("en.old.txt"), Some("en.old"));
    }

    #[test]
    fn embedded_resources_include_fallback() {
        let names = EmbeddedResources.names().unwrap();
        assert!(names.iter().any(|name| name == "ru.txt"));
        let body = EmbeddedResources.read("ru.txt").unwrap();
        assert!(body.contains("app.title"));
    }

    #[test]
    fn memory_resource_missing_name_is_not_found() {
        let source = MemoryResources::new().with("en.txt", "a = b");
        let err = source.read("de.txt").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn directory_lists_files_only() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("en.txt"), "a = b").unwrap();
        fs::create_dir(dir.path().join("nested.txt")).unwrap();
        let source = DirectoryResources::new(dir.path());
        assert_eq!(source.names().unwrap(), vec!["en.txt".to_string()]);
        assert_eq!(source.read("en.txt").unwrap(), "a = b");
    }

    #[cfg(unix)]
    #[test]
    fn directory_follows_symlinked_dictionaries() {
        let shared = tempfile::TempDir::new().unwrap();
        let target = shared.path().join("english.txt");
        fs::write(&target, "a = linked").unwrap();

        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("ru.txt"), "a = б").unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("en.txt")).unwrap();
        std::os::unix::fs::symlink(shared.path().join("gone.txt"), dir.path().join("de.txt"))
            .unwrap();

        let source = DirectoryResources::new(dir.path());
        assert_eq!(
            source.names().unwrap(),
            vec!["en.txt".to_string(), "ru.txt".to_string()]
        );
        assert_eq!(source.read("en.txt").unwrap(), "a = linked");
    }
}
