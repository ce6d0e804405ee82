// SPDX-License-Identifier: PMPL-1.0-or-later

//! Line-oriented `key = value` dictionary format.
//!
//! ```text
//! # comment
//! ; also a comment
//! menu.main.option.apps = Applications
//! path\=root = /opt/etc
//! banner = first line\nsecond line
//! ```
//!
//! Each line is trimmed, then split on the first `=` that is not preceded by
//! an escaping backslash. Key and value are unescaped and only then trimmed,
//! so whitespace produced by `\t`, `\n` or `\r` at either end is removed
//! along with literal blanks; only interior escapes survive.
//!
//! A single bad line rejects the whole resource.

use super::error::ParseError;
use std::collections::HashMap;

/// Flat mapping from translation key to template for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or replace a template. Later definitions of a key win.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = Dictionary::new();
        for (key, value) in iter {
            dictionary.insert(key, value);
        }
        dictionary
    }
}

/// Parse one language resource into a [`Dictionary`].
///
/// # Examples
///
/// ```
/// use terem::i18n::parse_dictionary;
///
/// let dict = parse_dictionary("# paths\npath\\=root=/opt/etc\n").unwrap();
/// assert_eq!(dict.get("path=root"), Some("/opt/etc"));
/// ```
pub fn parse_dictionary(data: &str) -> Result<Dictionary, ParseError> {
    let mut dictionary = Dictionary::new();

    for (index, raw_line) in data.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        let (raw_key, raw_value) = split_key_value(line).ok_or(ParseError::MalformedLine {
            line: line_number,
        })?;

        let key = unescape(raw_key);
        let key = key.trim();
        if key.is_empty() {
            return Err(ParseError::EmptyKey { line: line_number });
        }
        let value = unescape(raw_value);

        dictionary.insert(key, value.trim());
    }

    Ok(dictionary)
}

/// Split `line` at its first unescaped `=`.
///
/// Returns `None` when every `=` on the line is escaped, or there is none.
pub fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let mut escaped = false;
    for (idx, ch) in line.char_indices() {
        if ch == '=' && !escaped {
            return Some((&line[..idx], &line[idx + 1..]));
        }
        if ch == '\\' && !escaped {
            escaped = true;
            continue;
        }
        escaped = false;
    }
    None
}

/// Decode backslash escapes.
///
/// `\n`, `\t` and `\r` become control characters; any other escaped
/// character (including `=` and `\`) stands for itself. A lone backslash at
/// the very end is kept as a literal backslash.
pub fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut escaped = false;

    for ch in input.chars() {
        if escaped {
            out.push(match ch {
                'n' => '\n',
                't' => '\t',
                'r' => '\r',
                other => other,
            });
            escaped = false;
            continue;
        }
        if ch == '\\' {
            escaped = true;
            continue;
        }
        out.push(ch);
    }

    if escaped {
        out.push('\\');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_pairs_and_skips_comments() {
        let dict = parse_dictionary(
            "# header\n\n; note\n  app.title = Terem  \nmenu.exit=Exit\n",
        )
        .unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("app.title"), Some("Terem"));
        assert_eq!(dict.get("menu.exit"), Some("Exit"));
    }

    #[test]
    fn escaped_equals_in_key() {
        let dict = parse_dictionary(r"path\=root=/opt/etc").unwrap();
        assert_eq!(dict.get("path=root"), Some("/opt/etc"));
    }

    #[test]
    fn value_may_contain_equals_after_split() {
        let dict = parse_dictionary("expr = a=b=c").unwrap();
        assert_eq!(dict.get("expr"), Some("a=b=c"));
    }

    #[test]
    fn empty_value_is_kept() {
        let dict = parse_dictionary("blank =   ").unwrap();
        assert_eq!(dict.get("blank"), Some(""));
    }

    #[test]
    fn missing_delimiter_reports_line() {
        let err = parse_dictionary("# c\nok = yes\nbroken line\n").unwrap_err();
        assert_eq!(err, ParseError::MalformedLine { line: 3 });
    }

    #[test]
    fn only_escaped_delimiter_is_malformed() {
        let err = parse_dictionary(r"key\=value").unwrap_err();
        assert_eq!(err, ParseError::MalformedLine { line: 1 });
    }

    #[test]
    fn empty_key_reports_line() {
        let err = parse_dictionary("a = 1\n = orphan\n").unwrap_err();
        assert_eq!(err, ParseError::EmptyKey { line: 2 });
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn whitespace_only_key_after_unescape_is_empty() {
        let err = parse_dictionary("  \\  = value").unwrap_err();
        assert_eq!(err, ParseError::EmptyKey { line: 1 });
    }

    #[test]
    fn unescape_decodes_known_sequences() {
        assert_eq!(unescape(r"a\nb\tc\rd"), "a\nb\tc\rd");
        assert_eq!(unescape(r"x\=y"), "x=y");
        assert_eq!(unescape(r"back\\slash"), r"back\slash");
        assert_eq!(unescape(r"\q"), "q");
        assert_eq!(unescape(r"trailing\"), r"trailing\");
        assert_eq!(unescape("тест\\ю"), "тестю");
    }

    #[test]
    fn escaped_boundary_whitespace_is_unescaped_before_trim() {
        let dict = parse_dictionary(r"k = \tindented").unwrap();
        // unescape yields "\tindented" and trim then strips the tab as well
        assert_eq!(dict.get("k"), Some("indented"));

        let dict = parse_dictionary(r"k = \\ ").unwrap();
        assert_eq!(dict.get("k"), Some(r"\"));
    }

    #[test]
    fn multiline_value() {
        let dict = parse_dictionary(r"banner = one\ntwo").unwrap();
        assert_eq!(dict.get("banner"), Some("one\ntwo"));
    }

    #[test]
    fn later_duplicate_wins() {
        let dict = parse_dictionary("k = first\nk = second").unwrap();
        assert_eq!(dict.get("k"), Some("second"));
    }

    #[test]
    fn crlf_line_endings() {
        let dict = parse_dictionary("a = 1\r\nb = 2\r\n").unwrap();
        assert_eq!(dict.get("a"), Some("1"));
        assert_eq!(dict.get("b"), Some("2"));
    }

    #[test]
    fn split_tracks_escape_state() {
        assert_eq!(split_key_value(r"a\\=b"), Some((r"a\\", "b")));
        assert_eq!(split_key_value(r"a\=b=c"), Some((r"a\=b", "c")));
        assert_eq!(split_key_value("no delimiter"), None);
    }
}
