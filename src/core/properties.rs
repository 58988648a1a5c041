//! Properties file parsing.
//!
//! Reads the flat `key=value` format used by `key.properties`. The parser
//! follows the conventions Android tooling expects from that file: `#` and
//! `!` comments, `=`, `:` or whitespace separators, backslash line
//! continuations and backslash escapes.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, SigningError};

/// A parsed properties file.
///
/// Keys are unique; when a key repeats, the last value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse properties from text.
    pub fn parse(contents: &str) -> Self {
        let mut entries = BTreeMap::new();

        for line in logical_lines(contents) {
            let (key, value) = split_entry(&line);
            entries.insert(unescape(key), unescape(value));
        }

        Self { entries }
    }

    /// Load a properties file, treating a missing file as an empty mapping.
    ///
    /// Contents are decoded as UTF-8 when valid and as ISO-8859-1 otherwise,
    /// so byte content never fails the load.
    ///
    /// # Errors
    ///
    /// Returns `SigningError::ReadFile` for read failures other than the file
    /// not existing (permission denied, path is a directory).
    pub fn load_or_empty(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading properties");

        match std::fs::read(path) {
            Ok(bytes) => {
                let props = Self::parse(&decode(bytes));
                debug!(entries = props.len(), "properties loaded");
                Ok(props)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "properties file absent, using empty mapping");
                Ok(Self::new())
            }
            Err(source) => Err(SigningError::ReadFile {
                path: path.to_path_buf(),
                source,
            }
            .into()),
        }
    }

    /// Get a value by exact key match.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the key is present (even with an empty value).
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Decode file bytes, falling back to ISO-8859-1 for non-UTF-8 content.
fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
    }
}

/// Whitespace accepted around keys and separators.
fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{000c}')
}

/// Split on `\n`, `\r\n` or a bare `\r`.
fn physical_lines(contents: &str) -> impl Iterator<Item = &str> {
    let mut rest = contents;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(i) => {
                let line = &rest[..i];
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + skip..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// Join continuation lines and drop blanks and comments.
fn logical_lines(contents: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut continuing = false;

    for raw in physical_lines(contents) {
        let line = raw.trim_start_matches(is_blank);

        if !continuing && (line.is_empty() || line.starts_with('#') || line.starts_with('!')) {
            continue;
        }

        if ends_with_continuation(line) {
            current.push_str(&line[..line.len() - 1]);
            continuing = true;
            continue;
        }

        current.push_str(line);
        continuing = false;
        lines.push(std::mem::take(&mut current));
    }

    // A continuation on the final line still yields the entry.
    if continuing && !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// An odd number of trailing backslashes continues the line.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split a logical line into raw (still escaped) key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut key_end = line.len();
    let mut escaped = false;

    for (i, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if is_blank(c) => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start_matches(is_blank);

    // Whitespace may be followed by an explicit separator.
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = stripped.trim_start_matches(is_blank);
    }

    (key, rest)
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000c}'),
            Some('u') => {
                let hex: String = chars.clone().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if hex.len() == 4 => {
                        out.push(decoded);
                        for _ in 0..4 {
                            chars.next();
                        }
                    }
                    _ => out.push('u'),
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}
