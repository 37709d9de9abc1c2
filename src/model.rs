use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use crate::error::LoadIssue;

pub const DEFAULT_COMMENT_MARKER: char = '#';
pub const DEFAULT_SEPARATOR: char = '=';

/// A validated `key = value` pair extracted from one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
    pub line: usize,
}

/// Why a non-ignored line could not be split into an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    MissingSeparator,
    MultipleSeparators,
    MissingKey,
    MissingValue,
}

impl InvalidReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingSeparator => "missing separator",
            Self::MultipleSeparators => "more than one separator",
            Self::MissingKey => "missing key",
            Self::MissingValue => "missing value",
        }
    }
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected line, kept with its 1-based line number and trimmed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLine {
    pub line: usize,
    pub text: String,
    pub reason: InvalidReason,
}

/// Line counters for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseStats {
    pub total: usize,
    pub ignored: usize,
    pub valid: usize,
    pub invalid: usize,
}

impl ParseStats {
    /// Every line read lands in exactly one bucket.
    pub fn is_consistent(&self) -> bool {
        self.total == self.ignored + self.valid + self.invalid
    }
}

/// Lexical settings shared by the parser and the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syntax {
    pub comment_marker: char,
    pub separator: char,
}

impl Default for Syntax {
    fn default() -> Self {
        Self {
            comment_marker: DEFAULT_COMMENT_MARKER,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

/// Everything produced by one parse invocation.
///
/// A result is always well formed. When the whole file could not be used
/// (missing, unreadable, empty or not UTF-8) `issue` says why and every
/// collection and counter is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseResult {
    pub entries: HashMap<String, ConfigEntry>,
    pub invalid_lines: Vec<InvalidLine>,
    pub stats: ParseStats,
    pub source: Option<PathBuf>,
    pub size_bytes: u64,
    pub issue: Option<LoadIssue>,
}

impl ParseResult {
    pub(crate) fn with_issue(source: PathBuf, size_bytes: u64, issue: LoadIssue) -> Self {
        Self {
            source: Some(source),
            size_bytes,
            issue: Some(issue),
            ..Self::default()
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|entry| entry.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_invalid_lines(&self) -> bool {
        !self.invalid_lines.is_empty()
    }

    /// Plain key to value view of the entries.
    pub fn to_map(&self) -> HashMap<String, String> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.clone(), entry.value.clone()))
            .collect()
    }

    /// Entries ordered by key, for stable output.
    pub fn sorted_entries(&self) -> BTreeMap<&str, &str> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.as_str(), entry.value.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_are_consistent() {
        assert!(ParseStats::default().is_consistent());
    }

    #[test]
    fn stats_detect_unbalanced_counts() {
        let stats = ParseStats {
            total: 3,
            ignored: 1,
            valid: 1,
            invalid: 0,
        };
        assert!(!stats.is_consistent());
    }

    #[test]
    fn sorted_entries_orders_by_key() {
        let mut result = ParseResult::default();
        for (line, key) in ["b", "a", "c"].into_iter().enumerate() {
            result.entries.insert(
                key.to_owned(),
                ConfigEntry {
                    key: key.to_owned(),
                    value: format!("v{line}"),
                    line: line + 1,
                },
            );
        }

        let keys: Vec<&str> = result.sorted_entries().into_keys().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(result.get("b"), Some("v0"));
    }
}
