use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::error::{Error, LoadIssue};
use crate::model::{ParseResult, Syntax};
use crate::parser::parse_lines;

/// Load a config file from `path` with default settings.
pub fn load(path: impl AsRef<Path>) -> ParseResult {
    ConfigLoader::new(path).parse()
}

/// Builder-style loader for a single `key = value` file.
///
/// Construction does no I/O. Each call to [`ConfigLoader::parse`] reads the
/// file from scratch and returns a fresh [`ParseResult`].
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
    debug: bool,
    syntax: Syntax,
}

impl ConfigLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            debug: false,
            syntax: Syntax::default(),
        }
    }

    /// Emit a trace event for every parsed entry and invalid line.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn comment_marker(mut self, marker: char) -> Self {
        self.syntax.comment_marker = marker;
        self
    }

    pub fn separator(mut self, separator: char) -> Self {
        self.syntax.separator = separator;
        self
    }

    pub fn syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn syntax_settings(&self) -> Syntax {
        self.syntax
    }

    /// Read and parse the file.
    ///
    /// Never fails: a missing, unreadable or empty file yields an empty result
    /// whose `issue` names the condition. Bytes that are not UTF-8 are decoded
    /// lossily, so the rest of the file still loads.
    pub fn parse(&self) -> ParseResult {
        let mode = if self.debug { "DEBUG" } else { "NON-DEBUG" };
        tracing::debug!(path = %self.path.display(), mode, "processing config file");

        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) => {
                let issue = LoadIssue::from_io(self.path.clone(), &err);
                tracing::warn!(%issue, "config file unavailable");
                return ParseResult::with_issue(self.path.clone(), 0, issue);
            }
        };

        let size_bytes = bytes.len() as u64;
        if bytes.is_empty() {
            let issue = LoadIssue::EmptyFile {
                path: self.path.clone(),
            };
            tracing::warn!(%issue, "config file empty");
            return ParseResult::with_issue(self.path.clone(), 0, issue);
        }

        // Undecodable bytes become U+FFFD; '\n' is ASCII so line boundaries survive.
        let content = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = content {
            tracing::warn!(
                path = %self.path.display(),
                "config file is not valid UTF-8, undecodable bytes replaced"
            );
        }

        tracing::debug!(
            path = %self.path.display(),
            size_bytes,
            "parsing config file"
        );

        let mut result = parse_lines(&content, self.syntax, self.debug);
        result.source = Some(self.path.clone());
        result.size_bytes = size_bytes;

        tracing::info!(
            path = %self.path.display(),
            total = result.stats.total,
            valid = result.stats.valid,
            invalid = result.stats.invalid,
            ignored = result.stats.ignored,
            "config file parsed"
        );
        if self.debug {
            for invalid in &result.invalid_lines {
                tracing::debug!(
                    line = invalid.line,
                    text = %invalid.text,
                    reason = %invalid.reason,
                    "invalid line"
                );
            }
        }

        result
    }

    /// Like [`ConfigLoader::parse`], but turns a whole-file issue into an error.
    pub fn try_parse(&self) -> Result<ParseResult, Error> {
        let mut result = self.parse();
        match result.issue.take() {
            Some(issue) => Err(Error::Load(issue)),
            None => Ok(result),
        }
    }
}
