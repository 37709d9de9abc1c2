//! Human-readable rendering of a [`ParseResult`].
//!
//! Parsing never prints. Callers that want the classic summary table or the
//! invalid-line listing wrap a result in [`Summary`] or [`InvalidLines`] and
//! format it wherever they like.

use std::fmt::{self, Display, Formatter};

use crate::model::ParseResult;

const RULE: &str = "+------------------------------------------------------------------";

/// Statistics table for one parse.
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    result: &'a ParseResult,
}

impl<'a> Summary<'a> {
    pub fn new(result: &'a ParseResult) -> Self {
        Self { result }
    }
}

impl Display for Summary<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let stats = &self.result.stats;
        writeln!(f, "{RULE}")?;
        writeln!(f, "| Config file parsing details:")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "{:<35}: {}", "Config file name", source_name(self.result))?;
        writeln!(f, "{:<35}: {}", "Lines in file", stats.total)?;
        writeln!(f, "{:<35}: {}", "Valid entries", stats.valid)?;
        writeln!(f, "{:<35}: {}", "Invalid entries", stats.invalid)?;
        writeln!(f, "{:<35}: {}", "Commented/Whitespace", stats.ignored)?;
        write!(f, "{RULE}")
    }
}

/// Invalid lines with their line numbers; renders nothing when there are none.
#[derive(Debug, Clone, Copy)]
pub struct InvalidLines<'a> {
    result: &'a ParseResult,
}

impl<'a> InvalidLines<'a> {
    pub fn new(result: &'a ParseResult) -> Self {
        Self { result }
    }
}

impl Display for InvalidLines<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.result.invalid_lines.is_empty() {
            return Ok(());
        }

        write!(
            f,
            "Invalid lines found in [ {} ]",
            source_name(self.result)
        )?;
        for invalid in &self.result.invalid_lines {
            write!(
                f,
                "\nLine #{:<3}: {} ({})",
                invalid.line, invalid.text, invalid.reason
            )?;
        }
        Ok(())
    }
}

fn source_name(result: &ParseResult) -> String {
    result
        .source
        .as_deref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<memory>".to_owned())
}
