use std::io::BufRead;

use crate::error::Error;
use crate::model::{ConfigEntry, InvalidLine, InvalidReason, ParseResult, Syntax};

/// How a single trimmed line is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Blank or comment line.
    Ignored,
    Entry { key: &'a str, value: &'a str },
    Invalid(InvalidReason),
}

/// Parse `key = value` lines from text using the default syntax.
pub fn parse_str(input: &str) -> ParseResult {
    parse_str_with_syntax(input, Syntax::default())
}

/// Parse `key = value` lines from text using a specific comment marker and separator.
pub fn parse_str_with_syntax(input: &str, syntax: Syntax) -> ParseResult {
    parse_lines(input, syntax, false)
}

/// Parse `key = value` lines from UTF-8 bytes.
pub fn parse_bytes(input: &[u8]) -> Result<ParseResult, Error> {
    parse_bytes_with_syntax(input, Syntax::default())
}

/// Parse `key = value` lines from UTF-8 bytes using a specific syntax.
pub fn parse_bytes_with_syntax(input: &[u8], syntax: Syntax) -> Result<ParseResult, Error> {
    let text = std::str::from_utf8(input)?;
    Ok(parse_str_with_syntax(text, syntax))
}

/// Parse `key = value` lines from a buffered reader.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<ParseResult, Error> {
    parse_reader_with_syntax(reader, Syntax::default())
}

/// Parse `key = value` lines from a buffered reader using a specific syntax.
pub fn parse_reader_with_syntax<R: BufRead>(
    mut reader: R,
    syntax: Syntax,
) -> Result<ParseResult, Error> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    parse_bytes_with_syntax(&buf, syntax)
}

/// Classify one raw line. Surrounding whitespace is trimmed first.
pub fn classify_line(line: &str, syntax: Syntax) -> LineKind<'_> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(syntax.comment_marker) {
        return LineKind::Ignored;
    }

    match split_key_value(line, syntax.separator) {
        Ok((key, value)) => LineKind::Entry { key, value },
        Err(reason) => LineKind::Invalid(reason),
    }
}

/// Split a trimmed line on its single separator.
///
/// The key is everything before the separator and the value everything after
/// it, each trimmed. Both must be non-empty, and the separator must occur
/// exactly once.
pub fn split_key_value(line: &str, separator: char) -> Result<(&str, &str), InvalidReason> {
    let Some(sep_idx) = line.find(separator) else {
        return Err(InvalidReason::MissingSeparator);
    };

    let rest = &line[sep_idx + separator.len_utf8()..];
    if rest.contains(separator) {
        return Err(InvalidReason::MultipleSeparators);
    }
    if sep_idx == 0 {
        return Err(InvalidReason::MissingKey);
    }

    let key = line[..sep_idx].trim();
    let value = rest.trim();
    if key.is_empty() {
        return Err(InvalidReason::MissingKey);
    }
    if value.is_empty() {
        return Err(InvalidReason::MissingValue);
    }

    Ok((key, value))
}

pub(crate) fn parse_lines(input: &str, syntax: Syntax, trace: bool) -> ParseResult {
    let mut result = ParseResult::default();
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);

    for (idx, raw) in input.lines().enumerate() {
        let line_num = idx + 1;
        result.stats.total += 1;

        match classify_line(raw, syntax) {
            LineKind::Ignored => result.stats.ignored += 1,
            LineKind::Entry { key, value } => {
                if trace {
                    tracing::debug!(line = line_num, key, value, "parsed entry");
                }
                result.stats.valid += 1;
                result.entries.insert(
                    key.to_owned(),
                    ConfigEntry {
                        key: key.to_owned(),
                        value: value.to_owned(),
                        line: line_num,
                    },
                );
            }
            LineKind::Invalid(reason) => {
                result.stats.invalid += 1;
                result.invalid_lines.push(InvalidLine {
                    line: line_num,
                    text: raw.trim().to_owned(),
                    reason,
                });
            }
        }
    }

    result
}
