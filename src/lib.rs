//! Load flat `key = value` configuration files.
//!
//! [`ConfigLoader::parse`] reads one file and returns a [`ParseResult`] with
//! the valid entries, every rejected line and per-line counters. Missing or
//! empty files are reported through [`ParseResult::issue`] instead of
//! failing. Rendering lives in [`report`].

mod error;
mod loader;
mod model;
mod parser;
pub mod report;

pub use error::{Error, LoadIssue};
pub use loader::{ConfigLoader, load};
pub use model::{
    ConfigEntry, DEFAULT_COMMENT_MARKER, DEFAULT_SEPARATOR, InvalidLine, InvalidReason,
    ParseResult, ParseStats, Syntax,
};
pub use parser::{
    LineKind, classify_line, parse_bytes, parse_bytes_with_syntax, parse_reader,
    parse_reader_with_syntax, parse_str, parse_str_with_syntax, split_key_value,
};
