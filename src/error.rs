use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A whole-file condition that leaves a parse result empty.
///
/// None of these abort the caller; the loader reports them alongside an
/// empty [`ParseResult`](crate::ParseResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadIssue {
    #[error("file [ {} ] not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error("cannot read [ {} ]: {message}", path.display())]
    FileAccess {
        path: PathBuf,
        kind: io::ErrorKind,
        message: String,
    },

    #[error("config file [ {} ] is empty", path.display())]
    EmptyFile { path: PathBuf },
}

impl LoadIssue {
    pub(crate) fn from_io(path: PathBuf, err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound { path },
            kind => Self::FileAccess {
                path,
                kind,
                message: err.to_string(),
            },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::FileNotFound { path }
            | Self::FileAccess { path, .. }
            | Self::EmptyFile { path } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }

    pub fn is_empty_file(&self) -> bool {
        matches!(self, Self::EmptyFile { .. })
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid UTF-8 input: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    #[error(transparent)]
    Load(#[from] LoadIssue),
}
