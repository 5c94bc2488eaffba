//! Error types for server lookups

use std::path::PathBuf;
use thiserror::Error;

use crate::matching::Criterion;

/// Errors that can occur while loading or filtering servers
#[derive(Error, Debug)]
pub enum LookupError {
    /// The servers file could not be opened or read
    #[error("cannot read servers file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The servers file is not a valid servers document
    #[error("cannot parse servers file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: ParseFailure,
    },

    /// A filter pattern did not compile
    #[error("invalid {criterion} pattern '{pattern}': {source}")]
    InvalidPattern {
        criterion: Criterion,
        pattern: String,
        source: regex::Error,
    },

    /// No explicit servers file was given and the home directory is unknown
    #[error("cannot determine home directory for the default servers file")]
    HomeDirUnavailable,
}

/// Why a readable servers file could not be parsed
#[derive(Error, Debug)]
pub enum ParseFailure {
    #[error("not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("{0}")]
    TextFormat(#[from] protobuf::text_format::ParseError),
}

impl LookupError {
    /// Whether this error should stop the whole run
    pub fn is_fatal(&self) -> bool {
        !matches!(self, LookupError::InvalidPattern { .. })
    }
}
