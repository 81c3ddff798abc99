use std::path::PathBuf;
use thiserror::Error;

use crate::location::Location;

#[derive(Error, Debug)]
pub enum RhymeError {
    #[error("malformed location `{0}`: expected `<book> <chapter>:<verse>` with positive numbers")]
    Format(String),

    #[error("malformed corpus document {}: {reason}", .path.display())]
    CorpusFormat { path: PathBuf, reason: String },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("location {location} does not belong to book `{book}`")]
    LocationMismatch { location: Location, book: String },

    #[error("location {0} is out of range")]
    OutOfRange(Location),

    #[error("book `{0}` appears more than once in the corpus")]
    DuplicateBook(String),

    #[error("unknown book `{0}`")]
    UnknownBook(String),

    #[error("word `{0}` is not in the lexicon")]
    UnknownWord(String),
}

pub type Result<T> = std::result::Result<T, RhymeError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {key}")]
    InvalidValue { key: String, value: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
