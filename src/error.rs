//! Error types for glossgen operations.

use thiserror::Error;

/// Errors that can occur while tokenizing, loading, or publishing a glossary.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid offset {position} for text of length {len}")]
    InvalidOffset { position: usize, len: usize },

    #[error("duplicate term: {0}")]
    DuplicateTerm(String),

    #[error("invalid term: {0:?}")]
    InvalidTerm(String),

    #[error("term {0:?} would overwrite the index page")]
    ReservedTerm(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
