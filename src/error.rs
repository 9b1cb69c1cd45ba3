// File: src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors found while validating a dictionary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    #[error("dictionary contains an empty word")]
    EmptyWord,

    #[error("'{0}' is not a word (only letters, digits and '_' are allowed)")]
    NotAWord(String),

    #[error("dialect word '{0}' is defined more than once")]
    DuplicateDialectWord(String),

    #[error("host word '{0}' is the target of more than one dialect word")]
    DuplicateHostWord(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid dictionary file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid dictionary: {0}")]
    Dictionary(#[from] DictionaryError),

    #[error("Could not start interpreter '{}': {source}", .python.display())]
    Interpreter {
        python: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
