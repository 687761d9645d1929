use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScopeGrepError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Please enter a search term.")]
    EmptyQuery,

    #[error("Please select a valid folder: {0}")]
    InvalidScope(PathBuf),

    #[error("Failed to open '{path}' at line {line}: {source}")]
    Open {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("An unexpected error occurred: {0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ScopeGrepError>;
