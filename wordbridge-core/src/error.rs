//! Error types for corpus parsing.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no words found in {0}")]
    EmptyCorpus(PathBuf),

    #[error("invalid corpus options in {path}: {source}")]
    InvalidOptions {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ParseError {
    /// Wraps an I/O error with the path that caused it.
    pub fn io(path: &Path, source: io::Error) -> Self {
        ParseError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
