//! Options that control word extraction.

use crate::error::{ParseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How raw text is split into words.
///
/// Every field has a default, so a config file only needs to list
/// the settings it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusOptions {
    /// Fold words to lower case, so "The" and "the" are one node.
    pub lowercase: bool,

    /// Words shorter than this many letters are dropped.
    pub min_word_len: usize,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            min_word_len: 1,
        }
    }
}

impl CorpusOptions {
    /// Loads options from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| ParseError::io(path, e))?;
        serde_json::from_str(&raw).map_err(|source| ParseError::InvalidOptions {
            path: path.to_path_buf(),
            source,
        })
    }
}
