//! Word extraction from raw text.
//!
//! A word is a maximal run of ASCII letters. Everything else, including
//! digits, punctuation and line breaks, separates words. Line breaks do
//! not end a sentence as far as the graph is concerned: the last word of
//! one line and the first word of the next are still adjacent.

use crate::error::{ParseError, Result};
use crate::options::CorpusOptions;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// An ordered sequence of words taken from a text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    words: Vec<String>,
}

impl Corpus {
    /// Splits `text` into words according to `options`.
    pub fn parse(text: &str, options: &CorpusOptions) -> Self {
        let words = text
            .split(|c: char| !c.is_ascii_alphabetic())
            .filter(|word| !word.is_empty() && word.len() >= options.min_word_len)
            .map(|word| {
                if options.lowercase {
                    word.to_ascii_lowercase()
                } else {
                    word.to_string()
                }
            })
            .collect();

        Self { words }
    }

    /// Reads and parses a text file.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] if the file cannot be read and
    /// [`ParseError::EmptyCorpus`] if it contains no words.
    pub fn from_file(path: &Path, options: &CorpusOptions) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ParseError::io(path, e))?;
        let corpus = Self::parse(&text, options);

        if corpus.is_empty() {
            return Err(ParseError::EmptyCorpus(path.to_path_buf()));
        }

        debug!(
            path = %path.display(),
            words = corpus.len(),
            "parsed corpus"
        );
        Ok(corpus)
    }

    /// Builds a corpus from words that are already split.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// All words, in text order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Distinct words in order of first appearance.
    pub fn vocabulary(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.words
            .iter()
            .map(String::as_str)
            .filter(|word| seen.insert(*word))
            .collect()
    }

    /// Consecutive word pairs, in text order. Repeated pairs are repeated.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.words
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}
