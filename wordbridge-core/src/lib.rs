//! Wordbridge Core - Corpus parsing
//!
//! This crate turns raw text into the flat word sequence that the
//! word graph is built from. It knows nothing about graphs; it only
//! decides what counts as a word.
//!
//! # Example
//!
//! ```
//! use wordbridge_core::{Corpus, CorpusOptions};
//!
//! let corpus = Corpus::parse("To explore strange new worlds,", &CorpusOptions::default());
//! assert_eq!(corpus.words()[0], "to");
//! assert_eq!(corpus.len(), 5);
//! ```

mod corpus;
mod error;
mod options;

pub use corpus::Corpus;
pub use error::{ParseError, Result};
pub use options::CorpusOptions;
