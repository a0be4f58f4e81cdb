//! Secret-word selection
//!
//! A `WordSource` holds a non-empty pool of candidate words and draws one
//! uniformly at random. The RNG is supplied by the caller so games can be
//! made deterministic with a seed.

use super::embedded::WORDS;
use super::loader::{self, WordListError};
use crate::core::SecretWord;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::path::Path;

/// A non-empty pool of candidate secret words
#[derive(Debug, Clone)]
pub struct WordSource {
    words: Vec<SecretWord>,
}

impl WordSource {
    /// Create a source from a pre-validated word pool
    ///
    /// # Errors
    ///
    /// Returns `WordListError::EmptyWordList` if `words` is empty.
    pub fn new(words: Vec<SecretWord>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// Source backed by the bundled word list
    ///
    /// # Panics
    /// Will not panic - the bundled list is generated from `data/words.txt`
    /// and verified non-empty by tests.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS)).expect("bundled word list is never empty")
    }

    /// Source backed by a word-list file
    ///
    /// # Errors
    ///
    /// Returns `WordListError::SourceUnavailable` if the file cannot be read,
    /// or `WordListError::EmptyWordList` if it yields no usable words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        Self::new(loader::load_from_file(path)?)
    }

    /// Draw one word uniformly at random
    #[must_use]
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> &SecretWord {
        // Non-emptiness is a construction invariant
        self.words.choose(rng).expect("word source is never empty")
    }

    /// Number of candidate words in the pool
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The candidate words, in list order
    #[must_use]
    pub fn words(&self) -> &[SecretWord] {
        &self.words
    }
}
