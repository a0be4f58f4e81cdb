//! Guessed-letter tracking
//!
//! Tracks the letters guessed in a round and derives the masked display and
//! the win condition from them.

use rustc_hash::FxHashSet;

/// Placeholder shown for letters not yet guessed
const PLACEHOLDER: char = '_';

/// The set of letters guessed so far in a round
///
/// Grows monotonically within a round; a fresh set is created per round.
#[derive(Debug, Clone, Default)]
pub struct GuessedLetters {
    letters: FxHashSet<char>,
}

impl GuessedLetters {
    /// Create an empty guess set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a guessed letter
    ///
    /// Returns `false` if the letter had already been guessed, in which case
    /// the set is unchanged.
    pub fn insert(&mut self, letter: char) -> bool {
        self.letters.insert(letter)
    }

    /// Check whether a letter has been guessed
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Number of distinct letters guessed
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// True if no letters have been guessed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check whether every character of `word` has been guessed
    ///
    /// An empty `word` is trivially covered.
    ///
    /// # Examples
    /// ```
    /// use spaceman::core::GuessedLetters;
    ///
    /// let mut guessed = GuessedLetters::new();
    /// guessed.insert('g');
    /// guessed.insert('o');
    /// assert!(guessed.covers("go"));
    /// assert!(!guessed.covers("gone"));
    /// ```
    #[must_use]
    pub fn covers(&self, word: &str) -> bool {
        word.chars().all(|c| self.letters.contains(&c))
    }

    /// Masked display of `word`
    ///
    /// One token per character: the character itself if guessed, otherwise an
    /// underscore. Tokens are joined with single spaces, so the token count
    /// always equals the character count of `word`.
    ///
    /// # Examples
    /// ```
    /// use spaceman::core::GuessedLetters;
    ///
    /// let mut guessed = GuessedLetters::new();
    /// guessed.insert('a');
    /// assert_eq!(guessed.mask("cat"), "_ a _");
    /// ```
    #[must_use]
    pub fn mask(&self, word: &str) -> String {
        let mut display = String::with_capacity(word.len() * 2);
        for (i, ch) in word.chars().enumerate() {
            if i > 0 {
                display.push(' ');
            }
            display.push(if self.letters.contains(&ch) {
                ch
            } else {
                PLACEHOLDER
            });
        }
        display
    }

    /// Letters guessed so far, in alphabetical order
    ///
    /// The underlying set is unordered; sorting keeps the history display stable.
    #[must_use]
    pub fn letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.letters.iter().copied().collect();
        letters.sort_unstable();
        letters
    }
}
