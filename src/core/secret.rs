//! Secret word representation
//!
//! A `SecretWord` is the hidden word a player tries to reveal, validated once at
//! construction so the rest of the game can rely on its shape.

use std::fmt;

/// The hidden word for one round
///
/// Always non-empty, ASCII alphabetic, and stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretWordError {
    Empty,
    InvalidCharacters,
}

impl fmt::Display for SecretWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Secret word must not be empty"),
            Self::InvalidCharacters => {
                write!(f, "Secret word must contain only alphabetic characters")
            }
        }
    }
}

impl std::error::Error for SecretWordError {}

impl SecretWord {
    /// Create a new `SecretWord` from a string
    ///
    /// Surrounding whitespace is stripped and the word is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `SecretWordError` if:
    /// - The trimmed input is empty
    /// - Any character is not ASCII alphabetic
    ///
    /// # Examples
    /// ```
    /// use spaceman::core::SecretWord;
    ///
    /// let word = SecretWord::new("  Rocket ").unwrap();
    /// assert_eq!(word.text(), "rocket");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("r0cket").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, SecretWordError> {
        let text: String = text.into().trim().to_lowercase();

        if text.is_empty() {
            return Err(SecretWordError::Empty);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(SecretWordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.text.contains(letter)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
