//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.

use crate::core::SecretWord;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for word-list acquisition
#[derive(Debug)]
pub enum WordListError {
    /// The source produced no usable words
    EmptyWordList,
    /// The backing resource could not be read
    SourceUnavailable(io::Error),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list contains no usable words"),
            Self::SourceUnavailable(e) => write!(f, "Word list could not be read: {e}"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyWordList => None,
            Self::SourceUnavailable(e) => Some(e),
        }
    }
}

/// Parse whitespace-separated tokens into secret words
///
/// Supports both space-separated and newline-separated formats. Tokens that
/// fail secret-word validation are skipped.
#[must_use]
pub fn parse_words(content: &str) -> Vec<SecretWord> {
    content
        .split_whitespace()
        .filter_map(|token| SecretWord::new(token).ok())
        .collect()
}

/// Load words from a file
///
/// Returns the valid words found, skipping any invalid tokens.
///
/// # Errors
///
/// Returns `WordListError::SourceUnavailable` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use spaceman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<SecretWord>, WordListError> {
    let content = fs::read_to_string(path).map_err(WordListError::SourceUnavailable)?;
    Ok(parse_words(&content))
}

/// Convert an embedded string slice to a secret-word vector
///
/// # Examples
/// ```
/// use spaceman::wordlists::loader::words_from_slice;
/// use spaceman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    slice
        .iter()
        .filter_map(|&s| SecretWord::new(s).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_words_newline_separated() {
        let words = parse_words("rocket\ncomet\norbit\n");
        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "rocket");
        assert_eq!(words[2].text(), "orbit");
    }

    #[test]
    fn parse_words_space_separated() {
        let words = parse_words("rocket comet orbit");
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn parse_words_mixed_whitespace() {
        let words = parse_words("  rocket\n\ncomet\torbit \n");
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn parse_words_normalizes_case() {
        let words = parse_words("ROCKET Comet");
        assert_eq!(words[0].text(), "rocket");
        assert_eq!(words[1].text(), "comet");
    }

    #[test]
    fn parse_words_skips_invalid_tokens() {
        let words = parse_words("rocket 42 com3t orbit");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "rocket");
        assert_eq!(words[1].text(), "orbit");
    }

    #[test]
    fn parse_words_empty_content() {
        assert!(parse_words("").is_empty());
        assert!(parse_words("   \n\t ").is_empty());
    }

    #[test]
    fn load_from_missing_file_is_unavailable() {
        let result = load_from_file("/definitely/not/here/words.txt");
        assert!(matches!(result, Err(WordListError::SourceUnavailable(_))));
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["rocket", "comet", "orbit"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "rocket");
        assert_eq!(words[1].text(), "comet");
        assert_eq!(words[2].text(), "orbit");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["rocket", "", "c0met", "orbit"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }

    #[test]
    fn error_display_messages() {
        let empty = WordListError::EmptyWordList;
        assert!(format!("{empty}").contains("no usable words"));

        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let unavailable = WordListError::SourceUnavailable(io_err);
        assert!(format!("{unavailable}").contains("could not be read"));
    }
}
