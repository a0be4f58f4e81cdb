//! Word lists for Spaceman
//!
//! Provides the bundled word list compiled into the binary, a file loader,
//! and the `WordSource` used to draw secret words.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::WordListError;
pub use source::WordSource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn bundled_list_not_empty() {
        assert!(!WORDS.is_empty());
    }

    #[test]
    fn bundled_words_are_valid() {
        // All bundled words should be lowercase alphabetic
        for &word in WORDS {
            assert!(!word.is_empty(), "Bundled list contains an empty token");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn bundled_words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }
}
