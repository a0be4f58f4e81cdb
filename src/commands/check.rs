//! Word-list check command
//!
//! Validates that a word-list file yields usable secret words before a game
//! is played against it.

use crate::wordlists::{WordListError, loader};

/// How many sample words to include in a report
const SAMPLE_SIZE: usize = 5;

/// Result of checking a word-list file
pub struct CheckReport {
    /// Number of tokens that survived validation
    pub usable: usize,
    /// A handful of usable words, in file order
    pub sample: Vec<String>,
}

/// Check a word-list file and report how many words are usable
///
/// # Errors
///
/// Returns `WordListError::SourceUnavailable` if the file cannot be read, or
/// `WordListError::EmptyWordList` if no token survives validation.
pub fn check_wordlist(path: &str) -> Result<CheckReport, WordListError> {
    let words = loader::load_from_file(path)?;
    if words.is_empty() {
        return Err(WordListError::EmptyWordList);
    }

    let sample = words
        .iter()
        .take(SAMPLE_SIZE)
        .map(|w| w.text().to_string())
        .collect();

    Ok(CheckReport {
        usable: words.len(),
        sample,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_wordlist(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn check_reports_usable_words() {
        let path = temp_wordlist("spaceman_check_ok.txt", "rocket comet orbit\nlunar\n");
        let report = check_wordlist(path.to_str().unwrap()).unwrap();

        assert_eq!(report.usable, 4);
        assert_eq!(report.sample, vec!["rocket", "comet", "orbit", "lunar"]);
    }

    #[test]
    fn check_sample_capped() {
        let path = temp_wordlist(
            "spaceman_check_many.txt",
            "one two three four five six seven",
        );
        let report = check_wordlist(path.to_str().unwrap()).unwrap();

        assert_eq!(report.usable, 7);
        assert_eq!(report.sample.len(), SAMPLE_SIZE);
    }

    #[test]
    fn check_skips_invalid_tokens() {
        let path = temp_wordlist("spaceman_check_mixed.txt", "rocket 42 c0met orbit");
        let report = check_wordlist(path.to_str().unwrap()).unwrap();

        assert_eq!(report.usable, 2);
    }

    #[test]
    fn check_empty_file_is_empty_word_list() {
        let path = temp_wordlist("spaceman_check_empty.txt", "  \n \t\n");
        assert!(matches!(
            check_wordlist(path.to_str().unwrap()),
            Err(WordListError::EmptyWordList)
        ));
    }

    #[test]
    fn check_all_invalid_is_empty_word_list() {
        let path = temp_wordlist("spaceman_check_junk.txt", "123 45.6 !!");
        assert!(matches!(
            check_wordlist(path.to_str().unwrap()),
            Err(WordListError::EmptyWordList)
        ));
    }

    #[test]
    fn check_missing_file_is_unavailable() {
        assert!(matches!(
            check_wordlist("/definitely/not/here/words.txt"),
            Err(WordListError::SourceUnavailable(_))
        ));
    }
}
