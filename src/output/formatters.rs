//! Formatting utilities for terminal output

use crate::core::GuessedLetters;

/// Format the remaining-guess budget as a meter
///
/// Remaining guesses are filled blocks, spent ones empty.
#[must_use]
pub fn guess_meter(remaining: u8, max: u8) -> String {
    let remaining = usize::from(remaining.min(max));
    let spent = usize::from(max) - remaining;

    format!("[{}{}]", "█".repeat(remaining), "░".repeat(spent))
}

/// Format the guess history as a single line
#[must_use]
pub fn guessed_line(guessed: &GuessedLetters) -> String {
    let letters: Vec<String> = guessed.letters().iter().map(char::to_string).collect();
    format!("Guessed so far: {}", letters.join(" "))
}
