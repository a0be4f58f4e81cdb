//! User-facing game messages

use super::formatters::guess_meter;
use crate::commands::CheckReport;
use crate::game::MAX_INCORRECT;
use colored::Colorize;

/// Welcome banner shown once per session
#[must_use]
pub fn welcome_banner(max_incorrect: u8) -> String {
    let mut banner = String::new();
    banner.push_str("\n╔══════════════════════════════════════════════════════════════╗\n");
    banner.push_str("║                      S P A C E M A N                         ║\n");
    banner.push_str("╚══════════════════════════════════════════════════════════════╝\n\n");
    banner.push_str("Guess the mystery word one letter at a time.\n");
    banner.push_str(&format!(
        "You have {} incorrect guesses before your spaceman drifts away.",
        max_incorrect.to_string().bright_yellow().bold()
    ));
    banner
}

/// Feedback for a letter that appears in the word
#[must_use]
pub fn correct_feedback() -> String {
    format!("{}", "Correct!".green().bold())
}

/// Feedback for a letter that misses, with the remaining budget
#[must_use]
pub fn incorrect_feedback(remaining: u8) -> String {
    let noun = if remaining == 1 { "guess" } else { "guesses" };
    format!(
        "{} You have {remaining} {noun} left. {}",
        "Incorrect.".red().bold(),
        guess_meter(remaining, MAX_INCORRECT)
    )
}

/// Feedback for a letter guessed earlier in the round
#[must_use]
pub fn repeat_feedback() -> String {
    "You already guessed that letter. Try a new one.".to_string()
}

/// Feedback for input that is not a single letter
#[must_use]
pub fn invalid_feedback() -> String {
    "Please input exactly one alphabetic letter.".to_string()
}

/// Banner for a won round
#[must_use]
pub fn win_banner(secret: &str) -> String {
    format!(
        "\n{}\n{} The word was {}.\n{}",
        "═".repeat(64).bright_cyan(),
        "You won! Great job.".bright_green().bold(),
        secret.bright_yellow().bold(),
        "═".repeat(64).bright_cyan()
    )
}

/// Banner for a lost round, revealing the secret word
#[must_use]
pub fn loss_banner(secret: &str) -> String {
    format!(
        "\n{}\n{}\nThe word was: {}\n{}",
        "═".repeat(64).bright_cyan(),
        "You lost. Better luck next time!".red().bold(),
        secret.bright_yellow().bold(),
        "═".repeat(64).bright_cyan()
    )
}

/// Report for the `check` command
#[must_use]
pub fn check_report(report: &CheckReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} usable words\n",
        report.usable.to_string().bright_yellow().bold()
    ));
    out.push_str("Sample:");
    for word in &report.sample {
        out.push_str(&format!("\n  • {word}"));
    }
    out
}
