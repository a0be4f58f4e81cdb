//! Interactive play mode
//!
//! Drives rounds turn by turn through the console port and repeats them until
//! the player declines to continue.

use crate::console::Console;
use crate::game::{GuessOutcome, MAX_INCORRECT, Round, RoundState, parse_guess};
use crate::output::display::{
    correct_feedback, incorrect_feedback, invalid_feedback, loss_banner, repeat_feedback,
    welcome_banner, win_banner,
};
use crate::output::formatters::guessed_line;
use crate::wordlists::WordSource;
use rand::Rng;
use std::io;

/// Run the full session: rounds until the player declines to play again
///
/// # Errors
///
/// Returns an I/O error if the console fails, including closed input.
pub fn run_play<C: Console, R: Rng + ?Sized>(
    console: &mut C,
    source: &WordSource,
    rng: &mut R,
) -> io::Result<()> {
    console.line(&welcome_banner(MAX_INCORRECT))?;

    loop {
        let secret = source.draw(rng).clone();
        play_round(console, Round::new(secret))?;

        let again = console.prompt("Play again? (y/n): ")?;
        if !again.eq_ignore_ascii_case("y") {
            console.line("Thanks for playing!")?;
            return Ok(());
        }
    }
}

/// Drive one round to a terminal state
///
/// # Errors
///
/// Returns an I/O error if the console fails.
pub fn play_round<C: Console>(console: &mut C, mut round: Round) -> io::Result<()> {
    console.line("")?;
    console.line(&round.masked())?;

    while round.state() == RoundState::InProgress {
        let input = console.prompt("Guess a letter: ")?;

        let Some(letter) = parse_guess(&input) else {
            console.line(&invalid_feedback())?;
            continue;
        };

        let Some(outcome) = round.guess(letter) else {
            break;
        };

        match outcome {
            GuessOutcome::Correct => console.line(&correct_feedback())?,
            GuessOutcome::Incorrect { remaining } => {
                console.line(&incorrect_feedback(remaining))?;
            }
            GuessOutcome::Repeat => {
                console.line(&repeat_feedback())?;
                continue;
            }
        }

        console.line(&round.masked())?;
        console.line(&guessed_line(round.guessed()))?;
    }

    match round.state() {
        RoundState::Won => console.line(&win_banner(round.secret().text()))?,
        RoundState::Lost => console.line(&loss_banner(round.secret().text()))?,
        RoundState::InProgress => {}
    }

    Ok(())
}
