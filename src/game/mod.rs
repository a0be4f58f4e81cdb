//! Game logic
//!
//! The round state machine and guess-input validation.

mod round;

pub use round::{GuessOutcome, MAX_INCORRECT, Round, RoundState, parse_guess};
