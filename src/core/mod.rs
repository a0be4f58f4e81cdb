//! Core domain types for Spaceman
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod guesses;
mod secret;

pub use guesses::GuessedLetters;
pub use secret::{SecretWord, SecretWordError};
