//! Command implementations

pub mod check;
pub mod play;

pub use check::{CheckReport, check_wordlist};
pub use play::run_play;
