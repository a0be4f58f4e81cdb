//! Terminal output formatting
//!
//! Message builders for the game loop and CLI results. Everything returns a
//! `String` so the game loop can route output through the console port.

pub mod display;
pub mod formatters;

pub use display::{check_report, loss_banner, welcome_banner, win_banner};
