//! # parlor
//!
//! A small terminal parlor of tools: a calculator, a number guessing
//! game, and a quick quiz, behind a home menu.
//!
//! ## Architecture
//!
//! Each tool is a pure state machine with no terminal knowledge:
//! construct it, feed it inputs, read its state. The [`tui`] module
//! wraps those engines in crossterm screens and owns the event loop.
//!
//! ```text
//! key press → Key → screen.handle_key → engine call → screen.draw
//! ```
//!
//! ## Modules
//!
//! - [`calc`] - Calculator engine and display formatting
//! - [`game`] - Guessing game session (configure, guess, history)
//! - [`quiz`] - Multiple-choice quiz deck and scoring
//! - [`tui`] - Terminal screens, input handling, app loop

pub mod calc;
pub mod game;
pub mod quiz;
pub mod tui;

// Re-export commonly used items
pub use calc::{format_display, format_number, format_result, Calculator, Operator};
pub use game::{GameConfig, GameError, GameSession, GuessRecord, Outcome, Status};
pub use quiz::{Question, Quiz};
pub use tui::run;
