//! Guessing Game Engine.
//!
//! One validated session at a time: range, attempt budget, secret,
//! classified feedback per guess, and the full guess history. See
//! [`session`] for the lifecycle and classification rules.

pub mod session;

pub use session::{GameConfig, GameError, GameSession, GuessRecord, Outcome, Status};
