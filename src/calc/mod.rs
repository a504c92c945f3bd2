//! Calculator Engine.
//!
//! A pure state machine over an arithmetic accumulator and a pending
//! binary operation. See [`engine`] for the transition contracts and
//! [`format`] for the canonical/display formatting split.

pub mod engine;
pub mod format;

pub use engine::{Calculator, Operator};
pub use format::{format_display, format_number, format_result};
