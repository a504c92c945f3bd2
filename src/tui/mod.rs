//! Terminal UI - event loop, screens, and drawing helpers
//!
//! Everything terminal-facing lives here. The engines under
//! [`crate::calc`], [`crate::game`], and [`crate::quiz`] never touch
//! the terminal; the screens in this module translate key presses into
//! engine calls and engine state into frames.

pub mod app;
pub mod buffer;
pub mod input;
pub mod notice;
pub mod screens;
pub mod theme;

pub use app::run;
