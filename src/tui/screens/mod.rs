//! Screens - one module per tool plus shared drawing helpers
//!
//! Every screen is a plain struct owning its engine state. The app loop
//! feeds it [`Key`](super::input::Key) events through `handle_key`,
//! ticks it between events, and asks it to `draw` into the frame
//! buffer. Screens are created fresh on entry and dropped on exit, so
//! engine state never leaks across visits.

use crossterm::cursor::MoveTo;
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::QueueableCommand;
use std::io::{self, Write};

use super::theme::{self, Attr};

pub mod calculator;
pub mod game;
pub mod home;
pub mod quiz;

pub use calculator::CalculatorScreen;
pub use game::GameScreen;
pub use home::HomeScreen;
pub use quiz::QuizScreen;

// =============================================================================
// NAVIGATION
// =============================================================================

/// The three tools reachable from the home menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Calculator,
    Quiz,
    Game,
}

/// What the app loop should do after a key was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenAction {
    /// Keep the current screen.
    Stay,
    /// Replace the current screen with a tool.
    Open(Route),
    /// Back to the home menu.
    Home,
    /// Leave the application.
    Quit,
}

// =============================================================================
// DRAW HELPERS
// =============================================================================

/// Queue styled text at a position over the app background.
pub fn put<W: Write>(
    out: &mut W,
    x: u16,
    y: u16,
    fg: Color,
    attrs: Attr,
    text: &str,
) -> io::Result<()> {
    put_on(out, x, y, fg, theme::BG, attrs, text)
}

/// Queue styled text at a position over an explicit background.
pub fn put_on<W: Write>(
    out: &mut W,
    x: u16,
    y: u16,
    fg: Color,
    bg: Color,
    attrs: Attr,
    text: &str,
) -> io::Result<()> {
    out.queue(MoveTo(x, y))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetBackgroundColor(bg))?;
    out.queue(SetForegroundColor(fg))?;
    theme::queue_attrs(out, attrs)?;
    out.queue(Print(text))?;
    Ok(())
}

/// Queue text centered on a row.
pub fn put_centered<W: Write>(
    out: &mut W,
    y: u16,
    cols: u16,
    fg: Color,
    attrs: Attr,
    text: &str,
) -> io::Result<()> {
    let width = text.chars().count() as u16;
    let x = cols.saturating_sub(width) / 2;
    put(out, x, y, fg, attrs, text)
}

/// Queue text right-aligned so it ends at column `right` (exclusive).
pub fn put_right<W: Write>(
    out: &mut W,
    right: u16,
    y: u16,
    fg: Color,
    attrs: Attr,
    text: &str,
) -> io::Result<()> {
    let width = text.chars().count() as u16;
    put(out, right.saturating_sub(width), y, fg, attrs, text)
}

/// Fill a horizontal run with a background color.
pub fn fill<W: Write>(out: &mut W, x: u16, y: u16, width: u16, bg: Color) -> io::Result<()> {
    out.queue(MoveTo(x, y))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetBackgroundColor(bg))?;
    out.queue(Print(" ".repeat(width as usize)))?;
    Ok(())
}

/// Centered label over a filled cell, the building block for key caps
/// and buttons.
pub fn button<W: Write>(
    out: &mut W,
    x: u16,
    y: u16,
    width: u16,
    fg: Color,
    bg: Color,
    attrs: Attr,
    label: &str,
) -> io::Result<()> {
    fill(out, x, y, width, bg)?;
    let label_width = label.chars().count() as u16;
    let pad = width.saturating_sub(label_width) / 2;
    put_on(out, x + pad, y, fg, bg, attrs, label)
}
