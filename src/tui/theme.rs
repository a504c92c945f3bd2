//! Theme - the app's dark palette and text attributes
//!
//! Semantic color constants shared by every screen, plus an [`Attr`]
//! bitfield for text styling. Colors are truecolor values; terminals
//! without truecolor support degrade through crossterm.

use crossterm::style::{Attribute, Color};
use crossterm::QueueableCommand;
use std::io::{self, Write};

// =============================================================================
// PALETTE
// =============================================================================

/// Build a color from a packed 0xRRGGBB integer.
pub const fn rgb(packed: u32) -> Color {
    Color::Rgb {
        r: ((packed >> 16) & 0xff) as u8,
        g: ((packed >> 8) & 0xff) as u8,
        b: (packed & 0xff) as u8,
    }
}

/// App background.
pub const BG: Color = rgb(0x121212);
/// Panel/card background.
pub const SURFACE: Color = rgb(0x1e1e1e);
/// Borders, dark key caps, progress track.
pub const BORDER: Color = rgb(0x333333);
/// Light key caps (clear, sign, percent).
pub const KEY_LIGHT: Color = rgb(0xa5a5a5);
/// Primary action color.
pub const PRIMARY: Color = rgb(0x1e90ff);
/// Highlighted (active) operator key.
pub const PRIMARY_ACTIVE: Color = rgb(0x64b5f6);
/// Main text.
pub const TEXT: Color = rgb(0xffffff);
/// Secondary text (calculator history line).
pub const TEXT_MUTED: Color = rgb(0x999999);
/// Dim labels (form captions, hints).
pub const TEXT_DIM: Color = rgb(0xbbbbbb);
/// Win/green feedback.
pub const SUCCESS: Color = rgb(0x32cd32);
/// Wrong/"higher" feedback and errors.
pub const DANGER: Color = rgb(0xff6347);
/// "Lower" feedback.
pub const INFO: Color = rgb(0x4169e1);
/// Correct answer in quiz results.
pub const QUIZ_CORRECT: Color = rgb(0x4caf50);
/// Wrong answer in quiz results.
pub const QUIZ_WRONG: Color = rgb(0xf44336);

// =============================================================================
// ATTRIBUTES
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const UNDERLINE = 1 << 2;
    }
}

/// Queue the escape codes for an attribute set.
pub fn queue_attrs<W: Write>(out: &mut W, attrs: Attr) -> io::Result<()> {
    if attrs.contains(Attr::BOLD) {
        out.queue(crossterm::style::SetAttribute(Attribute::Bold))?;
    }
    if attrs.contains(Attr::DIM) {
        out.queue(crossterm::style::SetAttribute(Attribute::Dim))?;
    }
    if attrs.contains(Attr::UNDERLINE) {
        out.queue(crossterm::style::SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
