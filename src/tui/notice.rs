//! Notices - transient toast-style status messages
//!
//! One slot, newest wins, expires after [`NOTICE_LIFETIME`]. The app
//! loop ticks the board so a notice disappears even when no key is
//! pressed.

use crossterm::style::Color;
use std::time::{Duration, Instant};

use super::theme;

/// How long a notice stays on screen.
pub const NOTICE_LIFETIME: Duration = Duration::from_secs(3);

// =============================================================================
// TYPES
// =============================================================================

/// Notice category, mapped to a color when rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn color(self) -> Color {
        match self {
            Self::Success => theme::SUCCESS,
            Self::Error => theme::DANGER,
            Self::Info => theme::INFO,
        }
    }
}

/// A user-facing transient message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

// =============================================================================
// BOARD
// =============================================================================

/// Single-slot notice holder with expiry.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    slot: Option<(Notice, Instant)>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a notice, replacing any current one.
    pub fn post(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.slot = Some((
            Notice {
                kind,
                message: message.into(),
            },
            Instant::now(),
        ));
    }

    /// Drop the notice once its lifetime has passed.
    pub fn expire(&mut self) {
        if let Some((_, posted)) = &self.slot {
            if posted.elapsed() >= NOTICE_LIFETIME {
                self.slot = None;
            }
        }
    }

    /// The notice to render, if any.
    pub fn current(&self) -> Option<&Notice> {
        self.slot.as_ref().map(|(notice, _)| notice)
    }

    /// Clear immediately (screen change).
    pub fn clear(&mut self) {
        self.slot = None;
    }
}

// =============================================================================
// TESTS
// =============================================================================
