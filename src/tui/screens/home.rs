//! Home menu - routes to the three tools.

use std::io::{self, Write};

use super::{button, put_centered, Route, ScreenAction};
use crate::tui::input::Key;
use crate::tui::theme::{self, Attr};

const ENTRIES: [(&str, Route); 3] = [
    ("Quiz", Route::Quiz),
    ("Calculator", Route::Calculator),
    ("Guess the Number", Route::Game),
];

const BUTTON_WIDTH: u16 = 30;

/// The home menu: a cursor over the three tool entries.
#[derive(Debug, Default)]
pub struct HomeScreen {
    cursor: usize,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, key: Key) -> ScreenAction {
        match key {
            Key::Up => {
                self.cursor = self.cursor.checked_sub(1).unwrap_or(ENTRIES.len() - 1);
                ScreenAction::Stay
            }
            Key::Down => {
                self.cursor = (self.cursor + 1) % ENTRIES.len();
                ScreenAction::Stay
            }
            Key::Enter => ScreenAction::Open(ENTRIES[self.cursor].1),
            Key::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                ScreenAction::Open(ENTRIES[index].1)
            }
            Key::Char('q') | Key::Escape | Key::Quit => ScreenAction::Quit,
            _ => ScreenAction::Stay,
        }
    }

    pub fn draw<W: Write>(&self, out: &mut W, cols: u16, _rows: u16) -> io::Result<()> {
        put_centered(out, 2, cols, theme::PRIMARY, Attr::BOLD, "P A R L O R")?;
        put_centered(
            out,
            3,
            cols,
            theme::TEXT_DIM,
            Attr::NONE,
            "pick a diversion",
        )?;

        let x = cols.saturating_sub(BUTTON_WIDTH) / 2;
        for (i, (label, _)) in ENTRIES.iter().enumerate() {
            let y = 5 + i as u16 * 2;
            let selected = i == self.cursor;
            let bg = if selected { theme::PRIMARY } else { theme::SURFACE };
            let fg = if selected { theme::TEXT } else { theme::TEXT_DIM };
            let attrs = if selected { Attr::BOLD } else { Attr::NONE };
            let text = format!("{}. {}", i + 1, label);
            button(out, x, y, BUTTON_WIDTH, fg, bg, attrs, &text)?;
        }

        put_centered(
            out,
            5 + ENTRIES.len() as u16 * 2 + 1,
            cols,
            theme::TEXT_DIM,
            Attr::DIM,
            "up/down move · enter open · 1-3 jump · q quit",
        )?;
        Ok(())
    }
}
