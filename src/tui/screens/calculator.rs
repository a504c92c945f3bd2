//! Calculator screen - key map and key-grid rendering over the engine.

use std::io::{self, Write};

use super::{button, put, put_right, ScreenAction};
use crate::calc::{format_display, Calculator, Operator};
use crate::tui::input::Key;
use crate::tui::theme::{self, Attr};

const KEY_WIDTH: u16 = 6;
const KEY_GAP: u16 = 1;
const GRID_COLS: u16 = 4;
const GRID_WIDTH: u16 = GRID_COLS * KEY_WIDTH + (GRID_COLS - 1) * KEY_GAP;

/// Visual class of a key cap.
#[derive(Clone, Copy)]
enum Cap {
    /// Light cap (clear, sign, percent), spanning one cell.
    Light(&'static str),
    /// Dark digit/decimal cap.
    Dark(&'static str),
    /// Dark cap spanning two cells (the zero key).
    DarkWide(&'static str),
    /// Operator cap, highlighted while active.
    Op(Operator),
    /// The equals cap, spanning three cells.
    Equals,
    /// Empty cell.
    Blank,
}

/// The calculator tool: engine plus key-grid presentation.
#[derive(Debug, Default)]
pub struct CalculatorScreen {
    engine: Calculator,
}

impl CalculatorScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, key: Key) -> ScreenAction {
        match key {
            Key::Char(c @ '0'..='9') => self.engine.input_digit(c as u8 - b'0'),
            Key::Char('.') | Key::Char(',') => self.engine.input_decimal(),
            Key::Char('+') => self.engine.set_operator(Operator::Add),
            Key::Char('-') => self.engine.set_operator(Operator::Sub),
            Key::Char('*') | Key::Char('x') => self.engine.set_operator(Operator::Mul),
            Key::Char('/') => self.engine.set_operator(Operator::Div),
            Key::Char('^') => self.engine.set_operator(Operator::Pow),
            Key::Char('=') | Key::Enter => self.engine.equals(),
            Key::Char('s') => self.engine.square_root(),
            Key::Char('%') => self.engine.percent(),
            Key::Char('n') => self.engine.toggle_sign(),
            Key::Char('c') | Key::Backspace => self.engine.clear(),
            Key::Escape => return ScreenAction::Home,
            Key::Quit => return ScreenAction::Quit,
            _ => {}
        }
        ScreenAction::Stay
    }

    pub fn draw<W: Write>(&self, out: &mut W, cols: u16, _rows: u16) -> io::Result<()> {
        let x0 = cols.saturating_sub(GRID_WIDTH) / 2;
        let right = x0 + GRID_WIDTH;

        // History / running-expression line, then the main display.
        put_right(
            out,
            right,
            1,
            theme::TEXT_MUTED,
            Attr::NONE,
            self.engine.context_line(),
        )?;
        put_right(
            out,
            right,
            3,
            theme::TEXT,
            Attr::BOLD,
            &format_display(self.engine.display()),
        )?;

        let clear_label = if self.engine.is_cleared() { "AC" } else { "C" };
        let rows: [[Cap; 4]; 6] = [
            [
                Cap::Light(clear_label),
                Cap::Light("+/-"),
                Cap::Light("%"),
                Cap::Op(Operator::Div),
            ],
            [Cap::Dark("7"), Cap::Dark("8"), Cap::Dark("9"), Cap::Op(Operator::Mul)],
            [Cap::Dark("4"), Cap::Dark("5"), Cap::Dark("6"), Cap::Op(Operator::Sub)],
            [Cap::Dark("1"), Cap::Dark("2"), Cap::Dark("3"), Cap::Op(Operator::Add)],
            [Cap::DarkWide("0"), Cap::Blank, Cap::Dark(","), Cap::Op(Operator::Pow)],
            [Cap::Dark("√"), Cap::Equals, Cap::Blank, Cap::Blank],
        ];

        let active = self.engine.active_operator();
        for (row_index, row) in rows.iter().enumerate() {
            let y = 5 + row_index as u16 * 2;
            let mut col = 0u16;
            for cap in row {
                let x = x0 + col * (KEY_WIDTH + KEY_GAP);
                match cap {
                    Cap::Light(label) => {
                        button(out, x, y, KEY_WIDTH, theme::BG, theme::KEY_LIGHT, Attr::BOLD, label)?;
                        col += 1;
                    }
                    Cap::Dark(label) => {
                        button(out, x, y, KEY_WIDTH, theme::TEXT, theme::BORDER, Attr::NONE, label)?;
                        col += 1;
                    }
                    Cap::DarkWide(label) => {
                        let width = KEY_WIDTH * 2 + KEY_GAP;
                        button(out, x, y, width, theme::TEXT, theme::BORDER, Attr::NONE, label)?;
                        col += 2;
                    }
                    Cap::Op(op) => {
                        let bg = if active == Some(*op) {
                            theme::PRIMARY_ACTIVE
                        } else {
                            theme::PRIMARY
                        };
                        let label = if *op == Operator::Pow { "xʸ" } else { op.symbol() };
                        button(out, x, y, KEY_WIDTH, theme::TEXT, bg, Attr::BOLD, label)?;
                        col += 1;
                    }
                    Cap::Equals => {
                        let width = KEY_WIDTH * 3 + KEY_GAP * 2;
                        button(out, x, y, width, theme::TEXT, theme::PRIMARY, Attr::BOLD, "=")?;
                        col += 3;
                    }
                    Cap::Blank => {
                        col += 1;
                    }
                }
            }
        }

        put(
            out,
            x0.saturating_sub(6),
            5 + rows.len() as u16 * 2 + 1,
            theme::TEXT_DIM,
            Attr::DIM,
            "digits · + - * / ^ · s sqrt · % · n sign · c clear · enter = · esc back",
        )?;
        Ok(())
    }
}
