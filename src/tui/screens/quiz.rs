//! Quiz screen - question view with progress bar, results view with
//! per-question breakdown.

use std::io::{self, Write};

use super::{button, fill, put, ScreenAction};
use crate::quiz::Quiz;
use crate::tui::input::Key;
use crate::tui::theme::{self, Attr};

const PANEL_X: u16 = 4;
const BAR_WIDTH: u16 = 40;

/// The quiz tool.
#[derive(Debug, Default)]
pub struct QuizScreen {
    quiz: Quiz,
}

impl QuizScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, key: Key) -> ScreenAction {
        if self.quiz.is_finished() {
            match key {
                Key::Char('r') | Key::Enter => self.quiz.restart(),
                Key::Escape => return ScreenAction::Home,
                Key::Quit => return ScreenAction::Quit,
                _ => {}
            }
            return ScreenAction::Stay;
        }

        match key {
            Key::Char(c @ '1'..='4') => self.quiz.select(c as usize - '1' as usize),
            Key::Right | Key::Char('n') | Key::Enter => self.quiz.next(),
            Key::Left | Key::Char('p') => self.quiz.previous(),
            Key::Escape => return ScreenAction::Home,
            Key::Quit => return ScreenAction::Quit,
            _ => {}
        }
        ScreenAction::Stay
    }

    pub fn draw<W: Write>(&self, out: &mut W, cols: u16, rows: u16) -> io::Result<()> {
        if self.quiz.is_finished() {
            self.draw_results(out, cols, rows)
        } else {
            self.draw_question(out, cols, rows)
        }
    }

    fn draw_question<W: Write>(&self, out: &mut W, _cols: u16, _rows: u16) -> io::Result<()> {
        let current = self.quiz.current_index();
        let total = self.quiz.len();

        put(
            out,
            PANEL_X,
            1,
            theme::TEXT_DIM,
            Attr::NONE,
            &format!("Question {} of {}", current + 1, total),
        )?;

        // Progress bar: filled share of answered-through questions.
        let filled = (BAR_WIDTH as usize * (current + 1) / total) as u16;
        fill(out, PANEL_X, 2, BAR_WIDTH, theme::BORDER)?;
        fill(out, PANEL_X, 2, filled, theme::PRIMARY)?;

        let question = self.quiz.current_question();
        put(out, PANEL_X, 4, theme::TEXT, Attr::BOLD, question.prompt)?;

        let selected = self.quiz.selection();
        for (i, option) in question.options.iter().enumerate() {
            let y = 6 + i as u16 * 2;
            let is_selected = selected == Some(i);
            let mark = if is_selected { "[x]" } else { "[ ]" };
            let fg = if is_selected { theme::PRIMARY } else { theme::TEXT };
            let attrs = if is_selected { Attr::BOLD } else { Attr::NONE };
            put(
                out,
                PANEL_X,
                y,
                fg,
                attrs,
                &format!("{} {}. {}", mark, i + 1, option),
            )?;
        }

        let last = current + 1 == total;
        let next_label = if last { "finish" } else { "next" };
        put(
            out,
            PANEL_X,
            6 + question.options.len() as u16 * 2 + 1,
            theme::TEXT_DIM,
            Attr::DIM,
            &format!("1-4 answer · left prev · right/enter {next_label} · esc back"),
        )?;
        Ok(())
    }

    fn draw_results<W: Write>(&self, out: &mut W, cols: u16, rows: u16) -> io::Result<()> {
        let score = self.quiz.score();
        let total = self.quiz.len();

        put(out, PANEL_X, 1, theme::TEXT, Attr::BOLD, "Quiz results")?;
        put(
            out,
            PANEL_X,
            3,
            theme::TEXT_DIM,
            Attr::NONE,
            &format!(
                "You answered {} of {} correctly ({}%)",
                score,
                total,
                self.quiz.percentage()
            ),
        )?;

        let mut y = 5;
        for (i, question) in self.quiz.questions().iter().enumerate() {
            if y + 2 >= rows.saturating_sub(2) {
                // The rest doesn't fit; the summary line above still counts it.
                put(out, PANEL_X, y, theme::TEXT_DIM, Attr::DIM, "…")?;
                y += 1;
                break;
            }
            let selection = self.quiz.selection_for(i);
            let correct = selection == Some(question.answer);
            let fg = if correct { theme::QUIZ_CORRECT } else { theme::QUIZ_WRONG };
            let yours = selection
                .map(|s| question.options[s])
                .unwrap_or("no answer");
            put(
                out,
                PANEL_X,
                y,
                theme::TEXT,
                Attr::NONE,
                &format!("{}. {}", i + 1, question.prompt),
            )?;
            put(
                out,
                PANEL_X + 3,
                y + 1,
                fg,
                Attr::NONE,
                &format!(
                    "your answer: {} · correct: {}",
                    yours, question.options[question.answer]
                ),
            )?;
            y += 3;
        }

        let width = 24u16.min(cols.saturating_sub(PANEL_X));
        button(
            out,
            PANEL_X,
            y + 1,
            width,
            theme::TEXT,
            theme::PRIMARY,
            Attr::BOLD,
            "r restart · esc back",
        )?;
        Ok(())
    }
}
