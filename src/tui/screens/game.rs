//! Guessing game screen - configuration form, play view, end views,
//! and the guess history list.

use std::io::{self, Write};

use super::{button, fill, put, put_centered, ScreenAction};
use crate::game::{GameSession, Outcome, Status};
use crate::tui::input::Key;
use crate::tui::notice::{NoticeBoard, NoticeKind};
use crate::tui::theme::{self, Attr};

const PANEL_X: u16 = 4;
const FIELD_WIDTH: u16 = 12;
const FIELD_LABELS: [&str; 3] = ["Minimum", "Maximum", "Attempts"];

/// The guessing game tool: engine, form state, and notices.
#[derive(Debug)]
pub struct GameScreen {
    session: GameSession,
    /// Raw text of the min/max/attempts fields.
    fields: [String; 3],
    focus: usize,
    guess: String,
    /// Last directional feedback, shown inline while the session runs.
    feedback: Option<Outcome>,
    notices: NoticeBoard,
}

impl Default for GameScreen {
    fn default() -> Self {
        Self {
            session: GameSession::new(),
            fields: ["1".to_string(), "100".to_string(), "5".to_string()],
            focus: 0,
            guess: String::new(),
            feedback: None,
            notices: NoticeBoard::new(),
        }
    }
}

impl GameScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.notices.expire();
    }

    pub fn handle_key(&mut self, key: Key) -> ScreenAction {
        match key {
            Key::Escape => return ScreenAction::Home,
            Key::Quit => return ScreenAction::Quit,
            _ => {}
        }

        match self.session.status() {
            Status::Configuring => self.handle_configuring(key),
            Status::Active => self.handle_active(key),
            Status::Won | Status::Exhausted => self.handle_ended(key),
        }
        ScreenAction::Stay
    }

    fn handle_configuring(&mut self, key: Key) {
        match key {
            Key::Tab | Key::Down => self.focus = (self.focus + 1) % self.fields.len(),
            Key::Up => {
                self.focus = self
                    .focus
                    .checked_sub(1)
                    .unwrap_or(self.fields.len() - 1);
            }
            Key::Char(c @ ('0'..='9' | '-')) => self.fields[self.focus].push(c),
            Key::Backspace => {
                self.fields[self.focus].pop();
            }
            Key::Enter => {
                let [min, max, attempts] = &self.fields;
                match self.session.configure(min, max, attempts) {
                    Ok(()) => {
                        self.guess.clear();
                        self.feedback = None;
                        self.notices.clear();
                    }
                    Err(err) => self.notices.post(NoticeKind::Error, err.to_string()),
                }
            }
            _ => {}
        }
    }

    fn handle_active(&mut self, key: Key) {
        match key {
            Key::Char(c @ ('0'..='9' | '-')) => self.guess.push(c),
            Key::Backspace => {
                self.guess.pop();
            }
            Key::Enter => match self.session.submit_guess(&self.guess) {
                Ok(outcome) => {
                    self.guess.clear();
                    self.feedback = Some(outcome);
                    match outcome {
                        Outcome::Correct => self.notices.post(
                            NoticeKind::Success,
                            "Congratulations! You guessed the number!",
                        ),
                        Outcome::OutOfAttempts => self
                            .notices
                            .post(NoticeKind::Info, "Game over. Out of attempts."),
                        Outcome::Incorrect => {
                            self.notices.post(NoticeKind::Error, "Wrong. Game over.")
                        }
                        Outcome::Higher | Outcome::Lower => {}
                    }
                }
                Err(err) => self.notices.post(NoticeKind::Error, err.to_string()),
            },
            Key::Char('r') => self.reset(),
            _ => {}
        }
    }

    fn handle_ended(&mut self, key: Key) {
        if matches!(key, Key::Enter | Key::Char('r')) {
            self.reset();
        }
    }

    fn reset(&mut self) {
        self.session.reset();
        self.guess.clear();
        self.feedback = None;
        self.notices.post(NoticeKind::Info, "Game reset");
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    pub fn draw<W: Write>(&self, out: &mut W, cols: u16, rows: u16) -> io::Result<()> {
        let history_y = match self.session.status() {
            Status::Configuring => self.draw_form(out)?,
            Status::Active => self.draw_play(out)?,
            Status::Won => self.draw_won(out)?,
            Status::Exhausted => self.draw_exhausted(out)?,
        };

        self.draw_history(out, history_y, rows)?;

        if let Some(notice) = self.notices.current() {
            put_centered(
                out,
                rows.saturating_sub(2),
                cols,
                notice.kind.color(),
                Attr::BOLD,
                &notice.message,
            )?;
        }
        Ok(())
    }

    /// Configuration form. Returns the row where the history may start.
    fn draw_form<W: Write>(&self, out: &mut W) -> io::Result<u16> {
        put(out, PANEL_X, 1, theme::TEXT, Attr::BOLD, "New game")?;

        for (i, label) in FIELD_LABELS.iter().enumerate() {
            let y = 3 + i as u16 * 3;
            let focused = i == self.focus;
            let fg = if focused { theme::PRIMARY } else { theme::TEXT_DIM };
            put(out, PANEL_X, y, fg, Attr::NONE, &format!("{label}:"))?;
            let bg = if focused { theme::BORDER } else { theme::SURFACE };
            fill(out, PANEL_X, y + 1, FIELD_WIDTH, bg)?;
            let shown = if focused {
                format!("{}_", self.fields[i])
            } else {
                self.fields[i].clone()
            };
            super::put_on(out, PANEL_X + 1, y + 1, theme::TEXT, bg, Attr::NONE, &shown)?;
        }

        button(
            out,
            PANEL_X,
            12,
            18,
            theme::TEXT,
            theme::PRIMARY,
            Attr::BOLD,
            "enter · start",
        )?;
        put(
            out,
            PANEL_X,
            14,
            theme::TEXT_DIM,
            Attr::DIM,
            "tab/arrows switch field · esc back",
        )?;
        Ok(16)
    }

    /// Active play view. Returns the row where the history may start.
    fn draw_play<W: Write>(&self, out: &mut W) -> io::Result<u16> {
        // Config is always present while the session is active.
        let (min, max) = self
            .session
            .config()
            .map(|c| (c.min, c.max))
            .unwrap_or((0, 0));

        put(
            out,
            PANEL_X,
            1,
            theme::TEXT,
            Attr::NONE,
            &format!("Guess the number between {min} and {max}"),
        )?;
        put(
            out,
            PANEL_X,
            2,
            theme::PRIMARY,
            Attr::NONE,
            &format!("Attempts remaining: {}", self.session.attempts_remaining()),
        )?;

        fill(out, PANEL_X, 4, FIELD_WIDTH + 6, theme::SURFACE)?;
        super::put_on(
            out,
            PANEL_X + 1,
            4,
            theme::TEXT,
            theme::SURFACE,
            Attr::BOLD,
            &format!("{}_", self.guess),
        )?;

        if let Some(feedback @ (Outcome::Higher | Outcome::Lower)) = self.feedback {
            let fg = match feedback {
                Outcome::Higher => theme::DANGER,
                _ => theme::INFO,
            };
            put(out, PANEL_X, 6, fg, Attr::BOLD, feedback.label())?;
        }

        put(
            out,
            PANEL_X,
            8,
            theme::TEXT_DIM,
            Attr::DIM,
            "enter guess · r reset · esc back",
        )?;
        Ok(10)
    }

    fn draw_won<W: Write>(&self, out: &mut W) -> io::Result<u16> {
        put(out, PANEL_X, 1, theme::SUCCESS, Attr::BOLD, "Congratulations!")?;
        let attempts = self.session.attempts_used();
        let plural = if attempts == 1 { "attempt" } else { "attempts" };
        if let Some(secret) = self.session.revealed_secret() {
            put(
                out,
                PANEL_X,
                3,
                theme::TEXT,
                Attr::NONE,
                &format!("You guessed {secret} in {attempts} {plural}"),
            )?;
        }
        button(
            out,
            PANEL_X,
            5,
            20,
            theme::TEXT,
            theme::PRIMARY,
            Attr::BOLD,
            "enter · play again",
        )?;
        Ok(7)
    }

    fn draw_exhausted<W: Write>(&self, out: &mut W) -> io::Result<u16> {
        put(out, PANEL_X, 1, theme::DANGER, Attr::BOLD, "Out of attempts")?;
        if let Some(secret) = self.session.revealed_secret() {
            put(
                out,
                PANEL_X,
                3,
                theme::TEXT,
                Attr::NONE,
                &format!("The number was {secret}"),
            )?;
        }
        button(
            out,
            PANEL_X,
            5,
            20,
            theme::TEXT,
            theme::PRIMARY,
            Attr::BOLD,
            "enter · play again",
        )?;
        Ok(7)
    }

    fn draw_history<W: Write>(&self, out: &mut W, y0: u16, rows: u16) -> io::Result<()> {
        if self.session.history().is_empty() {
            return Ok(());
        }
        put(out, PANEL_X, y0, theme::TEXT, Attr::BOLD, "Previous guesses:")?;
        for (i, record) in self.session.history().iter().enumerate() {
            let y = y0 + 1 + i as u16;
            if y >= rows.saturating_sub(3) {
                put(out, PANEL_X, y, theme::TEXT_DIM, Attr::DIM, "…")?;
                break;
            }
            let fg = match record.outcome {
                Outcome::Correct => theme::SUCCESS,
                Outcome::Higher => theme::DANGER,
                Outcome::Lower => theme::INFO,
                Outcome::Incorrect | Outcome::OutOfAttempts => theme::DANGER,
            };
            put(
                out,
                PANEL_X,
                y,
                theme::TEXT,
                Attr::NONE,
                &format!("{:>8}", record.value),
            )?;
            put(out, PANEL_X + 10, y, fg, Attr::BOLD, record.outcome.label())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_field(screen: &mut GameScreen, text: &str) {
        for _ in 0..8 {
            screen.handle_key(Key::Backspace);
        }
        for c in text.chars() {
            screen.handle_key(Key::Char(c));
        }
    }

    /// Configure a 1..=1 range so the secret is known exactly.
    fn start_known(screen: &mut GameScreen) {
        type_field(screen, "1");
        screen.handle_key(Key::Tab);
        type_field(screen, "2");
        screen.handle_key(Key::Tab);
        type_field(screen, "5");
        screen.handle_key(Key::Enter);
    }

    #[test]
    fn test_form_focus_cycle() {
        let mut screen = GameScreen::new();
        assert_eq!(screen.focus, 0);
        screen.handle_key(Key::Tab);
        assert_eq!(screen.focus, 1);
        screen.handle_key(Key::Down);
        screen.handle_key(Key::Down);
        assert_eq!(screen.focus, 0);
        screen.handle_key(Key::Up);
        assert_eq!(screen.focus, 2);
    }

    #[test]
    fn test_start_with_defaults() {
        let mut screen = GameScreen::new();
        screen.handle_key(Key::Enter);
        assert_eq!(screen.session.status(), Status::Active);
        assert_eq!(screen.session.attempts_remaining(), 5);
    }

    #[test]
    fn test_invalid_config_posts_error_notice() {
        let mut screen = GameScreen::new();
        // Make min exceed max.
        type_field(&mut screen, "500");
        screen.handle_key(Key::Enter);
        assert_eq!(screen.session.status(), Status::Configuring);
        let notice = screen.notices.current().expect("error notice");
        assert_eq!(notice.kind, NoticeKind::Error);
    }

    #[test]
    fn test_play_to_win() {
        let mut screen = GameScreen::new();
        start_known(&mut screen);
        assert_eq!(screen.session.status(), Status::Active);
        // Range 1..=2: guessing both values must win within the budget.
        for c in ['1', '2'] {
            if screen.session.status() != Status::Active {
                break;
            }
            screen.handle_key(Key::Char(c));
            screen.handle_key(Key::Enter);
        }
        assert_eq!(screen.session.status(), Status::Won);
        assert!(screen.guess.is_empty());
        assert_eq!(
            screen.notices.current().map(|n| n.kind),
            Some(NoticeKind::Success)
        );
    }

    #[test]
    fn test_invalid_guess_keeps_buffer_state() {
        let mut screen = GameScreen::new();
        screen.handle_key(Key::Enter); // start with defaults 1..=100
        screen.handle_key(Key::Char('9'));
        screen.handle_key(Key::Char('9'));
        screen.handle_key(Key::Char('9'));
        screen.handle_key(Key::Enter); // out of range
        assert_eq!(screen.session.attempts_used(), 0);
        assert_eq!(
            screen.notices.current().map(|n| n.kind),
            Some(NoticeKind::Error)
        );
    }

    #[test]
    fn test_reset_from_play() {
        let mut screen = GameScreen::new();
        screen.handle_key(Key::Enter);
        assert_eq!(screen.session.status(), Status::Active);
        screen.handle_key(Key::Char('r'));
        assert_eq!(screen.session.status(), Status::Configuring);
        assert_eq!(
            screen.notices.current().map(|n| n.kind),
            Some(NoticeKind::Info)
        );
    }

    #[test]
    fn test_restart_after_win() {
        let mut screen = GameScreen::new();
        start_known(&mut screen);
        for c in ['1', '2'] {
            if screen.session.status() != Status::Active {
                break;
            }
            screen.handle_key(Key::Char(c));
            screen.handle_key(Key::Enter);
        }
        assert_eq!(screen.session.status(), Status::Won);
        screen.handle_key(Key::Enter);
        assert_eq!(screen.session.status(), Status::Configuring);
    }

    #[test]
    fn test_escape_goes_home() {
        let mut screen = GameScreen::new();
        assert_eq!(screen.handle_key(Key::Escape), ScreenAction::Home);
    }

    #[test]
    fn test_draw_every_view() {
        let mut screen = GameScreen::new();
        let mut out = Vec::new();
        screen.draw(&mut out, 80, 24).unwrap();
        assert!(!out.is_empty());

        screen.handle_key(Key::Enter);
        out.clear();
        screen.draw(&mut out, 80, 24).unwrap();
        assert!(!out.is_empty());
    }
}
