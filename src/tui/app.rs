//! App loop - terminal lifecycle, event dispatch, frame drawing
//!
//! Owns the active screen and the terminal session. The loop polls for
//! input with a short timeout so time-based state (notice expiry) keeps
//! moving while the keyboard is idle.
//!
//! # API
//!
//! - `run` - Enter the terminal session and run until quit

use std::io;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::style::SetBackgroundColor;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::QueueableCommand;
use log::{debug, info};

use super::buffer::FrameBuffer;
use super::input::{self, InputEvent, Key};
use super::screens::{
    CalculatorScreen, GameScreen, HomeScreen, QuizScreen, Route, ScreenAction,
};
use super::theme;

/// Poll timeout, which doubles as the idle tick.
const TICK: Duration = Duration::from_millis(250);

// =============================================================================
// TERMINAL SESSION
// =============================================================================

/// Raw-mode plus alternate-screen session. Restores the terminal on
/// drop so panics and early returns cannot leave it unusable.
struct TerminalSession;

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = FrameBuffer::new();
        out.queue(EnterAlternateScreen)?;
        out.queue(Hide)?;
        out.present()?;
        Ok(Self)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = FrameBuffer::new();
        let _ = out.queue(Show);
        let _ = out.queue(LeaveAlternateScreen);
        let _ = out.present();
        let _ = terminal::disable_raw_mode();
    }
}

// =============================================================================
// SCREENS
// =============================================================================

/// The mounted screen. Navigation replaces the variant wholesale, so
/// every screen starts from a clean state when it is opened.
enum ActiveScreen {
    Home(HomeScreen),
    Calculator(CalculatorScreen),
    Quiz(QuizScreen),
    Game(GameScreen),
}

impl ActiveScreen {
    fn open(route: Route) -> Self {
        match route {
            Route::Calculator => Self::Calculator(CalculatorScreen::new()),
            Route::Quiz => Self::Quiz(QuizScreen::new()),
            Route::Game => Self::Game(GameScreen::new()),
        }
    }

    fn handle_key(&mut self, key: Key) -> ScreenAction {
        match self {
            Self::Home(screen) => screen.handle_key(key),
            Self::Calculator(screen) => screen.handle_key(key),
            Self::Quiz(screen) => screen.handle_key(key),
            Self::Game(screen) => screen.handle_key(key),
        }
    }

    fn tick(&mut self) {
        if let Self::Game(screen) = self {
            screen.tick();
        }
    }

    fn draw<W: io::Write>(&self, out: &mut W, cols: u16, rows: u16) -> io::Result<()> {
        match self {
            Self::Home(screen) => screen.draw(out, cols, rows),
            Self::Calculator(screen) => screen.draw(out, cols, rows),
            Self::Quiz(screen) => screen.draw(out, cols, rows),
            Self::Game(screen) => screen.draw(out, cols, rows),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Home(_) => "home",
            Self::Calculator(_) => "calculator",
            Self::Quiz(_) => "quiz",
            Self::Game(_) => "game",
        }
    }
}

// =============================================================================
// LOOP
// =============================================================================

/// Run the app until the user quits. Sets up the terminal, restores it
/// on the way out.
pub fn run() -> io::Result<()> {
    let _session = TerminalSession::enter()?;
    let (mut cols, mut rows) = terminal::size()?;
    let mut screen = ActiveScreen::Home(HomeScreen::new());
    let mut frame = FrameBuffer::new();
    info!("started ({cols}x{rows})");

    loop {
        frame.clear();
        frame.queue(SetBackgroundColor(theme::BG))?;
        frame.queue(Clear(ClearType::All))?;
        screen.draw(&mut frame, cols, rows)?;
        frame.present()?;

        match input::poll_event(TICK)? {
            None | Some(InputEvent::None) => screen.tick(),
            Some(InputEvent::Resize(new_cols, new_rows)) => {
                cols = new_cols;
                rows = new_rows;
            }
            Some(InputEvent::Key(key)) => match screen.handle_key(key) {
                ScreenAction::Stay => {}
                ScreenAction::Open(route) => {
                    screen = ActiveScreen::open(route);
                    debug!("opened {}", screen.name());
                }
                ScreenAction::Home => {
                    screen = ActiveScreen::Home(HomeScreen::new());
                    debug!("back to home");
                }
                ScreenAction::Quit => break,
            },
        }
    }

    info!("quit");
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_replaces_screen_state() {
        let mut screen = ActiveScreen::open(Route::Calculator);
        screen.handle_key(Key::Char('7'));
        // Reopening must start from a fresh engine.
        screen = ActiveScreen::open(Route::Calculator);
        match screen {
            ActiveScreen::Calculator(ref calc) => {
                let mut out = Vec::new();
                calc.draw(&mut out, 80, 24).unwrap();
            }
            _ => panic!("expected calculator"),
        }
    }

    #[test]
    fn test_route_names() {
        assert_eq!(ActiveScreen::open(Route::Quiz).name(), "quiz");
        assert_eq!(ActiveScreen::open(Route::Game).name(), "game");
        assert_eq!(ActiveScreen::open(Route::Calculator).name(), "calculator");
    }

    #[test]
    fn test_quit_from_home() {
        let mut screen = ActiveScreen::Home(HomeScreen::new());
        assert_eq!(screen.handle_key(Key::Quit), ScreenAction::Quit);
    }
}
