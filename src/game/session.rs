//! Guessing Game Engine - one session from configuration to its end
//!
//! A [`GameSession`] owns a validated configuration (range and attempt
//! budget), a secret drawn once per session, a guess counter, and the
//! full guess history (newest first). Every operation is a pure,
//! immediate transition; validation failures are typed, recoverable, and
//! never mutate state.
//!
//! Lifecycle: `Configuring` → (validated start) → `Active` →
//! (correct guess) `Won` | (budget spent) `Exhausted`, with `reset`
//! returning to `Configuring` from anywhere.
//!
//! # API
//!
//! - `configure` / `configure_with` - validate and start a session
//! - `submit_guess` - classify one guess
//! - `reset` - back to `Configuring`
//!
//! # Example
//!
//! ```
//! use parlor::game::{GameSession, Outcome};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut session = GameSession::new();
//! let mut rng = StdRng::seed_from_u64(7);
//! session.configure_with("1", "100", "5", &mut rng).unwrap();
//! assert!(matches!(
//!     session.submit_guess("50").unwrap(),
//!     Outcome::Correct | Outcome::Higher | Outcome::Lower
//! ));
//! ```

use log::debug;
use rand::Rng;
use thiserror::Error;

// =============================================================================
// TYPES
// =============================================================================

/// Session lifecycle status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    /// Waiting for a valid configuration.
    #[default]
    Configuring,
    /// Session running; guesses are accepted.
    Active,
    /// The secret was guessed.
    Won,
    /// The attempt budget was spent without a correct guess.
    Exhausted,
}

/// Validated session configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Inclusive lower bound of the secret.
    pub min: i64,
    /// Inclusive upper bound of the secret.
    pub max: i64,
    /// How many guesses the session allows.
    pub attempt_budget: u32,
}

/// Classified result of one accepted guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The guess equals the secret; the session is won.
    Correct,
    /// The secret is greater than the guess.
    Higher,
    /// The secret is less than the guess.
    Lower,
    /// Wrong in a single-attempt session; no direction is revealed.
    Incorrect,
    /// Wrong on the final attempt of a multi-attempt session.
    OutOfAttempts,
}

impl Outcome {
    /// Short label shown in feedback and the history list.
    pub fn label(self) -> &'static str {
        match self {
            Self::Correct => "Correct!",
            Self::Higher => "Higher",
            Self::Lower => "Lower",
            Self::Incorrect => "Wrong",
            Self::OutOfAttempts => "Out of attempts",
        }
    }

    /// True when this outcome ends the session.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Correct | Self::Incorrect | Self::OutOfAttempts)
    }
}

/// One accepted guess with its classified outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuessRecord {
    pub value: i64,
    pub outcome: Outcome,
}

/// Validation failures, all recoverable and state-preserving.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("please enter valid numeric values")]
    InvalidNumber,
    #[error("the minimum must be less than the maximum")]
    MinNotBelowMax,
    #[error("the number of attempts must be greater than 0")]
    NonPositiveBudget,
    #[error("the game is not active")]
    NotActive,
    #[error("please enter a number")]
    GuessNotNumeric,
    #[error("please enter a number between {min} and {max}")]
    GuessOutOfRange { min: i64, max: i64 },
}

// =============================================================================
// SESSION
// =============================================================================

/// One guessing-game session.
#[derive(Clone, Debug, Default)]
pub struct GameSession {
    config: Option<GameConfig>,
    secret: Option<i64>,
    attempts_used: u32,
    history: Vec<GuessRecord>,
    status: Status,
}

impl GameSession {
    /// Create a session in `Configuring`.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------------

    pub fn status(&self) -> Status {
        self.status
    }

    /// The active configuration, present from the first successful
    /// `configure` until the next `reset`.
    pub fn config(&self) -> Option<GameConfig> {
        self.config
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    /// Guesses left in the budget (0 when unconfigured).
    pub fn attempts_remaining(&self) -> u32 {
        self.config
            .map(|c| c.attempt_budget.saturating_sub(self.attempts_used))
            .unwrap_or(0)
    }

    /// Accepted guesses, newest first.
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// The secret, revealed only once the session has ended.
    pub fn revealed_secret(&self) -> Option<i64> {
        match self.status {
            Status::Won | Status::Exhausted => self.secret,
            Status::Configuring | Status::Active => None,
        }
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Validate raw text-field input and start a session, drawing the
    /// secret from `rng` uniformly over `[min, max]` inclusive.
    ///
    /// Failures leave the session exactly as it was.
    pub fn configure_with<R: Rng>(
        &mut self,
        min: &str,
        max: &str,
        budget: &str,
        rng: &mut R,
    ) -> Result<(), GameError> {
        let min: i64 = min.trim().parse().map_err(|_| GameError::InvalidNumber)?;
        let max: i64 = max.trim().parse().map_err(|_| GameError::InvalidNumber)?;
        let budget: i64 = budget.trim().parse().map_err(|_| GameError::InvalidNumber)?;

        if min >= max {
            return Err(GameError::MinNotBelowMax);
        }
        if budget <= 0 {
            return Err(GameError::NonPositiveBudget);
        }
        let attempt_budget = u32::try_from(budget).map_err(|_| GameError::InvalidNumber)?;

        let secret = rng.gen_range(min..=max);
        debug!("session start: range [{min}, {max}], {attempt_budget} attempts");

        self.config = Some(GameConfig {
            min,
            max,
            attempt_budget,
        });
        self.secret = Some(secret);
        self.attempts_used = 0;
        self.history.clear();
        self.status = Status::Active;
        Ok(())
    }

    /// `configure_with` over the thread-local generator.
    pub fn configure(&mut self, min: &str, max: &str, budget: &str) -> Result<(), GameError> {
        self.configure_with(min, max, budget, &mut rand::thread_rng())
    }

    /// Accept and classify one guess.
    ///
    /// Classification order: correct wins; a wrong guess in a
    /// single-attempt session is plain `Incorrect` (direction would be
    /// moot); a wrong guess that spends the budget is `OutOfAttempts`
    /// (game-over outranks a directional hint the player can no longer
    /// act on); otherwise `Higher`/`Lower` and the session stays active.
    /// Every accepted guess is prepended to the history.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Outcome, GameError> {
        if self.status != Status::Active {
            return Err(GameError::NotActive);
        }
        let (Some(config), Some(secret)) = (self.config, self.secret) else {
            return Err(GameError::NotActive);
        };

        let guess: i64 = raw.trim().parse().map_err(|_| GameError::GuessNotNumeric)?;
        if guess < config.min || guess > config.max {
            return Err(GameError::GuessOutOfRange {
                min: config.min,
                max: config.max,
            });
        }

        self.attempts_used += 1;

        let outcome = if guess == secret {
            self.status = Status::Won;
            Outcome::Correct
        } else if config.attempt_budget == 1 {
            self.status = Status::Exhausted;
            Outcome::Incorrect
        } else if self.attempts_used >= config.attempt_budget {
            self.status = Status::Exhausted;
            Outcome::OutOfAttempts
        } else if secret > guess {
            Outcome::Higher
        } else {
            Outcome::Lower
        };

        debug!(
            "guess {} -> {:?} ({} of {} attempts)",
            guess, outcome, self.attempts_used, config.attempt_budget
        );
        self.history.insert(0, GuessRecord { value: guess, outcome });
        Ok(outcome)
    }

    /// Return to `Configuring`, clearing secret, counters, and history.
    /// Callable from any status.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Start a session and return it together with the drawn secret.
    fn started(min: &str, max: &str, budget: &str, seed: u64) -> (GameSession, i64) {
        let mut session = GameSession::new();
        let mut rng = StdRng::seed_from_u64(seed);
        session
            .configure_with(min, max, budget, &mut rng)
            .expect("valid configuration");
        let secret = session.secret.expect("secret drawn");
        (session, secret)
    }

    /// A value inside the range that is not the secret.
    fn wrong_guess(secret: i64, min: i64, max: i64) -> i64 {
        if secret > min { secret - 1 } else { max }
    }

    #[test]
    fn test_initial_state() {
        let session = GameSession::new();
        assert_eq!(session.status(), Status::Configuring);
        assert!(session.config().is_none());
        assert_eq!(session.attempts_remaining(), 0);
        assert!(session.history().is_empty());
        assert!(session.revealed_secret().is_none());
    }

    #[test]
    fn test_configure_starts_session() {
        let (session, secret) = started("1", "100", "5", 1);
        assert_eq!(session.status(), Status::Active);
        assert_eq!(session.attempts_remaining(), 5);
        assert!((1..=100).contains(&secret));
        // Secret is not revealed while the session runs.
        assert!(session.revealed_secret().is_none());
    }

    #[test]
    fn test_configure_rejects_non_numeric() {
        let mut session = GameSession::new();
        assert_eq!(
            session.configure("one", "100", "5"),
            Err(GameError::InvalidNumber)
        );
        assert_eq!(
            session.configure("1", "", "5"),
            Err(GameError::InvalidNumber)
        );
        assert_eq!(session.status(), Status::Configuring);
    }

    #[test]
    fn test_configure_rejects_min_not_below_max() {
        let mut session = GameSession::new();
        assert_eq!(
            session.configure("5", "5", "3"),
            Err(GameError::MinNotBelowMax)
        );
        assert_eq!(
            session.configure("5", "1", "3"),
            Err(GameError::MinNotBelowMax)
        );
        assert_eq!(session.status(), Status::Configuring);
    }

    #[test]
    fn test_configure_rejects_non_positive_budget() {
        let mut session = GameSession::new();
        assert_eq!(
            session.configure("1", "10", "0"),
            Err(GameError::NonPositiveBudget)
        );
        assert_eq!(
            session.configure("1", "10", "-2"),
            Err(GameError::NonPositiveBudget)
        );
        assert_eq!(session.status(), Status::Configuring);
    }

    #[test]
    fn test_configure_accepts_negative_range() {
        let (session, secret) = started("-50", "-10", "3", 9);
        assert_eq!(session.status(), Status::Active);
        assert!((-50..=-10).contains(&secret));
    }

    #[test]
    fn test_guess_rejected_when_not_active() {
        let mut session = GameSession::new();
        assert_eq!(session.submit_guess("5"), Err(GameError::NotActive));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_guess_rejected_when_non_numeric() {
        let (mut session, _) = started("1", "100", "5", 2);
        assert_eq!(session.submit_guess("abc"), Err(GameError::GuessNotNumeric));
        assert_eq!(session.submit_guess(""), Err(GameError::GuessNotNumeric));
        assert_eq!(session.attempts_used(), 0);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_guess_rejected_when_out_of_range() {
        let (mut session, _) = started("10", "20", "5", 3);
        assert_eq!(
            session.submit_guess("9"),
            Err(GameError::GuessOutOfRange { min: 10, max: 20 })
        );
        assert_eq!(
            session.submit_guess("21"),
            Err(GameError::GuessOutOfRange { min: 10, max: 20 })
        );
        assert_eq!(session.attempts_used(), 0);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_correct_guess_wins() {
        let (mut session, secret) = started("1", "100", "5", 4);
        assert_eq!(
            session.submit_guess(&secret.to_string()),
            Ok(Outcome::Correct)
        );
        assert_eq!(session.status(), Status::Won);
        assert_eq!(session.revealed_secret(), Some(secret));
        assert_eq!(session.attempts_used(), 1);
    }

    #[test]
    fn test_directional_feedback() {
        let (mut session, secret) = started("1", "100", "10", 5);
        if secret > 1 {
            assert_eq!(session.submit_guess(&(secret - 1).to_string()), Ok(Outcome::Higher));
        }
        if secret < 100 {
            assert_eq!(session.submit_guess(&(secret + 1).to_string()), Ok(Outcome::Lower));
        }
        assert_eq!(session.status(), Status::Active);
    }

    #[test]
    fn test_exhaustion_outranks_direction_on_final_guess() {
        let (mut session, secret) = started("1", "100", "3", 6);
        let wrong = wrong_guess(secret, 1, 100).to_string();
        // Two wrong directional guesses, then a third wrong guess: the
        // third must report game-over, not a now-useless direction.
        assert!(matches!(
            session.submit_guess(&wrong),
            Ok(Outcome::Higher | Outcome::Lower)
        ));
        assert!(matches!(
            session.submit_guess(&wrong),
            Ok(Outcome::Higher | Outcome::Lower)
        ));
        assert_eq!(session.submit_guess(&wrong), Ok(Outcome::OutOfAttempts));
        assert_eq!(session.status(), Status::Exhausted);
        assert_eq!(session.revealed_secret(), Some(secret));
        assert_eq!(session.attempts_remaining(), 0);
    }

    #[test]
    fn test_single_attempt_suppresses_direction() {
        let (mut session, secret) = started("1", "100", "1", 7);
        let wrong = wrong_guess(secret, 1, 100).to_string();
        assert_eq!(session.submit_guess(&wrong), Ok(Outcome::Incorrect));
        assert_eq!(session.status(), Status::Exhausted);
        assert_eq!(session.revealed_secret(), Some(secret));
    }

    #[test]
    fn test_single_attempt_can_still_win() {
        let (mut session, secret) = started("1", "100", "1", 8);
        assert_eq!(
            session.submit_guess(&secret.to_string()),
            Ok(Outcome::Correct)
        );
        assert_eq!(session.status(), Status::Won);
    }

    #[test]
    fn test_no_guesses_after_session_ends() {
        let (mut session, secret) = started("1", "100", "1", 10);
        session.submit_guess(&secret.to_string()).unwrap();
        assert_eq!(session.submit_guess("50"), Err(GameError::NotActive));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_history_is_newest_first() {
        // A wide range with a tiny secret keeps these guesses wrong.
        let mut session = GameSession::new();
        let mut rng = StdRng::seed_from_u64(11);
        session
            .configure_with("1", "1000000", "10", &mut rng)
            .unwrap();
        let secret = session.secret.unwrap();
        let guesses: Vec<i64> = [10, 50, 75]
            .into_iter()
            .map(|g| if g == secret { g + 1 } else { g })
            .collect();
        for guess in &guesses {
            session.submit_guess(&guess.to_string()).unwrap();
        }
        let recorded: Vec<i64> = session.history().iter().map(|r| r.value).collect();
        assert_eq!(recorded, vec![guesses[2], guesses[1], guesses[0]]);
    }

    #[test]
    fn test_history_records_outcomes() {
        let (mut session, secret) = started("1", "100", "5", 12);
        let wrong = wrong_guess(secret, 1, 100);
        session.submit_guess(&wrong.to_string()).unwrap();
        session.submit_guess(&secret.to_string()).unwrap();
        assert_eq!(session.history()[0].outcome, Outcome::Correct);
        assert_eq!(session.history()[0].value, secret);
        assert!(matches!(
            session.history()[1].outcome,
            Outcome::Higher | Outcome::Lower
        ));
    }

    #[test]
    fn test_reset_returns_to_configuring() {
        let (mut session, secret) = started("1", "100", "5", 13);
        session.submit_guess(&secret.to_string()).unwrap();
        session.reset();
        assert_eq!(session.status(), Status::Configuring);
        assert!(session.config().is_none());
        assert!(session.history().is_empty());
        assert_eq!(session.attempts_used(), 0);
        assert!(session.revealed_secret().is_none());
    }

    #[test]
    fn test_failed_reconfigure_preserves_running_session() {
        let (mut session, _) = started("1", "100", "5", 14);
        let config = session.config().unwrap();
        assert_eq!(
            session.configure("9", "3", "5"),
            Err(GameError::MinNotBelowMax)
        );
        assert_eq!(session.status(), Status::Active);
        assert_eq!(session.config(), Some(config));
    }

    #[test]
    fn test_secret_always_within_bounds() {
        for seed in 0..200 {
            let (_, secret) = started("10", "20", "3", seed);
            assert!((10..=20).contains(&secret), "seed {seed}: {secret}");
        }
    }

    #[test]
    fn test_correct_only_for_the_drawn_secret() {
        for seed in 0..50 {
            let (mut session, secret) = started("1", "10", "100", seed);
            for guess in 1..=10 {
                if guess == secret {
                    continue;
                }
                let outcome = session.submit_guess(&guess.to_string()).unwrap();
                assert_ne!(outcome, Outcome::Correct, "seed {seed}, guess {guess}");
                if session.status() != Status::Active {
                    break;
                }
            }
        }
    }

    #[test]
    fn test_terminal_outcomes() {
        assert!(Outcome::Correct.is_terminal());
        assert!(Outcome::Incorrect.is_terminal());
        assert!(Outcome::OutOfAttempts.is_terminal());
        assert!(!Outcome::Higher.is_terminal());
        assert!(!Outcome::Lower.is_terminal());
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(Outcome::Correct.label(), "Correct!");
        assert_eq!(Outcome::Higher.label(), "Higher");
        assert_eq!(Outcome::Lower.label(), "Lower");
        assert_eq!(Outcome::Incorrect.label(), "Wrong");
        assert_eq!(Outcome::OutOfAttempts.label(), "Out of attempts");
    }
}
