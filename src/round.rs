//! # Round State
//!
//! One play-through from secret selection to a win or to running out of
//! attempts. A [`RoundState`] is created by
//! [`RoundEngine::start_round`](crate::RoundEngine::start_round) and only the
//! engine mutates it; callers hold it and read it through the accessors.
//!
//! ## Lifecycle
//! - **Active**: attempts remain and the secret has not been found
//! - **Won**: a correct guess was evaluated
//! - **Exhausted**: attempts reached zero without a correct guess
//!
//! Won and Exhausted are terminal.

use std::fmt;

/// Derived lifecycle position of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Active,
    Won,
    Exhausted,
}

impl RoundStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundStatus::Active)
    }
}

/// The complete state of one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    /// Target value, in `1..=number_range`
    pub(crate) secret: u32,
    /// Attempt budget the round started with
    pub(crate) max_attempts: u32,
    /// In-range guesses still available
    pub(crate) attempts_remaining: u32,
    /// Upper bound of the secret, inclusive
    pub(crate) number_range: u32,
    /// Difficulty name the round was started with
    pub(crate) difficulty: String,
    pub(crate) won: bool,
}

impl RoundState {
    pub(crate) fn new(difficulty: &str, secret: u32, max_attempts: u32, number_range: u32) -> Self {
        Self {
            secret,
            max_attempts,
            attempts_remaining: max_attempts,
            number_range,
            difficulty: difficulty.to_string(),
            won: false,
        }
    }

    pub fn secret(&self) -> u32 {
        self.secret
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Number of in-range guesses evaluated so far
    pub fn attempts_used(&self) -> u32 {
        self.max_attempts - self.attempts_remaining
    }

    pub fn number_range(&self) -> u32 {
        self.number_range
    }

    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn status(&self) -> RoundStatus {
        if self.won {
            RoundStatus::Won
        } else if self.attempts_remaining == 0 {
            RoundStatus::Exhausted
        } else {
            RoundStatus::Active
        }
    }

    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    /// True when `guess` lies in `1..=number_range`
    pub fn in_range(&self, guess: i64) -> bool {
        (1..=i64::from(self.number_range)).contains(&guess)
    }
}

/// Result of evaluating one guess
///
/// The `Display` implementation produces the message shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Guess outside `1..=number_range`; no attempt was used
    OutOfRange { number_range: u32 },
    TooLow,
    TooHigh,
    /// Guess matched the secret; the round is won
    Correct { secret: u32 },
    /// The round had already ended; nothing was evaluated
    RoundOver { won: bool, secret: u32 },
}

impl Feedback {
    /// True if this evaluation consumed an attempt
    pub fn used_attempt(&self) -> bool {
        matches!(self, Feedback::TooLow | Feedback::TooHigh | Feedback::Correct { .. })
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::OutOfRange { number_range } => {
                write!(f, "Please enter a number between 1 and {}.", number_range)
            }
            Feedback::TooLow => write!(f, "Good try, but too LOW!"),
            Feedback::TooHigh => write!(f, "Good try, but too HIGH!"),
            Feedback::Correct { secret } => {
                write!(f, "🎉 Congratulations! You guessed {} correctly!", secret)
            }
            Feedback::RoundOver { won: true, secret } => {
                write!(f, "This round is already won. The secret number was {}.", secret)
            }
            Feedback::RoundOver { won: false, secret } => {
                write!(f, "No attempts left. The secret number was {}.", secret)
            }
        }
    }
}
