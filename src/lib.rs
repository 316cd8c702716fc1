//! # Number Guessing Round Engine
//!
//! The engine behind the guessing game: it starts rounds from a named
//! difficulty and evaluates guesses against them, keeping a running count of
//! rounds won. Everything the engine needs is handed to it at construction:
//! the [`DifficultyTable`] it looks names up in and the [`SecretSource`] it
//! draws secrets from. Two engines never share state.
//!
//! ## Example
//! ```
//! use guess::{DifficultyTable, Feedback, RoundEngine};
//!
//! let mut engine = RoundEngine::seeded(DifficultyTable::standard(), 7);
//! let mut round = engine.start_round("easy").unwrap();
//! assert_eq!(round.attempts_remaining(), 10);
//!
//! // Out-of-range guesses are free.
//! assert_eq!(engine.evaluate_guess(&mut round, 0), Feedback::OutOfRange { number_range: 50 });
//! assert_eq!(round.attempts_remaining(), 10);
//! ```

pub mod difficulty;
pub mod error;
pub mod round;

pub use difficulty::{DifficultyProfile, DifficultyTable, DEFAULT_DIFFICULTY};
pub use error::EngineError;
pub use round::{Feedback, RoundState, RoundStatus};

use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::cmp::Ordering;
use tracing::{debug, info};

/// Source of secret numbers
///
/// Fairness is what matters here, not unpredictability, so any uniform
/// generator will do. Every random number generator is a source through the
/// blanket implementation; tests implement the trait directly to pin secrets.
pub trait SecretSource {
    /// Returns a secret in `1..=number_range`. `number_range` is at least 1.
    fn draw_secret(&mut self, number_range: u32) -> u32;
}

impl<R: RngCore> SecretSource for R {
    fn draw_secret(&mut self, number_range: u32) -> u32 {
        self.random_range(1..=number_range)
    }
}

/// The round engine
///
/// Owns the win counter for the lifetime of the process. Round states are
/// owned by the caller and passed back in for evaluation.
pub struct RoundEngine<S: SecretSource = Xoshiro256PlusPlus> {
    /// Difficulty names and their profiles
    table: DifficultyTable,
    /// Where secrets come from
    source: S,
    /// Rounds won since the engine was created
    score: u32,
}

impl RoundEngine<Xoshiro256PlusPlus> {
    /// Creates an engine whose secrets are reproducible from `seed`
    ///
    /// # Arguments
    /// * `table` - Difficulties the engine accepts
    /// * `seed` - Seed for the xoshiro256++ generator
    pub fn seeded(table: DifficultyTable, seed: u64) -> Self {
        Self::new(table, Xoshiro256PlusPlus::seed_from_u64(seed))
    }

    /// Creates an engine seeded from the thread-local random generator
    pub fn from_entropy(table: DifficultyTable) -> Self {
        Self::seeded(table, rand::random())
    }
}

impl<S: SecretSource> RoundEngine<S> {
    /// Creates a new engine with a score of zero
    ///
    /// # Arguments
    /// * `table` - Difficulties the engine accepts
    /// * `source` - Generator used to pick each round's secret
    pub fn new(table: DifficultyTable, source: S) -> Self {
        Self {
            table,
            source,
            score: 0,
        }
    }

    pub fn table(&self) -> &DifficultyTable {
        &self.table
    }

    /// Total rounds won with this engine
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Starts a new round at the given difficulty
    ///
    /// Draws a fresh secret and returns a round with the full attempt budget.
    /// The score is not touched.
    ///
    /// # Errors
    /// Returns [`EngineError::UnknownDifficulty`] if `difficulty` is not in the
    /// table. This indicates a caller bug, not a player mistake.
    pub fn start_round(&mut self, difficulty: &str) -> Result<RoundState, EngineError> {
        let profile = self.table.get(difficulty)?;
        let secret = self.source.draw_secret(profile.number_range);
        debug_assert!(
            (1..=profile.number_range).contains(&secret),
            "secret source returned {} outside 1..={}",
            secret,
            profile.number_range
        );
        debug!(
            difficulty,
            max_attempts = profile.max_attempts,
            number_range = profile.number_range,
            "round started"
        );
        Ok(RoundState::new(
            difficulty,
            secret,
            profile.max_attempts,
            profile.number_range,
        ))
    }

    /// Evaluates one guess against a round
    ///
    /// Out-of-range guesses are answered with [`Feedback::OutOfRange`] and cost
    /// nothing. Any in-range guess uses one attempt, then reports whether it was
    /// low, high, or correct; a correct guess marks the round won and adds one
    /// to the score.
    ///
    /// A round that is already won or exhausted is left untouched and answered
    /// with [`Feedback::RoundOver`].
    ///
    /// # Arguments
    /// * `state` - A round previously returned by [`start_round`](Self::start_round)
    /// * `guess` - The player's guess, any integer
    pub fn evaluate_guess(&mut self, state: &mut RoundState, guess: i64) -> Feedback {
        if state.is_over() {
            debug!(guess, status = ?state.status(), "guess ignored, round already over");
            return Feedback::RoundOver {
                won: state.won,
                secret: state.secret,
            };
        }

        if !state.in_range(guess) {
            debug!(guess, number_range = state.number_range, "guess out of range");
            return Feedback::OutOfRange {
                number_range: state.number_range,
            };
        }

        state.attempts_remaining -= 1;
        let feedback = match guess.cmp(&i64::from(state.secret)) {
            Ordering::Less => Feedback::TooLow,
            Ordering::Greater => Feedback::TooHigh,
            Ordering::Equal => {
                state.won = true;
                self.score += 1;
                info!(
                    difficulty = %state.difficulty,
                    attempts_used = state.attempts_used(),
                    score = self.score,
                    "round won"
                );
                Feedback::Correct {
                    secret: state.secret,
                }
            }
        };
        debug!(guess, attempts_remaining = state.attempts_remaining, ?feedback, "guess evaluated");
        feedback
    }
}
