//! # Application State
//!
//! View state for the guessing game window and the handlers the input layer
//! calls. The app owns the [`RoundEngine`] and the current [`RoundState`];
//! every engine call happens synchronously inside one of these handlers.
//!
//! The screen moves through three modes:
//! - **Selecting**: choose a difficulty and press START
//! - **Guessing**: type guesses; the difficulty selector is locked
//! - **RoundOver**: the win/lose dialog is shown until dismissed

use guess::{EngineError, RoundEngine, RoundState, SecretSource};
use tracing::{debug, error};

pub const WELCOME_MESSAGE: &str = "Choose a difficulty and press START!";
pub const NEW_ROUND_MESSAGE: &str = "Choose your difficulty and press START for a new round.";
pub const INVALID_INPUT_MESSAGE: &str = "Invalid Input, Please enter a valid number.";

/// Longest guess the entry accepts; any run of this many digits fits an `i64`.
const MAX_INPUT_LEN: usize = 18;

/// Current state of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Selecting,
    Guessing,
    RoundOver,
}

/// How the last round ended, shown in the end-of-round dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub won: bool,
    pub secret: u32,
}

impl RoundOutcome {
    pub fn title(&self) -> &'static str {
        if self.won {
            "You Win!"
        } else {
            "You Lose!"
        }
    }

    pub fn message(&self) -> String {
        if self.won {
            format!("Correct! The secret number was {}.", self.secret)
        } else {
            format!("😞 Out of attempts! The secret number was {}.", self.secret)
        }
    }
}

/// The main application state
pub struct App<S: SecretSource> {
    pub should_quit: bool,
    pub mode: AppMode,
    pub engine: RoundEngine<S>,
    /// Round in progress, or the last finished one
    pub round: Option<RoundState>,
    /// Difficulty names in selector order
    pub difficulties: Vec<String>,
    pub selected_difficulty: usize,
    /// Status line: prompts, engine feedback and input errors
    pub info: String,
    /// Text typed into the guess entry
    pub input: String,
    /// Set while the end-of-round dialog is open
    pub outcome: Option<RoundOutcome>,
}

impl<S: SecretSource> App<S> {
    /// Creates the app with `initial_difficulty` preselected
    ///
    /// # Errors
    /// Returns [`EngineError::UnknownDifficulty`] if the engine's table has no
    /// such difficulty.
    pub fn new(engine: RoundEngine<S>, initial_difficulty: &str) -> Result<Self, EngineError> {
        let selected_difficulty = engine
            .table()
            .position(initial_difficulty)
            .ok_or_else(|| EngineError::UnknownDifficulty(initial_difficulty.to_string()))?;
        let difficulties = engine.table().names().map(str::to_string).collect();

        Ok(Self {
            should_quit: false,
            mode: AppMode::Selecting,
            engine,
            round: None,
            difficulties,
            selected_difficulty,
            info: WELCOME_MESSAGE.to_string(),
            input: String::new(),
            outcome: None,
        })
    }

    pub fn selected_difficulty_name(&self) -> &str {
        &self.difficulties[self.selected_difficulty]
    }

    pub fn select_next_difficulty(&mut self) {
        if self.mode == AppMode::Selecting {
            self.selected_difficulty = (self.selected_difficulty + 1) % self.difficulties.len();
        }
    }

    pub fn select_prev_difficulty(&mut self) {
        if self.mode == AppMode::Selecting {
            let len = self.difficulties.len();
            self.selected_difficulty = (self.selected_difficulty + len - 1) % len;
        }
    }

    /// Label for the attempts line
    pub fn attempts_label(&self) -> String {
        match &self.round {
            Some(round) => format!("Attempts left: {}", round.attempts_remaining()),
            None => "Attempts left: -".to_string(),
        }
    }

    /// START: begins a round at the selected difficulty
    pub fn start_round(&mut self) {
        if self.mode != AppMode::Selecting {
            return;
        }
        let difficulty = self.selected_difficulty_name().to_string();
        match self.engine.start_round(&difficulty) {
            Ok(round) => {
                self.info = format!("Guess a number between 1 and {}!", round.number_range());
                self.round = Some(round);
                self.input.clear();
                self.mode = AppMode::Guessing;
            }
            Err(err) => {
                error!(%err, "could not start round");
                self.info = err.to_string();
            }
        }
    }

    pub fn push_input(&mut self, c: char) {
        if self.mode == AppMode::Guessing && self.input.len() < MAX_INPUT_LEN && !c.is_control() {
            self.input.push(c);
        }
    }

    pub fn pop_input(&mut self) {
        if self.mode == AppMode::Guessing {
            self.input.pop();
        }
    }

    /// GUESS: validates the entry and hands the number to the engine
    ///
    /// Anything other than a plain run of digits is rejected here and never
    /// reaches the engine, so it cannot cost an attempt.
    pub fn submit_guess(&mut self) {
        if self.mode != AppMode::Guessing {
            return;
        }
        let Some(round) = self.round.as_mut() else {
            return;
        };

        let Some(guess) = parse_guess(&self.input) else {
            debug!(input = %self.input, "rejected guess input");
            self.info = INVALID_INPUT_MESSAGE.to_string();
            return;
        };

        let feedback = self.engine.evaluate_guess(round, guess);
        self.info = feedback.to_string();
        self.input.clear();

        if round.won() {
            self.end_round(true);
        } else if round.attempts_remaining() == 0 {
            self.end_round(false);
        }
    }

    fn end_round(&mut self, won: bool) {
        let Some(round) = &self.round else {
            return;
        };
        self.outcome = Some(RoundOutcome {
            won,
            secret: round.secret(),
        });
        self.info = NEW_ROUND_MESSAGE.to_string();
        self.mode = AppMode::RoundOver;
    }

    /// Closes the end-of-round dialog and unlocks the selector
    pub fn dismiss_outcome(&mut self) {
        if self.mode == AppMode::RoundOver {
            self.outcome = None;
            self.mode = AppMode::Selecting;
        }
    }
}

/// Parses the entry text as a guess: trimmed, non-empty, ASCII digits only
fn parse_guess(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use guess::{DifficultyProfile, DifficultyTable};

    struct Fixed(u32);

    impl SecretSource for Fixed {
        fn draw_secret(&mut self, number_range: u32) -> u32 {
            self.0.clamp(1, number_range)
        }
    }

    fn app_with_secret(secret: u32, difficulty: &str) -> App<Fixed> {
        let engine = RoundEngine::new(DifficultyTable::standard(), Fixed(secret));
        App::new(engine, difficulty).unwrap()
    }

    fn type_guess(app: &mut App<Fixed>, text: &str) {
        for c in text.chars() {
            app.push_input(c);
        }
        app.submit_guess();
    }

    #[test]
    fn test_new_app() {
        let app = app_with_secret(1, "easy");
        assert_eq!(app.mode, AppMode::Selecting);
        assert_eq!(app.selected_difficulty_name(), "easy");
        assert_eq!(app.info, WELCOME_MESSAGE);
        assert_eq!(app.attempts_label(), "Attempts left: -");
    }

    #[test]
    fn test_new_app_unknown_difficulty() {
        let engine = RoundEngine::new(DifficultyTable::standard(), Fixed(1));
        assert!(matches!(
            App::new(engine, "extreme"),
            Err(EngineError::UnknownDifficulty(name)) if name == "extreme"
        ));
    }

    #[test]
    fn test_difficulty_selection_wraps() {
        let mut app = app_with_secret(1, "beginner");
        app.select_prev_difficulty();
        assert_eq!(app.selected_difficulty_name(), "IMPOSSIBLE");
        app.select_next_difficulty();
        app.select_next_difficulty();
        assert_eq!(app.selected_difficulty_name(), "easy");
    }

    #[test]
    fn test_start_round_locks_selector() {
        let mut app = app_with_secret(7, "medium");
        app.start_round();
        assert_eq!(app.mode, AppMode::Guessing);
        assert_eq!(app.info, "Guess a number between 1 and 100!");
        assert_eq!(app.attempts_label(), "Attempts left: 7");

        app.select_next_difficulty();
        assert_eq!(app.selected_difficulty_name(), "medium");
    }

    #[test]
    fn test_invalid_input_never_reaches_engine() {
        let mut app = app_with_secret(23, "easy");
        app.start_round();
        for text in ["", "abc", "-5", "4.5", "1 2", "+3"] {
            type_guess(&mut app, text);
            assert_eq!(app.info, INVALID_INPUT_MESSAGE, "input {:?}", text);
            app.input.clear();
        }
        assert_eq!(app.attempts_label(), "Attempts left: 10");
        assert_eq!(app.mode, AppMode::Guessing);
    }

    #[test]
    fn test_out_of_range_and_feedback() {
        let mut app = app_with_secret(23, "easy");
        app.start_round();

        type_guess(&mut app, "50");
        assert_eq!(app.info, "Good try, but too HIGH!");
        assert_eq!(app.attempts_label(), "Attempts left: 9");
        assert!(app.input.is_empty());

        type_guess(&mut app, "0");
        assert_eq!(app.info, "Please enter a number between 1 and 50.");
        assert_eq!(app.attempts_label(), "Attempts left: 9");

        type_guess(&mut app, " 7 ");
        assert_eq!(app.info, "Good try, but too LOW!");
        assert_eq!(app.attempts_label(), "Attempts left: 8");
    }

    #[test]
    fn test_win_opens_dialog() {
        let mut app = app_with_secret(23, "easy");
        app.start_round();
        type_guess(&mut app, "23");

        assert_eq!(app.mode, AppMode::RoundOver);
        let outcome = app.outcome.unwrap();
        assert_eq!(outcome.title(), "You Win!");
        assert_eq!(outcome.message(), "Correct! The secret number was 23.");
        assert_eq!(app.info, NEW_ROUND_MESSAGE);
        assert_eq!(app.engine.score(), 1);

        app.dismiss_outcome();
        assert_eq!(app.mode, AppMode::Selecting);
        assert!(app.outcome.is_none());
        app.select_next_difficulty();
        assert_eq!(app.selected_difficulty_name(), "medium");
    }

    #[test]
    fn test_loss_opens_dialog() {
        let table = DifficultyTable::new([("tiny", DifficultyProfile::new(2, 5))]).unwrap();
        let mut app = App::new(RoundEngine::new(table, Fixed(4)), "tiny").unwrap();
        app.start_round();
        type_guess(&mut app, "1");
        type_guess(&mut app, "5");

        assert_eq!(app.mode, AppMode::RoundOver);
        let outcome = app.outcome.unwrap();
        assert!(!outcome.won);
        assert_eq!(outcome.title(), "You Lose!");
        assert!(outcome.message().ends_with("The secret number was 4."));
        assert_eq!(app.engine.score(), 0);
    }

    #[test]
    fn test_input_ignored_outside_guessing() {
        let mut app = app_with_secret(3, "easy");
        app.push_input('4');
        app.submit_guess();
        assert!(app.input.is_empty());
        assert_eq!(app.info, WELCOME_MESSAGE);
    }

    #[test]
    fn test_input_length_is_capped() {
        let mut app = app_with_secret(3, "easy");
        app.start_round();
        for _ in 0..40 {
            app.push_input('9');
        }
        assert_eq!(app.input.len(), MAX_INPUT_LEN);
        app.submit_guess();
        assert_eq!(app.info, "Please enter a number between 1 and 50.");
    }

    #[test]
    fn test_parse_guess() {
        assert_eq!(parse_guess("42"), Some(42));
        assert_eq!(parse_guess("  0007 "), Some(7));
        assert_eq!(parse_guess("99999999999999999999"), None);
        assert_eq!(parse_guess("-1"), None);
        assert_eq!(parse_guess("١٢"), None);
    }
}
