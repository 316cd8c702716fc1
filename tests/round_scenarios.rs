//! End-to-end round scenarios driven through the public engine API.

use guess::{
    DifficultyProfile, DifficultyTable, EngineError, Feedback, RoundEngine, RoundStatus,
    SecretSource,
};
use std::collections::VecDeque;

/// Hands out the queued secrets in order, then repeats the last one.
struct ScriptedSecrets {
    queue: VecDeque<u32>,
    last: u32,
}

impl ScriptedSecrets {
    fn new(secrets: &[u32]) -> Self {
        Self {
            queue: secrets.iter().copied().collect(),
            last: secrets.last().copied().unwrap_or(1),
        }
    }
}

impl SecretSource for ScriptedSecrets {
    fn draw_secret(&mut self, number_range: u32) -> u32 {
        if let Some(next) = self.queue.pop_front() {
            self.last = next;
        }
        assert!((1..=number_range).contains(&self.last), "scripted secret out of range");
        self.last
    }
}

fn scripted_engine(secrets: &[u32]) -> RoundEngine<ScriptedSecrets> {
    RoundEngine::new(DifficultyTable::standard(), ScriptedSecrets::new(secrets))
}

#[test]
fn easy_round_high_then_free_miss_then_win() {
    let mut engine = scripted_engine(&[23]);
    let mut round = engine.start_round("easy").unwrap();
    assert_eq!(round.number_range(), 50);
    assert_eq!(round.attempts_remaining(), 10);

    let feedback = engine.evaluate_guess(&mut round, 50);
    assert_eq!(feedback, Feedback::TooHigh);
    assert_eq!(feedback.to_string(), "Good try, but too HIGH!");
    assert_eq!(round.attempts_remaining(), 9);

    let feedback = engine.evaluate_guess(&mut round, 0);
    assert_eq!(feedback.to_string(), "Please enter a number between 1 and 50.");
    assert_eq!(round.attempts_remaining(), 9);

    let score_before = engine.score();
    let feedback = engine.evaluate_guess(&mut round, 23);
    assert!(feedback.to_string().contains("23"));
    assert!(round.won());
    assert_eq!(round.status(), RoundStatus::Won);
    assert_eq!(engine.score(), score_before + 1);
}

#[test]
fn beginner_round_runs_out_of_attempts() {
    let mut engine = scripted_engine(&[20]);
    let mut round = engine.start_round("beginner").unwrap();
    assert_eq!(round.attempts_remaining(), 15);

    for guess in 1..=15 {
        assert_eq!(engine.evaluate_guess(&mut round, guess), Feedback::TooLow);
    }
    assert_eq!(round.attempts_remaining(), 0);
    assert!(!round.won());
    assert_eq!(round.status(), RoundStatus::Exhausted);
    assert_eq!(engine.score(), 0);
}

#[test]
fn score_accumulates_across_rounds() {
    let mut engine = scripted_engine(&[3, 700, 9000]);

    let mut round = engine.start_round("medium").unwrap();
    engine.evaluate_guess(&mut round, 3);

    let mut round = engine.start_round("hard").unwrap();
    engine.evaluate_guess(&mut round, 1);
    engine.evaluate_guess(&mut round, 700);

    let mut round = engine.start_round("IMPOSSIBLE").unwrap();
    for guess in [1, 2, 3] {
        engine.evaluate_guess(&mut round, guess);
    }
    assert_eq!(round.status(), RoundStatus::Exhausted);

    assert_eq!(engine.score(), 2);
}

#[test]
fn engines_do_not_share_scores() {
    let mut first = scripted_engine(&[5]);
    let mut second = scripted_engine(&[5]);

    let mut round = first.start_round("beginner").unwrap();
    first.evaluate_guess(&mut round, 5);

    assert_eq!(first.score(), 1);
    assert_eq!(second.score(), 0);
    assert!(second.start_round("beginner").is_ok());
    assert_eq!(second.score(), 0);
}

#[test]
fn unknown_difficulty_is_an_error() {
    let mut engine = scripted_engine(&[1]);
    assert_eq!(
        engine.start_round("legendary").unwrap_err(),
        EngineError::UnknownDifficulty("legendary".to_string())
    );
    assert_eq!(
        engine.start_round("").unwrap_err().to_string(),
        "unknown difficulty ``"
    );
}

#[test]
fn custom_single_value_table() {
    let table = DifficultyTable::new([("certain", DifficultyProfile::new(1, 1))]).unwrap();
    let mut engine = RoundEngine::seeded(table, 42);
    let mut round = engine.start_round("certain").unwrap();
    assert_eq!(round.secret(), 1);
    assert_eq!(engine.evaluate_guess(&mut round, 2), Feedback::OutOfRange { number_range: 1 });
    assert_eq!(engine.evaluate_guess(&mut round, 1), Feedback::Correct { secret: 1 });
    assert_eq!(engine.score(), 1);
}

#[test]
fn seeded_engines_repeat_secrets() {
    let mut a = RoundEngine::seeded(DifficultyTable::standard(), 2024);
    let mut b = RoundEngine::seeded(DifficultyTable::standard(), 2024);
    for name in ["beginner", "easy", "medium", "hard", "IMPOSSIBLE"] {
        assert_eq!(
            a.start_round(name).unwrap().secret(),
            b.start_round(name).unwrap().secret()
        );
    }
}
