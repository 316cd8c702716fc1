//! # Engine Errors
//!
//! Failures the round engine can report. None of these are meant for the
//! player: an unknown difficulty means the caller offered a name that is not
//! in the table, and the profile errors only come from building a custom
//! table. A guess outside the valid range is not an error at all; it is an
//! ordinary [`Feedback`](crate::Feedback) value.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The requested difficulty is not present in the engine's table.
    #[error("unknown difficulty `{0}`")]
    UnknownDifficulty(String),
    /// A profile with zero attempts or an empty number range.
    #[error("difficulty `{name}` needs at least one attempt and a range of at least 1 (got {max_attempts} attempts, range {number_range})")]
    InvalidProfile {
        name: String,
        max_attempts: u32,
        number_range: u32,
    },
    #[error("difficulty `{0}` is defined more than once")]
    DuplicateDifficulty(String),
    #[error("a difficulty table needs at least one entry")]
    EmptyTable,
}
