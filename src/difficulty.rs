//! # Difficulty Profiles
//!
//! A difficulty fixes two things for a round: how many in-range guesses the
//! player gets and how wide the secret's range is. The engine receives a
//! [`DifficultyTable`] when it is built, so tests and alternative front ends
//! can swap in their own profiles.
//!
//! ## Standard Table
//! | name         | attempts | range       |
//! |--------------|---------:|-------------|
//! | `beginner`   | 15       | 1..=20      |
//! | `easy`       | 10       | 1..=50      |
//! | `medium`     | 7        | 1..=100     |
//! | `hard`       | 5        | 1..=1000    |
//! | `IMPOSSIBLE` | 3        | 1..=10000   |

use crate::error::EngineError;

/// Name the presentation layer selects by default.
pub const DEFAULT_DIFFICULTY: &str = "easy";

/// Attempt budget and secret range for one difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyProfile {
    /// Number of in-range guesses allowed per round
    pub max_attempts: u32,
    /// Upper bound of the secret, inclusive; the lower bound is always 1
    pub number_range: u32,
}

impl DifficultyProfile {
    pub const fn new(max_attempts: u32, number_range: u32) -> Self {
        Self {
            max_attempts,
            number_range,
        }
    }
}

/// Ordered, immutable mapping from difficulty name to profile
///
/// Order is preserved so a selector can present the entries the way they were
/// declared. Names are matched exactly, including case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyTable {
    entries: Vec<(String, DifficultyProfile)>,
}

impl DifficultyTable {
    /// Builds a table from `(name, profile)` pairs
    ///
    /// # Errors
    /// Rejects an empty list, repeated names, and profiles with zero attempts
    /// or a zero range.
    pub fn new<I, N>(entries: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = (N, DifficultyProfile)>,
        N: Into<String>,
    {
        let mut table: Vec<(String, DifficultyProfile)> = Vec::new();
        for (name, profile) in entries {
            let name = name.into();
            if profile.max_attempts == 0 || profile.number_range == 0 {
                return Err(EngineError::InvalidProfile {
                    name,
                    max_attempts: profile.max_attempts,
                    number_range: profile.number_range,
                });
            }
            if table.iter().any(|(existing, _)| *existing == name) {
                return Err(EngineError::DuplicateDifficulty(name));
            }
            table.push((name, profile));
        }
        if table.is_empty() {
            return Err(EngineError::EmptyTable);
        }
        Ok(Self { entries: table })
    }

    /// The five difficulties the game ships with
    pub fn standard() -> Self {
        let entries = [
            ("beginner", DifficultyProfile::new(15, 20)),
            ("easy", DifficultyProfile::new(10, 50)),
            ("medium", DifficultyProfile::new(7, 100)),
            ("hard", DifficultyProfile::new(5, 1000)),
            ("IMPOSSIBLE", DifficultyProfile::new(3, 10000)),
        ];
        Self {
            entries: entries
                .into_iter()
                .map(|(name, profile)| (name.to_string(), profile))
                .collect(),
        }
    }

    /// Looks up a profile by exact name
    ///
    /// # Errors
    /// Returns [`EngineError::UnknownDifficulty`] when the name is not in the table.
    pub fn get(&self, name: &str) -> Result<DifficultyProfile, EngineError> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, profile)| *profile)
            .ok_or_else(|| EngineError::UnknownDifficulty(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(entry, _)| entry == name)
    }

    /// Difficulty names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, DifficultyProfile)> + '_ {
        self.entries.iter().map(|(name, profile)| (name.as_str(), *profile))
    }

    /// Position of `name` in declaration order, if present
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(entry, _)| entry == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self::standard()
    }
}
