//! Round settings

use crate::core::{Difficulty, GameError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::str::FromStr;

/// Supported maximum number of attempts per round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttemptLimit {
    #[default]
    Six,
    Nine,
    Twelve,
}

impl AttemptLimit {
    /// All supported limits, shortest first
    pub const ALL: [Self; 3] = [Self::Six, Self::Nine, Self::Twelve];

    /// Number of attempts allowed
    #[must_use]
    pub const fn value(self) -> usize {
        match self {
            Self::Six => 6,
            Self::Nine => 9,
            Self::Twelve => 12,
        }
    }
}

impl TryFrom<usize> for AttemptLimit {
    type Error = GameError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|limit| limit.value() == value)
            .ok_or_else(|| {
                GameError::InvalidConfiguration(format!(
                    "unsupported attempt limit {value} (expected 6, 9 or 12)"
                ))
            })
    }
}

impl FromStr for AttemptLimit {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s.trim().parse().map_err(|_| {
            GameError::InvalidConfiguration(format!(
                "attempt limit '{}' is not a number",
                s.trim()
            ))
        })?;
        Self::try_from(value)
    }
}

impl fmt::Display for AttemptLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Configuration for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub max_attempts: AttemptLimit,
    /// Fixed RNG seed for reproducible secrets; entropy-seeded when `None`
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub const fn new(difficulty: Difficulty, max_attempts: AttemptLimit) -> Self {
        Self {
            difficulty,
            max_attempts,
            seed: None,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the random source for a round
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}
