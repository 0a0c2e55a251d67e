//! Difficulty tiers
//!
//! A tier fixes the palette a secret is drawn from (an ordered prefix of the
//! alphabet) and whether symbols may repeat.

use super::{GameError, Symbol};
use std::fmt;
use std::str::FromStr;

/// Difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// 6 colors, no repeats
    #[default]
    Easy,
    /// 7 colors, repeats allowed
    Medium,
    /// 8 colors, repeats allowed
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Number of alphabet symbols available on this tier
    #[must_use]
    pub const fn palette_size(self) -> usize {
        match self {
            Self::Easy => 6,
            Self::Medium => 7,
            Self::Hard => 8,
        }
    }

    /// Symbols available on this tier
    #[must_use]
    pub fn palette(self) -> &'static [Symbol] {
        &Symbol::ALL[..self.palette_size()]
    }

    /// Whether secrets on this tier may contain the same symbol twice
    #[must_use]
    pub const fn allows_repeats(self) -> bool {
        !matches!(self, Self::Easy)
    }

    /// Check if a symbol belongs to this tier's palette
    #[inline]
    #[must_use]
    pub const fn permits(self, symbol: Symbol) -> bool {
        symbol.index() < self.palette_size()
    }

    /// Palette as a letter string, e.g. `RGBYWP`
    #[must_use]
    pub fn palette_letters(self) -> String {
        self.palette().iter().map(|s| s.letter()).collect()
    }

    /// Lowercase tier name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    /// Accepts English names, the Spanish level names and level numbers 1-3
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "fácil" | "facil" | "1" => Ok(Self::Easy),
            "medium" | "medio" | "2" => Ok(Self::Medium),
            "hard" | "difícil" | "dificil" | "3" => Ok(Self::Hard),
            other => Err(GameError::InvalidConfiguration(format!(
                "unknown difficulty '{other}' (expected easy, medium or hard)"
            ))),
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = GameError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Self::Easy),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Hard),
            _ => Err(GameError::InvalidConfiguration(format!(
                "unknown difficulty level {level} (expected 1-3)"
            ))),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
