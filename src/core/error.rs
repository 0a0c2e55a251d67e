//! Game error type

use super::{Difficulty, Symbol};
use std::fmt;

/// Errors raised by the game core
///
/// Every variant is recoverable: a rejected call leaves any round state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Unrecognized difficulty tier or unsupported attempt limit
    InvalidConfiguration(String),
    /// A guess or secret does not have the fixed code length
    LengthMismatch { expected: usize, actual: usize },
    /// A guess uses a symbol outside the active tier's palette
    InvalidSymbol {
        symbol: Symbol,
        position: usize,
        difficulty: Difficulty,
    },
    /// Text that does not name any symbol
    UnknownSymbol(char),
    /// The round has already been won or lost
    RoundOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(detail) => {
                write!(f, "Invalid configuration: {detail}")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Code must be exactly {expected} symbols, got {actual}")
            }
            Self::InvalidSymbol {
                symbol,
                position,
                difficulty,
            } => write!(
                f,
                "Symbol {} ({}) at position {} is not available on {difficulty} (use {})",
                symbol.letter(),
                symbol.name(),
                position + 1,
                difficulty.palette_letters()
            ),
            Self::UnknownSymbol(letter) => write!(f, "Unknown symbol '{letter}'"),
            Self::RoundOver => write!(f, "The round is over, start a new one"),
        }
    }
}

impl std::error::Error for GameError {}
