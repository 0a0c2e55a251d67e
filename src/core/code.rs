//! Fixed-length symbol sequences
//!
//! Both secrets and guesses are a [`Code`] of exactly [`CODE_LENGTH`] symbols.

use super::{Difficulty, GameError, Symbol};
use std::fmt;
use std::str::FromStr;

/// Number of symbols in every secret and guess
pub const CODE_LENGTH: usize = 5;

/// An ordered sequence of [`CODE_LENGTH`] symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Symbol; CODE_LENGTH]);

impl Code {
    /// Create a code from an array of symbols
    #[inline]
    #[must_use]
    pub const fn new(symbols: [Symbol; CODE_LENGTH]) -> Self {
        Self(symbols)
    }

    /// Get the symbols in order
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[Symbol; CODE_LENGTH] {
        &self.0
    }

    /// Get the symbol at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn symbol_at(&self, position: usize) -> Symbol {
        self.0[position]
    }

    /// Check whether any symbol appears more than once
    #[must_use]
    pub fn has_repeats(&self) -> bool {
        let mut seen = [false; Symbol::COUNT];
        for symbol in self.0 {
            if seen[symbol.index()] {
                return true;
            }
            seen[symbol.index()] = true;
        }
        false
    }

    /// Check that every symbol is available on the given tier
    ///
    /// # Errors
    /// Returns `GameError::InvalidSymbol` for the first symbol outside the palette.
    pub fn validate_for(&self, difficulty: Difficulty) -> Result<(), GameError> {
        match self
            .0
            .iter()
            .enumerate()
            .find(|(_, symbol)| !difficulty.permits(**symbol))
        {
            Some((position, &symbol)) => Err(GameError::InvalidSymbol {
                symbol,
                position,
                difficulty,
            }),
            None => Ok(()),
        }
    }
}

impl TryFrom<&[Symbol]> for Code {
    type Error = GameError;

    fn try_from(symbols: &[Symbol]) -> Result<Self, Self::Error> {
        let array: [Symbol; CODE_LENGTH] =
            symbols.try_into().map_err(|_| GameError::LengthMismatch {
                expected: CODE_LENGTH,
                actual: symbols.len(),
            })?;
        Ok(Self(array))
    }
}

impl FromStr for Code {
    type Err = GameError;

    /// Parse letters such as `RGBYW`, `r g b y w` or `R,G,B,Y,W`
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Symbol};
    ///
    /// let code: Code = "rgbyw".parse().unwrap();
    /// assert_eq!(code.symbol_at(0), Symbol::Red);
    /// assert_eq!(code.to_string(), "RGBYW");
    ///
    /// assert!("RGB".parse::<Code>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(Symbol::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Self::try_from(symbols.as_slice())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
