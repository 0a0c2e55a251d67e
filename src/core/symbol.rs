//! Code peg symbols
//!
//! The game alphabet is a fixed, ordered set of 8 colors. Difficulty tiers
//! draw from ordered prefixes of [`Symbol::ALL`].

use super::GameError;
use std::fmt;
use std::str::FromStr;

/// One colored peg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Red,
    Green,
    Blue,
    Yellow,
    White,
    Purple,
    Orange,
    Grey,
}

impl Symbol {
    /// The full alphabet in tier order
    pub const ALL: [Self; 8] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::White,
        Self::Purple,
        Self::Orange,
        Self::Grey,
    ];

    /// Number of symbols in the alphabet
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this symbol in [`Symbol::ALL`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter code used for text input and output
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::White => 'W',
            Self::Purple => 'P',
            Self::Orange => 'O',
            Self::Grey => 'X',
        }
    }

    /// Human-readable color name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::White => "white",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Grey => "grey",
        }
    }

    /// Look up a symbol by its letter (case-insensitive)
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'R' => Some(Self::Red),
            'G' => Some(Self::Green),
            'B' => Some(Self::Blue),
            'Y' => Some(Self::Yellow),
            'W' => Some(Self::White),
            'P' => Some(Self::Purple),
            'O' => Some(Self::Orange),
            'X' => Some(Self::Grey),
            _ => None,
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = GameError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Self::from_letter(letter).ok_or(GameError::UnknownSymbol(letter))
    }
}

impl FromStr for Symbol {
    type Err = GameError;

    /// Accepts a single letter (`r`) or a color name (`red`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            return Self::try_from(letter);
        }

        Self::ALL
            .into_iter()
            .find(|symbol| symbol.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| GameError::UnknownSymbol(trimmed.chars().next().unwrap_or(' ')))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_ordered_by_index() {
        for (i, symbol) in Symbol::ALL.iter().enumerate() {
            assert_eq!(symbol.index(), i);
        }
        assert_eq!(Symbol::COUNT, 8);
    }

    #[test]
    fn letters_round_trip() {
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_letter(symbol.letter()), Some(symbol));
        }
    }

    #[test]
    fn letters_are_case_insensitive() {
        assert_eq!(Symbol::from_letter('r'), Some(Symbol::Red));
        assert_eq!(Symbol::from_letter('x'), Some(Symbol::Grey));
    }

    #[test]
    fn unknown_letter_is_rejected() {
        assert_eq!(Symbol::try_from('Z'), Err(GameError::UnknownSymbol('Z')));
        assert!(Symbol::from_letter('1').is_none());
    }

    #[test]
    fn parse_by_name() {
        assert_eq!("purple".parse::<Symbol>(), Ok(Symbol::Purple));
        assert_eq!("ORANGE".parse::<Symbol>(), Ok(Symbol::Orange));
        assert_eq!(" b ".parse::<Symbol>(), Ok(Symbol::Blue));
        assert!("magenta".parse::<Symbol>().is_err());
    }

    #[test]
    fn display_uses_letter() {
        assert_eq!(Symbol::Grey.to_string(), "X");
        assert_eq!(Symbol::Yellow.to_string(), "Y");
    }
}
