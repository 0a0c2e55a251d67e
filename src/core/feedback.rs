//! Guess feedback calculation and representation
//!
//! Feedback reports how many guess symbols are in the right position
//! (exact) and how many are present elsewhere in the secret (partial).
//! Positions are never revealed, only counts.
//!
//! The canonical text form puts one marker per match and sorts them:
//! - `O` = partial (right symbol, wrong position)
//! - `X` = exact (right symbol, right position)
//!
//! so two partials and two exacts render as `OOXX`.

use super::{CODE_LENGTH, Code, GameError, Symbol};
use std::fmt;

/// Marker character for an exact match
pub const EXACT_MARKER: char = 'X';

/// Marker character for a partial match
pub const PARTIAL_MARKER: char = 'O';

/// Feedback for one guess against one secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    exact: u8,
    partial: u8,
}

impl Feedback {
    /// All exact (the guess is the secret)
    pub const PERFECT: Self = Self {
        exact: CODE_LENGTH as u8,
        partial: 0,
    };

    /// Create feedback from raw counts
    ///
    /// # Panics
    /// Panics in debug mode if the counts exceed the code length
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        debug_assert!(
            (exact + partial) as usize <= CODE_LENGTH,
            "Feedback counts exceed code length"
        );
        Self { exact, partial }
    }

    /// Number of right symbols in the right position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of right symbols in the wrong position
    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// Check if this is a perfect match (all exact)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.exact as usize == CODE_LENGTH
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches; every other secret symbol goes into the unconsumed pool
    /// 2. Second pass: left to right over the non-exact guess positions, count a partial and
    ///    consume one occurrence from the pool when the symbol is still available
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback};
    ///
    /// let secret: Code = "RRGGB".parse().unwrap();
    /// let guess: Code = "GGRRB".parse().unwrap();
    /// let feedback = Feedback::calculate(&secret, &guess);
    ///
    /// assert_eq!(feedback.exact(), 1);
    /// assert_eq!(feedback.partial(), 4);
    /// assert_eq!(feedback.to_string(), "OOOOX");
    /// ```
    #[must_use]
    pub fn calculate(secret: &Code, guess: &Code) -> Self {
        tally(secret.symbols(), guess.symbols())
    }

    /// Render as the sorted marker string
    #[must_use]
    pub fn to_markers(self) -> String {
        let mut markers = String::with_capacity(CODE_LENGTH);
        for _ in 0..self.partial {
            markers.push(PARTIAL_MARKER);
        }
        for _ in 0..self.exact {
            markers.push(EXACT_MARKER);
        }
        markers
    }
}

/// Score a guess against a secret given as raw symbol sequences
///
/// # Errors
/// Returns `GameError::LengthMismatch` if either sequence is not exactly
/// [`CODE_LENGTH`] symbols long.
///
/// # Examples
/// ```
/// use mastermind::core::{Symbol, score};
/// use Symbol::*;
///
/// let feedback = score(&[Red, Green, Blue, Yellow, White], &[Green, Red, Blue, Grey, Grey]).unwrap();
/// assert_eq!((feedback.exact(), feedback.partial()), (1, 2));
///
/// assert!(score(&[Red; 5], &[Red; 4]).is_err());
/// ```
pub fn score(secret: &[Symbol], guess: &[Symbol]) -> Result<Feedback, GameError> {
    for sequence in [secret, guess] {
        if sequence.len() != CODE_LENGTH {
            return Err(GameError::LengthMismatch {
                expected: CODE_LENGTH,
                actual: sequence.len(),
            });
        }
    }

    Ok(tally(secret, guess))
}

/// Two-pass scoring over equal-length sequences
fn tally(secret: &[Symbol], guess: &[Symbol]) -> Feedback {
    let mut exact = 0u8;
    let mut secret_available = [0u8; Symbol::COUNT];

    // First pass: exact matches are consumed on both sides
    for (s, g) in secret.iter().zip(guess) {
        if s == g {
            exact += 1;
        } else {
            secret_available[s.index()] += 1;
        }
    }

    // Second pass: partials draw from what the exact pass left behind
    let mut partial = 0u8;
    for (s, g) in secret.iter().zip(guess) {
        if s != g {
            let count = &mut secret_available[g.index()];
            if *count > 0 {
                *count -= 1;
                partial += 1;
            }
        }
    }

    Feedback { exact, partial }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markers())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    /// Parse a marker string such as `OOX`
    ///
    /// Marker order does not matter. `-`, `.` and whitespace are read as blanks.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut exact = 0u8;
        let mut partial = 0u8;

        for ch in s.chars() {
            match ch.to_ascii_uppercase() {
                EXACT_MARKER => exact += 1,
                PARTIAL_MARKER => partial += 1,
                '-' | '.' => {}
                c if c.is_whitespace() => {}
                _ => return Err(format!("Invalid feedback marker '{ch}' in: {s}")),
            }
            if (exact + partial) as usize > CODE_LENGTH {
                return Err(format!("Too many feedback markers: {s}"));
            }
        }

        Ok(Self { exact, partial })
    }
}
