//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::Code;
use rand::Rng;
use rand::seq::IndexedRandom;

/// A strategy for selecting the next guess from the consistent candidates
pub trait Strategy {
    /// Select a guess from the candidates still consistent with the history
    ///
    /// Returns `None` if no candidates remain.
    fn select_guess<'a, R: Rng>(&self, candidates: &[&'a Code], rng: &mut R) -> Option<&'a Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Random early, minimax once the space is small (default)
    Hybrid(HybridStrategy),
    /// Pure minimax optimization
    Minimax(MinimaxStrategy),
    /// Random selection from candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a, R: Rng>(&self, candidates: &[&'a Code], rng: &mut R) -> Option<&'a Code> {
        match self {
            Self::Hybrid(s) => s.select_guess(candidates, rng),
            Self::Minimax(s) => s.select_guess(candidates, rng),
            Self::Random(s) => s.select_guess(candidates, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "hybrid", "minimax", "random".
    /// Defaults to hybrid if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "minimax" => Self::Minimax(MinimaxStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Hybrid(HybridStrategy::default()),
        }
    }
}

/// Random strategy
///
/// Picks uniformly among the consistent candidates, so every guess could still win.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a, R: Rng>(&self, candidates: &[&'a Code], rng: &mut R) -> Option<&'a Code> {
        candidates.choose(rng).copied()
    }
}

/// Pure minimax strategy
///
/// Selects the candidate that minimizes the worst-case number of remaining candidates.
/// Quadratic in the candidate count.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a, R: Rng>(&self, candidates: &[&'a Code], _rng: &mut R) -> Option<&'a Code> {
        super::minimax::select_best_guess(candidates, candidates).map(|(best, _)| best)
    }
}

/// Hybrid strategy combining random and minimax selection
///
/// Guesses randomly while the space is large, switches to minimax near the end.
pub struct HybridStrategy {
    /// Switch to minimax when candidates <= this threshold
    pub minimax_threshold: usize,
}

impl HybridStrategy {
    /// Create a new hybrid strategy
    ///
    /// # Parameters
    /// - `minimax_threshold`: Switch to minimax when candidates <= this value (default: 1000)
    #[must_use]
    pub const fn new(minimax_threshold: usize) -> Self {
        Self { minimax_threshold }
    }
}

impl Default for HybridStrategy {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Strategy for HybridStrategy {
    fn select_guess<'a, R: Rng>(&self, candidates: &[&'a Code], rng: &mut R) -> Option<&'a Code> {
        if candidates.len() <= self.minimax_threshold {
            MinimaxStrategy.select_guess(candidates, rng)
        } else {
            RandomStrategy.select_guess(candidates, rng)
        }
    }
}
