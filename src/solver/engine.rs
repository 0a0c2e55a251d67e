//! Main Mastermind solver interface

use super::space::candidate_space;
use super::strategy::Strategy;
use crate::core::{Code, Difficulty, Feedback};
use crate::game::GuessRecord;
use rand::Rng;
use rayon::prelude::*;

/// Main Mastermind solver
///
/// Holds every code admissible on a tier and narrows it down against a
/// guess history, delegating the choice of next guess to a strategy.
pub struct Solver<S: Strategy> {
    strategy: S,
    difficulty: Difficulty,
    space: Vec<Code>,
}

impl<S: Strategy> Solver<S> {
    /// Create a new solver for a tier
    #[must_use]
    pub fn new(strategy: S, difficulty: Difficulty) -> Self {
        Self {
            strategy,
            difficulty,
            space: candidate_space(difficulty),
        }
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Get the next guess given previous guesses and their feedback
    ///
    /// Returns a code still consistent with the history, or `None` if no
    /// candidates remain (the history is contradictory).
    pub fn next_guess<R: Rng>(&self, history: &[GuessRecord], rng: &mut R) -> Option<&Code> {
        let candidates = self.filter_candidates(history);

        // If only one candidate remains, just guess it
        if candidates.len() == 1 {
            return Some(candidates[0]);
        }

        self.strategy.select_guess(&candidates, rng)
    }

    /// Filter the code space to those consistent with the guess history
    ///
    /// A code is consistent when, taken as the secret, it reproduces every
    /// recorded feedback.
    fn filter_candidates(&self, history: &[GuessRecord]) -> Vec<&Code> {
        self.space
            .par_iter()
            .filter(|&candidate| is_consistent(candidate, history))
            .collect()
    }

    /// Count how many candidates remain given the history
    #[must_use]
    pub fn count_candidates(&self, history: &[GuessRecord]) -> usize {
        self.space
            .par_iter()
            .filter(|&candidate| is_consistent(candidate, history))
            .count()
    }

    /// Get the current candidates (public accessor)
    #[must_use]
    pub fn get_candidates(&self, history: &[GuessRecord]) -> Vec<&Code> {
        self.filter_candidates(history)
    }
}

fn is_consistent(candidate: &Code, history: &[GuessRecord]) -> bool {
    history
        .iter()
        .all(|record| Feedback::calculate(candidate, &record.guess) == record.feedback)
}
