//! Worst-case partition size for a guess
//!
//! Given a guess and the remaining candidates, computes the largest group of
//! candidates that would all answer the guess with the same feedback.

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Examples
/// ```
/// use mastermind::core::Code;
/// use mastermind::solver::minimax::calculate_max_remaining;
///
/// let guess: Code = "RGBYW".parse().unwrap();
/// let candidates: Vec<Code> = ["RGBYP", "PRGBY"].iter().map(|c| c.parse().unwrap()).collect();
/// let candidate_refs: Vec<&Code> = candidates.iter().collect();
///
/// assert_eq!(calculate_max_remaining(&guess, &candidate_refs), 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[&Code]) -> usize {
    group_by_feedback(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Group candidates by the feedback they would give to the guess
#[must_use]
pub fn group_by_feedback(guess: &Code, candidates: &[&Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let feedback = Feedback::calculate(candidate, guess);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(texts: &[&str]) -> Vec<Code> {
        texts.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn max_remaining_all_same_feedback() {
        // None of the guess symbols appear in any candidate
        let guess: Code = "XXXXX".parse().unwrap();
        let candidates = codes(&["RRRRR", "GGGGG", "BBBBB"]);
        let refs: Vec<&Code> = candidates.iter().collect();

        assert_eq!(calculate_max_remaining(&guess, &refs), 3);
    }

    #[test]
    fn max_remaining_perfect_split() {
        let guess: Code = "RRRRR".parse().unwrap();
        let candidates = codes(&["RRRRR", "GGGGG"]);
        let refs: Vec<&Code> = candidates.iter().collect();

        assert_eq!(calculate_max_remaining(&guess, &refs), 1);
    }

    #[test]
    fn max_remaining_empty_candidates() {
        let guess: Code = "RGBYW".parse().unwrap();
        assert_eq!(calculate_max_remaining(&guess, &[]), 0);
    }

    #[test]
    fn groups_cover_every_candidate() {
        let guess: Code = "RRGGB".parse().unwrap();
        let candidates = codes(&["RRGGB", "GGRRB", "BBBBB", "RGRGR", "YYYYY"]);
        let refs: Vec<&Code> = candidates.iter().collect();

        let groups = group_by_feedback(&guess, &refs);
        assert_eq!(groups.values().sum::<usize>(), candidates.len());
        assert_eq!(groups.get(&Feedback::PERFECT), Some(&1));
        assert_eq!(groups.get(&Feedback::new(1, 4)), Some(&1));
        assert_eq!(groups.get(&Feedback::new(0, 0)), Some(&1));
    }
}
