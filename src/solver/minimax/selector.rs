//! Minimax-based guess selection

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Returns the code with the lowest maximum remaining candidates and that value,
/// or `None` if the guess pool is empty. Ties go to the earliest code in the pool.
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &[&'a Code],
    candidates: &[&Code],
) -> Option<(&'a Code, usize)> {
    guess_pool
        .par_iter()
        .map(|&guess| (guess, calculate_max_remaining(guess, candidates)))
        .min_by_key(|(_, max)| *max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(texts: &[&str]) -> Vec<Code> {
        texts.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn selects_lowest_max_remaining() {
        let guesses = codes(&["XXXXX", "RGBYW"]);
        let candidates = codes(&["RGBYW", "GRBYW", "WYBGR", "PPPPP"]);

        let guess_refs: Vec<&Code> = guesses.iter().collect();
        let candidate_refs: Vec<&Code> = candidates.iter().collect();

        let (best, max_remaining) = select_best_guess(&guess_refs, &candidate_refs).unwrap();
        assert_eq!(best.to_string(), "RGBYW");
        assert!(max_remaining < 4);
    }

    #[test]
    fn ties_resolved_to_first() {
        let guesses = codes(&["RRRRR", "GGGGG"]);
        let candidates = codes(&["BBBBB"]);

        let guess_refs: Vec<&Code> = guesses.iter().collect();
        let candidate_refs: Vec<&Code> = candidates.iter().collect();

        let (best, max) = select_best_guess(&guess_refs, &candidate_refs).unwrap();
        assert_eq!(best.to_string(), "RRRRR");
        assert_eq!(max, 1);
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let candidates = codes(&["RGBYW"]);
        let candidate_refs: Vec<&Code> = candidates.iter().collect();

        assert!(select_best_guess(&[], &candidate_refs).is_none());
    }
}
