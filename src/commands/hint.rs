//! Hint command
//!
//! Narrows the code space from a list of past guesses and the feedback they
//! received, then suggests the next guess.

use crate::core::{Code, Difficulty, Feedback};
use crate::game::GuessRecord;
use crate::solver::{Solver, Strategy};
use rand::Rng;

/// Number of remaining candidates listed in full
const SAMPLE_SIZE: usize = 10;

/// Result of analyzing a guess history
pub struct HintResult {
    pub difficulty: Difficulty,
    pub remaining: usize,
    pub sample: Vec<Code>,
    pub suggestion: Option<Code>,
}

/// Parse a history entry of the form `GUESS=MARKERS`, e.g. `RGBYW=OOX`
///
/// `:` is accepted in place of `=`; an empty marker part means no matches.
///
/// # Errors
///
/// Returns an error if the entry has no separator or either side fails to parse.
pub fn parse_entry(entry: &str) -> Result<GuessRecord, String> {
    let (guess, markers) = entry
        .split_once(['=', ':'])
        .ok_or_else(|| format!("Expected GUESS=FEEDBACK, got: {entry}"))?;

    let guess: Code = guess
        .parse()
        .map_err(|e| format!("Invalid guess in '{entry}': {e}"))?;
    let feedback: Feedback = markers.parse()?;

    Ok(GuessRecord { guess, feedback })
}

/// Analyze a history of `GUESS=MARKERS` entries against the solver's tier
///
/// # Errors
///
/// Returns an error if an entry is malformed or a guess uses a symbol
/// outside the solver's tier.
pub fn hint_from_history<S: Strategy, R: Rng>(
    solver: &Solver<S>,
    entries: &[String],
    rng: &mut R,
) -> Result<HintResult, String> {
    let difficulty = solver.difficulty();
    let history = entries
        .iter()
        .map(|entry| -> Result<GuessRecord, String> {
            let record = parse_entry(entry)?;
            record
                .guess
                .validate_for(difficulty)
                .map_err(|e| e.to_string())?;
            Ok(record)
        })
        .collect::<Result<Vec<_>, String>>()?;

    let candidates = solver.get_candidates(&history);
    let suggestion = solver.next_guess(&history, rng).copied();

    Ok(HintResult {
        difficulty,
        remaining: candidates.len(),
        sample: candidates.into_iter().take(SAMPLE_SIZE).copied().collect(),
        suggestion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{RandomStrategy, space_size};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_entry_forms() {
        let record = parse_entry("RGBYW=OOX").unwrap();
        assert_eq!(record.guess.to_string(), "RGBYW");
        assert_eq!(record.feedback, Feedback::new(1, 2));

        let record = parse_entry("rgbyw:").unwrap();
        assert_eq!(record.feedback, Feedback::new(0, 0));
    }

    #[test]
    fn parse_entry_errors() {
        assert!(parse_entry("RGBYW").is_err());
        assert!(parse_entry("RGB=X").is_err());
        assert!(parse_entry("RGBYW=XQ").is_err());
    }

    #[test]
    fn empty_history_reports_whole_space() {
        let solver = Solver::new(RandomStrategy, Difficulty::Easy);
        let mut rng = StdRng::seed_from_u64(0);

        let result = hint_from_history(&solver, &[], &mut rng).unwrap();
        assert_eq!(result.remaining, space_size(Difficulty::Easy));
        assert_eq!(result.sample.len(), SAMPLE_SIZE);
        assert!(result.suggestion.is_some());
    }

    #[test]
    fn history_narrows_to_secret() {
        let secret: Code = "BRPYG".parse().unwrap();
        let entries: Vec<String> = ["RGBYW", "GRBWP", "PBRGY"]
            .iter()
            .map(|g| {
                let guess: Code = g.parse().unwrap();
                format!("{guess}={}", Feedback::calculate(&secret, &guess))
            })
            .collect();

        let solver = Solver::new(RandomStrategy, Difficulty::Easy);
        let mut rng = StdRng::seed_from_u64(0);
        let result = hint_from_history(&solver, &entries, &mut rng).unwrap();

        assert!(result.remaining >= 1);
        assert!(result.remaining < space_size(Difficulty::Easy));
        if result.remaining <= SAMPLE_SIZE {
            assert!(result.sample.contains(&secret));
        }
    }

    #[test]
    fn guess_outside_tier_is_rejected() {
        let solver = Solver::new(RandomStrategy, Difficulty::Easy);
        let mut rng = StdRng::seed_from_u64(0);
        let entries = vec!["XXXXX=".to_string()];

        let err = hint_from_history(&solver, &entries, &mut rng).err().unwrap();
        assert!(err.contains("not available on easy"));
    }
}
