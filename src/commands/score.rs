//! Score command
//!
//! Scores one guess against one secret given as text.

use crate::core::{Code, Feedback, GameError};

/// Result of scoring a guess
pub struct ScoreResult {
    pub secret: Code,
    pub guess: Code,
    pub feedback: Feedback,
}

/// Parse both codes and score the guess against the secret
///
/// Scoring itself is palette-agnostic: any symbols of the full alphabet are accepted.
///
/// # Errors
///
/// Returns an error if either code contains an unknown symbol or is not 5 symbols long.
pub fn score_codes(secret: &str, guess: &str) -> Result<ScoreResult, GameError> {
    let secret: Code = secret.parse()?;
    let guess: Code = guess.parse()?;

    Ok(ScoreResult {
        feedback: Feedback::calculate(&secret, &guess),
        secret,
        guess,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_duplicate_heavy_codes() {
        let result = score_codes("RRGGB", "GGRRB").unwrap();
        assert_eq!(result.feedback, Feedback::new(1, 4));
        assert_eq!(result.feedback.to_string(), "OOOOX");
        assert_eq!(result.secret.to_string(), "RRGGB");
        assert_eq!(result.guess.to_string(), "GGRRB");
    }

    #[test]
    fn identical_codes_are_perfect() {
        let result = score_codes("xopwy", "XOPWY").unwrap();
        assert!(result.feedback.is_perfect());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            score_codes("RRGG", "RRGGB"),
            Err(GameError::LengthMismatch { actual: 4, .. })
        ));
        assert_eq!(
            score_codes("RRGGB", "RRGGQ").err(),
            Some(GameError::UnknownSymbol('Q'))
        );
    }
}
