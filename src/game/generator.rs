//! Secret code generation

use crate::core::{CODE_LENGTH, Code, Difficulty, GameError, Symbol};
use rand::Rng;
use rand::seq::SliceRandom;

/// Generate a secret for the given tier using the thread-local RNG
#[must_use]
pub fn generate_secret(difficulty: Difficulty) -> Code {
    generate_secret_with(difficulty, &mut rand::rng())
}

/// Generate a secret for the given tier from a caller-supplied RNG
///
/// - Easy: 5 distinct symbols drawn without replacement from the first 6
/// - Medium: 5 independent uniform draws from the first 7
/// - Hard: 5 independent uniform draws from all 8
///
/// # Examples
/// ```
/// use mastermind::core::Difficulty;
/// use mastermind::game::generate_secret_with;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let secret = generate_secret_with(Difficulty::Easy, &mut rng);
///
/// assert!(!secret.has_repeats());
/// assert!(secret.validate_for(Difficulty::Easy).is_ok());
/// ```
pub fn generate_secret_with<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Code {
    let palette = difficulty.palette();

    let symbols: [Symbol; CODE_LENGTH] = if difficulty.allows_repeats() {
        std::array::from_fn(|_| palette[rng.random_range(0..palette.len())])
    } else {
        // Every tier palette holds at least CODE_LENGTH symbols
        let mut pool = palette.to_vec();
        let (chosen, _) = pool.partial_shuffle(rng, CODE_LENGTH);
        std::array::from_fn(|i| chosen[i])
    };

    let secret = Code::new(symbols);
    tracing::trace!(%difficulty, "generated secret");
    secret
}

/// Generate a secret for a tier given by name (see [`Difficulty`]'s `FromStr`)
///
/// # Errors
/// Returns `GameError::InvalidConfiguration` if the name does not denote a tier.
pub fn generate_secret_named(name: &str) -> Result<Code, GameError> {
    let difficulty: Difficulty = name.parse()?;
    Ok(generate_secret(difficulty))
}
