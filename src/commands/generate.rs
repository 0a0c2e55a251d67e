//! Generate command
//!
//! Draws a batch of secrets for a tier.

use crate::core::Code;
use crate::game::{GameConfig, generate_secret_with};

/// Generate `count` secrets under the config's tier
///
/// All secrets come from one RNG stream, so a seeded config always yields the same batch.
#[must_use]
pub fn generate_secrets(config: GameConfig, count: usize) -> Vec<Code> {
    let mut rng = config.rng();
    (0..count)
        .map(|_| generate_secret_with(config.difficulty, &mut rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use crate::game::AttemptLimit;

    #[test]
    fn generates_requested_count() {
        let config = GameConfig::new(Difficulty::Medium, AttemptLimit::Six);
        let secrets = generate_secrets(config, 25);
        assert_eq!(secrets.len(), 25);
        assert!(
            secrets
                .iter()
                .all(|s| s.validate_for(Difficulty::Medium).is_ok())
        );
    }

    #[test]
    fn seeded_batches_repeat() {
        let config = GameConfig::new(Difficulty::Hard, AttemptLimit::Six).with_seed(21);
        assert_eq!(generate_secrets(config, 10), generate_secrets(config, 10));
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(generate_secrets(GameConfig::default(), 0).is_empty());
    }
}
