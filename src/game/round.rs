//! Round state and attempt policy
//!
//! A [`Round`] owns the secret, the attempt counter and the guess history.
//! Every mutation goes through an explicit transition: [`Round::submit`],
//! [`Round::restart`], [`Round::set_difficulty`] or [`Round::set_max_attempts`].

use super::config::{AttemptLimit, GameConfig};
use super::generator::generate_secret_with;
use crate::core::{Code, Difficulty, Feedback, GameError, Symbol};
use rand::rngs::StdRng;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One accepted guess and the feedback it received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Code,
    pub feedback: Feedback,
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    /// 1-based number of this attempt
    pub attempt: usize,
    pub feedback: Feedback,
    pub status: RoundStatus,
}

/// A single round: one secret and the guesses made against it
pub struct Round {
    config: GameConfig,
    rng: StdRng,
    secret: Code,
    attempts: usize,
    history: Vec<GuessRecord>,
    status: RoundStatus,
}

impl Round {
    /// Start a round with a freshly generated secret
    ///
    /// # Examples
    /// ```
    /// use mastermind::game::{GameConfig, Round, RoundStatus};
    ///
    /// let round = Round::new(GameConfig::default());
    /// assert_eq!(round.attempts(), 0);
    /// assert_eq!(round.status(), RoundStatus::InProgress);
    /// assert!(round.revealed_secret().is_none());
    /// ```
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut rng = config.rng();
        let secret = generate_secret_with(config.difficulty, &mut rng);
        tracing::debug!(
            difficulty = %config.difficulty,
            max_attempts = config.max_attempts.value(),
            "round started"
        );

        Self {
            config,
            rng,
            secret,
            attempts: 0,
            history: Vec::new(),
            status: RoundStatus::InProgress,
        }
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.config.max_attempts.value()
    }

    /// Number of accepted guesses so far
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[must_use]
    pub const fn remaining_attempts(&self) -> usize {
        self.max_attempts().saturating_sub(self.attempts)
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// The secret, once the round has been won or lost
    #[must_use]
    pub const fn revealed_secret(&self) -> Option<&Code> {
        if self.status.is_over() {
            Some(&self.secret)
        } else {
            None
        }
    }

    #[cfg(test)]
    pub(crate) const fn secret(&self) -> &Code {
        &self.secret
    }

    /// Validate and score a guess, advancing the attempt counter
    ///
    /// # Errors
    /// - `GameError::RoundOver` if the round was already won or lost
    /// - `GameError::LengthMismatch` if the guess is not 5 symbols
    /// - `GameError::InvalidSymbol` if a symbol is outside the tier's palette
    ///
    /// A rejected guess leaves the round unchanged.
    pub fn submit(&mut self, guess: &[Symbol]) -> Result<GuessOutcome, GameError> {
        if self.status.is_over() {
            return Err(GameError::RoundOver);
        }

        let guess = Code::try_from(guess)
            .and_then(|code| code.validate_for(self.config.difficulty).map(|()| code))
            .inspect_err(|err| tracing::debug!(%err, "guess rejected"))?;

        self.attempts += 1;
        let feedback = Feedback::calculate(&self.secret, &guess);
        self.history.push(GuessRecord { guess, feedback });

        self.status = if feedback.is_perfect() {
            RoundStatus::Won
        } else if self.attempts >= self.max_attempts() {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        };

        tracing::debug!(
            attempt = self.attempts,
            exact = feedback.exact(),
            partial = feedback.partial(),
            status = ?self.status,
            "guess scored"
        );

        Ok(GuessOutcome {
            attempt: self.attempts,
            feedback,
            status: self.status,
        })
    }

    /// Begin a new round with the current settings
    pub fn restart(&mut self) {
        self.secret = generate_secret_with(self.config.difficulty, &mut self.rng);
        self.attempts = 0;
        self.history.clear();
        self.status = RoundStatus::InProgress;
        tracing::debug!(
            difficulty = %self.config.difficulty,
            max_attempts = self.max_attempts(),
            "round reset"
        );
    }

    /// Switch tier; always resets the round
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
        self.restart();
    }

    /// Switch attempt limit; always resets the round
    pub fn set_max_attempts(&mut self, max_attempts: AttemptLimit) {
        self.config.max_attempts = max_attempts;
        self.restart();
    }
}
