//! Game flow: secret generation and the round/attempt policy

pub mod config;
pub mod generator;
pub mod round;

pub use config::{AttemptLimit, GameConfig};
pub use generator::{generate_secret, generate_secret_named, generate_secret_with};
pub use round::{GuessOutcome, GuessRecord, Round, RoundStatus};
