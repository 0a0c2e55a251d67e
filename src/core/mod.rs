//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear combinatorial properties.

mod code;
mod difficulty;
mod error;
mod feedback;
mod symbol;

pub use code::{CODE_LENGTH, Code};
pub use difficulty::Difficulty;
pub use error::GameError;
pub use feedback::{EXACT_MARKER, Feedback, PARTIAL_MARKER, score};
pub use symbol::Symbol;
