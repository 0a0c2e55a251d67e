//! Mastermind solving algorithms
//!
//! Candidate filtering over the full code space of a tier, with pluggable
//! guess selection strategies.

mod engine;
pub mod minimax;
pub mod space;
pub mod strategy;

pub use engine::Solver;
pub use space::{candidate_space, space_size};
pub use strategy::{HybridStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyType};
