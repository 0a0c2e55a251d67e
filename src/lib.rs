//! Mastermind
//!
//! Rule core for a five-symbol Mastermind variant with three difficulty tiers,
//! plus a candidate-elimination solver and a terminal front end.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Feedback};
//!
//! let secret: Code = "RGBYW".parse().unwrap();
//! let guess: Code = "RBGPW".parse().unwrap();
//!
//! let feedback = Feedback::calculate(&secret, &guess);
//! assert_eq!(feedback.to_markers(), "OOXX");
//! ```

// Core domain types and scoring
pub mod core;

// Rounds, configuration and secret generation
pub mod game;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
