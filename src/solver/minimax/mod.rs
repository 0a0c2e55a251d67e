//! Minimax guess evaluation
//!
//! Implements worst-case minimization over feedback partitions.

mod calculator;
mod selector;

pub use calculator::{calculate_max_remaining, group_by_feedback};
pub use selector::select_best_guess;
