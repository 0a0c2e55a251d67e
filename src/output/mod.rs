//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_hint_result, print_score_result, print_secrets, print_simulation_result,
    print_stats_result,
};
