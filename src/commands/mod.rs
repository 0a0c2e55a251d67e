//! Command implementations

pub mod generate;
pub mod hint;
pub mod play;
pub mod score;
pub mod simulate;
pub mod stats;

pub use generate::generate_secrets;
pub use hint::{HintResult, hint_from_history, parse_entry};
pub use play::{PlayCommand, PlaySummary, parse_command, run_play};
pub use score::{ScoreResult, score_codes};
pub use simulate::{RoundSummary, SimulationConfig, SimulationResult, run_simulation, simulate_round};
pub use stats::{GeneratorStats, run_stats};
