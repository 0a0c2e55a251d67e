//! Simulation command
//!
//! Plays many complete rounds with the solver against random secrets and
//! reports how often and how quickly it wins.

use crate::game::{GameConfig, Round, RoundStatus};
use crate::solver::{Solver, Strategy};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub game: GameConfig,
    pub rounds: usize,
    pub show_progress: bool,
}

/// Outcome of one simulated round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub won: bool,
    pub attempts: usize,
}

/// Result of a simulation run
pub struct SimulationResult {
    pub total_rounds: usize,
    pub won: usize,
    pub lost: usize,
    /// Average attempts over won rounds
    pub average_attempts: f64,
    pub min_attempts: usize,
    pub max_attempts: usize,
    /// Won rounds keyed by attempts used
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Play one round to completion with the solver
///
/// The solver's tier must match `config.difficulty`.
pub fn simulate_round<S: Strategy>(solver: &Solver<S>, config: GameConfig) -> RoundSummary {
    let mut round = Round::new(config);
    let mut picker = match config.seed {
        Some(seed) => StdRng::seed_from_u64(!seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    while !round.is_over() {
        let Some(&guess) = solver.next_guess(round.history(), &mut picker) else {
            break;
        };
        if round.submit(guess.symbols()).is_err() {
            break;
        }
    }

    RoundSummary {
        won: round.status() == RoundStatus::Won,
        attempts: round.attempts(),
    }
}

/// Run the simulation across the rayon pool
///
/// With a seeded config, round `i` uses seed `seed + i`, so results are reproducible.
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid.
pub fn run_simulation<S: Strategy + Sync>(
    solver: &Solver<S>,
    config: &SimulationConfig,
) -> Result<SimulationResult> {
    let pb = if config.show_progress {
        ProgressBar::new(config.rounds as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("{} rounds", config.game.difficulty));

    let start = Instant::now();

    let summaries: Vec<RoundSummary> = (0..config.rounds)
        .into_par_iter()
        .map(|i| {
            let game = match config.game.seed {
                Some(seed) => config.game.with_seed(seed.wrapping_add(i as u64)),
                None => config.game,
            };
            let summary = simulate_round(solver, game);
            pb.inc(1);
            summary
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    Ok(summarize(&summaries, duration))
}

fn summarize(summaries: &[RoundSummary], duration: Duration) -> SimulationResult {
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut total_attempts = 0;
    let mut min_attempts = usize::MAX;
    let mut max_attempts = 0;

    for summary in summaries.iter().filter(|s| s.won) {
        total_attempts += summary.attempts;
        min_attempts = min_attempts.min(summary.attempts);
        max_attempts = max_attempts.max(summary.attempts);
        *distribution.entry(summary.attempts).or_insert(0) += 1;
    }

    let won = summaries.iter().filter(|s| s.won).count();
    let total_rounds = summaries.len();

    SimulationResult {
        total_rounds,
        won,
        lost: total_rounds - won,
        average_attempts: if won > 0 {
            total_attempts as f64 / won as f64
        } else {
            0.0
        },
        min_attempts: if won > 0 { min_attempts } else { 0 },
        max_attempts,
        distribution,
        duration,
        rounds_per_second: total_rounds as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use crate::game::AttemptLimit;
    use crate::solver::{HybridStrategy, MinimaxStrategy, RandomStrategy};

    fn quiet(game: GameConfig, rounds: usize) -> SimulationConfig {
        SimulationConfig {
            game,
            rounds,
            show_progress: false,
        }
    }

    #[test]
    fn simulated_round_respects_attempt_limit() {
        let solver = Solver::new(RandomStrategy, Difficulty::Hard);
        let game = GameConfig::new(Difficulty::Hard, AttemptLimit::Six).with_seed(1);

        let summary = simulate_round(&solver, game);
        assert!(summary.attempts >= 1);
        assert!(summary.attempts <= 6);
    }

    #[test]
    fn simulation_counts_add_up() {
        let solver = Solver::new(HybridStrategy::default(), Difficulty::Easy);
        let game = GameConfig::new(Difficulty::Easy, AttemptLimit::Twelve).with_seed(2);

        let result = run_simulation(&solver, &quiet(game, 20)).unwrap();
        assert_eq!(result.total_rounds, 20);
        assert_eq!(result.won + result.lost, 20);
        assert_eq!(result.distribution.values().sum::<usize>(), result.won);
        for &attempts in result.distribution.keys() {
            assert!((1..=12).contains(&attempts));
        }
    }

    #[test]
    fn minimax_wins_easy_with_twelve_attempts() {
        let solver = Solver::new(MinimaxStrategy, Difficulty::Easy);
        let game = GameConfig::new(Difficulty::Easy, AttemptLimit::Twelve).with_seed(3);

        let result = run_simulation(&solver, &quiet(game, 10)).unwrap();
        assert_eq!(result.won, 10);
        assert!(result.average_attempts >= 1.0);
        assert!(result.min_attempts <= result.max_attempts);
    }

    #[test]
    fn seeded_simulation_is_reproducible() {
        let solver = Solver::new(RandomStrategy, Difficulty::Medium);
        let game = GameConfig::new(Difficulty::Medium, AttemptLimit::Nine).with_seed(4);

        let a = run_simulation(&solver, &quiet(game, 8)).unwrap();
        let b = run_simulation(&solver, &quiet(game, 8)).unwrap();
        assert_eq!(a.won, b.won);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn empty_simulation() {
        let solver = Solver::new(RandomStrategy, Difficulty::Easy);
        let result = run_simulation(&solver, &quiet(GameConfig::default(), 0)).unwrap();

        assert_eq!(result.total_rounds, 0);
        assert_eq!(result.won, 0);
        assert_eq!(result.min_attempts, 0);
        assert!(result.distribution.is_empty());
    }
}
