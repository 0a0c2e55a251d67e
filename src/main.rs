//! Mastermind - CLI
//!
//! Play Mastermind in the terminal, score codes, and benchmark the solver.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{
        SimulationConfig, generate_secrets, hint_from_history, run_play, run_simulation,
        run_stats, score_codes,
    },
    core::Difficulty,
    game::{AttemptLimit, GameConfig},
    output::{
        print_hint_result, print_score_result, print_secrets, print_simulation_result,
        print_stats_result,
    },
    solver::{Solver, StrategyType},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind with three difficulty tiers and a minimax solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty tier: easy (default), medium, hard, or 1-3
    #[arg(short, long, global = true, default_value = "easy")]
    difficulty: String,

    /// Maximum attempts per round: 6 (default), 9 or 12
    #[arg(short, long, global = true, default_value = "6")]
    attempts: String,

    /// Seed for reproducible secrets
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Solver strategy for hints and simulation: hybrid (default), minimax, random
    #[arg(short, long, global = true, default_value = "hybrid")]
    strategy: String,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play,

    /// Score a guess against a secret
    Score {
        /// The secret code, e.g. RGBYW
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Generate random secrets for the tier
    Generate {
        /// Number of secrets to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Suggest a next guess from a history of GUESS=FEEDBACK entries
    Hint {
        /// Past guesses with their feedback, e.g. RGBYW=OOX
        entries: Vec<String>,
    },

    /// Let the solver play many rounds and report its performance
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Check the secret generator's symbol distribution
    Stats {
        /// Number of secrets to sample
        #[arg(short = 'n', long, default_value = "10000")]
        count: usize,
    },
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let difficulty: Difficulty = self.difficulty.parse()?;
        let max_attempts: AttemptLimit = self.attempts.parse()?;
        let config = GameConfig::new(difficulty, max_attempts);
        Ok(match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = cli.game_config()?;
    tracing::debug!(
        difficulty = %config.difficulty,
        max_attempts = %config.max_attempts,
        seed = ?config.seed,
        "configuration loaded"
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config),
        Commands::Score { secret, guess } => run_score_command(&secret, &guess),
        Commands::Generate { count } => {
            print_secrets(&generate_secrets(config, count));
            Ok(())
        }
        Commands::Hint { entries } => run_hint_command(&cli.strategy, config, &entries),
        Commands::Simulate { count } => run_simulate_command(&cli.strategy, config, count),
        Commands::Stats { count } => {
            println!("Sampling {count} secrets on {}...", config.difficulty);
            let stats = run_stats(config, count, true)?;
            print_stats_result(&stats);
            Ok(())
        }
    }
}

fn run_play_command(config: GameConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_play(config, stdin.lock(), &mut stdout)?;
    Ok(())
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_codes(secret, guess)?;
    print_score_result(&result);
    Ok(())
}

fn run_hint_command(strategy_name: &str, config: GameConfig, entries: &[String]) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name);
    let solver = Solver::new(strategy, config.difficulty);
    let mut rng = config.rng();

    let result = hint_from_history(&solver, entries, &mut rng).map_err(|e| anyhow!(e))?;
    print_hint_result(&result);
    Ok(())
}

fn run_simulate_command(strategy_name: &str, config: GameConfig, count: usize) -> Result<()> {
    println!(
        "Simulating {count} rounds on {} with {} attempts ({strategy_name})...",
        config.difficulty, config.max_attempts
    );

    let strategy = StrategyType::from_name(strategy_name);
    let solver = Solver::new(strategy, config.difficulty);
    let simulation = SimulationConfig {
        game: config,
        rounds: count,
        show_progress: true,
    };

    let result = run_simulation(&solver, &simulation)?;
    print_simulation_result(&result, config.max_attempts.value());
    Ok(())
}
