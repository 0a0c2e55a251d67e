//! Generator statistics command
//!
//! Draws many secrets for a tier and tallies symbol frequencies, repeats and
//! distinct codes, as a check that generation is unbiased.

use crate::core::{Code, Difficulty, Symbol};
use crate::game::{GameConfig, generate_secret, generate_secret_with};
use crate::solver::space_size;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// Aggregated generator statistics
pub struct GeneratorStats {
    pub difficulty: Difficulty,
    pub total: usize,
    /// Occurrences of each symbol, indexed by [`Symbol::index`]
    pub symbol_counts: [usize; Symbol::COUNT],
    /// Secrets containing at least one repeated symbol
    pub with_repeats: usize,
    /// Number of distinct secrets seen
    pub distinct: usize,
    /// Number of secrets the tier can produce
    pub space: usize,
    pub duration: Duration,
}

impl GeneratorStats {
    /// Expected occurrences of each palette symbol under uniform sampling
    #[must_use]
    pub fn expected_per_symbol(&self) -> f64 {
        (self.total * crate::core::CODE_LENGTH) as f64 / self.difficulty.palette_size() as f64
    }
}

#[derive(Default)]
struct Tally {
    symbol_counts: [usize; Symbol::COUNT],
    with_repeats: usize,
    seen: FxHashSet<Code>,
}

impl Tally {
    fn add(mut self, secret: Code) -> Self {
        for symbol in secret.symbols() {
            self.symbol_counts[symbol.index()] += 1;
        }
        if secret.has_repeats() {
            self.with_repeats += 1;
        }
        self.seen.insert(secret);
        self
    }

    fn merge(mut self, other: Self) -> Self {
        for (mine, theirs) in self.symbol_counts.iter_mut().zip(other.symbol_counts) {
            *mine += theirs;
        }
        self.with_repeats += other.with_repeats;
        self.seen.extend(other.seen);
        self
    }
}

/// Generate `count` secrets in parallel and tally them
///
/// With a seeded config, secret `i` is drawn from seed `seed + i`.
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid.
pub fn run_stats(config: GameConfig, count: usize, show_progress: bool) -> Result<GeneratorStats> {
    let difficulty = config.difficulty;
    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let tally = (0..count)
        .into_par_iter()
        .map(|i| {
            let secret = match config.seed {
                Some(seed) => generate_secret_with(
                    difficulty,
                    &mut StdRng::seed_from_u64(seed.wrapping_add(i as u64)),
                ),
                None => generate_secret(difficulty),
            };
            pb.inc(1);
            secret
        })
        .fold(Tally::default, Tally::add)
        .reduce(Tally::default, Tally::merge);

    pb.finish_and_clear();

    Ok(GeneratorStats {
        difficulty,
        total: count,
        symbol_counts: tally.symbol_counts,
        with_repeats: tally.with_repeats,
        distinct: tally.seen.len(),
        space: space_size(difficulty),
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CODE_LENGTH;
    use crate::game::AttemptLimit;

    fn stats_for(difficulty: Difficulty, count: usize) -> GeneratorStats {
        let config = GameConfig::new(difficulty, AttemptLimit::Six).with_seed(5);
        run_stats(config, count, false).unwrap()
    }

    #[test]
    fn easy_stats_have_no_repeats() {
        let stats = stats_for(Difficulty::Easy, 2000);
        assert_eq!(stats.total, 2000);
        assert_eq!(stats.with_repeats, 0);
        assert_eq!(stats.symbol_counts.iter().sum::<usize>(), 2000 * CODE_LENGTH);
        assert_eq!(stats.symbol_counts[Symbol::Orange.index()], 0);
        assert_eq!(stats.symbol_counts[Symbol::Grey.index()], 0);
        assert!(stats.distinct <= stats.space);
        assert_eq!(stats.space, 720);
    }

    #[test]
    fn medium_never_uses_grey() {
        let stats = stats_for(Difficulty::Medium, 1000);
        assert_eq!(stats.symbol_counts[Symbol::Grey.index()], 0);
        assert!(stats.symbol_counts[Symbol::Orange.index()] > 0);
        assert!(stats.with_repeats > 0);
    }

    #[test]
    fn frequencies_are_roughly_uniform() {
        let stats = stats_for(Difficulty::Hard, 4000);
        let expected = stats.expected_per_symbol();
        assert!((expected - 2500.0).abs() < f64::EPSILON);

        // Binomial std dev is ~47 here; 15% slack is over 5 sigma
        for &count in &stats.symbol_counts {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(deviation < 0.15, "count {count} vs expected {expected}");
        }
    }

    #[test]
    fn seeded_stats_repeat() {
        let a = stats_for(Difficulty::Hard, 300);
        let b = stats_for(Difficulty::Hard, 300);
        assert_eq!(a.symbol_counts, b.symbol_counts);
        assert_eq!(a.distinct, b.distinct);
    }
}
