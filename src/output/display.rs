//! Display functions for command results

use super::formatters::{code_swatches, create_progress_bar, feedback_pegs, symbol_swatch};
use crate::commands::{GeneratorStats, HintResult, ScoreResult, SimulationResult};
use crate::core::{Code, Symbol};
use colored::Colorize;

/// Print the feedback for one scored guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Secret:   {}  {}", code_swatches(&result.secret), result.secret);
    println!("Guess:    {}  {}", code_swatches(&result.guess), result.guess);
    println!("{}", "─".repeat(40).cyan());
    println!(
        "Feedback: {}  ({} exact, {} partial)",
        feedback_pegs(result.feedback),
        result.feedback.exact(),
        result.feedback.partial()
    );

    if result.feedback.is_perfect() {
        println!("{}", "✅ The guess cracks the code!".green().bold());
    }
}

/// Print freshly generated secrets, one per line
pub fn print_secrets(secrets: &[Code]) {
    for (i, secret) in secrets.iter().enumerate() {
        println!("{:>4}. {}  {}", i + 1, code_swatches(secret), secret);
    }
}

/// Print what a guess history leaves open
pub fn print_hint_result(result: &HintResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "HINT:".bright_cyan().bold(),
        result.difficulty.name().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    match result.remaining {
        0 => {
            println!(
                "\n{}",
                "❌ No code matches that history; check the feedback entered."
                    .red()
                    .bold()
            );
            return;
        }
        1 => println!("\n🎯 Exactly one code remains:"),
        n => println!("\n📊 {n} possible codes remain:"),
    }

    for code in &result.sample {
        println!("   {}  {}", code_swatches(code), code);
    }
    if result.remaining > result.sample.len() {
        println!(
            "   {}",
            format!("... and {} more", result.remaining - result.sample.len()).bright_black()
        );
    }

    if let Some(suggestion) = result.suggestion {
        println!(
            "\n💡 Try: {}  {}",
            code_swatches(&suggestion),
            suggestion.to_string().bright_yellow().bold()
        );
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult, max_attempts: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let win_rate = if result.total_rounds > 0 {
        result.won as f64 / result.total_rounds as f64 * 100.0
    } else {
        0.0
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.total_rounds);
    println!(
        "   Won:              {} ({win_rate:.1}%)",
        result.won.to_string().green()
    );
    println!("   Lost:             {}", result.lost.to_string().red());
    println!(
        "   Average attempts: {}",
        format!("{:.2}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_attempts.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_attempts.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    if result.won == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for attempts in 1..=max_attempts {
        if let Some(&count) = result.distribution.get(&attempts) {
            let pct = count as f64 / result.total_rounds as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {attempts:2}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }
    if result.lost > 0 {
        let pct = result.lost as f64 / result.total_rounds as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("    ✗: {} {:5} ({pct:5.1}%)", bar.red(), result.lost);
    }
}

/// Print generator statistics
pub fn print_stats_result(stats: &GeneratorStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GENERATOR STATISTICS:".bright_cyan().bold(),
        stats.difficulty.name().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {} secrets generated", stats.total);
    println!(
        "   Distinct:      {} of {} possible",
        stats.distinct, stats.space
    );
    println!("   With repeats:  {}", stats.with_repeats);
    println!("   Time taken:    {:.2}s", stats.duration.as_secs_f64());

    let expected = stats.expected_per_symbol();
    let max_count = stats.symbol_counts.iter().copied().max().unwrap_or(0) as f64;

    println!("\n📈 {}", "Symbol frequency:".bright_cyan().bold());
    for &symbol in &Symbol::ALL {
        let count = stats.symbol_counts[symbol.index()];
        if !stats.difficulty.permits(symbol) {
            if count > 0 {
                println!(
                    "   {} {}",
                    symbol_swatch(symbol),
                    format!("{count} (outside the palette!)").red().bold()
                );
            }
            continue;
        }
        let bar = create_progress_bar(count as f64, max_count, 30);
        let deviation = if expected > 0.0 {
            (count as f64 - expected) / expected * 100.0
        } else {
            0.0
        };
        println!(
            "   {} {} {count:7} ({deviation:+5.1}%)",
            symbol_swatch(symbol),
            bar.green()
        );
    }
}
