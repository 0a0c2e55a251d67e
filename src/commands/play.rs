//! Interactive play mode
//!
//! Line-oriented game loop over any reader/writer pair. Every input line is
//! either a code (`RGBYW`) or a command.

use crate::core::{Code, Difficulty, GameError};
use crate::game::{AttemptLimit, GameConfig, Round, RoundStatus};
use crate::output::formatters::{code_swatches, feedback_pegs, palette_legend};
use crate::solver::{Solver, StrategyType};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Outcome tally for a play session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaySummary {
    pub rounds_won: usize,
    pub rounds_lost: usize,
}

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Guess(Code),
    New,
    SetDifficulty(Difficulty),
    SetAttempts(AttemptLimit),
    Hint,
    History,
    Help,
    Quit,
}

/// Parse an input line into a command
///
/// # Errors
/// Returns the `GameError` of whichever part failed to parse; a line that is
/// not a known command is read as a code.
pub fn parse_command(line: &str) -> Result<PlayCommand, GameError> {
    let line = line.trim();
    let lower = line.to_lowercase();
    let (head, arg) = lower
        .split_once(char::is_whitespace)
        .map_or((lower.as_str(), ""), |(head, arg)| (head, arg.trim()));

    match head {
        "quit" | "q" | "exit" => Ok(PlayCommand::Quit),
        "new" | "n" | "restart" => Ok(PlayCommand::New),
        "help" | "h" | "?" => Ok(PlayCommand::Help),
        "hint" => Ok(PlayCommand::Hint),
        "history" => Ok(PlayCommand::History),
        "tier" | "difficulty" | "level" => arg.parse().map(PlayCommand::SetDifficulty),
        "attempts" => arg.parse().map(PlayCommand::SetAttempts),
        _ => line.parse().map(PlayCommand::Guess),
    }
}

/// Run the interactive game until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. Invalid guesses
/// and commands are reported to the player and do not end the session.
pub fn run_play<R: BufRead, W: Write>(
    config: GameConfig,
    input: R,
    out: &mut W,
) -> Result<PlaySummary> {
    let mut round = Round::new(config);
    let mut solver = Solver::new(StrategyType::from_name("hybrid"), config.difficulty);
    let mut hint_rng = config.rng();
    let mut summary = PlaySummary::default();

    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "                 ¡Bienvenido a Mastermind!".bright_magenta().bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    write_help(out)?;
    write_round_intro(out, &round)?;

    let mut lines = input.lines();
    loop {
        if round.is_over() {
            write!(out, "{} ", ">".bright_black())?;
        } else {
            write!(
                out,
                "Guess {}/{}: ",
                round.attempts() + 1,
                round.max_attempts()
            )?;
        }
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{} {err}", "✗".red().bold())?;
                continue;
            }
        };

        match command {
            PlayCommand::Quit => break,
            PlayCommand::Help => write_help(out)?,
            PlayCommand::New => {
                round.restart();
                write_round_intro(out, &round)?;
            }
            PlayCommand::SetDifficulty(difficulty) => {
                round.set_difficulty(difficulty);
                solver = Solver::new(StrategyType::from_name("hybrid"), difficulty);
                write_round_intro(out, &round)?;
            }
            PlayCommand::SetAttempts(limit) => {
                round.set_max_attempts(limit);
                writeln!(
                    out,
                    "{}",
                    format!("Attempt limit changed to {limit}.").bright_blue()
                )?;
                write_round_intro(out, &round)?;
            }
            PlayCommand::History => write_history(out, &round)?,
            PlayCommand::Hint => {
                let remaining = solver.count_candidates(round.history());
                writeln!(out, "{remaining} possible codes remain")?;
                if !round.is_over()
                    && let Some(suggestion) = solver.next_guess(round.history(), &mut hint_rng)
                {
                    writeln!(out, "Try: {}  {suggestion}", code_swatches(suggestion))?;
                }
            }
            PlayCommand::Guess(guess) => match round.submit(guess.symbols()) {
                Err(err) => writeln!(out, "{} {err}", "✗".red().bold())?,
                Ok(outcome) => {
                    writeln!(
                        out,
                        "  {:>2}. {}  {}",
                        outcome.attempt,
                        code_swatches(&guess),
                        feedback_pegs(outcome.feedback)
                    )?;

                    match outcome.status {
                        RoundStatus::InProgress => {}
                        RoundStatus::Won => {
                            summary.rounds_won += 1;
                            writeln!(
                                out,
                                "\n{}",
                                format!(
                                    "🎉 ¡Felicidades! You cracked the code in {} {}.",
                                    outcome.attempt,
                                    if outcome.attempt == 1 {
                                        "attempt"
                                    } else {
                                        "attempts"
                                    }
                                )
                                .bright_green()
                                .bold()
                            )?;
                            write_reveal(out, &round)?;
                        }
                        RoundStatus::Lost => {
                            summary.rounds_lost += 1;
                            writeln!(
                                out,
                                "\n{}",
                                "Out of attempts! The secret was:".bright_red().bold()
                            )?;
                            write_reveal(out, &round)?;
                        }
                    }
                }
            },
        }
    }

    writeln!(
        out,
        "👋 Thanks for playing! Won {}, lost {}.",
        summary.rounds_won, summary.rounds_lost
    )?;

    Ok(summary)
}

fn write_round_intro<W: Write>(out: &mut W, round: &Round) -> Result<()> {
    let difficulty = round.difficulty();
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "New round: {} difficulty, {} attempts{}",
        difficulty.name().bright_yellow().bold(),
        round.max_attempts(),
        if difficulty.allows_repeats() {
            ", colors may repeat"
        } else {
            ", no repeated colors"
        }
    )?;
    writeln!(out, "Colors: {}", palette_legend(difficulty.palette()))?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    Ok(())
}

fn write_reveal<W: Write>(out: &mut W, round: &Round) -> Result<()> {
    if let Some(secret) = round.revealed_secret() {
        writeln!(
            out,
            "  {}  {}",
            code_swatches(secret),
            secret.to_string().bold()
        )?;
    }
    writeln!(out, "Type 'new' to play again or 'quit' to exit.\n")?;
    Ok(())
}

fn write_history<W: Write>(out: &mut W, round: &Round) -> Result<()> {
    if round.history().is_empty() {
        writeln!(out, "No guesses yet.")?;
        return Ok(());
    }
    for (i, record) in round.history().iter().enumerate() {
        writeln!(
            out,
            "  {:>2}. {}  {}",
            i + 1,
            code_swatches(&record.guess),
            feedback_pegs(record.feedback)
        )?;
    }
    Ok(())
}

fn write_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\nEnter 5 color letters to guess, e.g. {}", "RGBYW".bold())?;
    writeln!(
        out,
        "Feedback: {} = right color, right spot   {} = right color, wrong spot",
        "X".bright_green().bold(),
        "O".bright_yellow().bold()
    )?;
    writeln!(
        out,
        "Commands: new, tier <easy|medium|hard>, attempts <6|9|12>, hint, history, help, quit"
    )?;
    Ok(())
}
