//! Simple interactive CLI mode
//!
//! Suggests guesses while you play and narrows the candidates from the
//! feedback you type in.

use super::solve::MAX_GUESSES;
use crate::core::{Pattern, Word};
use crate::output::formatters::colored_guess;
use crate::solver::Solver;
use crate::solver::entropy::calculate_metrics;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Candidate lists at or below this size are printed in full
const SHOW_CANDIDATES: usize = 10;

/// What the player typed at the feedback prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    New,
    Undo,
    Feedback { guess: Option<Word>, pattern: Pattern },
}

/// Parse a feedback line
///
/// Accepts a bare pattern ("02201", "GY-G-", "win") for the suggested guess,
/// or "<word> <pattern>" when a different word was played.
fn parse_command(input: &str) -> Result<Command, String> {
    let lowered = input.trim().to_lowercase();
    match lowered.as_str() {
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        "new" | "n" => return Ok(Command::New),
        "undo" | "u" => return Ok(Command::Undo),
        "win" | "correct" | "solved" => {
            return Ok(Command::Feedback {
                guess: None,
                pattern: Pattern::PERFECT,
            });
        }
        _ => {}
    }

    let mut parts = input.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(pattern), None, None) => Ok(Command::Feedback {
            guess: None,
            pattern: Pattern::parse(pattern).map_err(|e| e.to_string())?,
        }),
        (Some(word), Some(pattern), None) => Ok(Command::Feedback {
            guess: Some(Word::new(word).map_err(|e| e.to_string())?),
            pattern: Pattern::parse(pattern).map_err(|e| e.to_string())?,
        }),
        _ => Err("expected a pattern, or a word followed by a pattern".to_string()),
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(solver: &mut Solver) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(solver, stdin.lock(), stdout.lock())
}

/// Interactive loop over arbitrary input and output
///
/// Ends on quit, end of input, a solved game, an exhausted candidate set the
/// player does not undo, or after six attempts.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_session<R: BufRead, W: Write>(
    solver: &mut Solver,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, "{}", "  Wordle Helper".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(out, "\nI'll suggest guesses while you play.")?;
    writeln!(out, "After each guess, enter the result:")?;
    writeln!(out, "  0 = gray (letter not in word)")?;
    writeln!(out, "  1 = yellow (letter in word, wrong spot)")?;
    writeln!(out, "  2 = green (letter in correct spot)")?;
    writeln!(out, "Example: 01200   (G/Y/- also work; prefix a word if you played something else)")?;
    writeln!(out, "Commands: 'undo', 'new', 'quit'\n")?;

    loop {
        let attempt = solver.history().len() + 1;

        if attempt > MAX_GUESSES {
            writeln!(out, "\n{}", format!("Didn't solve in {MAX_GUESSES} attempts.").red())?;
            let remaining: Vec<&str> = solver
                .candidates()
                .iter()
                .take(SHOW_CANDIDATES)
                .map(Word::text)
                .collect();
            if !remaining.is_empty() {
                writeln!(out, "Remaining possibilities: {}", remaining.join(", "))?;
            }
            break;
        }

        let Some(suggestion) = solver.suggest_guess().cloned() else {
            writeln!(
                out,
                "\n{}",
                "No valid words remaining. Double check your inputs.".red()
            )?;
            writeln!(out, "Type 'undo' to go back, or 'new' to start over.")?;
            let reply = read_line(&mut input, &mut out, "Command")?
                .map(|line| line.to_lowercase());
            match reply.as_deref() {
                Some("undo" | "u") => {
                    solver.undo();
                    continue;
                }
                Some("new" | "n") => {
                    solver.reset();
                    continue;
                }
                _ => break,
            }
        };

        let candidates = solver.candidates();
        writeln!(out, "{}", "─".repeat(60))?;
        writeln!(
            out,
            "Attempt {attempt}/{MAX_GUESSES}: {} possible words remaining",
            candidates.len()
        )?;
        writeln!(
            out,
            "Suggested guess: {}",
            suggestion.text().to_uppercase().bright_yellow().bold()
        )?;
        if candidates.len() > 1 {
            let metrics = calculate_metrics(&suggestion, candidates);
            writeln!(
                out,
                "   Entropy: {:.3} bits, expect {:.1} left, worst case {}",
                metrics.entropy, metrics.expected_remaining, metrics.max_partition
            )?;
        }
        if candidates.len() <= SHOW_CANDIDATES {
            let listed: Vec<&str> = candidates.iter().map(Word::text).collect();
            writeln!(out, "Possible answers: {}", listed.join(", "))?;
        }

        let command = loop {
            let Some(line) = read_line(&mut input, &mut out, "Result")? else {
                return Ok(());
            };
            match parse_command(&line) {
                Ok(command) => break command,
                Err(e) => writeln!(out, "{} {e}", "Invalid:".red())?,
            }
        };

        match command {
            Command::Quit => break,
            Command::New => {
                solver.reset();
                writeln!(out, "\nNew game started!\n")?;
            }
            Command::Undo => match solver.undo() {
                Some(record) => writeln!(out, "Undid {}", record.guess.text().to_uppercase())?,
                None => writeln!(out, "Nothing to undo!")?,
            },
            Command::Feedback { guess, pattern } => {
                let guess = guess.unwrap_or(suggestion);
                solver.record(guess, pattern);

                if pattern.is_perfect() {
                    let noun = if attempt == 1 { "guess" } else { "guesses" };
                    writeln!(
                        out,
                        "\n{}",
                        format!("Solved in {attempt} {noun}!").bright_green().bold()
                    )?;
                    for record in solver.history() {
                        writeln!(out, "  {}", colored_guess(&record.guess, record.pattern))?;
                    }
                    break;
                }
            }
        }
    }

    writeln!(out, "\nThanks for playing!")?;
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
