//! Word solving command
//!
//! Plays the solver against a known secret and returns the solution path.

use crate::core::{Pattern, Word};
use crate::solver::Solver;
use crate::solver::entropy::calculate_metrics;
use anyhow::{Context, Result, bail};

/// Default number of attempts in a game
pub const MAX_GUESSES: usize = 6;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: MAX_GUESSES,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve a specific word, starting the solver from a fresh game
///
/// # Errors
///
/// Returns an error if the target word is invalid or not in the solver's
/// vocabulary. Running out of guesses or candidates is reported through
/// `SolveResult::success`, not as an error.
pub fn solve_word(config: &SolveConfig, solver: &mut Solver) -> Result<SolveResult> {
    let target = Word::new(config.target.as_str())
        .with_context(|| format!("invalid target word '{}'", config.target))?;

    if !solver.vocabulary().contains(&target) {
        bail!("target word '{target}' is not in the vocabulary");
    }

    solver.reset();
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = solver.candidates().len();

        let Some(guess) = solver.suggest_guess().cloned() else {
            break;
        };

        let (entropy, expected_remaining) = if candidates_before > 1 {
            let metrics = calculate_metrics(&guess, solver.candidates());
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        let pattern = Pattern::calculate(&guess, &target);
        solver.record(guess.clone(), pattern);

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            pattern,
            candidates_before,
            candidates_after: solver.candidates().len(),
            entropy,
            expected_remaining,
        });

        if pattern.is_perfect() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: target.text().to_string(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: target.text().to_string(),
    })
}
