//! Benchmark command
//!
//! Runs the solver against many secrets and collects statistics.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::solver::Solver;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Which secrets to play against
#[derive(Debug, Clone, Copy, Default)]
pub enum TargetSelection {
    /// Every vocabulary word
    #[default]
    All,
    /// The first `n` vocabulary words
    First(usize),
    /// `n` words drawn at random with a fixed seed
    Sample { count: usize, seed: u64 },
}

impl TargetSelection {
    /// Pick the secrets from a vocabulary
    #[must_use]
    pub fn select(self, vocabulary: &[Word]) -> Vec<Word> {
        match self {
            Self::All => vocabulary.to_vec(),
            Self::First(count) => vocabulary.iter().take(count).cloned().collect(),
            Self::Sample { count, seed } => {
                let mut rng = StdRng::seed_from_u64(seed);
                vocabulary.choose_multiple(&mut rng, count).cloned().collect()
            }
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: Vec<String>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run the solver against each target word
///
/// Guess statistics cover solved words only; unsolved words are listed in
/// `failed`.
///
/// # Errors
///
/// Returns an error if a target is not in the solver's vocabulary.
pub fn run_benchmark(
    solver: &mut Solver,
    targets: &[Word],
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut solved = 0;
    let mut failed = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for target in targets {
        pb.set_message(target.text().to_uppercase());
        let result = solve_word(&SolveConfig::new(target.text().to_string()), solver)?;

        if result.success {
            let guesses = result.guesses.len();
            solved += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            log::info!("failed to solve {target}");
            failed.push(target.text().to_string());
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    let duration = start.elapsed();
    let total_words = targets.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        failed,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
