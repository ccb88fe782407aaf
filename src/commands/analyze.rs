//! Word analysis command
//!
//! Analyzes the entropy and information content of a guess against the
//! solver's current candidates.

use crate::core::Word;
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Solver, letter_score};
use anyhow::{Context, Result};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub worst_case: usize,
    pub total_candidates: usize,
    pub letter_score: usize,
    pub is_candidate: bool,
}

/// Analyze the entropy of a word against the solver's candidates
///
/// # Errors
///
/// Returns an error if the word is not a valid five-letter word.
pub fn analyze_word(word: &str, solver: &Solver) -> Result<AnalysisResult> {
    let guess = Word::new(word).with_context(|| format!("invalid word '{word}'"))?;
    let candidates = solver.candidates();
    let metrics = calculate_metrics(&guess, candidates);

    Ok(AnalysisResult {
        word: guess.text().to_string(),
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        worst_case: metrics.max_partition,
        total_candidates: candidates.len(),
        letter_score: letter_score(&guess),
        is_candidate: candidates.contains(&guess),
    })
}
