//! Pure entropy-based word selection
//!
//! Selects words that maximize Shannon entropy (expected information gain).

use super::calculator::calculate_entropy;
use crate::core::Word;
use rayon::prelude::*;

/// Select best guess by maximizing entropy
///
/// Entropies are computed in parallel, then scanned in pool order so the
/// first word with the strictly greatest entropy wins ties. Returns the word
/// and its entropy, or `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use wordle_helper::core::Word;
/// use wordle_helper::solver::entropy::select_best_guess;
///
/// let guesses = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("aeros").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let guess_refs: Vec<&Word> = guesses.iter().collect();
///
/// let (best, entropy) = select_best_guess(&guess_refs, &candidates).unwrap();
/// assert_eq!(best.text(), "aeros"); // AEROS has higher entropy than AAAAA
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<'a>(guess_pool: &[&'a Word], candidates: &[Word]) -> Option<(&'a Word, f64)> {
    let entropies: Vec<f64> = guess_pool
        .par_iter()
        .map(|&guess| calculate_entropy(guess, candidates))
        .collect();

    let mut best: Option<(&'a Word, f64)> = None;
    for (&guess, entropy) in guess_pool.iter().zip(entropies) {
        log::trace!("{guess}: {entropy:.4} bits");
        if best.is_none_or(|(_, top)| entropy > top) {
            best = Some((guess, entropy));
        }
    }

    best
}
