//! Information content of a guess
//!
//! A guess splits the candidates into classes by the pattern each one would
//! produce. The guess is worth the Shannon entropy of that split: the bits of
//! uncertainty its feedback is expected to remove.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Summary of how well a guess splits the candidates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Expected information gain in bits
    pub entropy: f64,
    /// Expected number of candidates left after the feedback arrives
    pub expected_remaining: f64,
    /// Size of the largest class, i.e. candidates left in the worst case
    pub max_partition: usize,
}

/// Candidates grouped by the pattern a guess would produce against each
#[derive(Debug, Clone)]
pub struct PatternPartition {
    classes: FxHashMap<Pattern, usize>,
    total: usize,
}

impl PatternPartition {
    #[must_use]
    pub fn new(guess: &Word, candidates: &[Word]) -> Self {
        let mut classes = FxHashMap::default();
        for candidate in candidates {
            *classes
                .entry(Pattern::calculate(guess, candidate))
                .or_insert(0) += 1;
        }

        Self {
            classes,
            total: candidates.len(),
        }
    }

    /// Number of candidates partitioned
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct patterns observed
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Candidates that would answer with `pattern`
    #[must_use]
    pub fn class_size(&self, pattern: Pattern) -> usize {
        self.classes.get(&pattern).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn largest(&self) -> usize {
        self.classes.values().copied().max().unwrap_or(0)
    }

    /// Σ size² / total: the class size a uniformly drawn secret lands in
    #[must_use]
    pub fn expected_remaining(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let squares: usize = self.classes.values().map(|&size| size * size).sum();
        squares as f64 / self.total as f64
    }

    #[must_use]
    pub fn entropy(&self) -> f64 {
        shannon_entropy(self.classes.values().copied())
    }

    #[must_use]
    pub fn metrics(&self) -> GuessMetrics {
        GuessMetrics {
            entropy: self.entropy(),
            expected_remaining: self.expected_remaining(),
            max_partition: self.largest(),
        }
    }
}

/// Entropy in bits of `guess` over `candidates`, 0.0 when there are none
///
/// # Examples
/// ```
/// use wordle_helper::core::Word;
/// use wordle_helper::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![Word::new("slate").unwrap(), Word::new("irate").unwrap()];
///
/// // SLATE answers 00202 and IRATE answers 02202: one bit
/// assert!((calculate_entropy(&guess, &candidates) - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    PatternPartition::new(guess, candidates).entropy()
}

#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    PatternPartition::new(guess, candidates).metrics()
}

/// H = -Σ p·log₂(p) over class sizes; empty classes are skipped
///
/// # Examples
/// ```
/// use wordle_helper::solver::entropy::shannon_entropy;
///
/// assert!((shannon_entropy([25, 25, 25, 25]) - 2.0).abs() < 1e-9);
/// assert_eq!(shannon_entropy([7]), 0.0);
/// assert_eq!(shannon_entropy([]), 0.0);
/// ```
#[must_use]
pub fn shannon_entropy(sizes: impl IntoIterator<Item = usize>) -> f64 {
    let sizes: Vec<usize> = sizes.into_iter().filter(|&size| size > 0).collect();
    let total: usize = sizes.iter().sum();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    sizes
        .into_iter()
        .map(|size| {
            let p = size as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>()
        .max(0.0)
}
