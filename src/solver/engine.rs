//! Main Wordle solver interface

use super::config::SolverConfig;
use super::constraints::HardModeConstraints;
use super::entropy::select_best_guess;
use super::heuristic::top_by_frequency;
use crate::core::{Pattern, Word, is_consistent};
use crate::error::{InputError, Result};
use log::{debug, warn};

/// One applied guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub pattern: Pattern,
}

/// Main Wordle solver
///
/// Owns its copy of the vocabulary and narrows a candidate set as feedback
/// arrives. The candidate set is always exactly the vocabulary words
/// consistent with every record in the history, in vocabulary order.
#[derive(Debug, Clone)]
pub struct Solver {
    config: SolverConfig,
    vocabulary: Vec<Word>,
    candidates: Vec<Word>,
    history: Vec<GuessRecord>,
    constraints: HardModeConstraints,
}

impl Solver {
    /// Create a solver over `vocabulary` with default settings
    ///
    /// # Errors
    /// Returns `InvalidInput` if the vocabulary is empty.
    pub fn new(vocabulary: &[Word], hard_mode: bool) -> Result<Self> {
        Self::with_config(vocabulary, SolverConfig::new().with_hard_mode(hard_mode))
    }

    /// Create a solver with explicit configuration
    ///
    /// # Errors
    /// Returns `InvalidInput` if the vocabulary is empty or the configuration
    /// is invalid.
    pub fn with_config(vocabulary: &[Word], config: SolverConfig) -> Result<Self> {
        if vocabulary.is_empty() {
            return Err(InputError::EmptyVocabulary.into());
        }
        config.validate()?;

        debug!(
            "solver ready: {} words, opening {}, pool {}, hard mode {}",
            vocabulary.len(),
            config.opening,
            config.pool_size,
            config.hard_mode
        );

        Ok(Self {
            config,
            vocabulary: vocabulary.to_vec(),
            candidates: vocabulary.to_vec(),
            history: Vec::new(),
            constraints: HardModeConstraints::new(),
        })
    }

    /// Apply feedback given in its wire form
    ///
    /// `feedback` must be five digits: 0 = absent, 1 = present, 2 = correct.
    /// Everything is validated before the solver state changes.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the guess is not a five-letter word or the
    /// feedback has the wrong length or a symbol other than 0, 1, 2.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Word;
    /// use wordle_helper::solver::Solver;
    ///
    /// let vocabulary: Vec<Word> = ["crane", "slate", "shale"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let mut solver = Solver::new(&vocabulary, false).unwrap();
    ///
    /// solver.apply_feedback("plate", "02222").unwrap();
    /// assert_eq!(solver.candidates()[0].text(), "slate");
    ///
    /// assert!(solver.apply_feedback("plate", "0222").is_err());
    /// ```
    pub fn apply_feedback(&mut self, guess: &str, feedback: &str) -> Result<()> {
        let guess = Word::new(guess)?;
        let pattern = Pattern::from_digits(feedback)?;
        self.record(guess, pattern);
        Ok(())
    }

    /// Apply already-validated feedback
    pub fn record(&mut self, guess: Word, pattern: Pattern) {
        if self.config.hard_mode {
            self.constraints.update(&guess, pattern);
        }

        let before = self.candidates.len();
        self.candidates
            .retain(|candidate| is_consistent(candidate, &guess, pattern));
        let after = self.candidates.len();

        debug!("{guess} {pattern}: {before} -> {after} candidates");
        if after == 0 && before > 0 {
            warn!("feedback {pattern} for {guess} leaves no candidates; history is contradictory");
        }

        self.history.push(GuessRecord { guess, pattern });
    }

    /// Suggest the next guess
    ///
    /// Returns the configured opening before any feedback, `None` once no
    /// candidate is left, the first candidate when one or two remain, and
    /// otherwise the evaluation-pool word with the greatest entropy against
    /// the candidates.
    #[must_use]
    pub fn suggest_guess(&self) -> Option<&Word> {
        if self.history.is_empty() {
            return Some(&self.config.opening);
        }

        if self.candidates.len() <= 2 {
            return self.candidates.first();
        }

        let pool = self.evaluation_pool();
        match select_best_guess(&pool, &self.candidates) {
            Some((best, entropy)) => {
                debug!(
                    "suggesting {best} ({entropy:.3} bits) from pool of {} over {} candidates",
                    pool.len(),
                    self.candidates.len()
                );
                Some(best)
            }
            None => self.candidates.first(),
        }
    }

    /// Words whose entropy is evaluated when suggesting a guess, in scan order
    ///
    /// In hard mode, the candidates honouring the accumulated constraints,
    /// shortlisted by letter frequency. Otherwise every candidate, unless
    /// there are more than the pool size, in which case the frequency
    /// shortlist.
    #[must_use]
    pub fn evaluation_pool(&self) -> Vec<&Word> {
        let limit = self.config.pool_size;

        if self.config.hard_mode {
            let eligible = self
                .candidates
                .iter()
                .filter(|word| self.constraints.is_satisfied_by(word));
            top_by_frequency(eligible, limit)
        } else if self.candidates.len() > limit {
            top_by_frequency(&self.candidates, limit)
        } else {
            self.candidates.iter().collect()
        }
    }

    /// Remove the most recent record and restore the state before it
    pub fn undo(&mut self) -> Option<GuessRecord> {
        let removed = self.history.pop()?;
        let history = std::mem::take(&mut self.history);

        self.candidates = self.vocabulary.clone();
        self.constraints = HardModeConstraints::new();
        for record in history {
            self.record(record.guess, record.pattern);
        }

        debug!("undid {} {}", removed.guess, removed.pattern);
        Some(removed)
    }

    /// Start over with the full vocabulary
    pub fn reset(&mut self) {
        self.candidates = self.vocabulary.clone();
        self.history.clear();
        self.constraints = HardModeConstraints::new();
    }

    /// Current candidate set, in vocabulary order
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Applied guesses, oldest first
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn vocabulary(&self) -> &[Word] {
        &self.vocabulary
    }

    #[must_use]
    pub const fn constraints(&self) -> &HardModeConstraints {
        &self.constraints
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn is_hard_mode(&self) -> bool {
        self.config.hard_mode
    }

    /// Whether the last feedback was all correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history
            .last()
            .is_some_and(|record| record.pattern.is_perfect())
    }
}
