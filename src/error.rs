//! Error types for the solver
//!
//! Every failure the library can report is an input problem, surfaced to the
//! caller immediately. An exhausted candidate set is not an error; it is
//! reported as `None` from [`Solver::suggest_guess`](crate::solver::Solver::suggest_guess).

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, SolverError>;

/// Top-level error returned by solver operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Malformed word, feedback, vocabulary or configuration
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
}

/// The specific reason an input was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("word must be exactly {expected} letters, got {actual}")]
    WordLength { expected: usize, actual: usize },

    #[error("word contains '{0}', expected only letters a-z")]
    InvalidLetter(char),

    #[error("feedback must have exactly {expected} symbols, got {actual}")]
    PatternLength { expected: usize, actual: usize },

    #[error("feedback contains '{0}', expected 0 (absent), 1 (present) or 2 (correct)")]
    InvalidSymbol(char),

    #[error("vocabulary is empty")]
    EmptyVocabulary,

    #[error("evaluation pool size must be at least 1")]
    ZeroPoolSize,
}

impl SolverError {
    /// The underlying input problem
    #[must_use]
    pub const fn input(&self) -> &InputError {
        match self {
            Self::InvalidInput(inner) => inner,
        }
    }
}
