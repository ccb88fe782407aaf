//! Solver configuration

use crate::core::Word;
use crate::error::{InputError, Result};

/// Opening guess used before any feedback is known
///
/// Chosen offline for a strong first split; not recomputed at runtime.
pub const DEFAULT_OPENING: &str = "crane";

/// Upper bound on how many words get an exact entropy evaluation per turn
pub const DEFAULT_POOL_SIZE: usize = 100;

/// Tunable solver parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Guess returned on the first turn
    pub opening: Word,
    /// Maximum evaluation pool size for the entropy step
    pub pool_size: usize,
    /// Restrict suggestions to words honouring revealed letters
    pub hard_mode: bool,
}

impl SolverConfig {
    /// Default configuration: opening "crane", pool of 100, normal mode
    ///
    /// # Panics
    /// Will not panic - [`DEFAULT_OPENING`] is a valid word.
    #[must_use]
    pub fn new() -> Self {
        Self {
            opening: Word::new(DEFAULT_OPENING).expect("default opening is a valid word"),
            pool_size: DEFAULT_POOL_SIZE,
            hard_mode: false,
        }
    }

    #[must_use]
    pub fn with_opening(mut self, opening: Word) -> Self {
        self.opening = opening;
        self
    }

    #[must_use]
    pub const fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    #[must_use]
    pub const fn with_hard_mode(mut self, hard_mode: bool) -> Self {
        self.hard_mode = hard_mode;
        self
    }

    /// Reject settings the solver cannot run with
    ///
    /// # Errors
    /// Returns `InvalidInput` if the pool size is zero.
    pub fn validate(&self) -> Result<()> {
        if self.pool_size == 0 {
            return Err(InputError::ZeroPoolSize.into());
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}
