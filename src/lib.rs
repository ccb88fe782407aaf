//! Wordle Helper
//!
//! Narrows a Wordle candidate set from per-letter feedback and suggests the
//! guess with the greatest expected information gain.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::core::{Pattern, Word};
//! use wordle_helper::solver::Solver;
//! use wordle_helper::wordlists::{WORDS, loader::words_from_slice};
//!
//! let vocabulary = words_from_slice(WORDS);
//! let mut solver = Solver::new(&vocabulary, false).unwrap();
//!
//! let secret = Word::new("slate").unwrap();
//! while let Some(guess) = solver.suggest_guess().cloned() {
//!     let pattern = Pattern::calculate(&guess, &secret);
//!     solver.record(guess, pattern);
//!     if solver.is_solved() {
//!         break;
//!     }
//! }
//! assert_eq!(solver.candidates(), [secret]);
//! ```

// Pattern engine
pub mod core;

// Error types
pub mod error;

// Candidate filtering and guess selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{InputError, Result, SolverError};
