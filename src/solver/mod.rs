//! Wordle solving
//!
//! The [`Solver`] keeps the candidate set and guess history, filters with the
//! pattern engine, and picks the next guess by entropy over a bounded pool.

mod config;
mod constraints;
mod engine;
pub mod entropy;
mod heuristic;

pub use config::{DEFAULT_OPENING, DEFAULT_POOL_SIZE, SolverConfig};
pub use constraints::HardModeConstraints;
pub use engine::{GuessRecord, Solver};
pub use heuristic::{FREQUENCY_ORDER, letter_score, top_by_frequency};
