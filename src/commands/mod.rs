//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, TargetSelection, run_benchmark};
pub use simple::{run_session, run_simple};
pub use solve::{MAX_GUESSES, SolveConfig, SolveResult, solve_word};
