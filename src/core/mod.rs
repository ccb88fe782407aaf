//! Core domain types for Wordle
//!
//! This module is the pattern engine: words, feedback patterns and the
//! consistency check used to filter candidates. Everything here is pure and
//! allocation-light.

mod consistency;
mod feedback;
mod pattern;
mod word;

pub use consistency::{is_consistent, satisfies_rules};
pub use feedback::Feedback;
pub use pattern::Pattern;
pub use word::{ALPHABET_SIZE, Word};

/// Number of letters in every word and symbols in every pattern
pub const WORD_LENGTH: usize = 5;
