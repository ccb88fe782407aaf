//! Word lists for Wordle solving
//!
//! Provides the embedded default vocabulary and loading from plain-text files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
