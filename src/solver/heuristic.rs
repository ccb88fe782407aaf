//! Letter-frequency shortlist
//!
//! A cheap score used only to bound how many words get an exact entropy
//! evaluation. It never picks the guess itself.

use crate::core::{ALPHABET_SIZE, Word};
use std::cmp::Reverse;

/// Letters ordered from most to least common in five-letter English words
pub const FREQUENCY_ORDER: &[u8; ALPHABET_SIZE] = b"earotlisncuydhpmgbfkwvzxqj";

/// Per-letter weight, indexed by `letter - b'a'`: 26 for 'e' down to 1 for 'j'
const LETTER_WEIGHTS: [usize; ALPHABET_SIZE] = letter_weights();

const fn letter_weights() -> [usize; ALPHABET_SIZE] {
    let mut weights = [0; ALPHABET_SIZE];
    let mut rank = 0;
    while rank < ALPHABET_SIZE {
        weights[(FREQUENCY_ORDER[rank] - b'a') as usize] = ALPHABET_SIZE - rank;
        rank += 1;
    }
    weights
}

/// Frequency score of a word
///
/// Sums `26 - rank` over the word's distinct letters, so repeated letters
/// add nothing.
///
/// # Examples
/// ```
/// use wordle_helper::core::Word;
/// use wordle_helper::solver::letter_score;
///
/// // e=26, a=25, r=24, o=23, t=22
/// assert_eq!(letter_score(&Word::new("orate").unwrap()), 120);
/// // repeated letters count once
/// assert_eq!(letter_score(&Word::new("eerie").unwrap()), 26 + 24 + 20);
/// ```
#[must_use]
pub fn letter_score(word: &Word) -> usize {
    word.distinct_letters()
        .map(|letter| LETTER_WEIGHTS[usize::from(letter - b'a')])
        .sum()
}

/// The `limit` highest-scoring words, best first
///
/// The sort is stable: equal scores keep their input order.
pub fn top_by_frequency<'a>(words: impl IntoIterator<Item = &'a Word>, limit: usize) -> Vec<&'a Word> {
    let mut ranked: Vec<&Word> = words.into_iter().collect();
    ranked.sort_by_cached_key(|word| Reverse(letter_score(word)));
    ranked.truncate(limit);
    ranked
}
