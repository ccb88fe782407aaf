//! Consistency of a word with an observed (guess, pattern) pair
//!
//! [`is_consistent`] is the definition: a word survives exactly when guessing
//! `guess` against it would reproduce the observed pattern. [`satisfies_rules`]
//! checks the same thing position by position without building a pattern.

use super::{ALPHABET_SIZE, Feedback, Pattern, Word};

/// Whether `word` could be the secret given that `guess` produced `pattern`
///
/// # Examples
/// ```
/// use wordle_helper::core::{Pattern, Word, is_consistent};
///
/// let guess = Word::new("crane").unwrap();
/// let pattern = Pattern::from_digits("00202").unwrap();
///
/// assert!(is_consistent(&Word::new("slate").unwrap(), &guess, pattern));
/// assert!(!is_consistent(&Word::new("crate").unwrap(), &guess, pattern));
/// ```
#[inline]
#[must_use]
pub fn is_consistent(word: &Word, guess: &Word, pattern: Pattern) -> bool {
    Pattern::calculate(guess, word) == pattern
}

/// Rule-based form of [`is_consistent`]
///
/// - Correct positions must match exactly.
/// - Present and absent positions must not hold the guessed letter.
/// - A letter marked correct or present `k` times must occur at least `k`
///   times; if it is also marked absent somewhere it must occur exactly `k`
///   times.
/// - Among a letter's non-correct positions, present marks come before
///   absent ones, because yellows are handed out left to right.
#[must_use]
pub fn satisfies_rules(word: &Word, guess: &Word, pattern: Pattern) -> bool {
    let mut explained = [0usize; ALPHABET_SIZE];
    let mut capped = [false; ALPHABET_SIZE];

    for (i, fb) in pattern.feedback().into_iter().enumerate() {
        let letter = guess.char_at(i);
        let idx = usize::from(letter - b'a');
        let matches_here = word.char_at(i) == letter;

        match fb {
            Feedback::Correct => {
                if !matches_here {
                    return false;
                }
                explained[idx] += 1;
            }
            Feedback::Present => {
                if matches_here || capped[idx] {
                    return false;
                }
                explained[idx] += 1;
            }
            Feedback::Absent => {
                if matches_here {
                    return false;
                }
                capped[idx] = true;
            }
        }
    }

    guess.distinct_letters().all(|letter| {
        let idx = usize::from(letter - b'a');
        let count = word.count_of(letter);
        if capped[idx] {
            count == explained[idx]
        } else {
            count >= explained[idx]
        }
    })
}
