//! Hard mode constraints accumulated from feedback

use crate::core::{Feedback, Pattern, WORD_LENGTH, Word};

/// Letters every hard-mode guess must reuse
///
/// Both parts only ever grow: a confirmed position or a required letter is
/// never forgotten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HardModeConstraints {
    /// Letters fixed at specific positions (correct feedback)
    required_positions: [Option<u8>; WORD_LENGTH],
    /// Letters that must appear somewhere (present feedback), first-seen order
    required_letters: Vec<u8>,
}

impl HardModeConstraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess and its feedback into the constraints
    pub fn update(&mut self, guess: &Word, pattern: Pattern) {
        for (i, fb) in pattern.feedback().into_iter().enumerate() {
            let letter = guess.char_at(i);
            match fb {
                Feedback::Correct => self.required_positions[i] = Some(letter),
                Feedback::Present => {
                    if !self.required_letters.contains(&letter) {
                        self.required_letters.push(letter);
                    }
                }
                Feedback::Absent => {}
            }
        }
    }

    /// Check if a word satisfies all hard mode constraints
    #[must_use]
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        let positions_ok = self
            .required_positions
            .iter()
            .enumerate()
            .all(|(i, required)| required.is_none_or(|letter| word.char_at(i) == letter));

        positions_ok
            && self
                .required_letters
                .iter()
                .all(|&letter| word.has_letter(letter))
    }

    /// Letter fixed at a position, if any
    #[must_use]
    pub fn required_at(&self, position: usize) -> Option<u8> {
        self.required_positions.get(position).copied().flatten()
    }

    #[must_use]
    pub fn required_letters(&self) -> &[u8] {
        &self.required_letters
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.required_positions.iter().all(Option::is_none) && self.required_letters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn starts_empty_and_accepts_anything() {
        let constraints = HardModeConstraints::new();
        assert!(constraints.is_empty());
        assert!(constraints.is_satisfied_by(&w("zzzzz")));
    }

    #[test]
    fn update_records_greens_and_yellows() {
        let mut constraints = HardModeConstraints::new();
        // CRANE vs SLATE-like feedback: A and E correct, R present
        constraints.update(&w("crane"), Pattern::from_digits("01202").unwrap());

        assert_eq!(constraints.required_at(2), Some(b'a'));
        assert_eq!(constraints.required_at(4), Some(b'e'));
        assert_eq!(constraints.required_at(0), None);
        assert_eq!(constraints.required_letters(), b"r");

        assert!(constraints.is_satisfied_by(&w("irate")));
        assert!(!constraints.is_satisfied_by(&w("slate"))); // no R
        assert!(!constraints.is_satisfied_by(&w("rally"))); // A not at 2
    }

    #[test]
    fn constraints_accumulate() {
        let mut constraints = HardModeConstraints::new();
        constraints.update(&w("crane"), Pattern::from_digits("00200").unwrap());
        constraints.update(&w("slate"), Pattern::from_digits("10000").unwrap());

        // The earlier green survives an all-gray position later on
        assert_eq!(constraints.required_at(2), Some(b'a'));
        assert_eq!(constraints.required_letters(), b"s");
        assert!(!constraints.is_empty());
    }

    #[test]
    fn repeated_yellows_are_stored_once() {
        let mut constraints = HardModeConstraints::new();
        constraints.update(&w("robot"), Pattern::from_digits("10000").unwrap());
        constraints.update(&w("rider"), Pattern::from_digits("10000").unwrap());
        assert_eq!(constraints.required_letters(), b"r");
    }
}
