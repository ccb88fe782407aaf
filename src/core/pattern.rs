//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total. At the boundary it is read and
//! written as a digit string such as "02201".

use super::{Feedback, WORD_LENGTH, Word};
use crate::error::InputError;
use std::fmt;
use std::str::FromStr;

/// Feedback pattern for a Wordle guess
///
/// Represents the per-position feedback as a single byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All correct (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Pattern from its raw base-3 code, `None` unless `value` is 0..=242
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Pattern;
    ///
    /// assert_eq!(Pattern::new(242), Some(Pattern::PERFECT));
    /// assert_eq!(Pattern::new(243), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::PERFECT.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Build a pattern from per-position feedback
    #[must_use]
    pub fn from_feedback(feedback: [Feedback; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for fb in feedback {
            pattern += fb.digit() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Feedback at a single position
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub fn get(self, position: usize) -> Feedback {
        assert!(position < WORD_LENGTH, "position {position} out of range");
        let digit = self.0 / 3u8.pow(position as u32) % 3;
        Feedback::from_digit(digit).unwrap_or(Feedback::Absent)
    }

    /// Per-position feedback, in guess order
    #[must_use]
    pub fn feedback(self) -> [Feedback; WORD_LENGTH] {
        std::array::from_fn(|i| self.get(i))
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Calculate the pattern when `guess` is guessed and `secret` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (correct) and remove them from the
    ///    secret's letter pool
    /// 2. Second pass: scanning left to right, mark each remaining guess letter
    ///    present if the pool still holds one, consuming it; otherwise absent
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{Word, Pattern};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    ///
    /// assert_eq!(Pattern::calculate(&guess, &secret).to_string(), "00202");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LENGTH];
        let mut pool = secret.letter_counts();

        // First pass: exact position matches
        for (i, slot) in result.iter_mut().enumerate() {
            if guess.char_at(i) == secret.char_at(i) {
                *slot = Feedback::Correct;
                pool[usize::from(guess.char_at(i) - b'a')] -= 1;
            }
        }

        // Second pass: wrong position, letter still available
        for (i, slot) in result.iter_mut().enumerate() {
            if *slot == Feedback::Correct {
                continue;
            }
            let available = &mut pool[usize::from(guess.char_at(i) - b'a')];
            if *available > 0 {
                *slot = Feedback::Present;
                *available -= 1;
            }
        }

        Self::from_feedback(result)
    }

    /// Count the number of correct feedback squares
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.feedback()
            .iter()
            .filter(|&&fb| fb == Feedback::Correct)
            .count()
    }

    /// Count the number of present feedback squares
    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.feedback()
            .iter()
            .filter(|&&fb| fb == Feedback::Present)
            .count()
    }

    /// Parse the strict wire form: exactly five of '0', '1', '2'
    ///
    /// # Errors
    /// Returns `InputError::PatternLength` for the wrong number of symbols and
    /// `InputError::InvalidSymbol` for anything outside the digit alphabet.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Pattern;
    ///
    /// assert!(Pattern::from_digits("22222").unwrap().is_perfect());
    /// assert!(Pattern::from_digits("2222").is_err());
    /// assert!(Pattern::from_digits("2222G").is_err());
    /// ```
    pub fn from_digits(s: &str) -> Result<Self, InputError> {
        Self::parse_with(s, Feedback::from_char)
    }

    /// Parse a pattern typed or pasted by a person
    ///
    /// Accepts digits as well as G/Y/- letters and coloured squares, mixed
    /// freely.
    ///
    /// # Errors
    /// Same as [`Pattern::from_digits`].
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// let p3 = Pattern::parse("21021").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1, p3);
    /// ```
    pub fn parse(s: &str) -> Result<Self, InputError> {
        Self::parse_with(s, Feedback::from_input_char)
    }

    fn parse_with(s: &str, symbol: impl Fn(char) -> Option<Feedback>) -> Result<Self, InputError> {
        let actual = s.chars().count();
        if actual != WORD_LENGTH {
            return Err(InputError::PatternLength {
                expected: WORD_LENGTH,
                actual,
            });
        }

        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        for (slot, ch) in feedback.iter_mut().zip(s.chars()) {
            *slot = symbol(ch).ok_or(InputError::InvalidSymbol(ch))?;
        }

        Ok(Self::from_feedback(feedback))
    }

    /// Convert pattern to emoji string, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.feedback().iter().map(|fb| fb.to_emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fb in self.feedback() {
            write!(f, "{}", fb.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(guess: &str, secret: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        Pattern::calculate(&guess, &secret).to_string()
    }

    #[test]
    fn pattern_perfect_constant() {
        assert_eq!(Pattern::PERFECT.value(), 242);
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.count_greens(), 5);
        assert_eq!(Pattern::PERFECT.count_yellows(), 0);
        assert_eq!(Pattern::PERFECT.to_string(), "22222");
    }

    #[test]
    fn pattern_all_gray() {
        assert_eq!(pattern("abcde", "fghij"), "00000");
    }

    #[test]
    fn pattern_all_green() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert_eq!(Pattern::calculate(&w, &w), Pattern::PERFECT);
        }
    }

    #[test]
    fn pattern_real_wordle_example() {
        // R is absent because SLATE has no R
        assert_eq!(pattern("crane", "slate"), "00202");
    }

    #[test]
    fn speed_against_erase() {
        // ERASE has two E's, so both E's in SPEED are present
        assert_eq!(pattern("speed", "erase"), "10110");
    }

    #[test]
    fn single_secret_letter_marks_only_first_duplicate() {
        // ABBEY has one E; only the first E of GEESE gets it
        assert_eq!(pattern("geese", "abbey"), "01000");
        // LEVER has E at 1 and 3; SPEED's E's at 2 and 3 -> correct at 3, present at 2
        assert_eq!(pattern("speed", "lever"), "00120");
    }

    #[test]
    fn mommy_against_mambo() {
        // MAMBO has two M's and both are matched in place, so the third M is absent
        // MOMMY: M(0) correct, O(1) present, M(2) correct, M(3) absent, Y absent
        assert_eq!(pattern("mommy", "mambo"), "21200");
    }

    #[test]
    fn correct_match_consumes_before_present() {
        // The green E at position 4 must not also light up an earlier E
        assert_eq!(pattern("eerie", "shine"), "00012");
        assert_eq!(pattern("robot", "floor"), "11020");
    }

    #[test]
    fn pattern_encoding_is_base3_little_endian() {
        let p = Pattern::from_feedback([
            Feedback::Present,
            Feedback::Absent,
            Feedback::Present,
            Feedback::Present,
            Feedback::Absent,
        ]);
        assert_eq!(p.value(), 1 + 9 + 27);
        assert_eq!(p.get(0), Feedback::Present);
        assert_eq!(p.get(1), Feedback::Absent);
        assert_eq!(p.count_yellows(), 3);
    }

    #[test]
    fn raw_codes_outside_base3_range_are_rejected() {
        assert_eq!(Pattern::new(0), Pattern::from_digits("00000").ok());
        assert_eq!(Pattern::new(23), Pattern::parse("GYG--").ok());
        for value in 243..=u8::MAX {
            assert_eq!(Pattern::new(value), None);
        }
    }

    #[test]
    fn from_digits_valid() {
        let p = Pattern::from_digits("02201").unwrap();
        assert_eq!(p.to_string(), "02201");
        assert_eq!(p.count_greens(), 2);
        assert_eq!(p.count_yellows(), 1);
    }

    #[test]
    fn from_digits_rejects_bad_length() {
        assert_eq!(
            Pattern::from_digits("0220"),
            Err(InputError::PatternLength {
                expected: 5,
                actual: 4
            })
        );
        assert!(Pattern::from_digits("022011").is_err());
        assert!(Pattern::from_digits("").is_err());
    }

    #[test]
    fn from_digits_rejects_bad_symbol() {
        assert_eq!(
            Pattern::from_digits("02301"),
            Err(InputError::InvalidSymbol('3'))
        );
        assert_eq!(
            Pattern::from_digits("GYG--"),
            Err(InputError::InvalidSymbol('G'))
        );
    }

    #[test]
    fn parse_accepts_all_forms() {
        let p1 = Pattern::parse("GYG--").unwrap();
        let p2 = Pattern::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::parse("gyg__").unwrap();
        let p4: Pattern = "21200".parse().unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1, p4);
        assert_eq!(p1.value(), 23);
    }

    #[test]
    fn parse_invalid() {
        assert!(Pattern::parse("GYGGYX").is_err());
        assert!(Pattern::parse("GYG").is_err());
        assert_eq!(Pattern::parse("GXGGY"), Err(InputError::InvalidSymbol('X')));
    }

    #[test]
    fn to_emoji_matches_feedback() {
        let p = Pattern::parse("GY-GY").unwrap();
        assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    }
}
