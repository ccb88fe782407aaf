//! Per-letter feedback symbols

use std::fmt;

/// Outcome for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feedback {
    /// Letter not in the secret, or all of its occurrences already explained (gray)
    Absent,
    /// Letter in the secret at a different position (yellow)
    Present,
    /// Letter in the correct position (green)
    Correct,
}

impl Feedback {
    /// All symbols, in digit order
    pub const ALL: [Self; 3] = [Self::Absent, Self::Present, Self::Correct];

    /// Base-3 digit of this symbol (0, 1 or 2)
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    /// Symbol for a base-3 digit
    #[inline]
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::Absent),
            1 => Some(Self::Present),
            2 => Some(Self::Correct),
            _ => None,
        }
    }

    /// Parse the wire form: '0', '1' or '2'
    #[inline]
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(Self::Absent),
            '1' => Some(Self::Present),
            '2' => Some(Self::Correct),
            _ => None,
        }
    }

    /// Parse any accepted input form
    ///
    /// Accepts the digits plus the colour letters and squares people paste
    /// from the game: G/g/🟩, Y/y/🟨 and -/_/⬜/⬛.
    #[must_use]
    pub const fn from_input_char(ch: char) -> Option<Self> {
        match ch {
            '2' | 'G' | 'g' | '🟩' => Some(Self::Correct),
            '1' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            '0' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Wire form character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Absent => '0',
            Self::Present => '1',
            Self::Correct => '2',
        }
    }

    /// Coloured square used in terminal output
    #[inline]
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_round_trip() {
        for fb in Feedback::ALL {
            assert_eq!(Feedback::from_digit(fb.digit()), Some(fb));
            assert_eq!(Feedback::from_char(fb.to_char()), Some(fb));
        }
        assert_eq!(Feedback::from_digit(3), None);
    }

    #[test]
    fn wire_form_is_strict() {
        assert_eq!(Feedback::from_char('G'), None);
        assert_eq!(Feedback::from_char('3'), None);
    }

    #[test]
    fn input_form_accepts_colours() {
        assert_eq!(Feedback::from_input_char('g'), Some(Feedback::Correct));
        assert_eq!(Feedback::from_input_char('🟨'), Some(Feedback::Present));
        assert_eq!(Feedback::from_input_char('_'), Some(Feedback::Absent));
        assert_eq!(Feedback::from_input_char('x'), None);
    }
}
