//! Per-letter feedback states
//!
//! Each letter of a played word carries one of three feedback states, the
//! Motus equivalent of Wordle's gray/yellow/green tiles.

/// Feedback state for a single letter of an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    /// Letter not in the answer (or all its occurrences already accounted for)
    Absent,
    /// Letter in the answer but not at this position
    Misplaced,
    /// Letter in the answer at exactly this position
    Correct,
}

impl LetterState {
    /// All three states in cycling order
    pub const ALL: [Self; 3] = [Self::Absent, Self::Misplaced, Self::Correct];

    /// Advance to the next state: Absent -> Misplaced -> Correct -> Absent
    ///
    /// This is the state transition a front-end invokes when the user toggles
    /// a letter tile; the engine itself never cycles states.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Absent => Self::Misplaced,
            Self::Misplaced => Self::Correct,
            Self::Correct => Self::Absent,
        }
    }

    /// Parse a state from a pattern character
    ///
    /// Accepts:
    /// - `-`/`_`/`x`/`0`/⬛/⬜ for absent
    /// - `y`/`j`/`1`/🟨 for misplaced (j: jaune)
    /// - `g`/`v`/`2`/🟩 for correct (v: vert)
    ///
    /// Letters are matched case-insensitively.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            '-' | '_' | 'x' | '0' | '⬛' | '⬜' => Some(Self::Absent),
            'y' | 'j' | '1' | '🟨' => Some(Self::Misplaced),
            'g' | 'v' | '2' | '🟩' => Some(Self::Correct),
            _ => None,
        }
    }

    /// Render the state as an emoji tile
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Absent => '⬛',
            Self::Misplaced => '🟨',
            Self::Correct => '🟩',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_covers_all_states() {
        assert_eq!(LetterState::Absent.cycle(), LetterState::Misplaced);
        assert_eq!(LetterState::Misplaced.cycle(), LetterState::Correct);
        assert_eq!(LetterState::Correct.cycle(), LetterState::Absent);
    }

    #[test]
    fn cycle_returns_to_start_after_three() {
        for state in LetterState::ALL {
            assert_eq!(state.cycle().cycle().cycle(), state);
        }
    }

    #[test]
    fn from_char_accepts_ascii_forms() {
        assert_eq!(LetterState::from_char('-'), Some(LetterState::Absent));
        assert_eq!(LetterState::from_char('x'), Some(LetterState::Absent));
        assert_eq!(LetterState::from_char('0'), Some(LetterState::Absent));
        assert_eq!(LetterState::from_char('y'), Some(LetterState::Misplaced));
        assert_eq!(LetterState::from_char('J'), Some(LetterState::Misplaced));
        assert_eq!(LetterState::from_char('g'), Some(LetterState::Correct));
        assert_eq!(LetterState::from_char('V'), Some(LetterState::Correct));
    }

    #[test]
    fn from_char_accepts_emoji() {
        assert_eq!(LetterState::from_char('⬛'), Some(LetterState::Absent));
        assert_eq!(LetterState::from_char('🟨'), Some(LetterState::Misplaced));
        assert_eq!(LetterState::from_char('🟩'), Some(LetterState::Correct));
    }

    #[test]
    fn from_char_rejects_unknown() {
        assert_eq!(LetterState::from_char('z'), None);
        assert_eq!(LetterState::from_char('3'), None);
        assert_eq!(LetterState::from_char(' '), None);
    }

    #[test]
    fn emoji_round_trip() {
        for state in LetterState::ALL {
            assert_eq!(LetterState::from_char(state.to_emoji()), Some(state));
        }
    }
}
