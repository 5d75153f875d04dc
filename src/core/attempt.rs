//! Attempts: one played word plus its per-letter feedback
//!
//! An attempt pairs a guessed [`Word`] with one [`LetterState`] per letter.
//! Positions are 1-based, matching how the puzzle numbers its cells.

use super::{LetterState, Word, WordError};
use std::fmt;

/// One full guess: a word and a feedback state for each of its letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    word: Word,
    states: Vec<LetterState>,
}

/// Error type for malformed attempts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptError {
    InvalidWord(WordError),
    LengthMismatch { word: usize, pattern: usize },
    BadPatternChar(char),
    MissingSeparator,
}

impl fmt::Display for AttemptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(e) => write!(f, "Invalid attempt word: {e}"),
            Self::LengthMismatch { word, pattern } => write!(
                f,
                "Pattern length {pattern} does not match word length {word}"
            ),
            Self::BadPatternChar(c) => {
                write!(f, "Unknown pattern character {c:?} (use g/y/- or v/j/x)")
            }
            Self::MissingSeparator => {
                write!(f, "Expected WORD=PATTERN, e.g. ENIGME=gy---g")
            }
        }
    }
}

impl std::error::Error for AttemptError {}

impl From<WordError> for AttemptError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

impl Attempt {
    /// Create an attempt from a word and one state per letter
    ///
    /// # Errors
    /// Returns `AttemptError::LengthMismatch` if the state count differs from
    /// the word length.
    pub fn new(word: Word, states: Vec<LetterState>) -> Result<Self, AttemptError> {
        if states.len() != word.len() {
            return Err(AttemptError::LengthMismatch {
                word: word.len(),
                pattern: states.len(),
            });
        }
        Ok(Self { word, states })
    }

    /// Parse an attempt from its `WORD=PATTERN` text form
    ///
    /// The pattern carries one character per letter: `g`/`v` for correct,
    /// `y`/`j` for misplaced, `-`/`x` for absent (emoji tiles also accepted).
    ///
    /// # Errors
    /// Returns `AttemptError` if the separator is missing, the word is not
    /// A-Z, the pattern has unknown characters, or the lengths disagree.
    ///
    /// # Examples
    /// ```
    /// use motus_solver::core::Attempt;
    ///
    /// let attempt = Attempt::parse("ENIGME=g-----").unwrap();
    /// assert_eq!(attempt.word().text(), "ENIGME");
    ///
    /// assert!(Attempt::parse("ENIGME").is_err());
    /// assert!(Attempt::parse("ENIGME=g-").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, AttemptError> {
        let (word_part, pattern_part) = s
            .trim()
            .split_once('=')
            .ok_or(AttemptError::MissingSeparator)?;

        let word = Word::new(word_part.trim())?;

        let states = pattern_part
            .trim()
            .chars()
            .map(|c| LetterState::from_char(c).ok_or(AttemptError::BadPatternChar(c)))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(word, states)
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// The per-letter states, in position order
    #[inline]
    #[must_use]
    pub fn states(&self) -> &[LetterState] {
        &self.states
    }

    /// Iterate over `(position, letter, state)` marks, positions 1-based
    pub fn marks(&self) -> impl Iterator<Item = (usize, u8, LetterState)> + '_ {
        self.word
            .bytes()
            .iter()
            .zip(&self.states)
            .enumerate()
            .map(|(i, (&letter, &state))| (i + 1, letter, state))
    }
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.word)?;
        for state in &self.states {
            write!(f, "{}", state.to_emoji())?;
        }
        Ok(())
    }
}
