//! Puzzle word representation
//!
//! A Word is an uppercase A-Z word of arbitrary length. Motus-style puzzles
//! are played at varying lengths, so no fixed length is enforced here; length
//! agreement is checked where words meet a target length.

use std::fmt;

/// An uppercase puzzle word
///
/// Guaranteed non-empty and composed only of ASCII uppercase letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacters(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidCharacters(c) => {
                write!(f, "Word must contain only letters A-Z, got {c:?}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is uppercased; accented or otherwise non-A-Z input is rejected
    /// rather than silently repaired (the dictionary loader owns repair).
    ///
    /// # Errors
    /// Returns `WordError` if the input is empty or contains any character
    /// outside ASCII A-Z after uppercasing.
    ///
    /// # Examples
    /// ```
    /// use motus_solver::core::Word;
    ///
    /// let word = Word::new("enigme").unwrap();
    /// assert_eq!(word.text(), "ENIGME");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("d'eau").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters(bad));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed Word; kept alongside `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the word as a byte slice (one byte per letter, all A-Z)
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Get the letter at a specific position (0-based)
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.text.as_bytes().contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
