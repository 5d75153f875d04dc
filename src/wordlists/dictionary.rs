//! The dictionary value passed into each solve
//!
//! A Dictionary is a caller-owned, insertion-ordered, deduplicated set of
//! normalized uppercase words. There is no hidden global word set: loading a
//! file or merging pasted text mutates the value the caller holds, and the
//! solver receives it as an immutable snapshot.

use super::embedded::BUILTIN;
use super::loader::normalize_word;
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Deduplicated set of uppercase words, preserving insertion order
///
/// Insertion order matters downstream: candidates that tie on score keep
/// their dictionary encounter order in the ranking.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    seen: FxHashSet<String>,
}

impl Dictionary {
    /// Create an empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dictionary seeded with the embedded builtin word list
    #[must_use]
    pub fn builtin() -> Self {
        let mut dict = Self::new();
        for &entry in BUILTIN {
            if let Ok(word) = Word::new(entry) {
                dict.insert(word);
            }
        }
        dict
    }

    /// Insert a word, returning true if it was not already present
    pub fn insert(&mut self, word: Word) -> bool {
        if self.seen.contains(word.text()) {
            return false;
        }
        self.seen.insert(word.text().to_string());
        self.words.push(word);
        true
    }

    /// Merge free-form text into the dictionary, one word per whitespace
    /// chunk, normalizing each entry and skipping anything unusable
    ///
    /// Returns the number of newly added words.
    pub fn merge_text(&mut self, text: &str) -> usize {
        let mut added = 0;
        for chunk in text.split_whitespace() {
            let Some(normalized) = normalize_word(chunk) else {
                continue;
            };
            let Ok(word) = Word::new(normalized) else {
                continue;
            };
            if self.insert(word) {
                added += 1;
            }
        }
        added
    }

    /// Load a word list file (one word per line) and merge it
    ///
    /// Returns the number of newly added words.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> io::Result<usize> {
        let content = fs::read_to_string(path)?;
        Ok(self.merge_text(&content))
    }

    /// All words of the given length, in encounter order
    ///
    /// Falls back to the builtin list when the dictionary holds no word of
    /// that length, so a custom list of the wrong length still leaves the
    /// solver something to chew on. The result can still be empty.
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Vec<Word> {
        let selected: Vec<Word> = self
            .words
            .iter()
            .filter(|w| w.len() == length)
            .cloned()
            .collect();

        if !selected.is_empty() {
            return selected;
        }

        BUILTIN
            .iter()
            .filter(|w| w.len() == length)
            .filter_map(|&w| Word::new(w).ok())
            .collect()
    }

    /// Total number of words loaded
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no words are loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check membership of an already-normalized uppercase word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    /// Iterate over all words in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
