//! Constraint derivation from attempt feedback
//!
//! All feedback across all attempts is folded into one [`ConstraintSet`]:
//! fixed letters per position, forbidden positions per letter, letters
//! required somewhere, and letters excluded everywhere. The set is derived
//! once per solve and never mutated afterwards.
//!
//! # Known limitation
//!
//! Letter occurrence counts are not modeled: a letter is required "at least
//! once", never "exactly twice". Feedback like a second gray E after a green
//! E therefore does not cap the number of E's a candidate may contain. This
//! matches the original tool's behavior and is kept deliberately, since
//! tightening it would change solve results.

use super::{Attempt, LetterState, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Normalized aggregate of all feedback across attempts
///
/// Immutable once built; [`ConstraintSet::matches`] is the candidate
/// predicate applied to every dictionary word of the target length.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    target_length: usize,
    /// Position (1-based) -> letter required there (correct marks)
    fixed: FxHashMap<usize, u8>,
    /// Letter -> positions (1-based) it must not occupy (misplaced marks)
    forbidden: FxHashMap<u8, FxHashSet<usize>>,
    /// Letters that must appear at least once anywhere
    required: FxHashSet<u8>,
    /// Letters that must not appear anywhere
    excluded: FxHashSet<u8>,
}

impl ConstraintSet {
    /// Build the constraint set for one solve
    ///
    /// Walks every `(position, letter, state)` mark across all attempts.
    /// Marks whose position falls outside `1..=target_length` are ignored,
    /// per the collaborator contract; everything else is assumed well-formed.
    ///
    /// A letter marked absent in one place but correct or misplaced in
    /// another (duplicate-letter feedback) stays required and is never
    /// excluded.
    #[must_use]
    pub fn from_attempts(attempts: &[Attempt], target_length: usize) -> Self {
        let mut fixed = FxHashMap::default();
        let mut forbidden: FxHashMap<u8, FxHashSet<usize>> = FxHashMap::default();
        let mut required = FxHashSet::default();
        let mut raw_absent = FxHashSet::default();

        for attempt in attempts {
            for (position, letter, state) in attempt.marks() {
                if position < 1 || position > target_length {
                    continue;
                }

                match state {
                    LetterState::Correct => {
                        fixed.insert(position, letter);
                        required.insert(letter);
                    }
                    LetterState::Misplaced => {
                        required.insert(letter);
                        forbidden.entry(letter).or_default().insert(position);
                    }
                    LetterState::Absent => {
                        raw_absent.insert(letter);
                    }
                }
            }
        }

        // A letter only counts as excluded if no occurrence of it was ever
        // confirmed present; this keeps required and excluded disjoint.
        let excluded = raw_absent.difference(&required).copied().collect();

        Self {
            target_length,
            fixed,
            forbidden,
            required,
            excluded,
        }
    }

    /// Check whether a candidate word satisfies every constraint
    ///
    /// All rules must pass: length, fixed positions, no excluded letter,
    /// every required letter somewhere, no letter on a forbidden position.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        if word.len() != self.target_length {
            return false;
        }

        for (&position, &letter) in &self.fixed {
            if word.char_at(position - 1) != letter {
                return false;
            }
        }

        for &letter in &self.excluded {
            if word.has_letter(letter) {
                return false;
            }
        }

        for &letter in &self.required {
            if !word.has_letter(letter) {
                return false;
            }
        }

        for (&letter, positions) in &self.forbidden {
            for &position in positions {
                if word.char_at(position - 1) == letter {
                    return false;
                }
            }
        }

        true
    }

    /// The word length this set was built for
    #[inline]
    #[must_use]
    pub const fn target_length(&self) -> usize {
        self.target_length
    }

    /// Fixed letters as sorted `(position, letter)` pairs, 1-based
    #[must_use]
    pub fn fixed_sorted(&self) -> Vec<(usize, u8)> {
        let mut pairs: Vec<_> = self.fixed.iter().map(|(&p, &l)| (p, l)).collect();
        pairs.sort_unstable();
        pairs
    }

    /// Forbidden placements as sorted `(letter, position)` pairs, 1-based
    #[must_use]
    pub fn forbidden_sorted(&self) -> Vec<(u8, usize)> {
        let mut pairs: Vec<_> = self
            .forbidden
            .iter()
            .flat_map(|(&l, positions)| positions.iter().map(move |&p| (l, p)))
            .collect();
        pairs.sort_unstable();
        pairs
    }

    /// Required letters, sorted
    #[must_use]
    pub fn required_sorted(&self) -> Vec<u8> {
        let mut letters: Vec<_> = self.required.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Excluded letters, sorted
    #[must_use]
    pub fn excluded_sorted(&self) -> Vec<u8> {
        let mut letters: Vec<_> = self.excluded.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// True when no feedback produced any constraint
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.fixed.is_empty()
            && self.forbidden.is_empty()
            && self.required.is_empty()
            && self.excluded.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn required_contains(&self, letter: u8) -> bool {
        self.required.contains(&letter)
    }

    #[cfg(test)]
    pub(crate) fn excluded_contains(&self, letter: u8) -> bool {
        self.excluded.contains(&letter)
    }
}
