//! Solve entry point
//!
//! One solve is a single synchronous computation: derive constraints from
//! the attempts, filter the dictionary at the target length, score and rank
//! the survivors. No I/O, no shared state, no caching between solves.

use super::scoring::{ScoredCandidate, rank};
use crate::core::{Attempt, ConstraintSet, Word};
use crate::wordlists::Dictionary;

/// Everything one solve produces
///
/// The constraint set is returned even when `ranked` is empty, so a caller
/// can always show why the filter came up short.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub constraints: ConstraintSet,
    pub ranked: Vec<ScoredCandidate>,
}

impl SolveOutcome {
    /// Number of surviving candidates
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.ranked.len()
    }
}

/// Filter the dictionary against all attempt feedback and rank survivors
///
/// Pure function of its inputs: identical arguments always produce
/// identical output. A dictionary with no word of `target_length`, or
/// contradictory feedback, yields zero candidates rather than an error.
/// With no attempts at all, the whole length-filtered dictionary comes back
/// ranked, which is how opening suggestions are produced.
///
/// Callers are expected to pass `target_length >= 3`; shorter puzzles are
/// rejected at the CLI boundary, not here.
#[must_use]
pub fn solve(target_length: usize, attempts: &[Attempt], dictionary: &Dictionary) -> SolveOutcome {
    let constraints = ConstraintSet::from_attempts(attempts, target_length);

    let candidates: Vec<Word> = dictionary
        .words_of_length(target_length)
        .into_iter()
        .filter(|word| constraints.matches(word))
        .collect();

    SolveOutcome {
        constraints,
        ranked: rank(candidates),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(s: &str) -> Attempt {
        Attempt::parse(s).unwrap()
    }

    fn dictionary(texts: &[&str]) -> Dictionary {
        let mut dict = Dictionary::new();
        for t in texts {
            dict.insert(Word::new(*t).unwrap());
        }
        dict
    }

    #[test]
    fn all_correct_leaves_only_the_played_word() {
        // ENIGMES is length 7 and drops out on length; ESPRIT fails the
        // fixed letters
        let dict = dictionary(&["ENIGME", "ENIGMES", "ESPRIT"]);
        let outcome = solve(6, &[attempt("ENIGME=gggggg")], &dict);

        assert_eq!(outcome.candidate_count(), 1);
        assert_eq!(outcome.ranked[0].word.text(), "ENIGME");
        assert_eq!(outcome.constraints.fixed_sorted().len(), 6);
    }

    #[test]
    fn misplaced_plus_absents_prune_by_letters() {
        // E misplaced at 1, everything else absent: requires E off position
        // 1 and bans N,I,G,M,S. ENTRAVE contains N, so nothing survives.
        let dict = dictionary(&["ESPRIT", "ENTRAVE"]);
        let outcome = solve(7, &[attempt("ENIGMES=y------")], &dict);

        assert_eq!(outcome.candidate_count(), 0);
        assert_eq!(
            outcome.constraints.excluded_sorted(),
            vec![b'G', b'I', b'M', b'N', b'S']
        );
        assert_eq!(outcome.constraints.forbidden_sorted(), vec![(b'E', 1)]);
    }

    #[test]
    fn empty_dictionary_reports_zero_candidates_with_constraints() {
        let dict = Dictionary::new();
        let outcome = solve(15, &[attempt("ENIGME=g-----")], &dict);

        assert_eq!(outcome.candidate_count(), 0);
        // Constraints still populated for display
        assert!(!outcome.constraints.is_unconstrained());
    }

    #[test]
    fn no_attempts_ranks_the_full_length_subset() {
        let dict = dictionary(&["ENIGME", "ESPRIT", "MER", "ETOILE"]);
        let outcome = solve(6, &[], &dict);

        assert!(outcome.constraints.is_unconstrained());
        assert_eq!(outcome.candidate_count(), 3);
    }

    #[test]
    fn solve_is_idempotent() {
        let dict = dictionary(&["ENIGME", "ETOILE", "ESPRIT", "ETALER"]);
        let attempts = [attempt("ETALER=g--y--")];

        let first = solve(6, &attempts, &dict);
        let second = solve(6, &attempts, &dict);

        assert_eq!(first.candidate_count(), second.candidate_count());
        for (a, b) in first.ranked.iter().zip(&second.ranked) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn ranked_words_all_satisfy_the_predicate() {
        let dict = Dictionary::builtin();
        let attempts = [attempt("ETALER=gy----")];
        let outcome = solve(6, &attempts, &dict);

        for candidate in &outcome.ranked {
            assert!(
                outcome.constraints.matches(&candidate.word),
                "{} fails its own constraints",
                candidate.word
            );
        }
    }

    #[test]
    fn every_matching_dictionary_word_appears_exactly_once() {
        let dict = Dictionary::builtin();
        let attempts = [attempt("ENTREE=y-----")];
        let outcome = solve(6, &attempts, &dict);

        let expected: Vec<Word> = dict
            .words_of_length(6)
            .into_iter()
            .filter(|w| outcome.constraints.matches(w))
            .collect();

        assert_eq!(outcome.candidate_count(), expected.len());
        for word in &expected {
            let occurrences = outcome
                .ranked
                .iter()
                .filter(|c| c.word == *word)
                .count();
            assert_eq!(occurrences, 1, "{word} should appear exactly once");
        }
    }

    #[test]
    fn contradictory_feedback_yields_empty_result() {
        // Every letter of both words marked absent: nothing can survive
        let dict = dictionary(&["ENIGME", "ETOILE"]);
        let outcome = solve(6, &[attempt("ENIGME=-xxxxx"), attempt("ETOILE=-xxxxx")], &dict);

        assert_eq!(outcome.candidate_count(), 0);
        assert!(!outcome.constraints.is_unconstrained());
    }
}
