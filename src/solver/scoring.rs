//! Candidate scoring by letter document frequency
//!
//! A candidate scores the sum, over its distinct letters, of how many
//! candidates contain that letter at least once. Words made of common,
//! distinct letters score highest, a cheap proxy for how much a guess
//! narrows the remaining set.

use crate::core::Word;
use rustc_hash::{FxHashMap, FxHashSet};

/// A candidate word with its score and display probability
///
/// `probability` is a min-max normalization of the score across the current
/// candidate set, not a true probability; it only conveys relative rank.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub word: Word,
    pub score: u32,
    pub probability: f64,
}

/// Letter document frequency over a candidate set
///
/// Counts, for each letter, the number of distinct candidates containing it
/// at least once (not total occurrences).
#[must_use]
pub fn letter_frequencies(candidates: &[Word]) -> FxHashMap<u8, u32> {
    let mut freq = FxHashMap::default();
    for word in candidates {
        let distinct: FxHashSet<u8> = word.bytes().iter().copied().collect();
        for letter in distinct {
            *freq.entry(letter).or_insert(0) += 1;
        }
    }
    freq
}

/// Score one word against a frequency table: sum over its distinct letters
#[must_use]
pub fn word_score(word: &Word, freq: &FxHashMap<u8, u32>) -> u32 {
    let distinct: FxHashSet<u8> = word.bytes().iter().copied().collect();
    distinct
        .into_iter()
        .map(|letter| freq.get(&letter).copied().unwrap_or(0))
        .sum()
}

/// Score, normalize and order a candidate set
///
/// Output is sorted descending by score; ties keep their dictionary
/// encounter order (stable sort). When every candidate scores the same,
/// every probability is 1.0.
#[must_use]
pub fn rank(candidates: Vec<Word>) -> Vec<ScoredCandidate> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let freq = letter_frequencies(&candidates);

    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|word| {
            let score = word_score(&word, &freq);
            ScoredCandidate {
                word,
                score,
                probability: 0.0,
            }
        })
        .collect();

    let min_score = scored.iter().map(|s| s.score).min().unwrap_or(0);
    let max_score = scored.iter().map(|s| s.score).max().unwrap_or(0);

    for candidate in &mut scored {
        candidate.probability = if max_score == min_score {
            1.0
        } else {
            f64::from(candidate.score - min_score) / f64::from(max_score - min_score)
        };
    }

    scored.sort_by(|a, b| b.score.cmp(&a.score));

    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn frequencies_count_documents_not_occurrences() {
        // ENTREE has three E's but contributes 1 to the E count
        let candidates = words(&["ENTREE", "ESPRIT"]);
        let freq = letter_frequencies(&candidates);

        assert_eq!(freq.get(&b'E'), Some(&2)); // In both words
        assert_eq!(freq.get(&b'N'), Some(&1));
        assert_eq!(freq.get(&b'T'), Some(&2));
        assert_eq!(freq.get(&b'Z'), None);
    }

    #[test]
    fn score_sums_distinct_letters_only() {
        let candidates = words(&["ENTREE"]);
        let freq = letter_frequencies(&candidates);

        // Distinct letters E,N,T,R each with frequency 1
        assert_eq!(word_score(&candidates[0], &freq), 4);
    }

    #[test]
    fn rank_orders_descending_by_score() {
        // ETOILE shares letters with everything; a rarer-lettered word sinks
        let candidates = words(&["ETALER", "ETOILE", "ECRASER"]);
        let ranked = rank(candidates);

        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn rank_ties_keep_encounter_order() {
        // Anagram-like sets score identically; order must be input order
        let ranked = rank(words(&["MER", "REM", "ERM"]));
        let texts: Vec<&str> = ranked.iter().map(|s| s.word.text()).collect();
        assert_eq!(texts, vec!["MER", "REM", "ERM"]);
    }

    #[test]
    fn rank_all_equal_scores_give_probability_one() {
        let ranked = rank(words(&["MER", "REM"]));
        assert!(ranked.iter().all(|s| (s.probability - 1.0).abs() < f64::EPSILON));
    }

    #[test]
    fn rank_normalizes_probability_min_max() {
        // AB..-style sets are hard to craft in French; use direct lengths:
        // EAU (E,A,U) vs MER (M,E,R) vs FEU (F,E,U)
        let ranked = rank(words(&["EAU", "MER", "FEU"]));

        let max = ranked.first().unwrap();
        let min = ranked.last().unwrap();
        assert!((max.probability - 1.0).abs() < f64::EPSILON);
        assert!(min.probability.abs() < f64::EPSILON);
        for s in &ranked {
            assert!((0.0..=1.0).contains(&s.probability));
        }
    }

    #[test]
    fn rank_empty_input() {
        assert!(rank(Vec::new()).is_empty());
    }

    #[test]
    fn rank_single_candidate() {
        let ranked = rank(words(&["ENIGME"]));
        assert_eq!(ranked.len(), 1);
        assert!((ranked[0].probability - 1.0).abs() < f64::EPSILON);
        // E,N,I,G,M distinct, each frequency 1
        assert_eq!(ranked[0].score, 5);
    }
}
