//! Candidate filtering and ranking
//!
//! Applies the derived constraints to the dictionary and orders survivors
//! by the letter-frequency heuristic.

mod engine;
mod scoring;

pub use engine::{SolveOutcome, solve};
pub use scoring::{ScoredCandidate, letter_frequencies, rank, word_score};
