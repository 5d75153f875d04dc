//! Motus Solver
//!
//! A solving aid for Motus-style word puzzles (variable-length French
//! Wordle): feed it your attempts with their per-letter feedback and it
//! filters the dictionary down to consistent candidates, ranked by a
//! letter-frequency heuristic.
//!
//! # Quick Start
//!
//! ```rust
//! use motus_solver::core::Attempt;
//! use motus_solver::solver::solve;
//! use motus_solver::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::builtin();
//! let attempts = vec![Attempt::parse("ENIGME=g----y").unwrap()];
//!
//! let outcome = solve(6, &attempts, &dictionary);
//! for candidate in outcome.ranked.iter().take(5) {
//!     println!("{} (score {})", candidate.word, candidate.score);
//! }
//! ```

// Core domain types
pub mod core;

// Filtering and ranking
pub mod solver;

// Word lists and dictionary handling
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
