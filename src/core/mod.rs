//! Core domain types for the solving aid
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod attempt;
mod constraints;
mod letter_state;
mod word;

pub use attempt::{Attempt, AttemptError};
pub use constraints::ConstraintSet;
pub use letter_state::LetterState;
pub use word::{Word, WordError};
