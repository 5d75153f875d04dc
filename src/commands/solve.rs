//! One-shot solve command
//!
//! Parses attempt specs, settles the target length, and runs the engine.

use crate::core::Attempt;
use crate::solver::{SolveOutcome, solve};
use crate::wordlists::Dictionary;

/// Shortest playable word length; the engine itself never checks this
pub const MIN_TARGET_LENGTH: usize = 3;

/// Default cap on displayed candidates
pub const DEFAULT_DISPLAY_LIMIT: usize = 80;

/// Configuration for a one-shot solve
pub struct SolveConfig {
    /// Raw `WORD=PATTERN` attempt specs, in play order
    pub attempts: Vec<String>,
    /// Explicit target length; inferred from the first attempt when absent
    pub target_length: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(attempts: Vec<String>) -> Self {
        Self {
            attempts,
            target_length: None,
        }
    }
}

/// Parse the attempts, settle the target length, and solve
///
/// # Errors
///
/// Returns an error if:
/// - Any attempt spec is malformed
/// - The target length cannot be determined (no explicit length and no
///   attempts)
/// - The target length is below [`MIN_TARGET_LENGTH`]
pub fn run_solve(config: &SolveConfig, dictionary: &Dictionary) -> Result<SolveOutcome, String> {
    let attempts = parse_attempts(&config.attempts)?;
    let target_length = settle_target_length(config.target_length, &attempts)?;

    Ok(solve(target_length, &attempts, dictionary))
}

/// Parse raw `WORD=PATTERN` specs into attempts
///
/// # Errors
/// Returns the first parse failure, naming the offending spec.
pub fn parse_attempts(specs: &[String]) -> Result<Vec<Attempt>, String> {
    specs
        .iter()
        .map(|spec| Attempt::parse(spec).map_err(|e| format!("Attempt '{spec}': {e}")))
        .collect()
}

/// Use the explicit length when given, else the first attempt's word length
///
/// # Errors
/// Returns an error when no length can be determined or the settled length
/// is shorter than [`MIN_TARGET_LENGTH`].
pub fn settle_target_length(
    explicit: Option<usize>,
    attempts: &[Attempt],
) -> Result<usize, String> {
    let length = explicit
        .or_else(|| attempts.first().map(|a| a.word().len()))
        .ok_or_else(|| {
            "Cannot determine the word length: pass --length or at least one attempt".to_string()
        })?;

    if length < MIN_TARGET_LENGTH {
        return Err(format!(
            "Word length must be at least {MIN_TARGET_LENGTH}, got {length}"
        ));
    }

    Ok(length)
}
