//! Interactive CLI mode
//!
//! Line-based interactive solver: enter attempts one at a time and get the
//! re-ranked candidate list after each.

use super::solve::{MIN_TARGET_LENGTH, settle_target_length};
use crate::core::Attempt;
use crate::output::print_solve_outcome;
use crate::solver::solve;
use crate::wordlists::Dictionary;
use std::io::{self, Write};

/// Run the interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(
    dictionary: &Dictionary,
    explicit_length: Option<usize>,
    limit: usize,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Motus Solver - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter each attempt as WORD=PATTERN, one per line:\n");
    println!("  - Use G/g/v/🟩 for green (correct position)");
    println!("  - Use Y/y/j/🟨 for yellow (present, wrong position)");
    println!("  - Use -/x/⬛ for absent\n");
    println!("Example: ENIGME=gy---g\n");
    println!("Commands: 'quit' to exit, 'new' for a new game, 'undo' to drop the last attempt\n");

    let mut attempts: Vec<Attempt> = Vec::new();

    // With an explicit length we can rank openers before any feedback
    if let Some(length) = explicit_length {
        if length >= MIN_TARGET_LENGTH {
            let outcome = solve(length, &attempts, dictionary);
            println!("Opening suggestions for {length}-letter words:");
            print_solve_outcome(&outcome, limit.min(10));
            println!();
        }
    }

    loop {
        let input = get_user_input("Attempt")?;

        match input.as_str() {
            "quit" | "exit" | "q" => {
                println!("Good luck!");
                return Ok(());
            }
            "new" => {
                attempts.clear();
                println!("\n🔄 New game started!\n");
                continue;
            }
            "undo" => {
                if attempts.pop().is_some() {
                    println!("✓ Dropped last attempt ({} left)\n", attempts.len());
                } else {
                    println!("Nothing to undo!\n");
                    continue;
                }
            }
            "" => continue,
            spec => match Attempt::parse(spec) {
                Ok(attempt) => attempts.push(attempt),
                Err(e) => {
                    println!("✗ {e}\n");
                    continue;
                }
            },
        }

        if attempts.is_empty() && explicit_length.is_none() {
            println!("Add at least one attempt (or restart with --length).\n");
            continue;
        }

        let target_length = match settle_target_length(explicit_length, &attempts) {
            Ok(length) => length,
            Err(e) => {
                println!("✗ {e}\n");
                attempts.pop();
                continue;
            }
        };

        let outcome = solve(target_length, &attempts, dictionary);
        print_solve_outcome(&outcome, limit);

        if outcome.candidate_count() == 1 {
            println!(
                "\n🎯 Only one candidate left: {}",
                outcome.ranked[0].word
            );
        }
        println!();
    }
}

/// Prompt for a line of input, trimmed
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}> ");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| format!("Failed to read input: {e}"))?;

    Ok(input.trim().to_string())
}
