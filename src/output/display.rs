//! Display functions for solve results

use super::formatters::{letter_list, placement, probability_bar};
use crate::core::ConstraintSet;
use crate::solver::SolveOutcome;
use colored::Colorize;

/// Print the derived constraint summary
pub fn print_constraints(constraints: &ConstraintSet) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", "Constraints".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    if constraints.is_unconstrained() {
        println!("  No constraints yet: add at least one attempt.");
        return;
    }

    let fixed: Vec<String> = constraints
        .fixed_sorted()
        .into_iter()
        .map(|(pos, letter)| placement(letter, pos))
        .collect();
    let fixed_text = if fixed.is_empty() {
        "none".to_string()
    } else {
        fixed.join(", ")
    };
    println!("  {} {}", "Fixed (🟩):".green(), fixed_text);

    let forbidden: Vec<String> = constraints
        .forbidden_sorted()
        .into_iter()
        .map(|(letter, pos)| placement(letter, pos))
        .collect();
    let forbidden_text = if forbidden.is_empty() {
        "none".to_string()
    } else {
        forbidden.join(", ")
    };
    println!(
        "  {} {}",
        "Misplaced (🟨, present / wrong spot):".yellow(),
        forbidden_text
    );

    println!(
        "  {} {}",
        "Present (at least once):".bright_white(),
        letter_list(&constraints.required_sorted(), "none")
    );
    println!(
        "  {} {}",
        "Excluded (⬛):".bright_black(),
        letter_list(&constraints.excluded_sorted(), "none")
    );
}

/// Print the ranked candidate list, capped at `limit` entries
pub fn print_candidates(outcome: &SolveOutcome, limit: usize) {
    let total = outcome.candidate_count();

    println!("\n{}", "─".repeat(60).cyan());
    println!("{} {}", "Candidates:".bright_cyan().bold(), total);
    println!("{}", "─".repeat(60).cyan());

    if total == 0 {
        println!(
            "  No word matches these constraints in the loaded dictionary."
        );
        println!("  Try widening the dictionary or double-check the colors.");
        return;
    }

    for (i, candidate) in outcome.ranked.iter().take(limit).enumerate() {
        let pct = candidate.probability * 100.0;
        println!(
            "  {:>3}. {}  {} {}  {}",
            i + 1,
            format!("{:<12}", candidate.word.text()).bright_yellow().bold(),
            format!("score {:>4}", candidate.score).cyan(),
            format!("~{pct:5.1}%").bright_white(),
            probability_bar(candidate.probability, 12).green()
        );
    }

    if total > limit {
        println!("  … and {} more possible words.", total - limit);
    }
}

/// Print a full solve result: constraints first, then the ranking
pub fn print_solve_outcome(outcome: &SolveOutcome, limit: usize) {
    print_constraints(&outcome.constraints);
    print_candidates(outcome, limit);
}
