//! Formatting utilities for terminal output

use crate::core::LetterState;

/// Format a sequence of letter states as emoji tiles
#[must_use]
pub fn states_to_emoji(states: &[LetterState]) -> String {
    states.iter().map(|s| s.to_emoji()).collect()
}

/// Format a constraint placement like `E1` (letter then 1-based position)
#[must_use]
pub fn placement(letter: u8, position: usize) -> String {
    format!("{}{position}", letter as char)
}

/// Render a sorted letter list as `A, B, C`, or a placeholder when empty
#[must_use]
pub fn letter_list(letters: &[u8], empty: &str) -> String {
    if letters.is_empty() {
        return empty.to_string();
    }
    letters
        .iter()
        .map(|&l| (l as char).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a display probability (0..=1) as a short bar
#[must_use]
pub fn probability_bar(probability: f64, width: usize) -> String {
    create_progress_bar(probability, 1.0, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_to_emoji_mixed() {
        let states = [
            LetterState::Correct,
            LetterState::Misplaced,
            LetterState::Absent,
        ];
        assert_eq!(states_to_emoji(&states), "🟩🟨⬛");
    }

    #[test]
    fn placement_formats_letter_then_position() {
        assert_eq!(placement(b'E', 1), "E1");
        assert_eq!(placement(b'S', 12), "S12");
    }

    #[test]
    fn letter_list_joins_or_placeholders() {
        assert_eq!(letter_list(&[b'A', b'E', b'S'], "none"), "A, E, S");
        assert_eq!(letter_list(&[], "none"), "none");
    }

    #[test]
    fn probability_bar_bounds() {
        assert_eq!(probability_bar(0.0, 10), "░░░░░░░░░░");
        assert_eq!(probability_bar(1.0, 10), "██████████");
        assert_eq!(probability_bar(0.5, 10).chars().filter(|&c| c == '█').count(), 5);
    }

    #[test]
    fn progress_bar_clamps_overflow() {
        assert_eq!(create_progress_bar(2.0, 1.0, 5), "█████");
    }
}
