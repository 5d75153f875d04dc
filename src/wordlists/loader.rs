//! Word normalization for dictionary loading
//!
//! French word lists arrive with diacritics, hyphens and apostrophes
//! (ÉTÉ, GRAND-MÈRE, AUJOURD'HUI). The normalization contract is: strip
//! diacritics via Unicode NFD decomposition and combining-mark removal, drop
//! hyphens and apostrophes, uppercase, and reject anything that still
//! contains a character outside A-Z.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize one raw dictionary entry
///
/// Returns `None` for entries that are empty after trimming or that cannot
/// be reduced to pure A-Z (digits, punctuation, non-Latin scripts).
///
/// # Examples
/// ```
/// use motus_solver::wordlists::loader::normalize_word;
///
/// assert_eq!(normalize_word("étoile"), Some("ETOILE".to_string()));
/// assert_eq!(normalize_word("grand-mère"), Some("GRANDMERE".to_string()));
/// assert_eq!(normalize_word("aujourd'hui"), Some("AUJOURDHUI".to_string()));
/// assert_eq!(normalize_word("mot3"), None);
/// ```
#[must_use]
pub fn normalize_word(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let simple: String = trimmed
        .to_uppercase()
        .nfd()
        .filter(|&c| !is_combining_mark(c))
        .filter(|&c| c != '-' && c != '\'' && c != '’')
        .collect();

    if simple.is_empty() || !simple.chars().all(|c| c.is_ascii_uppercase()) {
        return None;
    }

    Some(simple)
}
