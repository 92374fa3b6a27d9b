//! Display-name to identifier normalization.
//!
//! Identifiers ("slugs") are derived from display strings with a fixed
//! three-step pipeline: strip everything that is not an ASCII letter,
//! whitespace, or digit; collapse whitespace runs into single hyphens;
//! lowercase. The same pipeline is applied to category names, subcategory
//! names, and item titles, so equal display names always collide onto the
//! same identifier regardless of source locale.

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII ranges only: non-ASCII letters and digits are stripped like
// punctuation, keeping identifiers stable across localized inputs.
static NON_ALPHANUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^[:alpha:]\s0-9]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Derive an identifier from a display string.
///
/// Deterministic, pure, and total: every input (including the empty
/// string) produces an identifier, never an error.
///
/// Note that leading/trailing whitespace in the input becomes a leading/
/// trailing hyphen in the output. The whitespace collapse runs after the
/// punctuation strip and does not trim, and downstream repositories depend
/// on the resulting identifiers, so the quirk is kept as-is.
pub fn slug(text: &str) -> String {
    let cleaned = NON_ALPHANUM.replace_all(text, " ");
    let hyphenated = WHITESPACE_RUN.replace_all(&cleaned, "-");
    hyphenated.to_lowercase()
}
