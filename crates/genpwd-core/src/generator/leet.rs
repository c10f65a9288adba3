//! Leet substitution of a caller-supplied word.
//!
//! The substitution is total and order-preserving: every eligible letter is
//! replaced, matched case-insensitively, and nothing is randomized. Any
//! randomness in leet mode comes from the placement and casing steps that
//! follow.

use crate::error::GenerationError;

/// Longest accepted base word, in characters.
pub const MAX_BASE_WORD_LENGTH: usize = 64;

/// Letter -> glyph substitutions.
const LEET_TABLE: [(char, char); 8] = [
    ('a', '@'),
    ('b', '8'),
    ('e', '3'),
    ('g', '9'),
    ('i', '1'),
    ('o', '0'),
    ('s', '5'),
    ('t', '7'),
];

/// Substitute one character (letters matched case-insensitively).
#[must_use]
pub fn substitute(ch: char) -> char {
    let lower = ch.to_ascii_lowercase();
    LEET_TABLE
        .iter()
        .find(|&&(from, _)| from == lower)
        .map_or(ch, |&(_, to)| to)
}

/// Undo a substitution, mapping leet glyphs back to lowercase letters.
///
/// Also folds `$` and `!` (common hand-written variants) so that pattern
/// checks see through them.
#[must_use]
pub fn reverse(ch: char) -> char {
    match ch {
        '$' => 's',
        '!' | '|' => 'i',
        _ => LEET_TABLE
            .iter()
            .find(|&&(_, to)| to == ch)
            .map_or(ch, |&(from, _)| from),
    }
}

/// Apply the substitution table to `base_word`.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidComposition`] if the word is empty,
/// longer than [`MAX_BASE_WORD_LENGTH`], or contains whitespace.
pub fn leetify(base_word: &str) -> Result<String, GenerationError> {
    let length = base_word.chars().count();
    if length == 0 || length > MAX_BASE_WORD_LENGTH {
        return Err(GenerationError::InvalidComposition(format!(
            "leet base word must be 1 to {MAX_BASE_WORD_LENGTH} characters, got {length}"
        )));
    }
    if base_word.chars().any(char::is_whitespace) {
        return Err(GenerationError::InvalidComposition(
            "leet base word may not contain whitespace".to_string(),
        ));
    }
    Ok(base_word.chars().map(substitute).collect())
}
