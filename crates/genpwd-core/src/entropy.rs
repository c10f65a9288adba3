//! Entropy estimation for generated (or user-supplied) secrets.
//!
//! Character modes are scored as `log2(alphabet) * length`, where the
//! alphabet is the sum of the character classes actually present. Three
//! weakness penalties are subtracted:
//!
//! | Category   | Weak characters                                        |
//! |------------|--------------------------------------------------------|
//! | repeats    | each one completing a run of >= 3 identical characters |
//! | sequences  | each one extending a +-1 run (`abc`, `987`) past two   |
//! | denylist   | the fourth onward of a common word, also after de-leet |
//!
//! A character flagged by several categories counts once. Each weak
//! character costs `log2(alphabet)` bits and the total is capped at two
//! thirds of the base, so the score never goes negative and never drops when a
//! character is appended.
//!
//! Passphrases are scored from the dictionary size instead:
//! `log2(words) * word_count + log2(separator_choices)`, plus the bits of any
//! injected digits/specials and of per-letter mixed casing.

use std::iter;

use crate::casing::CasingMode;
use crate::config::{GenerationConfig, Mode, ModeConfig};
use crate::generator::leet;

/// Special-set size assumed when scoring a value without configuration.
pub const UNKNOWN_SPECIAL_SET_SIZE: usize = 32;

const LOWERCASE_SIZE: usize = 26;
const UPPERCASE_SIZE: usize = 26;
const DIGIT_SIZE: usize = 10;
/// Rough size of the non-ASCII alphabet a value may draw from.
const OTHER_SIZE: usize = 100;

/// Shortest run counted as a repeat or a sequence.
const MIN_PATTERN_RUN: usize = 3;

/// Matched characters of a denylisted word before it starts costing.
const MIN_DENYLIST_MATCH: usize = 4;

/// Largest share of the base estimate the penalties may remove.
const MAX_PENALTY_SHARE: f64 = 2.0 / 3.0;

/// Common substrings of leaked passwords.
const DENYLIST: &[&str] = &[
    "password", "passwd", "qwerty", "azerty", "qwertz", "letmein", "welcome", "admin", "login",
    "master", "secret", "dragon", "monkey", "iloveyou", "sunshine", "princess", "football",
    "baseball", "trustno", "abc123", "123456", "654321", "111111", "000000",
];

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// What the estimator knows about how a value was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntropyContext {
    /// Size of the special set in use; `None` assumes
    /// [`UNKNOWN_SPECIAL_SET_SIZE`].
    pub special_set_size: Option<usize>,
    /// Size of the passphrase dictionary.
    pub word_source_size: Option<usize>,
    /// Words in the passphrase; `None` counts separator-delimited segments.
    pub word_count: Option<usize>,
    /// Separator string used to count words when `word_count` is unknown.
    pub separator: Option<String>,
    /// Equally likely separators the passphrase could have used.
    pub separator_choices: usize,
    /// Digits injected into a passphrase.
    pub digits: usize,
    /// Specials injected into a passphrase.
    pub specials: usize,
    /// Casing mode, used for passphrase mixed-case bits.
    pub casing: Option<CasingMode>,
}

impl Default for EntropyContext {
    fn default() -> Self {
        Self {
            special_set_size: None,
            word_source_size: None,
            word_count: None,
            separator: None,
            separator_choices: 1,
            digits: 0,
            specials: 0,
            casing: None,
        }
    }
}

impl EntropyContext {
    /// Context for a character-mode value with a known special set size.
    #[must_use]
    pub fn characters(special_set_size: usize) -> Self {
        Self {
            special_set_size: Some(special_set_size),
            ..Self::default()
        }
    }

    /// Context derived from a configuration. `word_source_size` is only read
    /// for passphrase mode.
    #[must_use]
    pub fn from_config(config: &GenerationConfig, word_source_size: Option<usize>) -> Self {
        let special_set_size = unique_chars(
            config
                .special_set
                .as_deref()
                .unwrap_or_else(|| config.mode.default_specials()),
        );
        match &config.mode {
            ModeConfig::Passphrase {
                word_count,
                separator,
                ..
            } => Self {
                special_set_size: Some(special_set_size),
                word_source_size,
                word_count: Some(*word_count),
                separator: None,
                separator_choices: separator.choice_count(),
                digits: config.digits,
                specials: config.specials,
                casing: Some(config.casing),
            },
            ModeConfig::Syllables { .. } | ModeConfig::Leet { .. } => Self {
                casing: Some(config.casing),
                ..Self::characters(special_set_size)
            },
        }
    }
}

fn unique_chars(set: &str) -> usize {
    let mut seen: Vec<char> = Vec::with_capacity(set.len());
    for c in set.chars() {
        if !seen.contains(&c) {
            seen.push(c);
        }
    }
    seen.len()
}

// ---------------------------------------------------------------------------
// Base estimates
// ---------------------------------------------------------------------------

/// `log2(alphabet_size) * char_count`; zero for trivial alphabets.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn character_bits(alphabet_size: usize, char_count: usize) -> f64 {
    if alphabet_size <= 1 || char_count == 0 {
        return 0.0;
    }
    (alphabet_size as f64).log2() * char_count as f64
}

/// Sum of the class sizes present in `value`.
#[must_use]
pub fn alphabet_size(value: &str, special_set_size: Option<usize>) -> usize {
    let (mut lower, mut upper, mut digit, mut special, mut other) = (false, false, false, false, false);
    for c in value.chars() {
        match c {
            'a'..='z' => lower = true,
            'A'..='Z' => upper = true,
            '0'..='9' => digit = true,
            c if c.is_ascii() => special = true,
            _ => other = true,
        }
    }
    let specials = special_set_size.unwrap_or(UNKNOWN_SPECIAL_SET_SIZE);
    [
        (lower, LOWERCASE_SIZE),
        (upper, UPPERCASE_SIZE),
        (digit, DIGIT_SIZE),
        (special, specials),
        (other, OTHER_SIZE),
    ]
    .iter()
    .filter(|(present, _)| *present)
    .fold(0usize, |acc, (_, size)| acc.saturating_add(*size))
}

/// Passphrase estimate from dictionary size and structure.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn passphrase_bits(
    word_source_size: usize,
    word_count: usize,
    separator_choices: usize,
) -> f64 {
    let per_word = if word_source_size > 1 {
        (word_source_size as f64).log2()
    } else {
        0.0
    };
    let separator = if separator_choices > 1 {
        (separator_choices as f64).log2()
    } else {
        0.0
    };
    per_word * word_count as f64 + separator
}

// ---------------------------------------------------------------------------
// Penalties
// ---------------------------------------------------------------------------

// Each flag below depends only on the characters up to and including its
// position, so appending never clears an earlier flag.

/// Marks each character that completes a run of >= 3 identical characters.
fn repeat_flags(chars: &[char]) -> Vec<bool> {
    let runs = chars
        .windows(MIN_PATTERN_RUN)
        .map(|w| matches!(w, [a, b, c] if a == b && b == c));
    iter::repeat(false)
        .take(MIN_PATTERN_RUN - 1)
        .chain(runs)
        .take(chars.len())
        .collect()
}

/// Ordinal of `c` within its sequence class (digits, case-folded letters).
fn sequence_key(c: char) -> Option<(bool, u32)> {
    if c.is_ascii_digit() {
        Some((false, u32::from(c)))
    } else if c.is_ascii_alphabetic() {
        Some((true, u32::from(c.to_ascii_lowercase())))
    } else {
        None
    }
}

/// `Some(true)` for a +1 step, `Some(false)` for a -1 step.
fn sequence_step(pair: &[char]) -> Option<bool> {
    match pair {
        [a, b] => match (sequence_key(*a), sequence_key(*b)) {
            (Some((class_a, a)), Some((class_b, b))) if class_a == class_b => {
                if a.checked_add(1) == Some(b) {
                    Some(true)
                } else if b.checked_add(1) == Some(a) {
                    Some(false)
                } else {
                    None
                }
            }
            _ => None,
        },
        _ => None,
    }
}

/// Marks each character that extends an ascending/descending run (`abcd`,
/// `4321`) past its second character.
fn sequence_flags(chars: &[char]) -> Vec<bool> {
    let steps: Vec<Option<bool>> = chars.windows(2).map(sequence_step).collect();
    let runs = steps
        .windows(2)
        .map(|w| matches!(w, [Some(a), Some(b)] if a == b));
    iter::repeat(false)
        .take(MIN_PATTERN_RUN - 1)
        .chain(runs)
        .take(chars.len())
        .collect()
}

/// Whether `prefix` ends with the first `m` characters of `entry` for some
/// `m >= MIN_DENYLIST_MATCH`.
fn ends_with_entry_prefix(prefix: &[char], entry: &str) -> bool {
    (MIN_DENYLIST_MATCH..=entry.len()).any(|m| {
        prefix
            .len()
            .checked_sub(m)
            .and_then(|start| prefix.get(start..))
            .is_some_and(|tail| tail.iter().copied().eq(entry.chars().take(m)))
    })
}

/// Marks each character from the fourth onward of a denylisted word, matched
/// on the case-folded value and on its de-leeted form.
fn denylist_flags(chars: &[char]) -> Vec<bool> {
    let folded: Vec<char> = chars.iter().map(char::to_ascii_lowercase).collect();
    let unleeted: Vec<char> = chars
        .iter()
        .map(|c| leet::reverse(*c).to_ascii_lowercase())
        .collect();
    (1..=chars.len())
        .map(|end| {
            [&folded, &unleeted].iter().any(|stream| {
                stream
                    .get(..end)
                    .is_some_and(|prefix| DENYLIST.iter().any(|e| ends_with_entry_prefix(prefix, e)))
            })
        })
        .collect()
}

/// Characters flagged by at least one weakness category.
fn weak_count(chars: &[char]) -> usize {
    let repeats = repeat_flags(chars);
    let sequences = sequence_flags(chars);
    let denied = denylist_flags(chars);
    repeats
        .iter()
        .zip(&sequences)
        .zip(&denied)
        .filter(|((r, s), d)| **r || **s || **d)
        .count()
}

/// Character-mode estimate with penalties.
#[allow(clippy::cast_precision_loss)]
fn character_estimate(value: &str, context: &EntropyContext) -> f64 {
    let chars: Vec<char> = value.chars().collect();
    let base = character_bits(alphabet_size(value, context.special_set_size), chars.len());
    if base <= 0.0 {
        return 0.0;
    }
    let per_char = base / chars.len() as f64;
    let penalty = (weak_count(&chars) as f64 * per_char).min(base * MAX_PENALTY_SHARE);
    base - penalty
}

/// Passphrase estimate including injected extras and mixed casing.
#[allow(clippy::cast_precision_loss)]
fn passphrase_estimate(value: &str, context: &EntropyContext) -> f64 {
    let Some(source_size) = context.word_source_size else {
        // Without the dictionary the value is just a string.
        return character_estimate(value, context);
    };
    let word_count = context.word_count.unwrap_or_else(|| match context.separator.as_deref() {
        Some(sep) if !sep.is_empty() => value.split(sep).count(),
        _ => value.split_whitespace().count(),
    });

    let mut bits = passphrase_bits(source_size, word_count, context.separator_choices);
    bits += character_bits(DIGIT_SIZE, context.digits);
    bits += character_bits(
        context.special_set_size.unwrap_or(UNKNOWN_SPECIAL_SET_SIZE),
        context.specials,
    );
    if context.casing == Some(CasingMode::Mixed) {
        bits += value.chars().filter(|c| c.is_alphabetic()).count() as f64;
    }
    bits
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Estimate the entropy of `value` in bits. Always finite and `>= 0`.
#[must_use]
pub fn estimate_entropy(value: &str, mode: Mode, context: &EntropyContext) -> f64 {
    let bits = match mode {
        Mode::Passphrase => passphrase_estimate(value, context),
        Mode::Syllables | Mode::Leet => character_estimate(value, context),
    };
    if bits.is_finite() {
        bits.max(0.0)
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
