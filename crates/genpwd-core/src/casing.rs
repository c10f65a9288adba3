//! Casing of generated values: uniform, per-character coin, title, or
//! block patterns.
//!
//! All transforms are length-preserving: a character whose case mapping
//! expands (e.g. `ß` -> `SS`) is left as is.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::composition::MAX_WORD_COUNT;
use crate::config::Mode;
use crate::error::GenerationError;
use crate::random::SecureRandomSource;
use crate::sampler::UniformSampler;

/// Maximum default block count for syllable mode.
const MAX_SYLLABLE_BLOCKS: usize = 8;

/// Maximum default block count for leet mode.
const MAX_LEET_BLOCKS: usize = 4;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Global casing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CasingMode {
    /// Everything uppercase.
    Upper,
    /// Everything lowercase.
    Lower,
    /// Independent fair coin per character.
    Mixed,
    /// First letter of each word uppercase, the rest lowercase.
    Title,
    /// Contiguous spans, each cased by its [`CasingToken`].
    #[default]
    Blocks,
}

/// Casing rule for one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CasingToken {
    /// Upper-run.
    Upper,
    /// Lower-run.
    Lower,
    /// Title-run.
    Title,
}

impl CasingToken {
    /// Every token, in sampling order.
    pub const ALL: [Self; 3] = [Self::Upper, Self::Lower, Self::Title];

    /// Short symbol used by block editors (`U`, `l`, `T`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Upper => 'U',
            Self::Lower => 'l',
            Self::Title => 'T',
        }
    }

    /// Parse a short symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'U' => Some(Self::Upper),
            'l' | 'L' => Some(Self::Lower),
            'T' => Some(Self::Title),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Character helpers
// ---------------------------------------------------------------------------

fn single_char(mut mapped: impl Iterator<Item = char>, original: char) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => c,
        _ => original,
    }
}

fn upper_char(c: char) -> char {
    single_char(c.to_uppercase(), c)
}

fn lower_char(c: char) -> char {
    single_char(c.to_lowercase(), c)
}

/// Characters that end a word for title casing, besides whitespace. Matches
/// the printable passphrase separators.
const WORD_SEPARATORS: [char; 3] = ['-', '.', '_'];

fn is_word_boundary(ch: char) -> bool {
    ch.is_whitespace() || WORD_SEPARATORS.contains(&ch)
}

/// Title-case `chars` into `out`. Words are delimited by whitespace or a
/// separator; the first alphabetic character of each word is uppercased and
/// later letters lowercased. Digits and specials inside a word do not start a
/// new one.
fn push_title(out: &mut String, chars: impl Iterator<Item = char>) {
    let mut at_word_start = true;
    for ch in chars {
        if is_word_boundary(ch) {
            out.push(ch);
            at_word_start = true;
        } else if ch.is_alphabetic() {
            if at_word_start {
                out.push(upper_char(ch));
                at_word_start = false;
            } else {
                out.push(lower_char(ch));
            }
        } else {
            out.push(ch);
        }
    }
}

fn push_token(out: &mut String, chars: impl Iterator<Item = char>, token: CasingToken) {
    match token {
        CasingToken::Upper => out.extend(chars.map(upper_char)),
        CasingToken::Lower => out.extend(chars.map(lower_char)),
        CasingToken::Title => push_title(out, chars),
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Partition `len` items into `parts` contiguous spans whose sizes differ by
/// at most one; the earliest spans take the remainder.
#[must_use]
pub fn split_spans(len: usize, parts: usize) -> Vec<Range<usize>> {
    let (Some(size), Some(remainder)) = (len.checked_div(parts), len.checked_rem(parts)) else {
        return Vec::new();
    };
    let mut spans = Vec::with_capacity(parts);
    let mut start = 0usize;
    for i in 0..parts {
        let width = size.saturating_add(usize::from(i < remainder));
        let end = start.saturating_add(width);
        spans.push(start..end);
        start = end;
    }
    spans
}

/// Apply `mode` to `value`. `blocks` is only read in [`CasingMode::Blocks`];
/// an empty block list leaves the value unchanged.
///
/// # Errors
///
/// Propagates sampler failures ([`CasingMode::Mixed`] only).
pub fn apply_casing<S: SecureRandomSource>(
    value: &str,
    mode: CasingMode,
    blocks: &[CasingToken],
    sampler: &mut UniformSampler<S>,
) -> Result<String, GenerationError> {
    let mut out = String::with_capacity(value.len());
    match mode {
        CasingMode::Upper => push_token(&mut out, value.chars(), CasingToken::Upper),
        CasingMode::Lower => push_token(&mut out, value.chars(), CasingToken::Lower),
        CasingMode::Title => push_title(&mut out, value.chars()),
        CasingMode::Mixed => {
            for ch in value.chars() {
                out.push(if sampler.coin()? { upper_char(ch) } else { lower_char(ch) });
            }
        }
        CasingMode::Blocks => {
            if blocks.is_empty() {
                return Ok(value.to_string());
            }
            let chars: Vec<char> = value.chars().collect();
            for (span, &token) in split_spans(chars.len(), blocks.len()).into_iter().zip(blocks) {
                if let Some(slice) = chars.get(span) {
                    push_token(&mut out, slice.iter().copied(), token);
                }
            }
        }
    }
    Ok(out)
}

/// Per-word casing for passphrases.
///
/// `Blocks` distributes the words (not characters) over the token spans, so
/// with one token per word every word gets its own rule.
///
/// # Errors
///
/// Propagates sampler failures ([`CasingMode::Mixed`] only).
pub fn apply_word_casing<S: SecureRandomSource>(
    words: &mut [String],
    mode: CasingMode,
    blocks: &[CasingToken],
    sampler: &mut UniformSampler<S>,
) -> Result<(), GenerationError> {
    if mode != CasingMode::Blocks {
        for word in words.iter_mut() {
            *word = apply_casing(word, mode, &[], sampler)?;
        }
        return Ok(());
    }
    for (span, &token) in split_spans(words.len(), blocks.len()).into_iter().zip(blocks) {
        for word in words.get_mut(span).into_iter().flatten() {
            let mut cased = String::with_capacity(word.len());
            push_token(&mut cased, word.chars(), token);
            *word = cased;
        }
    }
    Ok(())
}

/// Default block sequence for a mode, derived from its natural unit count:
///
/// - syllables: `param` is the target length; one block per ~3-letter
///   syllable (1..=8), alternating Title/Lower
/// - passphrase: `param` is the word count; one Title block per word
/// - leet: `param` is the base word length; one block per 4 chars (1..=4),
///   alternating Upper/Lower
#[must_use]
pub fn default_blocks_for_mode(mode: Mode, param: usize) -> Vec<CasingToken> {
    let alternate = |count: usize, first: CasingToken, second: CasingToken| -> Vec<CasingToken> {
        (0..count)
            .map(|i| if i % 2 == 0 { first } else { second })
            .collect()
    };
    match mode {
        Mode::Syllables => alternate(
            param.div_ceil(3).clamp(1, MAX_SYLLABLE_BLOCKS),
            CasingToken::Title,
            CasingToken::Lower,
        ),
        Mode::Passphrase => vec![CasingToken::Title; param.clamp(1, MAX_WORD_COUNT)],
        Mode::Leet => alternate(
            param.div_ceil(4).clamp(1, MAX_LEET_BLOCKS),
            CasingToken::Upper,
            CasingToken::Lower,
        ),
    }
}

/// Same block count as [`default_blocks_for_mode`], each token drawn
/// uniformly from `{Upper, Lower, Title}`.
///
/// # Errors
///
/// Propagates sampler failures.
pub fn randomize_blocks<S: SecureRandomSource>(
    mode: Mode,
    param: usize,
    sampler: &mut UniformSampler<S>,
) -> Result<Vec<CasingToken>, GenerationError> {
    let count = default_blocks_for_mode(mode, param).len();
    (0..count)
        .map(|_| sampler.choice(&CasingToken::ALL).copied())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
