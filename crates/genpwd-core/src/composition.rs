//! Composition planning: how many characters of each class go where.
//!
//! Character modes (syllables, leet) reserve room for digits and specials
//! inside a fixed target length. Word mode (passphrase) glues extras to word
//! boundaries, so the planner hands out one [`WordSlot`] per extra instead.
//!
//! All validation happens here, before any random byte is spent on
//! generation.

use crate::error::GenerationError;
use crate::placement::{offset_for, Placement};
use crate::random::SecureRandomSource;
use crate::sampler::UniformSampler;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum target length for character modes.
pub const MIN_LENGTH: usize = 4;

/// Maximum target length for character modes (and for leet output).
pub const MAX_LENGTH: usize = 128;

/// Minimum passphrase word count.
pub const MIN_WORD_COUNT: usize = 2;

/// Maximum passphrase word count.
pub const MAX_WORD_COUNT: usize = 12;

/// Maximum digits + specials attached to a passphrase.
pub const MAX_WORD_EXTRAS: usize = 16;

// ---------------------------------------------------------------------------
// Character plans
// ---------------------------------------------------------------------------

/// Result of planning a character-mode secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterPlan {
    /// Letters the generator must produce.
    pub base_length: usize,
    /// Digits to inject.
    pub digits: usize,
    /// Specials to inject.
    pub specials: usize,
}

impl CharacterPlan {
    /// Total injected characters.
    #[must_use]
    pub const fn extras(&self) -> usize {
        self.digits.saturating_add(self.specials)
    }
}

fn checked_extras(digits: usize, specials: usize) -> Result<usize, GenerationError> {
    digits.checked_add(specials).ok_or_else(|| {
        GenerationError::InvalidComposition("digit and special counts overflow".to_string())
    })
}

/// Plan a secret of exactly `length` characters.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidComposition`] if `length` is outside
/// [`MIN_LENGTH`]..=[`MAX_LENGTH`] or `digits + specials > length`.
pub fn plan_characters(
    length: usize,
    digits: usize,
    specials: usize,
) -> Result<CharacterPlan, GenerationError> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(GenerationError::InvalidComposition(format!(
            "length must be between {MIN_LENGTH} and {MAX_LENGTH}, got {length}"
        )));
    }
    let extras = checked_extras(digits, specials)?;
    let base_length = length.checked_sub(extras).ok_or_else(|| {
        GenerationError::InvalidComposition(format!(
            "digits ({digits}) + specials ({specials}) exceed length ({length})"
        ))
    })?;
    Ok(CharacterPlan {
        base_length,
        digits,
        specials,
    })
}

/// Plan extras around an already-fixed base of `base_length` characters
/// (leet mode). The final length is `base_length + digits + specials`.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidComposition`] if the final length would
/// exceed [`MAX_LENGTH`].
pub fn plan_around_base(
    base_length: usize,
    digits: usize,
    specials: usize,
) -> Result<CharacterPlan, GenerationError> {
    let extras = checked_extras(digits, specials)?;
    let total = base_length.saturating_add(extras);
    if total > MAX_LENGTH {
        return Err(GenerationError::InvalidComposition(format!(
            "base ({base_length}) + digits ({digits}) + specials ({specials}) exceed {MAX_LENGTH}"
        )));
    }
    Ok(CharacterPlan {
        base_length,
        digits,
        specials,
    })
}

// ---------------------------------------------------------------------------
// Word plans
// ---------------------------------------------------------------------------

/// Which side of a word an extra is glued to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSide {
    /// Before the word.
    Prefix,
    /// After the word.
    Suffix,
}

/// Attachment point of one passphrase extra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSlot {
    /// Index of the word the extra is glued to.
    pub word_index: usize,
    /// Side of the word.
    pub side: WordSide,
}

/// Result of planning a passphrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPlan {
    /// Number of words to draw.
    pub word_count: usize,
    /// Slots for digits, in request order.
    pub digit_slots: Vec<WordSlot>,
    /// Slots for specials, in request order.
    pub special_slots: Vec<WordSlot>,
}

/// Map a percentage onto the `word_count + 1` word boundaries.
///
/// Boundary `k < word_count` is the front of word `k`; boundary
/// `word_count` is the back of the last word.
#[must_use]
pub fn slot_for(percent: u8, word_count: usize) -> WordSlot {
    let boundary = offset_for(percent, word_count);
    if boundary < word_count {
        WordSlot {
            word_index: boundary,
            side: WordSide::Prefix,
        }
    } else {
        WordSlot {
            word_index: word_count.saturating_sub(1),
            side: WordSide::Suffix,
        }
    }
}

/// Plan a passphrase of `word_count` words with the given extras.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidComposition`] if `word_count` is outside
/// [`MIN_WORD_COUNT`]..=[`MAX_WORD_COUNT`], the extras exceed
/// [`MAX_WORD_EXTRAS`], or a placement policy is invalid.
pub fn plan_words<S: SecureRandomSource>(
    word_count: usize,
    digits: usize,
    specials: usize,
    digit_placement: &Placement,
    special_placement: &Placement,
    sampler: &mut UniformSampler<S>,
) -> Result<WordPlan, GenerationError> {
    if !(MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&word_count) {
        return Err(GenerationError::InvalidComposition(format!(
            "word count must be between {MIN_WORD_COUNT} and {MAX_WORD_COUNT}, got {word_count}"
        )));
    }
    let extras = checked_extras(digits, specials)?;
    if extras > MAX_WORD_EXTRAS {
        return Err(GenerationError::InvalidComposition(format!(
            "at most {MAX_WORD_EXTRAS} digits + specials can be attached to a passphrase, got {extras}"
        )));
    }
    digit_placement.validate(digits)?;
    special_placement.validate(specials)?;

    let to_slots = |percents: Vec<u8>| -> Vec<WordSlot> {
        percents.into_iter().map(|p| slot_for(p, word_count)).collect()
    };
    let digit_slots = to_slots(digit_placement.resolve(digits, sampler)?);
    let special_slots = to_slots(special_placement.resolve(specials, sampler)?);

    Ok(WordPlan {
        word_count,
        digit_slots,
        special_slots,
    })
}

// ---------------------------------------------------------------------------
// Special sets
// ---------------------------------------------------------------------------

/// Validate and de-duplicate the special-character set.
///
/// `custom` overrides `default` when present. `forbidden` lists characters
/// that must not appear (passphrase separators); it is only enforced when
/// specials are requested.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidComposition`] if the set is empty while
/// `specials > 0`, contains alphanumerics or whitespace, or contains a
/// forbidden character while `specials > 0`.
pub fn resolve_special_set(
    custom: Option<&str>,
    default: &str,
    specials: usize,
    forbidden: &[char],
) -> Result<Vec<char>, GenerationError> {
    let raw = custom.unwrap_or(default);
    let mut set: Vec<char> = Vec::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_alphanumeric() || ch.is_whitespace() {
            return Err(GenerationError::InvalidComposition(format!(
                "special set may not contain letters, digits, or whitespace (found {ch:?})"
            )));
        }
        if specials > 0 && forbidden.contains(&ch) {
            return Err(GenerationError::InvalidComposition(format!(
                "special set may not contain the separator {ch:?}"
            )));
        }
        if !set.contains(&ch) {
            set.push(ch);
        }
    }
    if set.is_empty() && specials > 0 {
        return Err(GenerationError::InvalidComposition(
            "special set is empty but specials were requested".to_string(),
        ));
    }
    Ok(set)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
