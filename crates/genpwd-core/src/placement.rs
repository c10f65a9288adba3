//! Interleaving of extra characters (digits, specials) into a base string.
//!
//! Each extra carries a position expressed as a percentage of the base
//! length. Percentages are turned into absolute offsets, extras are stably
//! sorted by offset, and a single merge pass over the base emits every extra
//! whose offset matches the current base index before the base character
//! itself. Leftover extras (offset == base length) are flushed at the end.
//!
//! This keeps insertion linear in `base + extras` instead of paying for a
//! mid-string `String::insert` per extra.

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::random::SecureRandomSource;
use crate::sampler::UniformSampler;

/// Highest accepted position percentage.
pub const MAX_PERCENT: u8 = 100;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Where extra characters of one class are placed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Placement {
    /// Each extra gets an independent uniform percentage in `[0, 100]`.
    #[default]
    Random,
    /// All extras at the start (0 %).
    Start,
    /// All extras at the end (100 %).
    End,
    /// Caller-supplied percentages: one value for all extras, or one per extra.
    Fixed(Vec<u8>),
}

impl Placement {
    /// Check that this policy can place `count` extras.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidComposition`] if a `Fixed` list is
    /// empty, has a length other than 1 or `count`, or holds a value above
    /// [`MAX_PERCENT`].
    pub fn validate(&self, count: usize) -> Result<(), GenerationError> {
        let Self::Fixed(values) = self else {
            return Ok(());
        };
        if count == 0 {
            return Ok(());
        }
        if values.is_empty() {
            return Err(GenerationError::InvalidComposition(
                "fixed placement requires at least one position".to_string(),
            ));
        }
        if values.len() != 1 && values.len() != count {
            return Err(GenerationError::InvalidComposition(format!(
                "fixed placement needs 1 or {count} positions, got {}",
                values.len()
            )));
        }
        if let Some(bad) = values.iter().find(|&&v| v > MAX_PERCENT) {
            return Err(GenerationError::InvalidComposition(format!(
                "placement position must be between 0 and {MAX_PERCENT}, got {bad}"
            )));
        }
        Ok(())
    }

    /// Resolve this policy into `count` concrete percentages.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidComposition`] for an invalid `Fixed`
    /// list and propagates sampler failures for `Random`.
    pub fn resolve<S: SecureRandomSource>(
        &self,
        count: usize,
        sampler: &mut UniformSampler<S>,
    ) -> Result<Vec<u8>, GenerationError> {
        match self {
            Self::Random => (0..count).map(|_| sampler.percent()).collect(),
            Self::Start => Ok(vec![0; count]),
            Self::End => Ok(vec![MAX_PERCENT; count]),
            Self::Fixed(values) => {
                self.validate(count)?;
                match values.as_slice() {
                    [single] => Ok(vec![*single; count]),
                    _ => Ok(values.iter().copied().take(count).collect()),
                }
            }
        }
    }
}

/// One character to interleave, with its requested position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extra {
    /// Position as a percentage of the base length (clamped to 100).
    pub position_percent: u8,
    /// The character to insert.
    pub ch: char,
}

impl Extra {
    /// Convenience constructor.
    #[must_use]
    pub const fn new(position_percent: u8, ch: char) -> Self {
        Self {
            position_percent,
            ch,
        }
    }
}

/// Output of [`insert_tracked`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placed {
    /// The merged string.
    pub value: String,
    /// `positions[i]` is the char index of `extras[i]` in `value`.
    pub positions: Vec<usize>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Absolute char offset for `percent` of a base of `base_len` chars:
/// `round(percent / 100 * base_len)`, halves rounded up.
#[must_use]
pub fn offset_for(percent: u8, base_len: usize) -> usize {
    let p = usize::from(percent.min(MAX_PERCENT));
    let scaled = p.saturating_mul(base_len).saturating_add(50) / 100;
    scaled.min(base_len)
}

/// Pair resolved percentages with their characters, in request order.
#[must_use]
pub fn pair_extras(percents: &[u8], chars: &[char]) -> Vec<Extra> {
    percents
        .iter()
        .zip(chars)
        .map(|(&p, &ch)| Extra::new(p, ch))
        .collect()
}

/// Interleave `extras` into `base`.
#[must_use]
pub fn insert(base: &str, extras: &[Extra]) -> String {
    insert_tracked(base, extras).value
}

/// Interleave `extras` into `base`, recording where each extra landed.
///
/// Extras sharing an offset keep their request order.
#[must_use]
pub fn insert_tracked(base: &str, extras: &[Extra]) -> Placed {
    let base_len = base.chars().count();

    let mut order: Vec<(usize, usize)> = extras
        .iter()
        .enumerate()
        .map(|(i, e)| (offset_for(e.position_percent, base_len), i))
        .collect();
    // `sort_by_key` is stable: ties stay in request order.
    order.sort_by_key(|&(offset, _)| offset);

    let extra_bytes: usize = extras.iter().map(|e| e.ch.len_utf8()).sum();
    let mut value = String::with_capacity(base.len().saturating_add(extra_bytes));
    let mut positions = vec![0usize; extras.len()];
    let mut pending = order.into_iter().peekable();
    let mut emitted = 0usize;

    let mut emit = |value: &mut String, extra_index: usize, emitted: &mut usize| {
        if let (Some(extra), Some(slot)) = (extras.get(extra_index), positions.get_mut(extra_index)) {
            value.push(extra.ch);
            *slot = *emitted;
            *emitted = emitted.saturating_add(1);
        }
    };

    for (index, ch) in base.chars().enumerate() {
        while let Some(&(offset, extra_index)) = pending.peek() {
            if offset > index {
                break;
            }
            emit(&mut value, extra_index, &mut emitted);
            pending.next();
        }
        value.push(ch);
        emitted = emitted.saturating_add(1);
    }
    for (_, extra_index) in pending {
        emit(&mut value, extra_index, &mut emitted);
    }

    Placed { value, positions }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
