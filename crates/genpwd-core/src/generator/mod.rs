//! Base-string strategies.
//!
//! Each strategy produces the base string a secret is built from:
//! - [`syllables`]: pronounceable consonant/vowel syllables
//! - [`passphrase`]: dictionary words joined by a separator
//! - [`leet`]: deterministic substitution of a caller-supplied word
//!
//! Placement of digits/specials and casing are applied afterwards by the
//! engine, so the strategies stay interchangeable.

pub mod leet;
pub mod passphrase;
pub mod syllables;

use crate::error::GenerationError;
use crate::random::SecureRandomSource;
use crate::sampler::UniformSampler;

/// Full digit set.
pub const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Draw `count` characters from `set`, independently and uniformly.
///
/// # Errors
///
/// Returns [`GenerationError::EmptyInput`] if `set` is empty and `count > 0`,
/// and propagates sampler failures.
pub fn draw_chars<S: SecureRandomSource>(
    set: &[char],
    count: usize,
    sampler: &mut UniformSampler<S>,
) -> Result<Vec<char>, GenerationError> {
    (0..count).map(|_| sampler.choice(set).copied()).collect()
}
