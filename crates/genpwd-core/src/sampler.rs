//! Unbiased integer sampling on top of a [`SecureRandomSource`].
//!
//! `secure_byte % bound` is never used: it over-represents low values
//! whenever `bound` does not divide the sampling domain. Instead every draw
//! at or above the largest multiple of `bound` that fits the domain is
//! rejected and redrawn.
//!
//! Two domains are used:
//! - bytes, for `bound <= 256` (threshold `floor(256 / bound) * bound`)
//! - little-endian `u32` words otherwise (threshold `floor(2^32 / bound) * bound`)
//!
//! Powers of two skip rejection and mask a single draw.

use std::fmt;

use zeroize::Zeroize;

use crate::error::GenerationError;
use crate::random::{OsSecureRandom, SecureRandomSource};

/// Bytes fetched from the source per refill.
const POOL_SIZE: usize = 64;

/// Size of the byte sampling domain.
const BYTE_DOMAIN: u32 = 256;

/// Size of the word sampling domain (`2^32`).
const WORD_DOMAIN: u64 = 1 << 32;

/// Uniform integer sampler over a secure byte source.
///
/// Not `Sync`: each worker owns its own sampler. Buffered bytes are wiped as
/// they are consumed and on drop.
pub struct UniformSampler<S: SecureRandomSource = OsSecureRandom> {
    source: S,
    pool: [u8; POOL_SIZE],
    cursor: usize,
}

impl UniformSampler<OsSecureRandom> {
    /// Sampler backed by the OS CSPRNG.
    #[must_use]
    pub const fn os() -> Self {
        Self::new(OsSecureRandom)
    }
}

impl Default for UniformSampler<OsSecureRandom> {
    fn default() -> Self {
        Self::os()
    }
}

impl<S: SecureRandomSource> UniformSampler<S> {
    /// Wrap a secure byte source.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
            pool: [0u8; POOL_SIZE],
            cursor: POOL_SIZE,
        }
    }

    fn refill(&mut self) -> Result<(), GenerationError> {
        self.pool.zeroize();
        self.source.fill(&mut self.pool)?;
        self.cursor = 0;
        Ok(())
    }

    fn next_byte(&mut self) -> Result<u8, GenerationError> {
        if self.cursor >= POOL_SIZE {
            self.refill()?;
        }
        let slot = self
            .pool
            .get_mut(self.cursor)
            .ok_or_else(|| GenerationError::SecureRandomUnavailable("byte pool exhausted".into()))?;
        let byte = *slot;
        *slot = 0;
        self.cursor = self.cursor.saturating_add(1);
        Ok(byte)
    }

    fn next_word(&mut self) -> Result<u32, GenerationError> {
        let mut bytes = [0u8; 4];
        for b in &mut bytes {
            *b = self.next_byte()?;
        }
        let word = u32::from_le_bytes(bytes);
        bytes.zeroize();
        Ok(word)
    }

    /// Draw a uniformly distributed integer in `[0, bound)`.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::EmptyInput`] if `bound == 0`
    /// - [`GenerationError::SecureRandomUnavailable`] if the source fails
    // `bound >= 2` below, so none of the divisions, products, or the
    // subtraction for the mask can overflow or divide by zero.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn next_int(&mut self, bound: u32) -> Result<u32, GenerationError> {
        match bound {
            0 => return Err(GenerationError::EmptyInput),
            1 => return Ok(0),
            _ => {}
        }

        let mask = bound - 1;

        if bound <= BYTE_DOMAIN {
            if bound.is_power_of_two() {
                return Ok(u32::from(self.next_byte()?) & mask);
            }
            let threshold = (BYTE_DOMAIN / bound) * bound;
            loop {
                let draw = u32::from(self.next_byte()?);
                if draw < threshold {
                    return Ok(draw % bound);
                }
            }
        }

        if bound.is_power_of_two() {
            return Ok(self.next_word()? & mask);
        }
        let wide = u64::from(bound);
        let threshold = (WORD_DOMAIN / wide) * wide;
        loop {
            let draw = self.next_word()?;
            if u64::from(draw) < threshold {
                return Ok(draw % bound);
            }
        }
    }

    /// Pick one element of `items` uniformly.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::EmptyInput`] if `items` is empty
    /// - [`GenerationError::InvalidComposition`] if `items` has more than
    ///   `u32::MAX` elements
    /// - [`GenerationError::SecureRandomUnavailable`] if the source fails
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, GenerationError> {
        let len = choice_bound(items.len())?;
        let index = usize::try_from(self.next_int(len)?)
            .map_err(|_| GenerationError::InvalidComposition("index out of range".into()))?;
        items.get(index).ok_or(GenerationError::EmptyInput)
    }

    /// Fair coin flip.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::SecureRandomUnavailable`] if the source fails.
    pub fn coin(&mut self) -> Result<bool, GenerationError> {
        Ok(self.next_int(2)? == 1)
    }

    /// Uniform percentage in `[0, 100]` (inclusive on both ends).
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::SecureRandomUnavailable`] if the source fails.
    pub fn percent(&mut self) -> Result<u8, GenerationError> {
        let value = self.next_int(101)?;
        u8::try_from(value).map_err(|_| GenerationError::InvalidComposition("percent out of range".into()))
    }
}

/// Sampling bound for a slice of `len` items.
fn choice_bound(len: usize) -> Result<u32, GenerationError> {
    u32::try_from(len).map_err(|_| {
        GenerationError::InvalidComposition(format!(
            "cannot choose among {len} items (limit is {})",
            u32::MAX
        ))
    })
}

impl<S: SecureRandomSource> fmt::Debug for UniformSampler<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniformSampler")
            .field("buffered", &POOL_SIZE.saturating_sub(self.cursor))
            .finish_non_exhaustive()
    }
}

impl<S: SecureRandomSource> Drop for UniformSampler<S> {
    fn drop(&mut self) {
        self.pool.zeroize();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
