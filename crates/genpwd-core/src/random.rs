//! Cryptographically secure byte source.
//!
//! Every random decision in this crate is ultimately fed by a
//! [`SecureRandomSource`]. The only production implementation is
//! [`OsSecureRandom`], which reads from the operating system CSPRNG via
//! `OsRng`. There is no seeding and no fallback: if the OS source fails the
//! error is surfaced as [`GenerationError::SecureRandomUnavailable`].

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::GenerationError;

/// A source of cryptographically secure random bytes.
pub trait SecureRandomSource {
    /// Fill `buffer` entirely with secure random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::SecureRandomUnavailable`] if the underlying
    /// source cannot produce bytes.
    fn fill(&mut self, buffer: &mut [u8]) -> Result<(), GenerationError>;
}

/// OS-level CSPRNG (`getrandom` under `OsRng`).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSecureRandom;

impl SecureRandomSource for OsSecureRandom {
    fn fill(&mut self, buffer: &mut [u8]) -> Result<(), GenerationError> {
        OsRng
            .try_fill_bytes(buffer)
            .map_err(|e| GenerationError::SecureRandomUnavailable(format!("CSPRNG fill failed: {e}")))
    }
}

impl<S: SecureRandomSource + ?Sized> SecureRandomSource for &mut S {
    fn fill(&mut self, buffer: &mut [u8]) -> Result<(), GenerationError> {
        (**self).fill(buffer)
    }
}
