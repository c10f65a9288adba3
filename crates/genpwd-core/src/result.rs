//! Output of one generation call.

use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::config::Mode;

/// A generated secret with its mode and entropy estimate.
///
/// The value is wiped on drop. `Debug` is manually implemented to mask it and
/// prevent accidental logging of secret material.
#[derive(Clone, Serialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    value: String,
    #[zeroize(skip)]
    mode: Mode,
    entropy_bits: f64,
}

impl GenerationResult {
    /// Wrap a finished value.
    #[must_use]
    pub const fn new(value: String, mode: Mode, entropy_bits: f64) -> Self {
        Self {
            value,
            mode,
            entropy_bits,
        }
    }

    /// The generated secret.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Mode that produced the value.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Estimated entropy in bits.
    #[must_use]
    pub const fn entropy_bits(&self) -> f64 {
        self.entropy_bits
    }

    /// Take ownership of the value. The caller becomes responsible for
    /// wiping it.
    #[must_use]
    pub fn into_value(mut self) -> String {
        std::mem::take(&mut self.value)
    }
}

impl std::fmt::Debug for GenerationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationResult")
            .field("value", &"***")
            .field("mode", &self.mode)
            .field("entropy_bits", &self.entropy_bits)
            .finish()
    }
}
