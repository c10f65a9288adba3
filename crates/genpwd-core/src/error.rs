//! Error types for `genpwd-core`.

use thiserror::Error;

/// Errors produced while planning, generating, or scoring a secret.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Requested composition cannot be satisfied (counts exceed the target
    /// length, out-of-range bounds, bad placement values, bad special set).
    #[error("invalid composition: {0}")]
    InvalidComposition(String),

    /// The sampler was asked to choose from zero candidates.
    #[error("cannot sample from an empty input")]
    EmptyInput,

    /// The word source is missing, empty, undersized, or malformed.
    #[error("dictionary unavailable: {0}")]
    DictionaryUnavailable(String),

    /// The host's secure entropy source failed. Never degraded to a weaker RNG.
    #[error("secure random source unavailable: {0}")]
    SecureRandomUnavailable(String),

    /// A serialized configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}
