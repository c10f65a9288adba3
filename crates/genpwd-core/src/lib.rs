//! `genpwd-core`: secret generation and entropy scoring for GenPwd.
//!
//! Produces syllable passwords, dictionary passphrases, and leet variants of
//! a chosen word, with exact digit/special composition, positional placement,
//! and casing. Every random draw goes through an unbiased sampler over the OS
//! CSPRNG; there is no fallback to a weaker generator.
//!
//! No I/O and no async. Dictionaries are supplied by the caller through
//! [`WordSourceResolver`] or taken from the built-in list.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod random;
pub mod sampler;

pub mod casing;
pub mod composition;
pub mod placement;

pub mod config;
pub mod generator;
pub mod wordsource;

pub mod entropy;

pub mod engine;
pub mod result;

pub use casing::{
    apply_casing, default_blocks_for_mode, randomize_blocks, split_spans, CasingMode, CasingToken,
};
pub use composition::{
    plan_characters, plan_words, resolve_special_set, CharacterPlan, WordPlan, MAX_LENGTH,
    MAX_WORD_COUNT, MIN_LENGTH, MIN_WORD_COUNT,
};
pub use config::{GenerationConfig, Mode, ModeConfig};
pub use engine::{generate, randomize_blocks_os, Generator, MAX_BATCH_SIZE};
pub use entropy::{character_bits, estimate_entropy, passphrase_bits, EntropyContext};
pub use error::GenerationError;
pub use generator::leet::leetify;
pub use generator::passphrase::PassphraseSeparator;
pub use generator::syllables::SyllablePolicy;
pub use placement::{insert, offset_for, Extra, Placement};
pub use random::{OsSecureRandom, SecureRandomSource};
pub use result::GenerationResult;
pub use sampler::UniformSampler;
pub use wordsource::{
    builtin, DictionaryRegistry, WordSource, WordSourceResolver, DEFAULT_DICTIONARY,
};
