//! Strongly typed generation configuration.
//!
//! A [`GenerationConfig`] is immutable per call. Its mode-specific settings
//! live in the [`ModeConfig`] sum type so that, e.g., a passphrase request
//! cannot carry a syllable policy. The JSON shape is camelCase with the mode
//! discriminant inlined:
//!
//! ```json
//! { "mode": "passphrase", "wordCount": 4, "separator": "hyphen", "digits": 1 }
//! ```
//!
//! Every field except `mode` has a default.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::casing::{default_blocks_for_mode, CasingMode, CasingToken};
use crate::error::GenerationError;
use crate::generator::passphrase::{PassphraseSeparator, PASSPHRASE_SPECIALS};
use crate::generator::syllables::{self, SyllablePolicy};
use crate::placement::Placement;
use crate::wordsource::DEFAULT_DICTIONARY;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Default syllable-mode length.
pub const DEFAULT_LENGTH: usize = 20;

/// Default passphrase word count.
pub const DEFAULT_WORD_COUNT: usize = 5;

/// Default digit count.
pub const DEFAULT_DIGITS: usize = 2;

/// Default special count.
pub const DEFAULT_SPECIALS: usize = 2;

const fn default_length() -> usize {
    DEFAULT_LENGTH
}
const fn default_word_count() -> usize {
    DEFAULT_WORD_COUNT
}
const fn default_digits() -> usize {
    DEFAULT_DIGITS
}
const fn default_specials() -> usize {
    DEFAULT_SPECIALS
}
fn default_dictionary() -> String {
    DEFAULT_DICTIONARY.into()
}

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Generation mode discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    /// Pronounceable consonant/vowel syllables.
    Syllables,
    /// Dictionary words joined by a separator.
    Passphrase,
    /// Leet substitution of a caller-supplied word.
    Leet,
}

impl Mode {
    /// Wire name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Syllables => "syllables",
            Self::Passphrase => "passphrase",
            Self::Leet => "leet",
        }
    }

    /// `true` for modes that build a character string (syllables, leet).
    #[must_use]
    pub const fn is_character_mode(self) -> bool {
        !matches!(self, Self::Passphrase)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mode-specific settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum ModeConfig {
    /// Syllable password of an exact length.
    #[serde(rename_all = "camelCase")]
    Syllables {
        /// Final length in characters, extras included.
        #[serde(default = "default_length")]
        length: usize,
        /// Letter/special policy.
        #[serde(default)]
        policy: SyllablePolicy,
    },
    /// Passphrase of `word_count` dictionary words.
    #[serde(rename_all = "camelCase")]
    Passphrase {
        /// Number of words.
        #[serde(default = "default_word_count")]
        word_count: usize,
        /// Separator between words.
        #[serde(default)]
        separator: PassphraseSeparator,
        /// Dictionary key passed to the resolver.
        #[serde(default = "default_dictionary")]
        dictionary: String,
    },
    /// Leet variant of `base_word`.
    #[serde(rename_all = "camelCase")]
    Leet {
        /// Word to substitute.
        base_word: String,
    },
}

impl ModeConfig {
    /// The discriminant.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Syllables { .. } => Mode::Syllables,
            Self::Passphrase { .. } => Mode::Passphrase,
            Self::Leet { .. } => Mode::Leet,
        }
    }

    /// The mode's natural unit count: target length, word count, or base
    /// word length. Feeds [`default_blocks_for_mode`].
    #[must_use]
    pub fn natural_units(&self) -> usize {
        match self {
            Self::Syllables { length, .. } => *length,
            Self::Passphrase { word_count, .. } => *word_count,
            Self::Leet { base_word } => base_word.chars().count(),
        }
    }

    /// Special set used when the configuration does not override it.
    #[must_use]
    pub const fn default_specials(&self) -> &'static str {
        match self {
            Self::Syllables { policy, .. } => policy.default_specials(),
            Self::Passphrase { .. } => PASSPHRASE_SPECIALS,
            Self::Leet { .. } => syllables::DEFAULT_SPECIALS,
        }
    }

    /// Characters a custom special set may not contain.
    #[must_use]
    pub fn reserved_chars(&self) -> Vec<char> {
        match self {
            Self::Passphrase { separator, .. } => separator.reserved_chars(),
            Self::Syllables { .. } | Self::Leet { .. } => Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// GenerationConfig
// ---------------------------------------------------------------------------

/// Full per-call configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Mode and its settings.
    #[serde(flatten)]
    pub mode: ModeConfig,

    /// Digits to inject.
    #[serde(default = "default_digits")]
    pub digits: usize,

    /// Specials to inject.
    #[serde(default = "default_specials")]
    pub specials: usize,

    /// Custom special set; `None` uses the mode's default set.
    #[serde(default)]
    pub special_set: Option<String>,

    /// Placement of digits.
    #[serde(default)]
    pub digit_placement: Placement,

    /// Placement of specials.
    #[serde(default)]
    pub special_placement: Placement,

    /// Casing strategy.
    #[serde(default)]
    pub casing: CasingMode,

    /// Explicit block sequence for [`CasingMode::Blocks`].
    #[serde(default)]
    pub blocks: Option<Vec<CasingToken>>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::syllables(DEFAULT_LENGTH)
    }
}

impl GenerationConfig {
    fn with_mode(mode: ModeConfig) -> Self {
        Self {
            mode,
            digits: DEFAULT_DIGITS,
            specials: DEFAULT_SPECIALS,
            special_set: None,
            digit_placement: Placement::Random,
            special_placement: Placement::Random,
            casing: CasingMode::Blocks,
            blocks: None,
        }
    }

    /// Syllable mode, standard policy, default extras.
    #[must_use]
    pub fn syllables(length: usize) -> Self {
        Self::with_mode(ModeConfig::Syllables {
            length,
            policy: SyllablePolicy::Standard,
        })
    }

    /// Passphrase mode over the built-in dictionary, hyphen separator, no extras.
    #[must_use]
    pub fn passphrase(word_count: usize) -> Self {
        Self {
            digits: 0,
            specials: 0,
            ..Self::with_mode(ModeConfig::Passphrase {
                word_count,
                separator: PassphraseSeparator::Hyphen,
                dictionary: default_dictionary(),
            })
        }
    }

    /// Leet mode, no extras, casing left as substituted.
    #[must_use]
    pub fn leet(base_word: impl Into<String>) -> Self {
        Self {
            digits: 0,
            specials: 0,
            casing: CasingMode::Blocks,
            blocks: Some(Vec::new()),
            ..Self::with_mode(ModeConfig::Leet {
                base_word: base_word.into(),
            })
        }
    }

    /// Set digit and special counts.
    #[must_use]
    pub fn with_extras(mut self, digits: usize, specials: usize) -> Self {
        self.digits = digits;
        self.specials = specials;
        self
    }

    /// Set digit and special placement policies.
    #[must_use]
    pub fn with_placement(mut self, digits: Placement, specials: Placement) -> Self {
        self.digit_placement = digits;
        self.special_placement = specials;
        self
    }

    /// Set the casing mode (and clear explicit blocks).
    #[must_use]
    pub fn with_casing(mut self, casing: CasingMode) -> Self {
        self.casing = casing;
        self.blocks = None;
        self
    }

    /// Use block casing with an explicit token sequence.
    #[must_use]
    pub fn with_blocks(mut self, blocks: Vec<CasingToken>) -> Self {
        self.casing = CasingMode::Blocks;
        self.blocks = Some(blocks);
        self
    }

    /// Override the special set.
    #[must_use]
    pub fn with_special_set(mut self, set: impl Into<String>) -> Self {
        self.special_set = Some(set.into());
        self
    }

    /// The mode discriminant.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode.mode()
    }

    /// Block sequence used for [`CasingMode::Blocks`]: the explicit one, or
    /// the mode default.
    #[must_use]
    pub fn effective_blocks(&self) -> Vec<CasingToken> {
        self.blocks
            .clone()
            .unwrap_or_else(|| default_blocks_for_mode(self.mode(), self.mode.natural_units()))
    }

    /// Parse a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Config`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, GenerationError> {
        serde_json::from_str(json).map_err(|e| GenerationError::Config(e.to_string()))
    }

    /// Serialize to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Config`] if serialization fails.
    pub fn to_json(&self) -> Result<String, GenerationError> {
        serde_json::to_string(self).map_err(|e| GenerationError::Config(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
