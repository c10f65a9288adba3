//! Word-based passphrases.
//!
//! Words are drawn independently and uniformly from a [`WordSource`]
//! (repeats across draws are allowed), cased per word, decorated with the
//! planned digits/specials, and joined with the separator. Extras are glued
//! to words, so splitting on the separator always yields exactly
//! `word_count` segments.

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::casing::{apply_word_casing, CasingMode, CasingToken};
use crate::composition::{WordPlan, WordSide, WordSlot};
use crate::error::GenerationError;
use crate::random::SecureRandomSource;
use crate::sampler::UniformSampler;
use crate::wordsource::WordSource;

/// Separators [`PassphraseSeparator::Random`] picks from.
const PRINTABLE_SEPARATORS: [&str; 4] = ["-", " ", ".", "_"];

/// Special set for passphrases when the caller does not supply one. Holds
/// no separator character.
pub const PASSPHRASE_SPECIALS: &str = "!#$%&*+=?@^";

/// Separator between words in a passphrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PassphraseSeparator {
    /// Hyphen: `word-word-word`
    #[default]
    Hyphen,
    /// Space: `word word word`
    Space,
    /// Dot: `word.word.word`
    Dot,
    /// Underscore: `word_word_word`
    Underscore,
    /// No separator: `wordwordword`
    None,
    /// One of hyphen, space, dot, underscore, drawn once per passphrase.
    Random,
}

impl PassphraseSeparator {
    /// Every separator string this variant can produce.
    #[must_use]
    pub const fn choices(self) -> &'static [&'static str] {
        match self {
            Self::Hyphen => &["-"],
            Self::Space => &[" "],
            Self::Dot => &["."],
            Self::Underscore => &["_"],
            Self::None => &[""],
            Self::Random => &PRINTABLE_SEPARATORS,
        }
    }

    /// Number of equally likely separator strings.
    #[must_use]
    pub const fn choice_count(self) -> usize {
        self.choices().len()
    }

    /// Characters that may appear as a separator, and therefore may not be
    /// used as specials.
    #[must_use]
    pub fn reserved_chars(self) -> Vec<char> {
        self.choices().iter().flat_map(|s| s.chars()).collect()
    }

    /// Resolve to a concrete separator string.
    ///
    /// # Errors
    ///
    /// Propagates sampler failures.
    pub fn pick<S: SecureRandomSource>(
        self,
        sampler: &mut UniformSampler<S>,
    ) -> Result<&'static str, GenerationError> {
        match self.choices() {
            [single] => Ok(*single),
            many => sampler.choice(many).copied(),
        }
    }
}

/// Inputs of one passphrase draw, already planned and validated.
#[derive(Debug)]
pub struct PassphraseRequest<'a> {
    /// Word list to draw from.
    pub source: &'a WordSource,
    /// Word count and extra slots.
    pub plan: &'a WordPlan,
    /// Concrete separator.
    pub separator: &'a str,
    /// Digits, one per `plan.digit_slots` entry.
    pub digits: &'a [char],
    /// Specials, one per `plan.special_slots` entry.
    pub specials: &'a [char],
    /// Casing applied per word.
    pub casing: CasingMode,
    /// Block tokens for [`CasingMode::Blocks`].
    pub blocks: &'a [CasingToken],
}

/// Draw and assemble a passphrase.
///
/// # Errors
///
/// Returns [`GenerationError::DictionaryUnavailable`] if the source is empty
/// and propagates sampler failures.
pub fn generate_passphrase<S: SecureRandomSource>(
    request: &PassphraseRequest<'_>,
    sampler: &mut UniformSampler<S>,
) -> Result<String, GenerationError> {
    let plan = request.plan;
    if request.source.is_empty() {
        return Err(GenerationError::DictionaryUnavailable(
            "word source is empty".to_string(),
        ));
    }

    let mut words: Vec<String> = (0..plan.word_count)
        .map(|_| sampler.choice(request.source.words()).cloned())
        .collect::<Result<_, _>>()?;
    apply_word_casing(&mut words, request.casing, request.blocks, sampler)?;

    let mut prefixes = vec![String::new(); plan.word_count];
    let mut suffixes = vec![String::new(); plan.word_count];
    let attachments = plan
        .digit_slots
        .iter()
        .zip(request.digits)
        .chain(plan.special_slots.iter().zip(request.specials));
    for (&WordSlot { word_index, side }, &ch) in attachments {
        let target = match side {
            WordSide::Prefix => prefixes.get_mut(word_index),
            WordSide::Suffix => suffixes.get_mut(word_index),
        };
        if let Some(target) = target {
            target.push(ch);
        }
    }

    let mut segments: Vec<String> = words
        .iter()
        .zip(prefixes.iter().zip(&suffixes))
        .map(|(word, (prefix, suffix))| format!("{prefix}{word}{suffix}"))
        .collect();
    let value = segments.join(request.separator);

    words.zeroize();
    segments.zeroize();

    Ok(value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
