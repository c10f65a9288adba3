//! Validated word lists for passphrase generation.
//!
//! A [`WordSource`] is an ordered, de-duplicated list of alphabetic words
//! whose size falls within [`MIN_WORD_SOURCE_SIZE`]..=[`MAX_WORD_SOURCE_SIZE`].
//! It is immutable once built and shared behind an `Arc`, so concurrent
//! generators can read the same list without locking.
//!
//! Loading dictionaries (files, network, bundles) is the caller's concern;
//! callers hand finished lists to a [`DictionaryRegistry`] or implement
//! [`WordSourceResolver`] themselves.

pub mod builtin;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::error::GenerationError;

pub use builtin::{builtin, BUILTIN_WORD_COUNT};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Fewest unique words a passphrase dictionary may hold.
pub const MIN_WORD_SOURCE_SIZE: usize = 128;

/// Most unique words a passphrase dictionary may hold.
pub const MAX_WORD_SOURCE_SIZE: usize = 200_000;

/// Longest accepted word, in characters.
pub const MAX_WORD_LENGTH: usize = 32;

/// Registry key of the built-in dictionary.
pub const DEFAULT_DICTIONARY: &str = "builtin";

// ---------------------------------------------------------------------------
// WordSource
// ---------------------------------------------------------------------------

/// Ordered, de-duplicated, size-checked word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSource {
    words: Box<[String]>,
}

impl WordSource {
    /// Build a word source from `words`, keeping the first occurrence of each
    /// word.
    ///
    /// Words are trimmed; each must be non-empty, alphabetic, and at most
    /// [`MAX_WORD_LENGTH`] characters. Input is rejected as soon as the unique
    /// count passes [`MAX_WORD_SOURCE_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::DictionaryUnavailable`] for an invalid word,
    /// too few words, or too many words.
    pub fn new<I, W>(words: I) -> Result<Self, GenerationError>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut unique: Vec<String> = Vec::new();

        for (position, raw) in words.into_iter().enumerate() {
            let word = raw.as_ref().trim();
            validate_word(word, position)?;
            if seen.contains(word) {
                continue;
            }
            if unique.len() >= MAX_WORD_SOURCE_SIZE {
                return Err(GenerationError::DictionaryUnavailable(format!(
                    "word list exceeds {MAX_WORD_SOURCE_SIZE} unique words"
                )));
            }
            seen.insert(word.to_string());
            unique.push(word.to_string());
        }

        if unique.len() < MIN_WORD_SOURCE_SIZE {
            return Err(GenerationError::DictionaryUnavailable(format!(
                "word list must contain at least {MIN_WORD_SOURCE_SIZE} unique words, got {}",
                unique.len()
            )));
        }

        Ok(Self {
            words: unique.into_boxed_slice(),
        })
    }

    /// Parse a newline-delimited word list.
    ///
    /// Blank lines and lines starting with `#` are skipped. Lines with
    /// several whitespace-separated fields (diceware `11111<TAB>word`) keep
    /// only the last field.
    ///
    /// # Errors
    ///
    /// Same as [`WordSource::new`].
    pub fn parse(raw: &str) -> Result<Self, GenerationError> {
        Self::new(
            raw.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .filter_map(|line| line.split_whitespace().last()),
        )
    }

    /// Number of unique words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false` for a validated source; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words, in their original order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// `true` if `word` is in the list (exact match).
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

fn validate_word(word: &str, position: usize) -> Result<(), GenerationError> {
    if word.is_empty() {
        return Err(GenerationError::DictionaryUnavailable(format!(
            "empty word at position {position}"
        )));
    }
    if word.chars().count() > MAX_WORD_LENGTH {
        return Err(GenerationError::DictionaryUnavailable(format!(
            "word at position {position} is longer than {MAX_WORD_LENGTH} characters"
        )));
    }
    if !word.chars().all(char::is_alphabetic) {
        return Err(GenerationError::DictionaryUnavailable(format!(
            "word at position {position} contains non-alphabetic characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolves a dictionary key to a loaded word source.
///
/// Implementations must be safe to share between batch workers.
pub trait WordSourceResolver: Sync {
    /// Look up the word source registered under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::DictionaryUnavailable`] if the key cannot be
    /// resolved.
    fn resolve(&self, key: &str) -> Result<Arc<WordSource>, GenerationError>;
}

/// A single word source answers every key.
impl WordSourceResolver for Arc<WordSource> {
    fn resolve(&self, _key: &str) -> Result<Arc<WordSource>, GenerationError> {
        Ok(Arc::clone(self))
    }
}

/// In-memory map from dictionary key to word source.
#[derive(Debug, Clone, Default)]
pub struct DictionaryRegistry {
    sources: HashMap<String, Arc<WordSource>>,
}

impl DictionaryRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding only the built-in dictionary under
    /// [`DEFAULT_DICTIONARY`].
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(DEFAULT_DICTIONARY, builtin().clone());
        registry
    }

    /// Register `source` under `key`, returning the previous entry.
    pub fn insert(&mut self, key: impl Into<String>, source: WordSource) -> Option<Arc<WordSource>> {
        self.sources.insert(key.into(), Arc::new(source))
    }

    /// Parse `raw` (see [`WordSource::parse`]) and register it under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::DictionaryUnavailable`] if the list is
    /// rejected; the registry is left unchanged.
    pub fn insert_raw(&mut self, key: impl Into<String>, raw: &str) -> Result<(), GenerationError> {
        let key = key.into();
        match WordSource::parse(raw) {
            Ok(source) => {
                tracing::debug!(dictionary = %key, words = source.len(), "Dictionary registered");
                self.insert(key, source);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(dictionary = %key, "Dictionary rejected: {e}");
                Err(e)
            }
        }
    }

    /// Registered keys, unordered.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }
}

impl WordSourceResolver for DictionaryRegistry {
    fn resolve(&self, key: &str) -> Result<Arc<WordSource>, GenerationError> {
        self.sources.get(key).map(Arc::clone).ok_or_else(|| {
            tracing::warn!(dictionary = %key, "Dictionary not registered");
            GenerationError::DictionaryUnavailable(format!("no dictionary registered under '{key}'"))
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
