//! Generation pipeline.
//!
//! For every call: validate and plan the composition, build the base string
//! for the mode, place digits/specials, apply casing, then score the final
//! value. Each call draws from its own [`UniformSampler`] and shares nothing
//! mutable, so [`Generator`] can be used from any number of threads.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use zeroize::Zeroize;

use crate::casing::{apply_casing, randomize_blocks, CasingToken};
use crate::composition::{plan_around_base, plan_characters, plan_words, resolve_special_set};
use crate::config::{GenerationConfig, Mode, ModeConfig};
use crate::entropy::{estimate_entropy, EntropyContext};
use crate::error::GenerationError;
use crate::generator::leet::leetify;
use crate::generator::passphrase::{generate_passphrase, PassphraseRequest};
use crate::generator::syllables::generate_syllables;
use crate::generator::{draw_chars, DIGITS};
use crate::placement::{insert, pair_extras};
use crate::random::SecureRandomSource;
use crate::result::GenerationResult;
use crate::sampler::UniformSampler;
use crate::wordsource::{DictionaryRegistry, WordSourceResolver};

/// Largest accepted batch.
pub const MAX_BATCH_SIZE: usize = 1000;

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Secret generator bound to a dictionary resolver.
#[derive(Debug, Clone)]
pub struct Generator<R: WordSourceResolver = DictionaryRegistry> {
    resolver: R,
}

impl Generator<DictionaryRegistry> {
    /// Generator over a registry holding the built-in dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::with_resolver(DictionaryRegistry::with_builtin())
    }

    /// Registry, for registering additional dictionaries.
    pub fn dictionaries_mut(&mut self) -> &mut DictionaryRegistry {
        &mut self.resolver
    }
}

impl Default for Generator<DictionaryRegistry> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: WordSourceResolver> Generator<R> {
    /// Generator resolving dictionary keys through `resolver`.
    #[must_use]
    pub const fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    /// The dictionary resolver.
    #[must_use]
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Generate one secret using the OS CSPRNG.
    ///
    /// # Errors
    ///
    /// See [`Generator::generate_with`].
    pub fn generate(&self, config: &GenerationConfig) -> Result<GenerationResult, GenerationError> {
        let mut sampler = UniformSampler::os();
        self.generate_with(config, &mut sampler)
    }

    /// Generate one secret drawing from `sampler`.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::InvalidComposition`] if the configuration cannot
    ///   be satisfied (bounds, counts, placement, special set, base word).
    /// - [`GenerationError::DictionaryUnavailable`] if the passphrase
    ///   dictionary cannot be resolved.
    /// - [`GenerationError::SecureRandomUnavailable`] if the entropy source
    ///   fails.
    pub fn generate_with<S: SecureRandomSource>(
        &self,
        config: &GenerationConfig,
        sampler: &mut UniformSampler<S>,
    ) -> Result<GenerationResult, GenerationError> {
        let special_set = resolve_special_set(
            config.special_set.as_deref(),
            config.mode.default_specials(),
            config.specials,
            &config.mode.reserved_chars(),
        )?;

        let (value, context) = match &config.mode {
            ModeConfig::Syllables { length, policy } => {
                let plan = plan_characters(*length, config.digits, config.specials)?;
                let base = generate_syllables(plan.base_length, *policy, sampler)?;
                let value = finish_characters(config, base, policy.digits(), &special_set, sampler)?;
                (value, EntropyContext::from_config(config, None))
            }
            ModeConfig::Leet { base_word } => {
                let base = leetify(base_word)?;
                plan_around_base(base.chars().count(), config.digits, config.specials)?;
                let value = finish_characters(config, base, DIGITS, &special_set, sampler)?;
                (value, EntropyContext::from_config(config, None))
            }
            ModeConfig::Passphrase {
                word_count,
                separator,
                dictionary,
            } => {
                let plan = plan_words(
                    *word_count,
                    config.digits,
                    config.specials,
                    &config.digit_placement,
                    &config.special_placement,
                    sampler,
                )?;
                let source = self.resolver.resolve(dictionary)?;
                let separator = separator.pick(sampler)?;
                let digits = draw_chars(DIGITS, config.digits, sampler)?;
                let specials = draw_chars(&special_set, config.specials, sampler)?;
                let blocks = config.effective_blocks();
                let request = PassphraseRequest {
                    source: &source,
                    plan: &plan,
                    separator,
                    digits: &digits,
                    specials: &specials,
                    casing: config.casing,
                    blocks: &blocks,
                };
                let value = generate_passphrase(&request, sampler)?;
                (value, EntropyContext::from_config(config, Some(source.len())))
            }
        };

        let entropy_bits = estimate_entropy(&value, config.mode(), &context);
        tracing::debug!(
            mode = %config.mode(),
            length = value.chars().count(),
            entropy_bits,
            "Secret generated"
        );
        Ok(GenerationResult::new(value, config.mode(), entropy_bits))
    }

    /// Generate `count` independent secrets with the same configuration.
    ///
    /// Work is split across scoped worker threads, one sampler each. The
    /// first error stops the remaining workers and is returned.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidComposition`] if `count` exceeds
    /// [`MAX_BATCH_SIZE`], or the first error any worker hits.
    ///
    /// # Panics
    ///
    /// Re-raises a panic from a worker thread.
    pub fn generate_batch(
        &self,
        config: &GenerationConfig,
        count: usize,
    ) -> Result<Vec<GenerationResult>, GenerationError> {
        if count > MAX_BATCH_SIZE {
            return Err(GenerationError::InvalidComposition(format!(
                "batch size must be at most {MAX_BATCH_SIZE}, got {count}"
            )));
        }
        if count == 0 {
            return Ok(Vec::new());
        }

        let workers = std::thread::available_parallelism()
            .map_or(1, NonZeroUsize::get)
            .min(count);
        let chunk = count.div_ceil(workers);
        tracing::debug!(mode = %config.mode(), count, workers, "Batch generation started");

        let failed = AtomicBool::new(false);
        let results = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|worker| {
                    let start = worker.saturating_mul(chunk);
                    let size = chunk.min(count.saturating_sub(start));
                    let failed = &failed;
                    scope.spawn(move || {
                        let mut sampler = UniformSampler::os();
                        let mut out = Vec::with_capacity(size);
                        for _ in 0..size {
                            if failed.load(Ordering::Relaxed) {
                                break;
                            }
                            match self.generate_with(config, &mut sampler) {
                                Ok(result) => out.push(result),
                                Err(e) => {
                                    failed.store(true, Ordering::Relaxed);
                                    return Err(e);
                                }
                            }
                        }
                        Ok(out)
                    })
                })
                .collect();

            let mut all = Vec::with_capacity(count);
            let mut first_error = None;
            for handle in handles {
                match handle.join() {
                    Ok(Ok(part)) => all.extend(part),
                    Ok(Err(e)) => {
                        first_error.get_or_insert(e);
                    }
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            }
            first_error.map_or(Ok(all), Err)
        })?;

        tracing::debug!(mode = %config.mode(), count = results.len(), "Batch generation finished");
        Ok(results)
    }
}

/// Place digits/specials into a character-mode base and apply casing.
fn finish_characters<S: SecureRandomSource>(
    config: &GenerationConfig,
    mut base: String,
    digit_set: &[char],
    special_set: &[char],
    sampler: &mut UniformSampler<S>,
) -> Result<String, GenerationError> {
    config.digit_placement.validate(config.digits)?;
    config.special_placement.validate(config.specials)?;

    let digits = draw_chars(digit_set, config.digits, sampler)?;
    let specials = draw_chars(special_set, config.specials, sampler)?;
    let mut extras = pair_extras(
        &config.digit_placement.resolve(config.digits, sampler)?,
        &digits,
    );
    extras.extend(pair_extras(
        &config.special_placement.resolve(config.specials, sampler)?,
        &specials,
    ));

    let mut placed = insert(&base, &extras);
    let cased = apply_casing(&placed, config.casing, &config.effective_blocks(), sampler);

    base.zeroize();
    placed.zeroize();
    cased
}

// ---------------------------------------------------------------------------
// Convenience functions
// ---------------------------------------------------------------------------

fn shared() -> &'static Generator {
    static SHARED: OnceLock<Generator> = OnceLock::new();
    SHARED.get_or_init(Generator::new)
}

/// Generate one secret with the built-in dictionary registry.
///
/// # Errors
///
/// See [`Generator::generate_with`].
pub fn generate(config: &GenerationConfig) -> Result<GenerationResult, GenerationError> {
    shared().generate(config)
}

/// [`randomize_blocks`] using the OS CSPRNG.
///
/// # Errors
///
/// Returns [`GenerationError::SecureRandomUnavailable`] if the entropy source
/// fails.
pub fn randomize_blocks_os(mode: Mode, param: usize) -> Result<Vec<CasingToken>, GenerationError> {
    randomize_blocks(mode, param, &mut UniformSampler::os())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
