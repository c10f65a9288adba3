//! Pronounceable syllable strings.
//!
//! A syllable is drawn from a small set of consonant/vowel templates, then
//! each slot is filled from the policy's consonant or vowel set. Syllables
//! are appended until the requested base length is reached; the last one is
//! cut short if it would overshoot.

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::random::SecureRandomSource;
use crate::sampler::UniformSampler;

use super::DIGITS;

// Character sets
const STANDARD_CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'z',
];
const STANDARD_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];
const STANDARD_SPECIALS: &str = "!#$%&*+=?@^";

// No `l` (reads as `1`/`I`), no `o` (reads as `0`).
const STRICT_CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x', 'z',
];
const STRICT_VOWELS: &[char] = &['a', 'e', 'i', 'u', 'y'];
const STRICT_SPECIALS: &str = "%+=@^";
const STRICT_DIGITS: &[char] = &['2', '3', '4', '5', '6', '7', '8', '9'];

// Same key position on QWERTY, AZERTY and QWERTZ.
const LAYOUT_CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'n', 'p', 'r', 's', 't', 'v', 'x',
];
const LAYOUT_VOWELS: &[char] = &['e', 'i', 'o', 'u'];
const LAYOUT_SPECIALS: &str = "!%+=?@";

/// Letter class of one template slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Consonant,
    Vowel,
}

use Slot::{Consonant as C, Vowel as V};

const TEMPLATES: &[&[Slot]] = &[&[C, V], &[C, V, C], &[V, C], &[C, V, V], &[C, C, V]];

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Character policy for syllable generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SyllablePolicy {
    /// Full consonant/vowel sets.
    #[default]
    Standard,
    /// Drops glyphs that are easy to misread (`l`, `o`, `0`, `1`); safe to
    /// paste into shells.
    Strict,
    /// Only characters that sit on the same key across common layouts.
    LayoutSafe,
}

impl SyllablePolicy {
    /// Consonants allowed by this policy.
    #[must_use]
    pub const fn consonants(self) -> &'static [char] {
        match self {
            Self::Standard => STANDARD_CONSONANTS,
            Self::Strict => STRICT_CONSONANTS,
            Self::LayoutSafe => LAYOUT_CONSONANTS,
        }
    }

    /// Vowels allowed by this policy.
    #[must_use]
    pub const fn vowels(self) -> &'static [char] {
        match self {
            Self::Standard => STANDARD_VOWELS,
            Self::Strict => STRICT_VOWELS,
            Self::LayoutSafe => LAYOUT_VOWELS,
        }
    }

    /// Digits injected under this policy.
    #[must_use]
    pub const fn digits(self) -> &'static [char] {
        match self {
            Self::Standard | Self::LayoutSafe => DIGITS,
            Self::Strict => STRICT_DIGITS,
        }
    }

    /// Special set used when the caller does not supply one.
    #[must_use]
    pub const fn default_specials(self) -> &'static str {
        match self {
            Self::Standard => STANDARD_SPECIALS,
            Self::Strict => STRICT_SPECIALS,
            Self::LayoutSafe => LAYOUT_SPECIALS,
        }
    }

    const fn letters(self, slot: Slot) -> &'static [char] {
        match slot {
            Slot::Consonant => self.consonants(),
            Slot::Vowel => self.vowels(),
        }
    }
}

/// Special set used by modes without a syllable policy.
pub const DEFAULT_SPECIALS: &str = STANDARD_SPECIALS;

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate exactly `base_length` lowercase letters of syllables.
///
/// # Errors
///
/// Propagates sampler failures.
pub fn generate_syllables<S: SecureRandomSource>(
    base_length: usize,
    policy: SyllablePolicy,
    sampler: &mut UniformSampler<S>,
) -> Result<String, GenerationError> {
    let mut out = String::with_capacity(base_length);
    let mut produced = 0usize;
    while produced < base_length {
        let template = sampler.choice(TEMPLATES)?;
        for &slot in *template {
            if produced >= base_length {
                break;
            }
            out.push(*sampler.choice(policy.letters(slot))?);
            produced = produced.saturating_add(1);
        }
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const POLICIES: [SyllablePolicy; 3] = [
        SyllablePolicy::Standard,
        SyllablePolicy::Strict,
        SyllablePolicy::LayoutSafe,
    ];

    #[test]
    fn exact_length() {
        let mut sampler = UniformSampler::os();
        for len in [0, 1, 2, 7, 14, 64] {
            let s = generate_syllables(len, SyllablePolicy::Standard, &mut sampler).unwrap();
            assert_eq!(s.chars().count(), len);
        }
    }

    #[test]
    fn letters_respect_policy() {
        let mut sampler = UniformSampler::os();
        for policy in POLICIES {
            let s = generate_syllables(200, policy, &mut sampler).unwrap();
            for c in s.chars() {
                assert!(
                    policy.consonants().contains(&c) || policy.vowels().contains(&c),
                    "{c} not allowed by {policy:?}"
                );
            }
        }
    }

    #[test]
    fn strict_avoids_ambiguous_glyphs() {
        let mut sampler = UniformSampler::os();
        let s = generate_syllables(500, SyllablePolicy::Strict, &mut sampler).unwrap();
        assert!(!s.contains('l') && !s.contains('o'));
        assert!(!SyllablePolicy::Strict.digits().contains(&'0'));
        assert!(!SyllablePolicy::Strict.digits().contains(&'1'));
    }

    #[test]
    fn vowel_runs_are_bounded() {
        // `CVV` followed by `VC` is the longest vowel run templates allow.
        let mut sampler = UniformSampler::os();
        let s = generate_syllables(500, SyllablePolicy::Standard, &mut sampler).unwrap();
        let vowels = SyllablePolicy::Standard.vowels();
        let mut run = 0;
        for c in s.chars() {
            run = if vowels.contains(&c) { run + 1 } else { 0 };
            assert!(run <= 3, "vowel run too long in {s}");
        }
    }

    #[test]
    fn default_specials_are_not_alphanumeric() {
        for policy in POLICIES {
            assert!(policy
                .default_specials()
                .chars()
                .all(|c| !c.is_alphanumeric() && !c.is_whitespace()));
        }
    }

    #[test]
    fn policy_serde_names() {
        let json = serde_json::to_string(&SyllablePolicy::LayoutSafe).unwrap();
        assert_eq!(json, r#""layoutSafe""#);
    }
}
