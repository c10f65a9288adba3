//! Smoke tests that generation draws from a live CSPRNG.
//!
//! Two independent draws colliding at these sizes would mean the sampler
//! is returning degenerate output, not bad luck.

use std::collections::HashSet;

use genpwd_core::{generate, CasingMode, GenerationConfig, OsSecureRandom, SecureRandomSource};

#[test]
fn os_source_fills_distinct_buffers() {
    let mut source = OsSecureRandom;
    let mut a = [0u8; 32];
    let mut b = [0u8; 32];
    source.fill(&mut a).unwrap();
    source.fill(&mut b).unwrap();
    assert_ne!(a, b);
    assert_ne!(a, [0u8; 32]);
}

#[test]
fn syllable_outputs_do_not_repeat() {
    let config = GenerationConfig::syllables(16).with_extras(2, 2);
    let values: HashSet<String> = (0..500)
        .map(|_| generate(&config).unwrap().into_value())
        .collect();
    assert_eq!(values.len(), 500);
}

#[test]
fn passphrase_outputs_do_not_repeat() {
    let config = GenerationConfig::passphrase(5).with_casing(CasingMode::Lower);
    let values: HashSet<String> = (0..200)
        .map(|_| generate(&config).unwrap().into_value())
        .collect();
    assert_eq!(values.len(), 200);
}

#[test]
fn mixed_casing_varies() {
    let config = GenerationConfig::leet("abcdefghijklmnopqrstuvwxyz").with_casing(CasingMode::Mixed);
    let values: HashSet<String> = (0..50)
        .map(|_| generate(&config).unwrap().into_value())
        .collect();
    assert!(values.len() > 1);
}
