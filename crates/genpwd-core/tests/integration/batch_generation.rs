//! Batch generation across worker threads.

use std::collections::HashSet;

use genpwd_core::{GenerationConfig, GenerationError, Generator, MAX_BATCH_SIZE};

#[test]
fn full_batch_is_distinct_and_well_formed() {
    let generator = Generator::new();
    let config = GenerationConfig::syllables(20).with_extras(2, 2);
    let batch = generator.generate_batch(&config, MAX_BATCH_SIZE).unwrap();
    assert_eq!(batch.len(), MAX_BATCH_SIZE);

    let unique: HashSet<&str> = batch.iter().map(|r| r.value()).collect();
    assert_eq!(unique.len(), MAX_BATCH_SIZE);

    for result in &batch {
        let value = result.value();
        assert_eq!(value.chars().count(), 20);
        assert_eq!(value.chars().filter(char::is_ascii_digit).count(), 2);
    }
}

#[test]
fn passphrase_batch() {
    let generator = Generator::new();
    let batch = generator
        .generate_batch(&GenerationConfig::passphrase(4), 64)
        .unwrap();
    assert_eq!(batch.len(), 64);
    assert!(batch.iter().all(|r| r.value().split('-').count() == 4));
}

#[test]
fn oversized_batch_rejected() {
    let generator = Generator::new();
    assert!(matches!(
        generator.generate_batch(&GenerationConfig::default(), MAX_BATCH_SIZE + 1),
        Err(GenerationError::InvalidComposition(_))
    ));
}

#[test]
fn invalid_config_fails_whole_batch() {
    let generator = Generator::new();
    let config = GenerationConfig::leet("two words");
    assert!(generator.generate_batch(&config, 100).is_err());
}
