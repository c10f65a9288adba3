//! Passphrase mode: word count, separators, extras, dictionaries, entropy.

use std::sync::Arc;

use genpwd_core::{
    builtin, generate, CasingMode, DictionaryRegistry, GenerationConfig, GenerationError,
    Generator, ModeConfig, PassphraseSeparator, Placement, WordSource,
};

fn with_separator(config: GenerationConfig, sep: PassphraseSeparator) -> GenerationConfig {
    let mut config = config;
    if let ModeConfig::Passphrase { separator, .. } = &mut config.mode {
        *separator = sep;
    }
    config
}

fn with_dictionary(config: GenerationConfig, key: &str) -> GenerationConfig {
    let mut config = config;
    if let ModeConfig::Passphrase { dictionary, .. } = &mut config.mode {
        *dictionary = key.to_string();
    }
    config
}

/// Three lowercase words joined by `-`, all from the dictionary.
#[test]
fn three_word_scenario() {
    let config = GenerationConfig::passphrase(3).with_casing(CasingMode::Lower);
    let result = generate(&config).unwrap();
    let words: Vec<&str> = result.value().split('-').collect();
    assert_eq!(words.len(), 3);
    for word in &words {
        assert!(builtin().contains(word), "{word}");
    }
    #[allow(clippy::cast_precision_loss)]
    let expected = 3.0 * (builtin().len() as f64).log2();
    assert!((result.entropy_bits() - expected).abs() < 1e-9);
}

#[test]
fn default_casing_titles_every_word() {
    let config = GenerationConfig::passphrase(5);
    let value = generate(&config).unwrap().into_value();
    for word in value.split('-') {
        let first = word.chars().next().unwrap();
        assert!(first.is_uppercase(), "{word}");
    }
}

#[test]
fn each_separator_variant() {
    for (sep, expected) in [
        (PassphraseSeparator::Space, Some(' ')),
        (PassphraseSeparator::Dot, Some('.')),
        (PassphraseSeparator::Underscore, Some('_')),
        (PassphraseSeparator::None, None),
    ] {
        let config = with_separator(
            GenerationConfig::passphrase(4).with_casing(CasingMode::Lower),
            sep,
        );
        let value = generate(&config).unwrap().into_value();
        match expected {
            Some(c) => assert_eq!(value.split(c).count(), 4, "{value}"),
            None => assert!(value.chars().all(char::is_alphabetic), "{value}"),
        }
    }
}

#[test]
fn random_separator_is_uniform_within_phrase() {
    let config = with_separator(
        GenerationConfig::passphrase(6).with_casing(CasingMode::Lower),
        PassphraseSeparator::Random,
    );
    for _ in 0..20 {
        let value = generate(&config).unwrap().into_value();
        let seps: Vec<char> = value.chars().filter(|c| !c.is_alphabetic()).collect();
        assert_eq!(seps.len(), 5, "{value}");
        assert!(seps.windows(2).all(|w| w[0] == w[1]), "{value}");
    }
}

#[test]
fn extras_keep_segment_count() {
    let config = GenerationConfig::passphrase(4)
        .with_extras(3, 2)
        .with_casing(CasingMode::Lower);
    for _ in 0..30 {
        let value = generate(&config).unwrap().into_value();
        assert_eq!(value.split('-').count(), 4, "{value}");
        assert_eq!(value.chars().filter(char::is_ascii_digit).count(), 3);
        let specials = value
            .chars()
            .filter(|c| !c.is_alphanumeric() && *c != '-')
            .count();
        assert_eq!(specials, 2, "{value}");
    }
}

#[test]
fn extras_raise_entropy() {
    let plain = GenerationConfig::passphrase(4).with_casing(CasingMode::Lower);
    let decorated = plain
        .clone()
        .with_extras(2, 0)
        .with_placement(Placement::End, Placement::Random);
    let a = generate(&plain).unwrap().entropy_bits();
    let b = generate(&decorated).unwrap().entropy_bits();
    assert!((b - a - 2.0 * 10f64.log2()).abs() < 1e-9);
}

#[test]
fn word_count_bounds() {
    for words in [0, 1, 13] {
        assert!(matches!(
            generate(&GenerationConfig::passphrase(words)),
            Err(GenerationError::InvalidComposition(_))
        ));
    }
}

#[test]
fn missing_dictionary() {
    let config = with_dictionary(GenerationConfig::passphrase(4), "fr-FR");
    assert!(matches!(
        generate(&config),
        Err(GenerationError::DictionaryUnavailable(_))
    ));
}

#[test]
fn undersized_list_cannot_be_registered() {
    let mut registry = DictionaryRegistry::with_builtin();
    let raw = "alpha\nbravo\ncharlie\n";
    assert!(matches!(
        registry.insert_raw("tiny", raw),
        Err(GenerationError::DictionaryUnavailable(_))
    ));
    assert!(registry.keys().all(|k| k != "tiny"));
}

#[test]
fn diceware_list_through_generator() {
    let raw: String = builtin()
        .words()
        .iter()
        .enumerate()
        .map(|(i, w)| format!("{}\t{w}\n", 11111 + i))
        .collect();
    let mut generator = Generator::new();
    generator.dictionaries_mut().insert_raw("dice", &raw).unwrap();
    let config = with_dictionary(
        GenerationConfig::passphrase(4).with_casing(CasingMode::Lower),
        "dice",
    );
    let value = generator.generate(&config).unwrap().into_value();
    assert!(value.split('-').all(|w| builtin().contains(w)), "{value}");
}

#[test]
fn shared_source_resolver() {
    let source = Arc::new(WordSource::new(builtin().words().iter().take(200)).unwrap());
    let generator = Generator::with_resolver(Arc::clone(&source));
    let config = GenerationConfig::passphrase(3).with_casing(CasingMode::Lower);
    let result = generator.generate(&config).unwrap();
    assert!(result.value().split('-').all(|w| source.contains(w)));
    #[allow(clippy::cast_precision_loss)]
    let expected = 3.0 * 200f64.log2();
    assert!((result.entropy_bits() - expected).abs() < 1e-9);
}
