//! JSON configuration: defaults, shape, and generation from parsed documents.

use genpwd_core::{
    generate, CasingMode, GenerationConfig, GenerationError, Mode, ModeConfig,
    PassphraseSeparator, Placement, SyllablePolicy,
};

#[test]
fn minimal_documents_use_defaults() {
    let syllables = GenerationConfig::from_json(r#"{"mode":"syllables"}"#).unwrap();
    let value = generate(&syllables).unwrap().into_value();
    assert_eq!(value.chars().count(), 20);

    let passphrase = GenerationConfig::from_json(r#"{"mode":"passphrase"}"#).unwrap();
    assert_eq!(passphrase.mode.natural_units(), 5);
    let value = generate(&passphrase).unwrap().into_value();
    assert_eq!(value.split('-').count(), 5);
}

#[test]
fn full_document() {
    let json = r##"{
        "mode": "syllables",
        "length": 24,
        "policy": "layoutSafe",
        "digits": 3,
        "specials": 1,
        "specialSet": "#",
        "digitPlacement": {"fixed": [0, 100]},
        "specialPlacement": "end",
        "casing": "upper"
    }"##;
    let config = GenerationConfig::from_json(json).unwrap();
    assert_eq!(config.digit_placement, Placement::Fixed(vec![0, 100]));
    assert_eq!(config.casing, CasingMode::Upper);
    assert!(matches!(
        config.mode,
        ModeConfig::Syllables { length: 24, policy: SyllablePolicy::LayoutSafe }
    ));
    // Two fixed positions for three digits is not a valid placement.
    assert!(matches!(
        generate(&config),
        Err(GenerationError::InvalidComposition(_))
    ));
}

#[test]
fn generated_from_json_document() {
    let json = r#"{"mode":"passphrase","wordCount":4,"separator":"underscore",
                   "digits":1,"specials":1,"digitPlacement":"start","casing":"lower"}"#;
    let config = GenerationConfig::from_json(json).unwrap();
    let result = generate(&config).unwrap();
    assert_eq!(result.mode(), Mode::Passphrase);
    assert!(result.value().starts_with(|c: char| c.is_ascii_digit()));
    assert_eq!(result.value().split('_').count(), 4);
}

#[test]
fn serialized_config_roundtrips() {
    let mut config = GenerationConfig::passphrase(6).with_extras(2, 2);
    if let ModeConfig::Passphrase { separator, .. } = &mut config.mode {
        *separator = PassphraseSeparator::Random;
    }
    let json = config.to_json().unwrap();
    assert!(json.contains(r#""separator":"random""#));
    assert_eq!(GenerationConfig::from_json(&json).unwrap(), config);
}

#[test]
fn malformed_documents() {
    for json in ["", "{}", r#"{"mode":"leet"}"#, r#"{"mode":"syllables","length":-1}"#] {
        assert!(
            matches!(GenerationConfig::from_json(json), Err(GenerationError::Config(_))),
            "{json}"
        );
    }
}
