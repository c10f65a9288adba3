//! Leet mode: substitution, extras around the substituted word, scoring.

use genpwd_core::{
    estimate_entropy, generate, CasingMode, CasingToken, EntropyContext, GenerationConfig,
    GenerationError, Mode, Placement,
};

#[test]
fn password_upper() {
    let config = GenerationConfig::leet("Password").with_casing(CasingMode::Upper);
    let result = generate(&config).unwrap();
    assert_eq!(result.value(), "P@55W0RD");
    assert_eq!(result.mode(), Mode::Leet);
}

#[test]
fn default_leaves_substitution_as_is() {
    let result = generate(&GenerationConfig::leet("Password")).unwrap();
    assert_eq!(result.value(), "P@55w0rd");
}

#[test]
fn denylisted_word_scores_below_base() {
    let result = generate(&GenerationConfig::leet("Password")).unwrap();
    let context = EntropyContext::characters(11);
    let unpenalized = estimate_entropy("Qxmvkwhz", Mode::Leet, &context);
    assert!(result.entropy_bits() < unpenalized);
    assert!(result.entropy_bits() >= 0.0);
}

#[test]
fn extras_wrap_the_word() {
    let config = GenerationConfig::leet("dragon")
        .with_extras(2, 1)
        .with_placement(Placement::End, Placement::Start);
    let value = generate(&config).unwrap().into_value();
    let chars: Vec<char> = value.chars().collect();
    assert_eq!(chars.len(), 9);
    assert!(!chars[0].is_alphanumeric(), "{value}");
    assert_eq!(chars[1..7].iter().collect::<String>(), "dr@90n");
    assert!(chars[7..].iter().all(char::is_ascii_digit), "{value}");
}

#[test]
fn block_casing_over_substituted_word() {
    let config = GenerationConfig::leet("mountains")
        .with_blocks(vec![CasingToken::Upper, CasingToken::Lower]);
    let value = generate(&config).unwrap().into_value();
    // `m0un7@1n5` split 5/4.
    assert_eq!(value, "M0UN7@1n5");
}

#[test]
fn invalid_base_words() {
    let long = "x".repeat(65);
    for word in ["", "two words", long.as_str()] {
        assert!(matches!(
            generate(&GenerationConfig::leet(word)),
            Err(GenerationError::InvalidComposition(_))
        ));
    }
}

#[test]
fn extras_cannot_exceed_max_length() {
    let config = GenerationConfig::leet("a".repeat(64)).with_extras(40, 30);
    assert!(matches!(
        generate(&config),
        Err(GenerationError::InvalidComposition(_))
    ));
}
