//! Syllable mode: length, composition, placement, policy, casing.

use genpwd_core::{
    generate, CasingMode, CasingToken, GenerationConfig, GenerationError, Mode, ModeConfig,
    Placement, SyllablePolicy,
};

fn digits(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

fn specials(value: &str) -> usize {
    value.chars().filter(|c| !c.is_alphanumeric()).count()
}

/// Length 18, 2 digits, 2 specials: 14 letters of syllables plus 4 extras.
#[test]
fn standard_scenario() {
    let config = GenerationConfig::syllables(18).with_extras(2, 2);
    for _ in 0..50 {
        let result = generate(&config).unwrap();
        let value = result.value();
        assert_eq!(result.mode(), Mode::Syllables);
        assert_eq!(value.chars().count(), 18, "{value}");
        assert_eq!(digits(value), 2, "{value}");
        assert_eq!(specials(value), 2, "{value}");
        assert_eq!(value.chars().filter(|c| c.is_alphabetic()).count(), 14);
        assert!(result.entropy_bits().is_finite() && result.entropy_bits() >= 0.0);
    }
}

#[test]
fn extras_at_start_and_end() {
    let config = GenerationConfig::syllables(12)
        .with_extras(3, 2)
        .with_placement(Placement::Start, Placement::End)
        .with_casing(CasingMode::Lower);
    let result = generate(&config).unwrap();
    let chars: Vec<char> = result.value().chars().collect();
    assert!(chars[..3].iter().all(char::is_ascii_digit), "{chars:?}");
    assert!(chars[10..].iter().all(|c| !c.is_alphanumeric()), "{chars:?}");
    assert!(chars[3..10].iter().all(char::is_ascii_lowercase), "{chars:?}");
}

#[test]
fn fixed_middle_placement() {
    // 10 letters, one digit at 50% lands after the fifth letter.
    let config = GenerationConfig::syllables(11)
        .with_extras(1, 0)
        .with_placement(Placement::Fixed(vec![50]), Placement::Random);
    let result = generate(&config).unwrap();
    let digit_at = result.value().chars().position(|c| c.is_ascii_digit());
    assert_eq!(digit_at, Some(5));
}

#[test]
fn strict_policy_output() {
    let config = GenerationConfig {
        mode: ModeConfig::Syllables {
            length: 40,
            policy: SyllablePolicy::Strict,
        },
        ..GenerationConfig::syllables(40)
    }
    .with_extras(4, 4)
    .with_casing(CasingMode::Lower);
    let result = generate(&config).unwrap();
    for c in result.value().chars() {
        assert!(!matches!(c, 'l' | 'o' | '0' | '1'), "{c} in strict output");
    }
}

#[test]
fn explicit_blocks_shape_casing() {
    let config = GenerationConfig::syllables(12)
        .with_extras(0, 0)
        .with_blocks(vec![CasingToken::Upper, CasingToken::Lower]);
    let value = generate(&config).unwrap().into_value();
    let (head, tail) = value.split_at(6);
    assert_eq!(head, head.to_uppercase());
    assert_eq!(tail, tail.to_lowercase());
}

#[test]
fn bounds_are_enforced() {
    for (length, d, s) in [(3, 0, 0), (129, 0, 0), (8, 5, 4), (4, 4, 1)] {
        let config = GenerationConfig::syllables(length).with_extras(d, s);
        assert!(
            matches!(generate(&config), Err(GenerationError::InvalidComposition(_))),
            "length {length}, digits {d}, specials {s}"
        );
    }
}

#[test]
fn all_extras_no_letters() {
    let config = GenerationConfig::syllables(6).with_extras(3, 3);
    let value = generate(&config).unwrap().into_value();
    assert_eq!(digits(&value), 3);
    assert_eq!(specials(&value), 3);
}

#[test]
fn custom_special_set_is_honoured() {
    let config = GenerationConfig::syllables(20)
        .with_extras(0, 6)
        .with_special_set("~");
    let value = generate(&config).unwrap().into_value();
    assert_eq!(value.matches('~').count(), 6);
}

#[test]
fn alphanumeric_special_set_rejected() {
    let config = GenerationConfig::syllables(20)
        .with_extras(0, 2)
        .with_special_set("#a");
    assert!(matches!(
        generate(&config),
        Err(GenerationError::InvalidComposition(_))
    ));
}
