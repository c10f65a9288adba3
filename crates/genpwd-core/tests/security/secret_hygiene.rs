//! Secret values never leak through `Debug`, errors, or dropped results.

use genpwd_core::{generate, GenerationConfig, GenerationResult, Mode, UniformSampler};
use zeroize::Zeroize;

#[test]
fn result_debug_is_masked() {
    let result = generate(&GenerationConfig::syllables(24)).unwrap();
    let debug = format!("{result:?}");
    assert!(!debug.contains(result.value()));
    assert!(debug.contains("***"));
}

#[test]
fn sampler_debug_hides_pool() {
    let mut sampler = UniformSampler::os();
    sampler.next_int(10).unwrap();
    let debug = format!("{sampler:?}");
    assert!(!debug.contains("pool: ["), "{debug}");
}

#[test]
fn zeroized_result_is_empty() {
    let mut result = GenerationResult::new("correct-horse".into(), Mode::Passphrase, 44.0);
    result.zeroize();
    assert_eq!(result.value(), "");
}

#[test]
fn errors_do_not_echo_base_word() {
    let err = generate(&GenerationConfig::leet("hunter2 secret")).unwrap_err();
    assert!(!err.to_string().contains("hunter2"));
}
