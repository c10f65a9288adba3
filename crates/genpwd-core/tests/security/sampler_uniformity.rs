//! Chi-square goodness-of-fit for the uniform sampler.
//!
//! 100,000 draws per bound. Critical values are taken at p = 0.001, so a
//! healthy sampler fails a single test roughly once in a thousand runs. A
//! modulo-biased sampler over bytes fails the non-power-of-two bounds at this
//! sample size.
//!
//! | Bound | df  | Critical (p = 0.001) |
//! |-------|-----|----------------------|
//! | 7     | 6   | 22.46                |
//! | 10    | 9   | 27.88                |
//! | 26    | 25  | 52.62                |
//! | 100   | 99  | 148.23               |
//! | 300   | 299 | 385.00               |

use genpwd_core::UniformSampler;

const DRAWS: usize = 100_000;

#[allow(clippy::cast_precision_loss)]
fn chi_square(bound: u32) -> f64 {
    let mut sampler = UniformSampler::os();
    let mut counts = vec![0u64; bound as usize];
    for _ in 0..DRAWS {
        let v = sampler.next_int(bound).unwrap();
        counts[v as usize] += 1;
    }
    let expected = DRAWS as f64 / f64::from(bound);
    counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

#[test]
fn byte_domain_small_bounds() {
    for (bound, critical) in [(7, 22.46), (10, 27.88), (26, 52.62), (100, 148.23)] {
        let stat = chi_square(bound);
        assert!(stat < critical, "bound {bound}: chi2 {stat:.2} >= {critical}");
    }
}

#[test]
fn word_domain_bound() {
    let stat = chi_square(300);
    assert!(stat < 385.0, "bound 300: chi2 {stat:.2}");
}

#[test]
fn choice_covers_every_item() {
    let items: Vec<u16> = (0..300).collect();
    let mut sampler = UniformSampler::os();
    let mut seen = vec![false; items.len()];
    for _ in 0..DRAWS {
        let &v = sampler.choice(&items).unwrap();
        seen[usize::from(v)] = true;
    }
    assert!(seen.iter().all(|&s| s));
}
