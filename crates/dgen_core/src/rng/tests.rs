//! Unit tests for the RNG module.
//!
//! This module contains tests verifying:
//! - Seed reproducibility for every stochastic variant
//! - Preset wraparound
//! - Distribution ranges and parameter validation
//! - Shared source semantics

use super::*;
use crate::context::GeneratorContext;
use crate::error::RngError;

/// Preset values wrap around.
#[test]
fn test_preset_cycles_with_wraparound() {
    let mut rng = Preset::new(vec![1.0, 2.0, 3.0]).unwrap();
    let drawn: Vec<f64> = (0..7).map(|_| rng.next()).collect();
    assert_eq!(drawn, vec![1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 1.0]);
    assert_eq!(rng.values(), &[1.0, 2.0, 3.0]);
}

/// A preset needs at least one value.
#[test]
fn test_preset_rejects_empty_values() {
    assert_eq!(Preset::new(vec![]), Err(RngError::EmptyPreset));
}

/// Equal seeds give equal streams for every seeded generator.
#[test]
fn test_seed_reproducibility() {
    let mut a = Uniform::seeded(12345);
    let mut b = Uniform::seeded(12345);
    for _ in 0..100 {
        assert_eq!(a.next(), b.next());
    }

    let mut n1 = Normal::seeded(0.0, 1.0, 12345).unwrap();
    let mut n2 = Normal::seeded(0.0, 1.0, 12345).unwrap();
    for _ in 0..100 {
        assert_eq!(n1.next(), n2.next());
    }

    let mut p1 = Pareto::seeded(2.0, 12345).unwrap();
    let mut p2 = Pareto::seeded(2.0, 12345).unwrap();
    for _ in 0..100 {
        assert_eq!(p1.next(), p2.next());
    }
}

/// Uniform draws lie in `[0, 1)`.
#[test]
fn test_uniform_range() {
    let mut rng = Uniform::seeded(42);
    for _ in 0..10_000 {
        let value = rng.next();
        assert!(value >= 0.0, "Uniform value {} is below 0", value);
        assert!(value < 1.0, "Uniform value {} is >= 1", value);
    }
}

/// Sample mean and standard deviation match the parameters.
#[test]
fn test_normal_moments() {
    let mut rng = Normal::seeded(5.0, 2.0, 42).unwrap();
    let n = 50_000;
    let samples: Vec<f64> = (0..n).map(|_| rng.next()).collect();
    let mean = samples.iter().sum::<f64>() / n as f64;
    let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;

    assert!((mean - 5.0).abs() < 0.05, "mean {} too far from 5", mean);
    assert!((var.sqrt() - 2.0).abs() < 0.05, "std {} too far from 2", var.sqrt());
    assert_eq!(rng.mu(), 5.0);
    assert_eq!(rng.sigma(), 2.0);
}

/// Unit-scale Pareto draws are at least 1.
#[test]
fn test_pareto_lower_bound() {
    let mut rng = Pareto::seeded(3.0, 7).unwrap();
    for _ in 0..10_000 {
        assert!(rng.next() >= 1.0);
    }
    assert_eq!(rng.alpha(), 3.0);
}

/// Invalid parameters are rejected with the distribution name.
#[test]
fn test_invalid_distribution_parameters() {
    assert!(matches!(
        Normal::new(0.0, -1.0),
        Err(RngError::InvalidDistribution { name: "normal", .. })
    ));
    assert!(Normal::new(f64::NAN, 1.0).is_err());
    assert!(matches!(
        Pareto::new(0.0),
        Err(RngError::InvalidDistribution { name: "pareto", .. })
    ));
    assert!(Pareto::new(f64::INFINITY).is_err());
}

/// Direct source draws and seed tracking.
#[test]
fn test_source_direct_draws() {
    let mut source = Source::from_seed(3);
    assert_eq!(source.seed(), Some(3));
    assert!(source.normal(0.0, 1.0).unwrap().is_finite());
    assert!(source.pareto(1.5).unwrap() >= 1.0);
    assert!(source.normal(0.0, -2.0).is_err());

    let entropy = Source::from_entropy();
    assert_eq!(entropy.seed(), None);
}

/// Shared uniforms interleave on one stream.
#[test]
fn test_shared_uniform_draws_from_context_source() {
    let ctx = GeneratorContext::with_seed(77);
    let mut a = Uniform::shared(&ctx);
    let mut b = Uniform::shared(&ctx);
    let mut reference = Source::from_seed(77);

    // Interleaved draws consume one common stream.
    assert_eq!(a.next(), reference.random());
    assert_eq!(b.next(), reference.random());
    assert_eq!(a.next(), reference.random());
    assert!(a.source().ptr_eq(b.source()));
}

/// Boxed generators forward every call.
#[test]
fn test_boxed_rng_delegates() {
    let mut boxed: BoxedRng = Box::new(Preset::new(vec![0.5]).unwrap());
    assert_eq!(boxed.next(), 0.5);
    assert_eq!(boxed.name(), "preset");
}
