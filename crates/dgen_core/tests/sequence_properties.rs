//! Property-based tests for sequence and normaliser invariants.

use dgen_core::context::GeneratorContext;
use dgen_core::norms::{Identity, Minmax, Normalizer, Sum};
use dgen_core::rng::Preset;
use dgen_core::seqs::{
    Arithmetic, Combine, Cycle, Geometric, Random, RandomWalk, Repeat, Sequence,
};
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
    -1e6..1e6_f64
}

fn pattern() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(finite(), 1..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The k-th draw is `start + k * step`.
    #[test]
    fn arithmetic_kth_draw(start in finite(), step in -1e3..1e3_f64, n in 1usize..64) {
        let mut seq = Arithmetic::new(start, step);
        let mut expected = start;
        for k in 0..n {
            let value = seq.next();
            prop_assert_eq!(value, expected, "draw {}", k);
            expected += step;
            let closed = start + k as f64 * step;
            prop_assert!((value - closed).abs() <= 1e-6 * (1.0 + closed.abs()));
        }
    }

    /// The k-th draw is `start * ratio^k`.
    #[test]
    fn geometric_kth_draw(start in -100.0..100.0_f64, ratio in -2.0..2.0_f64, n in 1usize..20) {
        let mut seq = Geometric::new(start, ratio);
        for k in 0..n {
            let closed = start * ratio.powi(k as i32);
            let value = seq.next();
            prop_assert!((value - closed).abs() <= 1e-9 * (1.0 + closed.abs()));
        }
    }

    /// The k-th draw is `pattern[k % len]`.
    #[test]
    fn cycle_kth_draw(pattern in pattern(), n in 1usize..64) {
        let mut seq = Cycle::new(pattern.clone()).unwrap();
        for k in 0..n {
            prop_assert_eq!(seq.next(), pattern[k % pattern.len()]);
        }
    }

    /// Random draws are clamped into the bounds.
    #[test]
    fn random_stays_in_bounds(draws in prop::collection::vec(-10.0..10.0_f64, 1..32),
                              a in -5.0..5.0_f64, b in -5.0..5.0_f64) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let mut seq = Random::new(Preset::new(draws).unwrap(), min, max).unwrap();
        for value in seq.iter().take(64) {
            prop_assert!(value >= min && value <= max);
        }
    }

    /// A walk starts at `start` and never leaves its bounds.
    #[test]
    fn random_walk_bounds_and_start(seed in any::<u64>(), start in 0.0..=1.0_f64,
                                    steps in prop::collection::vec(0.0..2.0_f64, 1..8)) {
        let ctx = GeneratorContext::with_seed(seed);
        let mut walk = RandomWalk::new(&ctx, Preset::new(steps).unwrap(), start, 0.0, 1.0).unwrap();
        prop_assert_eq!(walk.next(), start);
        for value in walk.iter().take(200) {
            prop_assert!((0.0..=1.0).contains(&value));
        }
    }

    /// Combine sums one draw from each constituent.
    #[test]
    fn combine_sums_constituents(p1 in pattern(), p2 in pattern(), start in finite(), n in 1usize..32) {
        let mut combined = Combine::new().with(Arithmetic::new(start, 1.0));
        combined.add(p1.clone()).unwrap();
        let boxed: Box<dyn Sequence> = Box::new(Cycle::new(p2.clone()).unwrap());
        combined.add(boxed).unwrap();

        let mut a = Arithmetic::new(start, 1.0);
        let mut c1 = Cycle::new(p1).unwrap();
        let mut c2 = Cycle::new(p2).unwrap();
        for _ in 0..n {
            let expected = 0.0 + a.next() + c1.next() + c2.next();
            prop_assert_eq!(combined.next(), expected);
        }
    }

    /// Repeat emits runs of exactly `count`.
    #[test]
    fn repeat_emits_runs_of_count(count in 1usize..6, runs in 1usize..6) {
        let mut seq = Repeat::new(Arithmetic::default(), count).unwrap();
        for run in 0..runs {
            for _ in 0..count {
                prop_assert_eq!(seq.next(), run as f64);
            }
        }
    }

    /// `array` equals normalised sequential draws.
    #[test]
    fn array_equals_sequential_next(pattern in pattern(), len in 0usize..32, target in 1.0..100.0_f64) {
        let normalizers: Vec<Box<dyn Normalizer>> =
            vec![Box::new(Identity), Box::new(Minmax::new(0.0, target)), Box::new(Sum::new(target))];
        for normalizer in normalizers {
            let mut a = Cycle::new(pattern.clone()).unwrap();
            let mut b = Cycle::new(pattern.clone()).unwrap();
            let manual: Vec<f64> = b.iter().take(len).collect();
            prop_assert_eq!(a.array(len, normalizer.as_ref()), normalizer.normalize(manual));
        }
    }

    /// Identity returns its input.
    #[test]
    fn identity_is_idempotent(data in prop::collection::vec(finite(), 0..32)) {
        prop_assert_eq!(Identity.normalize(data.clone()), data);
    }

    /// Minmax output spans exactly the target range.
    #[test]
    fn minmax_hits_target_range(data in prop::collection::vec(finite(), 2..32)) {
        let lo = data.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assume!(hi - lo > 1e-3);
        let result = Minmax::new(10.0, 20.0).normalize(data);
        let rlo = result.iter().cloned().fold(f64::INFINITY, f64::min);
        let rhi = result.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!((rlo - 10.0).abs() < 1e-9);
        prop_assert!((rhi - 20.0).abs() < 1e-6);
    }
}
