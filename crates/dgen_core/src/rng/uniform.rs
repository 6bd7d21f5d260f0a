//! Uniform [0, 1) generator.

use super::{Rng, SharedSource, Source};
use crate::context::GeneratorContext;

/// Uniform draws in [0, 1).
///
/// A seeded instance owns a private source. An instance obtained from a
/// [`GeneratorContext`] shares the context's default source with every other
/// generator built from that context.
///
/// # Examples
///
/// ```rust
/// use dgen_core::context::GeneratorContext;
/// use dgen_core::rng::{Rng, Uniform};
///
/// let mut a = Uniform::seeded(9);
/// let mut b = Uniform::seeded(9);
/// assert_eq!(a.next(), b.next());
///
/// let ctx = GeneratorContext::with_seed(9);
/// let shared = Uniform::shared(&ctx);
/// assert!(shared.source().ptr_eq(ctx.default_source()));
/// ```
#[derive(Debug, Clone)]
pub struct Uniform {
    source: SharedSource,
}

impl Uniform {
    /// Creates a generator with its own source seeded from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::from_source(SharedSource::new(Source::from_seed(seed)))
    }

    /// Creates a generator drawing from the context's default source.
    pub fn shared(ctx: &GeneratorContext) -> Self {
        Self::from_source(ctx.default_source().clone())
    }

    /// Creates a generator drawing from an existing shared source.
    pub fn from_source(source: SharedSource) -> Self {
        Self { source }
    }

    /// Returns the source this generator draws from.
    pub fn source(&self) -> &SharedSource {
        &self.source
    }
}

impl Rng for Uniform {
    #[inline]
    fn next(&mut self) -> f64 {
        self.source.random()
    }

    fn name(&self) -> &'static str {
        "uniform"
    }
}
