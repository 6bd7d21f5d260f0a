//! Generation context.
//!
//! A [`GeneratorContext`] owns the default uniform source. Create one at
//! program start and pass it by reference to every constructor that needs a
//! fallback generator: unbounded [`Random`](crate::seqs::Random) sequences,
//! and every [`RandomWalk`](crate::seqs::RandomWalk), which draws its step
//! direction from this source whatever magnitude generator it was given.

use crate::rng::{SharedSource, Source, Uniform};

/// Shared state for sequence construction.
///
/// Cloning a context yields a handle to the same default source.
///
/// # Examples
///
/// ```rust
/// use dgen_core::context::GeneratorContext;
///
/// let ctx = GeneratorContext::with_seed(42);
/// assert_eq!(ctx.seed(), Some(42));
///
/// let copy = ctx.clone();
/// assert!(copy.default_source().ptr_eq(ctx.default_source()));
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorContext {
    default_source: SharedSource,
}

impl GeneratorContext {
    /// Creates a context whose default source is seeded from entropy.
    pub fn new() -> Self {
        Self::from_source(Source::from_entropy())
    }

    /// Creates a context with a reproducible default source.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_source(Source::from_seed(seed))
    }

    /// Creates a context around an existing source.
    pub fn from_source(source: Source) -> Self {
        Self {
            default_source: SharedSource::new(source),
        }
    }

    /// Returns the shared default source.
    pub fn default_source(&self) -> &SharedSource {
        &self.default_source
    }

    /// Returns a uniform generator drawing from the default source.
    pub fn uniform(&self) -> Uniform {
        Uniform::shared(self)
    }

    /// Returns the seed of the default source, if it was seeded.
    pub fn seed(&self) -> Option<u64> {
        self.default_source.seed()
    }
}

impl Default for GeneratorContext {
    fn default() -> Self {
        Self::new()
    }
}
