//! Pareto generator.

use rand_distr::Pareto as ParetoDist;

use super::{pareto_distribution, Rng, Source};
use crate::error::RngError;

/// Pareto draws with unit scale and fixed shape `alpha`.
///
/// Every draw is at least 1. [`Pareto::new`] always uses a fresh
/// entropy-seeded source.
#[derive(Debug)]
pub struct Pareto {
    source: Source,
    dist: ParetoDist<f64>,
    alpha: f64,
}

impl Pareto {
    /// Creates an unseeded Pareto generator.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::InvalidDistribution`] unless `alpha` is a positive
    /// finite number.
    pub fn new(alpha: f64) -> Result<Self, RngError> {
        Self::with_source(alpha, Source::from_entropy())
    }

    /// Creates a Pareto generator with a seeded source.
    ///
    /// # Errors
    ///
    /// Same as [`Pareto::new`].
    pub fn seeded(alpha: f64, seed: u64) -> Result<Self, RngError> {
        Self::with_source(alpha, Source::from_seed(seed))
    }

    fn with_source(alpha: f64, source: Source) -> Result<Self, RngError> {
        let dist = pareto_distribution(alpha)?;
        Ok(Self {
            source,
            dist,
            alpha,
        })
    }

    /// Returns the shape parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Rng for Pareto {
    #[inline]
    fn next(&mut self) -> f64 {
        self.source.sample(&self.dist)
    }

    fn name(&self) -> &'static str {
        "pareto"
    }
}
