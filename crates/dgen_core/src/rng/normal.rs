//! Gaussian generator.

use rand_distr::Normal as NormalDist;

use super::{normal_distribution, Rng, Source};
use crate::error::RngError;

/// Gaussian draws with fixed mean and standard deviation.
///
/// [`Normal::new`] always uses a fresh entropy-seeded source; use
/// [`Normal::seeded`] for a reproducible stream.
#[derive(Debug)]
pub struct Normal {
    source: Source,
    dist: NormalDist<f64>,
    mu: f64,
    sigma: f64,
}

impl Normal {
    /// Creates an unseeded Gaussian generator.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::InvalidDistribution`] if `mu` is not finite or
    /// `sigma` is negative or not finite.
    pub fn new(mu: f64, sigma: f64) -> Result<Self, RngError> {
        Self::with_source(mu, sigma, Source::from_entropy())
    }

    /// Creates a Gaussian generator with a seeded source.
    ///
    /// # Errors
    ///
    /// Same as [`Normal::new`].
    pub fn seeded(mu: f64, sigma: f64, seed: u64) -> Result<Self, RngError> {
        Self::with_source(mu, sigma, Source::from_seed(seed))
    }

    fn with_source(mu: f64, sigma: f64, source: Source) -> Result<Self, RngError> {
        let dist = normal_distribution(mu, sigma)?;
        Ok(Self {
            source,
            dist,
            mu,
            sigma,
        })
    }

    /// Returns the mean.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Returns the standard deviation.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Rng for Normal {
    #[inline]
    fn next(&mut self) -> f64 {
        self.source.sample(&self.dist)
    }

    fn name(&self) -> &'static str {
        "normal"
    }
}
