//! Range normaliser.

use tracing::{trace, warn};

use super::Normalizer;

/// Maps the observed minimum and maximum of a batch onto a target range,
/// preserving relative spacing.
///
/// A batch whose values are all equal has no observed range; every value is
/// then mapped to the target minimum. An empty batch is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use dgen_core::norms::{Minmax, Normalizer};
///
/// let norm = Minmax::new(10.0, 20.0);
/// assert_eq!(norm.normalize(vec![0.0, 0.1, 0.5, 1.0]), vec![10.0, 11.0, 15.0, 20.0]);
/// assert_eq!(norm.normalize(vec![4.0, 4.0]), vec![10.0, 10.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minmax {
    min: f64,
    max: f64,
}

impl Minmax {
    /// Creates a normaliser targeting `[min, max]`.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns the target minimum.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the target maximum.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Sets the target minimum.
    pub fn set_min(&mut self, min: f64) -> &mut Self {
        self.min = min;
        self
    }

    /// Sets the target maximum.
    pub fn set_max(&mut self, max: f64) -> &mut Self {
        self.max = max;
        self
    }
}

impl Default for Minmax {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl Normalizer for Minmax {
    fn normalize(&self, data: Vec<f64>) -> Vec<f64> {
        if data.is_empty() {
            return data;
        }

        let (lo, hi) = data
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &d| {
                (lo.min(d), hi.max(d))
            });
        let observed = hi - lo;

        if observed == 0.0 {
            warn!(value = lo, len = data.len(), "degenerate batch, mapping to target minimum");
            return vec![self.min; data.len()];
        }

        let ratio = (self.max - self.min) / observed;
        trace!(lo, hi, ratio, "minmax normalisation");
        data.into_iter().map(|d| (d - lo) * ratio + self.min).collect()
    }
}
