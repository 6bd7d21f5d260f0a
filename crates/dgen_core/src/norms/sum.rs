//! Total-sum normaliser.

use tracing::trace;

use super::Normalizer;

/// Scales every value by one factor so the batch totals `sum`.
///
/// A batch totalling zero is mapped to all zeros.
///
/// # Examples
///
/// ```rust
/// use dgen_core::norms::{Normalizer, Sum};
///
/// let result = Sum::new(10.0).normalize(vec![1.0, 4.0, 5.0]);
/// assert_eq!(result, vec![1.0, 4.0, 5.0]);
/// assert_eq!(Sum::default().normalize(vec![-1.0, 1.0]), vec![0.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sum {
    sum: f64,
}

impl Sum {
    /// Creates a normaliser targeting a total of `sum`.
    pub fn new(sum: f64) -> Self {
        Self { sum }
    }

    /// Returns the target sum.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Sets the target sum.
    pub fn set_sum(&mut self, sum: f64) -> &mut Self {
        self.sum = sum;
        self
    }
}

impl Default for Sum {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Normalizer for Sum {
    fn normalize(&self, data: Vec<f64>) -> Vec<f64> {
        let observed: f64 = data.iter().fold(0.0, |acc, d| acc + d);
        let ratio = if observed == 0.0 {
            0.0
        } else {
            self.sum / observed
        };
        trace!(observed, ratio, "sum normalisation");
        data.into_iter().map(|d| d * ratio).collect()
    }
}
