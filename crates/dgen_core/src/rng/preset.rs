//! Deterministic generator over a fixed list of values.

use super::Rng;
use crate::error::RngError;

/// Cycles through a fixed list of values with wraparound.
///
/// Useful wherever a stochastic sequence needs a predictable draw stream,
/// most obviously in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    values: Vec<f64>,
    index: usize,
}

impl Preset {
    /// Creates a preset generator.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::EmptyPreset`] if `values` is empty.
    pub fn new(values: Vec<f64>) -> Result<Self, RngError> {
        if values.is_empty() {
            return Err(RngError::EmptyPreset);
        }
        Ok(Self { values, index: 0 })
    }

    /// Returns the values being cycled.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl Rng for Preset {
    fn next(&mut self) -> f64 {
        let value = self.values[self.index];
        self.index = (self.index + 1) % self.values.len();
        value
    }

    fn name(&self) -> &'static str {
        "preset"
    }
}
