use super::{Mapping, Sequence};

/// Running value multiplied by `ratio` after each read.
///
/// The k-th draw equals `start * ratio^k` (up to floating-point rounding).
#[derive(Debug, Clone)]
pub struct Geometric {
    start: f64,
    ratio: f64,
    current: f64,
    map: Mapping,
}

impl Geometric {
    /// Creates a geometric progression.
    pub fn new(start: f64, ratio: f64) -> Self {
        Self {
            start,
            ratio,
            current: start,
            map: Mapping::identity(),
        }
    }

    /// Returns the configured start.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Sets the start and resets the running value to it.
    pub fn set_start(&mut self, start: f64) -> &mut Self {
        self.start = start;
        self.current = start;
        self
    }

    /// Returns the common ratio.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Sets the common ratio. Takes effect from the next multiplication.
    pub fn set_ratio(&mut self, ratio: f64) -> &mut Self {
        self.ratio = ratio;
        self
    }
}

impl Default for Geometric {
    /// Doubles from 1: 1, 2, 4, ...
    fn default() -> Self {
        Self::new(1.0, 2.0)
    }
}

impl Sequence for Geometric {
    fn next_raw(&mut self) -> f64 {
        let value = self.current;
        self.current *= self.ratio;
        value
    }

    fn map(&self) -> &Mapping {
        &self.map
    }

    fn map_mut(&mut self) -> &mut Mapping {
        &mut self.map
    }
}
