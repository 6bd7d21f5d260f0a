use super::{Mapping, Sequence};

/// Running value incremented by `step` after each read.
///
/// The k-th draw equals `start + k * step` (up to floating-point rounding).
#[derive(Debug, Clone)]
pub struct Arithmetic {
    start: f64,
    step: f64,
    current: f64,
    map: Mapping,
}

impl Arithmetic {
    /// Creates an arithmetic progression.
    pub fn new(start: f64, step: f64) -> Self {
        Self {
            start,
            step,
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

    /// Returns the step.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Sets the step. Takes effect from the next increment.
    pub fn set_step(&mut self, step: f64) -> &mut Self {
        self.step = step;
        self
    }
}

impl Default for Arithmetic {
    /// Counts 0, 1, 2, ...
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl Sequence for Arithmetic {
    fn next_raw(&mut self) -> f64 {
        let value = self.current;
        self.current += self.step;
        value
    }

    fn map(&self) -> &Mapping {
        &self.map
    }

    fn map_mut(&mut self) -> &mut Mapping {
        &mut self.map
    }
}
