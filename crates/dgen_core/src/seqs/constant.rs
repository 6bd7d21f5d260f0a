use super::{Mapping, Sequence};

/// Always returns the same value.
#[derive(Debug, Clone, Default)]
pub struct Constant {
    value: f64,
    map: Mapping,
}

impl Constant {
    /// Creates a constant sequence.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            map: Mapping::identity(),
        }
    }

    /// Returns the constant.
    pub fn constant(&self) -> f64 {
        self.value
    }

    /// Replaces the constant.
    pub fn set_constant(&mut self, value: f64) -> &mut Self {
        self.value = value;
        self
    }
}

impl Sequence for Constant {
    #[inline]
    fn next_raw(&mut self) -> f64 {
        self.value
    }

    fn map(&self) -> &Mapping {
        &self.map
    }

    fn map_mut(&mut self) -> &mut Mapping {
        &mut self.map
    }
}
