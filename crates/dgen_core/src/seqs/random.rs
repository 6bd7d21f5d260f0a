use super::{check_bounds, Mapping, Sequence};
use crate::context::GeneratorContext;
use crate::error::SequenceError;
use crate::rng::{BoxedRng, Rng};

/// Draws from a generator and clamps each draw into `[min, max]`.
///
/// # Examples
///
/// ```rust
/// use dgen_core::rng::Preset;
/// use dgen_core::seqs::{Random, Sequence};
///
/// let rng = Preset::new(vec![-1.0, 0.5, 3.0]).unwrap();
/// let mut seq = Random::new(rng, 0.0, 1.0).unwrap();
/// let values: Vec<f64> = seq.iter().take(3).collect();
/// assert_eq!(values, vec![0.0, 0.5, 1.0]);
/// ```
#[derive(Debug)]
pub struct Random {
    rng: BoxedRng,
    min: f64,
    max: f64,
    map: Mapping,
}

impl Random {
    /// Creates a bounded random sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidBounds`] if `min > max` or either
    /// bound is NaN.
    pub fn new(rng: impl Rng + 'static, min: f64, max: f64) -> Result<Self, SequenceError> {
        Self::from_boxed(Box::new(rng), min, max)
    }

    /// Same as [`Random::new`] for an already boxed generator.
    ///
    /// # Errors
    ///
    /// Same as [`Random::new`].
    pub fn from_boxed(rng: BoxedRng, min: f64, max: f64) -> Result<Self, SequenceError> {
        check_bounds(min, max)?;
        Ok(Self {
            rng,
            min,
            max,
            map: Mapping::identity(),
        })
    }

    /// Creates an unbounded sequence over the context's default uniform source.
    pub fn from_context(ctx: &GeneratorContext) -> Self {
        Self {
            rng: Box::new(ctx.uniform()),
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            map: Mapping::identity(),
        }
    }

    /// Returns the generator.
    pub fn rng(&self) -> &dyn Rng {
        self.rng.as_ref()
    }

    /// Replaces the generator.
    pub fn set_rng(&mut self, rng: impl Rng + 'static) -> &mut Self {
        self.rng = Box::new(rng);
        self
    }

    /// Returns the lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Sets the lower bound.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidBounds`] if `min` exceeds the current
    /// upper bound; the bounds are left unchanged.
    pub fn set_min(&mut self, min: f64) -> Result<&mut Self, SequenceError> {
        self.set_bounds(min, self.max)
    }

    /// Sets the upper bound.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidBounds`] if `max` is below the current
    /// lower bound; the bounds are left unchanged.
    pub fn set_max(&mut self, max: f64) -> Result<&mut Self, SequenceError> {
        self.set_bounds(self.min, max)
    }

    /// Sets both bounds at once.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidBounds`] if `min > max`.
    pub fn set_bounds(&mut self, min: f64, max: f64) -> Result<&mut Self, SequenceError> {
        check_bounds(min, max)?;
        self.min = min;
        self.max = max;
        Ok(self)
    }
}

impl Sequence for Random {
    #[inline]
    fn next_raw(&mut self) -> f64 {
        self.rng.next().clamp(self.min, self.max)
    }

    fn map(&self) -> &Mapping {
        &self.map
    }

    fn map_mut(&mut self) -> &mut Mapping {
        &mut self.map
    }
}
