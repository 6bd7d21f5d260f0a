use super::{check_bounds, Mapping, Sequence};
use crate::context::GeneratorContext;
use crate::error::SequenceError;
use crate::rng::{BoxedRng, Rng, SharedSource};

/// Bounded random walk.
///
/// Each call returns the current position, then moves it by
/// `rng.next() * sign` and clamps it into `[min, max]`. The sign is a coin
/// flip drawn from the context's default source (`-1` when the draw exceeds
/// 0.5), never from `rng`. The step magnitude and the step direction therefore
/// come from different generators; a walk configured with a deterministic
/// `rng` still has random direction.
///
/// `start` must lie within `[min, max]`, so every value the walk produces
/// does too.
///
/// # Examples
///
/// ```rust
/// use dgen_core::context::GeneratorContext;
/// use dgen_core::rng::Preset;
/// use dgen_core::seqs::{RandomWalk, Sequence};
///
/// let ctx = GeneratorContext::with_seed(4);
/// let steps = Preset::new(vec![0.1]).unwrap();
/// let mut walk = RandomWalk::new(&ctx, steps, 0.5, 0.0, 1.0).unwrap();
/// assert_eq!(walk.next(), 0.5);
/// let second = walk.next();
/// assert!((second - 0.4).abs() < 1e-12 || (second - 0.6).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct RandomWalk {
    rng: BoxedRng,
    direction: SharedSource,
    start: f64,
    current: f64,
    min: f64,
    max: f64,
    map: Mapping,
}

impl RandomWalk {
    /// Creates a random walk with step magnitudes drawn from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidBounds`] if `min > max` or either
    /// bound is NaN, and [`SequenceError::StartOutOfBounds`] if `start` is
    /// outside `[min, max]`.
    pub fn new(
        ctx: &GeneratorContext,
        rng: impl Rng + 'static,
        start: f64,
        min: f64,
        max: f64,
    ) -> Result<Self, SequenceError> {
        Self::from_boxed(ctx, Box::new(rng), start, min, max)
    }

    /// Same as [`RandomWalk::new`] for an already boxed generator.
    ///
    /// # Errors
    ///
    /// Same as [`RandomWalk::new`].
    pub fn from_boxed(
        ctx: &GeneratorContext,
        rng: BoxedRng,
        start: f64,
        min: f64,
        max: f64,
    ) -> Result<Self, SequenceError> {
        check_bounds(min, max)?;
        check_start(start, min, max)?;
        Ok(Self {
            rng,
            direction: ctx.default_source().clone(),
            start,
            current: start,
            min,
            max,
            map: Mapping::identity(),
        })
    }

    /// Creates a walk over `[0, 1]` starting at 0.5, with step magnitudes from
    /// the context's default uniform source.
    pub fn from_context(ctx: &GeneratorContext) -> Self {
        Self {
            rng: Box::new(ctx.uniform()),
            direction: ctx.default_source().clone(),
            start: 0.5,
            current: 0.5,
            min: 0.0,
            max: 1.0,
            map: Mapping::identity(),
        }
    }

    /// Returns the step magnitude generator.
    pub fn rng(&self) -> &dyn Rng {
        self.rng.as_ref()
    }

    /// Replaces the step magnitude generator. Direction still comes from the
    /// context's default source.
    pub fn set_rng(&mut self, rng: impl Rng + 'static) -> &mut Self {
        self.rng = Box::new(rng);
        self
    }

    /// Returns the configured start.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Sets the start and moves the walk back to it.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::StartOutOfBounds`] if `start` is outside the
    /// current bounds.
    pub fn set_start(&mut self, start: f64) -> Result<&mut Self, SequenceError> {
        check_start(start, self.min, self.max)?;
        self.start = start;
        self.current = start;
        Ok(self)
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
    /// upper bound, and [`SequenceError::StartOutOfBounds`] if it excludes the
    /// start.
    pub fn set_min(&mut self, min: f64) -> Result<&mut Self, SequenceError> {
        self.set_bounds(min, self.max)
    }

    /// Sets the upper bound.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidBounds`] if `max` is below the current
    /// lower bound, and [`SequenceError::StartOutOfBounds`] if it excludes the
    /// start.
    pub fn set_max(&mut self, max: f64) -> Result<&mut Self, SequenceError> {
        self.set_bounds(self.min, max)
    }

    /// Sets both bounds at once. A position outside the new bounds is
    /// clamped into them.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidBounds`] if `min > max`, and
    /// [`SequenceError::StartOutOfBounds`] if the new bounds exclude the start.
    pub fn set_bounds(&mut self, min: f64, max: f64) -> Result<&mut Self, SequenceError> {
        check_bounds(min, max)?;
        check_start(self.start, min, max)?;
        self.min = min;
        self.max = max;
        self.current = self.current.clamp(min, max);
        Ok(self)
    }
}

fn check_start(start: f64, min: f64, max: f64) -> Result<(), SequenceError> {
    if !(min..=max).contains(&start) {
        return Err(SequenceError::StartOutOfBounds { start, min, max });
    }
    Ok(())
}

impl Sequence for RandomWalk {
    fn next_raw(&mut self) -> f64 {
        let value = self.current;
        // Direction is drawn before magnitude.
        let sign = if self.direction.random() > 0.5 { -1.0 } else { 1.0 };
        self.current = (self.current + self.rng.next() * sign).clamp(self.min, self.max);
        value
    }

    fn map(&self) -> &Mapping {
        &self.map
    }

    fn map_mut(&mut self) -> &mut Mapping {
        &mut self.map
    }
}
