//! # Sequences
//!
//! Stateful generators producing one number per call, with no intrinsic end.
//! Every sequence computes a raw value ([`Sequence::next_raw`]) and passes it
//! through its [`Mapping`] to form the public [`Sequence::next`].
//!
//! ## Variants
//!
//! Deterministic:
//! - [`Constant`], [`Cycle`], [`Arithmetic`], [`Geometric`]
//!
//! Stochastic (draw from an [`Rng`](crate::rng::Rng)):
//! - [`Random`]: clamped draws
//! - [`RandomWalk`]: bounded walk with random step direction
//!
//! Composite:
//! - [`Combine`]: element-wise sum of several sequences
//! - [`Repeat`]: repeats each value of an inner sequence
//!
//! ## Usage Example
//!
//! ```rust
//! use dgen_core::norms::Sum;
//! use dgen_core::seqs::{Arithmetic, Combine, Cycle, Repeat, Sequence};
//!
//! let mut ramp = Arithmetic::new(0.0, 1.0);
//! assert_eq!(ramp.next(), 0.0);
//! assert_eq!(ramp.next(), 1.0);
//!
//! let data = Cycle::new(vec![1.0, 4.0, 5.0]).unwrap().array(3, &Sum::new(10.0));
//! assert_eq!(data, vec![1.0, 4.0, 5.0]);
//!
//! let mut steps = Repeat::new(Arithmetic::default(), 2).unwrap();
//! let values: Vec<f64> = steps.iter().take(5).collect();
//! assert_eq!(values, vec![0.0, 0.0, 1.0, 1.0, 2.0]);
//!
//! let mut wave = Combine::new().with(Arithmetic::new(10.0, 10.0));
//! wave.add(vec![0.0, 1.0]).unwrap();
//! assert_eq!(wave.array(3, &dgen_core::norms::Identity), vec![10.0, 21.0, 30.0]);
//! ```

mod arithmetic;
mod combine;
mod constant;
mod cycle;
mod geometric;
mod random;
mod random_walk;
mod repeat;

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::error::SequenceError;
use crate::norms::Normalizer;

pub use arithmetic::Arithmetic;
pub use combine::{Combine, Constituent};
pub use constant::Constant;
pub use cycle::Cycle;
pub use geometric::Geometric;
pub use random::Random;
pub use random_walk::RandomWalk;
pub use repeat::{Repeat, DEFAULT_REPEAT_COUNT};

/// Shared post-processing function.
pub type MapFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Post-processing transform applied to every raw value.
///
/// The default mapping is the identity.
///
/// # Examples
///
/// ```rust
/// use dgen_core::seqs::Mapping;
///
/// let double = Mapping::new(|x| x * 2.0);
/// assert_eq!(double.apply(3.0), 6.0);
/// assert!(Mapping::identity().is_identity());
/// assert_eq!(Mapping::identity().apply(3.0), 3.0);
/// ```
#[derive(Clone, Default)]
pub struct Mapping(Option<MapFn>);

impl Mapping {
    /// The identity transform.
    pub fn identity() -> Self {
        Self(None)
    }

    /// Wraps a transform.
    pub fn new(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self(Some(Arc::new(f)))
    }

    /// Applies the transform.
    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        match &self.0 {
            Some(f) => f(value),
            None => value,
        }
    }

    /// Returns `true` for the identity transform.
    pub fn is_identity(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            f.write_str("Mapping(identity)")
        } else {
            f.write_str("Mapping(fn)")
        }
    }
}

/// Infinite lazy numeric sequence.
///
/// Implementors supply the raw progression and storage for their mapping;
/// `next`, `array` and the map accessors are shared.
pub trait Sequence: Send + fmt::Debug {
    /// Advances internal state by one step and returns the unmapped value.
    fn next_raw(&mut self) -> f64;

    /// Returns the installed mapping.
    fn map(&self) -> &Mapping;

    /// Returns the installed mapping for replacement.
    fn map_mut(&mut self) -> &mut Mapping;

    /// Advances by one step and returns the mapped value.
    #[inline]
    fn next(&mut self) -> f64 {
        let raw = self.next_raw();
        self.map().apply(raw)
    }

    /// Installs a post-processing transform.
    fn set_map(&mut self, mapping: Mapping) {
        *self.map_mut() = mapping;
    }

    /// Installs a post-processing transform, consuming and returning `self`.
    fn with_map(mut self, f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self
    where
        Self: Sized,
    {
        self.set_map(Mapping::new(f));
        self
    }

    /// Draws exactly `len` values in order and normalises the batch.
    fn array(&mut self, len: usize, normalizer: &dyn Normalizer) -> Vec<f64> {
        let mut data = Vec::with_capacity(len);
        for _ in 0..len {
            data.push(self.next());
        }
        trace!(len, ?normalizer, "sequence batch drawn");
        normalizer.normalize(data)
    }

    /// Borrows the sequence as an infinite iterator of mapped values.
    fn iter(&mut self) -> SequenceIter<'_, Self>
    where
        Self: Sized,
    {
        SequenceIter { seq: self }
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    #[inline]
    fn next_raw(&mut self) -> f64 {
        (**self).next_raw()
    }

    fn map(&self) -> &Mapping {
        (**self).map()
    }

    fn map_mut(&mut self) -> &mut Mapping {
        (**self).map_mut()
    }

    #[inline]
    fn next(&mut self) -> f64 {
        (**self).next()
    }
}

/// Owned, type-erased sequence.
pub type BoxedSequence = Box<dyn Sequence>;

/// Iterator adapter returned by [`Sequence::iter`]. Never yields `None`.
#[derive(Debug)]
pub struct SequenceIter<'a, S: ?Sized> {
    seq: &'a mut S,
}

impl<S: Sequence + ?Sized> Iterator for SequenceIter<'_, S> {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        Some(self.seq.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Rejects NaN bounds and `min > max`.
pub(crate) fn check_bounds(min: f64, max: f64) -> Result<(), SequenceError> {
    if min.is_nan() || max.is_nan() || min > max {
        return Err(SequenceError::InvalidBounds { min, max });
    }
    Ok(())
}
