//! Value repetition over an inner sequence.

use super::{BoxedSequence, Mapping, Sequence};
use crate::error::SequenceError;

/// Repetition count used when none is given.
pub const DEFAULT_REPEAT_COUNT: usize = 2;

/// Returns each value of an inner sequence `count` consecutive times.
///
/// The first call draws from the inner sequence immediately.
///
/// # Examples
///
/// ```rust
/// use dgen_core::seqs::{Cycle, Repeat, Sequence};
///
/// let inner = Cycle::new(vec![1.0, 2.0]).unwrap();
/// let mut seq = Repeat::new(inner, 3).unwrap();
/// let values: Vec<f64> = seq.iter().take(7).collect();
/// assert_eq!(values, vec![1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 1.0]);
/// ```
#[derive(Debug)]
pub struct Repeat {
    inner: BoxedSequence,
    count: usize,
    pending: f64,
    /// Times `pending` has been returned; `None` until the first draw.
    emitted: Option<usize>,
    map: Mapping,
}

impl Repeat {
    /// Creates a repetition of `inner`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidCount`] if `count` is zero.
    pub fn new(inner: impl Sequence + 'static, count: usize) -> Result<Self, SequenceError> {
        Self::from_boxed(Box::new(inner), count)
    }

    /// Repeats each value [`DEFAULT_REPEAT_COUNT`] times.
    pub fn with_default_count(inner: impl Sequence + 'static) -> Self {
        Self {
            inner: Box::new(inner),
            count: DEFAULT_REPEAT_COUNT,
            pending: 0.0,
            emitted: None,
            map: Mapping::identity(),
        }
    }

    /// Same as [`Repeat::new`] for an already boxed sequence.
    ///
    /// # Errors
    ///
    /// Same as [`Repeat::new`].
    pub fn from_boxed(inner: BoxedSequence, count: usize) -> Result<Self, SequenceError> {
        if count == 0 {
            return Err(SequenceError::InvalidCount(count));
        }
        Ok(Self {
            inner,
            count,
            pending: 0.0,
            emitted: None,
            map: Mapping::identity(),
        })
    }

    /// Returns the repetition count.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Sets the repetition count. A value already emitted at least `count`
    /// times is replaced on the next call.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidCount`] if `count` is zero.
    pub fn set_count(&mut self, count: usize) -> Result<&mut Self, SequenceError> {
        if count == 0 {
            return Err(SequenceError::InvalidCount(count));
        }
        self.count = count;
        Ok(self)
    }
}

impl Sequence for Repeat {
    fn next_raw(&mut self) -> f64 {
        let emitted = match self.emitted {
            Some(n) if n < self.count => n,
            _ => {
                self.pending = self.inner.next();
                0
            }
        };
        self.emitted = Some(emitted + 1);
        self.pending
    }

    fn map(&self) -> &Mapping {
        &self.map
    }

    fn map_mut(&mut self) -> &mut Mapping {
        &mut self.map
    }
}
