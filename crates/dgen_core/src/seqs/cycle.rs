use super::{Mapping, Sequence};
use crate::error::SequenceError;

/// Repeats a fixed pattern: the k-th draw is `pattern[k % pattern.len()]`.
///
/// # Examples
///
/// ```rust
/// use dgen_core::seqs::{Cycle, Sequence};
///
/// let mut seq = Cycle::new(vec![1.0, 3.0, 5.0]).unwrap();
/// let values: Vec<f64> = seq.iter().take(4).collect();
/// assert_eq!(values, vec![1.0, 3.0, 5.0, 1.0]);
///
/// assert!(Cycle::new(vec![]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Cycle {
    pattern: Vec<f64>,
    index: usize,
    map: Mapping,
}

impl Cycle {
    /// Creates a cycle over `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyPattern`] if `pattern` is empty.
    pub fn new(pattern: Vec<f64>) -> Result<Self, SequenceError> {
        if pattern.is_empty() {
            return Err(SequenceError::EmptyPattern);
        }
        Ok(Self {
            pattern,
            index: 0,
            map: Mapping::identity(),
        })
    }

    /// Returns the pattern.
    pub fn pattern(&self) -> &[f64] {
        &self.pattern
    }

    /// Replaces the pattern. The cursor keeps counting, so the next draw is
    /// taken modulo the new length.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyPattern`] if `pattern` is empty; the
    /// current pattern is kept.
    pub fn set_pattern(&mut self, pattern: Vec<f64>) -> Result<&mut Self, SequenceError> {
        if pattern.is_empty() {
            return Err(SequenceError::EmptyPattern);
        }
        self.pattern = pattern;
        Ok(self)
    }
}

impl Default for Cycle {
    /// Alternates between 0 and 1.
    fn default() -> Self {
        Self {
            pattern: vec![0.0, 1.0],
            index: 0,
            map: Mapping::identity(),
        }
    }
}

impl Sequence for Cycle {
    fn next_raw(&mut self) -> f64 {
        let value = self.pattern[self.index % self.pattern.len()];
        self.index = self.index.wrapping_add(1);
        value
    }

    fn map(&self) -> &Mapping {
        &self.map
    }

    fn map_mut(&mut self) -> &mut Mapping {
        &mut self.map
    }
}
