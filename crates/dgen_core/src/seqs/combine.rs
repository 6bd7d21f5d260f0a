//! Element-wise sum of several sequences.

use super::{BoxedSequence, Cycle, Mapping, Sequence};
use crate::error::SequenceError;

/// One input to a [`Combine`]: either a sequence or a raw pattern that is
/// lifted into a [`Cycle`].
#[derive(Debug)]
pub enum Constituent {
    /// Raw numeric pattern, cycled.
    Pattern(Vec<f64>),
    /// Arbitrary sequence.
    Sequence(BoxedSequence),
}

impl Constituent {
    /// Wraps a sequence.
    pub fn sequence(seq: impl Sequence + 'static) -> Self {
        Self::Sequence(Box::new(seq))
    }

    fn into_sequence(self) -> Result<BoxedSequence, SequenceError> {
        match self {
            Self::Pattern(pattern) => Ok(Box::new(Cycle::new(pattern)?)),
            Self::Sequence(seq) => Ok(seq),
        }
    }
}

impl From<Vec<f64>> for Constituent {
    fn from(pattern: Vec<f64>) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<&[f64]> for Constituent {
    fn from(pattern: &[f64]) -> Self {
        Self::Pattern(pattern.to_vec())
    }
}

impl From<BoxedSequence> for Constituent {
    fn from(seq: BoxedSequence) -> Self {
        Self::Sequence(seq)
    }
}

/// Sums one draw from each constituent, in the order they were added.
///
/// An empty combination yields 0.
///
/// # Examples
///
/// ```rust
/// use dgen_core::seqs::{Arithmetic, Combine, Constant, Constituent, Sequence};
///
/// let mut seq = Combine::from_constituents(vec![
///     Constituent::sequence(Constant::new(100.0)),
///     Constituent::from(vec![1.0, -1.0]),
/// ])
/// .unwrap()
/// .with(Arithmetic::default());
///
/// let values: Vec<f64> = seq.iter().take(3).collect();
/// assert_eq!(values, vec![101.0, 100.0, 103.0]);
/// ```
#[derive(Debug, Default)]
pub struct Combine {
    parts: Vec<BoxedSequence>,
    map: Mapping,
}

impl Combine {
    /// Creates an empty combination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a combination from constituents.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyPattern`] if any raw pattern is empty.
    pub fn from_constituents<I>(constituents: I) -> Result<Self, SequenceError>
    where
        I: IntoIterator<Item = Constituent>,
    {
        let parts = constituents
            .into_iter()
            .map(Constituent::into_sequence)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            parts,
            map: Mapping::identity(),
        })
    }

    /// Appends a constituent.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyPattern`] for an empty raw pattern.
    pub fn add(&mut self, constituent: impl Into<Constituent>) -> Result<&mut Self, SequenceError> {
        self.parts.push(constituent.into().into_sequence()?);
        Ok(self)
    }

    /// Appends a sequence, consuming and returning `self`.
    pub fn with(mut self, seq: impl Sequence + 'static) -> Self {
        self.parts.push(Box::new(seq));
        self
    }

    /// Number of constituents.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns `true` if there are no constituents.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl Sequence for Combine {
    fn next_raw(&mut self) -> f64 {
        self.parts.iter_mut().fold(0.0, |acc, seq| acc + seq.next())
    }

    fn map(&self) -> &Mapping {
        &self.map
    }

    fn map_mut(&mut self) -> &mut Mapping {
        &mut self.map
    }
}
