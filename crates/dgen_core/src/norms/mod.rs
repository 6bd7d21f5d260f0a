//! # Batch Normalisers
//!
//! Post-processing applied to a finite batch of sequence draws. Every
//! normaliser is a pure function of its input batch: one pass computes a
//! summary statistic, a second pass applies a per-element affine transform.
//!
//! - [`Identity`]: returns the batch unchanged
//! - [`Minmax`]: maps the observed range onto a target range
//! - [`Sum`]: scales the batch so it totals a target sum
//!
//! ```rust
//! use dgen_core::norms::{Minmax, Normalizer};
//!
//! let scaled = Minmax::new(10.0, 20.0).normalize(vec![0.0, 0.5, 1.0]);
//! assert_eq!(scaled, vec![10.0, 15.0, 20.0]);
//! ```

mod identity;
mod minmax;
mod sum;

use std::fmt;

pub use identity::Identity;
pub use minmax::Minmax;
pub use sum::Sum;

/// Batch rescaling function.
pub trait Normalizer: fmt::Debug {
    /// Rescales a finite batch.
    fn normalize(&self, data: Vec<f64>) -> Vec<f64>;
}

impl<N: Normalizer + ?Sized> Normalizer for Box<N> {
    fn normalize(&self, data: Vec<f64>) -> Vec<f64> {
        (**self).normalize(data)
    }
}
