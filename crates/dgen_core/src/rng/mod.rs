//! # Random Number Generators
//!
//! Thin single-draw wrappers over a pseudo-random [`Source`]. Stochastic
//! sequences pull their values through the [`Rng`] trait, so any variant can
//! be swapped in without touching the sequence.
//!
//! ## Variants
//!
//! - [`Preset`]: cycles a fixed list of values (deterministic)
//! - [`Uniform`]: uniform draws in [0, 1), seeded or shared
//! - [`Normal`]: Gaussian draws with fixed mean and standard deviation
//! - [`Pareto`]: Pareto draws with fixed shape
//!
//! ## Usage Example
//!
//! ```rust
//! use dgen_core::rng::{Preset, Rng, Uniform};
//!
//! let mut preset = Preset::new(vec![0.25, 0.75]).unwrap();
//! assert_eq!(preset.next(), 0.25);
//! assert_eq!(preset.next(), 0.75);
//! assert_eq!(preset.next(), 0.25);
//!
//! let mut uniform = Uniform::seeded(42);
//! let value = uniform.next();
//! assert!((0.0..1.0).contains(&value));
//! ```

mod normal;
mod pareto;
mod preset;
mod source;
mod uniform;

use std::fmt;

pub use normal::Normal;
pub use pareto::Pareto;
pub use preset::Preset;
pub use source::{SharedSource, Source};
pub use uniform::Uniform;

pub(crate) use source::{normal_distribution, pareto_distribution};

/// Single-draw random number generator.
///
/// No bounds are guaranteed beyond those of the configured distribution.
pub trait Rng: Send + fmt::Debug {
    /// Draws the next value.
    fn next(&mut self) -> f64;

    /// Short identifier of the variant, used in logs.
    fn name(&self) -> &'static str;
}

impl<R: Rng + ?Sized> Rng for Box<R> {
    #[inline]
    fn next(&mut self) -> f64 {
        (**self).next()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Owned, type-erased generator.
pub type BoxedRng = Box<dyn Rng>;

#[cfg(test)]
mod tests;
