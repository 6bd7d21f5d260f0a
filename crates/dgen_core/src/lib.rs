//! # dgen_core: Deterministic and Stochastic Numeric Sequences
//!
//! Building blocks for synthetic data streams: seeding tests, driving
//! simulations, filling mock datasets.
//!
//! ## Layers
//!
//! - [`rng`]: single-draw random number generators over a seedable source
//! - [`seqs`]: infinite lazy sequences, deterministic, stochastic and composite
//! - [`norms`]: batch normalisers applied after a finite run of draws
//! - [`context`]: the shared default source, passed explicitly
//! - [`config`]: declarative batch descriptions parsed from TOML or JSON
//! - [`error`]: construction-time error types
//!
//! Nothing runs until `next()` or `array()` is called. Generation is total;
//! only construction and reconfiguration can fail.
//!
//! ## Usage Examples
//!
//! ```rust
//! use dgen_core::prelude::*;
//!
//! let ctx = GeneratorContext::with_seed(42);
//!
//! // Noisy ramp: arithmetic trend plus bounded uniform noise.
//! let noise = Random::new(ctx.uniform(), 0.0, 1.0).unwrap();
//! let mut ramp = Combine::new().with(Arithmetic::new(0.0, 10.0)).with(noise);
//! let batch = ramp.array(5, &Minmax::new(0.0, 100.0));
//!
//! assert_eq!(batch.len(), 5);
//! assert!(batch.iter().all(|v| (0.0..=100.0).contains(v)));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod context;
pub mod error;
pub mod norms;
pub mod rng;
pub mod seqs;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::BatchConfig;
    pub use crate::context::GeneratorContext;
    pub use crate::error::{ConfigError, RngError, SequenceError};
    pub use crate::norms::{Identity, Minmax, Normalizer, Sum};
    pub use crate::rng::{Normal, Pareto, Preset, Rng, Uniform};
    pub use crate::seqs::{
        Arithmetic, Combine, Constant, Cycle, Geometric, Mapping, Random, RandomWalk, Repeat,
        Sequence,
    };
}
