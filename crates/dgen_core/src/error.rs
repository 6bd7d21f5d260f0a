//! Error types for structured error handling.
//!
//! This module provides:
//! - `RngError`: Errors from random number generator construction
//! - `SequenceError`: Errors from sequence construction and reconfiguration
//! - `ConfigError`: Errors from declarative batch configuration
//!
//! Generation itself (`next`, `array`, `normalize`) never fails; every error
//! here is raised while a generator is being built or reconfigured.

use thiserror::Error;

/// Random number generator construction errors.
///
/// # Examples
/// ```
/// use dgen_core::error::RngError;
///
/// let err = RngError::EmptyPreset;
/// assert_eq!(format!("{}", err), "Preset generator requires at least one value");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RngError {
    /// A preset generator was given no values to cycle through.
    #[error("Preset generator requires at least one value")]
    EmptyPreset,

    /// Distribution parameters rejected.
    #[error("Invalid {name} distribution: {message}")]
    InvalidDistribution {
        /// Distribution name
        name: &'static str,
        /// Description of the invalid parameters
        message: String,
    },
}

/// Sequence construction errors.
///
/// # Examples
/// ```
/// use dgen_core::error::SequenceError;
///
/// let err = SequenceError::InvalidBounds { min: 1.0, max: 0.0 };
/// assert_eq!(format!("{}", err), "Invalid bounds: min 1 exceeds max 0");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SequenceError {
    /// A cycle pattern with no elements.
    #[error("Cycle pattern must not be empty")]
    EmptyPattern,

    /// Lower bound above the upper bound, or a NaN bound.
    #[error("Invalid bounds: min {min} exceeds max {max}")]
    InvalidBounds {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// Walk start outside the walk bounds.
    #[error("Invalid start {start}: must lie within [{min}, {max}]")]
    StartOutOfBounds {
        /// Requested start
        start: f64,
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// Repeat count that would never advance the inner sequence.
    #[error("Invalid repeat count {0}: must be at least 1")]
    InvalidCount(usize),

    /// Random number generator could not be built.
    #[error(transparent)]
    Rng(#[from] RngError),
}

/// Batch configuration errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// Configuration text could not be parsed.
    #[error("Configuration parse error: {0}")]
    Parse(String),

    /// Batch length outside the accepted range.
    #[error("Invalid batch length {0}: must be in range [1, 10_000_000]")]
    InvalidLength(usize),

    /// Rounding precision beyond what `f64` can represent.
    #[error("Invalid rounding precision {0}: must be at most 15 decimal places")]
    InvalidRound(u32),

    /// Configured sequence or one of its generators is invalid.
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

/// Result alias for sequence construction.
pub type Result<T> = std::result::Result<T, SequenceError>;
