//! Declarative batch configuration.
//!
//! Describes a sequence, its generators, a post-processing map and a
//! normaliser as data, parsed from TOML or JSON text and built against a
//! [`GeneratorContext`].
//!
//! ```rust
//! use dgen_core::config::BatchConfig;
//!
//! let config = BatchConfig::from_toml_str(r#"
//!     length = 4
//!
//!     [sequence]
//!     kind = "combine"
//!     parts = [[0, 10], { kind = "arithmetic", start = 1, step = 1 }]
//! "#).unwrap();
//!
//! assert_eq!(config.generate().unwrap(), vec![1.0, 12.0, 3.0, 14.0]);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::GeneratorContext;
use crate::error::{ConfigError, RngError, SequenceError};
use crate::norms::{Identity, Minmax, Normalizer, Sum};
use crate::rng::{BoxedRng, Normal, Pareto, Preset, Uniform};
use crate::seqs::{
    Arithmetic, BoxedSequence, Combine, Constant, Constituent, Cycle, Geometric, Mapping, Random,
    RandomWalk, Repeat, Sequence, DEFAULT_REPEAT_COUNT,
};

/// Maximum batch length accepted by [`BatchConfig::validate`].
pub const MAX_BATCH_LENGTH: usize = 10_000_000;

/// Maximum rounding precision accepted by [`BatchConfig::validate`]. An `f64`
/// carries about 15 significant decimal digits.
pub const MAX_ROUND_DECIMALS: u32 = 15;

fn one() -> f64 {
    1.0
}

fn two() -> f64 {
    2.0
}

fn half() -> f64 {
    0.5
}

fn neg_infinity() -> f64 {
    f64::NEG_INFINITY
}

fn infinity() -> f64 {
    f64::INFINITY
}

fn default_pattern() -> Vec<f64> {
    vec![0.0, 1.0]
}

fn default_count() -> usize {
    DEFAULT_REPEAT_COUNT
}

/// Random number generator description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RngConfig {
    /// The context's shared default uniform source. Same as an unseeded
    /// `uniform`.
    #[default]
    Shared,
    /// Fixed list of values, cycled.
    Preset {
        /// Values to cycle through
        values: Vec<f64>,
    },
    /// Uniform draws. A seeded generator owns a private source; an unseeded
    /// one draws from the context's default source.
    Uniform {
        /// Optional seed; the context's default source when absent
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Gaussian draws.
    Normal {
        /// Mean
        #[serde(default)]
        mu: f64,
        /// Standard deviation
        #[serde(default = "one")]
        sigma: f64,
        /// Optional seed; entropy when absent
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Pareto draws with unit scale.
    Pareto {
        /// Shape parameter
        alpha: f64,
        /// Optional seed; entropy when absent
        #[serde(default)]
        seed: Option<u64>,
    },
}

impl RngConfig {
    /// Builds the described generator.
    ///
    /// # Errors
    ///
    /// Returns [`RngError`] for an empty preset or invalid distribution
    /// parameters.
    pub fn build(&self, ctx: &GeneratorContext) -> Result<BoxedRng, RngError> {
        let rng: BoxedRng = match self {
            Self::Shared | Self::Uniform { seed: None } => Box::new(ctx.uniform()),
            Self::Preset { values } => Box::new(Preset::new(values.clone())?),
            Self::Uniform { seed: Some(seed) } => Box::new(Uniform::seeded(*seed)),
            Self::Normal {
                mu,
                sigma,
                seed: Some(seed),
            } => Box::new(Normal::seeded(*mu, *sigma, *seed)?),
            Self::Normal {
                mu,
                sigma,
                seed: None,
            } => Box::new(Normal::new(*mu, *sigma)?),
            Self::Pareto {
                alpha,
                seed: Some(seed),
            } => Box::new(Pareto::seeded(*alpha, *seed)?),
            Self::Pareto { alpha, seed: None } => Box::new(Pareto::new(*alpha)?),
        };
        Ok(rng)
    }
}

/// Constituent of a `combine` sequence: a raw pattern or a nested sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PartConfig {
    /// Raw pattern, cycled.
    Pattern(Vec<f64>),
    /// Nested sequence.
    Sequence(SequenceConfig),
}

/// Sequence description. Omitted parameters take the same defaults as the
/// corresponding `Default` or `from_context` constructors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SequenceConfig {
    /// See [`Constant`].
    Constant {
        /// Constant value
        #[serde(default)]
        value: f64,
    },
    /// See [`Cycle`].
    Cycle {
        /// Pattern to repeat
        #[serde(default = "default_pattern")]
        pattern: Vec<f64>,
    },
    /// See [`Arithmetic`].
    Arithmetic {
        /// First value
        #[serde(default)]
        start: f64,
        /// Increment
        #[serde(default = "one")]
        step: f64,
    },
    /// See [`Geometric`].
    Geometric {
        /// First value
        #[serde(default = "one")]
        start: f64,
        /// Common ratio
        #[serde(default = "two")]
        ratio: f64,
    },
    /// See [`Random`].
    Random {
        /// Generator
        #[serde(default)]
        rng: RngConfig,
        /// Lower bound
        #[serde(default = "neg_infinity")]
        min: f64,
        /// Upper bound
        #[serde(default = "infinity")]
        max: f64,
    },
    /// See [`RandomWalk`].
    RandomWalk {
        /// Step magnitude generator
        #[serde(default)]
        rng: RngConfig,
        /// First value
        #[serde(default = "half")]
        start: f64,
        /// Lower bound
        #[serde(default)]
        min: f64,
        /// Upper bound
        #[serde(default = "one")]
        max: f64,
    },
    /// See [`Combine`].
    Combine {
        /// Constituents, summed in order
        #[serde(default)]
        parts: Vec<PartConfig>,
    },
    /// See [`Repeat`].
    Repeat {
        /// Inner sequence
        sequence: Box<SequenceConfig>,
        /// Repetitions per inner value
        #[serde(default = "default_count")]
        count: usize,
    },
}

impl SequenceConfig {
    /// Short identifier of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Constant { .. } => "constant",
            Self::Cycle { .. } => "cycle",
            Self::Arithmetic { .. } => "arithmetic",
            Self::Geometric { .. } => "geometric",
            Self::Random { .. } => "random",
            Self::RandomWalk { .. } => "random_walk",
            Self::Combine { .. } => "combine",
            Self::Repeat { .. } => "repeat",
        }
    }

    /// Builds the described sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError`] for empty patterns, inverted bounds, a zero
    /// repeat count, or an invalid generator.
    pub fn build(&self, ctx: &GeneratorContext) -> Result<BoxedSequence, SequenceError> {
        debug!(kind = self.kind(), "building sequence from configuration");
        let seq: BoxedSequence = match self {
            Self::Constant { value } => Box::new(Constant::new(*value)),
            Self::Cycle { pattern } => Box::new(Cycle::new(pattern.clone())?),
            Self::Arithmetic { start, step } => Box::new(Arithmetic::new(*start, *step)),
            Self::Geometric { start, ratio } => Box::new(Geometric::new(*start, *ratio)),
            Self::Random { rng, min, max } => {
                Box::new(Random::from_boxed(rng.build(ctx)?, *min, *max)?)
            }
            Self::RandomWalk {
                rng,
                start,
                min,
                max,
            } => Box::new(RandomWalk::from_boxed(
                ctx,
                rng.build(ctx)?,
                *start,
                *min,
                *max,
            )?),
            Self::Combine { parts } => {
                let constituents = parts
                    .iter()
                    .map(|part| match part {
                        PartConfig::Pattern(pattern) => Ok(Constituent::Pattern(pattern.clone())),
                        PartConfig::Sequence(config) => config.build(ctx).map(Constituent::from),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Box::new(Combine::from_constituents(constituents)?)
            }
            Self::Repeat { sequence, count } => {
                Box::new(Repeat::from_boxed(sequence.build(ctx)?, *count)?)
            }
        };
        Ok(seq)
    }
}

/// Normaliser description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizerConfig {
    /// See [`Identity`].
    #[default]
    Identity,
    /// See [`Minmax`].
    Minmax {
        /// Target minimum
        #[serde(default)]
        min: f64,
        /// Target maximum
        #[serde(default = "one")]
        max: f64,
    },
    /// See [`Sum`].
    Sum {
        /// Target sum
        #[serde(default = "one")]
        sum: f64,
    },
}

impl NormalizerConfig {
    /// Builds the described normaliser.
    pub fn build(&self) -> Box<dyn Normalizer> {
        match *self {
            Self::Identity => Box::new(Identity),
            Self::Minmax { min, max } => Box::new(Minmax::new(min, max)),
            Self::Sum { sum } => Box::new(Sum::new(sum)),
        }
    }
}

/// Affine post-processing map, `x * scale + offset`, optionally rounded to
/// `round` decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Multiplier
    #[serde(default = "one")]
    pub scale: f64,
    /// Added after scaling
    #[serde(default)]
    pub offset: f64,
    /// Decimal places to round to, at most [`MAX_ROUND_DECIMALS`]
    #[serde(default)]
    pub round: Option<u32>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: 0.0,
            round: None,
        }
    }
}

impl MapConfig {
    /// Converts to a sequence mapping.
    ///
    /// A precision whose scale factor is not finite leaves values unrounded.
    pub fn to_mapping(&self) -> Mapping {
        let MapConfig {
            scale,
            offset,
            round,
        } = *self;
        let factor = round
            .map(|decimals| 10f64.powi(decimals.min(i32::MAX as u32) as i32))
            .filter(|factor| factor.is_finite());
        match factor {
            Some(factor) => {
                Mapping::new(move |x| ((x * scale + offset) * factor).round() / factor)
            }
            None => Mapping::new(move |x| x * scale + offset),
        }
    }
}

/// Complete description of one generated batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Number of values to draw
    pub length: usize,
    /// Sequence to draw from
    pub sequence: SequenceConfig,
    /// Normaliser applied to the batch
    #[serde(default)]
    pub normalizer: NormalizerConfig,
    /// Post-processing map installed on the top-level sequence
    #[serde(default)]
    pub map: Option<MapConfig>,
    /// Seed for the default source of a fresh context
    #[serde(default)]
    pub seed: Option<u64>,
}

impl BatchConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed input.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed input.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validates the batch length and the map precision.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLength`] unless `length` is in
    /// `[1, MAX_BATCH_LENGTH]`, and [`ConfigError::InvalidRound`] if the map
    /// rounds to more than [`MAX_ROUND_DECIMALS`] places.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.length == 0 || self.length > MAX_BATCH_LENGTH {
            return Err(ConfigError::InvalidLength(self.length));
        }
        if let Some(decimals) = self.map.and_then(|map| map.round) {
            if decimals > MAX_ROUND_DECIMALS {
                return Err(ConfigError::InvalidRound(decimals));
            }
        }
        Ok(())
    }

    /// Creates the context this batch runs in when none is supplied.
    pub fn context(&self) -> GeneratorContext {
        self.seed
            .map(GeneratorContext::with_seed)
            .unwrap_or_default()
    }

    /// Builds the top-level sequence with the configured map installed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any part of the sequence is invalid.
    pub fn build_sequence(&self, ctx: &GeneratorContext) -> Result<BoxedSequence, ConfigError> {
        let mut seq = self.sequence.build(ctx)?;
        if let Some(map) = &self.map {
            seq.set_map(map.to_mapping());
        }
        Ok(seq)
    }

    /// Generates the batch in a fresh context (see [`BatchConfig::context`]).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on validation or build failure.
    pub fn generate(&self) -> Result<Vec<f64>, ConfigError> {
        self.generate_with(&self.context())
    }

    /// Generates the batch against an existing context.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on validation or build failure.
    pub fn generate_with(&self, ctx: &GeneratorContext) -> Result<Vec<f64>, ConfigError> {
        self.validate()?;
        let mut seq = self.build_sequence(ctx)?;
        let normalizer = self.normalizer.build();
        debug!(
            length = self.length,
            kind = self.sequence.kind(),
            ?normalizer,
            "generating batch"
        );
        Ok(seq.array(self.length, normalizer.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{Rng, Source};
    use approx::assert_relative_eq;

    /// Omitted fields take the constructor defaults.
    #[test]
    fn test_defaults_fill_omitted_fields() {
        let config = BatchConfig::from_toml_str(
            r#"
            length = 3
            [sequence]
            kind = "geometric"
            "#,
        )
        .unwrap();
        assert_eq!(config.normalizer, NormalizerConfig::Identity);
        assert_eq!(config.map, None);
        assert_eq!(config.generate().unwrap(), vec![1.0, 2.0, 4.0]);
    }

    /// JSON input and a sum normaliser.
    #[test]
    fn test_json_with_sum_normalizer() {
        let config = BatchConfig::from_json_str(
            r#"{
                "length": 3,
                "sequence": { "kind": "cycle", "pattern": [1, 4, 5] },
                "normalizer": { "kind": "sum", "sum": 1 }
            }"#,
        )
        .unwrap();
        let data = config.generate().unwrap();
        assert_relative_eq!(data[0], 0.1, epsilon = 1e-12);
        assert_relative_eq!(data[1], 0.4, epsilon = 1e-12);
        assert_relative_eq!(data[2], 0.5, epsilon = 1e-12);
    }

    /// The map scales, offsets and rounds every value.
    #[test]
    fn test_map_applies_scale_offset_and_rounding() {
        let config = BatchConfig::from_toml_str(
            r#"
            length = 3
            [sequence]
            kind = "arithmetic"
            step = 0.3333
            [map]
            scale = 3.0
            offset = 1.0
            round = 1
            "#,
        )
        .unwrap();
        assert_eq!(config.generate().unwrap(), vec![1.0, 2.0, 3.0]);
    }

    /// Nested tables build a repeat around a cycle.
    #[test]
    fn test_nested_repeat() {
        let config = BatchConfig::from_toml_str(
            r#"
            length = 6
            [sequence]
            kind = "repeat"
            count = 3
            [sequence.sequence]
            kind = "cycle"
            pattern = [7, 8]
            "#,
        )
        .unwrap();
        assert_eq!(
            config.generate().unwrap(),
            vec![7.0, 7.0, 7.0, 8.0, 8.0, 8.0]
        );
    }

    /// A batch seed makes random walk output reproducible.
    #[test]
    fn test_seeded_batches_reproduce() {
        let text = r#"
            length = 50
            seed = 42
            [sequence]
            kind = "random_walk"
            min = -1
            max = 1
            start = 0
        "#;
        let a = BatchConfig::from_toml_str(text).unwrap().generate().unwrap();
        let b = BatchConfig::from_toml_str(text).unwrap().generate().unwrap();
        assert_eq!(a, b);
        assert_eq!(a[0], 0.0);
        assert!(a.iter().all(|v| (-1.0..=1.0).contains(v)));
    }

    /// A preset generator feeds a clamped random sequence.
    #[test]
    fn test_random_with_preset_rng() {
        let config = BatchConfig::from_toml_str(
            r#"
            length = 3
            [sequence]
            kind = "random"
            min = 0
            max = 1
            [sequence.rng]
            kind = "preset"
            values = [-2, 0.25, 9]
            "#,
        )
        .unwrap();
        assert_eq!(config.generate().unwrap(), vec![0.0, 0.25, 1.0]);
    }

    /// Invalid lengths, patterns and generators are reported.
    #[test]
    fn test_validation_errors() {
        let config = BatchConfig {
            length: 0,
            sequence: SequenceConfig::Constant { value: 1.0 },
            normalizer: NormalizerConfig::default(),
            map: None,
            seed: None,
        };
        assert_eq!(config.generate(), Err(ConfigError::InvalidLength(0)));

        let config = BatchConfig {
            length: 2,
            sequence: SequenceConfig::Cycle { pattern: vec![] },
            ..config
        };
        assert_eq!(
            config.generate(),
            Err(ConfigError::Sequence(SequenceError::EmptyPattern))
        );

        let config = BatchConfig {
            sequence: SequenceConfig::Random {
                rng: RngConfig::Normal {
                    mu: 0.0,
                    sigma: -1.0,
                    seed: None,
                },
                min: 0.0,
                max: 1.0,
            },
            ..config
        };
        assert!(matches!(
            config.generate(),
            Err(ConfigError::Sequence(SequenceError::Rng(
                RngError::InvalidDistribution { .. }
            )))
        ));
    }

    /// Unseeded uniform generators draw from the batch's seeded context.
    #[test]
    fn test_seeded_batch_with_unseeded_uniform_reproduces() {
        let text = r#"
            length = 5
            seed = 42
            [sequence]
            kind = "random"
            [sequence.rng]
            kind = "uniform"
        "#;
        let a = BatchConfig::from_toml_str(text).unwrap().generate().unwrap();
        let b = BatchConfig::from_toml_str(text).unwrap().generate().unwrap();
        assert_eq!(a, b);

        let mut reference = Source::from_seed(42);
        let expected: Vec<f64> = (0..5).map(|_| reference.random()).collect();
        assert_eq!(a, expected);
    }

    /// Unseeded uniform and shared generators consume one common stream.
    #[test]
    fn test_unseeded_uniform_shares_context_source() {
        let ctx = GeneratorContext::with_seed(9);
        let mut uniform = RngConfig::Uniform { seed: None }.build(&ctx).unwrap();
        let mut shared = RngConfig::Shared.build(&ctx).unwrap();
        let mut reference = Source::from_seed(9);
        assert_eq!(uniform.next(), reference.random());
        assert_eq!(shared.next(), reference.random());
        assert_eq!(uniform.next(), reference.random());
    }

    /// Rounding precision beyond `f64` resolution is rejected.
    #[test]
    fn test_excessive_rounding_rejected() {
        let config = BatchConfig::from_toml_str(
            r#"
            length = 3
            [sequence]
            kind = "arithmetic"
            [map]
            round = 400
            "#,
        )
        .unwrap();
        assert_eq!(config.generate(), Err(ConfigError::InvalidRound(400)));

        let config = BatchConfig {
            map: Some(MapConfig {
                round: Some(MAX_ROUND_DECIMALS),
                ..MapConfig::default()
            }),
            ..config
        };
        assert_eq!(config.generate().unwrap(), vec![0.0, 1.0, 2.0]);
    }

    /// A mapping built directly with a huge precision stays finite.
    #[test]
    fn test_unrepresentable_rounding_leaves_values_unrounded() {
        let mapping = MapConfig {
            scale: 2.0,
            offset: 0.5,
            round: Some(400),
        }
        .to_mapping();
        assert_eq!(mapping.apply(1.25), 3.0);
        assert!(mapping.apply(0.123_456_789).is_finite());
    }

    /// A walk start outside its bounds is rejected.
    #[test]
    fn test_random_walk_start_outside_bounds() {
        let config = BatchConfig::from_toml_str(
            r#"
            length = 3
            [sequence]
            kind = "random_walk"
            start = 2
            "#,
        )
        .unwrap();
        assert_eq!(
            config.generate(),
            Err(ConfigError::Sequence(SequenceError::StartOutOfBounds {
                start: 2.0,
                min: 0.0,
                max: 1.0
            }))
        );
    }

    /// Malformed text gives a parse error.
    #[test]
    fn test_parse_error() {
        assert!(matches!(
            BatchConfig::from_toml_str("length = \"many\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
