//! Error taxonomy for the evolutionary engine.
//!
//! Three failure families exist:
//!
//! - [`ConfigError`]: a configuration field is outside its domain. Raised by
//!   [`PopulationConfig::validate`](crate::evolution::PopulationConfig::validate)
//!   and at population initialization.
//! - [`OperatorError`]: an operator was called with a degenerate genome or an
//!   out-of-domain parameter.
//! - [`FitnessError`]: the external fitness function failed. Never retried.
//!
//! Nothing is clamped. Every out-of-domain input fails fast.

use std::error::Error as StdError;

/// Invalid population configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("demes must be at least 1")]
    ZeroDemes,
    #[error("individuals per deme must be at least 1")]
    ZeroIndividuals,
    #[error("genes must be at least 1")]
    ZeroGenes,
    #[error("contestants must be at least 1")]
    ZeroContestants,
    #[error("boundary must be finite and non-negative, got: {0}")]
    InvalidBoundary(f64),
    #[error("mutation rate must be between 0.0 and 1.0, got: {0}")]
    RateOutOfRange(f64),
    #[error("mutation std must be finite and non-negative, got: {0}")]
    InvalidStd(f64),
}

/// Invalid operator input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OperatorError {
    #[error("genome is empty")]
    EmptyGenome,
    #[error("operator requires at least {required} genes, got: {actual}")]
    TooFewGenes { required: usize, actual: usize },
    #[error("rate must be between 0.0 and 1.0, got: {0}")]
    RateOutOfRange(f64),
    #[error("std must be finite and non-negative, got: {0}")]
    InvalidStd(f64),
    #[error("count {count} exceeds genome length {len}")]
    CountExceedsLength { count: usize, len: usize },
    #[error("parent genomes differ in length: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("tournament requires at least one contestant")]
    NoContestants,
    #[error("cannot select from an empty pool")]
    EmptyPool,
}

/// Failure of the external fitness function.
#[derive(Debug, thiserror::Error)]
pub enum FitnessError {
    #[error("fitness function returned NaN")]
    NotANumber,
    #[error("fitness evaluation failed: {0}")]
    Evaluation(#[source] Box<dyn StdError + Send + Sync>),
}

/// Crate-level error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("OperatorError: {0}")]
    Operator(#[from] OperatorError),
    #[error("FitnessError: {0}")]
    Fitness(#[from] FitnessError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
