//! Population configuration.
//!
//! [`PopulationConfig`] holds every parameter that controls the deme layout
//! and the per-generation operators.

use crate::error::ConfigError;
use rand::distr::Uniform;

/// Configuration for a deme-based [`Population`](super::Population).
///
/// # Defaults
///
/// ```
/// use u_evolve::evolution::PopulationConfig;
///
/// let config = PopulationConfig::default();
/// assert_eq!(config.demes, 1);
/// assert_eq!(config.individuals, 30);
/// assert_eq!(config.contestants, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::evolution::PopulationConfig;
///
/// let config = PopulationConfig::default()
///     .with_demes(4)
///     .with_individuals(50)
///     .with_rate(0.2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
///
/// Builders store values as given. Out-of-domain values are reported by
/// [`validate`](Self::validate), never clamped.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationConfig {
    /// Number of demes (independently evolving sub-populations).
    pub demes: usize,

    /// Number of individuals kept in each deme between generations.
    pub individuals: usize,

    /// Initial genes are drawn uniformly from `[-boundary, boundary]`.
    ///
    /// Must be non-negative and small enough that the width `2 * boundary`
    /// stays finite.
    pub boundary: f64,

    /// Parent pairs drawn per deme per generation.
    pub couples: usize,

    /// Offspring produced by each couple.
    pub offsprings: usize,

    /// Per-gene probability of normal mutation (0.0–1.0).
    pub rate: f64,

    /// Standard deviation of the normal mutation.
    pub std_dev: f64,

    /// Contestants drawn per tournament.
    ///
    /// 1 means uniform random survival; larger values increase elitism.
    pub contestants: usize,

    /// Whether to evolve demes in parallel using rayon.
    ///
    /// Only honoured when the crate is built with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            demes: 1,
            individuals: 30,
            boundary: 100.0,
            couples: 10,
            offsprings: 2,
            rate: 0.1,
            std_dev: 1.0,
            contestants: 3,
            parallel: true,
            seed: None,
        }
    }
}

impl PopulationConfig {
    /// Sets the number of demes.
    pub fn with_demes(mut self, n: usize) -> Self {
        self.demes = n;
        self
    }

    /// Sets the number of individuals per deme.
    pub fn with_individuals(mut self, n: usize) -> Self {
        self.individuals = n;
        self
    }

    /// Sets the initial random boundary.
    pub fn with_boundary(mut self, boundary: f64) -> Self {
        self.boundary = boundary;
        self
    }

    /// Sets the number of couples per generation.
    pub fn with_couples(mut self, n: usize) -> Self {
        self.couples = n;
        self
    }

    /// Sets the number of offspring per couple.
    pub fn with_offsprings(mut self, n: usize) -> Self {
        self.offsprings = n;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Sets the mutation standard deviation.
    pub fn with_std_dev(mut self, std_dev: f64) -> Self {
        self.std_dev = std_dev;
        self
    }

    /// Sets the tournament size.
    pub fn with_contestants(mut self, k: usize) -> Self {
        self.contestants = k;
        self
    }

    /// Enables or disables parallel deme evolution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of individuals a deme holds right after crossover.
    pub fn crossed_size(&self) -> usize {
        self.individuals + self.couples * self.offsprings
    }

    /// Validates the configuration.
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.demes == 0 {
            return Err(ConfigError::ZeroDemes);
        }
        if self.individuals == 0 {
            return Err(ConfigError::ZeroIndividuals);
        }
        boundary_span(self.boundary)?;
        if !(0.0..=1.0).contains(&self.rate) {
            return Err(ConfigError::RateOutOfRange(self.rate));
        }
        if !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(ConfigError::InvalidStd(self.std_dev));
        }
        if self.contestants == 0 {
            return Err(ConfigError::ZeroContestants);
        }
        Ok(())
    }
}

/// Uniform sampler over `[-boundary, boundary]`.
///
/// Fails for a negative or NaN boundary, and for one so large that the
/// range width overflows.
pub(crate) fn boundary_span(boundary: f64) -> Result<Uniform<f64>, ConfigError> {
    if boundary < 0.0 || !(2.0 * boundary).is_finite() {
        return Err(ConfigError::InvalidBoundary(boundary));
    }
    Uniform::new_inclusive(-boundary, boundary).map_err(|_| ConfigError::InvalidBoundary(boundary))
}
