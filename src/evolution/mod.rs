//! Deme-based evolutionary optimization.
//!
//! A [`Population`] holds one or more [`Deme`]s of [`Individual`]s with
//! fixed-length real genomes and drives them toward lower fitness with
//! blend crossover, normal mutation, and tournament survivor selection.
//!
//! # Key Types
//!
//! - [`PopulationConfig`]: deme layout and operator parameters
//! - [`Population`]: initialization, per-generation enhancement, best tracking
//! - [`Deme`]: one sub-population and its generation cycle
//! - [`FitnessFunction`]: the external scoring contract
//!
//! # Submodules
//!
//! - [`operators`]: generic mutation operators (normal, uniform, permute, splice)
//! - [`crossover`]: blend and uniform crossover
//! - [`selection`]: tournament selection
//!
//! # Concurrency
//!
//! Demes share no mutable state during a generation. With the `parallel`
//! feature and [`PopulationConfig::parallel`] set, demes are evolved
//! concurrently with rayon, each on its own generator. Callers that evolve
//! demes by hand must likewise give each thread its own generator.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Cantú-Paz (2000), *Efficient and Accurate Parallel Genetic Algorithms*

mod config;
pub mod crossover;
mod deme;
pub mod operators;
mod population;
pub mod selection;
mod types;

pub use config::PopulationConfig;
pub use deme::Deme;
pub use operators::NumericGene;
pub use population::{EvolutionResult, Population};
pub use types::{fallible, Fallible, FitnessFunction, Individual};
