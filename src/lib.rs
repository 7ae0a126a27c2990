//! Deme-based evolutionary optimization engine.
//!
//! Given an opaque fitness function over a fixed-length real genome, the
//! engine keeps one or more sub-populations ("demes") of candidate
//! solutions and repeatedly applies crossover, mutation, and tournament
//! selection to drive them toward lower fitness (minimization).
//!
//! - [`evolution`]: the `Individual`/`Deme`/`Population` model, the
//!   per-generation loop, and the generic operator suite that works across
//!   floating-point, integer, and categorical genes.
//! - [`random`]: explicit, seedable randomness sources. No operator keeps a
//!   generator as hidden state.
//! - [`error`]: typed configuration, operator, and fitness errors.
//!
//! # Quick Start
//!
//! ```
//! use u_evolve::evolution::{Population, PopulationConfig};
//!
//! fn sphere(genome: &[f64]) -> f64 {
//!     genome.iter().map(|x| x * x).sum()
//! }
//!
//! let config = PopulationConfig::default().with_demes(2).with_seed(7);
//! let mut population = Population::initialize(config, sphere, 5)?;
//! let result = population.evolve(50)?;
//! assert!(result.best_fitness <= result.fitness_history[0]);
//! # Ok::<(), u_evolve::error::Error>(())
//! ```
//!
//! # Features
//!
//! - `parallel`: evolve demes concurrently with rayon.
//! - `serde`: `Serialize`/`Deserialize` for configuration, individuals, and demes.

pub mod error;
pub mod evolution;
pub mod random;
