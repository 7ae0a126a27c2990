//! Population: all demes, the fitness function, and the global best.
//!
//! [`Population`] owns its demes for the whole run. Each call to
//! [`enhance`](Population::enhance) drives every deme through one generation
//! and then ratchets the global best: it is replaced only by a strictly
//! better deme leader, so its fitness never increases.

use super::config::PopulationConfig;
use super::deme::Deme;
use super::types::{FitnessFunction, Individual};
use crate::error::{ConfigError, Result};
use crate::random::{create_rng, derive_rng};
use rand::rngs::StdRng;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of [`Population::evolve`].
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// The best individual found during the entire run.
    pub best: Individual,

    /// Best fitness value (same as `best.fitness`).
    pub best_fitness: f64,

    /// Total number of generations completed by the population.
    pub generations: usize,

    /// Best fitness before the run, then after each generation of the run.
    pub fitness_history: Vec<f64>,
}

/// A set of demes evolved against one fitness function.
///
/// # Usage
///
/// ```
/// use u_evolve::evolution::{Population, PopulationConfig};
///
/// fn sphere(genome: &[f64]) -> f64 {
///     genome.iter().map(|x| x * x).sum()
/// }
///
/// let config = PopulationConfig::default().with_seed(42);
/// let mut population = Population::initialize(config, sphere, 5).unwrap();
/// let start = population.best().fitness;
/// for _ in 0..20 {
///     population.enhance().unwrap();
/// }
/// assert!(population.best().fitness <= start);
/// ```
pub struct Population<F> {
    config: PopulationConfig,
    fitness: F,
    genes: usize,
    demes: Vec<Deme>,
    rngs: Vec<StdRng>,
    best: Individual,
    generation: usize,
}

impl<F: FitnessFunction> Population<F> {
    /// Creates, fills, and evaluates all demes.
    ///
    /// The generator is seeded from `config.seed`, or from a random seed
    /// when `None`.
    ///
    /// # Errors
    /// - [`Error::Config`](crate::error::Error::Config) if the configuration
    ///   is invalid or `genes == 0`
    /// - [`Error::Fitness`](crate::error::Error::Fitness) if the initial
    ///   evaluation fails
    pub fn initialize(config: PopulationConfig, fitness: F, genes: usize) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::initialize_with_rng(config, fitness, genes, &mut rng)
    }

    /// Same as [`initialize`](Self::initialize) with an explicit randomness
    /// source. `config.seed` is ignored.
    ///
    /// Each deme receives its own generator derived from `rng`, so demes
    /// never share a stream.
    pub fn initialize_with_rng<R: Rng>(
        config: PopulationConfig,
        fitness: F,
        genes: usize,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        if genes == 0 {
            return Err(ConfigError::ZeroGenes.into());
        }

        let mut demes = Vec::with_capacity(config.demes);
        let mut rngs = Vec::with_capacity(config.demes);
        for _ in 0..config.demes {
            let mut deme_rng = derive_rng(rng);
            let mut deme = Deme::new(config.individuals);
            deme.initialize(genes, config.boundary, &mut deme_rng)?;
            deme.evaluate(&fitness)?;
            deme.sort();
            demes.push(deme);
            rngs.push(deme_rng);
        }

        let best = leader_of(&demes[0]).clone();
        let mut population = Self {
            config,
            fitness,
            genes,
            demes,
            rngs,
            best,
            generation: 0,
        };
        population.find_best();

        tracing::info!(
            demes = population.config.demes,
            individuals = population.config.individuals,
            genes,
            best_fitness = population.best.fitness,
            "population initialized"
        );
        Ok(population)
    }

    /// Drives every deme through one generation, then updates the best.
    ///
    /// A fitness failure aborts the call and the generation counter is not
    /// advanced. The failing deme is left as it was before the call, while
    /// demes that already finished keep their new generation; the best is
    /// still ratcheted over every current leader before the error returns.
    pub fn enhance(&mut self) -> Result<()> {
        if let Err(e) = self.drive_demes() {
            let improved = self.find_best();
            tracing::warn!(
                generation = self.generation + 1,
                best_fitness = self.best.fitness,
                improved,
                error = %e,
                "generation failed"
            );
            return Err(e);
        }
        self.generation += 1;
        let improved = self.find_best();
        tracing::debug!(
            generation = self.generation,
            best_fitness = self.best.fitness,
            improved,
            "generation complete"
        );
        Ok(())
    }

    /// Runs [`enhance`](Self::enhance) `generations` times.
    pub fn evolve(&mut self, generations: usize) -> Result<EvolutionResult> {
        let mut fitness_history = Vec::with_capacity(generations + 1);
        fitness_history.push(self.best.fitness);
        for _ in 0..generations {
            self.enhance()?;
            fitness_history.push(self.best.fitness);
        }
        Ok(EvolutionResult {
            best: self.best.clone(),
            best_fitness: self.best.fitness,
            generations: self.generation,
            fitness_history,
        })
    }

    /// Replaces the best with the strongest deme leader if it is strictly
    /// better. Returns whether the best changed.
    pub fn find_best(&mut self) -> bool {
        let candidate = self
            .demes
            .iter()
            .filter_map(Deme::leader)
            .min_by(|a, b| {
                a.fitness
                    .partial_cmp(&b.fitness)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        match candidate {
            Some(leader) if leader.fitness < self.best.fitness => {
                self.best = leader.clone();
                true
            }
            _ => false,
        }
    }

    #[cfg(feature = "parallel")]
    fn drive_demes(&mut self) -> Result<()> {
        let config = &self.config;
        let fitness = &self.fitness;
        if config.parallel {
            self.demes
                .par_iter_mut()
                .zip(self.rngs.par_iter_mut())
                .try_for_each(|(deme, rng)| deme.generation(config, fitness, rng))
        } else {
            drive_sequential(config, fitness, &mut self.demes, &mut self.rngs)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn drive_demes(&mut self) -> Result<()> {
        drive_sequential(&self.config, &self.fitness, &mut self.demes, &mut self.rngs)
    }
}

impl<F> Population<F> {
    /// The best individual seen so far.
    pub fn best(&self) -> &Individual {
        &self.best
    }

    /// All demes, in creation order.
    pub fn demes(&self) -> &[Deme] {
        &self.demes
    }

    /// Configuration the population was initialized with.
    pub fn config(&self) -> &PopulationConfig {
        &self.config
    }

    /// Genome length shared by every individual.
    pub fn genes(&self) -> usize {
        self.genes
    }

    /// Number of completed [`enhance`](Population::enhance) calls.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The fitness function every deme is evaluated against.
    pub fn fitness_function(&self) -> &F {
        &self.fitness
    }
}

fn drive_sequential<F: FitnessFunction>(
    config: &PopulationConfig,
    fitness: &F,
    demes: &mut [Deme],
    rngs: &mut [StdRng],
) -> Result<()> {
    for (deme, rng) in demes.iter_mut().zip(rngs.iter_mut()) {
        deme.generation(config, fitness, rng)?;
    }
    Ok(())
}

fn leader_of(deme: &Deme) -> &Individual {
    deme.leader()
        .expect("initialized deme holds at least one individual")
}
