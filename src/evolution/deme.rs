//! A deme: one independently evolving sub-population.
//!
//! One generation walks the deme through a fixed sequence of states:
//!
//! ```text
//! Stable ─crossover→ Crossed ─mutate→ Mutated ─evaluate→ Evaluated
//!        ─tournament→ Selected ─sort→ Sorted (= Stable)
//! ```
//!
//! The deme holds exactly `size` individuals while stable and grows by
//! `couples × offsprings` between crossover and selection.

use super::config::{boundary_span, PopulationConfig};
use super::crossover::blend_crossover;
use super::operators::{check_normal_params, normal_mutation};
use super::selection::tournament_survivors;
use super::types::{FitnessFunction, Individual};
use crate::error::{ConfigError, FitnessError, OperatorError, Result};
use rand::distr::Distribution;
use rand::Rng;

/// An ordered set of individuals evolved as one unit.
///
/// After [`sort`](Self::sort) the first individual is the deme's leader.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deme {
    size: usize,
    individuals: Vec<Individual>,
}

impl Deme {
    /// Creates an empty deme that will hold `size` individuals.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            individuals: Vec::with_capacity(size),
        }
    }

    /// Target number of individuals between generations.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Current members, in deme order.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// The first individual. After sorting this is the deme's best.
    pub fn leader(&self) -> Option<&Individual> {
        self.individuals.first()
    }

    /// Fills the deme with `size` random individuals whose genes are drawn
    /// uniformly from `[-boundary, boundary]`.
    ///
    /// Any previous members are discarded. Fitness is left unevaluated.
    ///
    /// # Errors
    /// - [`ConfigError::ZeroIndividuals`] if the deme size is 0
    /// - [`ConfigError::ZeroGenes`] if `genes == 0`
    /// - [`ConfigError::InvalidBoundary`] if `boundary` is negative, or if the
    ///   range `[-boundary, boundary]` is not finitely wide
    pub fn initialize<R: Rng>(
        &mut self,
        genes: usize,
        boundary: f64,
        rng: &mut R,
    ) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroIndividuals);
        }
        if genes == 0 {
            return Err(ConfigError::ZeroGenes);
        }
        let span = boundary_span(boundary)?;

        self.individuals = (0..self.size)
            .map(|_| {
                let genome = (0..genes)
                    .map(|_| span.sample(rng))
                    .collect();
                Individual::new(genome)
            })
            .collect();
        Ok(())
    }

    /// Evaluates every member with `fitness`.
    ///
    /// All scores are computed before any is stored, so a failure leaves
    /// every member's fitness unchanged.
    pub fn evaluate<F: FitnessFunction + ?Sized>(&mut self, fitness: &F) -> Result<(), FitnessError> {
        let scores = self
            .individuals
            .iter()
            .map(|ind| fitness.evaluate(&ind.genome))
            .collect::<Result<Vec<f64>, FitnessError>>()?;

        for (ind, score) in self.individuals.iter_mut().zip(scores) {
            ind.fitness = score;
        }
        Ok(())
    }

    /// Draws `couples` parent pairs uniformly (independent draws, a pair may
    /// repeat an individual) and appends `offsprings` blend-crossover children
    /// per pair.
    ///
    /// Parents are drawn from the members present before the call. Children
    /// are unevaluated.
    ///
    /// # Errors
    /// - [`OperatorError::EmptyPool`] if the deme has no members and `couples > 0`
    pub fn crossover<R: Rng>(
        &mut self,
        couples: usize,
        offsprings: usize,
        rng: &mut R,
    ) -> Result<(), OperatorError> {
        if couples == 0 || offsprings == 0 {
            return Ok(());
        }
        let n = self.individuals.len();
        if n == 0 {
            return Err(OperatorError::EmptyPool);
        }

        let mut children = Vec::with_capacity(couples * offsprings);
        for _ in 0..couples {
            let p1 = &self.individuals[rng.random_range(0..n)];
            let p2 = &self.individuals[rng.random_range(0..n)];
            for _ in 0..offsprings {
                children.push(Individual::new(blend_crossover(&p1.genome, &p2.genome, rng)?));
            }
        }
        self.individuals.extend(children);
        Ok(())
    }

    /// Applies normal mutation with `rate` and `std` to every member.
    ///
    /// Parameters are checked before any genome is touched.
    pub fn mutate<R: Rng>(&mut self, rate: f64, std: f64, rng: &mut R) -> Result<(), OperatorError> {
        for ind in &self.individuals {
            check_normal_params(ind.genome.len(), rate, std)?;
        }
        for ind in &mut self.individuals {
            normal_mutation(&mut ind.genome, rate, std, rng)?;
        }
        Ok(())
    }

    /// Restores the deme to `size` members by running `size` independent
    /// tournaments of `contestants` over the current pool.
    pub fn tournament<R: Rng>(&mut self, contestants: usize, rng: &mut R) -> Result<(), OperatorError> {
        self.individuals = tournament_survivors(&self.individuals, contestants, self.size, rng)?;
        Ok(())
    }

    /// Sorts members by ascending fitness (best first). Stable for ties.
    pub fn sort(&mut self) {
        self.individuals.sort_by(|a, b| {
            a.fitness
                .partial_cmp(&b.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    /// Runs one full generation: crossover, mutate, evaluate, select, sort.
    ///
    /// All-or-nothing: if any step fails the deme is restored to its state
    /// before the call and the error is returned.
    pub fn generation<F: FitnessFunction + ?Sized, R: Rng>(
        &mut self,
        config: &PopulationConfig,
        fitness: &F,
        rng: &mut R,
    ) -> Result<()> {
        let snapshot = self.individuals.clone();
        let outcome = self.run_generation(config, fitness, rng);
        if outcome.is_err() {
            self.individuals = snapshot;
        }
        outcome
    }

    fn run_generation<F: FitnessFunction + ?Sized, R: Rng>(
        &mut self,
        config: &PopulationConfig,
        fitness: &F,
        rng: &mut R,
    ) -> Result<()> {
        self.crossover(config.couples, config.offsprings, rng)?;
        self.mutate(config.rate, config.std_dev, rng)?;
        self.evaluate(fitness)?;
        self.tournament(config.contestants, rng)?;
        self.sort();
        tracing::trace!(
            size = self.individuals.len(),
            leader = self.leader().map(|ind| ind.fitness),
            "deme generation complete"
        );
        Ok(())
    }
}
