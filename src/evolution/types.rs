//! Core data types: [`Individual`] and the [`FitnessFunction`] contract.

use crate::error::FitnessError;
use std::error::Error as StdError;

/// A candidate solution: a fixed-length real genome plus its fitness.
///
/// Lower fitness is better (minimization). A freshly created individual
/// carries `f64::INFINITY` as its fitness until it is evaluated, so an
/// unevaluated individual never beats an evaluated one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    /// Gene values.
    pub genome: Vec<f64>,

    /// Last evaluated fitness, or `f64::INFINITY` when stale.
    pub fitness: f64,
}

impl Individual {
    /// Creates an unevaluated individual.
    pub fn new(genome: Vec<f64>) -> Self {
        Self {
            genome,
            fitness: f64::INFINITY,
        }
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genome.len()
    }

    /// Whether the genome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genome.is_empty()
    }

    /// Evaluates the genome and stores the resulting fitness.
    pub fn evaluate<F: FitnessFunction + ?Sized>(&mut self, fitness: &F) -> Result<(), FitnessError> {
        self.fitness = fitness.evaluate(&self.genome)?;
        Ok(())
    }
}

/// Maps a genome to a real-valued score. Lower is better.
///
/// Any `Fn(&[f64]) -> f64` implements this trait. Wrap a function returning
/// `Result` with [`fallible`] to surface its errors.
///
/// # Thread Safety
///
/// `FitnessFunction` must be `Send + Sync` because demes may be evolved in
/// parallel using rayon, all sharing the same function.
///
/// # Implementing
///
/// ```
/// use u_evolve::evolution::FitnessFunction;
///
/// fn sphere(genome: &[f64]) -> f64 {
///     genome.iter().map(|x| x * x).sum()
/// }
///
/// assert_eq!(sphere.evaluate(&[1.0, 2.0]).unwrap(), 5.0);
/// ```
pub trait FitnessFunction: Send + Sync {
    /// Scores a genome.
    ///
    /// A NaN score is reported as [`FitnessError::NotANumber`].
    fn evaluate(&self, genome: &[f64]) -> Result<f64, FitnessError>;
}

impl<F> FitnessFunction for F
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn evaluate(&self, genome: &[f64]) -> Result<f64, FitnessError> {
        reject_nan(self(genome))
    }
}

/// Adaptor for fitness functions that can fail.
///
/// Created by [`fallible`].
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(F);

/// Wraps a `Fn(&[f64]) -> Result<f64, E>` as a [`FitnessFunction`].
///
/// ```
/// use u_evolve::evolution::{fallible, FitnessFunction};
///
/// let checked = fallible(|genome: &[f64]| {
///     if genome.is_empty() {
///         Err("no genes")
///     } else {
///         Ok(genome[0].abs())
///     }
/// });
/// assert_eq!(checked.evaluate(&[-3.0]).unwrap(), 3.0);
/// assert!(checked.evaluate(&[]).is_err());
/// ```
pub fn fallible<F, E>(f: F) -> Fallible<F>
where
    F: Fn(&[f64]) -> Result<f64, E> + Send + Sync,
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    Fallible(f)
}

impl<F, E> FitnessFunction for Fallible<F>
where
    F: Fn(&[f64]) -> Result<f64, E> + Send + Sync,
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    fn evaluate(&self, genome: &[f64]) -> Result<f64, FitnessError> {
        let value = (self.0)(genome).map_err(|e| FitnessError::Evaluation(e.into()))?;
        reject_nan(value)
    }
}

fn reject_nan(value: f64) -> Result<f64, FitnessError> {
    if value.is_nan() {
        return Err(FitnessError::NotANumber);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere(genome: &[f64]) -> f64 {
        genome.iter().map(|x| x * x).sum()
    }

    #[test]
    fn test_new_individual_is_unevaluated() {
        let ind = Individual::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(ind.len(), 3);
        assert!(!ind.is_empty());
        assert!(Individual::new(Vec::new()).is_empty());
        assert!(ind.fitness.is_infinite());
    }

    #[test]
    fn test_evaluate_sets_fitness() {
        let mut ind = Individual::new(vec![1.0, 2.0]);
        ind.evaluate(&sphere).unwrap();
        assert!((ind.fitness - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_closure_fitness() {
        let offset = 2.0;
        let f = move |genome: &[f64]| genome.iter().sum::<f64>() + offset;
        assert!((f.evaluate(&[1.0, 1.0]).unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_nan_is_rejected() {
        let f = |_: &[f64]| f64::NAN;
        assert!(matches!(f.evaluate(&[0.0]), Err(FitnessError::NotANumber)));
    }

    #[test]
    fn test_infinite_fitness_is_allowed() {
        let f = |_: &[f64]| f64::INFINITY;
        assert_eq!(f.evaluate(&[0.0]).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_fallible_propagates_error() {
        let f = fallible(|_: &[f64]| -> Result<f64, String> { Err("solver diverged".to_string()) });
        match f.evaluate(&[1.0]) {
            Err(FitnessError::Evaluation(e)) => assert_eq!(e.to_string(), "solver diverged"),
            other => panic!("expected evaluation error, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_evaluation_keeps_previous_fitness() {
        let mut ind = Individual::new(vec![1.0]);
        ind.fitness = 7.0;
        let f = |_: &[f64]| f64::NAN;
        assert!(ind.evaluate(&f).is_err());
        assert_eq!(ind.fitness, 7.0);
    }
}
