//! Position-wise crossover operators.
//!
//! - [`blend_crossover`]: arithmetic blend for [`NumericGene`] genomes. Each
//!   child gene is `p1 + u·(p2 − p1)` with an independent `u ~ U[0, 1)` per
//!   position, so it always lies between the two parent genes.
//! - [`uniform_crossover`]: categorical genomes. Each child gene is copied
//!   from one parent chosen by a fair coin.
//!
//! Both preserve genome length and leave the parents untouched.

use super::operators::NumericGene;
use crate::error::OperatorError;
use rand::Rng;

/// Arithmetic blend crossover.
///
/// # Errors
/// - [`OperatorError::EmptyGenome`] if the parents are empty
/// - [`OperatorError::LengthMismatch`] if the parents differ in length
///
/// # Complexity
/// O(n)
pub fn blend_crossover<T: NumericGene, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> Result<Vec<T>, OperatorError> {
    check_parents(parent1.len(), parent2.len())?;

    Ok(parent1
        .iter()
        .zip(parent2)
        .map(|(&a, &b)| a.lerp(b, rng.random::<f64>()))
        .collect())
}

/// Uniform crossover: every gene comes from either parent with equal
/// probability.
///
/// # Errors
/// - [`OperatorError::EmptyGenome`] if the parents are empty
/// - [`OperatorError::LengthMismatch`] if the parents differ in length
///
/// # Complexity
/// O(n)
pub fn uniform_crossover<T: Clone, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> Result<Vec<T>, OperatorError> {
    check_parents(parent1.len(), parent2.len())?;

    Ok(parent1
        .iter()
        .zip(parent2)
        .map(|(a, b)| if rng.random_bool(0.5) { a.clone() } else { b.clone() })
        .collect())
}

fn check_parents(left: usize, right: usize) -> Result<(), OperatorError> {
    if left != right {
        return Err(OperatorError::LengthMismatch { left, right });
    }
    if left == 0 {
        return Err(OperatorError::EmptyGenome);
    }
    Ok(())
}
